pub mod debounce;
pub mod time;
