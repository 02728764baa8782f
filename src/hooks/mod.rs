pub mod use_dashboard;
pub mod use_hash;

pub use use_dashboard::use_dashboard;
pub use use_hash::use_hash_sync;
