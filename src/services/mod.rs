pub mod api;

pub use api::{ApiConfig, SensorApi};
