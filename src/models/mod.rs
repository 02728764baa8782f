pub mod dashboard;
pub mod error;
pub mod graph;
pub mod measurement;
pub mod menu;
pub mod view_state;

pub use dashboard::{Dashboard, DashboardAction, RequestPlan};
pub use error::AppError;
pub use view_state::{Mode, Unit, ViewState};
