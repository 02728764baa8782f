pub mod graph;
pub mod menu;
pub mod overview;
pub mod rate_display;

pub use graph::BarGraph;
pub use menu::Menu;
pub use overview::Overview;
pub use rate_display::RateDisplay;
