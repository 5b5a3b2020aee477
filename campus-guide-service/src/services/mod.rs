pub mod guide;
pub mod metrics;
pub mod providers;

pub use guide::CampusGuide;
