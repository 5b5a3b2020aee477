//! HTTP handlers for the campus guide service.

pub mod catalog;
pub mod guide;
pub mod health;
pub mod metrics;

pub use catalog::{college_info, list_locations};
pub use guide::campus_guide;
pub use health::health_check;
pub use self::metrics::metrics;
