pub mod guide;
pub mod location;

pub use guide::{GuideRequest, GuideResponse, LocationRef};
pub use location::{College, Location};
