pub mod operation;
pub mod params;
pub mod resource_service;
pub mod shaping;

pub use operation::ResourceOperations;
pub use resource_service::{ResourceCaches, ResourceService};
