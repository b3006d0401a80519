pub mod clock;
pub mod domain;
pub mod ports;
pub mod resources;
pub mod upstream;

pub use clock::{Clock, ManualClock, SystemClock};
pub use resources::{ResourceCaches, ResourceOperations, ResourceService};
