pub mod logger;
pub mod model;
pub mod report;

pub use logger::{Logger, TracingLogger};
pub use model::registry::{RsvpCandidate, RsvpCounts, RsvpRegistry};
pub use model::status::RsvpStatus;
