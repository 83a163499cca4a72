mod model;
mod writer;

pub use model::ActivityEvent;
pub use writer::ActivityLog;
