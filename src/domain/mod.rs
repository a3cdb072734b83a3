pub mod metrics;
pub mod task;

pub use metrics::*;
pub use task::*;
