pub mod decay;
pub mod stats;

pub use decay::QueueDecayWorker;
pub use stats::{queue_analytics, queue_stats};
