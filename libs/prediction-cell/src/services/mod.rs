pub mod engine;
pub mod jitter;
pub mod optimizer;
pub mod peak_hours;
pub mod wait_time;

pub use engine::QueuePredictionEngine;
pub use jitter::{FixedJitter, JitterSource, ThreadRngJitter};
pub use peak_hours::{PeakHourForecaster, StaticPeakForecaster};
