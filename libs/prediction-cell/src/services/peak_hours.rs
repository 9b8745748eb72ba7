use shared_models::Patient;

use crate::models::PeakHourForecast;

/// Forecasts the next rush. Implementations must be pure over the given patients.
pub trait PeakHourForecaster: Send + Sync {
    fn forecast(&self, patients: &[Patient]) -> PeakHourForecast;
}

/// Fixed lunch-hour heuristic: the window, confidence and advice never change,
/// the expected count is the current patient total plus a constant surge.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticPeakForecaster;

impl StaticPeakForecaster {
    pub const PEAK_WINDOW: &'static str = "11:00 AM - 12:00 PM";
    pub const EXPECTED_SURGE: usize = 5;
    pub const CONFIDENCE: u8 = 82;
    pub const REASON: &'static str = "Typical lunch hour surge in urgent care visits";
}

impl PeakHourForecaster for StaticPeakForecaster {
    fn forecast(&self, patients: &[Patient]) -> PeakHourForecast {
        PeakHourForecast {
            next_peak_hour: Self::PEAK_WINDOW.to_string(),
            expected_patient_count: patients.len() + Self::EXPECTED_SURGE,
            confidence: Self::CONFIDENCE,
            reason: Self::REASON.to_string(),
            recommendations: vec![
                "Call backup staff for peak hour".to_string(),
                "Reduce appointment duration for non-emergency cases".to_string(),
                "Have emergency protocols ready".to_string(),
            ],
        }
    }
}
