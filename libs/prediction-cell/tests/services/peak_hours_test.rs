use std::sync::Arc;

use prediction_cell::*;
use shared_models::Patient;
use shared_utils::test_utils::waiting_patients;

#[test]
fn test_static_forecast_is_fixed_point() {
    let patients = waiting_patients(7, 12);

    let forecast = QueuePredictionEngine::default().forecast_peak_hours(&patients);

    assert_eq!(
        forecast,
        PeakHourForecast {
            next_peak_hour: "11:00 AM - 12:00 PM".to_string(),
            expected_patient_count: 12,
            confidence: 82,
            reason: "Typical lunch hour surge in urgent care visits".to_string(),
            recommendations: vec![
                "Call backup staff for peak hour".to_string(),
                "Reduce appointment duration for non-emergency cases".to_string(),
                "Have emergency protocols ready".to_string(),
            ],
        }
    );
}

#[test]
fn test_static_forecast_with_no_patients() {
    let forecast = StaticPeakForecaster.forecast(&[]);

    assert_eq!(forecast.expected_patient_count, StaticPeakForecaster::EXPECTED_SURGE);
}

struct DoublingForecaster;

impl PeakHourForecaster for DoublingForecaster {
    fn forecast(&self, patients: &[Patient]) -> PeakHourForecast {
        PeakHourForecast {
            next_peak_hour: "05:00 PM - 06:00 PM".to_string(),
            expected_patient_count: patients.len() * 2,
            confidence: 60,
            reason: "After-work surge".to_string(),
            recommendations: Vec::new(),
        }
    }
}

#[test]
fn test_forecaster_can_be_swapped() {
    let engine = QueuePredictionEngine::default().with_forecaster(Arc::new(DoublingForecaster));

    let forecast = engine.forecast_peak_hours(&waiting_patients(4, 10));

    assert_eq!(forecast.expected_patient_count, 8);
    assert_eq!(forecast.next_peak_hour, "05:00 PM - 06:00 PM");
}
