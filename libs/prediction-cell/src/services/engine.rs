use std::sync::Arc;

use tracing::instrument;

use shared_config::AppConfig;
use shared_models::{Doctor, Patient};

use crate::error::PredictionError;
use crate::models::{PeakHourForecast, QueueOptimization, WaitTimePrediction};
use crate::services::jitter::{FixedJitter, JitterSource, ThreadRngJitter};
use crate::services::peak_hours::{PeakHourForecaster, StaticPeakForecaster};
use crate::services::{optimizer, wait_time};

/// Stateless scoring over a caller-supplied snapshot. Never touches the store.
#[derive(Clone)]
pub struct QueuePredictionEngine {
    jitter: Arc<dyn JitterSource>,
    forecaster: Arc<dyn PeakHourForecaster>,
}

impl Default for QueuePredictionEngine {
    fn default() -> Self {
        Self::new(Arc::new(ThreadRngJitter), Arc::new(StaticPeakForecaster))
    }
}

impl QueuePredictionEngine {
    pub fn new(jitter: Arc<dyn JitterSource>, forecaster: Arc<dyn PeakHourForecaster>) -> Self {
        Self { jitter, forecaster }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        if config.prediction_jitter {
            Self::default()
        } else {
            Self::default().with_jitter(Arc::new(FixedJitter(0)))
        }
    }

    pub fn with_jitter(mut self, jitter: Arc<dyn JitterSource>) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn with_forecaster(mut self, forecaster: Arc<dyn PeakHourForecaster>) -> Self {
        self.forecaster = forecaster;
        self
    }

    #[instrument(skip(self, patients, doctors))]
    pub fn predict_wait_time(
        &self,
        patient_id: &str,
        patients: &[Patient],
        doctors: &[Doctor],
    ) -> Result<WaitTimePrediction, PredictionError> {
        wait_time::predict(patient_id, patients, doctors, self.jitter.as_ref())
    }

    pub fn optimize_queue(&self, patients: &[Patient], doctors: &[Doctor]) -> QueueOptimization {
        optimizer::optimize(patients, doctors)
    }

    pub fn forecast_peak_hours(&self, patients: &[Patient]) -> PeakHourForecast {
        self.forecaster.forecast(patients)
    }
}
