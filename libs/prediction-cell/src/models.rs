use serde::{Deserialize, Serialize};

use shared_models::{Doctor, Severity};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DoctorSummary {
    pub id: String,
    pub name: String,
    pub specialization: String,
}

impl From<&Doctor> for DoctorSummary {
    fn from(doctor: &Doctor) -> Self {
        Self {
            id: doctor.id.clone(),
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitTimeExplanation {
    pub base_wait_time: u32,
    pub emergency_factor: i32,
    /// Severity weight minus one, rounded to two decimals.
    pub severity_factor: f64,
    pub doctor_utilization_factor: u32,
    /// Combined estimate before jitter, never below the two minute floor.
    pub pre_jitter_estimate: u32,
    pub jitter: i32,
    pub total_factors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WaitTimePrediction {
    pub patient_id: String,
    pub estimated_wait_time: u32,
    pub confidence: u8,
    pub explanation: WaitTimeExplanation,
    pub recommendation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_doctor: Option<DoctorSummary>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueAllocation {
    pub patient_id: String,
    pub patient_name: String,
    pub symptom: String,
    pub priority: u32,
    pub is_emergency: bool,
    pub severity: Severity,
    /// `None` only when the clinic has no doctors at all.
    pub recommended_doctor: Option<DoctorSummary>,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QueueOptimization {
    pub current_queue_length: usize,
    pub optimized_order: Vec<String>,
    pub optimized_allocations: Vec<QueueAllocation>,
    pub total_wait_time_reduction: u32,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PeakHourForecast {
    pub next_peak_hour: String,
    pub expected_patient_count: usize,
    pub confidence: u8,
    pub reason: String,
    pub recommendations: Vec<String>,
}
