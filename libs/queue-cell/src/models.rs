use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use shared_models::{Doctor, DoctorStatus, Patient};

/// Headline numbers for the front-desk board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueStats {
    pub total_patients: usize,
    pub waiting_patients: usize,
    /// Rounded mean of `estimated_wait` over waiting patients only.
    pub avg_wait_time: u32,
    pub emergency_count: usize,
    pub completed_today: usize,
}

/// `GET /queue` payload: the stats plus everyone still in the building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStatus {
    #[serde(flatten)]
    pub stats: QueueStats,
    pub patients: Vec<Patient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueOverview {
    pub total_patients: usize,
    /// Rounded mean over every patient, finished ones included.
    pub average_wait_time: u32,
    pub urgent_cases: usize,
    pub completed_cases: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorUtilization {
    pub name: String,
    pub specialization: String,
    pub utilization: f64,
    pub status: DoctorStatus,
    pub current_patients: u32,
    pub max_capacity: u32,
}

impl From<&Doctor> for DoctorUtilization {
    fn from(doctor: &Doctor) -> Self {
        Self {
            name: doctor.name.clone(),
            specialization: doctor.specialization.clone(),
            utilization: doctor.utilization_percentage(),
            status: doctor.status,
            current_patients: doctor.current_patients,
            max_capacity: doctor.max_capacity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeverityDistribution {
    pub mild: usize,
    pub moderate: usize,
    pub severe: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueAnalytics {
    pub overview: QueueOverview,
    pub doctor_utilization: Vec<DoctorUtilization>,
    pub symptom_distribution: BTreeMap<String, usize>,
    pub severity_distribution: SeverityDistribution,
}
