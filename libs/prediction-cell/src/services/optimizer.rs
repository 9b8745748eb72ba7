use tracing::{debug, warn};

use shared_models::{Doctor, Patient, Severity};

use crate::models::{DoctorSummary, QueueAllocation, QueueOptimization};

pub const BASE_PRIORITY: u32 = 50;
pub const EMERGENCY_BOOST: u32 = 50;
pub const LONG_WAIT_THRESHOLD_MINUTES: u32 = 30;
pub const LONG_WAIT_BOOST: u32 = 10;
/// Flat estimate of minutes saved per allocated patient.
pub const REDUCTION_PER_ALLOCATION: u32 = 2;

const QUEUE_RECOMMENDATION: &str =
    "Follow this queue order to minimize overall wait times and improve patient outcomes.";

pub fn severity_boost(severity: Severity) -> u32 {
    match severity {
        Severity::Severe => 30,
        Severity::Moderate => 15,
        Severity::Mild => 5,
    }
}

pub fn priority_score(patient: &Patient) -> u32 {
    let mut score = BASE_PRIORITY;

    if patient.is_emergency {
        score += EMERGENCY_BOOST;
    }

    score += severity_boost(patient.severity);

    if patient.estimated_wait > LONG_WAIT_THRESHOLD_MINUTES {
        score += LONG_WAIT_BOOST;
    }

    score
}

/// First available doctor with spare capacity, otherwise the least loaded
/// doctor on the whole roster (first wins ties).
///
/// Loads are read from the snapshot as-is; allocations made earlier in the
/// same pass are not counted.
pub fn allocate_doctor(doctors: &[Doctor]) -> Option<&Doctor> {
    doctors
        .iter()
        .find(|d| d.can_take_patient())
        .or_else(|| doctors.iter().min_by_key(|d| d.current_patients))
}

pub fn allocation_reason(patient: &Patient) -> String {
    if patient.is_emergency {
        "Emergency priority".to_string()
    } else if patient.severity == Severity::Severe {
        "Severe case".to_string()
    } else {
        format!("Waiting for {} minutes", patient.estimated_wait)
    }
}

pub fn optimize(patients: &[Patient], doctors: &[Doctor]) -> QueueOptimization {
    let mut scored: Vec<(&Patient, u32)> = patients
        .iter()
        .filter(|p| p.is_waiting())
        .map(|p| (p, priority_score(p)))
        .collect();

    // stable: equal scores keep their input order
    scored.sort_by(|a, b| b.1.cmp(&a.1));

    if doctors.is_empty() && !scored.is_empty() {
        warn!("No doctors on the roster, {} waiting patients left unallocated", scored.len());
    }

    let allocations: Vec<QueueAllocation> = scored
        .iter()
        .map(|(patient, score)| QueueAllocation {
            patient_id: patient.id.clone(),
            patient_name: patient.full_name(),
            symptom: patient.symptom.clone(),
            priority: *score,
            is_emergency: patient.is_emergency,
            severity: patient.severity,
            recommended_doctor: allocate_doctor(doctors).map(DoctorSummary::from),
            reason: allocation_reason(patient),
        })
        .collect();

    let allocated = allocations
        .iter()
        .filter(|a| a.recommended_doctor.is_some())
        .count() as u32;

    debug!("Optimized queue of {} waiting patients, {} allocated", allocations.len(), allocated);

    QueueOptimization {
        current_queue_length: allocations.len(),
        optimized_order: allocations.iter().map(|a| a.patient_id.clone()).collect(),
        optimized_allocations: allocations,
        total_wait_time_reduction: allocated * REDUCTION_PER_ALLOCATION,
        recommendation: QUEUE_RECOMMENDATION.to_string(),
    }
}
