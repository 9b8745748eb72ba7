use std::ops::RangeInclusive;

use tracing::debug;

use shared_models::{Doctor, DoctorStatus, Patient, Severity};

use crate::error::PredictionError;
use crate::models::{DoctorSummary, WaitTimeExplanation, WaitTimePrediction};
use crate::services::jitter::JitterSource;

/// Base wait used when nobody is waiting.
pub const EMPTY_QUEUE_BASE_WAIT: u32 = 5;
pub const MIN_ESTIMATE_MINUTES: u32 = 2;
pub const JITTER_RANGE: RangeInclusive<i32> = -2..=2;
pub const EMERGENCY_ADJUSTMENT: i32 = -5;
pub const SEVERITY_MINUTES: f64 = 5.0;
pub const UTILIZATION_MINUTES: f64 = 8.0;
pub const BACKUP_THRESHOLD_MINUTES: u32 = 30;
pub const HIGH_UTILIZATION: f64 = 0.8;

const BASE_CONFIDENCE: u8 = 65;
const MAX_SAMPLE_CONFIDENCE: usize = 35;
const MAX_CONFIDENCE: u8 = 95;

pub fn severity_weight(severity: Severity) -> f64 {
    match severity {
        Severity::Mild => 1.0,
        Severity::Moderate => 1.2,
        Severity::Severe => 1.5,
    }
}

/// Ceiling of the mean wait across `waiting`.
pub fn base_wait_time(waiting: &[&Patient]) -> u32 {
    if waiting.is_empty() {
        return EMPTY_QUEUE_BASE_WAIT;
    }
    let total: u64 = waiting.iter().map(|p| u64::from(p.estimated_wait)).sum();
    let count = waiting.len() as u64;
    ((total + count - 1) / count) as u32
}

/// Share of doctors marked busy. Zero for an empty roster.
pub fn busy_fraction(doctors: &[Doctor]) -> f64 {
    if doctors.is_empty() {
        return 0.0;
    }
    let busy = doctors.iter().filter(|d| d.status == DoctorStatus::Busy).count();
    busy as f64 / doctors.len() as f64
}

pub fn utilization_factor(busy_fraction: f64) -> u32 {
    (busy_fraction * UTILIZATION_MINUTES).ceil() as u32
}

/// Grows with the number of waiting patients, capped below certainty.
pub fn confidence(waiting_count: usize) -> u8 {
    let sample = waiting_count.saturating_mul(2).min(MAX_SAMPLE_CONFIDENCE) as u8;
    (BASE_CONFIDENCE + sample).min(MAX_CONFIDENCE)
}

pub fn combine_factors(
    base_wait_time: u32,
    emergency_factor: i32,
    severity_factor: f64,
    utilization_factor: u32,
) -> u32 {
    let raw = f64::from(base_wait_time)
        + f64::from(emergency_factor)
        + severity_factor * SEVERITY_MINUTES
        + f64::from(utilization_factor);
    let rounded = raw.round();
    if rounded < f64::from(MIN_ESTIMATE_MINUTES) {
        MIN_ESTIMATE_MINUTES
    } else {
        rounded as u32
    }
}

/// Available doctor with spare capacity and the lightest load; the first wins ties.
pub fn suggest_doctor(doctors: &[Doctor]) -> Option<&Doctor> {
    doctors
        .iter()
        .filter(|d| d.can_take_patient())
        .min_by_key(|d| d.current_patients)
}

fn percentage(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

fn recommendation(
    patient: &Patient,
    estimated_wait: u32,
    busy_fraction: f64,
    suggested: Option<&Doctor>,
) -> String {
    if patient.is_emergency {
        format!(
            "⚠️ EMERGENCY CASE: Allocate to nearest available doctor immediately. Patient: {} - {}",
            patient.full_name(),
            patient.symptom
        )
    } else if estimated_wait > BACKUP_THRESHOLD_MINUTES {
        format!(
            "Consider calling backup doctors. Current wait time is higher than target ({}min > {}min target).",
            estimated_wait, BACKUP_THRESHOLD_MINUTES
        )
    } else if busy_fraction > HIGH_UTILIZATION {
        format!(
            "Doctor capacity at {}%. Consider scheduling less urgent cases later.",
            percentage(busy_fraction)
        )
    } else {
        format!(
            "Optimal allocation ready. Assign to {}.",
            suggested.map(|d| d.name.as_str()).unwrap_or("available doctor")
        )
    }
}

pub fn predict(
    patient_id: &str,
    patients: &[Patient],
    doctors: &[Doctor],
    jitter: &dyn JitterSource,
) -> Result<WaitTimePrediction, PredictionError> {
    let patient = patients
        .iter()
        .find(|p| p.id == patient_id)
        .ok_or_else(|| PredictionError::NotFound(patient_id.to_string()))?;

    let waiting: Vec<&Patient> = patients.iter().filter(|p| p.is_waiting()).collect();

    let base = base_wait_time(&waiting);
    let emergency_factor = if patient.is_emergency { EMERGENCY_ADJUSTMENT } else { 0 };
    let severity_factor = severity_weight(patient.severity) - 1.0;
    let fraction = busy_fraction(doctors);
    let utilization = utilization_factor(fraction);

    let pre_jitter = combine_factors(base, emergency_factor, severity_factor, utilization);
    let offset = jitter.next_offset(JITTER_RANGE);
    let estimated_wait = pre_jitter.saturating_add_signed(offset);

    debug!(
        "Wait estimate for {}: base={} emergency={} severity={:.2} utilization={} -> {} (jitter {})",
        patient.id, base, emergency_factor, severity_factor, utilization, pre_jitter, offset
    );

    let suggested = suggest_doctor(doctors);
    if doctors.is_empty() {
        debug!("No doctors on the roster, utilization treated as zero");
    }

    let explanation = WaitTimeExplanation {
        base_wait_time: base,
        emergency_factor,
        severity_factor: (severity_factor * 100.0).round() / 100.0,
        doctor_utilization_factor: utilization,
        pre_jitter_estimate: pre_jitter,
        jitter: offset,
        total_factors: vec![
            format!("Queue length: {} patients", waiting.len()),
            format!("Doctor utilization: {}%", percentage(fraction)),
            format!("Patient severity: {}", patient.severity.as_str().to_uppercase()),
            if patient.is_emergency {
                "Priority: EMERGENCY".to_string()
            } else {
                "Standard priority".to_string()
            },
        ],
    };

    Ok(WaitTimePrediction {
        patient_id: patient.id.clone(),
        estimated_wait_time: estimated_wait,
        confidence: confidence(waiting.len()),
        recommendation: recommendation(patient, estimated_wait, fraction, suggested),
        suggested_doctor: suggested.map(DoctorSummary::from),
        explanation,
    })
}
