use std::collections::BTreeMap;

use shared_models::{Doctor, Patient, PatientStatus, Severity};

use crate::models::{
    DoctorUtilization, QueueAnalytics, QueueOverview, QueueStats, SeverityDistribution,
};

fn rounded_mean_wait<'a>(patients: impl Iterator<Item = &'a Patient>) -> u32 {
    let (count, total) = patients.fold((0u64, 0u64), |(count, total), p| {
        (count + 1, total + u64::from(p.estimated_wait))
    });

    if count == 0 {
        return 0;
    }
    (total as f64 / count as f64).round() as u32
}

pub fn queue_stats(patients: &[Patient]) -> QueueStats {
    let waiting: Vec<&Patient> = patients.iter().filter(|p| p.is_waiting()).collect();

    QueueStats {
        total_patients: patients.len(),
        waiting_patients: waiting.len(),
        avg_wait_time: rounded_mean_wait(waiting.into_iter()),
        emergency_count: patients.iter().filter(|p| p.is_emergency).count(),
        completed_today: patients
            .iter()
            .filter(|p| p.status == PatientStatus::Completed)
            .count(),
    }
}

pub fn queue_analytics(patients: &[Patient], doctors: &[Doctor]) -> QueueAnalytics {
    let overview = QueueOverview {
        total_patients: patients.len(),
        average_wait_time: rounded_mean_wait(patients.iter()),
        urgent_cases: patients.iter().filter(|p| p.is_emergency).count(),
        completed_cases: patients
            .iter()
            .filter(|p| p.status == PatientStatus::Completed)
            .count(),
    };

    let mut symptom_distribution = BTreeMap::new();
    let mut severity_distribution = SeverityDistribution::default();
    for patient in patients {
        *symptom_distribution.entry(patient.symptom.clone()).or_insert(0) += 1;
        match patient.severity {
            Severity::Mild => severity_distribution.mild += 1,
            Severity::Moderate => severity_distribution.moderate += 1,
            Severity::Severe => severity_distribution.severe += 1,
        }
    }

    QueueAnalytics {
        overview,
        doctor_utilization: doctors.iter().map(DoctorUtilization::from).collect(),
        symptom_distribution,
        severity_distribution,
    }
}
