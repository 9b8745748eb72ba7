use std::sync::Arc;
use chrono::{NaiveDate, Utc};

use shared_config::AppConfig;
use shared_models::{Doctor, DoctorStatus, Patient, PatientStatus, Severity};

pub struct TestConfig {
    pub ping_message: String,
    pub prediction_jitter: bool,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            ping_message: "pong".to_string(),
            prediction_jitter: false,
        }
    }
}

impl TestConfig {
    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            ping_message: self.ping_message.clone(),
            prediction_jitter: self.prediction_jitter,
            seed_demo_data: false,
            queue_tick_seconds: 0,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Builder for patients used across cell tests.
pub struct TestPatient {
    patient: Patient,
}

impl TestPatient {
    pub fn new(id: &str) -> Self {
        Self {
            patient: Patient {
                id: id.to_string(),
                first_name: "Test".to_string(),
                last_name: format!("Patient {}", id),
                email: format!("{}@example.com", id.to_lowercase()),
                phone: "+1-555-0100".to_string(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap_or_default(),
                gender: "other".to_string(),
                symptom: "Headache".to_string(),
                severity: Severity::Moderate,
                is_emergency: false,
                notes: String::new(),
                arrival_time: Utc::now(),
                estimated_wait: 10,
                status: PatientStatus::Waiting,
                doctor_id: None,
            },
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.patient.severity = severity;
        self
    }

    pub fn emergency(mut self) -> Self {
        self.patient.is_emergency = true;
        self
    }

    pub fn wait(mut self, minutes: u32) -> Self {
        self.patient.estimated_wait = minutes;
        self
    }

    pub fn status(mut self, status: PatientStatus) -> Self {
        self.patient.status = status;
        self
    }

    pub fn symptom(mut self, symptom: &str) -> Self {
        self.patient.symptom = symptom.to_string();
        self
    }

    pub fn build(self) -> Patient {
        self.patient
    }
}

pub struct TestDoctor {
    doctor: Doctor,
}

impl TestDoctor {
    pub fn new(id: &str) -> Self {
        Self {
            doctor: Doctor {
                id: id.to_string(),
                name: format!("Dr. {}", id),
                specialization: "General Medicine".to_string(),
                status: DoctorStatus::Available,
                current_patients: 0,
                max_capacity: 4,
                experience_years: 5,
                bio: String::new(),
                feedback: Vec::new(),
            },
        }
    }

    pub fn available(id: &str) -> Doctor {
        Self::new(id).build()
    }

    pub fn busy(id: &str) -> Doctor {
        Self::new(id).status(DoctorStatus::Busy).build()
    }

    pub fn status(mut self, status: DoctorStatus) -> Self {
        self.doctor.status = status;
        self
    }

    pub fn load(mut self, current_patients: u32, max_capacity: u32) -> Self {
        self.doctor.current_patients = current_patients;
        self.doctor.max_capacity = max_capacity;
        self
    }

    pub fn build(self) -> Doctor {
        self.doctor
    }
}

/// `count` waiting patients with the given wait, ids `W001..`.
pub fn waiting_patients(count: usize, wait: u32) -> Vec<Patient> {
    (1..=count)
        .map(|i| TestPatient::new(&format!("W{:03}", i)).wait(wait).build())
        .collect()
}
