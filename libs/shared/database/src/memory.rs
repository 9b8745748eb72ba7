use async_trait::async_trait;
use chrono::Utc;
use rand::Rng;
use tokio::sync::RwLock;
use tracing::{debug, info};

use shared_models::{
    Doctor, DoctorStatus, DoctorUpdate, Hospital, NewPatient, Patient, PatientStatus,
    PatientUpdate,
};

use crate::error::StoreError;
use crate::seed;
use crate::store::{ClinicSnapshot, ClinicStore};

const MIN_INITIAL_WAIT: u32 = 5;
const MAX_INITIAL_WAIT: u32 = 34;

#[derive(Debug, Default)]
struct StoreState {
    patients: Vec<Patient>,
    doctors: Vec<Doctor>,
    hospitals: Vec<Hospital>,
}

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<StoreState>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data(patients: Vec<Patient>, doctors: Vec<Doctor>, hospitals: Vec<Hospital>) -> Self {
        Self {
            state: RwLock::new(StoreState {
                patients,
                doctors,
                hospitals,
            }),
        }
    }

    /// Demo hospitals, doctors and patients.
    pub fn seeded() -> Self {
        Self::with_data(seed::patients(), seed::doctors(), seed::hospitals())
    }
}

fn next_patient_id(patients: &[Patient]) -> String {
    format!("P{:03}", patients.len() + 1)
}

fn assign_to_doctor(doctor: &mut Doctor) {
    doctor.current_patients += 1;
    if doctor.current_patients >= doctor.max_capacity {
        doctor.status = DoctorStatus::Busy;
    }
}

/// Undoes `assign_to_doctor`. Only a doctor that was full goes back to
/// available; a busy status set by hand is left alone.
fn release_from_doctor(doctor: &mut Doctor) {
    let was_full = doctor.current_patients >= doctor.max_capacity;
    doctor.current_patients = doctor.current_patients.saturating_sub(1);
    if was_full && doctor.status == DoctorStatus::Busy && doctor.has_capacity() {
        doctor.status = DoctorStatus::Available;
    }
}

#[async_trait]
impl ClinicStore for InMemoryStore {
    async fn snapshot(&self) -> ClinicSnapshot {
        let state = self.state.read().await;
        ClinicSnapshot {
            patients: state.patients.clone(),
            doctors: state.doctors.clone(),
        }
    }

    async fn list_patients(&self) -> Vec<Patient> {
        self.state.read().await.patients.clone()
    }

    async fn get_patient(&self, id: &str) -> Option<Patient> {
        self.state
            .read()
            .await
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    async fn add_patient(&self, new_patient: NewPatient) -> Result<Patient, StoreError> {
        let mut state = self.state.write().await;

        if let Some(ref doctor_id) = new_patient.doctor_id {
            let doctor = state
                .doctors
                .iter_mut()
                .find(|d| &d.id == doctor_id)
                .ok_or_else(|| StoreError::DoctorNotFound(doctor_id.clone()))?;
            assign_to_doctor(doctor);
        }

        let status = new_patient.status.unwrap_or(PatientStatus::Waiting);
        let estimated_wait = match status {
            PatientStatus::InProgress => 0,
            _ => rand::thread_rng().gen_range(MIN_INITIAL_WAIT..=MAX_INITIAL_WAIT),
        };

        let patient = Patient {
            id: next_patient_id(&state.patients),
            first_name: new_patient.first_name,
            last_name: new_patient.last_name,
            email: new_patient.email,
            phone: new_patient.phone,
            date_of_birth: new_patient.date_of_birth,
            gender: new_patient.gender,
            symptom: new_patient.symptom,
            severity: new_patient.severity,
            is_emergency: new_patient.is_emergency,
            notes: new_patient.notes,
            arrival_time: Utc::now(),
            estimated_wait,
            status,
            doctor_id: new_patient.doctor_id,
        };

        info!("Registered patient {} ({}), initial wait {} min", patient.id, patient.full_name(), estimated_wait);
        state.patients.push(patient.clone());

        Ok(patient)
    }

    async fn update_patient(&self, id: &str, update: PatientUpdate) -> Result<Patient, StoreError> {
        let mut state = self.state.write().await;
        let StoreState { patients, doctors, .. } = &mut *state;

        let patient = patients
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| StoreError::PatientNotFound(id.to_string()))?;

        if let Some(status) = update.status {
            if !patient.status.can_transition_to(&status) {
                return Err(StoreError::InvalidStatusTransition {
                    from: patient.status.to_string(),
                    to: status.to_string(),
                });
            }
        }

        if let Some(ref doctor_id) = update.doctor_id {
            if patient.doctor_id.as_ref() != Some(doctor_id) {
                let next = doctors
                    .iter()
                    .position(|d| &d.id == doctor_id)
                    .ok_or_else(|| StoreError::DoctorNotFound(doctor_id.clone()))?;

                if let Some(previous) = patient.doctor_id.as_deref() {
                    if let Some(doctor) = doctors.iter_mut().find(|d| d.id == previous) {
                        release_from_doctor(doctor);
                    }
                }

                assign_to_doctor(&mut doctors[next]);
                patient.doctor_id = Some(doctor_id.clone());
            }
        }

        if let Some(status) = update.status {
            patient.status = status;
        }
        if let Some(phone) = update.phone {
            patient.phone = phone;
        }
        if let Some(email) = update.email {
            patient.email = email;
        }
        if let Some(symptom) = update.symptom {
            patient.symptom = symptom;
        }
        if let Some(severity) = update.severity {
            patient.severity = severity;
        }
        if let Some(is_emergency) = update.is_emergency {
            patient.is_emergency = is_emergency;
        }
        if let Some(notes) = update.notes {
            patient.notes = notes;
        }
        if let Some(estimated_wait) = update.estimated_wait {
            patient.estimated_wait = estimated_wait;
        }

        debug!("Updated patient {}", patient.id);
        Ok(patient.clone())
    }

    async fn list_doctors(&self) -> Vec<Doctor> {
        self.state.read().await.doctors.clone()
    }

    async fn get_doctor(&self, id: &str) -> Option<Doctor> {
        self.state
            .read()
            .await
            .doctors
            .iter()
            .find(|d| d.id == id)
            .cloned()
    }

    async fn update_doctor(&self, id: &str, update: DoctorUpdate) -> Result<Doctor, StoreError> {
        let mut state = self.state.write().await;

        let doctor = state
            .doctors
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or_else(|| StoreError::DoctorNotFound(id.to_string()))?;

        if let Some(status) = update.status {
            doctor.status = status;
        }
        if let Some(current_patients) = update.current_patients {
            doctor.current_patients = current_patients;
        }

        info!("Doctor {} is now {} with {} patients", doctor.id, doctor.status, doctor.current_patients);
        Ok(doctor.clone())
    }

    async fn list_hospitals(&self) -> Vec<Hospital> {
        self.state.read().await.hospitals.clone()
    }

    async fn advance_queue(&self) {
        let mut state = self.state.write().await;
        for patient in state.patients.iter_mut() {
            patient.estimated_wait = patient.estimated_wait.saturating_sub(1);
        }
        debug!("Advanced queue clock for {} patients", state.patients.len());
    }
}
