use std::sync::Arc;

use async_trait::async_trait;

use shared_models::{Doctor, DoctorUpdate, Hospital, NewPatient, Patient, PatientUpdate};

use crate::error::StoreError;

pub type SharedStore = Arc<dyn ClinicStore>;

/// Patients and doctors read at a single point in time.
#[derive(Debug, Clone, Default)]
pub struct ClinicSnapshot {
    pub patients: Vec<Patient>,
    pub doctors: Vec<Doctor>,
}

#[async_trait]
pub trait ClinicStore: Send + Sync {
    /// Reads patients and doctors together so callers never see a torn view.
    async fn snapshot(&self) -> ClinicSnapshot;

    async fn list_patients(&self) -> Vec<Patient>;

    async fn get_patient(&self, id: &str) -> Option<Patient>;

    async fn add_patient(&self, patient: NewPatient) -> Result<Patient, StoreError>;

    async fn update_patient(&self, id: &str, update: PatientUpdate) -> Result<Patient, StoreError>;

    async fn list_doctors(&self) -> Vec<Doctor>;

    async fn get_doctor(&self, id: &str) -> Option<Doctor>;

    async fn update_doctor(&self, id: &str, update: DoctorUpdate) -> Result<Doctor, StoreError>;

    async fn list_hospitals(&self) -> Vec<Hospital>;

    /// One tick of simulated queue progress: every positive wait drops by a minute.
    async fn advance_queue(&self);

    async fn available_doctors(&self) -> Vec<Doctor> {
        self.list_doctors()
            .await
            .into_iter()
            .filter(Doctor::can_take_patient)
            .collect()
    }
}
