use tracing::debug;

use shared_database::SharedStore;
use shared_models::Patient;

use crate::models::{CreatePatientRequest, PatientError, UpdatePatientRequest};

pub struct PatientService {
    store: SharedStore,
}

impl PatientService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_patients(&self) -> Vec<Patient> {
        self.store.list_patients().await
    }

    pub async fn get_patient(&self, patient_id: &str) -> Result<Patient, PatientError> {
        debug!("Fetching patient: {}", patient_id);

        self.store
            .get_patient(patient_id)
            .await
            .ok_or(PatientError::NotFound)
    }

    pub async fn create_patient(&self, request: CreatePatientRequest) -> Result<Patient, PatientError> {
        let new_patient = request.into_new_patient()?;
        debug!("Registering patient: {} {}", new_patient.first_name, new_patient.last_name);

        let patient = self.store.add_patient(new_patient).await?;

        Ok(patient)
    }

    pub async fn update_patient(
        &self,
        patient_id: &str,
        request: UpdatePatientRequest,
    ) -> Result<Patient, PatientError> {
        debug!("Updating patient: {}", patient_id);

        let update = request.into_update()?;
        let patient = self.store.update_patient(patient_id, update).await?;

        Ok(patient)
    }
}
