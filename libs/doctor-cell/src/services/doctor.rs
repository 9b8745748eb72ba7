use tracing::debug;

use shared_database::SharedStore;
use shared_models::Doctor;

use crate::models::{DoctorError, UpdateDoctorStatusRequest};

pub struct DoctorService {
    store: SharedStore,
}

impl DoctorService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub async fn list_doctors(&self) -> Vec<Doctor> {
        self.store.list_doctors().await
    }

    /// Doctors on shift with spare capacity, in roster order.
    pub async fn available_doctors(&self) -> Vec<Doctor> {
        self.store.available_doctors().await
    }

    pub async fn get_doctor(&self, doctor_id: &str) -> Result<Doctor, DoctorError> {
        self.store
            .get_doctor(doctor_id)
            .await
            .ok_or(DoctorError::NotFound)
    }

    pub async fn update_status(
        &self,
        doctor_id: &str,
        request: UpdateDoctorStatusRequest,
    ) -> Result<Doctor, DoctorError> {
        debug!("Updating status for doctor {}", doctor_id);

        let update = request.into_update()?;
        Ok(self.store.update_doctor(doctor_id, update).await?)
    }
}
