pub mod doctor;
pub mod error;
pub mod hospital;
pub mod patient;

pub use doctor::{Doctor, DoctorFeedback, DoctorStatus, DoctorUpdate};
pub use hospital::{Hospital, HospitalKind};
pub use patient::{NewPatient, Patient, PatientStatus, PatientUpdate, Severity};
