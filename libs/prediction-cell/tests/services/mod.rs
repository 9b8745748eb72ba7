use shared_models::{Doctor, Patient};
use shared_utils::test_utils::{TestDoctor, TestPatient};

/// Two busy and two available doctors: busy fraction 0.5.
pub fn half_busy_roster() -> Vec<Doctor> {
    vec![
        TestDoctor::busy("D001"),
        TestDoctor::busy("D002"),
        TestDoctor::available("D003"),
        TestDoctor::available("D004"),
    ]
}

/// Target patient first, followed by `others` plain waiting patients.
pub fn queue_with(target: Patient, others: usize, wait: u32) -> Vec<Patient> {
    let mut patients = vec![target];
    patients.extend((1..=others).map(|i| TestPatient::new(&format!("Q{:03}", i)).wait(wait).build()));
    patients
}

mod wait_time_test;
mod optimizer_test;
mod peak_hours_test;
