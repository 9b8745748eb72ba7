use prediction_cell::*;
use prediction_cell::optimizer::{self, REDUCTION_PER_ALLOCATION};
use shared_models::{DoctorStatus, PatientStatus, Severity};
use shared_utils::test_utils::{TestDoctor, TestPatient};

use super::half_busy_roster;

fn engine() -> QueuePredictionEngine {
    QueuePredictionEngine::default()
}

fn doctor_ids(optimization: &QueueOptimization) -> Vec<Option<String>> {
    optimization
        .optimized_allocations
        .iter()
        .map(|a| a.recommended_doctor.as_ref().map(|d| d.id.clone()))
        .collect()
}

#[test]
fn test_severe_emergency_ranks_before_long_waiting_mild_case() {
    let patients = vec![
        TestPatient::new("A").severity(Severity::Mild).wait(10).build(),
        TestPatient::new("B").severity(Severity::Severe).emergency().wait(5).build(),
    ];

    let optimization = engine().optimize_queue(&patients, &half_busy_roster());

    assert_eq!(optimization.optimized_order, vec!["B", "A"]);
    assert_eq!(optimization.optimized_allocations[0].priority, 130);
    assert_eq!(optimization.optimized_allocations[1].priority, 55);
}

#[test]
fn test_only_waiting_patients_are_allocated() {
    let patients = vec![
        TestPatient::new("P001").build(),
        TestPatient::new("P002").status(PatientStatus::InProgress).build(),
        TestPatient::new("P003").build(),
        TestPatient::new("P004").status(PatientStatus::Completed).build(),
    ];

    let optimization = engine().optimize_queue(&patients, &half_busy_roster());

    assert_eq!(optimization.current_queue_length, 2);
    assert_eq!(optimization.optimized_allocations.len(), 2);
    assert_eq!(optimization.optimized_order, vec!["P001", "P003"]);
    assert_eq!(optimization.total_wait_time_reduction, 2 * REDUCTION_PER_ALLOCATION);
}

#[test]
fn test_equal_scores_keep_input_order() {
    let patients = vec![
        TestPatient::new("C").severity(Severity::Severe).emergency().build(),
        TestPatient::new("A").severity(Severity::Severe).emergency().build(),
        TestPatient::new("B").severity(Severity::Severe).emergency().build(),
        TestPatient::new("M").severity(Severity::Mild).build(),
    ];

    let optimization = engine().optimize_queue(&patients, &half_busy_roster());

    assert_eq!(optimization.optimized_order, vec!["C", "A", "B", "M"]);
}

#[test]
fn test_priority_score_components() {
    let plain = TestPatient::new("P").severity(Severity::Moderate).wait(30).build();
    let emergency = TestPatient::new("E").severity(Severity::Moderate).emergency().wait(30).build();
    let long_wait = TestPatient::new("L").severity(Severity::Moderate).wait(31).build();

    assert_eq!(optimizer::priority_score(&plain), 65);
    assert_eq!(optimizer::priority_score(&emergency), 115);
    assert_eq!(optimizer::priority_score(&long_wait), 75);

    let score = |severity| optimizer::priority_score(&TestPatient::new("S").severity(severity).build());
    assert!(score(Severity::Severe) >= score(Severity::Moderate));
    assert!(score(Severity::Moderate) >= score(Severity::Mild));
    assert!(optimizer::priority_score(&emergency) >= optimizer::priority_score(&plain));
}

#[test]
fn test_first_available_doctor_with_capacity_is_preferred() {
    let doctors = vec![
        TestDoctor::busy("D001"),
        TestDoctor::new("D002").load(2, 2).build(),
        TestDoctor::new("D003").load(3, 5).build(),
        TestDoctor::new("D004").load(0, 5).build(),
    ];
    let patients = vec![TestPatient::new("P001").build()];

    let optimization = engine().optimize_queue(&patients, &doctors);

    // D003 is first in roster order, even though D004 is idle
    assert_eq!(doctor_ids(&optimization), vec![Some("D003".to_string())]);
}

#[test]
fn test_doctor_at_capacity_is_used_as_fallback() {
    let doctors = vec![TestDoctor::new("D001").load(3, 3).build()];
    let patients = vec![TestPatient::new("P001").build()];

    let optimization = engine().optimize_queue(&patients, &doctors);

    assert_eq!(doctor_ids(&optimization), vec![Some("D001".to_string())]);
    assert_eq!(optimization.total_wait_time_reduction, REDUCTION_PER_ALLOCATION);
}

#[test]
fn test_fallback_picks_least_loaded_across_full_roster() {
    let doctors = vec![
        TestDoctor::new("D001").status(DoctorStatus::Busy).load(3, 5).build(),
        TestDoctor::new("D002").status(DoctorStatus::Break).load(1, 5).build(),
        TestDoctor::new("D003").status(DoctorStatus::Busy).load(1, 5).build(),
    ];

    let allocated = optimizer::allocate_doctor(&doctors).unwrap();

    assert_eq!(allocated.id, "D002");
}

#[test]
fn test_allocation_does_not_accumulate_load_within_a_pass() {
    let doctors = vec![
        TestDoctor::new("D001").load(0, 1).build(),
        TestDoctor::busy("D002"),
    ];
    let patients = vec![
        TestPatient::new("P001").build(),
        TestPatient::new("P002").build(),
        TestPatient::new("P003").build(),
    ];

    let optimization = engine().optimize_queue(&patients, &doctors);

    assert_eq!(doctor_ids(&optimization), vec![Some("D001".to_string()); 3]);
}

#[test]
fn test_no_doctors_yields_unassigned_allocations() {
    let patients = vec![
        TestPatient::new("P001").build(),
        TestPatient::new("P002").emergency().build(),
    ];

    let optimization = engine().optimize_queue(&patients, &[]);

    assert_eq!(optimization.optimized_allocations.len(), 2);
    assert_eq!(doctor_ids(&optimization), vec![None, None]);
    assert_eq!(optimization.total_wait_time_reduction, 0);
}

#[test]
fn test_empty_queue() {
    let optimization = engine().optimize_queue(&[], &half_busy_roster());

    assert_eq!(optimization.current_queue_length, 0);
    assert!(optimization.optimized_allocations.is_empty());
    assert!(optimization.optimized_order.is_empty());
    assert_eq!(optimization.total_wait_time_reduction, 0);
}

#[test]
fn test_allocation_reasons() {
    let patients = vec![
        TestPatient::new("E").severity(Severity::Mild).emergency().build(),
        TestPatient::new("S").severity(Severity::Severe).build(),
        TestPatient::new("W").severity(Severity::Moderate).wait(17).build(),
    ];

    let optimization = engine().optimize_queue(&patients, &half_busy_roster());
    let reasons: Vec<&str> = optimization
        .optimized_allocations
        .iter()
        .map(|a| a.reason.as_str())
        .collect();

    assert_eq!(reasons, vec!["Emergency priority", "Severe case", "Waiting for 17 minutes"]);
}

#[test]
fn test_optimizer_is_idempotent() {
    let patients = vec![
        TestPatient::new("P001").severity(Severity::Mild).wait(40).build(),
        TestPatient::new("P002").severity(Severity::Severe).build(),
        TestPatient::new("P003").emergency().build(),
        TestPatient::new("P004").severity(Severity::Severe).build(),
    ];
    let doctors = half_busy_roster();

    let first = engine().optimize_queue(&patients, &doctors);
    let second = engine().optimize_queue(&patients, &doctors);

    assert_eq!(first, second);
}
