use std::sync::Arc;
use assert_matches::assert_matches;

use prediction_cell::*;
use prediction_cell::wait_time::{self, JITTER_RANGE};
use shared_models::{DoctorStatus, PatientStatus, Severity};
use shared_utils::test_utils::{waiting_patients, TestDoctor, TestPatient};

use super::{half_busy_roster, queue_with};

fn fixed_engine(offset: i32) -> QueuePredictionEngine {
    QueuePredictionEngine::default().with_jitter(Arc::new(FixedJitter(offset)))
}

#[test]
fn test_unknown_patient_is_not_found() {
    let engine = fixed_engine(0);
    let patients = waiting_patients(3, 10);

    let result = engine.predict_wait_time("P404", &patients, &half_busy_roster());

    assert_matches!(result, Err(PredictionError::NotFound(id)) if id == "P404");
}

#[test]
fn test_severe_emergency_in_queue_of_ten_with_half_busy_doctors() {
    let target = TestPatient::new("P001")
        .severity(Severity::Severe)
        .emergency()
        .wait(10)
        .build();
    let patients = queue_with(target, 9, 10);
    let doctors = half_busy_roster();

    // round(10 - 5 + 0.5 * 5 + ceil(0.5 * 8)) = round(11.5) = 12
    for offset in -2..=2 {
        let prediction = fixed_engine(offset)
            .predict_wait_time("P001", &patients, &doctors)
            .unwrap();

        assert_eq!(prediction.explanation.base_wait_time, 10);
        assert_eq!(prediction.explanation.emergency_factor, -5);
        assert_eq!(prediction.explanation.severity_factor, 0.5);
        assert_eq!(prediction.explanation.doctor_utilization_factor, 4);
        assert_eq!(prediction.explanation.pre_jitter_estimate, 12);
        assert_eq!(prediction.estimated_wait_time as i32, 12 + offset);
        assert_eq!(prediction.confidence, 85);
        assert!(prediction.recommendation.starts_with("⚠️ EMERGENCY CASE"));
        assert!(prediction.recommendation.contains("Test Patient P001"));
    }
}

#[test]
fn test_empty_queue_uses_floor_base_wait() {
    let target = TestPatient::new("P001")
        .severity(Severity::Mild)
        .status(PatientStatus::InProgress)
        .build();

    let prediction = fixed_engine(0).predict_wait_time("P001", &[target], &[]).unwrap();

    assert_eq!(prediction.explanation.base_wait_time, wait_time::EMPTY_QUEUE_BASE_WAIT);
    assert_eq!(prediction.explanation.doctor_utilization_factor, 0);
    assert_eq!(prediction.estimated_wait_time, 5);
    assert_eq!(prediction.confidence, 65);
    assert!(prediction.suggested_doctor.is_none());
    assert_eq!(
        prediction.recommendation,
        "Optimal allocation ready. Assign to available doctor."
    );
}

#[test]
fn test_estimate_never_drops_below_floor_before_jitter() {
    let target = TestPatient::new("P001").severity(Severity::Mild).emergency().wait(0).build();
    let patients = queue_with(target, 4, 0);

    let prediction = fixed_engine(-2).predict_wait_time("P001", &patients, &[]).unwrap();

    assert_eq!(prediction.explanation.pre_jitter_estimate, wait_time::MIN_ESTIMATE_MINUTES);
    assert_eq!(prediction.estimated_wait_time, 0);
}

#[test]
fn test_random_jitter_stays_within_two_minutes() {
    let engine = QueuePredictionEngine::default();
    let patients = queue_with(TestPatient::new("P001").build(), 6, 12);
    let doctors = half_busy_roster();

    for _ in 0..100 {
        let prediction = engine.predict_wait_time("P001", &patients, &doctors).unwrap();
        let pre = prediction.explanation.pre_jitter_estimate as i32;
        let post = prediction.estimated_wait_time as i32;

        assert!(pre >= 2);
        assert!((post - pre).abs() <= 2, "jitter {} out of range", post - pre);
        assert!(JITTER_RANGE.contains(&prediction.explanation.jitter));
    }
}

#[test]
fn test_severity_ordering_of_estimates() {
    let doctors = half_busy_roster();
    let estimate = |severity: Severity| {
        let patients = queue_with(TestPatient::new("P001").severity(severity).build(), 3, 8);
        fixed_engine(0)
            .predict_wait_time("P001", &patients, &doctors)
            .unwrap()
            .explanation
            .pre_jitter_estimate
    };

    assert!(estimate(Severity::Severe) >= estimate(Severity::Moderate));
    assert!(estimate(Severity::Moderate) >= estimate(Severity::Mild));
}

#[test]
fn test_confidence_grows_with_queue_and_caps_at_95() {
    let mut previous = 0;
    for count in 0..40 {
        let current = wait_time::confidence(count);
        assert!(current >= previous);
        assert!(current <= 95);
        previous = current;
    }

    assert_eq!(wait_time::confidence(0), 65);
    assert_eq!(wait_time::confidence(10), 85);
    assert_eq!(wait_time::confidence(15), 95);
    assert_eq!(wait_time::confidence(usize::MAX), 95);
}

#[test]
fn test_suggested_doctor_is_least_loaded_available_first_on_ties() {
    let doctors = vec![
        TestDoctor::new("D001").load(1, 4).build(),
        TestDoctor::new("D002").load(0, 4).build(),
        TestDoctor::new("D003").load(0, 4).build(),
        TestDoctor::new("D004").status(DoctorStatus::Break).build(),
        TestDoctor::new("D005").load(3, 3).build(),
    ];

    let suggested = wait_time::suggest_doctor(&doctors).unwrap();
    assert_eq!(suggested.id, "D002");

    let patients = queue_with(TestPatient::new("P001").build(), 2, 5);
    let prediction = fixed_engine(0).predict_wait_time("P001", &patients, &doctors).unwrap();
    assert_eq!(prediction.suggested_doctor.unwrap().id, "D002");
    assert_eq!(prediction.recommendation, "Optimal allocation ready. Assign to Dr. D002.");
}

#[test]
fn test_long_wait_recommends_backup() {
    let patients = queue_with(TestPatient::new("P001").wait(40).build(), 4, 40);

    let prediction = fixed_engine(0).predict_wait_time("P001", &patients, &[]).unwrap();

    // 40 + 0.2 * 5 = 41
    assert_eq!(prediction.estimated_wait_time, 41);
    assert_eq!(
        prediction.recommendation,
        "Consider calling backup doctors. Current wait time is higher than target (41min > 30min target)."
    );
}

#[test]
fn test_saturated_doctors_recommend_deferring() {
    let doctors = vec![TestDoctor::busy("D001"), TestDoctor::busy("D002")];
    let patients = queue_with(TestPatient::new("P001").severity(Severity::Mild).wait(5).build(), 2, 5);

    let prediction = fixed_engine(0).predict_wait_time("P001", &patients, &doctors).unwrap();

    assert_eq!(prediction.explanation.doctor_utilization_factor, 8);
    assert_eq!(prediction.estimated_wait_time, 13);
    assert_eq!(
        prediction.recommendation,
        "Doctor capacity at 100%. Consider scheduling less urgent cases later."
    );
    assert!(prediction.explanation.total_factors.contains(&"Doctor utilization: 100%".to_string()));
}

#[test]
fn test_explanation_factors() {
    let target = TestPatient::new("P001").severity(Severity::Severe).build();
    let patients = queue_with(target, 2, 6);

    let prediction = fixed_engine(0).predict_wait_time("P001", &patients, &half_busy_roster()).unwrap();

    assert_eq!(
        prediction.explanation.total_factors,
        vec![
            "Queue length: 3 patients".to_string(),
            "Doctor utilization: 50%".to_string(),
            "Patient severity: SEVERE".to_string(),
            "Standard priority".to_string(),
        ]
    );
}

#[test]
fn test_base_wait_is_ceiling_of_mean() {
    let patients = vec![
        TestPatient::new("A").wait(22).build(),
        TestPatient::new("B").wait(15).build(),
        TestPatient::new("C").wait(40).status(PatientStatus::Completed).build(),
    ];
    let waiting: Vec<_> = patients.iter().filter(|p| p.is_waiting()).collect();

    assert_eq!(wait_time::base_wait_time(&waiting), 19);
}
