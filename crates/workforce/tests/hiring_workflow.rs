use chrono::{Duration, NaiveDate};
use workforce::workflows::hiring::{
    compute_days_employed, ensure_transition, is_valid_transition, valid_transitions,
    EmployeeStatus,
};

fn evaluation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 24).expect("valid evaluation date")
}

#[test]
fn initial_status_is_application_received() {
    assert_eq!(EmployeeStatus::INITIAL, EmployeeStatus::ApplicationReceived);
}

#[test]
fn full_hiring_path_is_legal_step_by_step() {
    let path = [
        EmployeeStatus::ApplicationReceived,
        EmployeeStatus::InterviewScheduled,
        EmployeeStatus::Hired,
        EmployeeStatus::Hired,
    ];

    for step in path.windows(2) {
        assert!(
            is_valid_transition(step[0], step[1]),
            "{:?} -> {:?} should be allowed",
            step[0],
            step[1]
        );
    }
}

#[test]
fn rejection_is_reachable_from_every_open_status() {
    for status in EmployeeStatus::ordered() {
        if status.is_terminal() {
            continue;
        }
        assert!(valid_transitions(status).contains(EmployeeStatus::NotAccepted));
    }
}

#[test]
fn no_status_moves_backwards() {
    for (position, from) in EmployeeStatus::ordered().into_iter().enumerate() {
        for earlier in EmployeeStatus::ordered().into_iter().take(position) {
            assert!(
                ensure_transition(from, earlier).is_err(),
                "{from:?} must not return to {earlier:?}"
            );
        }
    }
}

#[test]
fn tenure_matches_documented_examples() {
    let now = evaluation_date();

    assert_eq!(compute_days_employed(None, now), None);
    assert_eq!(compute_days_employed(Some(now), now), Some(0));
    assert_eq!(
        compute_days_employed(Some(now + Duration::days(3)), now),
        Some(0)
    );
    assert_eq!(
        compute_days_employed(Some(now - Duration::days(10)), now),
        Some(10)
    );
    assert_eq!(
        compute_days_employed(Some(now - Duration::days(366)), now),
        Some(366)
    );
}
