use super::common::*;
use crate::directory::validation::{EmployeeDraft, EmployeeValidationError};
use crate::workflows::hiring::EmployeeStatus;
use chrono::NaiveDate;

fn valid_draft() -> EmployeeDraft {
    draft_for(&employee(1, "Alice Smith", EmployeeStatus::ApplicationReceived))
}

#[test]
fn new_draft_starts_at_initial_status() {
    let draft = EmployeeDraft::new(ACME);
    assert_eq!(draft.employee_status, EmployeeStatus::ApplicationReceived);
    assert!(draft.hired_on.is_none());
}

#[test]
fn accepts_well_formed_draft() {
    let departments = snapshot().departments;
    assert_eq!(valid_draft().validate(&departments), Ok(()));
}

#[test]
fn blank_required_fields_are_reported_by_name() {
    let departments = snapshot().departments;
    let mut draft = valid_draft();
    draft.designation = "   ".to_string();

    assert_eq!(
        draft.validate(&departments),
        Err(EmployeeValidationError::MissingField("designation"))
    );
}

#[test]
fn rejects_malformed_contact_details() {
    let departments = snapshot().departments;

    let mut bad_email = valid_draft();
    bad_email.email_address = "alice@localhost".to_string();
    assert!(matches!(
        bad_email.validate(&departments),
        Err(EmployeeValidationError::InvalidEmail(_))
    ));

    let mut bad_mobile = valid_draft();
    bad_mobile.mobile_number = "555-0100".to_string();
    assert!(matches!(
        bad_mobile.validate(&departments),
        Err(EmployeeValidationError::InvalidMobileNumber(_))
    ));

    let mut bare_digits = valid_draft();
    bare_digits.mobile_number = "555010020".to_string();
    assert_eq!(bare_digits.validate(&departments), Ok(()));
}

#[test]
fn hire_date_tracks_hired_status() {
    let departments = snapshot().departments;

    let mut missing = valid_draft();
    missing.employee_status = EmployeeStatus::Hired;
    assert_eq!(
        missing.validate(&departments),
        Err(EmployeeValidationError::HiredOnRequired)
    );

    let mut unexpected = valid_draft();
    unexpected.employee_status = EmployeeStatus::InterviewScheduled;
    unexpected.hired_on = NaiveDate::from_ymd_opt(2025, 1, 1);
    assert_eq!(
        unexpected.validate(&departments),
        Err(EmployeeValidationError::HiredOnUnexpected(
            EmployeeStatus::InterviewScheduled
        ))
    );
}

#[test]
fn department_must_belong_to_selected_company() {
    let departments = snapshot().departments;

    let mut foreign = valid_draft();
    foreign.department = Some(RESEARCH);
    assert_eq!(
        foreign.validate(&departments),
        Err(EmployeeValidationError::DepartmentCompanyMismatch {
            department: RESEARCH,
            company: ACME,
        })
    );

    let mut unknown = valid_draft();
    unknown.department = Some(crate::directory::DepartmentId(999));
    assert!(matches!(
        unknown.validate(&departments),
        Err(EmployeeValidationError::UnknownDepartment(_))
    ));

    let mut unassigned = valid_draft();
    unassigned.department = None;
    assert_eq!(unassigned.validate(&departments), Ok(()));
}
