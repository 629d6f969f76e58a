use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::workflows::hiring::EmployeeStatus;

use super::domain::{CompanyId, Department, DepartmentId, Employee};

/// Employee form contents before they are sent to the directory API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeDraft {
    pub company: CompanyId,
    pub department: Option<DepartmentId>,
    pub employee_status: EmployeeStatus,
    pub employee_name: String,
    pub email_address: String,
    pub mobile_number: String,
    pub address: String,
    pub designation: String,
    pub hired_on: Option<NaiveDate>,
}

/// Reasons an employee draft is refused before reaching the API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmployeeValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
    #[error("phone number must be entered in the format '+999999999' with up to 15 digits")]
    InvalidMobileNumber(String),
    #[error("new employees start as Application Received, not {0}")]
    InitialStatusRequired(EmployeeStatus),
    #[error("hired date is required for hired employees")]
    HiredOnRequired,
    #[error("hired date can only be set for hired employees (status is {0})")]
    HiredOnUnexpected(EmployeeStatus),
    #[error("company {0:?} does not exist")]
    UnknownCompany(CompanyId),
    #[error("department {0:?} does not exist")]
    UnknownDepartment(DepartmentId),
    #[error("department must belong to the selected company")]
    DepartmentCompanyMismatch {
        department: DepartmentId,
        company: CompanyId,
    },
}

fn mobile_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\+?1?\d{9,15}$").expect("mobile pattern compiles"))
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[^@\s]+@[^@\s.]+(\.[^@\s.]+)+$").expect("email pattern compiles")
    })
}

impl EmployeeDraft {
    /// Blank draft for a new applicant, starting at the initial workflow status.
    pub fn new(company: CompanyId) -> Self {
        Self {
            company,
            department: None,
            employee_status: EmployeeStatus::INITIAL,
            employee_name: String::new(),
            email_address: String::new(),
            mobile_number: String::new(),
            address: String::new(),
            designation: String::new(),
            hired_on: None,
        }
    }

    /// Checks field formats, the hire-date invariant, and department ownership.
    pub fn validate(&self, departments: &[Department]) -> Result<(), EmployeeValidationError> {
        let required = [
            ("employee_name", &self.employee_name),
            ("email_address", &self.email_address),
            ("mobile_number", &self.mobile_number),
            ("address", &self.address),
            ("designation", &self.designation),
        ];
        if let Some(&(field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(EmployeeValidationError::MissingField(field));
        }

        if !email_pattern().is_match(self.email_address.trim()) {
            return Err(EmployeeValidationError::InvalidEmail(
                self.email_address.clone(),
            ));
        }

        if !mobile_pattern().is_match(self.mobile_number.trim()) {
            return Err(EmployeeValidationError::InvalidMobileNumber(
                self.mobile_number.clone(),
            ));
        }

        match (self.employee_status, self.hired_on) {
            (EmployeeStatus::Hired, None) => return Err(EmployeeValidationError::HiredOnRequired),
            (EmployeeStatus::Hired, Some(_)) | (_, None) => {}
            (status, Some(_)) => return Err(EmployeeValidationError::HiredOnUnexpected(status)),
        }

        if let Some(department_id) = self.department {
            let department = departments
                .iter()
                .find(|department| department.id == department_id)
                .ok_or(EmployeeValidationError::UnknownDepartment(department_id))?;
            if department.company != self.company {
                return Err(EmployeeValidationError::DepartmentCompanyMismatch {
                    department: department_id,
                    company: self.company,
                });
            }
        }

        Ok(())
    }
}

impl From<&Employee> for EmployeeDraft {
    fn from(employee: &Employee) -> Self {
        Self {
            company: employee.company,
            department: employee.department,
            employee_status: employee.employee_status,
            employee_name: employee.employee_name.clone(),
            email_address: employee.email_address.clone(),
            mobile_number: employee.mobile_number.clone(),
            address: employee.address.clone(),
            designation: employee.designation.clone(),
            hired_on: employee.hired_on,
        }
    }
}
