use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::hiring::{compute_days_employed, EmployeeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompanyId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentId(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u64);

/// Company row including the counts the API derives from its children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: CompanyId,
    pub company_name: String,
    pub number_of_departments: u32,
    pub number_of_employees: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    pub id: DepartmentId,
    pub company: CompanyId,
    pub company_name: String,
    pub department_name: String,
    pub number_of_employees: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Employee record with its hiring status.
///
/// `hired_on` is only meaningful while the status is [`EmployeeStatus::Hired`];
/// `days_employed` is derived from it and refreshed with [`Employee::with_derived_fields`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EmployeeId,
    pub company: CompanyId,
    pub company_name: String,
    pub department: Option<DepartmentId>,
    pub department_name: Option<String>,
    pub employee_status: EmployeeStatus,
    pub employee_name: String,
    pub email_address: String,
    pub mobile_number: String,
    pub address: String,
    pub designation: String,
    pub hired_on: Option<NaiveDate>,
    #[serde(default)]
    pub days_employed: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Tenure on `now`, present only for hired employees with a recorded hire date.
    pub fn days_employed_on(&self, now: NaiveDate) -> Option<u32> {
        match self.employee_status {
            EmployeeStatus::Hired => compute_days_employed(self.hired_on, now),
            _ => None,
        }
    }

    pub fn with_derived_fields(mut self, now: NaiveDate) -> Self {
        self.days_employed = self.days_employed_on(now);
        self
    }

    pub fn is_hired(&self) -> bool {
        self.employee_status == EmployeeStatus::Hired
    }
}

/// Full directory as exported from the API, used to seed the client-side views.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectorySnapshot {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl DirectorySnapshot {
    /// Parses an API export and rejects records that break the hire-date rule.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(raw)?;
        snapshot.check_employees()?;
        Ok(snapshot)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn department(&self, id: DepartmentId) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }

    /// Id the API would hand out for the next employee.
    pub fn next_employee_id(&self) -> EmployeeId {
        let highest = self.employees.iter().map(|employee| employee.id.0).max();
        EmployeeId(highest.map_or(1, |id| id + 1))
    }

    /// Recomputes the child counts the API derives for companies and departments.
    pub fn refresh_counts(&mut self) {
        for department in &mut self.departments {
            department.number_of_employees = count(
                self.employees
                    .iter()
                    .filter(|employee| employee.department == Some(department.id)),
            );
        }
        for company in &mut self.companies {
            company.number_of_departments = count(
                self.departments
                    .iter()
                    .filter(|department| department.company == company.id),
            );
            company.number_of_employees = count(
                self.employees
                    .iter()
                    .filter(|employee| employee.company == company.id),
            );
        }
    }

    fn check_employees(&self) -> Result<(), SnapshotError> {
        let misdated = self
            .employees
            .iter()
            .find(|employee| employee.hired_on.is_some() && !employee.is_hired());
        match misdated {
            Some(employee) => Err(SnapshotError::InvalidEmployee {
                employee: employee.id,
                field: "hired_on",
                reason: format!("set while status is {}", employee.employee_status),
            }),
            None => Ok(()),
        }
    }
}

fn count<T>(items: impl Iterator<Item = T>) -> u32 {
    u32::try_from(items.count()).unwrap_or(u32::MAX)
}

/// Why a directory export could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed directory snapshot: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("employee {} has an invalid {field}: {reason}", employee.0)]
    InvalidEmployee {
        employee: EmployeeId,
        field: &'static str,
        reason: String,
    },
}
