use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use tracing::{debug, info, warn};

use crate::listing::{apply, QueryResult};
use crate::workflows::hiring::{ensure_transition, EmployeeStatus, TransitionError};

use super::domain::{Company, CompanyId, Department, DepartmentId, Employee, EmployeeId};
use super::filters::{CompanyQuery, DepartmentQuery, EmployeeQuery, HiredReportQuery};
use super::report::HiredEmployeeRow;
use super::repository::{DirectoryRepository, RepositoryError};
use super::summary::DashboardSummary;
use super::validation::{EmployeeDraft, EmployeeValidationError};

/// View-side operations over the directory: list queries, status changes, and reports.
pub struct DirectoryService<R> {
    repository: Arc<R>,
}

impl<R> DirectoryService<R>
where
    R: DirectoryRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    pub fn list_employees(
        &self,
        query: &EmployeeQuery,
        today: NaiveDate,
    ) -> Result<QueryResult<Employee>, DirectoryServiceError> {
        let employees: Vec<Employee> = self
            .repository
            .employees()?
            .into_iter()
            .map(|employee| employee.with_derived_fields(today))
            .collect();

        let result = apply(&employees, query);
        debug!(
            total = result.total_count,
            page = result.page,
            search = query.search_term().as_str(),
            "employee list queried"
        );
        Ok(result)
    }

    pub fn list_departments(
        &self,
        query: &DepartmentQuery,
    ) -> Result<QueryResult<Department>, DirectoryServiceError> {
        let departments = self.repository.departments()?;
        Ok(apply(&departments, query))
    }

    pub fn list_companies(
        &self,
        query: &CompanyQuery,
    ) -> Result<QueryResult<Company>, DirectoryServiceError> {
        let companies = self.repository.companies()?;
        Ok(apply(&companies, query))
    }

    pub fn employee(
        &self,
        id: EmployeeId,
        today: NaiveDate,
    ) -> Result<Employee, DirectoryServiceError> {
        let employee = self
            .repository
            .fetch_employee(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(employee.with_derived_fields(today))
    }

    /// Adds a new applicant. Drafts must start at [`EmployeeStatus::INITIAL`].
    pub fn create_employee(
        &self,
        draft: EmployeeDraft,
        today: NaiveDate,
    ) -> Result<Employee, DirectoryServiceError> {
        if draft.employee_status != EmployeeStatus::INITIAL {
            return Err(
                EmployeeValidationError::InitialStatusRequired(draft.employee_status).into(),
            );
        }

        let departments = self.repository.departments()?;
        draft.validate(&departments)?;
        let company_name = self.company_name(draft.company)?;
        let department_name = department_name_for(&departments, draft.department);

        let now = Utc::now();
        let employee = Employee {
            id: EmployeeId(0),
            company: draft.company,
            company_name,
            department: draft.department,
            department_name,
            employee_status: draft.employee_status,
            employee_name: draft.employee_name,
            email_address: draft.email_address,
            mobile_number: draft.mobile_number,
            address: draft.address,
            designation: draft.designation,
            hired_on: None,
            days_employed: None,
            created_at: now,
            updated_at: now,
        };

        let created = self.repository.create_employee(employee)?;
        info!(employee = created.id.0, company = created.company.0, "employee created");
        Ok(created.with_derived_fields(today))
    }

    pub fn delete_employee(&self, id: EmployeeId) -> Result<(), DirectoryServiceError> {
        self.repository.delete_employee(id)?;
        info!(employee = id.0, "employee deleted");
        Ok(())
    }

    /// Removes a department that no longer has employees assigned.
    pub fn delete_department(&self, id: DepartmentId) -> Result<(), DirectoryServiceError> {
        let department = self
            .repository
            .departments()?
            .into_iter()
            .find(|department| department.id == id)
            .ok_or(RepositoryError::NotFound)?;
        let employees = self
            .repository
            .employees()?
            .iter()
            .filter(|employee| employee.department == Some(id))
            .count();

        if employees > 0 {
            warn!(department = id.0, employees, "department still has employees");
            return Err(DirectoryServiceError::DepartmentInUse {
                department: department.department_name,
                employees,
            });
        }

        self.repository.delete_department(id)?;
        info!(department = id.0, "department deleted");
        Ok(())
    }

    /// Saves edited form data. The workflow table is consulted only when the status changes.
    pub fn update_employee(
        &self,
        id: EmployeeId,
        draft: EmployeeDraft,
        today: NaiveDate,
    ) -> Result<Employee, DirectoryServiceError> {
        let current = self
            .repository
            .fetch_employee(id)?
            .ok_or(RepositoryError::NotFound)?;

        if draft.employee_status != current.employee_status {
            ensure_transition(current.employee_status, draft.employee_status)?;
        }

        let saved = self.save_draft(current, draft, today)?;
        info!(employee = saved.id.0, "employee updated");
        Ok(saved)
    }

    /// Moves an employee along the hiring workflow.
    ///
    /// Entering `Hired` needs a hire date, either `hired_on` or the one already on record. Any
    /// other target status clears the hire date.
    pub fn change_status(
        &self,
        id: EmployeeId,
        to: EmployeeStatus,
        hired_on: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Employee, DirectoryServiceError> {
        let current = self
            .repository
            .fetch_employee(id)?
            .ok_or(RepositoryError::NotFound)?;
        let from = current.employee_status;

        if let Err(err) = ensure_transition(from, to) {
            warn!(employee = id.0, ?from, ?to, "illegal status transition refused");
            return Err(err.into());
        }

        let mut draft = EmployeeDraft::from(&current);
        draft.employee_status = to;
        draft.hired_on = match to {
            EmployeeStatus::Hired => Some(
                hired_on
                    .or(current.hired_on)
                    .ok_or(EmployeeValidationError::HiredOnRequired)?,
            ),
            _ => None,
        };

        let saved = self.save_draft(current, draft, today)?;
        info!(employee = id.0, ?from, ?to, "employee status changed");
        Ok(saved)
    }

    /// Hired employees with their tenure, searchable and paginated like the other lists.
    pub fn hired_report(
        &self,
        query: &HiredReportQuery,
        today: NaiveDate,
    ) -> Result<QueryResult<HiredEmployeeRow>, DirectoryServiceError> {
        let rows: Vec<HiredEmployeeRow> = self
            .repository
            .employees()?
            .iter()
            .filter(|employee| employee.is_hired())
            .filter_map(|employee| {
                let row = HiredEmployeeRow::from_employee(employee, today);
                if row.is_none() {
                    warn!(employee = employee.id.0, "hired employee has no hire date");
                }
                row
            })
            .collect();

        Ok(apply(&rows, query))
    }

    pub fn dashboard_summary(&self) -> Result<DashboardSummary, DirectoryServiceError> {
        let companies = self.repository.companies()?;
        let departments = self.repository.departments()?;
        let employees = self.repository.employees()?;
        Ok(DashboardSummary::from_directory(
            &companies,
            &departments,
            &employees,
        ))
    }

    fn save_draft(
        &self,
        current: Employee,
        draft: EmployeeDraft,
        today: NaiveDate,
    ) -> Result<Employee, DirectoryServiceError> {
        let departments = self.repository.departments()?;
        draft.validate(&departments)?;

        let company_name = if draft.company == current.company {
            current.company_name.clone()
        } else {
            self.company_name(draft.company)?
        };
        let department_name = department_name_for(&departments, draft.department);

        let updated = Employee {
            company: draft.company,
            company_name,
            department: draft.department,
            department_name,
            employee_status: draft.employee_status,
            employee_name: draft.employee_name,
            email_address: draft.email_address,
            mobile_number: draft.mobile_number,
            address: draft.address,
            designation: draft.designation,
            hired_on: draft.hired_on,
            ..current
        }
        .with_derived_fields(today);

        let saved = self.repository.save_employee(updated)?;
        Ok(saved.with_derived_fields(today))
    }

    fn company_name(&self, id: CompanyId) -> Result<String, DirectoryServiceError> {
        let name = self
            .repository
            .companies()?
            .into_iter()
            .find(|company| company.id == id)
            .map(|company| company.company_name)
            .ok_or(EmployeeValidationError::UnknownCompany(id))?;
        Ok(name)
    }
}

fn department_name_for(departments: &[Department], id: Option<DepartmentId>) -> Option<String> {
    let id = id?;
    departments
        .iter()
        .find(|department| department.id == id)
        .map(|department| department.department_name.clone())
}

/// Error raised by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryServiceError {
    #[error(transparent)]
    Validation(#[from] EmployeeValidationError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("cannot delete department '{department}' because it has {employees} employee(s)")]
    DepartmentInUse { department: String, employees: usize },
}
