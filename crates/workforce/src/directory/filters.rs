use crate::listing::{FieldFilter, NoFilter, QueryConfig, SearchTerm, Searchable};
use crate::workflows::hiring::EmployeeStatus;

use super::domain::{Company, CompanyId, Department, DepartmentId, Employee};
use super::report::HiredEmployeeRow;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EmployeeField {
    Company,
    Department,
    Status,
}

/// Select-box filters offered by the employee list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeFilter {
    Company(CompanyId),
    Department(DepartmentId),
    Status(EmployeeStatus),
}

impl FieldFilter for EmployeeFilter {
    type Entity = Employee;
    type Field = EmployeeField;

    fn field(&self) -> EmployeeField {
        match self {
            Self::Company(_) => EmployeeField::Company,
            Self::Department(_) => EmployeeField::Department,
            Self::Status(_) => EmployeeField::Status,
        }
    }

    fn matches(&self, employee: &Employee) -> bool {
        match self {
            Self::Company(id) => employee.company == *id,
            Self::Department(id) => employee.department == Some(*id),
            Self::Status(status) => employee.employee_status == *status,
        }
    }
}

impl Searchable for Employee {
    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([
            self.employee_name.as_str(),
            self.email_address.as_str(),
            self.designation.as_str(),
        ])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DepartmentField {
    Company,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentFilter {
    Company(CompanyId),
}

impl FieldFilter for DepartmentFilter {
    type Entity = Department;
    type Field = DepartmentField;

    fn field(&self) -> DepartmentField {
        match self {
            Self::Company(_) => DepartmentField::Company,
        }
    }

    fn matches(&self, department: &Department) -> bool {
        match self {
            Self::Company(id) => department.company == *id,
        }
    }
}

impl Searchable for Department {
    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([self.department_name.as_str(), self.company_name.as_str()])
    }
}

impl Searchable for Company {
    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches(&self.company_name)
    }
}

impl Searchable for HiredEmployeeRow {
    fn matches_search(&self, term: &SearchTerm) -> bool {
        term.matches_any([
            self.employee_name.as_str(),
            self.email_address.as_str(),
            self.company_name.as_str(),
            self.department_name.as_deref().unwrap_or_default(),
            self.position.as_str(),
        ])
    }
}

pub type EmployeeQuery = QueryConfig<EmployeeFilter>;
pub type DepartmentQuery = QueryConfig<DepartmentFilter>;
pub type CompanyQuery = QueryConfig<NoFilter<Company>>;
pub type HiredReportQuery = QueryConfig<NoFilter<HiredEmployeeRow>>;
