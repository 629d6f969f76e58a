//! Companies, departments, and employees as served by the directory API, plus the view-side
//! operations built on the hiring workflow and the list query engine.

pub mod domain;
pub mod filters;
pub mod report;
pub mod repository;
pub mod service;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Company, CompanyId, Department, DepartmentId, DirectorySnapshot, Employee, EmployeeId,
    SnapshotError,
};
pub use filters::{
    CompanyQuery, DepartmentField, DepartmentFilter, DepartmentQuery, EmployeeField,
    EmployeeFilter, EmployeeQuery, HiredReportQuery,
};
pub use report::{write_hired_csv, HiredEmployeeRow, ReportError};
pub use repository::{DirectoryRepository, RepositoryError};
pub use service::{DirectoryService, DirectoryServiceError};
pub use summary::DashboardSummary;
pub use validation::{EmployeeDraft, EmployeeValidationError};
