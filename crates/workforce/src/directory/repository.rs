use super::domain::{Company, Department, DepartmentId, Employee, EmployeeId};

/// Boundary to the directory API. Implementations own transport and session handling.
pub trait DirectoryRepository: Send + Sync {
    fn companies(&self) -> Result<Vec<Company>, RepositoryError>;
    fn departments(&self) -> Result<Vec<Department>, RepositoryError>;
    fn employees(&self) -> Result<Vec<Employee>, RepositoryError>;
    fn fetch_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError>;
    fn save_employee(&self, employee: Employee) -> Result<Employee, RepositoryError>;
    /// Stores a new record. The directory assigns the id; the one passed in is ignored.
    fn create_employee(&self, employee: Employee) -> Result<Employee, RepositoryError>;
    fn delete_employee(&self, id: EmployeeId) -> Result<(), RepositoryError>;
    fn delete_department(&self, id: DepartmentId) -> Result<(), RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("directory rejected the change: {0}")]
    Rejected(String),
    #[error("directory unavailable: {0}")]
    Unavailable(String),
}
