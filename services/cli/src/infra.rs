use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};
use workforce::directory::{
    Company, Department, DepartmentId, DirectoryRepository, DirectorySnapshot, Employee,
    EmployeeId, RepositoryError,
};
use workforce::error::AppError;

/// Directory backed by a JSON export of the API. Saved changes are written back to the file.
pub(crate) struct SnapshotDirectory {
    snapshot: Mutex<DirectorySnapshot>,
    path: Option<PathBuf>,
}

impl SnapshotDirectory {
    pub(crate) fn open(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let raw = fs::read_to_string(&path)?;
        let snapshot = DirectorySnapshot::from_json(&raw)?;
        info!(
            path = %path.display(),
            companies = snapshot.companies.len(),
            departments = snapshot.departments.len(),
            employees = snapshot.employees.len(),
            "directory snapshot loaded"
        );

        Ok(Self {
            snapshot: Mutex::new(snapshot),
            path: Some(path),
        })
    }

    pub(crate) fn in_memory(snapshot: DirectorySnapshot) -> Self {
        Self {
            snapshot: Mutex::new(snapshot),
            path: None,
        }
    }

    /// Applies `change` to a copy of the snapshot and swaps it in once it has been written out.
    fn commit<T>(
        &self,
        change: impl FnOnce(&mut DirectorySnapshot) -> Result<T, RepositoryError>,
    ) -> Result<T, RepositoryError> {
        let mut guard = self.snapshot.lock().expect("snapshot mutex poisoned");
        let mut next = guard.clone();
        let outcome = change(&mut next)?;
        next.refresh_counts();
        self.persist(&next)?;
        *guard = next;
        Ok(outcome)
    }

    fn persist(&self, snapshot: &DirectorySnapshot) -> Result<(), RepositoryError> {
        let Some(path) = &self.path else {
            return Ok(());
        };

        let rendered = snapshot
            .to_json()
            .map_err(|err| RepositoryError::Unavailable(err.to_string()))?;
        fs::write(path, rendered).map_err(|err| {
            RepositoryError::Unavailable(format!("failed to write {}: {err}", path.display()))
        })?;
        debug!(path = %path.display(), "directory snapshot saved");
        Ok(())
    }
}

impl DirectoryRepository for SnapshotDirectory {
    fn companies(&self) -> Result<Vec<Company>, RepositoryError> {
        let guard = self.snapshot.lock().expect("snapshot mutex poisoned");
        Ok(guard.companies.clone())
    }

    fn departments(&self) -> Result<Vec<Department>, RepositoryError> {
        let guard = self.snapshot.lock().expect("snapshot mutex poisoned");
        Ok(guard.departments.clone())
    }

    fn employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        let guard = self.snapshot.lock().expect("snapshot mutex poisoned");
        Ok(guard.employees.clone())
    }

    fn fetch_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.snapshot.lock().expect("snapshot mutex poisoned");
        Ok(guard
            .employees
            .iter()
            .find(|employee| employee.id == id)
            .cloned())
    }

    fn save_employee(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        self.commit(|snapshot| {
            let slot = snapshot
                .employees
                .iter_mut()
                .find(|existing| existing.id == employee.id)
                .ok_or(RepositoryError::NotFound)?;
            *slot = employee.clone();
            Ok(employee)
        })
    }

    fn create_employee(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        self.commit(|snapshot| {
            employee.id = snapshot.next_employee_id();
            snapshot.employees.push(employee.clone());
            Ok(employee)
        })
    }

    fn delete_employee(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        self.commit(|snapshot| {
            let before = snapshot.employees.len();
            snapshot.employees.retain(|employee| employee.id != id);
            if snapshot.employees.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }

    fn delete_department(&self, id: DepartmentId) -> Result<(), RepositoryError> {
        self.commit(|snapshot| {
            let before = snapshot.departments.len();
            snapshot.departments.retain(|department| department.id != id);
            if snapshot.departments.len() == before {
                return Err(RepositoryError::NotFound);
            }
            Ok(())
        })
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}
