use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::directory::domain::{
    Company, CompanyId, Department, DepartmentId, DirectorySnapshot, Employee, EmployeeId,
};
use crate::directory::repository::{DirectoryRepository, RepositoryError};
use crate::directory::service::DirectoryService;
use crate::directory::validation::EmployeeDraft;
use crate::workflows::hiring::EmployeeStatus;

pub(super) const ACME: CompanyId = CompanyId(1);
pub(super) const GLOBEX: CompanyId = CompanyId(2);
pub(super) const ENGINEERING: DepartmentId = DepartmentId(10);
pub(super) const SALES: DepartmentId = DepartmentId(11);
pub(super) const RESEARCH: DepartmentId = DepartmentId(20);

pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 30).expect("valid date")
}

pub(super) fn timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 2, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn company(id: CompanyId, name: &str) -> Company {
    Company {
        id,
        company_name: name.to_string(),
        number_of_departments: 0,
        number_of_employees: 0,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub(super) fn department(id: DepartmentId, company: CompanyId, name: &str) -> Department {
    let company_name = if company == ACME { "Acme" } else { "Globex" };
    Department {
        id,
        company,
        company_name: company_name.to_string(),
        department_name: name.to_string(),
        number_of_employees: 0,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub(super) fn employee(id: u64, name: &str, status: EmployeeStatus) -> Employee {
    let slug = name.to_lowercase().replace(' ', ".");
    Employee {
        id: EmployeeId(id),
        company: ACME,
        company_name: "Acme".to_string(),
        department: Some(ENGINEERING),
        department_name: Some("Engineering".to_string()),
        employee_status: status,
        employee_name: name.to_string(),
        email_address: format!("{slug}@acme.io"),
        mobile_number: "+15550100200".to_string(),
        address: "1 Main Street".to_string(),
        designation: "Software Engineer".to_string(),
        hired_on: None,
        days_employed: None,
        created_at: timestamp(),
        updated_at: timestamp(),
    }
}

pub(super) fn hired(id: u64, name: &str, hired_on: NaiveDate) -> Employee {
    Employee {
        hired_on: Some(hired_on),
        ..employee(id, name, EmployeeStatus::Hired)
    }
}

pub(super) fn snapshot() -> DirectorySnapshot {
    let mut dana = employee(4, "Dana Reyes", EmployeeStatus::ApplicationReceived);
    dana.company = GLOBEX;
    dana.company_name = "Globex".to_string();
    dana.department = Some(RESEARCH);
    dana.department_name = Some("Research".to_string());
    dana.designation = "Research Analyst".to_string();

    let mut erin = hired(
        5,
        "Erin Walsh",
        NaiveDate::from_ymd_opt(2025, 6, 20).expect("valid"),
    );
    erin.department = Some(SALES);
    erin.department_name = Some("Sales".to_string());
    erin.designation = "Account Executive".to_string();

    DirectorySnapshot {
        companies: vec![company(ACME, "Acme"), company(GLOBEX, "Globex")],
        departments: vec![
            department(ENGINEERING, ACME, "Engineering"),
            department(SALES, ACME, "Sales"),
            department(RESEARCH, GLOBEX, "Research"),
        ],
        employees: vec![
            employee(1, "Alice Smith", EmployeeStatus::ApplicationReceived),
            employee(2, "Bob Alicee", EmployeeStatus::InterviewScheduled),
            hired(
                3,
                "Carol Jones",
                NaiveDate::from_ymd_opt(2025, 6, 1).expect("valid"),
            ),
            dana,
            erin,
            employee(6, "Frank Ode", EmployeeStatus::NotAccepted),
        ],
    }
}

pub(super) fn draft_for(employee: &Employee) -> EmployeeDraft {
    EmployeeDraft::from(employee)
}

#[derive(Default)]
pub(super) struct MemoryDirectory {
    companies: Vec<Company>,
    departments: Mutex<Vec<Department>>,
    employees: Mutex<BTreeMap<EmployeeId, Employee>>,
    order: Mutex<Vec<EmployeeId>>,
    saves: Mutex<Vec<EmployeeId>>,
}

impl MemoryDirectory {
    pub(super) fn from_snapshot(snapshot: DirectorySnapshot) -> Self {
        let order = snapshot.employees.iter().map(|employee| employee.id).collect();
        let employees = snapshot
            .employees
            .into_iter()
            .map(|employee| (employee.id, employee))
            .collect();
        Self {
            companies: snapshot.companies,
            departments: Mutex::new(snapshot.departments),
            employees: Mutex::new(employees),
            order: Mutex::new(order),
            saves: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn saves(&self) -> Vec<EmployeeId> {
        self.saves.lock().expect("saves mutex poisoned").clone()
    }
}

impl DirectoryRepository for MemoryDirectory {
    fn companies(&self) -> Result<Vec<Company>, RepositoryError> {
        Ok(self.companies.clone())
    }

    fn departments(&self) -> Result<Vec<Department>, RepositoryError> {
        Ok(self
            .departments
            .lock()
            .expect("departments mutex poisoned")
            .clone())
    }

    fn employees(&self) -> Result<Vec<Employee>, RepositoryError> {
        let guard = self.employees.lock().expect("employees mutex poisoned");
        let order = self.order.lock().expect("order mutex poisoned");
        Ok(order
            .iter()
            .filter_map(|id| guard.get(id).cloned())
            .collect())
    }

    fn fetch_employee(&self, id: EmployeeId) -> Result<Option<Employee>, RepositoryError> {
        let guard = self.employees.lock().expect("employees mutex poisoned");
        Ok(guard.get(&id).cloned())
    }

    fn save_employee(&self, employee: Employee) -> Result<Employee, RepositoryError> {
        let mut guard = self.employees.lock().expect("employees mutex poisoned");
        if !guard.contains_key(&employee.id) {
            return Err(RepositoryError::NotFound);
        }
        self.saves
            .lock()
            .expect("saves mutex poisoned")
            .push(employee.id);
        guard.insert(employee.id, employee.clone());
        Ok(employee)
    }

    fn create_employee(&self, mut employee: Employee) -> Result<Employee, RepositoryError> {
        let mut guard = self.employees.lock().expect("employees mutex poisoned");
        let next = guard.keys().next_back().map_or(1, |id| id.0 + 1);
        employee.id = EmployeeId(next);
        guard.insert(employee.id, employee.clone());
        self.order
            .lock()
            .expect("order mutex poisoned")
            .push(employee.id);
        Ok(employee)
    }

    fn delete_employee(&self, id: EmployeeId) -> Result<(), RepositoryError> {
        let mut guard = self.employees.lock().expect("employees mutex poisoned");
        guard.remove(&id).ok_or(RepositoryError::NotFound)?;
        self.order
            .lock()
            .expect("order mutex poisoned")
            .retain(|existing| *existing != id);
        Ok(())
    }

    fn delete_department(&self, id: DepartmentId) -> Result<(), RepositoryError> {
        let mut guard = self.departments.lock().expect("departments mutex poisoned");
        let before = guard.len();
        guard.retain(|department| department.id != id);
        if guard.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

pub(super) fn build_service() -> (DirectoryService<MemoryDirectory>, Arc<MemoryDirectory>) {
    let repository = Arc::new(MemoryDirectory::from_snapshot(snapshot()));
    let service = DirectoryService::new(repository.clone());
    (service, repository)
}
