use chrono::{DateTime, Duration, NaiveDate, Utc};
use workforce::directory::{
    Company, CompanyId, Department, DepartmentId, DirectorySnapshot, Employee, EmployeeId,
};
use workforce::workflows::hiring::EmployeeStatus;

const COMPANIES: [(u64, &str); 3] = [
    (1, "Northwind Traders"),
    (2, "Globex Corporation"),
    (3, "Initech"),
];

const DEPARTMENTS: [(u64, u64, &str); 5] = [
    (10, 1, "Engineering"),
    (11, 1, "Sales"),
    (12, 1, "Operations"),
    (20, 2, "Research"),
    (30, 3, "Support"),
];

struct Seed {
    name: &'static str,
    department: u64,
    designation: &'static str,
    status: EmployeeStatus,
    hired_days_ago: Option<i64>,
}

const fn seed(
    name: &'static str,
    department: u64,
    designation: &'static str,
    status: EmployeeStatus,
    hired_days_ago: Option<i64>,
) -> Seed {
    Seed {
        name,
        department,
        designation,
        status,
        hired_days_ago,
    }
}

const EMPLOYEES: [Seed; 14] = [
    seed("Alice Smith", 10, "Software Engineer", EmployeeStatus::ApplicationReceived, None),
    seed("Bob Alicea", 10, "Site Reliability Engineer", EmployeeStatus::InterviewScheduled, None),
    seed("Carol Jones", 10, "Engineering Manager", EmployeeStatus::Hired, Some(412)),
    seed("Dmitri Volkov", 10, "Software Engineer", EmployeeStatus::Hired, Some(37)),
    seed("Erin Walsh", 11, "Account Executive", EmployeeStatus::Hired, Some(190)),
    seed("Farah Haddad", 11, "Sales Development Rep", EmployeeStatus::ApplicationReceived, None),
    seed("Gus Lindqvist", 11, "Account Executive", EmployeeStatus::NotAccepted, None),
    seed("Hana Sato", 12, "Operations Analyst", EmployeeStatus::InterviewScheduled, None),
    seed("Ivan Petrov", 12, "Logistics Coordinator", EmployeeStatus::Hired, Some(5)),
    seed("Jamal Carter", 20, "Research Analyst", EmployeeStatus::ApplicationReceived, None),
    seed("Kira Novak", 20, "Data Scientist", EmployeeStatus::Hired, Some(88)),
    seed("Luis Ortega", 20, "Lab Technician", EmployeeStatus::NotAccepted, None),
    seed("Mei Chen", 30, "Support Specialist", EmployeeStatus::InterviewScheduled, None),
    seed("Noor Rahman", 30, "Support Team Lead", EmployeeStatus::Hired, Some(260)),
];

/// Built-in directory used when no snapshot is configured. Hire dates are relative to `today`.
pub(crate) fn demo_directory(today: NaiveDate) -> DirectorySnapshot {
    let stamp = timestamp(today);

    let employees: Vec<Employee> = EMPLOYEES
        .iter()
        .enumerate()
        .map(|(index, seed)| {
            let (department_id, company_id, department_name) = DEPARTMENTS
                .iter()
                .find(|(id, _, _)| *id == seed.department)
                .copied()
                .unwrap_or(DEPARTMENTS[0]);
            let company_name = company_name(company_id);
            let hired_on = seed.hired_days_ago.map(|days| today - Duration::days(days));

            Employee {
                id: EmployeeId(index as u64 + 1),
                company: CompanyId(company_id),
                company_name: company_name.to_string(),
                department: Some(DepartmentId(department_id)),
                department_name: Some(department_name.to_string()),
                employee_status: seed.status,
                employee_name: seed.name.to_string(),
                email_address: email_for(seed.name, company_name),
                mobile_number: format!("+1555010{:04}", index + 1),
                address: format!("{} Market Street", 100 + index * 7),
                designation: seed.designation.to_string(),
                hired_on,
                days_employed: None,
                created_at: stamp,
                updated_at: stamp,
            }
            .with_derived_fields(today)
        })
        .collect();

    let departments = DEPARTMENTS
        .iter()
        .map(|&(id, company, name)| Department {
            id: DepartmentId(id),
            company: CompanyId(company),
            company_name: company_name(company).to_string(),
            department_name: name.to_string(),
            number_of_employees: 0,
            created_at: stamp,
            updated_at: stamp,
        })
        .collect();

    let companies = COMPANIES
        .iter()
        .map(|&(id, name)| Company {
            id: CompanyId(id),
            company_name: name.to_string(),
            number_of_departments: 0,
            number_of_employees: 0,
            created_at: stamp,
            updated_at: stamp,
        })
        .collect();

    let mut snapshot = DirectorySnapshot {
        companies,
        departments,
        employees,
    };
    snapshot.refresh_counts();
    snapshot
}

fn company_name(id: u64) -> &'static str {
    COMPANIES
        .iter()
        .find(|(company, _)| *company == id)
        .map(|(_, name)| *name)
        .unwrap_or("Unassigned")
}

fn email_for(name: &str, company: &str) -> String {
    let local = name.to_lowercase().replace(' ', ".");
    let domain: String = company
        .split_whitespace()
        .next()
        .unwrap_or("example")
        .to_lowercase();
    format!("{local}@{domain}.example")
}

fn timestamp(today: NaiveDate) -> DateTime<Utc> {
    today
        .and_hms_opt(9, 0, 0)
        .map(|moment| moment.and_utc())
        .unwrap_or_default()
}
