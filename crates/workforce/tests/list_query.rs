use chrono::{NaiveDate, TimeZone, Utc};
use workforce::directory::{
    CompanyId, DepartmentId, Employee, EmployeeFilter, EmployeeId, EmployeeQuery,
};
use workforce::listing::{apply, QueryConfig, QueryError};
use workforce::workflows::hiring::EmployeeStatus;

fn employee(id: u64, name: &str, company: u64, department: u64) -> Employee {
    let created_at = Utc
        .with_ymd_and_hms(2025, 1, 1, 8, 0, 0)
        .single()
        .expect("valid timestamp");
    Employee {
        id: EmployeeId(id),
        company: CompanyId(company),
        company_name: format!("Company {company}"),
        department: Some(DepartmentId(department)),
        department_name: Some(format!("Department {department}")),
        employee_status: EmployeeStatus::ApplicationReceived,
        employee_name: name.to_string(),
        email_address: format!("employee{id}@example.com"),
        mobile_number: "+15550100200".to_string(),
        address: "221B Baker Street".to_string(),
        designation: "Analyst".to_string(),
        hired_on: None,
        days_employed: None,
        created_at,
        updated_at: created_at,
    }
}

fn roster(count: u64) -> Vec<Employee> {
    (1..=count)
        .map(|id| employee(id, &format!("Employee {id:02}"), 1 + id % 2, 3 + id % 3))
        .collect()
}

#[test]
fn paginates_twenty_five_employees_in_pages_of_ten() {
    let employees = roster(25);
    let query = EmployeeQuery::new(10).expect("valid page size");

    let first = apply(&employees, &query.clone().page(1));
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_count, 25);
    assert_eq!(first.items[0].id, EmployeeId(1));

    let third = apply(&employees, &query.clone().page(3));
    assert_eq!(third.items.len(), 5);
    assert_eq!(third.total_count, 25);
    assert_eq!(third.items[0].id, EmployeeId(21));

    let fourth = apply(&employees, &query.page(4));
    assert!(fourth.items.is_empty());
    assert_eq!(fourth.total_count, 25);

    let info = first.page_info();
    assert_eq!(info.total_pages, 3);
    assert_eq!((info.first_item, info.last_item), (1, 10));
    assert!(info.has_next);
    assert!(!info.has_previous);
}

#[test]
fn search_matches_case_insensitive_substrings_only() {
    let employees = vec![
        employee(1, "Alice Smith", 1, 1),
        employee(2, "Bob Alicee", 1, 1),
        employee(3, "Carol Jones", 1, 1),
    ];

    for term in ["alic", "ALIC", "aLiC"] {
        let result = apply(&employees, &EmployeeQuery::default().search(term));
        let ids: Vec<_> = result.items.iter().map(|employee| employee.id).collect();
        assert_eq!(ids, vec![EmployeeId(1), EmployeeId(2)], "term {term}");
        assert_eq!(result.total_count, 2);
    }
}

#[test]
fn company_and_department_filters_intersect() {
    let employees = roster(25);

    let company_then_department = EmployeeQuery::default()
        .filter(EmployeeFilter::Company(CompanyId(2)))
        .filter(EmployeeFilter::Department(DepartmentId(3)));
    let department_then_company = EmployeeQuery::default()
        .filter(EmployeeFilter::Department(DepartmentId(3)))
        .filter(EmployeeFilter::Company(CompanyId(2)));

    let forward = apply(&employees, &company_then_department);
    let backward = apply(&employees, &department_then_company);

    assert_eq!(forward, backward);
    assert!(forward.total_count > 0);
    assert!(forward.items.iter().all(|employee| {
        employee.company == CompanyId(2) && employee.department == Some(DepartmentId(3))
    }));

    let expected = employees
        .iter()
        .filter(|employee| employee.id.0 % 2 == 1 && employee.id.0 % 3 == 0)
        .count();
    assert_eq!(forward.total_count, expected);
}

#[test]
fn total_count_covers_every_page_of_filtered_results() {
    let employees = roster(25);
    let query = EmployeeQuery::new(4)
        .expect("valid page size")
        .filter(EmployeeFilter::Company(CompanyId(1)));

    let first = apply(&employees, &query);
    let pages = first.page_info().total_pages as u32;
    let seen: usize = (1..=pages)
        .map(|page| apply(&employees, &query.clone().page(page)).items.len())
        .sum();

    assert_eq!(first.total_count, 12);
    assert_eq!(seen, first.total_count);
}

#[test]
fn apply_is_idempotent_and_leaves_input_untouched() {
    let employees = roster(25);
    let before = employees.clone();
    let query = EmployeeQuery::new(7)
        .expect("valid page size")
        .search("employee 1")
        .page(2);

    let first = apply(&employees, &query);
    let second = apply(&employees, &query);

    assert_eq!(first, second);
    assert_eq!(employees, before);
}

#[test]
fn zero_page_size_is_refused() {
    assert_eq!(
        QueryConfig::<EmployeeFilter>::new(0).err(),
        Some(QueryError::ZeroPageSize)
    );
}
