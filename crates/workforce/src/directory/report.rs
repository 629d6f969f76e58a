use std::io;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::domain::Employee;

/// One line of the hired employees report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HiredEmployeeRow {
    pub employee_name: String,
    pub email_address: String,
    pub mobile_number: String,
    pub position: String,
    pub hired_on: NaiveDate,
    pub days_employed: u32,
    pub company_name: String,
    pub department_name: Option<String>,
}

impl HiredEmployeeRow {
    /// Builds a row for hired employees that have a recorded hire date.
    pub fn from_employee(employee: &Employee, today: NaiveDate) -> Option<Self> {
        let days_employed = employee.days_employed_on(today)?;
        let hired_on = employee.hired_on?;

        Some(Self {
            employee_name: employee.employee_name.clone(),
            email_address: employee.email_address.clone(),
            mobile_number: employee.mobile_number.clone(),
            position: employee.designation.clone(),
            hired_on,
            days_employed,
            company_name: employee.company_name.clone(),
            department_name: employee.department_name.clone(),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write report csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush report: {0}")]
    Io(#[from] io::Error),
}

const CSV_HEADERS: [&str; 8] = [
    "Employee Name",
    "Email",
    "Mobile Number",
    "Position",
    "Hired On",
    "Days Employed",
    "Company",
    "Department",
];

/// Exports report rows as CSV with a header line.
pub fn write_hired_csv<W: io::Write>(
    rows: &[HiredEmployeeRow],
    writer: W,
) -> Result<(), ReportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(CSV_HEADERS)?;

    for row in rows {
        let hired_on = row.hired_on.format("%Y-%m-%d").to_string();
        let days_employed = row.days_employed.to_string();
        out.write_record([
            row.employee_name.as_str(),
            row.email_address.as_str(),
            row.mobile_number.as_str(),
            row.position.as_str(),
            hired_on.as_str(),
            days_employed.as_str(),
            row.company_name.as_str(),
            row.department_name.as_deref().unwrap_or_default(),
        ])?;
    }

    out.flush()?;
    Ok(())
}
