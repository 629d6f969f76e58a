use serde::Serialize;

use crate::workflows::hiring::EmployeeStatus;

use super::domain::{Company, Department, Employee};

/// Headline counts shown on the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardSummary {
    pub total_companies: usize,
    pub total_departments: usize,
    pub total_employees: usize,
    pub hired_employees: usize,
    pub pending_applications: usize,
    pub scheduled_interviews: usize,
    pub not_selected_employees: usize,
}

impl DashboardSummary {
    pub fn from_directory(
        companies: &[Company],
        departments: &[Department],
        employees: &[Employee],
    ) -> Self {
        let count = |status: EmployeeStatus| {
            employees
                .iter()
                .filter(|employee| employee.employee_status == status)
                .count()
        };

        Self {
            total_companies: companies.len(),
            total_departments: departments.len(),
            total_employees: employees.len(),
            hired_employees: count(EmployeeStatus::Hired),
            pending_applications: count(EmployeeStatus::ApplicationReceived),
            scheduled_interviews: count(EmployeeStatus::InterviewScheduled),
            not_selected_employees: count(EmployeeStatus::NotAccepted),
        }
    }

    pub fn count_for(&self, status: EmployeeStatus) -> usize {
        match status {
            EmployeeStatus::ApplicationReceived => self.pending_applications,
            EmployeeStatus::InterviewScheduled => self.scheduled_interviews,
            EmployeeStatus::Hired => self.hired_employees,
            EmployeeStatus::NotAccepted => self.not_selected_employees,
        }
    }
}
