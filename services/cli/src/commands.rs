use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use serde_json::json;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use workforce::directory::{
    write_hired_csv, CompanyId, CompanyQuery, DepartmentFilter, DepartmentId, DepartmentQuery,
    DirectoryRepository, DirectoryService, Employee, EmployeeDraft, EmployeeFilter, EmployeeId,
    EmployeeQuery, HiredReportQuery,
};
use workforce::error::AppError;
use workforce::listing::{PageInfo, QueryResult};
use workforce::workflows::hiring::EmployeeStatus;

/// Settings shared by every command invocation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CommandContext {
    pub(crate) today: NaiveDate,
    pub(crate) json: bool,
    pub(crate) page_size: NonZeroUsize,
}

impl CommandContext {
    fn page_size(&self, requested: Option<NonZeroUsize>) -> NonZeroUsize {
        requested.unwrap_or(self.page_size)
    }
}

#[derive(Args, Debug)]
pub(crate) struct EmployeeListArgs {
    /// Case-insensitive match on name, email, or designation
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only employees of this company id
    #[arg(long)]
    pub(crate) company: Option<u64>,
    /// Only employees of this department id
    #[arg(long)]
    pub(crate) department: Option<u64>,
    /// Only employees in this status (e.g. interview_scheduled)
    #[arg(long)]
    pub(crate) status: Option<EmployeeStatus>,
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) page: u32,
    /// Rows per page (defaults to WORKFORCE_PAGE_SIZE)
    #[arg(long)]
    pub(crate) page_size: Option<NonZeroUsize>,
}

#[derive(Args, Debug)]
pub(crate) struct DepartmentListArgs {
    /// Case-insensitive match on department or company name
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Only departments of this company id
    #[arg(long)]
    pub(crate) company: Option<u64>,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) page: u32,
    #[arg(long)]
    pub(crate) page_size: Option<NonZeroUsize>,
}

#[derive(Args, Debug)]
pub(crate) struct CompanyListArgs {
    /// Case-insensitive match on company name
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) page: u32,
    #[arg(long)]
    pub(crate) page_size: Option<NonZeroUsize>,
}

#[derive(Args, Debug)]
pub(crate) struct EmployeeCreateArgs {
    /// Company id the applicant is applying to
    #[arg(long)]
    pub(crate) company: u64,
    /// Department id within that company
    #[arg(long)]
    pub(crate) department: Option<u64>,
    #[arg(long)]
    pub(crate) name: String,
    #[arg(long)]
    pub(crate) email: String,
    /// Mobile number such as +14155550123
    #[arg(long)]
    pub(crate) mobile: String,
    #[arg(long)]
    pub(crate) address: String,
    #[arg(long)]
    pub(crate) designation: String,
}

#[derive(Args, Debug)]
pub(crate) struct TransitionArgs {
    /// Employee id
    pub(crate) id: u64,
    /// Target status (application_received, interview_scheduled, hired, not_accepted)
    #[arg(long)]
    pub(crate) to: EmployeeStatus,
    /// Hire date (YYYY-MM-DD), required when hiring someone without a recorded date
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) hired_on: Option<NaiveDate>,
}

#[derive(Args, Debug)]
pub(crate) struct HiredReportArgs {
    /// Case-insensitive match on name, email, company, department, or position
    #[arg(long)]
    pub(crate) search: Option<String>,
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub(crate) page: u32,
    #[arg(long)]
    pub(crate) page_size: Option<NonZeroUsize>,
    /// Write every matching row (all pages) to this CSV file
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) fn list_employees<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    args: EmployeeListArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let mut query = EmployeeQuery::with_page_size(context.page_size(args.page_size))
        .search(args.search.unwrap_or_default())
        .page(args.page);
    if let Some(company) = args.company {
        query = query.filter(EmployeeFilter::Company(CompanyId(company)));
    }
    if let Some(department) = args.department {
        query = query.filter(EmployeeFilter::Department(DepartmentId(department)));
    }
    if let Some(status) = args.status {
        query = query.filter(EmployeeFilter::Status(status));
    }

    let result = service.list_employees(&query, context.today)?;
    if context.json {
        return write_json_page(out, &result);
    }

    writeln!(out, "Employees")?;
    write_rows(out, &result, "No employees match the current filters.", |out, employee| {
        writeln!(
            out,
            "  #{:<4} {:<20} {:<34} {:<26} {}",
            employee.id.0,
            employee.employee_name,
            employee.email_address,
            employee.designation,
            status_with_tenure(employee)
        )
    })
}

pub(crate) fn show_employee<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    id: EmployeeId,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let employee = service.employee(id, context.today)?;
    let next: Vec<EmployeeStatus> = employee
        .employee_status
        .valid_transitions()
        .iter()
        .filter(|status| *status != employee.employee_status)
        .collect();

    if context.json {
        return write_json(
            out,
            &json!({ "employee": employee, "next_statuses": next }),
        );
    }

    writeln!(out, "{} (#{})", employee.employee_name, employee.id.0)?;
    writeln!(out, "  Email: {}", employee.email_address)?;
    writeln!(out, "  Mobile: {}", employee.mobile_number)?;
    writeln!(out, "  Address: {}", employee.address)?;
    writeln!(out, "  Designation: {}", employee.designation)?;
    writeln!(out, "  Company: {}", employee.company_name)?;
    writeln!(
        out,
        "  Department: {}",
        employee.department_name.as_deref().unwrap_or("-")
    )?;
    writeln!(out, "  Status: {}", status_with_tenure(&employee))?;
    if let Some(hired_on) = employee.hired_on {
        writeln!(out, "  Hired on: {hired_on}")?;
    }
    if next.is_empty() {
        writeln!(out, "  Next statuses: none (final)")?;
    } else {
        writeln!(out, "  Next statuses: {}", join_labels(next))?;
    }
    Ok(())
}

pub(crate) fn create_employee<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    args: EmployeeCreateArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let mut draft = EmployeeDraft::new(CompanyId(args.company));
    draft.department = args.department.map(DepartmentId);
    draft.employee_name = args.name;
    draft.email_address = args.email;
    draft.mobile_number = args.mobile;
    draft.address = args.address;
    draft.designation = args.designation;

    let created = service.create_employee(draft, context.today)?;
    if context.json {
        return write_json(out, &created);
    }

    writeln!(
        out,
        "Created #{} {} at {} ({})",
        created.id.0, created.employee_name, created.company_name, created.employee_status
    )?;
    Ok(())
}

pub(crate) fn delete_employee<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    id: EmployeeId,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    service.delete_employee(id)?;
    if context.json {
        return write_json(out, &json!({ "deleted": id }));
    }
    writeln!(out, "Deleted employee #{}", id.0)?;
    Ok(())
}

pub(crate) fn delete_department<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    id: DepartmentId,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    service.delete_department(id)?;
    if context.json {
        return write_json(out, &json!({ "deleted": id }));
    }
    writeln!(out, "Deleted department #{}", id.0)?;
    Ok(())
}

pub(crate) fn transition_employee<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    args: TransitionArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let id = EmployeeId(args.id);
    let previous = service.employee(id, context.today)?.employee_status;
    let updated = service.change_status(id, args.to, args.hired_on, context.today)?;

    if context.json {
        return write_json(out, &updated);
    }

    writeln!(
        out,
        "{} moved from {} to {}",
        updated.employee_name,
        previous,
        status_with_tenure(&updated)
    )?;
    Ok(())
}

pub(crate) fn list_departments<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    args: DepartmentListArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let mut query = DepartmentQuery::with_page_size(context.page_size(args.page_size))
        .search(args.search.unwrap_or_default())
        .page(args.page);
    if let Some(company) = args.company {
        query = query.filter(DepartmentFilter::Company(CompanyId(company)));
    }

    let result = service.list_departments(&query)?;
    if context.json {
        return write_json_page(out, &result);
    }

    writeln!(out, "Departments")?;
    write_rows(out, &result, "No departments match the current filters.", |out, department| {
        writeln!(
            out,
            "  #{:<4} {:<20} {:<22} {} employees",
            department.id.0,
            department.department_name,
            department.company_name,
            department.number_of_employees
        )
    })
}

pub(crate) fn list_companies<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    args: CompanyListArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let query = CompanyQuery::with_page_size(context.page_size(args.page_size))
        .search(args.search.unwrap_or_default())
        .page(args.page);

    let result = service.list_companies(&query)?;
    if context.json {
        return write_json_page(out, &result);
    }

    writeln!(out, "Companies")?;
    write_rows(out, &result, "No companies match the current search.", |out, company| {
        writeln!(
            out,
            "  #{:<4} {:<22} {} departments, {} employees",
            company.id.0,
            company.company_name,
            company.number_of_departments,
            company.number_of_employees
        )
    })
}

pub(crate) fn show_statuses<W: Write>(
    context: &CommandContext,
    out: &mut W,
) -> Result<(), AppError> {
    if context.json {
        let table: Vec<_> = EmployeeStatus::ordered()
            .into_iter()
            .map(|status| {
                json!({
                    "status": status,
                    "label": status.label(),
                    "valid_transitions": status.valid_transitions(),
                    "terminal": status.is_terminal(),
                })
            })
            .collect();
        return write_json(out, &table);
    }

    writeln!(out, "Hiring workflow")?;
    for status in EmployeeStatus::ordered() {
        let targets: Vec<EmployeeStatus> = status
            .valid_transitions()
            .iter()
            .filter(|target| *target != status)
            .collect();
        let targets = if targets.is_empty() {
            "(final)".to_string()
        } else {
            join_labels(targets)
        };
        writeln!(
            out,
            "  {:<22} {:<22} -> {}",
            status.label(),
            status.wire_name(),
            targets
        )?;
    }
    Ok(())
}

pub(crate) fn export_hired_report<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    args: HiredReportArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let search = args.search.unwrap_or_default();

    if let Some(path) = args.csv {
        let everything = HiredReportQuery::with_page_size(NonZeroUsize::MAX).search(search);
        let rows = service.hired_report(&everything, context.today)?.items;
        let file = BufWriter::new(File::create(&path)?);
        write_hired_csv(&rows, file)?;
        writeln!(
            out,
            "Exported {} hired employees to {}",
            rows.len(),
            path.display()
        )?;
        return Ok(());
    }

    let query = HiredReportQuery::with_page_size(context.page_size(args.page_size))
        .search(search)
        .page(args.page);
    let result = service.hired_report(&query, context.today)?;
    if context.json {
        return write_json_page(out, &result);
    }

    writeln!(out, "Hired employees as of {}", context.today)?;
    write_rows(out, &result, "No hired employees match the current search.", |out, row| {
        writeln!(
            out,
            "  {:<20} {:<26} {:<22} {:<14} hired {} ({} days)",
            row.employee_name,
            row.position,
            row.company_name,
            row.department_name.as_deref().unwrap_or("-"),
            row.hired_on,
            row.days_employed
        )
    })
}

pub(crate) fn show_summary<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    let summary = service.dashboard_summary()?;
    if context.json {
        return write_json(out, &summary);
    }

    writeln!(out, "Directory summary")?;
    writeln!(out, "  Companies: {}", summary.total_companies)?;
    writeln!(out, "  Departments: {}", summary.total_departments)?;
    writeln!(out, "  Employees: {}", summary.total_employees)?;
    for status in EmployeeStatus::ordered() {
        writeln!(out, "    {}: {}", status.label(), summary.count_for(status))?;
    }
    Ok(())
}

fn write_rows<E, W>(
    out: &mut W,
    result: &QueryResult<E>,
    empty_message: &str,
    mut render: impl FnMut(&mut W, &E) -> io::Result<()>,
) -> Result<(), AppError>
where
    W: Write,
{
    let info = result.page_info();
    if result.is_empty() {
        writeln!(out, "  {empty_message}")?;
    } else {
        for item in &result.items {
            render(out, item)?;
        }
    }
    writeln!(out, "  {}", pagination_line(&info))?;
    Ok(())
}

fn pagination_line(info: &PageInfo) -> String {
    if info.total_count == 0 {
        return "Showing 0 results".to_string();
    }
    if info.first_item == 0 {
        return format!(
            "Page {} is past the last page ({} of {} results)",
            info.page, info.total_pages, info.total_count
        );
    }
    format!(
        "Showing {}-{} of {} (page {} of {})",
        info.first_item, info.last_item, info.total_count, info.page, info.total_pages
    )
}

fn status_with_tenure(employee: &Employee) -> String {
    match employee.days_employed {
        Some(days) => format!("{} ({days} days)", employee.employee_status),
        None => employee.employee_status.to_string(),
    }
}

fn join_labels(statuses: Vec<EmployeeStatus>) -> String {
    statuses
        .into_iter()
        .map(EmployeeStatus::label)
        .collect::<Vec<_>>()
        .join(", ")
}

fn write_json_page<E: Serialize, W: Write>(
    out: &mut W,
    result: &QueryResult<E>,
) -> Result<(), AppError> {
    write_json(
        out,
        &json!({ "items": result.items, "page": result.page_info() }),
    )
}

/// Serializer failures here are output failures, so they surface as I/O errors.
fn write_json<T: Serialize + ?Sized, W: Write>(out: &mut W, value: &T) -> Result<(), AppError> {
    serde_json::to_writer_pretty(&mut *out, value).map_err(io::Error::from)?;
    writeln!(out)?;
    Ok(())
}
