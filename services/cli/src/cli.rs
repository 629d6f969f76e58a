use crate::commands::{
    create_employee, delete_department, delete_employee, export_hired_report, list_companies,
    list_departments, list_employees, show_employee, show_statuses, show_summary,
    transition_employee, CommandContext, CompanyListArgs, DepartmentListArgs,
    EmployeeCreateArgs, EmployeeListArgs, HiredReportArgs, TransitionArgs,
};
use crate::demo::demo_directory;
use crate::infra::SnapshotDirectory;
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use workforce::config::AppConfig;
use workforce::directory::{DepartmentId, DirectoryRepository, DirectoryService, EmployeeId};
use workforce::error::AppError;
use workforce::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "workforce",
    about = "Browse the company directory and move applicants through the hiring workflow",
    version
)]
struct Cli {
    /// Directory snapshot (JSON) to operate on. Overrides WORKFORCE_DATA_PATH.
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Evaluation date for tenure calculations (defaults to today)
    #[arg(long, global = true, value_parser = crate::infra::parse_date)]
    today: Option<NaiveDate>,
    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage employee records and their hiring status
    Employees {
        #[command(subcommand)]
        command: EmployeesCommand,
    },
    /// List departments
    Departments {
        #[command(subcommand)]
        command: DepartmentsCommand,
    },
    /// List companies
    Companies {
        #[command(subcommand)]
        command: CompaniesCommand,
    },
    /// Show the hiring workflow and its allowed transitions
    Statuses,
    /// Reports derived from the directory
    Report {
        #[command(subcommand)]
        command: ReportCommand,
    },
    /// Dashboard counts across the directory
    Summary,
}

#[derive(Subcommand, Debug)]
enum EmployeesCommand {
    /// Filter, search, and page through employees
    List(EmployeeListArgs),
    /// Show one employee and the statuses they can move to
    Show {
        /// Employee id
        id: u64,
    },
    /// Add a new applicant (starts as Application Received)
    Create(EmployeeCreateArgs),
    /// Move an employee to another hiring status
    Transition(TransitionArgs),
    /// Remove an employee record
    Delete {
        /// Employee id
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
enum DepartmentsCommand {
    List(DepartmentListArgs),
    /// Remove a department that has no employees left
    Delete {
        /// Department id
        id: u64,
    },
}

#[derive(Subcommand, Debug)]
enum CompaniesCommand {
    List(CompanyListArgs),
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Hired employees with days employed, optionally exported as CSV
    Hired(HiredReportArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    let repository = match cli.data.or(config.directory.snapshot_path) {
        Some(path) => SnapshotDirectory::open(path)?,
        None => {
            info!(?config.environment, "no directory snapshot configured, using demo data");
            SnapshotDirectory::in_memory(demo_directory(today))
        }
    };
    let service = DirectoryService::new(Arc::new(repository));
    let context = CommandContext {
        today,
        json: cli.json,
        page_size: config.directory.page_size,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    dispatch(&service, &context, cli.command, &mut out)
}

fn dispatch<R, W>(
    service: &DirectoryService<R>,
    context: &CommandContext,
    command: Command,
    out: &mut W,
) -> Result<(), AppError>
where
    R: DirectoryRepository + 'static,
    W: Write,
{
    match command {
        Command::Employees {
            command: EmployeesCommand::List(args),
        } => list_employees(service, context, args, out),
        Command::Employees {
            command: EmployeesCommand::Show { id },
        } => show_employee(service, context, EmployeeId(id), out),
        Command::Employees {
            command: EmployeesCommand::Create(args),
        } => create_employee(service, context, args, out),
        Command::Employees {
            command: EmployeesCommand::Transition(args),
        } => transition_employee(service, context, args, out),
        Command::Employees {
            command: EmployeesCommand::Delete { id },
        } => delete_employee(service, context, EmployeeId(id), out),
        Command::Departments {
            command: DepartmentsCommand::List(args),
        } => list_departments(service, context, args, out),
        Command::Departments {
            command: DepartmentsCommand::Delete { id },
        } => delete_department(service, context, DepartmentId(id), out),
        Command::Companies {
            command: CompaniesCommand::List(args),
        } => list_companies(service, context, args, out),
        Command::Statuses => show_statuses(context, out),
        Command::Report {
            command: ReportCommand::Hired(args),
        } => export_hired_report(service, context, args, out),
        Command::Summary => show_summary(service, context, out),
    }
}
