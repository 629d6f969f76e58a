mod cli;
mod commands;
mod demo;
mod infra;

use workforce::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
