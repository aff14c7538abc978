mod cli;
mod commands;
mod demo;
mod infra;

use parish_ledger::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
