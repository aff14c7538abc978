use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use parish_ledger::error::AppError;
use parish_ledger::intentions::{IntentionType, MassTime};
use parish_ledger::receipts::{ReceiptField, SortDirection};
use parish_ledger::reports::ReportKind;

use crate::commands;
use crate::demo::{run_demo, DemoArgs};

#[derive(Parser, Debug)]
#[command(
    name = "Parish Ledger",
    about = "Capture receipts, mass intentions and office reports for a parish from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show collection totals and the latest captured folios (default command)
    Dashboard,
    /// Capture, pay down and look up receipt folios
    Receipts {
        #[command(subcommand)]
        command: ReceiptCommand,
    },
    /// Register mass intentions and print day sheets
    Intentions {
        #[command(subcommand)]
        command: IntentionCommand,
    },
    /// Summarize collections for the week or month around a date
    Report(ReportArgs),
    /// Write Word documents and CSV extracts for office paperwork
    Export {
        #[command(subcommand)]
        command: ExportCommand,
    },
    /// Manage the shared staff accounts
    Users {
        #[command(subcommand)]
        command: UserCommand,
    },
    /// Run an end-to-end in-memory demo of the parish workflows
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
pub(crate) enum ReceiptCommand {
    /// Capture a folio, or update one that still has a balance
    Add(ReceiptAddArgs),
    /// List every folio in capture order
    List,
    /// Look up one folio by its number
    Find {
        /// Folio printed on the paper receipt
        folio: String,
    },
    /// Case-insensitive substring search over one field
    Search {
        /// Field to search: folio, nombre, celebracion, fecha, hora, lugar, pagado or restante
        #[arg(long, default_value = "folio", value_parser = crate::infra::parse_field)]
        field: ReceiptField,
        /// Text to look for; leave blank to list everything
        #[arg(default_value = "")]
        term: String,
    },
    /// Print the ledger ordered by one field
    Sort {
        /// Field to order by: folio, nombre, celebracion, fecha, hora, lugar, pagado or restante
        #[arg(long, default_value = "fecha", value_parser = crate::infra::parse_field)]
        field: ReceiptField,
        /// asc or desc
        #[arg(long, default_value = "asc", value_parser = crate::infra::parse_direction)]
        direction: SortDirection,
    },
}

#[derive(Args, Debug)]
pub(crate) struct ReceiptAddArgs {
    /// Folio printed on the paper receipt
    #[arg(long)]
    pub(crate) folio: String,
    /// Person requesting the celebration
    #[arg(long)]
    pub(crate) person: String,
    /// Celebration the receipt pays for (Boda, Bautizo, XV Años, ...)
    #[arg(long)]
    pub(crate) celebration: String,
    /// Celebration date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: NaiveDate,
    /// Celebration time as it should appear on paperwork, e.g. "12:00 PM"
    #[arg(long, default_value = "12:00 PM")]
    pub(crate) time: String,
    /// Where the celebration takes place
    #[arg(long, default_value = "Templo principal")]
    pub(crate) location: String,
    /// Amount received so far
    #[arg(long, value_parser = crate::infra::parse_amount)]
    pub(crate) paid: f64,
    /// Balance still owed; zero settles the folio
    #[arg(long, default_value_t = 0.0, value_parser = crate::infra::parse_amount)]
    pub(crate) remaining: f64,
}

#[derive(Subcommand, Debug)]
pub(crate) enum IntentionCommand {
    /// Register an intention for one of the two daily masses
    Add(IntentionAddArgs),
    /// Print the day sheet for both mass times
    Day {
        /// Mass date (YYYY-MM-DD)
        #[arg(value_parser = crate::infra::parse_date)]
        date: NaiveDate,
    },
}

#[derive(Args, Debug)]
pub(crate) struct IntentionAddArgs {
    /// Person or family the mass is offered for
    #[arg(long)]
    pub(crate) person: String,
    /// difuntos, accion-de-gracias or salud
    #[arg(long, value_parser = crate::infra::parse_intention_type)]
    pub(crate) kind: IntentionType,
    /// Mass time: 8am or 7pm
    #[arg(long, value_parser = crate::infra::parse_mass_time)]
    pub(crate) time: MassTime,
    /// Stipend received with the intention
    #[arg(long, default_value_t = 0.0, value_parser = crate::infra::parse_amount)]
    pub(crate) amount: f64,
    /// Mass date (YYYY-MM-DD)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: NaiveDate,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// weekly or monthly
    #[arg(long, default_value = "weekly", value_parser = crate::infra::parse_report_kind)]
    pub(crate) kind: ReportKind,
    /// Anchor date inside the period (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ExportCommand {
    /// Write the weekly or monthly collection report as a Word document
    Report(ExportReportArgs),
    /// Write the intentions day sheet as a Word document
    Intentions {
        /// Mass date (YYYY-MM-DD, defaults to today)
        #[arg(long, value_parser = crate::infra::parse_date)]
        date: Option<NaiveDate>,
        /// Directory the document is written into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Write the full celebration roster as a Word document
    Celebrations {
        /// Directory the document is written into
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(Args, Debug)]
pub(crate) struct ExportReportArgs {
    /// weekly or monthly
    #[arg(long, default_value = "weekly", value_parser = crate::infra::parse_report_kind)]
    pub(crate) kind: ReportKind,
    /// Anchor date inside the period (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Directory the files are written into
    #[arg(long, default_value = ".")]
    pub(crate) out: PathBuf,
    /// Also write summary and receipt CSV extracts next to the document
    #[arg(long)]
    pub(crate) csv: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum UserCommand {
    /// Create a staff account
    Register {
        username: String,
        password: String,
    },
    /// Check a username and password against the directory
    Login {
        username: String,
        password: String,
    },
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Dashboard);

    match command {
        Command::Dashboard => commands::show_dashboard(),
        Command::Receipts { command } => commands::run_receipts(command),
        Command::Intentions { command } => commands::run_intentions(command),
        Command::Report(args) => commands::run_report(args),
        Command::Export { command } => commands::run_export(command),
        Command::Users { command } => commands::run_users(command),
        Command::Demo(args) => run_demo(args),
    }
}
