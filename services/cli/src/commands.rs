use chrono::Local;
use parish_ledger::directory::DirectoryError;
use parish_ledger::error::AppError;
use parish_ledger::export::{
    all_celebrations_fragment, celebrations_stem, export_file_name, intentions_fragment,
    intentions_stem, report_fragment, report_stem, write_receipts_csv, write_summary_csv,
    write_word_document,
};
use parish_ledger::intentions::{IntentionDraft, MassSlot};
use parish_ledger::receipts::{Folio, Receipt};
use parish_ledger::reports::{CelebrationReport, DashboardSummary};

use crate::cli::{
    ExportCommand, ExportReportArgs, IntentionCommand, ReceiptAddArgs, ReceiptCommand, ReportArgs,
    UserCommand,
};
use crate::infra::AppContext;

pub(crate) fn show_dashboard() -> Result<(), AppError> {
    let context = AppContext::bootstrap()?;
    let receipts = context.receipts.list()?;
    let intentions = context.intentions.list()?;
    let summary = DashboardSummary::build(&receipts, &intentions);
    render_dashboard(&context.config.parish.name, &summary);
    Ok(())
}

pub(crate) fn render_dashboard(parish: &str, summary: &DashboardSummary) {
    println!("Dashboard - {parish}");
    println!("- Total Recaudado: ${:.2}", summary.total_paid);
    println!("- Monto Pendiente: ${:.2}", summary.total_remaining);
    println!(
        "- Celebraciones Liquidadas: {} ({} celebraciones registradas en total)",
        summary.settled_receipts, summary.total_receipts
    );
    println!("- Intenciones Registradas: {}", summary.total_intentions);

    println!("\nPróximas Celebraciones (Últimas 5 registradas)");
    if summary.recent.is_empty() {
        println!("No hay celebraciones registradas.");
        return;
    }
    for receipt in &summary.recent {
        println!(
            "- {} | {} | {} a las {} | {}",
            receipt.folio,
            receipt.celebration,
            receipt.date,
            receipt.time,
            receipt.status_label()
        );
    }
}

pub(crate) fn run_receipts(command: ReceiptCommand) -> Result<(), AppError> {
    let context = AppContext::bootstrap()?;
    match command {
        ReceiptCommand::Add(args) => add_receipt(&context, args),
        ReceiptCommand::List => {
            print_receipts(&context.receipts.list()?);
            Ok(())
        }
        ReceiptCommand::Find { folio } => find_receipt(&context, folio),
        ReceiptCommand::Search { field, term } => {
            print_receipts(&context.receipts.search(field, &term)?);
            Ok(())
        }
        ReceiptCommand::Sort { field, direction } => {
            print_receipts(&context.receipts.sorted(field, direction)?);
            Ok(())
        }
    }
}

fn add_receipt(context: &AppContext, args: ReceiptAddArgs) -> Result<(), AppError> {
    let ReceiptAddArgs {
        folio,
        person,
        celebration,
        date,
        time,
        location,
        paid,
        remaining,
    } = args;

    let outcome = context.receipts.save(Receipt {
        folio: Folio(folio),
        person_name: person,
        celebration,
        date,
        time,
        location,
        amount_paid: paid,
        amount_remaining: remaining,
        parish: context.config.parish.name.clone(),
    })?;
    println!("{}", outcome.message());
    Ok(())
}

fn find_receipt(context: &AppContext, folio: String) -> Result<(), AppError> {
    let folio = Folio(folio);
    match context.receipts.find(&folio)? {
        Some(receipt) => {
            print_receipt(&receipt);
            if !receipt.is_settled() {
                println!(
                    "El recibo con folio {} tiene un pago pendiente.",
                    receipt.folio
                );
            }
        }
        None => println!("No se encontró un recibo con el folio {folio}."),
    }
    Ok(())
}

pub(crate) fn print_receipt(receipt: &Receipt) {
    println!(
        "- {} | {} | {} | {} a las {} | {} | pagado ${:.2} | restante ${:.2} | {}",
        receipt.folio,
        receipt.person_name,
        receipt.celebration,
        receipt.date,
        receipt.time,
        receipt.location,
        receipt.amount_paid,
        receipt.amount_remaining,
        receipt.status_label()
    );
}

pub(crate) fn print_receipts(receipts: &[Receipt]) {
    if receipts.is_empty() {
        println!("No hay celebraciones registradas en esta parroquia.");
        return;
    }
    for receipt in receipts {
        print_receipt(receipt);
    }
}

pub(crate) fn run_intentions(command: IntentionCommand) -> Result<(), AppError> {
    let context = AppContext::bootstrap()?;
    match command {
        IntentionCommand::Add(args) => {
            let intention = context.intentions.register(IntentionDraft {
                person_name: args.person,
                kind: args.kind,
                time: args.time,
                amount_paid: args.amount,
                date: args.date,
            })?;
            println!(
                "Intención registrada para la misa de las {} del {}.",
                intention.time, intention.date
            );
            let slot = context.intentions.slot(intention.date, intention.time)?;
            if let Some(warning) = slot.capacity_warning() {
                println!("{warning}");
            }
            Ok(())
        }
        IntentionCommand::Day { date } => {
            for (index, slot) in context.intentions.day_schedule(date)?.iter().enumerate() {
                if index > 0 {
                    println!();
                }
                print_slot(slot);
            }
            Ok(())
        }
    }
}

pub(crate) fn print_slot(slot: &MassSlot) {
    println!("{}", slot.heading());
    if slot.intentions.is_empty() {
        println!("No hay intenciones registradas para este horario y fecha.");
        return;
    }
    for intention in &slot.intentions {
        println!(
            "- {} | {} | ${:.2}",
            intention.person_name, intention.kind, intention.amount_paid
        );
    }
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let context = AppContext::bootstrap()?;
    let ReportArgs { kind, date } = args;
    let anchor = date.unwrap_or_else(|| Local::now().date_naive());
    let receipts = context.receipts.list()?;
    let report = CelebrationReport::build(kind, &context.config.parish.name, anchor, &receipts);
    render_report(&report);
    Ok(())
}

pub(crate) fn render_report(report: &CelebrationReport) {
    println!("{}", report.kind.title());
    println!("Parroquia: {}", report.parish);
    println!("Periodo: {}", report.range.label());

    if report.is_empty() {
        println!("\nNo hay datos para el periodo seleccionado.");
        return;
    }

    println!("\nResumen por Celebración");
    for total in &report.totals {
        println!(
            "- {}: {} | ${:.2}",
            total.celebration, total.count, total.total_paid
        );
    }
    println!("Total General: ${:.2}", report.grand_total);

    println!("\nDetalle de Recibos");
    for receipt in &report.receipts {
        println!(
            "- {} | {} | {} | {} | pagado ${:.2} | restante ${:.2}",
            receipt.folio,
            receipt.person_name,
            receipt.celebration,
            receipt.date,
            receipt.amount_paid,
            receipt.amount_remaining
        );
    }
}

pub(crate) fn run_export(command: ExportCommand) -> Result<(), AppError> {
    let context = AppContext::bootstrap()?;
    match command {
        ExportCommand::Report(args) => export_report(&context, args),
        ExportCommand::Intentions { date, out } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            let parish = context.config.parish.name.as_str();
            let schedule = context.intentions.day_schedule(date)?;
            let fragment = intentions_fragment(parish, date, &schedule);
            let path = write_word_document(&out, &intentions_stem(parish, date), &fragment)?;
            println!("Documento escrito en {}", path.display());
            Ok(())
        }
        ExportCommand::Celebrations { out } => {
            let parish = context.config.parish.name.as_str();
            let receipts = context.receipts.list()?;
            let fragment = all_celebrations_fragment(parish, &receipts);
            let path = write_word_document(&out, &celebrations_stem(parish), &fragment)?;
            println!("Documento escrito en {}", path.display());
            Ok(())
        }
    }
}

fn export_report(context: &AppContext, args: ExportReportArgs) -> Result<(), AppError> {
    let ExportReportArgs {
        kind,
        date,
        out,
        csv,
    } = args;

    let anchor = date.unwrap_or_else(|| Local::now().date_naive());
    let parish = context.config.parish.name.as_str();
    let receipts = context.receipts.list()?;
    let report = CelebrationReport::build(kind, parish, anchor, &receipts);

    let path = write_word_document(&out, &report_stem(parish, anchor), &report_fragment(&report))?;
    println!("Documento escrito en {}", path.display());

    if csv {
        let summary_path = out.join(format!(
            "{}.csv",
            export_file_name(&format!("Resumen_{parish}_{anchor}"))
        ));
        write_summary_csv(&report, &summary_path)?;
        println!("Resumen CSV escrito en {}", summary_path.display());

        let detail_path = out.join(format!(
            "{}.csv",
            export_file_name(&format!("Recibos_{parish}_{anchor}"))
        ));
        write_receipts_csv(&report.receipts, &detail_path)?;
        println!("Recibos CSV escrito en {}", detail_path.display());
    }
    Ok(())
}

pub(crate) fn run_users(command: UserCommand) -> Result<(), AppError> {
    let context = AppContext::bootstrap()?;
    match command {
        UserCommand::Register { username, password } => {
            match context.directory.register(&username, &password) {
                Ok(user) => println!("Cuenta creada para '{}'.", user.username),
                Err(DirectoryError::DuplicateUsername(_)) => {
                    println!("El nombre de usuario ya existe.");
                }
                Err(DirectoryError::Store(err)) => return Err(err.into()),
            }
            Ok(())
        }
        UserCommand::Login { username, password } => {
            match context.directory.authenticate(&username, &password)? {
                Some(user) => println!("Bienvenido, {}", user.username),
                None => println!("Usuario o contraseña incorrectos."),
            }
            Ok(())
        }
    }
}
