use std::sync::Arc;

use chrono::{Duration, Local, NaiveDate};
use clap::Args;
use parish_ledger::directory::{
    DirectoryError, UserDirectory, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME,
};
use parish_ledger::error::AppError;
use parish_ledger::intentions::{IntentionDraft, IntentionRegister, IntentionType, MassTime};
use parish_ledger::receipts::{Folio, Receipt, ReceiptLedger};
use parish_ledger::reports::{CelebrationReport, DashboardSummary, ReportKind, ReportRange};
use parish_ledger::store::InMemoryStore;

use crate::commands::{print_receipts, print_slot, render_dashboard, render_report};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Anchor date for the demo week (YYYY-MM-DD). Defaults to today.
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) date: Option<NaiveDate>,
    /// Skip the mass intention portion of the demo.
    #[arg(long)]
    pub(crate) skip_intentions: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        date,
        skip_intentions,
    } = args;

    let anchor = date.unwrap_or_else(|| Local::now().date_naive());
    let week = ReportRange::weekly(anchor);
    let parish = "Parroquia San Isidro Labrador";

    println!("Parish ledger demo");
    println!(
        "Parroquia: {parish} | semana del {} al {}",
        week.start, week.end
    );

    let store = Arc::new(InMemoryStore::new());

    println!("\nCuentas");
    let directory = UserDirectory::new(store.clone());
    directory.ensure_default_admin()?;
    match directory.authenticate(DEFAULT_ADMIN_USERNAME, DEFAULT_ADMIN_PASSWORD)? {
        Some(user) => println!("- Bienvenido, {}", user.username),
        None => println!("- La cuenta administradora no respondió"),
    }
    directory.register("secretaria", "clave-segura")?;
    println!("- Cuenta creada para 'secretaria'.");
    match directory.register("secretaria", "otra-clave") {
        Err(DirectoryError::DuplicateUsername(_)) => println!("- El nombre de usuario ya existe."),
        Ok(_) => println!("- Se creó una cuenta duplicada"),
        Err(err) => return Err(err.into()),
    }

    println!("\nRecibos");
    let ledger = ReceiptLedger::new(store.clone(), parish);
    let captures = [
        ("A-001", "Juan Pérez", "Boda", 1, 1500.0, 0.0),
        ("A-002", "María García", "Bautizo", 2, 300.0, 250.0),
        ("A-003", "Los Hernández", "XV Años", 4, 800.0, 0.0),
    ];
    for (folio, person, celebration, offset, paid, remaining) in captures {
        let day = week.start + Duration::days(offset);
        let outcome =
            ledger.save(demo_receipt(parish, folio, person, celebration, day, paid, remaining))?;
        println!("- {}", outcome.message());
    }

    let rewrite = ledger.save(demo_receipt(
        parish,
        "A-001",
        "Otro Solicitante",
        "Boda",
        week.start + Duration::days(1),
        9999.0,
        0.0,
    ))?;
    println!("- {}", rewrite.message());

    let abono = ledger.save(demo_receipt(
        parish,
        "A-002",
        "María García",
        "Bautizo",
        week.start + Duration::days(2),
        550.0,
        0.0,
    ))?;
    println!("- {}", abono.message());

    print_receipts(&ledger.list()?);

    if let Some(stored) = ledger.find(&Folio("A-002".to_string()))? {
        match serde_json::to_string_pretty(&stored) {
            Ok(json) => println!("Registro almacenado:\n{json}"),
            Err(err) => println!("Registro almacenado no disponible: {err}"),
        }
    }

    let register = IntentionRegister::new(store, parish);
    if !skip_intentions {
        println!("\nIntenciones");
        register.register(IntentionDraft {
            person_name: "Familia Ruiz".to_string(),
            kind: IntentionType::AccionDeGracias,
            time: MassTime::Morning,
            amount_paid: 50.0,
            date: anchor,
        })?;
        for n in 1..=21 {
            register.register(IntentionDraft {
                person_name: format!("Difunto recordado {n}"),
                kind: IntentionType::Difuntos,
                time: MassTime::Evening,
                amount_paid: 50.0,
                date: anchor,
            })?;
        }
        let evening = register.slot(anchor, MassTime::Evening)?;
        if let Some(warning) = evening.capacity_warning() {
            println!("{warning}");
        }
        for slot in register.day_schedule(anchor)? {
            println!();
            print_slot(&slot);
        }
    }

    let receipts = ledger.list()?;
    println!();
    render_report(&CelebrationReport::build(
        ReportKind::Weekly,
        parish,
        anchor,
        &receipts,
    ));

    println!();
    render_dashboard(parish, &DashboardSummary::build(&receipts, &register.list()?));

    Ok(())
}

fn demo_receipt(
    parish: &str,
    folio: &str,
    person: &str,
    celebration: &str,
    date: NaiveDate,
    paid: f64,
    remaining: f64,
) -> Receipt {
    Receipt {
        folio: Folio(folio.to_string()),
        person_name: person.to_string(),
        celebration: celebration.to_string(),
        date,
        time: "12:00 PM".to_string(),
        location: "Templo principal".to_string(),
        amount_paid: paid,
        amount_remaining: remaining,
        parish: parish.to_string(),
    }
}
