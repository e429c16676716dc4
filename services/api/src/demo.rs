use crate::infra::{evaluation_date, parse_date};
use chrono::NaiveDate;
use clap::Args;
use roster::config::AppConfig;
use roster::error::AppError;
use roster::workflows::intake::{
    FieldFeedback, FieldId, IntakeError, RosterIntakeService, UserRecord, UserRegistry,
    ValidationResult,
};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct CheckArgs {
    /// JSON file holding one user record (camelCase or snake_case keys)
    #[arg(long)]
    pub(crate) file: PathBuf,
    /// JSON file holding the already admitted users, used for the uniqueness check
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
    /// Evaluation date for age checks (defaults to ROSTER_EVALUATION_DATE, then today)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Evaluation date for age checks (defaults to 2024-01-01 so the output is stable)
    #[arg(long, value_parser = parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) fn run_check(args: CheckArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let today = evaluation_date(args.today, config.intake.evaluation_date);

    let candidate: UserRecord = serde_json::from_str(&fs::read_to_string(&args.file)?)?;
    let candidate = candidate.normalized();

    let registry = match &args.roster {
        Some(path) => load_registry(path)?,
        None => UserRegistry::new(),
    };
    let service = RosterIntakeService::with_registry(registry);

    let outcome = service.check(&candidate, today);
    render_outcome(&candidate, &outcome, today);

    outcome
        .into_result()
        .map_err(|violations| AppError::from(IntakeError::Rejected(violations)))
}

fn load_registry(path: &Path) -> Result<UserRegistry, AppError> {
    let records: Vec<UserRecord> = serde_json::from_str(&fs::read_to_string(path)?)?;
    let mut registry = UserRegistry::new();
    for record in records {
        registry
            .add(record.normalized())
            .map_err(IntakeError::from)?;
    }
    Ok(registry)
}

fn render_outcome(candidate: &UserRecord, outcome: &ValidationResult, today: NaiveDate) {
    println!("Checking {} <{}> as of {}", candidate.full_name(), candidate.email, today);

    if outcome.is_valid() {
        let summary = candidate.summary();
        println!("Result: valid");
        println!("- Name: {}", summary.full_name);
        println!("- Email: {}", summary.email);
        println!("- Position: {}", summary.position);
        println!("- Join date: {}", summary.join_date);
        return;
    }

    let mut feedback = FieldFeedback::new();
    feedback.show(outcome.violations());

    println!("Result: invalid");
    for field in FieldId::ordered() {
        if let Some(message) = feedback.message_for(field) {
            println!("- {} ({}): {}", field.label(), field.form_name(), message);
        }
    }
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let today = args
        .today
        .or_else(|| NaiveDate::from_ymd_opt(2024, 1, 1))
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    let mut service = RosterIntakeService::new();

    println!("Roster intake demo (evaluated {today})");

    let ana = demo_user("Ana", "Diaz", "ana@ex.com", "2000-01-01", "2023-01-01");
    let summary = service.review(&ana, today)?;
    println!(
        "\nConfirm admission: {} <{}>, {} from {}",
        summary.full_name, summary.email, summary.position, summary.join_date
    );
    service.confirm(ana.clone())?;

    let rejected = [
        (
            "duplicate e-mail",
            demo_user("Ana", "Ruiz", "ana@ex.com", "1995-04-12", "2020-09-01"),
        ),
        (
            "minor today",
            demo_user("Leo", "Park", "leo@ex.com", "2010-03-03", "2023-06-01"),
        ),
        (
            "joined before birth",
            demo_user("Ivy", "Chen", "ivy@ex.com", "1990-05-05", "1989-01-01"),
        ),
        (
            "minor at join date",
            demo_user("Sam", "Cole", "sam@ex.com", "2000-06-15", "2018-06-14"),
        ),
    ];

    println!("\nRejected candidates");
    for (label, candidate) in &rejected {
        match service.review(candidate, today) {
            Err(IntakeError::Rejected(violations)) => {
                let reasons: Vec<String> = violations
                    .iter()
                    .map(|violation| format!("{} ({})", violation, violation.field().form_name()))
                    .collect();
                println!("- {label}: {}", reasons.join(", "));
            }
            Err(other) => return Err(other.into()),
            Ok(_) => println!("- {label}: unexpectedly accepted"),
        }
    }

    render_roster(&service);

    service.retract(&ana.email);
    service.retract(&ana.email);
    println!("\nRetracted {} (twice, second is a no-op)", ana.email);
    render_roster(&service);

    Ok(())
}

fn render_roster(service: &RosterIntakeService) {
    let roster = service.roster();
    if roster.is_empty() {
        println!("\nRoster: empty");
        return;
    }

    println!("\nRoster");
    for entry in roster {
        println!(
            "- {} | {} | {} | joined {}",
            entry.display_name, entry.email, entry.position, entry.join_date
        );
    }
}

fn demo_user(
    first_name: &str,
    last_name: &str,
    email: &str,
    birth_date: &str,
    join_date: &str,
) -> UserRecord {
    UserRecord {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        position: "Engineer".to_string(),
        birth_date: birth_date.to_string(),
        join_date: join_date.to_string(),
    }
}
