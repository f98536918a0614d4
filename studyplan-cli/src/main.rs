use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use studyplan_core::{DayHours, ScheduleController, ScheduleMatrix, WEEKDAYS};
use studyplan_ingest::parse_performance_csv;

mod config;
mod state;
mod toast;

use toast::Toast;

#[derive(Parser, Debug)]
#[command(
    name = "studyplan",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("STUDYPLAN_BUILD_SHA"), ")"),
    about = "Weekly study-hour schedule from the command line"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Seed a fresh schedule from the configured subject list
    Init {
        /// Overwrite an existing schedule
        #[arg(long)]
        force: bool,
    },

    /// Print the subject-by-weekday hour table
    Show,

    /// Apply recommendations from an analytics performance report CSV
    Apply {
        /// Path to the report CSV
        #[arg(long)]
        csv: PathBuf,

        /// Only apply the recommendation for one subject
        #[arg(long)]
        subject: Option<String>,
    },

    /// Replace one subject's week with an explicit hour row
    Set {
        subject: String,

        #[arg(long, default_value_t = 0.0)]
        mon: f64,
        #[arg(long, default_value_t = 0.0)]
        tue: f64,
        #[arg(long, default_value_t = 0.0)]
        wed: f64,
        #[arg(long, default_value_t = 0.0)]
        thu: f64,
        #[arg(long, default_value_t = 0.0)]
        fri: f64,
        #[arg(long, default_value_t = 0.0)]
        sat: f64,
        #[arg(long, default_value_t = 0.0)]
        sun: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Init { force } => init(force),
        Command::Show => show(),
        Command::Apply { csv, subject } => apply(&csv, subject.as_deref()),
        Command::Set {
            subject,
            mon,
            tue,
            wed,
            thu,
            fri,
            sat,
            sun,
        } => {
            let row = DayHours {
                monday: mon,
                tuesday: tue,
                wednesday: wed,
                thursday: thu,
                friday: fri,
                saturday: sat,
                sunday: sun,
            };
            set_row(&subject, row)
        }
    }
}

fn init(force: bool) -> Result<()> {
    if state::read_schedule()?.is_some() && !force {
        bail!(
            "Schedule already exists at {}. Pass --force to reseed.",
            state::schedule_path()?.display()
        );
    }

    let config = config::load_config()?;
    // Materialize the config on first run so it can be edited.
    if !config::config_path()?.exists() {
        config::save_config(&config)?;
    }

    let matrix = ScheduleMatrix::seed(
        config.schedule.subjects.iter().cloned(),
        config.schedule.increment,
    );
    state::write_schedule(&matrix)?;

    println!(
        "Seeded {} subjects at {} ({}h increment)",
        matrix.len(),
        state::schedule_path()?.display(),
        matrix.increment()
    );
    Ok(())
}

fn show() -> Result<()> {
    let matrix = load_schedule()?;
    print_matrix(&matrix);
    Ok(())
}

fn apply(csv: &PathBuf, subject: Option<&str>) -> Result<()> {
    let matrix = load_schedule()?;

    let mut rows = parse_performance_csv(csv)?;
    if let Some(subject) = subject {
        rows.retain(|r| r.subject == subject);
        if rows.is_empty() {
            bail!("No row for {subject} in {}", csv.display());
        }
    }

    let mut ctl = ScheduleController::new(matrix, Toast);
    let mut rejected = 0;
    for row in &rows {
        // Toast already carried the rejection; keep going with the rest.
        if ctl.accept_recommendation(&row.subject, &row.profile).is_err() {
            rejected += 1;
        }
    }

    let matrix = ctl.into_matrix();
    state::write_schedule(&matrix)?;

    println!(
        "\nProcessed {} recommendation(s), {} rejected\n",
        rows.len(),
        rejected
    );
    print_matrix(&matrix);
    Ok(())
}

fn set_row(subject: &str, row: DayHours) -> Result<()> {
    let matrix = load_schedule()?;

    let mut ctl = ScheduleController::new(matrix, Toast);
    ctl.save_custom_schedule(subject, row)
        .with_context(|| format!("row for {subject} rejected; schedule unchanged"))?;

    let matrix = ctl.into_matrix();
    state::write_schedule(&matrix)?;
    print_matrix(&matrix);
    Ok(())
}

fn load_schedule() -> Result<ScheduleMatrix> {
    match state::read_schedule()? {
        Some(matrix) => Ok(matrix),
        None => bail!(
            "No schedule at {}. Run: studyplan init",
            state::schedule_path()?.display()
        ),
    }
}

fn print_matrix(matrix: &ScheduleMatrix) {
    let name_width = matrix
        .rows()
        .map(|(s, _)| s.len())
        .max()
        .unwrap_or(7)
        .max(7);

    print!("{:<name_width$}", "Subject");
    for day in WEEKDAYS {
        print!("  {:>5}", format!("{:?}", day));
    }
    println!("  {:>6}", "Total");

    for (subject, row) in matrix.rows() {
        print!("{subject:<name_width$}");
        for day in WEEKDAYS {
            print!("  {:>5.1}", row.get(day));
        }
        println!("  {:>6.1}", row.total());
    }
}
