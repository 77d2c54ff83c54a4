//! Shiftplan CLI Entry Point

use clap::{Parser, Subcommand};
use shiftplan::{Config, DateKey, DayEdit};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;

/// Shiftplan: personal shift-work calendar
#[derive(Parser, Debug)]
#[command(name = "shiftplan")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log library activity to stderr (RUST_LOG overrides the level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON (with --verbose)
    #[arg(long, global = true)]
    json_logs: bool,

    /// Year to show instead of the configured one
    #[arg(short, long, global = true)]
    year: Option<i32>,

    /// Use the fixed anchor of a group (1-5)
    #[arg(short, long, global = true, conflicts_with = "start_date")]
    group: Option<String>,

    /// Use a manual rotation start date (YYYY-MM-DD)
    #[arg(long, global = true)]
    start_date: Option<DateKey>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the calendar of the year
    Calendar {
        /// Only show this month (1-12)
        #[arg(short, long)]
        month: Option<u32>,
    },

    /// Show the shift on a date
    Shift {
        /// Date (YYYY-MM-DD)
        date: DateKey,
    },

    /// Edit the entry of a single day
    Day {
        #[command(subcommand)]
        action: DayCommand,
    },

    /// Manage personal vacation
    Vacation {
        #[command(subcommand)]
        action: VacationCommand,
    },

    /// Manage recurring birthdays
    Birthday {
        #[command(subcommand)]
        action: BirthdayCommand,
    },

    /// List vacation blocks and annotated days by month
    Agenda {
        /// Include birthdays
        #[arg(short, long)]
        birthdays: bool,
    },

    /// List public holidays of the year
    Holidays,

    /// Show the configured shift colors
    Colors,
}

#[derive(Subcommand, Debug)]
enum DayCommand {
    /// Save note, colleague vacation and AFZ for a day
    Set {
        /// Date (YYYY-MM-DD)
        date: DateKey,
        /// Free-text note
        #[arg(short, long, default_value = "")]
        note: String,
        /// Colleague on vacation (repeatable)
        #[arg(long = "colleague")]
        colleagues: Vec<String>,
        /// Mark as AFZ (working days only)
        #[arg(long)]
        afz: bool,
    },
    /// Delete the entry of a day
    Clear {
        /// Date (YYYY-MM-DD)
        date: DateKey,
    },
}

#[derive(Subcommand, Debug)]
enum VacationCommand {
    /// Mark the working days of a range as vacation
    Add {
        /// First day (YYYY-MM-DD)
        from: DateKey,
        /// Last day (YYYY-MM-DD)
        to: DateKey,
    },
    /// Remove vacation from a range
    Remove {
        /// First day (YYYY-MM-DD)
        from: DateKey,
        /// Last day (YYYY-MM-DD)
        to: DateKey,
    },
    /// List vacation blocks of the year
    List,
}

#[derive(Subcommand, Debug)]
enum BirthdayCommand {
    /// Save a birthday, replacing one on the same day
    Add {
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
        /// Name
        name: String,
    },
    /// Delete the birthday on a day
    Remove {
        /// Month (1-12)
        month: u32,
        /// Day of month
        day: u32,
    },
    /// List all birthdays
    List,
}

fn init_tracing(verbose: bool, json_logs: bool) {
    if !verbose {
        // Minimal logging for CLI commands
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_writer(std::io::stderr)
            .init();
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = if let Some(path) = &args.config {
        Config::from_file(path)?
    } else {
        Config::load()?
    };

    if let Some(year) = args.year {
        config.calendar.year = year;
    }
    if let Some(group) = &args.group {
        config.calendar.use_group(group.trim());
    }
    if let Some(start) = args.start_date {
        config.calendar.use_manual_date(start.date());
    }
    config.validate()?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose, args.json_logs);

    let config = load_config(&args)?;
    tracing::debug!(
        "Calendar {} with anchor {:?}",
        config.calendar.year,
        config.calendar.resolve_anchor()
    );

    if let Command::Colors = args.command {
        return cli::run_colors(&config, args.json);
    }

    let session = cli::Session::open(config)?;
    match args.command {
        Command::Calendar { month } => cli::run_calendar(session, month, args.json).await,
        Command::Shift { date } => cli::run_shift(session, date, args.json).await,
        Command::Day { action } => match action {
            DayCommand::Set {
                date,
                note,
                colleagues,
                afz,
            } => {
                let mut edit = DayEdit::new().with_note(note).with_afz(afz);
                for colleague in colleagues {
                    edit = edit.with_colleague(colleague);
                }
                cli::run_day_set(session, date, edit, args.json)
            }
            DayCommand::Clear { date } => cli::run_day_clear(session, date, args.json),
        },
        Command::Vacation { action } => match action {
            VacationCommand::Add { from, to } => cli::run_vacation_add(session, from, to, args.json),
            VacationCommand::Remove { from, to } => {
                cli::run_vacation_remove(session, from, to, args.json)
            }
            VacationCommand::List => cli::run_vacation_list(session, args.json),
        },
        Command::Birthday { action } => match action {
            BirthdayCommand::Add { month, day, name } => {
                cli::run_birthday_add(session, month, day, name, args.json)
            }
            BirthdayCommand::Remove { month, day } => {
                cli::run_birthday_remove(session, month, day, args.json)
            }
            BirthdayCommand::List => cli::run_birthday_list(session, args.json),
        },
        Command::Agenda { birthdays } => cli::run_agenda(session, birthdays, args.json),
        Command::Holidays => cli::run_holidays(session, args.json).await,
        Command::Colors => cli::run_colors(&session.config, args.json),
    }
}
