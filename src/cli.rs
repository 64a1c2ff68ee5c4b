use std::{fs, io, path::PathBuf};

use chrono::Local;
use clap::{CommandFactory, Parser, ValueEnum};

use crate::{
    chart,
    domain::{self, ActivityDraft, Category},
    format::{format_date_iso, format_date_label, format_duration, format_start_time},
    reducer::{Action, State, reduce},
    storage::{self, ActivityStore},
};

#[derive(Parser, Debug)]
#[command(name = "dayring")]
#[command(about = "Daily activity log on a 24-hour ring", long_about = None)]
pub enum Cli {
    #[command(about = "Log an activity")]
    Add {
        #[arg(long, short, help = "Category name or id")]
        category: String,

        #[arg(long, short, help = "Start time as HH:MM")]
        start: String,

        #[arg(long, short, help = "Duration in minutes (1-1440)")]
        duration: String,

        #[arg(long, help = "Day as YYYY-MM-DD (defaults to today)")]
        date: Option<String>,
    },

    #[command(about = "List one day's activities")]
    List {
        #[arg(long, help = "Day as YYYY-MM-DD (defaults to today)")]
        date: Option<String>,
    },

    #[command(about = "Show per-category totals for one day")]
    Report {
        #[arg(long, help = "Day as YYYY-MM-DD (defaults to today)")]
        date: Option<String>,
    },

    #[command(about = "Delete an activity by id")]
    Delete {
        #[arg(help = "Activity id")]
        id: String,
    },

    #[command(about = "Export the day chart or the raw log")]
    Export {
        #[arg(long, value_enum, help = "Export format")]
        format: ExportFormat,

        #[arg(long, help = "Day as YYYY-MM-DD, svg only (defaults to today)")]
        date: Option<String>,

        #[arg(long, short, help = "Output path")]
        out: Option<PathBuf>,
    },

    #[command(about = "Generate shell completions")]
    Completions {
        #[arg(help = "Shell type (bash, zsh, fish)")]
        shell: String,
    },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ExportFormat {
    Svg,
    Json,
}

fn today_iso() -> String {
    format_date_iso(Local::now().date_naive())
}

fn parse_start_time(start: &str) -> Result<(String, String), String> {
    let Some((hour, minute)) = start.split_once(':') else {
        return Err(format!("Invalid start time '{}', expected HH:MM", start));
    };
    Ok((hour.to_string(), minute.to_string()))
}

fn resolve_category<'a>(categories: &'a [Category], wanted: &str) -> Result<&'a Category, String> {
    categories
        .iter()
        .find(|c| c.id == wanted || c.name.eq_ignore_ascii_case(wanted))
        .ok_or_else(|| format!("Category '{}' not found", wanted))
}

pub fn add_activity(
    category: String,
    start: String,
    duration: String,
    date: Option<String>,
) -> Result<(), String> {
    let categories = domain::default_categories();
    let category = resolve_category(&categories, &category)?;
    let (start_hour, start_minute) = parse_start_time(&start)?;
    let date = date.unwrap_or_else(today_iso);

    let draft = ActivityDraft {
        category_id: category.id.clone(),
        start_hour,
        start_minute,
        duration_minutes: duration,
    };

    let activity = domain::create_activity_from_draft(&draft, &categories, &date)
        .ok_or_else(|| "Invalid activity (check start time and duration)".to_string())?;

    let store = ActivityStore::open_default();
    let state = State::initial(date, storage::load_activities(store.as_ref()));
    let next = reduce(&state, Action::AddActivity(activity.clone()));
    storage::save_activities(store.as_ref(), &next.activities);

    println!(
        "Logged {} at {} for {}",
        activity.name,
        format_start_time(activity.start_hour, activity.start_minute),
        format_duration(activity.duration_minutes),
    );
    Ok(())
}

pub fn list_activities(date: Option<String>) -> Result<(), String> {
    let date = date.unwrap_or_else(today_iso);
    let store = ActivityStore::open_default();
    let activities = storage::load_activities(store.as_ref());
    let for_day = domain::activities_for_date(&activities, &date);

    println!("{}", format_date_label(&date));
    println!("{}", "-".repeat(56));
    if for_day.is_empty() {
        println!("(no activities)");
        return Ok(());
    }

    for activity in &for_day {
        println!(
            "{}  {:>6}  {:12} {}",
            format_start_time(activity.start_hour, activity.start_minute),
            format_duration(activity.duration_minutes),
            activity.name,
            activity.id,
        );
    }
    Ok(())
}

pub fn report(date: Option<String>) -> Result<(), String> {
    let date = date.unwrap_or_else(today_iso);
    let store = ActivityStore::open_default();
    let activities = storage::load_activities(store.as_ref());
    let for_day = domain::activities_for_date(&activities, &date);
    let summary = domain::summarize_by_category(&for_day);

    println!("Day Report {}", format_date_label(&date));
    println!("{}", "-".repeat(40));
    for entry in &summary {
        println!(
            "{:16} {:>6}  {:>5.1}%",
            entry.name,
            format_duration(entry.duration_minutes),
            entry.percent,
        );
    }
    println!("{}", "-".repeat(40));
    let total: u32 = summary.iter().map(|e| e.duration_minutes).sum();
    println!("{:16} {:>6}", "TOTAL", format_duration(total));
    Ok(())
}

pub fn delete_activity(id: String) -> Result<(), String> {
    let store = ActivityStore::open_default();
    let state = State::initial(today_iso(), storage::load_activities(store.as_ref()));

    let pending = reduce(&state, Action::RequestDelete { id: id.clone() });
    let next = reduce(&pending, Action::ConfirmDelete);

    if next.activities.len() == state.activities.len() {
        println!("No activity with id '{}'", id);
        return Ok(());
    }

    storage::save_activities(store.as_ref(), &next.activities);
    println!("Deleted activity '{}'", id);
    Ok(())
}

pub fn export(
    format: ExportFormat,
    date: Option<String>,
    out_path: Option<PathBuf>,
) -> Result<(), String> {
    let store = ActivityStore::open_default();
    let activities = storage::load_activities(store.as_ref());

    let output = match format {
        ExportFormat::Svg => {
            let date = date.unwrap_or_else(today_iso);
            chart::render_day_svg(&date, &domain::activities_for_date(&activities, &date))
        }
        ExportFormat::Json => {
            serde_json::to_string_pretty(&activities).map_err(|e| e.to_string())?
        }
    };

    if let Some(path) = out_path {
        fs::write(&path, &output).map_err(|e| e.to_string())?;
        println!("Exported to {}", path.display());
    } else {
        println!("{}", output);
    }
    Ok(())
}

pub fn print_completions(shell: &str) -> Result<(), String> {
    use clap_complete::Shell;
    match shell {
        "bash" => {
            clap_complete::generate(
                Shell::Bash,
                &mut Cli::command(),
                "dayring",
                &mut io::stdout(),
            );
        }
        "zsh" => {
            clap_complete::generate(Shell::Zsh, &mut Cli::command(), "dayring", &mut io::stdout());
        }
        "fish" => {
            clap_complete::generate(
                Shell::Fish,
                &mut Cli::command(),
                "dayring",
                &mut io::stdout(),
            );
        }
        _ => {
            return Err(format!(
                "Unsupported shell: {}. Use bash, zsh, or fish.",
                shell
            ));
        }
    }
    Ok(())
}

pub fn run_cli() {
    let cli = Cli::parse();
    let result = match cli {
        Cli::Add {
            category,
            start,
            duration,
            date,
        } => add_activity(category, start, duration, date),
        Cli::List { date } => list_activities(date),
        Cli::Report { date } => report(date),
        Cli::Delete { id } => delete_activity(id),
        Cli::Export { format, date, out } => export(format, date, out),
        Cli::Completions { shell } => print_completions(&shell),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
