use std::fmt;
use std::sync::Arc;

use course_core::curriculum::badge_info;
use course_core::model::{LessonNumber, WeekNumber};
use services::{
    Clock, LessonCompletion, ProgressEvent, ProgressListener, ProgressSnapshot, ProgressTracker,
    render_week_detail, search_lessons,
};
use storage::repository::Storage;

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArgument { what: &'static str },
    UnknownArg(String),
    InvalidNumber { what: &'static str, raw: String },
    InvalidDbUrl { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArgument { what } => write!(f, "missing {what}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidNumber { what, raw } => write!(f, "invalid {what}: {raw}"),
            ArgsError::InvalidDbUrl { raw } => write!(f, "invalid --db value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn parse_number(raw: Option<String>, what: &'static str) -> Result<u8, ArgsError> {
    let raw = raw.ok_or(ArgsError::MissingArgument { what })?;
    raw.parse()
        .map_err(|_| ArgsError::InvalidNumber { what, raw: raw.clone() })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] status");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] complete <week> <lesson>");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] week <week>");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] search <query>");
    eprintln!("  cargo run -p app -- [--db <sqlite_url>] badges");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  --db sqlite://course-progress.sqlite3");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  COURSE_DB_URL, RUST_LOG");
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Status,
    Complete { week: WeekNumber, lesson: LessonNumber },
    Week(WeekNumber),
    Search(String),
    Badges,
}

struct Args {
    db_url: String,
    command: Command,
}

impl Args {
    fn parse(args: impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut db_url = std::env::var("COURSE_DB_URL")
            .ok()
            .map_or_else(|| "sqlite://course-progress.sqlite3".into(), normalize_sqlite_url);
        let mut positional = Vec::new();

        let mut args = args;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--db" => {
                    let value = require_value(&mut args, "--db")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidDbUrl { raw: value });
                    }
                    db_url = normalize_sqlite_url(value);
                }
                "--help" | "-h" => return Ok(None),
                flag if flag.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ => positional.push(arg),
            }
        }

        let mut positional = positional.into_iter();
        let command = match positional.next().as_deref() {
            None | Some("status") => Command::Status,
            Some("complete") => {
                let week = parse_number(positional.next(), "week number")?;
                let lesson = parse_number(positional.next(), "lesson number")?;
                Command::Complete {
                    week: WeekNumber::new(week),
                    lesson: LessonNumber::new(lesson),
                }
            }
            Some("week") => Command::Week(WeekNumber::new(parse_number(
                positional.next(),
                "week number",
            )?)),
            Some("search") => {
                let query: Vec<String> = positional.by_ref().collect();
                if query.is_empty() {
                    return Err(ArgsError::MissingArgument {
                        what: "search query",
                    });
                }
                Command::Search(query.join(" "))
            }
            Some("badges") => Command::Badges,
            Some(other) => return Err(ArgsError::UnknownArg(other.to_string())),
        };
        if let Some(extra) = positional.next() {
            return Err(ArgsError::UnknownArg(extra));
        }

        Ok(Some(Self { db_url, command }))
    }
}

fn normalize_sqlite_url(raw: String) -> String {
    if raw == "sqlite::memory:" || raw.starts_with("sqlite://") {
        return raw;
    }

    let trimmed = raw.trim().to_string();
    let path_str = trimmed
        .strip_prefix("sqlite:")
        .unwrap_or(trimmed.as_str())
        .to_string();
    let path = std::path::Path::new(&path_str);
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| std::path::PathBuf::from("."))
            .join(path)
    };
    format!("sqlite://{}", absolute.display())
}

fn prepare_sqlite_file(db_url: &str) -> Result<(), Box<dyn std::error::Error>> {
    if db_url == "sqlite::memory:" {
        return Ok(());
    }

    let path = db_url
        .strip_prefix("sqlite://")
        .ok_or_else(|| ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        })?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() {
        return Err(ArgsError::InvalidDbUrl {
            raw: db_url.to_string(),
        }
        .into());
    }

    let path = std::path::Path::new(path);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if !path.exists() {
        std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(path)?;
    }

    Ok(())
}

/// Opens the SQLite store, falling back to memory so progress commands still run.
async fn open_storage(db_url: &str) -> Storage {
    if let Err(err) = prepare_sqlite_file(db_url) {
        tracing::warn!(
            url = db_url,
            error = %err,
            "cannot prepare database file, progress will not be saved"
        );
        return Storage::in_memory();
    }
    match Storage::sqlite(db_url).await {
        Ok(storage) => storage,
        Err(err) => {
            tracing::warn!(
                url = db_url,
                error = %err,
                "cannot open database, progress will not be saved"
            );
            Storage::in_memory()
        }
    }
}

/// Prints one-shot notifications. Progress refreshes are rendered on demand instead.
struct ConsoleNotifier;

impl ProgressListener for ConsoleNotifier {
    fn on_event(&self, event: &ProgressEvent) {
        if let ProgressEvent::Notification(note) = event {
            println!("{} {}  {}", note.icon, note.title, note.message);
        }
    }
}

fn progress_bar(percentage: u32) -> String {
    let filled = usize::try_from(percentage / 10).unwrap_or(10).min(10);
    format!("[{}{}]", "#".repeat(filled), ".".repeat(10 - filled))
}

fn print_status(snapshot: &ProgressSnapshot) {
    println!(
        "📚 {} lessons  ⏱️ {} weeks  🎯 {}%  🏆 {} badges",
        snapshot.total_lessons,
        snapshot.week_count,
        snapshot.overall_percentage,
        snapshot.badge_count
    );
    println!();
    for week in &snapshot.weeks {
        let lock = if week.unlocked { "" } else { "  🔒" };
        println!(
            "Week {} {} {}/{} Lessons Completed  {}%{lock}",
            week.week,
            progress_bar(week.percentage),
            week.completed,
            week.total,
            week.percentage
        );
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let Some(parsed) = Args::parse(std::env::args().skip(1)).map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?
    else {
        print_usage();
        return Ok(());
    };

    // Pure content commands never touch storage.
    match &parsed.command {
        Command::Week(week) => {
            match render_week_detail(*week) {
                Some(panel) => print!("{panel}"),
                None => eprintln!("week {week} is not part of the course"),
            }
            return Ok(());
        }
        Command::Search(query) => {
            let hits = search_lessons(query);
            if hits.is_empty() {
                println!("no lessons match \"{query}\"");
            }
            for hit in hits {
                println!("week {} lesson {}  {}  ({})", hit.week, hit.lesson, hit.title, hit.path);
            }
            return Ok(());
        }
        _ => {}
    }

    let storage = open_storage(&parsed.db_url).await;
    let mut tracker = ProgressTracker::load(Clock::system(), storage.progress).await;
    tracker.subscribe(Arc::new(ConsoleNotifier));
    tracker.start_session().await;

    match parsed.command {
        Command::Status => print_status(&tracker.refresh_display()),
        Command::Complete { week, lesson } => {
            match tracker.mark_lesson_completed(week, lesson).await? {
                LessonCompletion::AlreadyCompleted => {
                    println!("week {week} lesson {lesson} was already completed");
                }
                LessonCompletion::Recorded { .. } => {
                    println!("completed week {week} lesson {lesson}");
                }
            }
            print_status(&tracker.refresh_display());
        }
        Command::Badges => {
            let badges = tracker.record().badges();
            if badges.is_empty() {
                println!("no badges yet");
            }
            for badge in badges {
                match badge_info(badge) {
                    Some(info) => println!("{} {}  {}", info.icon, info.title, info.description),
                    None => println!("🏅 {badge}"),
                }
            }
        }
        Command::Week(_) | Command::Search(_) => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_owned());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
