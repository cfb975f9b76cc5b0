use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use miette::{Context, IntoDiagnostic, Result};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use meetcost_analytics::optimize::OptimizationReport;
use meetcost_core::{
    DateRange, Granularity, MeetcostConfig, NewMeeting, OutputFormat, RoleRate, Settings,
};
use meetcost_dashboard::summary::{format_money, type_label};
use meetcost_dashboard::{
    ActionResult, CostSummary, Dashboard, MeetingList, RatesPayload, StatsPayload, TrendsPayload,
    VelocityReport,
};
use meetcost_store::SqliteStore;

#[derive(Parser)]
#[command(
    name = "meetcost",
    version,
    about = "Meeting cost analytics",
    long_about = "Meetcost puts a price on meetings: record them with the roles that attended,\n\
                   then see where the money and hours go and what to cut.\n\n\
                   Examples:\n  \
                     meetcost add --title Planning --duration 60 --roles engineer,pm\n  \
                     meetcost stats --range last-quarter   Totals and per-type breakdown\n  \
                     meetcost stats --by month             Cost per month\n  \
                     meetcost optimize                     Ranked savings suggestions\n  \
                     meetcost summary                      One-sentence cost summary\n  \
                     meetcost mcp                          Serve the dashboard to an AI assistant"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to configuration file (default: .meetcost.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(
        long,
        global = true,
        default_value = "text",
        long_help = "Output format for command results.\n\n\
                       Formats:\n  \
                         text  Human-readable tables and summaries (default)\n  \
                         json  The tagged result object ({success, error?, ...}) as JSON"
    )]
    format: OutputFormat,

    /// Log debug detail to stderr
    #[arg(long, short, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(long, short, global = true)]
    quiet: bool,

    /// When to use colors
    #[arg(long, global = true, default_value = "auto")]
    color: ColorChoice,
}

#[derive(Subcommand)]
enum Command {
    /// Record a meeting and compute its cost
    #[command(long_about = "Record a meeting and compute its cost.\n\n\
        The cost is computed once from the current role rates: one line per attending\n\
        role (hours x hourly rate). Without roles, the average rate is charged per attendee.\n\
        Later rate changes never alter recorded costs.\n\n\
        Examples:\n  meetcost add --title Standup --type standup --duration 15 --roles engineer,qa\n  \
        meetcost add --title 'All hands' --type all-hands --duration 60 --attendees 40")]
    Add {
        /// Meeting title (default: "Untitled Meeting")
        #[arg(long)]
        title: Option<String>,

        /// Date as YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,

        /// Length in minutes (default: 30)
        #[arg(long)]
        duration: Option<u32>,

        /// Number of attendees (default: 1)
        #[arg(long)]
        attendees: Option<u32>,

        /// Attending role ids, comma separated
        #[arg(long, value_delimiter = ',')]
        roles: Vec<String>,

        /// Meeting type (standup, planning, retro, review, one-on-one, team-sync, ad-hoc, all-hands, interview)
        #[arg(long = "type")]
        meeting_type: Option<String>,
    },
    /// List recorded meetings, most recent first
    List {
        /// Maximum meetings to show (default: dashboard.list_limit)
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Delete a meeting by id
    Delete {
        /// Meeting id
        id: String,
    },
    /// Show cost statistics for a date range
    #[command(long_about = "Show cost statistics for a date range.\n\n\
        Prints total cost, hours, and meeting count with a per-type breakdown and the\n\
        week-over-week cost trend. With --by, prints cost per day, week, or month instead.\n\n\
        Examples:\n  meetcost stats\n  meetcost stats --range last-week\n  meetcost stats --range last-quarter --by month")]
    Stats {
        /// last-week, last-month, or last-quarter (default: dashboard.date_range)
        #[arg(long)]
        range: Option<DateRange>,

        /// Bucket cost by day, week, or month
        #[arg(long)]
        by: Option<Granularity>,
    },
    /// One-sentence cost summary for a date range
    Summary {
        /// last-week, last-month, or last-quarter (default: dashboard.date_range)
        #[arg(long)]
        range: Option<DateRange>,
    },
    /// Suggest ways to cut meeting spend
    Optimize,
    /// Show role rates, or replace them from a JSON file
    #[command(long_about = "Show role rates, or replace them from a JSON file.\n\n\
        The file holds the complete table as a JSON list:\n  \
        [{\"roleId\": \"engineer\", \"roleName\": \"Engineer\", \"hourlyRate\": 75}]\n\n\
        Examples:\n  meetcost rates\n  meetcost rates --file rates.json")]
    Rates {
        /// Replace the whole rate table with the list in this file
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Show settings, or change currency and working hours
    Settings {
        /// Currency code, e.g. EUR
        #[arg(long)]
        currency: Option<String>,

        /// Working hours per day
        #[arg(long)]
        hours: Option<f64>,
    },
    /// Correlation between meeting hours and sprint velocity
    Velocity,
    /// Start the MCP server on stdio
    #[command(long_about = "Start the MCP server on stdio.\n\n\
        Exposes every dashboard operation as a tool so an assistant can record meetings\n\
        and answer cost questions. Logs go to stderr; stdout carries the protocol.")]
    Mcp,
    /// Create a default .meetcost.toml configuration file
    #[command(long_about = "Create a default .meetcost.toml configuration file.\n\n\
        Fails if .meetcost.toml already exists.")]
    Init,
    /// Generate shell completion scripts
    #[command(hide = true)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Clone, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    /// Auto-detect based on terminal
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

fn print_welcome(use_color: bool) {
    let version = env!("CARGO_PKG_VERSION");
    let commands = [
        ("add", "Record a meeting and compute its cost"),
        ("list", "Recent meetings with their costs"),
        ("stats", "Totals, per-type breakdown, and trend"),
        ("summary", "One-sentence cost summary"),
        ("optimize", "Ranked suggestions to cut spend"),
        ("rates", "Show or replace hourly rates per role"),
        ("settings", "Show or change currency and working hours"),
        ("velocity", "Meeting hours versus sprint velocity"),
        ("mcp", "Start MCP server for AI assistants"),
        ("init", "Create default configuration"),
    ];

    if use_color {
        println!("\x1b[1mmeetcost\x1b[0m v{version} - what your meetings really cost\n");
        println!("Quick start:");
        println!("  \x1b[36mmeetcost add --duration 60 --roles engineer,pm\x1b[0m");
        println!("  \x1b[36mmeetcost stats\x1b[0m\n");
        println!("All commands:");
        for (name, about) in commands {
            println!("  \x1b[32m{name:<9}\x1b[0m {about}");
        }
    } else {
        println!("meetcost v{version} - what your meetings really cost\n");
        println!("Quick start:");
        println!("  meetcost add --duration 60 --roles engineer,pm");
        println!("  meetcost stats\n");
        println!("All commands:");
        for (name, about) in commands {
            println!("  {name:<9} {about}");
        }
    }

    println!("\nRun 'meetcost <command> --help' for details.");
}

fn init_tracing(verbose: bool, quiet: bool) {
    let level = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<MeetcostConfig> {
    match path {
        Some(path) => MeetcostConfig::from_file(path)
            .wrap_err(format!("loading {}", path.display())),
        None => {
            let default_path = Path::new(".meetcost.toml");
            if default_path.exists() {
                Ok(MeetcostConfig::from_file(default_path)?)
            } else {
                Ok(MeetcostConfig::default())
            }
        }
    }
}

fn open_dashboard(config: &MeetcostConfig) -> Result<Dashboard<SqliteStore>> {
    let store = SqliteStore::open(&config.store.path)
        .wrap_err(format!("opening store {}", config.store.path.display()))?;
    Ok(Dashboard::from_config(store, config))
}

/// Print `result` in the requested format. A failed result is an error in
/// text mode and a non-zero exit in JSON mode.
fn emit<T: Serialize>(
    format: OutputFormat,
    result: &ActionResult<T>,
    render: impl FnOnce(&T),
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result).into_diagnostic()?);
            if !result.success {
                std::process::exit(1);
            }
        }
        OutputFormat::Text => {
            if let Some(error) = &result.error {
                miette::bail!("{error}");
            }
            render(&result.payload);
        }
    }
    Ok(())
}

fn print_meetings(list: &MeetingList, currency: &str) {
    if list.meetings.is_empty() {
        println!("No meetings recorded.");
        return;
    }
    println!(
        "{:<10}  {:<24}  {:<11}  {:>5}  {:>4}  {:>12}  {}",
        "DATE", "TITLE", "TYPE", "MIN", "PPL", "COST", "ID"
    );
    for m in &list.meetings {
        println!(
            "{:<10}  {:<24}  {:<11}  {:>5}  {:>4}  {:>12}  {}",
            m.date,
            truncate(&m.title, 24),
            m.meeting_type.label(),
            m.duration_minutes,
            m.attendee_count,
            format_money(m.calculated_cost, currency),
            m.id,
        );
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max - 3).collect();
    out.push_str("...");
    out
}

fn print_stats(payload: &StatsPayload, range: DateRange, currency: &str) {
    let stats = &payload.stats;
    println!("Meeting cost for {range}:");
    println!("  Total cost:  {}", format_money(stats.total_cost, currency));
    println!("  Total hours: {:.1}", stats.total_hours);
    println!("  Meetings:    {}", stats.meeting_count);
    if stats.trends.len() >= 2 {
        println!("  Trend:       {:+.1}% week over week", stats.trend_percentage);
    }

    if !stats.cost_by_type.is_empty() {
        println!("\nBy type:");
        let mut types: Vec<_> = stats.cost_by_type.iter().collect();
        types.sort_by(|a, b| b.1.cost.total_cmp(&a.1.cost));
        for (kind, totals) in types {
            println!(
                "  {:<12} {:>12}  {:>3} meeting(s)  {:>6.1}h  avg {:.0} min",
                type_label(kind),
                format_money(totals.cost, currency),
                totals.count,
                totals.hours,
                totals.avg_minutes(),
            );
        }
    }
}

fn print_trends(payload: &TrendsPayload, currency: &str) {
    if payload.trends.is_empty() {
        println!("No meetings in {}.", payload.date_range);
        return;
    }
    println!("Cost by {} ({}):", payload.granularity, payload.date_range);
    for bucket in &payload.trends {
        println!(
            "  {:<10} {:>12}  {:>3} meeting(s)  {:>6.1}h  avg {}",
            bucket.period,
            format_money(bucket.total_cost, currency),
            bucket.meeting_count,
            bucket.total_hours,
            format_money(bucket.avg_cost_per_meeting, currency),
        );
    }
}

fn print_report(report: &OptimizationReport, currency: &str) {
    println!("{}", report.summary);
    for (i, s) in report.suggestions.iter().enumerate() {
        println!(
            "\n{}. [{}] {} (save up to {})",
            i + 1,
            s.priority,
            s.title,
            format_money(s.potential_savings, currency)
        );
        println!("   {}", s.description);
    }
}

fn print_rates(payload: &RatesPayload) {
    if payload.rates.is_empty() {
        println!("No role rates configured; meetings will cost nothing.");
        return;
    }
    println!("{:<18}  {:<24}  {:>10}  CURRENCY", "ROLE", "NAME", "RATE/HOUR");
    for r in &payload.rates {
        println!(
            "{:<18}  {:<24}  {:>10.2}  {}",
            r.role_id, r.role_name, r.hourly_rate, r.currency
        );
    }
}

fn print_summary(summary: &CostSummary) {
    println!("{}", summary.summary);
}

fn print_velocity(report: &VelocityReport) {
    println!("Correlation: {:.2} (sample data)", report.correlation);
    println!("{}", report.interpretation);
    println!("Recommendation: {}", report.recommendation);
}

fn read_rates(path: &Path) -> Result<Vec<RoleRate>> {
    let content = std::fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err(format!("reading {}", path.display()))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .wrap_err(format!("{} is not a JSON list of role rates", path.display()))
}

const DEFAULT_CONFIG: &str = r#"# Meetcost Configuration

[store]
# SQLite file holding meetings, role rates, and settings
path = ".meetcost/meetcost.db"

[dashboard]
# list_limit = 50
# date_range = "last-month"   # last-week, last-month, last-quarter

# Hourly rates used until a table is saved with `meetcost rates --file`.
# Leave unset for the built-in roles (engineer, senior-engineer, pm,
# designer, qa, manager, executive).
# [[default_rates]]
# roleId = "engineer"
# roleName = "Engineer"
# hourlyRate = 75.0
# currency = "USD"
"#;

#[tokio::main]
async fn main() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .build(),
        )
    }))
    .expect("miette handler");
    human_panic::setup_panic!();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let use_color = match cli.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => std::io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    };

    let command = match cli.command {
        None => {
            print_welcome(use_color);
            return Ok(());
        }
        Some(Command::Init) => {
            let path = Path::new(".meetcost.toml");
            if path.exists() {
                miette::bail!(".meetcost.toml already exists");
            }
            std::fs::write(path, DEFAULT_CONFIG).into_diagnostic()?;
            println!("Created .meetcost.toml with default configuration");
            return Ok(());
        }
        Some(Command::Completions { shell }) => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "meetcost", &mut std::io::stdout());
            return Ok(());
        }
        Some(command) => command,
    };

    let config = load_config(cli.config.as_deref())?;
    tracing::debug!(store = %config.store.path.display(), format = %cli.format, "configuration loaded");

    if let Command::Mcp = command {
        meetcost_mcp::server::run_server(&config).await?;
        return Ok(());
    }

    let dashboard = open_dashboard(&config)?;
    let currency = dashboard.get_config().payload.settings.currency;
    let format = cli.format;

    match command {
        Command::Add {
            title,
            date,
            duration,
            attendees,
            roles,
            meeting_type,
        } => {
            let result = dashboard.add_meeting(NewMeeting {
                title,
                date,
                duration_minutes: duration.filter(|d| *d > 0),
                attendee_count: attendees.filter(|a| *a > 0),
                attendee_roles: roles
                    .into_iter()
                    .map(|r| r.trim().to_string())
                    .filter(|r| !r.is_empty())
                    .collect(),
                meeting_type,
            });
            emit(format, &result, |added| {
                if let Some(m) = &added.meeting {
                    println!(
                        "Recorded \"{}\" on {} ({} min, {}): {}",
                        m.title,
                        m.date,
                        m.duration_minutes,
                        m.meeting_type.label(),
                        format_money(m.calculated_cost, &currency)
                    );
                    for line in &added.cost_breakdown {
                        println!(
                            "  {:<24} {}",
                            line.role_name,
                            format_money(line.cost, &currency)
                        );
                    }
                    println!("id: {}", m.id);
                }
            })?;
        }
        Command::List { limit } => {
            let result = dashboard.list_meetings(limit);
            emit(format, &result, |list| print_meetings(list, &currency))?;
        }
        Command::Delete { id } => {
            let result = dashboard.delete_meeting(&id);
            emit(format, &result, |deleted| {
                if deleted.deleted {
                    println!("Deleted meeting {id}");
                } else {
                    println!("No meeting with id {id}");
                }
            })?;
        }
        Command::Stats { range, by } => {
            let range = range.unwrap_or(dashboard.config().date_range);
            match by {
                Some(granularity) => {
                    let result = dashboard.get_period_trends(Some(range), granularity);
                    emit(format, &result, |trends| print_trends(trends, &currency))?;
                }
                None => {
                    let result = dashboard.get_dashboard_stats(Some(range));
                    emit(format, &result, |stats| print_stats(stats, range, &currency))?;
                }
            }
        }
        Command::Summary { range } => {
            let result = dashboard.get_meeting_cost_summary(range);
            emit(format, &result, print_summary)?;
        }
        Command::Optimize => {
            let result = dashboard.suggest_optimizations();
            emit(format, &result, |report| print_report(report, &currency))?;
        }
        Command::Rates { file } => match file {
            Some(path) => {
                let rates = read_rates(&path)?;
                let count = rates.len();
                let result = dashboard.save_role_rates(rates);
                emit(format, &result, |_| println!("Saved {count} role rate(s)"))?;
            }
            None => {
                let result = dashboard.get_role_rates();
                emit(format, &result, print_rates)?;
            }
        },
        Command::Settings { currency, hours } => {
            if currency.is_none() && hours.is_none() {
                let result = dashboard.get_config();
                emit(format, &result, |payload| {
                    println!("Currency:           {}", payload.settings.currency);
                    println!("Work hours per day: {}", payload.settings.work_hours_per_day);
                })?;
            } else {
                let current = dashboard.get_config();
                if let Some(error) = current.error {
                    miette::bail!("{error}");
                }
                let current = current.payload.settings;
                let settings = Settings {
                    currency: currency.unwrap_or(current.currency),
                    work_hours_per_day: hours.unwrap_or(current.work_hours_per_day),
                };
                let result = dashboard.save_config(settings);
                emit(format, &result, |_| println!("Settings saved"))?;
            }
        }
        Command::Velocity => {
            let result = dashboard.get_velocity_correlation();
            emit(format, &result, print_velocity)?;
        }
        Command::Mcp | Command::Init | Command::Completions { .. } => unreachable!(),
    }

    Ok(())
}
