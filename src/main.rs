//! CLI entry point for `dispatchdeck`.

use clap::{CommandFactory, Parser, Subcommand};

use dispatchdeck::controller::DispatchCtrl;
use dispatchdeck::model::item::DispatchItem;
use dispatchdeck::service::stub::StubMailService;

#[derive(Parser)]
#[command(
    name = "dispatchdeck",
    version,
    about = "Terminal dashboard for dispatch mail items"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose logging (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the dispatch items without opening the dashboard
    Items {
        #[arg(long)]
        json: bool,
    },
    /// Trigger a mail fetch on the configured service
    Fetch,
    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Generate a man page
    Manpage,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = dispatchdeck::config::load_config();

    // Configure logging: stderr + optional log file
    let log_level = match cli.verbose {
        0 => config.general.log_level.as_str(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    setup_logging(log_level, &config);

    match cli.command {
        Some(Commands::Items { json }) => cmd_items(json),
        Some(Commands::Fetch) => cmd_fetch(),
        Some(Commands::Completions { shell }) => cmd_completions(shell),
        Some(Commands::Manpage) => cmd_manpage(),
        None => cmd_dashboard(&config),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(level: &str, config: &dispatchdeck::config::Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    // Try to set up file logging
    let log_dir = dispatchdeck::config::cache_dir(config);
    if std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "dispatchdeck.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Fall back to stderr only
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}

/// Build the controller with the shipped collaborator.
fn make_controller() -> DispatchCtrl {
    DispatchCtrl::new(Box::new(StubMailService))
}

/// Open the TUI dashboard.
fn cmd_dashboard(config: &dispatchdeck::config::Config) -> anyhow::Result<()> {
    dispatchdeck::tui::run_tui(make_controller(), config)
}

/// Print the dispatch items as a table or JSON.
fn cmd_items(json: bool) -> anyhow::Result<()> {
    let ctrl = make_controller();
    if json {
        print_items_json(ctrl.items())
    } else {
        print_items_table(ctrl.items());
        Ok(())
    }
}

/// Trigger a single mail fetch and report the outcome.
fn cmd_fetch() -> anyhow::Result<()> {
    let ctrl = make_controller();
    ctrl.get_mail()?;
    println!("  Mail fetch triggered.");
    Ok(())
}

/// Generate shell completions and print to stdout.
fn cmd_completions(shell: clap_complete::Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "dispatchdeck", &mut std::io::stdout());
    Ok(())
}

/// Generate a man page and print to stdout.
fn cmd_manpage() -> anyhow::Result<()> {
    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);
    let mut buf = Vec::new();
    man.render(&mut buf)?;
    std::io::Write::write_all(&mut std::io::stdout(), &buf)?;
    Ok(())
}

/// Print the items as a human-readable table.
fn print_items_table(items: &[DispatchItem]) {
    println!();
    println!("  {} item(s)", items.len());
    println!();

    if items.is_empty() {
        return;
    }

    println!("  {:<4} {:<4} {:<8} {:<40} {:<20}", "#", "!", "Kind", "Title", "Owner");
    println!("  {}", "-".repeat(78));

    for (i, item) in items.iter().enumerate() {
        let title_trunc: String = item.title.chars().take(39).collect();
        let owner_trunc: String = item.owner.name.chars().take(19).collect();
        println!(
            "  {:<4} {:<4} {:<8} {:<40} {:<20}",
            i + 1,
            item.importance,
            item.kind.as_str(),
            title_trunc,
            owner_trunc
        );
    }
    println!();
}

/// Print the items as JSON.
fn print_items_json(items: &[DispatchItem]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "item_count": items.len(),
        "items": items,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
