mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tickler_core::impls::JsonFileStore;
use tickler_core::ports::SystemClock;
use tickler_core::{Action, Command, Config, Outcome, Tracker, execute};
use tracing_subscriber::EnvFilter;

use render::{RenderConfig, render_task};

#[derive(Parser, Debug)]
#[command(name = "tickler")]
#[command(about = "Personal task tracker that nags you with the most overdue things")]
#[command(version)]
struct Cli {
    /// list, add, fetch, postpone or verbose (default: fetch)
    action: Option<String>,

    /// Task text for `add`, id or part of the text for `postpone`
    text: Vec<String>,

    /// Priority for `add`, 1 (lowest) to 5 (highest)
    #[arg(short, long, allow_negative_numbers = true)]
    priority: Option<i64>,

    /// Days to push a task back for `postpone`
    #[arg(short, long, allow_negative_numbers = true)]
    time: Option<i64>,

    /// Task store file
    #[arg(long, env = "TICKLER_STORE")]
    store: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,
}

impl Cli {
    fn into_command(self, config: &Config) -> Result<Command> {
        let action = Action::parse_or_default(self.action.as_deref())?;
        let text = (!self.text.is_empty()).then(|| self.text.join(" "));
        Ok(Command {
            action,
            text,
            priority: self.priority.unwrap_or(config.default_priority),
            days: self.time.unwrap_or(config.default_postpone_days),
        })
    }
}

const DEFAULT_LOG_FILTER: &str = "warn";

/// `RUST_LOG` when set and valid, otherwise `warn`.
fn log_filter() -> EnvFilter {
    log_filter_from(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())
}

fn log_filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn main() -> Result<()> {
    // Default to WARN level for quiet CLI output
    // Use RUST_LOG=info or RUST_LOG=debug for verbose output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(log_filter())
        .init();

    let cli = Cli::parse();

    let mut config = Config::load().context("Failed to load config")?;
    if let Some(store) = &cli.store {
        config.store_path = store.clone();
    }
    let render = RenderConfig::detect(config.color && !cli.no_color);

    let command = cli.into_command(&config)?;
    let store = JsonFileStore::new(&config.store_path);
    let tracker = Tracker::new(store, SystemClock);
    let mut rng = StdRng::from_entropy();

    let outcome = execute(&tracker, &command, &mut rng).with_context(|| {
        format!(
            "{} failed (store: {})",
            command.action,
            config.store_path.display()
        )
    })?;

    match outcome {
        Outcome::Listing(views) => {
            for view in &views {
                println!("{}", render_task(view, render));
            }
        }
        Outcome::Task(view) => println!("{}", render_task(&view, render)),
        Outcome::Empty => println!("Nothing to do. Add a task with `tickler add <text>`."),
    }
    Ok(())
}
