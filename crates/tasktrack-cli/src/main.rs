use clap::{CommandFactory, Parser, Subcommand};
use tasktrack_core::Config;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "tasktrack", version, about = "tasktrack CLI")]
struct Cli {
    /// Log at debug level (overrides RUST_LOG and the config)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score a task snapshot
    Score(commands::score::ScoreArgs),
    /// Run a lifecycle script through an in-memory task service
    Replay(commands::replay::ReplayArgs),
    /// Summarize a list of tasks
    Report(commands::report::ReportArgs),
    /// List the actions allowed from a status
    Transitions(commands::transitions::TransitionsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Print a shell completion script
    Completions {
        shell: clap_complete::Shell,
    },
}

fn init_logging(verbose: bool, config: &Config) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&config.logging.level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    let config = Config::load_or_default();
    init_logging(cli.verbose, &config);

    let result = match cli.command {
        Commands::Score(args) => commands::score::run(args),
        Commands::Replay(args) => commands::replay::run(args, config),
        Commands::Report(args) => commands::report::run(args, &config),
        Commands::Transitions(args) => commands::transitions::run(args),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "tasktrack", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
