//! Habitica CLI - Manage Habitica todos and checklists from the terminal
//!
//! Thin entry point: parses arguments, initializes logging and dispatches to
//! the command handlers.

use habitica_cli::cli::{Cli, Commands};
use habitica_cli::commands::{self, GlobalArgs};

fn main() {
    let exit_code = run();
    std::process::exit(exit_code);
}

/// Main application entry point
#[tokio::main]
async fn run() -> i32 {
    let cli = Cli::parse_args();
    init_logging(cli.verbose);

    match execute(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("Error: {err}");
            commands::exit_code(&err)
        }
    }
}

/// Execute the requested command
async fn execute(cli: Cli) -> anyhow::Result<()> {
    if cli.verbose {
        println!("Habitica CLI v{}", env!("CARGO_PKG_VERSION"));
    }

    let args = GlobalArgs {
        config: cli.config,
        base_url: cli.base_url,
        verbose: cli.verbose,
    };

    match cli.command {
        None => commands::smoke_test(&args).await,
        Some(Commands::Todo { text, checks }) => commands::todo_create(&args, &text, &checks).await,
        Some(Commands::Todos) => commands::todos_list(&args).await,
        Some(Commands::TodoDelete { id }) => commands::todo_delete(&args, &id).await,
        Some(Commands::TodoComplete { id }) => commands::todo_complete(&args, &id).await,
        Some(Commands::TodoCheck { id, index }) => commands::todo_check(&args, &id, index).await,
    }
}

/// Initialize logging; `--verbose` lowers the default filter to debug.
/// `RUST_LOG` still wins when set.
fn init_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }
}
