use clap::CommandFactory;
use clap::Parser;
use clap_complete::generate;

use ding::commands::Cli;
use ding::commands::Commands;
use ding::error::CliError;
use ding::handlers;
use ding::paths;
use ding::spawner::DetachedSpawner;
use ding::telemetry;
use ding_core::FileTimerStore;
use ding_core::SystemClock;
use ding_core::TimerError;
use ding_core::TimerManager;
use ding_core::UnixProcessController;

fn main() {
    if let Err(e) = run() {
        if let Some(timer_error) = e.downcast_ref::<TimerError>() {
            eprintln!("Error: {}", timer_error);
            if let Some(suggestion) = timer_error.suggestion() {
                eprintln!("Suggestion: {}", suggestion);
            }
            std::process::exit(timer_error.exit_code());
        } else if let Some(cli_error) = e.downcast_ref::<CliError>() {
            eprintln!("Error: {}", cli_error);
            eprintln!("Suggestion: {}", cli_error.suggestion());
            std::process::exit(cli_error.exit_code());
        } else {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _telemetry = telemetry::init_tracing("warn");

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "ding", &mut std::io::stdout());
        return Ok(());
    }

    if let Commands::Fire { seconds, message } = &cli.command {
        return handlers::handle_fire(*seconds, message);
    }

    let manager = TimerManager::new(
        FileTimerStore::new(&paths::state_dir()),
        DetachedSpawner,
        UnixProcessController,
        SystemClock,
    );

    match cli.command {
        Commands::Completions { .. } | Commands::Fire { .. } => unreachable!(),
        Commands::Set { input } => handlers::handle_set(&manager, &input.join(" "), cli.json),
        Commands::List => handlers::handle_list(&manager, cli.json),
        Commands::Cancel { id } => handlers::handle_cancel(&manager, &id, cli.json),
    }
}
