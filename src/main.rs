use std::process::ExitCode;

use clap::Parser;
use clip_app::{ActionDispatcher, ActionOutcome};
use clipper_lib::bootstrap::{self, wire_dependencies};
use clipper_lib::cli::{exit_code_for, Cli};
use tracing::{debug, error};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(exit_code_for(&err));
        }
    };

    if let Err(err) = bootstrap::tracing::init_tracing_subscriber() {
        eprintln!("Failed to initialize logging: {err:#}");
    }

    // Only usage errors change the exit status.
    let outcome = run(cli);
    debug!(?outcome, "Finished");
    ExitCode::SUCCESS
}

fn run(cli: Cli) -> ActionOutcome {
    let config = match bootstrap::resolve_config() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %format!("{err:#}"), "Failed to resolve configuration");
            return ActionOutcome::Failed;
        }
    };

    let deps = wire_dependencies(&config);

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            error!(error = %err, "Failed to start async runtime");
            return ActionOutcome::Failed;
        }
    };

    let dispatcher = ActionDispatcher::new(deps);
    runtime.block_on(dispatcher.dispatch(cli.action))
}
