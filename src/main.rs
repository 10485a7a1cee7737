//! idstamp CLI entry point

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use idstamp::{stamp_tree, Cli, IdStampError};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(output) => {
            print!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            e.exit_code()
        }
    }
}

fn run(cli: &Cli) -> idstamp::Result<String> {
    let report = stamp_tree(&cli.options())?;
    let output = report.render(cli.format);

    if cli.check && report.has_changes() {
        print!("{}", output);
        return Err(IdStampError::PendingChanges {
            count: report.files_changed,
        });
    }

    Ok(output)
}

/// Diagnostics go to stderr so stdout stays parseable with `--format json`.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
