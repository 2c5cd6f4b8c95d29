//! git-credential-1password - git credential helper backed by 1Password.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use git_credential_1password::cli::{execute, output, Cli};
use git_credential_1password::core::constants;
use git_credential_1password::error::Error;

fn main() {
    let cli = Cli::parse();

    // stdout is reserved for the credential protocol
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("git_credential_1password=debug")
        } else {
            EnvFilter::new("git_credential_1password=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if cli.version {
        output::version();
        return;
    }

    let Some(action) = cli.action.as_deref() else {
        output::usage();
        std::process::exit(2);
    };

    if let Err(e) = execute(action, cli.config()) {
        output::error(&e.to_string());
        if let Some(hint) = output::suggestion(&e) {
            output::hint(&hint);
        }
        if matches!(e, Error::UnknownAction(_)) {
            output::usage();
        }
        std::process::exit(e.exit_code());
    }
}
