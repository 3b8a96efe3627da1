// SPDX-License-Identifier: AGPL-3.0-only

//! Task runner behind the `cargo all` alias.
//!
//! `all` runs format check, lint, type-check and test in that order and stops
//! at the first failing step, mirroring the CI job.

use std::process::{Command, ExitCode};

use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// A named task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Task {
    /// cargo fmt --all --check
    Fmt,
    /// cargo clippy, warnings denied
    Lint,
    /// cargo check
    Typecheck,
    /// cargo test
    Test,
    /// fmt, lint, typecheck, test
    All,
}

/// Order of the steps composed by [`Task::All`].
const ALL_STEPS: [Task; 4] = [Task::Fmt, Task::Lint, Task::Typecheck, Task::Test];

impl Task {
    const fn cargo_args(self) -> &'static [&'static str] {
        match self {
            Self::Fmt => &["fmt", "--all", "--check"],
            Self::Lint => &["clippy", "--workspace", "--all-targets", "--", "-D", "warnings"],
            Self::Typecheck => &["check", "--workspace", "--all-targets"],
            Self::Test => &["test", "--workspace"],
            Self::All => &[],
        }
    }

    fn steps(self) -> Vec<Self> {
        match self {
            Self::All => ALL_STEPS.to_vec(),
            other => vec![other],
        }
    }
}

#[derive(Parser, Debug)]
#[command(about = "Run the repository's check tasks")]
struct Opts {
    #[arg(value_enum, default_value_t = Task::All)]
    task: Task,
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cargo = std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string());
    for step in Opts::parse().task.steps() {
        let args = step.cargo_args();
        info!(?step, "cargo {}", args.join(" "));
        match Command::new(&cargo).args(args).status() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                error!(?step, %status, "task failed");
                return ExitCode::FAILURE;
            }
            Err(e) => {
                error!(?step, error = %e, "could not run cargo");
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}
