// SPDX-License-Identifier: AGPL-3.0-only

//! Meta-validator: runs every validation binary in sequence.
//!
//! Exit code is 0 only if ALL validation binaries pass.
//!
//! | Binary | Domain |
//! |--------|--------|
//! | `validate_soil` | Saxton & Rawls regressions, Campbell retention curve |
//! | `validate_gas` | Vapor pressure, Table A.3 saturation, dew point |

use std::process::{Command, ExitCode};
use std::time::Instant;

/// A validation suite to run.
struct Suite {
    name: &'static str,
    binary: &'static str,
}

const SUITES: &[Suite] = &[
    Suite {
        name: "Soil Water Characteristics",
        binary: "validate_soil",
    },
    Suite {
        name: "Atmospheric Water Vapor",
        binary: "validate_gas",
    },
];

/// Prefer an already-built sibling in the target dir; otherwise let cargo
/// build and run the suite, so a clean `cargo run --bin validate_all` works.
fn suite_command(binary: &str) -> Command {
    let sibling = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(binary)))
        .map(|path| path.with_extension(std::env::consts::EXE_EXTENSION))
        .filter(|path| path.is_file());
    if let Some(path) = sibling {
        return Command::new(path);
    }
    let cargo = std::env::var_os("CARGO").unwrap_or_else(|| "cargo".into());
    let mut cmd = Command::new(cargo);
    cmd.args(["run", "--quiet", "--bin", binary]);
    cmd
}

fn main() -> ExitCode {
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║  environmental-biophysics: full validation                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝");

    let start = Instant::now();
    let mut failed: Vec<&str> = Vec::new();

    for suite in SUITES {
        println!("\n── {} ({}) ──", suite.name, suite.binary);
        let t0 = Instant::now();
        let status = suite_command(suite.binary).status();
        let elapsed = t0.elapsed().as_secs_f64();
        match status {
            Ok(s) if s.success() => println!("  ✓ {} passed ({elapsed:.2}s)", suite.binary),
            Ok(s) => {
                println!("  ✗ {} failed: {s} ({elapsed:.2}s)", suite.binary);
                failed.push(suite.binary);
            }
            Err(e) => {
                println!("  ✗ {} could not start: {e}", suite.binary);
                failed.push(suite.binary);
            }
        }
    }

    println!(
        "\n═══ {}/{} suites passed in {:.2}s ═══",
        SUITES.len() - failed.len(),
        SUITES.len(),
        start.elapsed().as_secs_f64()
    );
    if failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        println!("FAILED SUITES: {}", failed.join(", "));
        ExitCode::FAILURE
    }
}
