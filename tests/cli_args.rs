//! Integration tests for CLI argument handling
//!
//! Tests subcommand parsing and startup failure modes by running the
//! built binary.

use std::process::Command;

/// Helper to run the CLI with given args, a clean environment, and capture output
fn run_cli(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_fundflow"))
        .args(args)
        .env_remove("KITE_API_URL")
        .env_remove("KITE_API_KEY")
        .env_remove("KITE_ACCESS_TOKEN")
        .output()
        .expect("Failed to execute fundflow")
}

#[test]
fn test_help_flag_exits_successfully() {
    let output = run_cli(&["--help"]);
    assert!(
        output.status.success(),
        "Expected --help to exit successfully"
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("fundflow"), "Help should mention fundflow");
    assert!(stdout.contains("funds"), "Help should list the funds subcommand");
    assert!(stdout.contains("insights"), "Help should list the insights subcommand");
}

#[test]
fn test_funds_help_documents_paging_flags() {
    let output = run_cli(&["funds", "--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--page"), "funds help should document --page");
    assert!(stdout.contains("--size"), "funds help should document --size");
}

#[test]
fn test_no_subcommand_prints_usage_and_fails() {
    let output = run_cli(&[]);
    assert!(!output.status.success(), "Expected bare invocation to fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Should print usage: {}", stderr);
}

#[test]
fn test_unknown_subcommand_fails() {
    let output = run_cli(&["frobnicate"]);
    assert!(!output.status.success());
}

#[test]
fn test_funds_without_configuration_reports_missing_var() {
    let output = run_cli(&["funds"]);
    assert!(
        !output.status.success(),
        "Expected funds to fail without configuration"
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("KITE_API_URL"),
        "Should name the missing variable: {}",
        stderr
    );
}

#[cfg(test)]
mod unit_tests {
    //! Unit tests for CLI parsing that don't require running the binary

    use clap::Parser;
    use fundflow::cli::{Cli, Command};

    #[test]
    fn test_funds_parses_paging_flags() {
        let cli = Cli::parse_from(["fundflow", "funds", "--page", "2", "--size", "50"]);
        match cli.command {
            Command::Funds { page, size } => {
                assert_eq!(page, 2);
                assert_eq!(size, 50);
            }
            other => panic!("Expected Funds, got {:?}", other),
        }
    }

    #[test]
    fn test_fund_parses_symbol() {
        let cli = Cli::parse_from(["fundflow", "fund", "INF174K01LS2"]);
        match cli.command {
            Command::Fund { tradingsymbol } => assert_eq!(tradingsymbol, "INF174K01LS2"),
            other => panic!("Expected Fund, got {:?}", other),
        }
    }

    #[test]
    fn test_size_zero_is_accepted_by_the_parser() {
        // The paginator owns degenerate-size handling, not the parser
        let cli = Cli::parse_from(["fundflow", "funds", "--size", "0"]);
        match cli.command {
            Command::Funds { size, .. } => assert_eq!(size, 0),
            other => panic!("Expected Funds, got {:?}", other),
        }
    }
}
