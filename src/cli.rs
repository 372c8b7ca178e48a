//! Command-line interface parsing for FundFlow
//!
//! This module defines the clap command tree: paging through the cached
//! instrument catalog, showing one fund's report, and generating AI insights.

use clap::{Parser, Subcommand};

/// FundFlow - Browse mutual fund instruments and insights
#[derive(Parser, Debug)]
#[command(name = "fundflow")]
#[command(about = "Mutual fund catalog browser with cached instrument data")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List one page of the instrument catalog as JSON
    ///
    /// Out-of-range page indexes are clamped to the valid range rather
    /// than rejected.
    Funds {
        /// Zero-based page index
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        page: i64,

        /// Number of instruments per page
        #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
        size: i64,
    },

    /// Show one fund's overview and derived analysis as JSON
    Fund {
        /// Trading symbol of the fund (e.g. INF174K01LS2)
        tradingsymbol: String,
    },

    /// Generate an AI insight report for one fund
    ///
    /// Requires GEMINI_API_KEY to be configured.
    Insights {
        /// Trading symbol of the fund
        tradingsymbol: String,
    },
}
