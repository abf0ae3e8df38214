// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Command-line definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "langlinks")]
#[command(about = "Resolve and cache interlanguage links over a page fixture", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON fixture describing pages and their language links
    #[arg(short, long, global = true, value_name = "FILE")]
    pub fixture: Option<PathBuf>,

    /// JSON cache configuration (defaults apply when omitted)
    #[arg(long, global = true, value_name = "FILE")]
    pub cache_config: Option<PathBuf>,

    /// Persist the cache in a sled directory so it survives between runs
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<log::Level>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the language a page was last annotated with
    Language {
        /// Page title, e.g. "Foo" or "Help:Foo"
        page: String,
    },

    /// List the targets a page's language links reference
    References { page: String },

    /// Show every page linked to a target, by language
    Links {
        /// Target page title
        target: String,

        /// Language of the requesting page
        #[arg(short, long, default_value = "en")]
        language: String,

        /// Treat the target as an interwiki page
        #[arg(long)]
        interwiki: bool,

        /// Output format
        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// Drop cached entries for a page, as done before it is saved again
    Invalidate { page: String },

    /// Show cache statistics
    Stats,

    /// Show version information
    Version,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}
