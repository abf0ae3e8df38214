// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! langlinks CLI entry point

use clap::Parser;
use colored::Colorize;

mod cli;
use cli::{Cli, Commands, Session};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // -v/--verbose takes precedence over --log-level
    let log_level = if cli.verbose {
        log::LevelFilter::Debug
    } else if let Some(level) = cli.log_level {
        level.to_level_filter()
    } else {
        log::LevelFilter::Warn
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    if let Commands::Version = cli.command {
        println!("{} {}", "langlinks".bold().green(), langlinks::VERSION);
        println!("Cached interlanguage link lookups");
        return Ok(());
    }

    let session = Session::open(cli.fixture, cli.cache_config, cli.cache_dir)?;

    match cli.command {
        Commands::Language { page } => cli::handle_language(&session, &page),
        Commands::References { page } => cli::handle_references(&session, &page),
        Commands::Links {
            target,
            language,
            interwiki,
            format,
        } => cli::handle_links(&session, &target, &language, interwiki, format),
        Commands::Invalidate { page } => cli::handle_invalidate(&session, &page),
        Commands::Stats => cli::handle_stats(&session),
        Commands::Version => Ok(()),
    }
}
