// Copyright (c) 2024-2025 DeepGraph Inc.
// SPDX-License-Identifier: Apache-2.0
//
//! Result formatting for CLI output

use colored::*;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use langlinks::{CacheStats, LinkDescriptor, TargetLinkMap};

use super::commands::OutputFormat;

/// Formatter for lookup results
pub struct LinksFormatter;

impl LinksFormatter {
    pub fn format(
        descriptor: &LinkDescriptor,
        links: &TargetLinkMap,
        format: OutputFormat,
    ) -> String {
        match format {
            OutputFormat::Table => Self::format_table(descriptor, links),
            OutputFormat::Json => Self::format_json(descriptor, links),
        }
    }

    fn format_table(descriptor: &LinkDescriptor, links: &TargetLinkMap) -> String {
        if links.is_empty() {
            return format!(
                "{}\n",
                format!("No language links found for {}", descriptor.target).yellow()
            );
        }

        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Language links for".bold().green(),
            descriptor.target.to_string().bold()
        ));
        output.push_str(&format!("Links found: {}\n\n", links.len()));

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Language").fg(Color::Green),
            Cell::new("Page").fg(Color::Green),
        ]);

        for (language, page) in links {
            let language_cell = if *language == descriptor.language {
                Cell::new(language.as_str()).fg(Color::Cyan)
            } else {
                Cell::new(language.as_str())
            };
            table.add_row(vec![language_cell, Cell::new(page.prefixed_text())]);
        }

        output.push_str(&table.to_string());
        output.push('\n');
        output
    }

    fn format_json(descriptor: &LinkDescriptor, links: &TargetLinkMap) -> String {
        let links: serde_json::Map<String, serde_json::Value> = links
            .iter()
            .map(|(language, page)| {
                (
                    language.to_string(),
                    serde_json::Value::String(page.prefixed_text()),
                )
            })
            .collect();

        let json = serde_json::json!({
            "target": descriptor.target.prefixed_text(),
            "language": descriptor.language.as_str(),
            "links": links,
        });

        serde_json::to_string_pretty(&json)
            .unwrap_or_else(|_| "{\"error\": \"Could not serialize links to JSON\"}".to_string())
    }

    /// Cache counters as a two-column table
    pub fn format_stats(stats: &CacheStats) -> String {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            Cell::new("Counter").fg(Color::Green),
            Cell::new("Value").fg(Color::Green),
        ]);

        let rows = [
            ("entries", stats.entries.to_string()),
            ("hits", stats.hits.to_string()),
            ("misses", stats.misses.to_string()),
            ("hit rate", format!("{:.1}%", stats.hit_rate() * 100.0)),
            ("insertions", stats.insertions.to_string()),
            ("deletions", stats.deletions.to_string()),
            ("evictions", stats.evictions.to_string()),
            ("expirations", stats.expirations.to_string()),
        ];
        for (name, value) in rows {
            table.add_row(vec![name.to_string(), value]);
        }

        format!("{}\n{}\n", "Cache Statistics".bold().green(), table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use langlinks::{LanguageCode, PageIdentity};

    fn descriptor() -> LinkDescriptor {
        LinkDescriptor::local(
            LanguageCode::new("en").unwrap(),
            PageIdentity::main("Foo").unwrap(),
        )
    }

    #[test]
    fn test_json_output() {
        let links: TargetLinkMap = [(
            LanguageCode::new("de").unwrap(),
            PageIdentity::main("Foo de").unwrap(),
        )]
        .into_iter()
        .collect();

        let json = LinksFormatter::format(&descriptor(), &links, OutputFormat::Json);
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["target"], "Foo");
        assert_eq!(parsed["links"]["de"], "Foo de");
    }

    #[test]
    fn test_empty_table_output() {
        colored::control::set_override(false);
        let text =
            LinksFormatter::format(&descriptor(), &TargetLinkMap::new(), OutputFormat::Table);
        assert_eq!(text, "No language links found for Foo\n");
    }
}
