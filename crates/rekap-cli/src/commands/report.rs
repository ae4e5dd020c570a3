//! The `rekap report` command.

use anyhow::Result;

use rekap_core::config::TrackerConfig;
use rekap_report::html::write_html_report;
use rekap_report::markdown::build_markdown_report;
use rekap_report::{save_text, ClassReport};

use super::{describe_load, load_roster};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReportFormat {
    Markdown,
    Html,
    Json,
}

const ALL_FORMATS: [ReportFormat; 3] = [ReportFormat::Markdown, ReportFormat::Html, ReportFormat::Json];

pub fn execute(config: &TrackerConfig, format: &str) -> Result<()> {
    let formats = parse_formats(format)?;

    let (store, summary) = load_roster(config)?;
    for line in describe_load(&summary, config) {
        eprintln!("{line}");
    }

    let report = ClassReport::from_store(&store);
    for fmt in formats {
        match fmt {
            ReportFormat::Markdown => {
                let path = config.markdown_path();
                save_text(&path, &build_markdown_report(&report))?;
                println!("Laporan Markdown disimpan ke {}", path.display());
            }
            ReportFormat::Html => {
                let path = config.html_path();
                write_html_report(&report, &path)?;
                println!("Laporan HTML disimpan ke {}", path.display());
            }
            ReportFormat::Json => {
                let path = config.json_path();
                report.save_json(&path)?;
                println!("Laporan JSON disimpan ke {}", path.display());
            }
        }
    }
    Ok(())
}

/// Split a `--format` value into known formats, rejecting unknown ones
/// before anything is written.
fn parse_formats(format: &str) -> Result<Vec<ReportFormat>> {
    if format.trim() == "all" {
        return Ok(ALL_FORMATS.to_vec());
    }
    let mut formats = Vec::new();
    for raw in format.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let fmt = match raw {
            "md" | "markdown" => ReportFormat::Markdown,
            "html" => ReportFormat::Html,
            "json" => ReportFormat::Json,
            other => anyhow::bail!("unknown report format: '{other}' (expected md, html, json, all)"),
        };
        if !formats.contains(&fmt) {
            formats.push(fmt);
        }
    }
    anyhow::ensure!(!formats.is_empty(), "no report format given");
    Ok(formats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_are_normalized() {
        assert_eq!(parse_formats("all").unwrap(), ALL_FORMATS);
        assert_eq!(
            parse_formats("markdown, html,md").unwrap(),
            [ReportFormat::Markdown, ReportFormat::Html]
        );
        assert!(parse_formats("pdf").is_err());
        assert!(parse_formats(" , ").is_err());
    }
}
