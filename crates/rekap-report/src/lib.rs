//! rekap-report — Class report generation.
//!
//! A [`ClassReport`] is a recap of the roster frozen at a point in time,
//! together with its class summary. It renders to Markdown, to a
//! self-contained HTML page, or to JSON.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rekap_core::summary::ClassSummary;
use rekap_core::{RecapEntry, RosterStore};

pub mod html;
pub mod markdown;

/// A complete class report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassReport {
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// One entry per student, in roster order.
    pub entries: Vec<RecapEntry>,
    /// Aggregate statistics over `entries`.
    pub summary: ClassSummary,
}

impl ClassReport {
    pub fn new(entries: Vec<RecapEntry>) -> Self {
        Self::at(entries, Utc::now())
    }

    /// Build a report with an explicit timestamp.
    pub fn at(entries: Vec<RecapEntry>, created_at: DateTime<Utc>) -> Self {
        let summary = ClassSummary::from_entries(&entries);
        Self {
            created_at,
            entries,
            summary,
        }
    }

    pub fn from_store(store: &RosterStore) -> Self {
        Self::new(store.recap())
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        save_text(path, &json)
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        serde_json::from_str(&content).context("failed to parse report JSON")
    }
}

/// Write `content` to `path`, creating parent directories and overwriting
/// any existing file.
pub fn save_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use chrono::TimeZone;
    use rekap_core::model::GradeUpdate;

    pub fn sample_report() -> ClassReport {
        let mut rk = RosterStore::new();
        rk.add_student("230101001", "Egie", "92").unwrap();
        rk.set_grades(
            "230101001",
            &GradeUpdate::new().quiz("90").tugas("85").uts("88").uas("92"),
        )
        .unwrap();
        rk.add_student("230101002", "Fiko", "80").unwrap();
        rk.set_grades(
            "230101002",
            &GradeUpdate::new().quiz("70").tugas("75").uts("68").uas("72"),
        )
        .unwrap();
        rk.add_student("230101003", "Pradipta", "60").unwrap();
        rk.set_grades(
            "230101003",
            &GradeUpdate::new().quiz("98").tugas("89").uts("90").uas("98"),
        )
        .unwrap();
        let created_at = Utc.with_ymd_and_hms(2024, 5, 17, 8, 30, 0).unwrap();
        ClassReport::at(rk.recap(), created_at)
    }
}
