//! Subcommand implementations and the helpers they share.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};

use rekap_core::config::TrackerConfig;
use rekap_core::csv_io::{self, FileLoad, LoadSummary};
use rekap_core::{RecapEntry, RosterStore};

pub mod init;
pub mod recap;
pub mod report;
pub mod shell;

/// Load the saved roster named by `config`.
pub fn load_roster(config: &TrackerConfig) -> Result<(RosterStore, LoadSummary)> {
    let mut store = RosterStore::new();
    let summary = load_into(&mut store, config)?;
    Ok((store, summary))
}

/// Merge the saved roster into an existing store.
pub fn load_into(store: &mut RosterStore, config: &TrackerConfig) -> Result<LoadSummary> {
    csv_io::load_csv(store, &config.attendance_path(), &config.grades_path())
}

/// One line per file describing what loading it did.
pub fn describe_load(summary: &LoadSummary, config: &TrackerConfig) -> Vec<String> {
    [
        (summary.attendance, &config.attendance_file),
        (summary.grades, &config.grades_file),
    ]
    .into_iter()
    .map(|(load, name)| match load {
        FileLoad::Missing => format!(" - {name} tidak ditemukan."),
        FileLoad::Loaded { rows, skipped: 0 } => format!(" - {name} dimuat ({rows} baris)."),
        FileLoad::Loaded { rows, skipped } => {
            format!(" - {name} dimuat ({rows} baris, {skipped} baris rusak dilewati).")
        }
    })
    .collect()
}

/// Render recap entries as a console table.
pub fn recap_table(entries: &[RecapEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["NIM", "Nama", "Hadir (%)", "Nilai Akhir", "Predikat"]);

    for e in entries {
        table.add_row(vec![
            Cell::new(&e.nim),
            Cell::new(&e.nama),
            Cell::new(format!("{:.1}", e.hadir)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", e.nilai_akhir)).set_alignment(CellAlignment::Right),
            Cell::new(e.predikat).set_alignment(CellAlignment::Center),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use rekap_core::Predikat;

    #[test]
    fn table_lists_every_entry() {
        let entries = vec![RecapEntry {
            nim: "230101002".into(),
            nama: "Fiko".into(),
            hadir: 80.0,
            nilai_akhir: 71.0,
            predikat: Predikat::B,
        }];
        let rendered = recap_table(&entries).to_string();
        assert!(rendered.contains("Nilai Akhir"));
        assert!(rendered.contains("230101002"));
        assert!(rendered.contains("71.00"));
        assert!(rendered.contains("80.0"));
    }

    #[test]
    fn load_description_names_files() {
        let config = TrackerConfig::default();
        let summary = LoadSummary {
            attendance: FileLoad::Loaded { rows: 3, skipped: 1 },
            grades: FileLoad::Missing,
        };
        let lines = describe_load(&summary, &config);
        assert_eq!(
            lines,
            [
                " - kehadiran.csv dimuat (3 baris, 1 baris rusak dilewati).",
                " - grades.csv tidak ditemukan."
            ]
        );
    }
}
