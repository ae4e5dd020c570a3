//! Attendance and grades CSV persistence.
//!
//! The roster is stored as two files that share the `nim` key:
//!
//! - attendance: `nim,nama,hadir_persen`
//! - grades: `nim,quiz,tugas,uts,uas`
//!
//! Loading merges by key. An attendance row creates or updates a student's
//! name and attendance; a grades row creates or updates the four grade
//! components, creating a placeholder student if the NIM is new.

use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::model::parse_value;
use crate::store::RosterStore;

pub const ATTENDANCE_HEADER: [&str; 3] = ["nim", "nama", "hadir_persen"];
pub const GRADES_HEADER: [&str; 5] = ["nim", "quiz", "tugas", "uts", "uas"];

#[derive(Debug, Serialize, Deserialize)]
struct AttendanceRow {
    nim: String,
    nama: String,
    hadir_persen: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct GradesRow {
    nim: String,
    quiz: String,
    tugas: String,
    uts: String,
    uas: String,
}

/// Outcome of loading one CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileLoad {
    /// The file does not exist. The roster was left as it was.
    Missing,
    /// The file was read. `skipped` counts malformed rows.
    Loaded { rows: usize, skipped: usize },
}

/// Outcome of [`load_csv`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    pub attendance: FileLoad,
    pub grades: FileLoad,
}

/// Merge both CSV files into `store`. Missing files are reported, not failed.
pub fn load_csv(
    store: &mut RosterStore,
    attendance_path: &Path,
    grades_path: &Path,
) -> Result<LoadSummary> {
    let attendance = load_attendance_csv(store, attendance_path)?;
    let grades = load_grades_csv(store, grades_path)?;
    Ok(LoadSummary { attendance, grades })
}

pub fn load_attendance_csv(store: &mut RosterStore, path: &Path) -> Result<FileLoad> {
    let Some(mut reader) = open_reader(path)? else {
        return Ok(FileLoad::Missing);
    };

    let (mut rows, mut skipped) = (0, 0);
    for (line, row) in reader.deserialize::<AttendanceRow>().enumerate() {
        let parsed = row.map_err(anyhow::Error::from).and_then(|r| {
            anyhow::ensure!(!r.nim.is_empty(), "empty nim");
            let hadir = parse_value("hadir", &r.hadir_persen)?;
            Ok((r, hadir))
        });
        match parsed {
            Ok((r, hadir)) => {
                store.upsert_attendance(&r.nim, &r.nama, hadir);
                rows += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), row = line + 1, "skipping attendance row: {e:#}");
                skipped += 1;
            }
        }
    }

    info!(path = %path.display(), rows, skipped, "attendance loaded");
    Ok(FileLoad::Loaded { rows, skipped })
}

pub fn load_grades_csv(store: &mut RosterStore, path: &Path) -> Result<FileLoad> {
    let Some(mut reader) = open_reader(path)? else {
        return Ok(FileLoad::Missing);
    };

    let (mut rows, mut skipped) = (0, 0);
    for (line, row) in reader.deserialize::<GradesRow>().enumerate() {
        let parsed = row.map_err(anyhow::Error::from).and_then(|r| {
            anyhow::ensure!(!r.nim.is_empty(), "empty nim");
            let values = [
                parse_value("quiz", &r.quiz)?,
                parse_value("tugas", &r.tugas)?,
                parse_value("uts", &r.uts)?,
                parse_value("uas", &r.uas)?,
            ];
            Ok((r.nim, values))
        });
        match parsed {
            Ok((nim, [quiz, tugas, uts, uas])) => {
                store.upsert_grades(&nim, quiz, tugas, uts, uas);
                rows += 1;
            }
            Err(e) => {
                warn!(path = %path.display(), row = line + 1, "skipping grades row: {e:#}");
                skipped += 1;
            }
        }
    }

    info!(path = %path.display(), rows, skipped, "grades loaded");
    Ok(FileLoad::Loaded { rows, skipped })
}

/// Overwrite both CSV files with the current roster.
pub fn save_csv(store: &RosterStore, attendance_path: &Path, grades_path: &Path) -> Result<()> {
    save_attendance_csv(store, attendance_path)?;
    save_grades_csv(store, grades_path)
}

pub fn save_attendance_csv(store: &RosterStore, path: &Path) -> Result<()> {
    let mut writer = create_writer(path, &ATTENDANCE_HEADER)?;
    for r in store.records() {
        writer
            .serialize(AttendanceRow {
                nim: r.nim.clone(),
                nama: r.nama.clone(),
                hadir_persen: r.hadir.to_string(),
            })
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = store.len(), "attendance saved");
    Ok(())
}

pub fn save_grades_csv(store: &RosterStore, path: &Path) -> Result<()> {
    let mut writer = create_writer(path, &GRADES_HEADER)?;
    for r in store.records() {
        writer
            .serialize(GradesRow {
                nim: r.nim.clone(),
                quiz: r.quiz.to_string(),
                tugas: r.tugas.to_string(),
                uts: r.uts.to_string(),
                uas: r.uas.to_string(),
            })
            .with_context(|| format!("failed to write {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), rows = store.len(), "grades saved");
    Ok(())
}

/// Truncate both files to their header row.
pub fn reset_csv(attendance_path: &Path, grades_path: &Path) -> Result<()> {
    create_writer(attendance_path, &ATTENDANCE_HEADER)?
        .flush()
        .with_context(|| format!("failed to reset {}", attendance_path.display()))?;
    create_writer(grades_path, &GRADES_HEADER)?
        .flush()
        .with_context(|| format!("failed to reset {}", grades_path.display()))?;
    info!("csv files reset to header only");
    Ok(())
}

fn open_reader(path: &Path) -> Result<Option<csv::Reader<File>>> {
    if !path.exists() {
        info!(path = %path.display(), "csv file not found, skipping");
        return Ok(None);
    }
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    Ok(Some(reader))
}

/// Open `path` for overwriting, header already written. Rows are serialized
/// without their own header so an empty roster still gets one.
fn create_writer(path: &Path, header: &[&str]) -> Result<csv::Writer<File>> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer
        .write_record(header)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(writer)
}
