//! The in-memory class roster.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RosterError;
use crate::model::{parse_value, GradeUpdate, RecapEntry, StudentRecord};
use crate::scoring::recap_entry;

/// Student records keyed by NIM, kept in insertion order.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    records: Vec<StudentRecord>,
    index: HashMap<String, usize>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Lookups trim `nim` the same way [`add_student`](Self::add_student) does.
    pub fn contains(&self, nim: &str) -> bool {
        self.index.contains_key(nim.trim())
    }

    pub fn get(&self, nim: &str) -> Option<&StudentRecord> {
        self.index.get(nim.trim()).map(|&i| &self.records[i])
    }

    /// All records in insertion order.
    pub fn records(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    /// Add a new student with every grade component at zero.
    ///
    /// `nim` and `nama` are trimmed and must not be empty. `hadir` must be a
    /// non-negative number.
    pub fn add_student(&mut self, nim: &str, nama: &str, hadir: &str) -> Result<(), RosterError> {
        let nim = nim.trim();
        let nama = nama.trim();
        if nim.is_empty() {
            return Err(RosterError::invalid("nim", nim));
        }
        if nama.is_empty() {
            return Err(RosterError::invalid("nama", nama));
        }
        if self.contains(nim) {
            return Err(RosterError::DuplicateKey(nim.to_string()));
        }
        let hadir_value = parse_value("hadir", hadir)?;
        if hadir_value < 0.0 {
            return Err(RosterError::invalid("hadir", hadir));
        }

        debug!(nim, nama, hadir = hadir_value, "adding student");
        self.insert(StudentRecord::new(nim, nama, hadir_value));
        Ok(())
    }

    /// Overwrite the attendance of an existing student.
    pub fn set_attendance(&mut self, nim: &str, hadir: &str) -> Result<(), RosterError> {
        let nim = nim.trim();
        let i = self.position(nim)?;
        let hadir = parse_value("hadir", hadir)?;
        debug!(nim, hadir, "updating attendance");
        self.records[i].hadir = hadir;
        Ok(())
    }

    /// Apply a partial grade update to an existing student.
    ///
    /// Every present component is validated before any is written, so a
    /// failed call leaves the record untouched.
    pub fn set_grades(&mut self, nim: &str, update: &GradeUpdate) -> Result<(), RosterError> {
        let nim = nim.trim();
        let i = self.position(nim)?;
        let parsed = update.parse()?;
        debug!(nim, ?parsed, "updating grades");
        parsed.apply_to(&mut self.records[i]);
        Ok(())
    }

    /// Derived summary of every student, in insertion order.
    pub fn recap(&self) -> Vec<RecapEntry> {
        self.records.iter().map(recap_entry).collect()
    }

    /// The recap entries whose final score is strictly below `threshold`.
    pub fn filter_below(&self, threshold: f64) -> Vec<RecapEntry> {
        self.recap()
            .into_iter()
            .filter(|e| e.nilai_akhir < threshold)
            .collect()
    }

    /// Remove every record.
    pub fn clear(&mut self) {
        debug!(count = self.records.len(), "clearing roster");
        self.records.clear();
        self.index.clear();
    }

    /// Create-or-update identity and attendance, as an attendance CSV row does.
    pub(crate) fn upsert_attendance(&mut self, nim: &str, nama: &str, hadir: f64) {
        match self.index.get(nim) {
            Some(&i) => {
                let record = &mut self.records[i];
                record.nama = nama.to_string();
                record.hadir = hadir;
            }
            None => self.insert(StudentRecord::new(nim, nama, hadir)),
        }
    }

    /// Create-or-update the four grade components, as a grades CSV row does.
    /// An unknown NIM gets a placeholder record with empty name and zero
    /// attendance.
    pub(crate) fn upsert_grades(&mut self, nim: &str, quiz: f64, tugas: f64, uts: f64, uas: f64) {
        let i = match self.index.get(nim) {
            Some(&i) => i,
            None => {
                debug!(nim, "grades row for unknown student, creating placeholder");
                self.insert(StudentRecord::new(nim, "", 0.0));
                self.records.len() - 1
            }
        };
        let record = &mut self.records[i];
        record.quiz = quiz;
        record.tugas = tugas;
        record.uts = uts;
        record.uas = uas;
    }

    fn insert(&mut self, record: StudentRecord) {
        self.index.insert(record.nim.clone(), self.records.len());
        self.records.push(record);
    }

    fn position(&self, nim: &str) -> Result<usize, RosterError> {
        self.index
            .get(nim.trim())
            .copied()
            .ok_or_else(|| RosterError::NotFound(nim.to_string()))
    }
}
