//! Core data model types for rekap.
//!
//! A class roster is a set of [`StudentRecord`]s keyed by NIM. Everything a
//! report shows is derived from those records on demand as [`RecapEntry`]s.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RosterError;

/// One student in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Student identifier, unique within a roster.
    pub nim: String,
    /// Display name. Empty for students that only appeared in the grades file.
    pub nama: String,
    /// Attendance percentage. Not clamped.
    pub hadir: f64,
    pub quiz: f64,
    pub tugas: f64,
    pub uts: f64,
    pub uas: f64,
}

impl StudentRecord {
    /// A record with all grade components at zero.
    pub fn new(nim: impl Into<String>, nama: impl Into<String>, hadir: f64) -> Self {
        Self {
            nim: nim.into(),
            nama: nama.into(),
            hadir,
            quiz: 0.0,
            tugas: 0.0,
            uts: 0.0,
            uas: 0.0,
        }
    }
}

/// A partial grade update. `None` leaves the component unchanged.
///
/// Values are kept as text so that validation happens inside the store,
/// where a failure can be reported before anything is written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GradeUpdate {
    pub quiz: Option<String>,
    pub tugas: Option<String>,
    pub uts: Option<String>,
    pub uas: Option<String>,
}

impl GradeUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiz(mut self, value: impl Into<String>) -> Self {
        self.quiz = Some(value.into());
        self
    }

    pub fn tugas(mut self, value: impl Into<String>) -> Self {
        self.tugas = Some(value.into());
        self
    }

    pub fn uts(mut self, value: impl Into<String>) -> Self {
        self.uts = Some(value.into());
        self
    }

    pub fn uas(mut self, value: impl Into<String>) -> Self {
        self.uas = Some(value.into());
        self
    }

    /// Returns `true` if no component is set.
    pub fn is_empty(&self) -> bool {
        self.quiz.is_none() && self.tugas.is_none() && self.uts.is_none() && self.uas.is_none()
    }

    /// Parse every present component, failing on the first invalid one in
    /// quiz, tugas, uts, uas order.
    pub(crate) fn parse(&self) -> Result<ParsedGrades, RosterError> {
        let parse = |field: &'static str, raw: &Option<String>| {
            raw.as_deref().map(|v| parse_value(field, v)).transpose()
        };
        Ok(ParsedGrades {
            quiz: parse("quiz", &self.quiz)?,
            tugas: parse("tugas", &self.tugas)?,
            uts: parse("uts", &self.uts)?,
            uas: parse("uas", &self.uas)?,
        })
    }
}

/// A [`GradeUpdate`] whose present fields have all been validated.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ParsedGrades {
    pub quiz: Option<f64>,
    pub tugas: Option<f64>,
    pub uts: Option<f64>,
    pub uas: Option<f64>,
}

impl ParsedGrades {
    pub(crate) fn apply_to(self, record: &mut StudentRecord) {
        if let Some(v) = self.quiz {
            record.quiz = v;
        }
        if let Some(v) = self.tugas {
            record.tugas = v;
        }
        if let Some(v) = self.uts {
            record.uts = v;
        }
        if let Some(v) = self.uas {
            record.uas = v;
        }
    }
}

/// Parse a user-supplied number.
///
/// Surrounding whitespace is ignored. NaN and infinities are rejected even
/// though `f64::from_str` accepts them.
pub fn parse_value(field: &'static str, raw: &str) -> Result<f64, RosterError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(RosterError::invalid(field, raw)),
    }
}

/// The derived, read-only view of one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecapEntry {
    pub nim: String,
    pub nama: String,
    pub hadir: f64,
    pub nilai_akhir: f64,
    pub predikat: Predikat,
}

/// Letter band of a final score.
///
/// Ordered best first, so `Predikat::A < Predikat::E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Predikat {
    A,
    B,
    C,
    D,
    E,
}

impl Predikat {
    pub const ALL: [Predikat; 5] = [
        Predikat::A,
        Predikat::B,
        Predikat::C,
        Predikat::D,
        Predikat::E,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Predikat::A => "A",
            Predikat::B => "B",
            Predikat::C => "C",
            Predikat::D => "D",
            Predikat::E => "E",
        }
    }
}

impl fmt::Display for Predikat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Predikat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(Predikat::A),
            "B" => Ok(Predikat::B),
            "C" => Ok(Predikat::C),
            "D" => Ok(Predikat::D),
            "E" => Ok(Predikat::E),
            other => Err(format!("unknown predikat: {other}")),
        }
    }
}
