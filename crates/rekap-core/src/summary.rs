//! Class-level aggregate statistics over a recap.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{Predikat, RecapEntry};

/// A student singled out by the summary (best or worst final score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standout {
    pub nim: String,
    pub nama: String,
    pub nilai_akhir: f64,
}

/// Aggregate statistics for a whole class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    pub students: usize,
    /// Mean final score, 0.0 for an empty class.
    pub mean_score: f64,
    /// Mean attendance, 0.0 for an empty class.
    pub mean_attendance: f64,
    pub highest: Option<Standout>,
    pub lowest: Option<Standout>,
    /// Number of students per predikat. Every band is present, possibly zero.
    pub distribution: BTreeMap<Predikat, usize>,
}

impl ClassSummary {
    pub fn from_entries(entries: &[RecapEntry]) -> Self {
        let mut distribution: BTreeMap<Predikat, usize> =
            Predikat::ALL.iter().map(|p| (*p, 0)).collect();
        for e in entries {
            *distribution.entry(e.predikat).or_insert(0) += 1;
        }

        let n = entries.len();
        let mean = |f: fn(&RecapEntry) -> f64| {
            if n == 0 {
                0.0
            } else {
                entries.iter().map(f).sum::<f64>() / n as f64
            }
        };

        // Ties keep the earliest student in recap order.
        let mut highest: Option<&RecapEntry> = None;
        let mut lowest: Option<&RecapEntry> = None;
        for e in entries {
            if highest.map_or(true, |h| e.nilai_akhir > h.nilai_akhir) {
                highest = Some(e);
            }
            if lowest.map_or(true, |l| e.nilai_akhir < l.nilai_akhir) {
                lowest = Some(e);
            }
        }

        Self {
            students: n,
            mean_score: mean(|e| e.nilai_akhir),
            mean_attendance: mean(|e| e.hadir),
            highest: highest.map(Standout::from),
            lowest: lowest.map(Standout::from),
            distribution,
        }
    }

    pub fn count(&self, predikat: Predikat) -> usize {
        self.distribution.get(&predikat).copied().unwrap_or(0)
    }
}

impl From<&RecapEntry> for Standout {
    fn from(e: &RecapEntry) -> Self {
        Self {
            nim: e.nim.clone(),
            nama: e.nama.clone(),
            nilai_akhir: e.nilai_akhir,
        }
    }
}
