//! Final score and predikat policy.
//!
//! The weights and band thresholds below are the grading policy of the
//! course. They are fixed for the whole program; change them here only.

use crate::model::{Predikat, RecapEntry, StudentRecord};

/// Weight of each grade component in the final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub quiz: f64,
    pub tugas: f64,
    pub uts: f64,
    pub uas: f64,
}

impl Weights {
    pub fn total(&self) -> f64 {
        self.quiz + self.tugas + self.uts + self.uas
    }
}

/// quiz 20%, tugas 20%, UTS 30%, UAS 30%.
pub const WEIGHTS: Weights = Weights {
    quiz: 0.20,
    tugas: 0.20,
    uts: 0.30,
    uas: 0.30,
};

/// Lower bound (inclusive) of each band, best first. Anything below the last
/// bound, including NaN, is [`Predikat::E`].
///
/// | Range      | Predikat |
/// |------------|----------|
/// | >= 85      | A        |
/// | >= 70      | B        |
/// | >= 55      | C        |
/// | >= 40      | D        |
/// | < 40       | E        |
pub const BANDS: [(f64, Predikat); 4] = [
    (85.0, Predikat::A),
    (70.0, Predikat::B),
    (55.0, Predikat::C),
    (40.0, Predikat::D),
];

/// Rounding scale of a final score (9 decimal places).
const SCORE_PRECISION: f64 = 1e9;

/// Weighted sum of the four components, rounded to 9 decimal places so that
/// a sum that is exactly on a band boundary compares as such. The result is
/// not clamped.
pub fn final_score(quiz: f64, tugas: f64, uts: f64, uas: f64) -> f64 {
    let sum = WEIGHTS.quiz * quiz + WEIGHTS.tugas * tugas + WEIGHTS.uts * uts + WEIGHTS.uas * uas;
    (sum * SCORE_PRECISION).round() / SCORE_PRECISION
}

/// Band a final score.
pub fn predikat(nilai_akhir: f64) -> Predikat {
    BANDS
        .iter()
        .find(|(min, _)| nilai_akhir >= *min)
        .map(|(_, p)| *p)
        .unwrap_or(Predikat::E)
}

/// Derive the recap entry of a record.
pub fn recap_entry(record: &StudentRecord) -> RecapEntry {
    let nilai_akhir = final_score(record.quiz, record.tugas, record.uts, record.uas);
    RecapEntry {
        nim: record.nim.clone(),
        nama: record.nama.clone(),
        hadir: record.hadir,
        nilai_akhir,
        predikat: predikat(nilai_akhir),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn weights_sum_to_one() {
        assert!((WEIGHTS.total() - 1.0).abs() < EPS);
    }

    #[test]
    fn final_score_is_weighted_sum() {
        assert!((final_score(0.0, 0.0, 0.0, 0.0)).abs() < EPS);
        assert!((final_score(100.0, 100.0, 100.0, 100.0) - 100.0).abs() < EPS);
        assert!((final_score(90.0, 85.0, 88.0, 92.0) - 89.0).abs() < EPS);
        assert!((final_score(70.0, 75.0, 68.0, 72.0) - 71.0).abs() < EPS);
        assert!((final_score(98.0, 89.0, 90.0, 98.0) - 93.8).abs() < EPS);
        assert!((final_score(100.0, 0.0, 0.0, 0.0) - 20.0).abs() < EPS);
        assert!((final_score(0.0, 0.0, 0.0, 100.0) - 30.0).abs() < EPS);
    }

    #[test]
    fn final_score_is_monotonic_in_each_component() {
        let base = [40.0, 50.0, 60.0, 70.0];
        let score = |v: [f64; 4]| final_score(v[0], v[1], v[2], v[3]);
        for i in 0..4 {
            let mut prev = f64::NEG_INFINITY;
            for step in 0..=20 {
                let mut v = base;
                v[i] = step as f64 * 5.0;
                let s = score(v);
                assert!(s >= prev, "component {i} decreased at {}", v[i]);
                prev = s;
            }
        }
    }

    #[test]
    fn final_score_is_not_clamped() {
        assert!((final_score(200.0, 200.0, 200.0, 200.0) - 200.0).abs() < EPS);
        assert!(final_score(-10.0, 0.0, 0.0, 0.0) < 0.0);
    }

    #[test]
    fn predikat_boundaries() {
        assert_eq!(predikat(100.0), Predikat::A);
        assert_eq!(predikat(85.0), Predikat::A);
        assert_eq!(predikat(84.999), Predikat::B);
        assert_eq!(predikat(70.0), Predikat::B);
        assert_eq!(predikat(69.999), Predikat::C);
        assert_eq!(predikat(55.0), Predikat::C);
        assert_eq!(predikat(54.999), Predikat::D);
        assert_eq!(predikat(40.0), Predikat::D);
        assert_eq!(predikat(39.999), Predikat::E);
        assert_eq!(predikat(0.0), Predikat::E);
    }

    #[test]
    fn computed_scores_on_a_boundary_are_exact() {
        let cases = [
            ((0.0, 20.0, 97.0, 73.0), 55.0, Predikat::C),
            ((2.0, 81.0, 96.0, 82.0), 70.0, Predikat::B),
            ((70.0, 70.0, 70.0, 70.0), 70.0, Predikat::B),
            ((85.0, 85.0, 85.0, 85.0), 85.0, Predikat::A),
            ((40.0, 40.0, 40.0, 40.0), 40.0, Predikat::D),
        ];
        for ((q, t, u, a), expected, band) in cases {
            let score = final_score(q, t, u, a);
            assert_eq!(score, expected, "({q}, {t}, {u}, {a})");
            assert_eq!(predikat(score), band, "({q}, {t}, {u}, {a})");
        }
    }

    #[test]
    fn every_integer_boundary_hit_lands_in_upper_band() {
        for q in (0..=100).step_by(7) {
            for t in (0..=100).step_by(3) {
                for u in 0..=100 {
                    for a in 0..=100 {
                        let tenths = 2 * q + 2 * t + 3 * u + 3 * a;
                        let Some(&(min, band)) =
                            BANDS.iter().find(|(min, _)| tenths as f64 == min * 10.0)
                        else {
                            continue;
                        };
                        let score = final_score(q as f64, t as f64, u as f64, a as f64);
                        assert_eq!(score, min, "({q}, {t}, {u}, {a})");
                        assert_eq!(predikat(score), band);
                    }
                }
            }
        }
    }

    #[test]
    fn predikat_is_total() {
        assert_eq!(predikat(f64::NAN), Predikat::E);
        assert_eq!(predikat(f64::NEG_INFINITY), Predikat::E);
        assert_eq!(predikat(-5.0), Predikat::E);
        assert_eq!(predikat(f64::INFINITY), Predikat::A);
        assert_eq!(predikat(250.0), Predikat::A);
    }

    #[test]
    fn recap_entry_derives_from_record() {
        let mut record = StudentRecord::new("230101001", "Egie", 92.0);
        record.quiz = 90.0;
        record.tugas = 85.0;
        record.uts = 88.0;
        record.uas = 92.0;
        let entry = recap_entry(&record);
        assert_eq!(entry.nim, "230101001");
        assert_eq!(entry.hadir, 92.0);
        assert!((entry.nilai_akhir - 89.0).abs() < EPS);
        assert_eq!(entry.predikat, Predikat::A);
    }
}
