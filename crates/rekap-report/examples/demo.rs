//! Demo class — minimal programmatic usage of rekap.
//!
//! This example seeds a three-student class through the roster API, builds
//! the Markdown recap, and writes it to `out/report.md` (or the path given
//! as the first argument).
//!
//! ```bash
//! cargo run -p rekap-report --example demo
//! cargo run -p rekap-report --example demo -- /tmp/kelas.md
//! ```

use std::path::PathBuf;

use rekap_core::{GradeUpdate, RosterStore};
use rekap_report::markdown::build_markdown_report;
use rekap_report::{save_text, ClassReport};

fn main() -> anyhow::Result<()> {
    println!("=== rekap demo ===");

    let mut rk = RosterStore::new();

    // nim, nama, hadir, then quiz / tugas / uts / uas
    let class = [
        ("230101001", "Egie", "92", ["90", "85", "88", "92"]),
        ("230101002", "Fiko", "80", ["70", "75", "68", "72"]),
        ("230101003", "Pradipta", "60", ["98", "89", "90", "98"]),
    ];
    for (nim, nama, hadir, [quiz, tugas, uts, uas]) in class {
        rk.add_student(nim, nama, hadir)?;
        let update = GradeUpdate::new().quiz(quiz).tugas(tugas).uts(uts).uas(uas);
        rk.set_grades(nim, &update)?;
    }

    let report = ClassReport::from_store(&rk);
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("out/report.md"));
    save_text(&path, &build_markdown_report(&report))?;

    println!("Report written to: {}", path.display());
    println!("Students listed: {}", report.entries.len());

    Ok(())
}
