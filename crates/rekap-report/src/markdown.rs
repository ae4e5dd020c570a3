//! Markdown report generator.

use rekap_core::summary::{ClassSummary, Standout};
use rekap_core::RecapEntry;

use crate::ClassReport;

const TABLE_HEADER: &str = "| NIM | Nama | Hadir (%) | Nilai Akhir | Predikat |\n\
                            |-----|------|-----------|-------------|----------|\n";

/// Escape characters that would break a table cell.
fn md_escape(s: &str) -> String {
    s.replace('\\', "\\\\").replace('|', "\\|").replace('\n', " ")
}

/// Render the recap as a Markdown table, one row per entry.
pub fn build_markdown_table(entries: &[RecapEntry]) -> String {
    let mut md = String::from(TABLE_HEADER);
    for e in entries {
        md.push_str(&format!(
            "| {} | {} | {:.1} | {:.2} | {} |\n",
            md_escape(&e.nim),
            md_escape(&e.nama),
            e.hadir,
            e.nilai_akhir,
            e.predikat
        ));
    }
    md
}

/// Generate the full Markdown report: title, table, and class summary.
pub fn build_markdown_report(report: &ClassReport) -> String {
    let mut md = String::new();

    md.push_str("# Rekap Nilai Kelas\n\n");
    md.push_str(&format!(
        "_Dibuat: {}_\n\n",
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));

    md.push_str(&build_markdown_table(&report.entries));
    if report.entries.is_empty() {
        md.push_str("\n_Belum ada data._\n");
    }

    md.push('\n');
    md.push_str(&summary_section(&report.summary));
    md
}

fn summary_section(s: &ClassSummary) -> String {
    let mut md = String::from("## Ringkasan\n\n");
    md.push_str(&format!("- Jumlah mahasiswa: {}\n", s.students));
    md.push_str(&format!("- Rata-rata nilai akhir: {:.2}\n", s.mean_score));
    md.push_str(&format!("- Rata-rata kehadiran: {:.1}%\n", s.mean_attendance));
    if let Some(h) = &s.highest {
        md.push_str(&format!("- Nilai tertinggi: {}\n", standout(h)));
    }
    if let Some(l) = &s.lowest {
        md.push_str(&format!("- Nilai terendah: {}\n", standout(l)));
    }
    let bands: Vec<String> = s
        .distribution
        .iter()
        .map(|(p, n)| format!("{p}: {n}"))
        .collect();
    md.push_str(&format!("- Distribusi predikat: {}\n", bands.join(", ")));
    md
}

fn standout(s: &Standout) -> String {
    format!(
        "{} ({}) {:.2}",
        md_escape(&s.nama),
        md_escape(&s.nim),
        s.nilai_akhir
    )
}
