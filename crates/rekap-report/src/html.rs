//! HTML report generator.
//!
//! Produces a self-contained HTML file with the CSS inlined. The predikat
//! cell of every row is color-coded by band.

use anyhow::Result;
use std::path::Path;

use rekap_core::Predikat;

use crate::{save_text, ClassReport};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// CSS class of a predikat cell.
pub fn grade_class(p: Predikat) -> &'static str {
    match p {
        Predikat::A => "grade-a",
        Predikat::B => "grade-b",
        Predikat::C => "grade-c",
        Predikat::D => "grade-d",
        Predikat::E => "grade-e",
    }
}

/// Generate an HTML report from a class report.
pub fn generate_html(report: &ClassReport) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"id\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>Rekap Nilai Kelas</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str("<h1>Rekap Nilai Kelas</h1>\n");
    html.push_str(&format!(
        "<p class=\"meta\">{} mahasiswa | Dibuat {}</p>\n",
        report.summary.students,
        report.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    html.push_str("</header>\n");

    // Per-student recap
    html.push_str("<section class=\"results\">\n");
    html.push_str("<table class=\"recap\">\n");
    html.push_str("<thead><tr><th>NIM</th><th>Nama</th><th>Hadir (%)</th><th>Nilai Akhir</th><th>Predikat</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    if report.entries.is_empty() {
        html.push_str("<tr><td colspan=\"5\" class=\"empty\">Belum ada data.</td></tr>\n");
    }
    for e in &report.entries {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{:.1}</td><td>{:.2}</td><td class=\"{}\">{}</td></tr>\n",
            html_escape(&e.nim),
            html_escape(&e.nama),
            e.hadir,
            e.nilai_akhir,
            grade_class(e.predikat),
            e.predikat
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Class summary
    let s = &report.summary;
    html.push_str("<section class=\"summary\">\n");
    html.push_str("<h2>Ringkasan</h2>\n<ul>\n");
    html.push_str(&format!(
        "<li>Rata-rata nilai akhir: {:.2}</li>\n",
        s.mean_score
    ));
    html.push_str(&format!(
        "<li>Rata-rata kehadiran: {:.1}%</li>\n",
        s.mean_attendance
    ));
    if let Some(h) = &s.highest {
        html.push_str(&format!(
            "<li>Nilai tertinggi: {} ({}) {:.2}</li>\n",
            html_escape(&h.nama),
            html_escape(&h.nim),
            h.nilai_akhir
        ));
    }
    if let Some(l) = &s.lowest {
        html.push_str(&format!(
            "<li>Nilai terendah: {} ({}) {:.2}</li>\n",
            html_escape(&l.nama),
            html_escape(&l.nim),
            l.nilai_akhir
        ));
    }
    html.push_str("</ul>\n");

    // Predikat distribution
    html.push_str("<p class=\"distribution\">");
    for (p, n) in &s.distribution {
        html.push_str(&format!(
            "<span class=\"{}\">{}: {}</span> ",
            grade_class(*p),
            p,
            n
        ));
    }
    html.push_str("</p>\n</section>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML report to a file.
pub fn write_html_report(report: &ClassReport, path: &Path) -> Result<()> {
    save_text(path, &generate_html(report))
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
td.empty { text-align: center; color: #6b7280; }
.grade-a { background: #22c55e; color: #fff; font-weight: bold; }
.grade-b { background: #84cc16; color: #fff; font-weight: bold; }
.grade-c { background: #eab308; color: #1a1a1a; font-weight: bold; }
.grade-d { background: #f97316; color: #fff; font-weight: bold; }
.grade-e { background: #ef4444; color: #fff; font-weight: bold; }
.distribution span { display: inline-block; padding: 0.25rem 0.75rem; margin-right: 0.5rem; border-radius: 4px; }
"#;
