//! The interactive menu shell (`rekap` / `rekap shell`).
//!
//! Every roster or file error is reported on the output and the menu comes
//! back; only a failure of the terminal itself ends the session.
//! End of input behaves like choosing "Keluar".

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tracing::debug;

use rekap_core::config::TrackerConfig;
use rekap_core::csv_io::{reset_csv, save_csv};
use rekap_core::{GradeUpdate, RecapEntry, RosterStore};
use rekap_report::html::write_html_report;
use rekap_report::markdown::build_markdown_report;
use rekap_report::{save_text, ClassReport};

use super::{describe_load, load_into, recap_table};

const MENU: &str = "\n=== Student Performance Tracker ===
1) Muat data dari CSV
2) Tambah mahasiswa
3) Ubah presensi
4) Ubah nilai
5) Lihat rekap
6) Simpan laporan Markdown
7) Simpan data ke CSV
8) Tampilkan mahasiswa dengan nilai < {threshold}
9) Simpan laporan HTML berwarna
10) Reset semua data (hapus isi CSV & memori)
11) Keluar";

/// Whether the session continues after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// A line that could not be decoded. `read_line` has already consumed it,
/// so the session can carry on.
fn is_invalid_input(e: &anyhow::Error) -> bool {
    e.downcast_ref::<io::Error>()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::InvalidData)
}

pub fn execute(config: TrackerConfig) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(stdin.lock(), stdout.lock(), config).run()
}

/// Menu loop over an arbitrary input and output.
pub struct Shell<R, W> {
    input: R,
    output: W,
    config: TrackerConfig,
    store: RosterStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: TrackerConfig) -> Self {
        Self {
            input,
            output,
            config,
            store: RosterStore::new(),
        }
    }

    pub fn store(&self) -> &RosterStore {
        &self.store
    }

    /// Run until the user picks "Keluar" or input ends.
    pub fn run(&mut self) -> Result<()> {
        if let Err(e) = self.config.ensure_dirs() {
            writeln!(self.output, "❌ Gagal: {e:#}")?;
        }

        loop {
            let menu = MENU.replace("{threshold}", &self.config.below_threshold.to_string());
            writeln!(self.output, "{menu}")?;
            let choice = match self.prompt("Pilih menu: ") {
                Ok(Some(choice)) => choice,
                Ok(None) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(e) if is_invalid_input(&e) => {
                    writeln!(self.output, "❌ Gagal: {e:#}")?;
                    continue;
                }
                Err(e) => return Err(e),
            };
            debug!(choice = %choice, "menu selection");

            let outcome = match choice.as_str() {
                "1" => self.load(),
                "2" => self.add_student(),
                "3" => self.edit_attendance(),
                "4" => self.edit_grades(),
                "5" => self.show_recap(),
                "6" => self.save_markdown(),
                "7" => self.save_data(),
                "8" => self.show_below(),
                "9" => self.save_html(),
                "10" => self.reset(),
                "11" => {
                    writeln!(self.output, "👋 Keluar dari aplikasi. Sampai jumpa!")?;
                    return Ok(());
                }
                _ => {
                    writeln!(self.output, "❌ Pilihan tidak valid, coba lagi.")?;
                    Ok(Flow::Continue)
                }
            };

            match outcome {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => writeln!(self.output, "❌ Gagal: {e:#}")?,
            }
        }
        Ok(())
    }

    /// Print `label` and read one trimmed line. `None` on end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Like [`prompt`](Self::prompt), but asks again until the answer is not
    /// empty.
    fn prompt_non_empty(&mut self, label: &str) -> Result<Option<String>> {
        loop {
            match self.prompt(label)? {
                Some(v) if v.is_empty() => continue,
                other => return Ok(other),
            }
        }
    }

    /// An optional field: an empty answer means "leave unchanged".
    fn prompt_optional(&mut self, label: &str) -> Result<Option<Option<String>>> {
        Ok(self
            .prompt(label)?
            .map(|v| if v.is_empty() { None } else { Some(v) }))
    }

    fn load(&mut self) -> Result<Flow> {
        writeln!(self.output, "Memuat data dari CSV...")?;
        let summary = load_into(&mut self.store, &self.config)?;
        for line in describe_load(&summary, &self.config) {
            writeln!(self.output, "{line}")?;
        }
        Ok(Flow::Continue)
    }

    fn add_student(&mut self) -> Result<Flow> {
        let Some(nim) = self.prompt_non_empty("NIM: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(nama) = self.prompt_non_empty("Nama: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(hadir) = self.prompt("Hadir (%): ")? else {
            return Ok(Flow::Exit);
        };
        let hadir = if hadir.is_empty() { "0".to_string() } else { hadir };

        self.store.add_student(&nim, &nama, &hadir)?;
        writeln!(self.output, "✅ Mahasiswa berhasil ditambahkan.")?;
        Ok(Flow::Continue)
    }

    fn edit_attendance(&mut self) -> Result<Flow> {
        let Some(nim) = self.prompt_non_empty("NIM: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(hadir) = self.prompt_non_empty("Persentase hadir baru: ")? else {
            return Ok(Flow::Exit);
        };

        self.store.set_attendance(&nim, &hadir)?;
        writeln!(self.output, "✅ Presensi berhasil diperbarui.")?;
        Ok(Flow::Continue)
    }

    fn edit_grades(&mut self) -> Result<Flow> {
        let Some(nim) = self.prompt_non_empty("NIM: ")? else {
            return Ok(Flow::Exit);
        };
        writeln!(
            self.output,
            "Kosongkan jika tidak ingin mengubah kolom tertentu."
        )?;

        let mut update = GradeUpdate::new();
        for (label, slot) in [
            ("Quiz: ", &mut update.quiz),
            ("Tugas: ", &mut update.tugas),
            ("UTS: ", &mut update.uts),
            ("UAS: ", &mut update.uas),
        ] {
            let Some(value) = self.prompt_optional(label)? else {
                return Ok(Flow::Exit);
            };
            *slot = value;
        }

        self.store.set_grades(&nim, &update)?;
        writeln!(self.output, "✅ Nilai berhasil diperbarui.")?;
        Ok(Flow::Continue)
    }

    fn show_recap(&mut self) -> Result<Flow> {
        let entries = self.store.recap();
        if entries.is_empty() {
            writeln!(self.output, "⚠️ Belum ada data.")?;
        } else {
            self.print_table(&entries)?;
        }
        Ok(Flow::Continue)
    }

    fn show_below(&mut self) -> Result<Flow> {
        let threshold = self.config.below_threshold;
        let entries = self.store.filter_below(threshold);
        if entries.is_empty() {
            writeln!(
                self.output,
                "🎉 Tidak ada mahasiswa dengan nilai < {threshold}."
            )?;
        } else {
            writeln!(self.output, "\nMahasiswa dengan nilai < {threshold}:")?;
            self.print_table(&entries)?;
        }
        Ok(Flow::Continue)
    }

    fn print_table(&mut self, entries: &[RecapEntry]) -> Result<()> {
        writeln!(self.output, "{}", recap_table(entries))?;
        Ok(())
    }

    fn save_markdown(&mut self) -> Result<Flow> {
        let path = self.config.markdown_path();
        let report = ClassReport::from_store(&self.store);
        save_text(&path, &build_markdown_report(&report))?;
        writeln!(
            self.output,
            "✅ Laporan Markdown disimpan ke {}",
            path.display()
        )?;
        Ok(Flow::Continue)
    }

    fn save_html(&mut self) -> Result<Flow> {
        let path = self.config.html_path();
        write_html_report(&ClassReport::from_store(&self.store), &path)?;
        writeln!(self.output, "✅ Laporan HTML disimpan ke {}", path.display())?;
        Ok(Flow::Continue)
    }

    fn save_data(&mut self) -> Result<Flow> {
        let attendance = self.config.attendance_path();
        let grades = self.config.grades_path();
        save_csv(&self.store, &attendance, &grades)?;
        writeln!(
            self.output,
            "✅ Data berhasil disimpan ke {} dan {}",
            attendance.display(),
            grades.display()
        )?;
        Ok(Flow::Continue)
    }

    fn reset(&mut self) -> Result<Flow> {
        let Some(answer) =
            self.prompt("Apakah kamu yakin ingin menghapus semua data? (y/n): ")?
        else {
            return Ok(Flow::Exit);
        };
        if !answer.eq_ignore_ascii_case("y") {
            writeln!(self.output, "❌ Dibatalkan.")?;
            return Ok(Flow::Continue);
        }

        reset_csv(&self.config.attendance_path(), &self.config.grades_path())?;
        writeln!(
            self.output,
            "✅ Semua data berhasil direset ({} dan {} dikosongkan).",
            self.config.attendance_file, self.config.grades_file
        )?;
        self.store.clear();
        writeln!(self.output, "🧹 Data di memori juga telah dihapus.")?;
        Ok(Flow::Continue)
    }
}
