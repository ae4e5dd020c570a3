//! The `rekap init` command.

use std::path::Path;

use anyhow::{Context, Result};

use rekap_core::config::{load_config_from, CONFIG_FILE, SAMPLE_CONFIG};
use rekap_core::csv_io::reset_csv;

pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let path = config_path.unwrap_or(Path::new(CONFIG_FILE));
    if path.exists() {
        println!("{} already exists, skipping.", path.display());
    } else {
        std::fs::write(path, SAMPLE_CONFIG)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("Created {}", path.display());
    }

    let config = load_config_from(Some(path))?;
    config.ensure_dirs()?;

    let attendance = config.attendance_path();
    let grades = config.grades_path();
    if attendance.exists() || grades.exists() {
        println!("Data files already exist, skipping.");
    } else {
        reset_csv(&attendance, &grades)?;
        println!("Created {}", attendance.display());
        println!("Created {}", grades.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: rekap            (interactive menu)");
    println!("  2. Run: rekap recap      (print the saved roster)");
    println!("  3. Run: rekap report --format all");

    Ok(())
}
