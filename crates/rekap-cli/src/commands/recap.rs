//! The `rekap recap` and `rekap below` commands.

use anyhow::Result;

use rekap_core::config::TrackerConfig;

use super::{describe_load, load_roster, recap_table};

pub fn execute(config: &TrackerConfig) -> Result<()> {
    let (store, summary) = load_roster(config)?;
    for line in describe_load(&summary, config) {
        eprintln!("{line}");
    }

    let entries = store.recap();
    if entries.is_empty() {
        println!("Belum ada data.");
    } else {
        println!("{}", recap_table(&entries));
    }
    Ok(())
}

pub fn execute_below(config: &TrackerConfig, threshold: Option<f64>) -> Result<()> {
    let threshold = threshold.unwrap_or(config.below_threshold);
    anyhow::ensure!(threshold.is_finite(), "threshold must be a finite number");

    let (store, summary) = load_roster(config)?;
    for line in describe_load(&summary, config) {
        eprintln!("{line}");
    }

    let entries = store.filter_below(threshold);
    if entries.is_empty() {
        println!("Tidak ada mahasiswa dengan nilai < {threshold}.");
    } else {
        println!("Mahasiswa dengan nilai < {threshold}:");
        println!("{}", recap_table(&entries));
    }
    Ok(())
}
