//! Text and CSV rendering of a [`TrialSummary`].

use std::path::Path;

use csv::Writer;

use rumor_sim::TrialSummary;

/// Column headers of the CSV report.
pub const CSV_HEADER: [&str; 3] = ["generation", "mean_newly_exposed", "mean_cumulative"];

/// Fixed-width table of the averaged history, one row per generation.
pub fn history_table(summary: &TrialSummary) -> String {
    let mut out = format!("{:<12} {:>14} {:>14}\n", "Generation", "Newly exposed", "Cumulative");
    out.push_str(&"-".repeat(42));
    out.push('\n');
    for (generation, (newly, total)) in summary
        .mean_history
        .iter()
        .zip(summary.mean_cumulative())
        .enumerate()
    {
        out.push_str(&format!("{generation:<12} {newly:>14.2} {total:>14.2}\n"));
    }
    out
}

/// Write the averaged history to `path`, replacing any existing file.
pub fn write_csv(path: &Path, summary: &TrialSummary) -> csv::Result<()> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(CSV_HEADER)?;
    for (generation, (newly, total)) in summary
        .mean_history
        .iter()
        .zip(summary.mean_cumulative())
        .enumerate()
    {
        writer.write_record(&[
            generation.to_string(),
            newly.to_string(),
            total.to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
