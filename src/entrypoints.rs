use std::path::PathBuf;
use std::time::Instant;

use eyre::{Result, WrapErr};
use ndarray::Array1;

use crate::routines::datafile;
use crate::routines::settings::Settings;
use crate::routines::statistics::{daily_above_threshold, daily_summary, DailySummary};
use crate::structs::table::InflammationTable;

/// Results of an analysis run
#[derive(Debug)]
pub struct Analysis {
    pub table: InflammationTable,
    pub summary: DailySummary,
    /// Days above the threshold for the configured patient
    pub flags: Option<Array1<bool>>,
    /// Files written to the output folder
    pub outputs: Vec<PathBuf>,
}

/// Primary entrypoint
///
/// Loads the data file named in the settings, computes the daily summary and the
/// threshold flags of the configured patient, and writes `summary.csv`, `summary.json`
/// and `settings.json` to the output folder.
///
/// Logging is not configured here, call [crate::routines::logger::setup_log] first if wanted.
pub fn analyse(settings: &Settings) -> Result<Analysis> {
    let now = Instant::now();
    settings.validate()?;
    tracing::info!("Starting analysis of {}", settings.paths.data);

    let table = datafile::load_csv(&settings.paths.data)
        .wrap_err_with(|| format!("Failed to load data from {}", settings.paths.data))?;
    tracing::info!(
        "Datafile contains {} patients over {} days",
        table.npatients(),
        table.ndays()
    );
    if table.npatients() == 0 {
        tracing::warn!("Datafile contains no patients, the summary will be NaN");
    }

    let summary = daily_summary(&table)?;
    let flags = match settings.analysis.patient {
        Some(patient) => {
            let flags = daily_above_threshold(patient, &table, settings.analysis.threshold)
                .wrap_err_with(|| format!("Failed to flag patient {}", patient))?;
            tracing::info!(
                "Patient {} is above {} on {} of {} days",
                patient,
                settings.analysis.threshold,
                flags.iter().filter(|&&above| above).count(),
                flags.len()
            );
            Some(flags)
        }
        None => None,
    };

    let output = settings.paths.output.as_str();
    tracing::info!("Output files will be written to {}", output);
    settings.write()?;
    let outputs = vec![
        summary.write_csv(output, "summary.csv")?,
        summary.write_json(output, "summary.json")?,
    ];

    tracing::info!("Analysis complete after {:.2?}", now.elapsed());
    Ok(Analysis {
        table,
        summary,
        flags,
        outputs,
    })
}
