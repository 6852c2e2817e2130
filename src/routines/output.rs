use std::fs::{create_dir_all, File, OpenOptions};
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use eyre::{Result, WrapErr};
use ndarray::Array2;
use ndarray_csv::Array2Writer;
use serde::{Serialize as _, Serializer};
use serde_derive::Serialize;

use crate::data::Patient;
use crate::routines::statistics::DailySummary;

/// A freshly truncated file in the output folder
pub struct OutputFile {
    file: File,
    relative_path: PathBuf,
}

impl OutputFile {
    pub fn new(folder: &str, file_name: &str) -> Result<Self> {
        let relative_path = Path::new(&folder).join(file_name);

        if let Some(parent) = relative_path.parent() {
            create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create directories for {:?}", parent))?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&relative_path)
            .wrap_err_with(|| format!("Failed to open file: {:?}", relative_path))?;

        Ok(OutputFile {
            file,
            relative_path,
        })
    }

    pub fn file(&self) -> &File {
        &self.file
    }

    pub fn file_owned(self) -> File {
        self.file
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }
}

/// One line of the summary output
#[derive(Debug, Serialize, PartialEq)]
pub struct DayRecord {
    pub day: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub std: f64,
}

impl DailySummary {
    /// The summary as one record per day
    pub fn records(&self) -> Vec<DayRecord> {
        (0..self.ndays())
            .map(|day| DayRecord {
                day,
                mean: self.mean[day],
                max: self.max[day],
                min: self.min[day],
                std: self.std[day],
            })
            .collect()
    }

    /// Write `day,mean,max,min,std` rows, with a header, to `folder/file_name`
    pub fn write_csv(&self, folder: &str, file_name: &str) -> Result<PathBuf> {
        tracing::debug!("Writing daily summary...");
        let outputfile = OutputFile::new(folder, file_name)?;
        let mut writer = WriterBuilder::new()
            .has_headers(true)
            .from_writer(outputfile.file());

        for record in self.records() {
            writer.serialize(record)?;
        }
        writer.flush()?;
        tracing::debug!(
            "Daily summary written to {:?}",
            outputfile.relative_path()
        );
        Ok(outputfile.relative_path().to_path_buf())
    }

    /// Write the per-day records as a JSON array to `folder/file_name`
    ///
    /// NaN statistics, as from a table without patients, are written as `null`.
    pub fn write_json(&self, folder: &str, file_name: &str) -> Result<PathBuf> {
        let outputfile = OutputFile::new(folder, file_name)?;
        serde_json::to_writer_pretty(outputfile.file(), self)
            .wrap_err("Failed to write daily summary as JSON")?;
        Ok(outputfile.relative_path().to_path_buf())
    }
}

/// Serialized as the sequence of its [DayRecord]s
impl serde::Serialize for DailySummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.records().serialize(serializer)
    }
}

/// Write patients and their observations as a JSON array to `folder/file_name`
pub fn write_patients(patients: &[Patient], folder: &str, file_name: &str) -> Result<PathBuf> {
    tracing::debug!("Writing {} patient records...", patients.len());
    let outputfile = OutputFile::new(folder, file_name)?;
    serde_json::to_writer_pretty(outputfile.file(), patients)
        .wrap_err("Failed to write patient records as JSON")?;
    Ok(outputfile.relative_path().to_path_buf())
}

/// Write a 2D table without header, one row per line
pub fn write_table<A>(table: &Array2<A>, folder: &str, file_name: &str) -> Result<PathBuf>
where
    A: serde::Serialize,
{
    let outputfile = OutputFile::new(folder, file_name)?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_writer(outputfile.file());
    writer
        .serialize_array2(table)
        .wrap_err_with(|| format!("Failed to write {:?}", outputfile.relative_path()))?;
    writer.flush()?;
    Ok(outputfile.relative_path().to_path_buf())
}
