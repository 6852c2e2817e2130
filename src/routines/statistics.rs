//! Daily reductions over an inflammation table
//!
//! Every reduction collapses the patient (row) axis and keeps the day (column) axis,
//! so the result has one value per day and does not depend on the order of the rows.
//! A table with zero patients gives NaN for every day instead of an error.

use ndarray::{Array1, Array2, ArrayView2, Axis};
use ndarray_stats::QuantileExt;

use crate::error::{InflammationError, Result};
use crate::structs::table::TableSource;

/// The four daily reductions of one table
#[derive(Debug, Clone, PartialEq)]
pub struct DailySummary {
    pub mean: Array1<f64>,
    pub max: Array1<f64>,
    pub min: Array1<f64>,
    pub std: Array1<f64>,
}

impl DailySummary {
    pub fn ndays(&self) -> usize {
        self.mean.len()
    }
}

/// Arithmetic mean of each day across all patients
pub fn daily_mean<T: TableSource + ?Sized>(data: &T) -> Result<Array1<f64>> {
    let table = data.table_view()?;
    Ok(mean(&table.view()))
}

/// Maximum of each day across all patients
pub fn daily_max<T: TableSource + ?Sized>(data: &T) -> Result<Array1<f64>> {
    let table = data.table_view()?;
    Ok(max(&table.view()))
}

/// Minimum of each day across all patients
pub fn daily_min<T: TableSource + ?Sized>(data: &T) -> Result<Array1<f64>> {
    let table = data.table_view()?;
    Ok(min(&table.view()))
}

/// Population standard deviation (divisor = number of patients) of each day
pub fn daily_std<T: TableSource + ?Sized>(data: &T) -> Result<Array1<f64>> {
    let table = data.table_view()?;
    Ok(std_dev(&table.view()))
}

/// Mean, max, min and standard deviation of each day, reading the table once
pub fn daily_summary<T: TableSource + ?Sized>(data: &T) -> Result<DailySummary> {
    let table = data.table_view()?;
    let view = table.view();
    tracing::debug!(
        "Summarising {} patients over {} days",
        view.nrows(),
        view.ncols()
    );

    Ok(DailySummary {
        mean: mean(&view),
        max: max(&view),
        min: min(&view),
        std: std_dev(&view),
    })
}

/// For the patient at `row_number`, whether each day's reading is strictly above `threshold`
pub fn daily_above_threshold<T: TableSource + ?Sized>(
    row_number: usize,
    data: &T,
    threshold: f64,
) -> Result<Array1<bool>> {
    let table = data.table_view()?;
    if row_number >= table.nrows() {
        return Err(InflammationError::IndexOutOfRange {
            index: row_number,
            len: table.nrows(),
        });
    }

    Ok(table.row(row_number).mapv(|value| value > threshold))
}

/// [daily_above_threshold] for every patient, one row per patient
pub fn patients_above_threshold<T: TableSource + ?Sized>(
    data: &T,
    threshold: f64,
) -> Result<Array2<bool>> {
    let table = data.table_view()?;
    Ok(table.mapv(|value| value > threshold))
}

fn mean(table: &ArrayView2<f64>) -> Array1<f64> {
    table
        .mean_axis(Axis(0))
        .unwrap_or_else(|| Array1::from_elem(table.ncols(), f64::NAN))
}

fn std_dev(table: &ArrayView2<f64>) -> Array1<f64> {
    if table.nrows() == 0 {
        return Array1::from_elem(table.ncols(), f64::NAN);
    }
    table.std_axis(Axis(0), 0.0)
}

// An empty column, or one holding a NaN, has no defined extreme
fn max(table: &ArrayView2<f64>) -> Array1<f64> {
    table.map_axis(Axis(0), |day| day.max().copied().unwrap_or(f64::NAN))
}

fn min(table: &ArrayView2<f64>) -> Array1<f64> {
    table.map_axis(Axis(0), |day| day.min().copied().unwrap_or(f64::NAN))
}
