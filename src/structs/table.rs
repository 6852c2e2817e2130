use ndarray::{Array2, ArrayBase, ArrayView1, ArrayView2, CowArray, Data, Ix2};

use crate::error::{InflammationError, Result};

/// A rectangular table of inflammation readings
///
/// Each row holds the readings of one patient, and each column one day (0-indexed).
/// The table is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct InflammationTable {
    array: Array2<f64>,
}

impl InflammationTable {
    /// Build a table from nested rows, rejecting jagged input
    ///
    /// An empty input gives a table with zero patients and zero days.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let ndays = check_rectangular(&rows)?;
        let array = Array2::from_shape_fn((rows.len(), ndays), |(i, j)| rows[i][j]);
        Ok(InflammationTable { array })
    }

    pub fn array(&self) -> &Array2<f64> {
        &self.array
    }

    pub fn view(&self) -> ArrayView2<'_, f64> {
        self.array.view()
    }

    /// Number of patients (rows)
    pub fn npatients(&self) -> usize {
        self.array.nrows()
    }

    /// Number of days (columns)
    pub fn ndays(&self) -> usize {
        self.array.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.array.is_empty()
    }

    /// Readings of a single patient
    pub fn row(&self, index: usize) -> Result<ArrayView1<'_, f64>> {
        if index >= self.npatients() {
            return Err(InflammationError::IndexOutOfRange {
                index,
                len: self.npatients(),
            });
        }
        Ok(self.array.row(index))
    }

    pub fn into_inner(self) -> Array2<f64> {
        self.array
    }
}

impl From<Array2<f64>> for InflammationTable {
    fn from(array: Array2<f64>) -> Self {
        InflammationTable { array }
    }
}

impl From<ArrayView2<'_, f64>> for InflammationTable {
    fn from(view: ArrayView2<'_, f64>) -> Self {
        InflammationTable {
            array: view.to_owned(),
        }
    }
}

impl TryFrom<Vec<Vec<f64>>> for InflammationTable {
    type Error = InflammationError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        InflammationTable::from_rows(rows)
    }
}

/// Anything that can be read as a 2D table of patients by days
///
/// `ndarray` arrays are rectangular by construction. Nested vectors are checked
/// on every call and fail with [InflammationError::ShapeMismatch] when jagged.
pub trait TableSource {
    fn table_view(&self) -> Result<CowArray<'_, f64, Ix2>>;
}

impl<S> TableSource for ArrayBase<S, Ix2>
where
    S: Data<Elem = f64>,
{
    fn table_view(&self) -> Result<CowArray<'_, f64, Ix2>> {
        Ok(CowArray::from(self.view()))
    }
}

impl TableSource for InflammationTable {
    fn table_view(&self) -> Result<CowArray<'_, f64, Ix2>> {
        Ok(CowArray::from(self.array.view()))
    }
}

impl TableSource for [Vec<f64>] {
    fn table_view(&self) -> Result<CowArray<'_, f64, Ix2>> {
        let ndays = check_rectangular(self)?;
        let array = Array2::from_shape_fn((self.len(), ndays), |(i, j)| self[i][j]);
        Ok(CowArray::from(array))
    }
}

impl TableSource for Vec<Vec<f64>> {
    fn table_view(&self) -> Result<CowArray<'_, f64, Ix2>> {
        self.as_slice().table_view()
    }
}

/// Returns the shared row length, or the first row that differs from row 0
fn check_rectangular(rows: &[Vec<f64>]) -> Result<usize> {
    let expected = rows.first().map(Vec::len).unwrap_or(0);
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(InflammationError::ShapeMismatch {
            row,
            expected,
            found: rows[row].len(),
        }),
        None => Ok(expected),
    }
}
