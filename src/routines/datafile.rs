use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;

use crate::error::Result;
use crate::structs::table::InflammationTable;

/// Load an inflammation table from a comma-delimited file
///
/// Each line holds one patient, each field one day. There is no header, and lines
/// starting with `#` are skipped. Rows of unequal length are rejected.
pub fn load_csv(path: impl AsRef<Path>) -> Result<InflammationTable> {
    let path = path.as_ref();
    tracing::debug!("Reading inflammation data from {:?}", path);
    let file = std::fs::File::open(path)?;
    read_table(file)
}

/// Read an inflammation table from any reader, see [load_csv]
pub fn read_table<R: Read>(reader: R) -> Result<InflammationTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(reader);

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for result in rdr.deserialize() {
        let row: Vec<f64> = result?;
        rows.push(row);
    }

    let table = InflammationTable::from_rows(rows)?;
    tracing::debug!(
        "Read {} patients over {} days",
        table.npatients(),
        table.ndays()
    );
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InflammationError;
    use std::io::Cursor;

    #[test]
    fn test_read_table() {
        let csv = "0,1,2\n3,4,5\n";
        let table = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(table.npatients(), 2);
        assert_eq!(table.ndays(), 3);
        assert_eq!(table.array()[[1, 2]], 5.0);
    }

    #[test]
    fn test_read_table_comments() {
        let csv = "# patients by days\n1.5, 2.5\n";
        let table = read_table(Cursor::new(csv)).unwrap();
        assert_eq!(table.array(), &ndarray::array![[1.5, 2.5]]);
    }

    #[test]
    fn test_read_jagged_table() {
        let csv = "0,1,2\n3,4\n";
        assert!(matches!(
            read_table(Cursor::new(csv)),
            Err(InflammationError::ShapeMismatch {
                row: 1,
                expected: 3,
                found: 2
            })
        ));
    }

    #[test]
    fn test_read_non_numeric() {
        let csv = "0,a,2\n";
        assert!(matches!(
            read_table(Cursor::new(csv)),
            Err(InflammationError::Csv(_))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_csv("does/not/exist.csv"),
            Err(InflammationError::Io(_))
        ));
    }

    #[test]
    fn test_load_fixture() {
        let table = load_csv("src/tests/inflammation.csv").unwrap();
        assert_eq!(table.npatients(), 6);
        assert_eq!(table.ndays(), 10);
    }
}
