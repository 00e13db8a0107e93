use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use csv::StringRecord;

use super::error::DatasetError;
use super::model::{AvocadoRow, Dataset};

pub const DATE_COLUMN: &str = "Date";
pub const PRICE_COLUMN: &str = "AveragePrice";
pub const REGION_COLUMN: &str = "region";

/// Accepted `Date` layouts, tried in order.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the avocado price table from a CSV file.
///
/// Layout: header row with column names. `Date`, `AveragePrice` and
/// `region` are required; every other column (including the unnamed index
/// column pandas writes) is ignored.
pub fn load_csv(path: &Path) -> Result<Dataset, DatasetError> {
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let dataset = read_csv(file)?;
    log::info!(
        "Loaded {} rows across {} regions from {} (columns {:?})",
        dataset.len(),
        dataset.regions().len(),
        path.display(),
        dataset.column_names
    );
    Ok(dataset)
}

/// Parse a price table from any reader.
pub fn read_csv<R: std::io::Read>(input: R) -> Result<Dataset, DatasetError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    let date_idx = column_index(&headers, DATE_COLUMN)?;
    let price_idx = column_index(&headers, PRICE_COLUMN)?;
    let region_idx = column_index(&headers, REGION_COLUMN)?;

    let mut rows = Vec::new();
    let mut record = StringRecord::new();
    let mut row_no = 0;
    while reader.read_record(&mut record)? {
        row_no += 1;
        let date_raw = record.get(date_idx).unwrap_or("");
        let date = parse_date(date_raw).ok_or_else(|| DatasetError::InvalidDate {
            row: row_no,
            value: date_raw.to_string(),
        })?;

        let price_raw = record.get(price_idx).unwrap_or("");
        let average_price =
            price_raw
                .parse::<f64>()
                .map_err(|_| DatasetError::InvalidPrice {
                    row: row_no,
                    value: price_raw.to_string(),
                })?;

        let region = record.get(region_idx).unwrap_or("").to_string();

        rows.push(AvocadoRow {
            date,
            average_price,
            region,
        });
    }

    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }

    Ok(Dataset::from_rows(headers, rows))
}

fn column_index(headers: &[String], name: &'static str) -> Result<usize, DatasetError> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or(DatasetError::MissingColumn(name))
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    const PANDAS_CSV: &str = "\
,Date,AveragePrice,Total Volume,type,year,region
0,2015-01-04,1.22,40873.28,conventional,2015,Albany
1,2015-01-11,1.35,41195.08,conventional,2015,Albany
2,2015-01-04,0.99,78025.68,conventional,2015,Chicago
";

    #[test]
    fn loads_pandas_style_file() {
        init();
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(PANDAS_CSV.as_bytes()).unwrap();

        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.regions(), &["Albany", "Chicago"]);
        assert_eq!(ds.column_names.len(), 7);
        assert_eq!(ds.rows[1].date, NaiveDate::from_ymd_opt(2015, 1, 11).unwrap());
        assert_eq!(ds.rows[1].average_price, 1.35);
        assert_eq!(ds.rows[2].region, "Chicago");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_csv(&dir.path().join("avocado.csv")).unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }

    #[test]
    fn missing_region_column_is_rejected() {
        let err = read_csv("Date,AveragePrice\n2015-01-04,1.22\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::MissingColumn("region")));
    }

    #[test]
    fn bad_price_reports_row() {
        let input = "Date,AveragePrice,region\n2015-01-04,1.22,Albany\n2015-01-11,cheap,Albany\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        match err {
            DatasetError::InvalidPrice { row, value } => {
                assert_eq!(row, 2);
                assert_eq!(value, "cheap");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_date_reports_row() {
        let input = "Date,AveragePrice,region\nsoon,1.22,Albany\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidDate { row: 1, .. }));
    }

    #[test]
    fn ragged_row_is_a_csv_error() {
        let input = "Date,AveragePrice,region\n2015-01-04,1.22\n";
        let err = read_csv(input.as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Csv(_)));
    }

    #[test]
    fn header_only_is_empty() {
        let err = read_csv("Date,AveragePrice,region\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::Empty));
    }

    #[test]
    fn alternative_date_layouts() {
        assert_eq!(parse_date("01/04/2015"), NaiveDate::from_ymd_opt(2015, 1, 4));
        assert_eq!(parse_date("04.01.2015"), NaiveDate::from_ymd_opt(2015, 1, 4));
        assert_eq!(parse_date("2015-13-01"), None);
    }
}
