use chrono::NaiveDate;

// ---------------------------------------------------------------------------
// AvocadoRow – one row of the source CSV
// ---------------------------------------------------------------------------

/// A single weekly price observation.
#[derive(Debug, Clone, PartialEq)]
pub struct AvocadoRow {
    /// Week-ending date (`Date` column).
    pub date: NaiveDate,
    /// Average price of a single avocado (`AveragePrice` column).
    pub average_price: f64,
    /// Market label (`region` column).
    pub region: String,
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset. Read-only once built.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// All rows, in file order.
    pub rows: Vec<AvocadoRow>,
    /// Header names as they appear in the file, including unused columns.
    pub column_names: Vec<String>,
    /// Distinct regions in first-seen order.
    regions: Vec<String>,
}

impl Dataset {
    /// Build the region index from the loaded rows.
    pub fn from_rows(column_names: Vec<String>, rows: Vec<AvocadoRow>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        for row in &rows {
            if !regions.iter().any(|r| r == &row.region) {
                regions.push(row.region.clone());
            }
        }
        Dataset {
            rows,
            column_names,
            regions,
        }
    }

    /// Distinct regions, first-seen order.
    pub fn regions(&self) -> &[String] {
        &self.regions
    }

    /// The region selected when the dashboard opens.
    pub fn default_region(&self) -> Option<&str> {
        self.regions.first().map(String::as_str)
    }

    /// Position of `region` in [`Dataset::regions`].
    pub fn region_index(&self, region: &str) -> Option<usize> {
        self.regions.iter().position(|r| r == region)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn row(date: &str, price: f64, region: &str) -> AvocadoRow {
        AvocadoRow {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            average_price: price,
            region: region.to_string(),
        }
    }

    pub(crate) fn sample_dataset() -> Dataset {
        Dataset::from_rows(
            vec!["Date".into(), "AveragePrice".into(), "region".into()],
            vec![
                row("2015-01-04", 1.22, "Albany"),
                row("2015-01-11", 1.35, "Albany"),
                row("2015-01-04", 0.99, "Chicago"),
            ],
        )
    }

    #[test]
    fn regions_keep_first_seen_order() {
        let ds = Dataset::from_rows(
            Vec::new(),
            vec![
                row("2015-01-04", 1.0, "Chicago"),
                row("2015-01-04", 1.0, "Albany"),
                row("2015-01-11", 1.0, "Chicago"),
                row("2015-01-04", 1.0, "Boston"),
            ],
        );
        assert_eq!(ds.regions(), &["Chicago", "Albany", "Boston"]);
        assert_eq!(ds.default_region(), Some("Chicago"));
        assert_eq!(ds.region_index("Boston"), Some(2));
    }

    #[test]
    fn empty_dataset_has_no_default_region() {
        let ds = Dataset::from_rows(Vec::new(), Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.default_region(), None);
    }
}
