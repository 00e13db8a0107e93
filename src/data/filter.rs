use super::model::{AvocadoRow, Dataset};

// ---------------------------------------------------------------------------
// Region filter
// ---------------------------------------------------------------------------

/// Rows whose region equals `region` exactly, in file order.
///
/// An unknown region yields nothing; that is not an error.
pub fn rows_for_region<'a>(
    dataset: &'a Dataset,
    region: &'a str,
) -> impl Iterator<Item = &'a AvocadoRow> + 'a {
    dataset.rows.iter().filter(move |row| row.region == region)
}

/// Row count per region, in the dataset's region order.
pub fn region_row_counts(dataset: &Dataset) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = dataset
        .regions()
        .iter()
        .map(|r| (r.clone(), 0))
        .collect();
    for row in &dataset.rows {
        // regions() is derived from these rows
        if let Some(i) = dataset.region_index(&row.region) {
            counts[i].1 += 1;
        }
    }
    counts
}
