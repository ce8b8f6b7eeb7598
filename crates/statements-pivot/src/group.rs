//! Grouping flat rows into one series per code.

use std::collections::HashMap;

use statements_core::{DataPoint, FlatRow, GroupedSeries};
use tracing::trace;

/// Folds flat rows into one [`GroupedSeries`] per `series_code`.
///
/// Groups come out in first-occurrence order and each group's values keep the
/// order the rows arrived in. The first row seen for a code fixes the group's
/// description, unit, tag and series type; later rows only append values.
/// Repeated `(series_code, date_reference)` pairs are not merged.
#[must_use]
pub fn group_by_series<I>(rows: I) -> Vec<GroupedSeries>
where
    I: IntoIterator<Item = FlatRow>,
{
    let mut groups: Vec<GroupedSeries> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let point = DataPoint::new(row.date_reference, row.value);
        match index.get(&row.series_code) {
            Some(&i) => groups[i].values.push(point),
            None => {
                index.insert(row.series_code.clone(), groups.len());
                groups.push(GroupedSeries {
                    series_code: row.series_code,
                    description: row.description,
                    unit: row.unit,
                    data_type: row.data_type,
                    series_type: row.series_type,
                    values: vec![point],
                });
            }
        }
    }

    trace!(groups = groups.len(), "Grouped flat rows by series code");
    groups
}

/// Expands grouped series back into flat rows, one per value.
///
/// Only the fields a group keeps survive; the rest are left empty. Grouping the
/// result again reproduces the input.
#[must_use]
pub fn reflatten(groups: &[GroupedSeries]) -> Vec<FlatRow> {
    groups
        .iter()
        .flat_map(|group| {
            group.values.iter().map(move |point| FlatRow {
                series_code: group.series_code.clone(),
                description: group.description.clone(),
                unit: group.unit.clone(),
                series_type: group.series_type.clone(),
                data_type: group.data_type,
                date_reference: point.date_reference,
                value: point.value,
                ..Default::default()
            })
        })
        .collect()
}
