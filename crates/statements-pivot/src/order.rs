//! Schema-driven filtering and reordering.

use std::collections::HashMap;

use statements_core::GroupedSeries;
use tracing::trace;

/// Keeps the groups whose code appears in `schema`, sorted by schema position.
///
/// Groups absent from the schema are dropped; schema codes without a group are
/// skipped. The sort is stable, so groups sharing a code keep their input order.
#[must_use]
pub fn order_by_schema<I>(groups: I, schema: &[&str]) -> Vec<GroupedSeries>
where
    I: IntoIterator<Item = GroupedSeries>,
{
    let rank: HashMap<&str, usize> = schema
        .iter()
        .enumerate()
        .map(|(i, code)| (*code, i))
        .collect();

    let mut ranked: Vec<(usize, GroupedSeries)> = groups
        .into_iter()
        .filter_map(|group| match rank.get(group.series_code.as_str()) {
            Some(&r) => Some((r, group)),
            None => {
                trace!(series_code = %group.series_code, "Series not in schema, dropped");
                None
            }
        })
        .collect();
    ranked.sort_by_key(|(r, _)| *r);

    ranked.into_iter().map(|(_, group)| group).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(code: &str) -> GroupedSeries {
        GroupedSeries {
            series_code: code.to_string(),
            ..Default::default()
        }
    }

    fn codes(groups: &[GroupedSeries]) -> Vec<&str> {
        groups.iter().map(|g| g.series_code.as_str()).collect()
    }

    #[test]
    fn test_order_filters_and_follows_schema() {
        let groups = vec![series("Y"), series("Z"), series("W")];
        let ordered = order_by_schema(groups, &["X", "Y", "Z"]);
        assert_eq!(codes(&ordered), vec!["Y", "Z"]);
    }

    #[test]
    fn test_order_ignores_input_order() {
        let groups = vec![series("C"), series("A"), series("B")];
        let ordered = order_by_schema(groups, &["A", "B", "C"]);
        assert_eq!(codes(&ordered), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_order_with_empty_schema_or_input() {
        assert!(order_by_schema(vec![series("A")], &[]).is_empty());
        assert!(order_by_schema(Vec::new(), &["A"]).is_empty());
    }

    #[test]
    fn test_order_is_stable_for_repeated_codes() {
        let mut first = series("A");
        first.description = Some("first".to_string());
        let mut second = series("A");
        second.description = Some("second".to_string());
        let ordered = order_by_schema(vec![series("B"), first, second], &["A", "B"]);
        assert_eq!(codes(&ordered), vec!["A", "A", "B"]);
        assert_eq!(ordered[0].description.as_deref(), Some("first"));
        assert_eq!(ordered[1].description.as_deref(), Some("second"));
    }
}
