//! Ordering, cursor, and range semantics for collection queries.
//!
//! Backends share these helpers so every implementation of
//! [`DocumentStore`](crate::DocumentStore) sorts and filters identically.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::DateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::document::Document;
use crate::error::StoreError;

/// Sort direction for ordered queries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Ascending, the default.
    #[default]
    Asc,
    /// Descending.
    Desc,
}

impl Direction {
    /// The wire name of the direction.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(StoreError::InvalidPath(format!(
                "order direction must be \"asc\" or \"desc\", got {other:?}"
            ))),
        }
    }
}

/// Total order over field values.
///
/// Values order by type first (null < bool < number < string < array <
/// object), then within the type: numbers numerically, strings that both
/// parse as RFC 3339 timestamps chronologically, other strings
/// lexicographically. The timestamp rule keeps mixed fractional-second
/// precision sorting correctly ("…T12:00:00Z" vs "…T12:00:00.5Z").
#[must_use]
pub fn compare(a: &Value, b: &Value) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        (Value::Number(x), Value::Number(y)) => {
            let x = x.as_f64().unwrap_or(f64::NAN);
            let y = y.as_f64().unwrap_or(f64::NAN);
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => compare_strings(x, y),
        // Arrays and objects only need a stable order, not a meaningful one.
        _ => a.to_string().cmp(&b.to_string()),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

fn compare_strings(a: &str, b: &str) -> Ordering {
    match (
        DateTime::parse_from_rfc3339(a),
        DateTime::parse_from_rfc3339(b),
    ) {
        (Ok(x), Ok(y)) => x.cmp(&y),
        _ => a.cmp(b),
    }
}

/// Order documents by `field` in `direction`, ties broken by document id.
///
/// Documents without the field are excluded, matching the hierarchical
/// store this layer models: a document missing the order-by field never
/// appears in that query's results.
#[must_use]
pub fn sorted_by_field(docs: Vec<Document>, field: &str, direction: Direction) -> Vec<Document> {
    let mut docs: Vec<Document> = docs
        .into_iter()
        .filter(|doc| doc.field(field).is_some())
        .collect();
    docs.sort_by(|a, b| {
        let ordering = match (a.field(field), b.field(field)) {
            (Some(x), Some(y)) => compare(x, y).then_with(|| a.id.cmp(&b.id)),
            // Unreachable after the filter above; keep a stable fallback.
            _ => a.id.cmp(&b.id),
        };
        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
    docs
}

/// Whether `value` lies strictly after `cursor` in the sort direction.
#[must_use]
pub fn after_cursor(value: &Value, cursor: &Value, direction: Direction) -> bool {
    match direction {
        Direction::Asc => compare(value, cursor) == Ordering::Greater,
        Direction::Desc => compare(value, cursor) == Ordering::Less,
    }
}

/// Whether `value` lies in `[start, end]`, inclusive on both ends.
#[must_use]
pub fn within_range(value: &Value, start: &Value, end: &Value) -> bool {
    compare(value, start) != Ordering::Less && compare(value, end) != Ordering::Greater
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn direction_parses_and_rejects() {
        assert_eq!("asc".parse::<Direction>().unwrap(), Direction::Asc);
        assert_eq!("desc".parse::<Direction>().unwrap(), Direction::Desc);
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(compare(&json!(2), &json!(10)), Ordering::Less);
        assert_eq!(compare(&json!(2.5), &json!(2)), Ordering::Greater);
    }

    #[test]
    fn types_rank_before_values() {
        assert_eq!(compare(&json!(null), &json!(false)), Ordering::Less);
        assert_eq!(compare(&json!(true), &json!(0)), Ordering::Less);
        assert_eq!(compare(&json!(99), &json!("a")), Ordering::Less);
    }

    #[test]
    fn mixed_precision_timestamps_compare_chronologically() {
        // Lexicographically "…00.5Z" < "…00Z"; chronologically the reverse.
        let plain = json!("2026-08-07T12:00:00Z");
        let fractional = json!("2026-08-07T12:00:00.500Z");
        assert_eq!(compare(&plain, &fractional), Ordering::Less);

        // Offsets normalize before comparison.
        let offset = json!("2026-08-07T14:00:00+02:00");
        assert_eq!(compare(&plain, &offset), Ordering::Equal);
    }

    #[test]
    fn non_timestamp_strings_compare_lexicographically() {
        assert_eq!(compare(&json!("apple"), &json!("banana")), Ordering::Less);
    }

    fn doc(id: &str, value: Value) -> Document {
        let mut fields = serde_json::Map::new();
        fields.insert("ts".into(), value);
        Document::new(id, fields)
    }

    #[test]
    fn sorting_excludes_docs_missing_the_field() {
        let docs = vec![
            doc("b", json!("2026-01-02T00:00:00Z")),
            Document::new("x", serde_json::Map::new()),
            doc("a", json!("2026-01-01T00:00:00Z")),
        ];

        let sorted = sorted_by_field(docs, "ts", Direction::Asc);
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
    }

    #[test]
    fn descending_reverses_and_ties_break_on_id() {
        let docs = vec![
            doc("b", json!(1)),
            doc("a", json!(1)),
            doc("c", json!(2)),
        ];

        let sorted = sorted_by_field(docs, "ts", Direction::Desc);
        let ids: Vec<&str> = sorted.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn cursor_is_strict_in_the_sort_direction() {
        let cursor = json!(5);
        assert!(after_cursor(&json!(6), &cursor, Direction::Asc));
        assert!(!after_cursor(&json!(5), &cursor, Direction::Asc));
        assert!(after_cursor(&json!(4), &cursor, Direction::Desc));
        assert!(!after_cursor(&json!(5), &cursor, Direction::Desc));
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let start = json!("2026-01-01T00:00:00Z");
        let end = json!("2026-01-31T00:00:00Z");
        assert!(within_range(&start, &start, &end));
        assert!(within_range(&end, &start, &end));
        assert!(within_range(&json!("2026-01-15T00:00:00Z"), &start, &end));
        assert!(!within_range(&json!("2026-02-01T00:00:00Z"), &start, &end));
    }
}
