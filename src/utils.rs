/// Small pure helpers shared by the data source, CLI and dashboard
use chrono::NaiveDate;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// Win percentage as a 3-decimal string ("0.000" when no games were played)
pub fn win_percentage(wins: u32, losses: u32) -> String {
    let total = u64::from(wins) + u64::from(losses);
    if total == 0 {
        return "0.000".to_string();
    }
    format!("{:.3}", wins as f64 / total as f64)
}

/// Mean rounded to one decimal place, 0.0 for an empty slice
pub fn average(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    (mean * 10.0).round() / 10.0
}

/// A named field value exposed for sorting and searching
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl PartialOrd for FieldValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            (a, b) => a.to_string().partial_cmp(&b.to_string()),
        }
    }
}

/// Records whose fields can be looked up by name
pub trait Fields {
    fn field(&self, name: &str) -> Option<FieldValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Return a copy of `items` ordered by the named field
///
/// Items lacking the field, or with incomparable values, compare equal and
/// keep their relative order.
pub fn sort_by_key<T: Fields + Clone>(items: &[T], key: &str, direction: SortDirection) -> Vec<T> {
    let mut sorted = items.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = match (a.field(key), b.field(key)) {
            (Some(a), Some(b)) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
    sorted
}

/// Keep items where any of `fields` contains `term`, ignoring case
///
/// An empty (or whitespace-only) term returns every item unchanged.
pub fn filter_by_search<T: Fields + Clone>(items: &[T], term: &str, fields: &[&str]) -> Vec<T> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| {
            fields.iter().any(|name| {
                item.field(name)
                    .map(|value| value.to_string().to_lowercase().contains(&needle))
                    .unwrap_or(false)
            })
        })
        .cloned()
        .collect()
}

/// Inclusive random integer drawn from `rng`; bounds may be given in either order
pub fn random_int_with<R: Rng + ?Sized>(rng: &mut R, min: i64, max: i64) -> i64 {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    rng.gen_range(lo..=hi)
}

pub fn random_int(min: i64, max: i64) -> i64 {
    random_int_with(&mut rand::thread_rng(), min, max)
}

/// Uniform pick from a slice, `None` when it is empty
pub fn random_pick_with<'a, T, R: Rng + ?Sized>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.gen_range(0..items.len()))
}

pub fn random_pick<T>(items: &[T]) -> Option<&T> {
    random_pick_with(&mut rand::thread_rng(), items)
}

/// Short human-readable date, e.g. "Jan 5, 2025"
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        score: f64,
    }

    impl Fields for Row {
        fn field(&self, name: &str) -> Option<FieldValue> {
            match name {
                "name" => Some(FieldValue::Text(self.name.to_string())),
                "score" => Some(FieldValue::Number(self.score)),
                _ => None,
            }
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Boston Celtics", score: 3.0 },
            Row { name: "Los Angeles Lakers", score: 1.0 },
            Row { name: "Miami Heat", score: 2.0 },
            Row { name: "Los Angeles Clippers", score: 5.0 },
        ]
    }

    #[test]
    fn test_win_percentage_zero_games() {
        assert_eq!(win_percentage(0, 0), "0.000");
    }

    #[test]
    fn test_win_percentage_three_decimals() {
        assert_eq!(win_percentage(30, 10), "0.750");
        assert_eq!(win_percentage(1, 2), "0.333");
        assert_eq!(win_percentage(2, 1), "0.667");
        assert_eq!(win_percentage(5, 0), "1.000");
        assert_eq!(win_percentage(0, 7), "0.000");
    }

    #[test]
    fn test_win_percentage_near_u32_max() {
        assert_eq!(win_percentage(u32::MAX, 0), "1.000");
        assert_eq!(win_percentage(u32::MAX, u32::MAX), "0.500");
    }

    #[test]
    fn test_win_percentage_independent_of_call_order() {
        let first = win_percentage(17, 9);
        let _ = win_percentage(3, 3);
        assert_eq!(win_percentage(17, 9), first);
    }

    #[test]
    fn test_average() {
        assert_eq!(average(&[]), 0.0);
        assert_eq!(average(&[1.0, 2.0]), 1.5);
        assert_eq!(average(&[100.0, 101.0, 103.0]), 101.3);
        assert_eq!(average(&[7.0]), 7.0);
    }

    #[test]
    fn test_sort_ascending_then_descending_reverses() {
        let asc = sort_by_key(&rows(), "score", SortDirection::Ascending);
        let desc = sort_by_key(&rows(), "score", SortDirection::Descending);
        let scores: Vec<f64> = asc.iter().map(|r| r.score).collect();
        assert_eq!(scores, vec![1.0, 2.0, 3.0, 5.0]);

        let mut reversed = asc.clone();
        reversed.reverse();
        assert_eq!(desc, reversed);
    }

    #[test]
    fn test_sort_by_text_field() {
        let sorted = sort_by_key(&rows(), "name", SortDirection::Ascending);
        assert_eq!(sorted[0].name, "Boston Celtics");
        assert_eq!(sorted[3].name, "Miami Heat");
    }

    #[test]
    fn test_sort_unknown_key_keeps_order() {
        let sorted = sort_by_key(&rows(), "missing", SortDirection::Descending);
        assert_eq!(sorted, rows());
    }

    #[test]
    fn test_search_empty_term_returns_everything() {
        assert_eq!(filter_by_search(&rows(), "", &["name"]), rows());
        assert_eq!(filter_by_search(&rows(), "   ", &["name"]), rows());
    }

    #[test]
    fn test_search_no_match_returns_empty() {
        assert!(filter_by_search(&rows(), "zzz", &["name"]).is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_and_trimmed() {
        let found = filter_by_search(&rows(), "  LOS angeles ", &["name"]);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|r| r.name.starts_with("Los Angeles")));
    }

    #[test]
    fn test_search_matches_any_listed_field() {
        let found = filter_by_search(&rows(), "5", &["name", "score"]);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Los Angeles Clippers");

        // Fields not listed are not searched
        assert!(filter_by_search(&rows(), "5", &["name"]).is_empty());
    }

    #[test]
    fn test_random_int_inclusive_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let n = random_int_with(&mut rng, 3, 5);
            assert!((3..=5).contains(&n));
        }
        assert_eq!(random_int_with(&mut rng, 4, 4), 4);
        let swapped = random_int_with(&mut rng, 9, 2);
        assert!((2..=9).contains(&swapped));
    }

    #[test]
    fn test_random_pick() {
        let empty: [u8; 0] = [];
        assert_eq!(random_pick(&empty), None);
        let items = ["a", "b", "c"];
        let picked = random_pick(&items).unwrap();
        assert!(items.contains(picked));
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2025");
        let date = NaiveDate::from_ymd_opt(2024, 11, 23).unwrap();
        assert_eq!(format_date(date), "Nov 23, 2024");
    }
}
