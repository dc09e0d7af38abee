//! Sort state and the null-last, per-column numeric-aware comparator.

use std::cmp::Ordering;

use super::{CellValue, TableRow};

/// Direction of the active sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// The other direction.
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    /// Header indicator, including the leading space.
    pub fn indicator(self) -> &'static str {
        match self {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        }
    }

    /// Value for the `aria-sort` attribute.
    pub fn aria(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

/// Active column and direction. At most one column is sorted at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn ascending(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Ascending,
        }
    }

    /// Sort state after activating the column `key`.
    ///
    /// Activating the sorted column flips its direction; any other column
    /// starts ascending.
    pub fn next(current: Option<&SortConfig>, key: &str) -> SortConfig {
        match current {
            Some(config) if config.key == key => SortConfig {
                key: config.key.clone(),
                direction: config.direction.toggled(),
            },
            _ => SortConfig::ascending(key),
        }
    }
}

/// How a column's values compare, decided once for the whole column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortMode {
    /// Every present value reads as a finite number.
    Numeric,
    /// Lowercased text in code-point order.
    Lexical,
}

impl SortMode {
    /// Numeric only when every present value is numeric. Missing values do
    /// not count either way.
    pub fn for_values<'a>(values: impl IntoIterator<Item = Option<&'a CellValue>>) -> Self {
        if values
            .into_iter()
            .flatten()
            .all(|value| value.as_number().is_some())
        {
            SortMode::Numeric
        } else {
            SortMode::Lexical
        }
    }
}

#[derive(Debug, Clone)]
enum SortKey {
    Number(f64),
    Text(String),
}

impl SortKey {
    fn new(value: &CellValue, mode: SortMode) -> Self {
        match (mode, value.as_number()) {
            (SortMode::Numeric, Some(n)) => SortKey::Number(n),
            _ => SortKey::Text(value.to_string().to_lowercase()),
        }
    }

    fn compare(&self, other: &SortKey) -> Ordering {
        match (self, other) {
            (SortKey::Number(x), SortKey::Number(y)) => x.total_cmp(y),
            (SortKey::Text(x), SortKey::Text(y)) => x.cmp(y),
            (SortKey::Number(_), SortKey::Text(_)) => Ordering::Less,
            (SortKey::Text(_), SortKey::Number(_)) => Ordering::Greater,
        }
    }
}

fn compare_keys(a: Option<&SortKey>, b: Option<&SortKey>, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (None, None) => return Ordering::Equal,
        (None, Some(_)) => return Ordering::Greater,
        (Some(_), None) => return Ordering::Less,
        (Some(a), Some(b)) => a.compare(b),
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Order two cells of a column compared under `mode`.
///
/// Missing values always come last, whatever the direction. Lexical
/// comparison folds case with `to_lowercase` and then orders by code point;
/// it is not locale-aware.
pub fn compare_cells(
    a: Option<&CellValue>,
    b: Option<&CellValue>,
    mode: SortMode,
    direction: SortDirection,
) -> Ordering {
    compare_keys(
        a.map(|v| SortKey::new(v, mode)).as_ref(),
        b.map(|v| SortKey::new(v, mode)).as_ref(),
        direction,
    )
}

/// Display order of `data` as indices into it.
///
/// The data itself is never reordered. Ties keep their input order.
pub fn sorted_order<T: TableRow>(data: &[T], sort: Option<&SortConfig>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..data.len()).collect();
    let Some(sort) = sort else {
        return order;
    };

    let values: Vec<Option<CellValue>> = data.iter().map(|row| row.field(&sort.key)).collect();
    let mode = SortMode::for_values(values.iter().map(Option::as_ref));
    let keys: Vec<Option<SortKey>> = values
        .iter()
        .map(|value| value.as_ref().map(|v| SortKey::new(v, mode)))
        .collect();

    order.sort_by(|&a, &b| compare_keys(keys[a].as_ref(), keys[b].as_ref(), sort.direction));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn row(pairs: &[(&str, CellValue)]) -> HashMap<String, CellValue> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn next_starts_ascending_then_flips() {
        let first = SortConfig::next(None, "name");
        assert_eq!(first, SortConfig::ascending("name"));

        let second = SortConfig::next(Some(&first), "name");
        assert_eq!(second.direction, SortDirection::Descending);

        let third = SortConfig::next(Some(&second), "name");
        assert_eq!(third.direction, SortDirection::Ascending);
    }

    #[test]
    fn next_on_other_column_resets_to_ascending() {
        let current = SortConfig {
            key: "name".into(),
            direction: SortDirection::Descending,
        };
        assert_eq!(
            SortConfig::next(Some(&current), "id"),
            SortConfig::ascending("id")
        );
    }

    #[test]
    fn numbers_compare_numerically() {
        let two = CellValue::from("2");
        let ten = CellValue::from("10");
        assert_eq!(
            compare_cells(Some(&two), Some(&ten), SortMode::Numeric, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(Some(&two), Some(&ten), SortMode::Numeric, SortDirection::Descending),
            Ordering::Greater
        );
    }

    #[test]
    fn text_compares_case_insensitively() {
        let a = CellValue::from("apple");
        let b = CellValue::from("Banana");
        assert_eq!(
            compare_cells(Some(&a), Some(&b), SortMode::Lexical, SortDirection::Ascending),
            Ordering::Less
        );
        assert_eq!(
            compare_cells(
                Some(&CellValue::from("ANN")),
                Some(&CellValue::from("ann")),
                SortMode::Lexical,
                SortDirection::Ascending
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn one_text_value_makes_the_whole_column_lexical() {
        let values = [CellValue::from(10), CellValue::from("9 lives")];
        let mode = SortMode::for_values(values.iter().map(Some).chain([None]));
        assert_eq!(mode, SortMode::Lexical);
        assert_eq!(
            compare_cells(Some(&values[0]), Some(&values[1]), mode, SortDirection::Ascending),
            Ordering::Less
        );

        let numbers = [CellValue::from("9"), CellValue::from(10)];
        assert_eq!(
            SortMode::for_values(numbers.iter().map(Some).chain([None])),
            SortMode::Numeric
        );
    }

    #[test]
    fn mixed_column_sorts_without_cycles() {
        // "9" < "10" numerically, but "10" < "1a" < "9" as text.
        let data: Vec<HashMap<String, CellValue>> = (0..200)
            .map(|n| {
                let value = match n % 3 {
                    0 => CellValue::from(n.to_string()),
                    1 => CellValue::from(format!("{n}a")),
                    _ => CellValue::from(n),
                };
                row(&[("v", value)])
            })
            .collect();

        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let sort = SortConfig {
                key: "v".into(),
                direction,
            };
            let order = sorted_order(&data, Some(&sort));
            let texts: Vec<String> = order
                .iter()
                .map(|&i| data[i]["v"].to_string().to_lowercase())
                .collect();
            assert_eq!(texts.len(), 200);
            for pair in texts.windows(2) {
                match direction {
                    SortDirection::Ascending => assert!(pair[0] <= pair[1], "{pair:?}"),
                    SortDirection::Descending => assert!(pair[0] >= pair[1], "{pair:?}"),
                }
            }
        }
    }

    #[test]
    fn missing_values_sort_last_in_both_directions() {
        let v = CellValue::from(1);
        for direction in [SortDirection::Ascending, SortDirection::Descending] {
            let mode = SortMode::Numeric;
            assert_eq!(compare_cells(None, Some(&v), mode, direction), Ordering::Greater);
            assert_eq!(compare_cells(Some(&v), None, mode, direction), Ordering::Less);
            assert_eq!(compare_cells(None, None, mode, direction), Ordering::Equal);
        }
    }

    #[test]
    fn sorted_order_is_stable_and_leaves_data_alone() {
        let data = vec![
            row(&[("g", "b".into()), ("n", 1.into())]),
            row(&[("g", "a".into()), ("n", 2.into())]),
            row(&[("g", "b".into()), ("n", 3.into())]),
            row(&[("n", 4.into())]),
            row(&[("g", "a".into()), ("n", 5.into())]),
        ];
        let before = data.clone();

        let asc = sorted_order(&data, Some(&SortConfig::ascending("g")));
        assert_eq!(asc, vec![1, 4, 0, 2, 3]);

        let desc = sorted_order(
            &data,
            Some(&SortConfig {
                key: "g".into(),
                direction: SortDirection::Descending,
            }),
        );
        assert_eq!(desc, vec![0, 2, 1, 4, 3]);

        assert_eq!(data, before);
    }

    #[test]
    fn no_sort_keeps_input_order() {
        let data = vec![row(&[("n", 3.into())]), row(&[("n", 1.into())])];
        assert_eq!(sorted_order(&data, None), vec![0, 1]);
    }
}
