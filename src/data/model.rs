use std::collections::HashSet;
use std::hash::Hash;

// ---------------------------------------------------------------------------
// Observation – one row of the source table
// ---------------------------------------------------------------------------

/// A single statistical observation (one row of the Eurostat extract).
#[derive(Debug, Clone, PartialEq)]
pub struct Observation {
    /// Country (or, before filtering, aggregate area) name.
    pub region: String,
    /// Economic indicator code, e.g. "Gross domestic product at market prices".
    pub item_code: String,
    /// Measurement unit, e.g. "Current prices, million euro".
    pub unit: String,
    /// Reference year.
    pub year: i32,
    /// Measured value. `None` for missing observations.
    pub value: Option<f64>,
    /// Composite selector label, derived once at construction.
    pub indicator: String,
}

impl Observation {
    /// Build an observation, deriving the `"item (unit)"` indicator label.
    pub fn new(
        region: impl Into<String>,
        item_code: impl Into<String>,
        unit: impl Into<String>,
        year: i32,
        value: Option<f64>,
    ) -> Self {
        let item_code = item_code.into();
        let unit = unit.into();
        let indicator = format!("{item_code} ({unit})");
        Observation {
            region: region.into(),
            item_code,
            unit,
            year,
            value,
            indicator,
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with pre-computed selection lists.
///
/// Immutable once constructed; the projection functions in [`super::view`]
/// only ever borrow it.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All observations, in file order.
    pub rows: Vec<Observation>,
    /// Distinct indicator labels, first-occurrence order.
    pub indicators: Vec<String>,
    /// Distinct regions, first-occurrence order.
    pub regions: Vec<String>,
    /// Distinct years present, ascending.
    pub years: Vec<i32>,
}

impl Dataset {
    /// Build the selection lists from already-filtered rows.
    ///
    /// List order drives dropdown display order and default selections, so
    /// the distinct passes keep first-occurrence order rather than sorting.
    /// Years are the exception: the slider needs them in numeric order.
    pub fn from_rows(rows: Vec<Observation>) -> Self {
        let indicators = distinct_in_order(rows.iter().map(|r| r.indicator.clone()));
        let regions = distinct_in_order(rows.iter().map(|r| r.region.clone()));
        let mut years = distinct_in_order(rows.iter().map(|r| r.year));
        years.sort_unstable();

        Dataset {
            rows,
            indicators,
            regions,
            years,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Collect distinct values in first-seen order.
fn distinct_in_order<T: Eq + Hash + Clone>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for v in values {
        if seen.insert(v.clone()) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(region: &str, item: &str, unit: &str, year: i32, value: Option<f64>) -> Observation {
        Observation::new(region, item, unit, year, value)
    }

    #[test]
    fn indicator_label_is_item_code_plus_unit() {
        let o = obs("Germany", "GDP", "EUR", 2010, Some(100.0));
        assert_eq!(o.indicator, "GDP (EUR)");
    }

    #[test]
    fn selection_lists_keep_first_occurrence_order() {
        let ds = Dataset::from_rows(vec![
            obs("Germany", "GDP", "EUR", 2011, Some(1.0)),
            obs("France", "POP", "PERS", 2010, Some(2.0)),
            obs("Germany", "GDP", "EUR", 2010, Some(3.0)),
            obs("Austria", "POP", "PERS", 2011, None),
        ]);

        assert_eq!(ds.indicators, vec!["GDP (EUR)", "POP (PERS)"]);
        assert_eq!(ds.regions, vec!["Germany", "France", "Austria"]);
    }

    #[test]
    fn years_are_distinct_and_ascending() {
        let ds = Dataset::from_rows(vec![
            obs("Germany", "GDP", "EUR", 2012, Some(1.0)),
            obs("Germany", "GDP", "EUR", 2010, Some(2.0)),
            obs("France", "GDP", "EUR", 2012, Some(3.0)),
        ]);
        assert_eq!(ds.years, vec![2010, 2012]);
    }

    #[test]
    fn distinct_in_order_rejects_duplicates() {
        let vals = distinct_in_order(["b", "a", "b", "c", "a"].into_iter());
        assert_eq!(vals, vec!["b", "a", "c"]);
    }
}
