use std::fs::File;
use std::io;
use std::path::Path;

use log::{info, warn};
use serde::Deserialize;
use thiserror::Error;

use super::model::{Dataset, Observation};

// ---------------------------------------------------------------------------
// Input contract
// ---------------------------------------------------------------------------

/// Composite groupings that double-count their member countries.
/// Matched exactly, case-sensitively, against the full GEO string.
const AGGREGATE_REGIONS: [&str; 6] = [
    "European Union (current composition)",
    "European Union (without United Kingdom)",
    "European Union (15 countries)",
    "Euro area (EA11-2000, EA12-2006, EA13-2007, EA15-2008, EA16-2010, \
     EA17-2013, EA18-2014, EA19)",
    "Euro area (19 countries)",
    "Euro area (12 countries)",
];

/// Literal strings the extract uses for a missing value.
const MISSING_SENTINELS: [&str; 2] = [":", "NaN"];

/// Columns the header row must contain; any others are ignored.
const REQUIRED_COLUMNS: [&str; 5] = ["GEO", "NA_ITEM", "UNIT", "TIME", "Value"];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("failed to read CSV header")]
    Csv(#[from] csv::Error),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("no usable observations after parsing and filtering")]
    Empty,
}

/// One raw record as it appears in the file, located by header name.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "GEO")]
    geo: String,
    #[serde(rename = "NA_ITEM")]
    na_item: String,
    #[serde(rename = "UNIT")]
    unit: String,
    #[serde(rename = "TIME")]
    time: String,
    #[serde(rename = "Value")]
    value: String,
}

impl RawRecord {
    fn normalize(self) -> Result<Observation, String> {
        let year = self
            .time
            .parse::<i32>()
            .map_err(|_| format!("invalid TIME '{}'", self.time))?;
        let value = parse_value(&self.value)?;
        Ok(Observation::new(self.geo, self.na_item, self.unit, year, value))
    }
}

fn parse_value(s: &str) -> Result<Option<f64>, String> {
    if s.is_empty() || MISSING_SENTINELS.contains(&s) {
        return Ok(None);
    }
    let v = s
        .parse::<f64>()
        .map_err(|_| format!("invalid Value '{s}'"))?;
    Ok(v.is_finite().then_some(v))
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a Eurostat extract from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    from_reader(file)
}

/// Parse a Eurostat extract from any reader.
///
/// Malformed rows are skipped with a warning; they never abort the load or
/// corrupt rows that do parse. Aggregate-region rows are dropped after
/// parsing. Fails with [`LoadError::Empty`] when nothing survives.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Dataset, LoadError> {
    let mut csv = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut rows: Vec<Observation> = Vec::new();
    let mut skipped = 0usize;
    for (idx, result) in csv.deserialize::<RawRecord>().enumerate() {
        // Data starts on line 2, after the header row.
        let line = idx + 2;
        let raw = match result {
            Ok(r) => r,
            Err(e) => {
                warn!("line {line}: skipped unreadable row: {e}");
                skipped += 1;
                continue;
            }
        };
        match raw.normalize() {
            Ok(obs) => rows.push(obs),
            Err(msg) => {
                warn!("line {line}: skipped row: {msg}");
                skipped += 1;
            }
        }
    }

    let parsed = rows.len();
    rows.retain(|r| !AGGREGATE_REGIONS.contains(&r.region.as_str()));
    let aggregates = parsed - rows.len();

    if rows.is_empty() {
        return Err(LoadError::Empty);
    }
    info!(
        "loaded {} observations ({skipped} rows skipped, {aggregates} aggregate rows dropped)",
        rows.len()
    );
    Ok(Dataset::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
TIME,GEO,UNIT,NA_ITEM,Value
2010,Belgium,Current prices million euro,Gross domestic product at market prices,363140.1
2010,European Union (15 countries),Current prices million euro,Gross domestic product at market prices,12345678.0
2010,Germany,Current prices million euro,Gross domestic product at market prices,2564400.0
2011,Belgium,Current prices million euro,Gross domestic product at market prices,:
2011,Germany,Current prices million euro,Gross domestic product at market prices,NaN
";

    #[test]
    fn aggregate_regions_are_dropped_exactly() {
        let ds = from_reader(SAMPLE.as_bytes()).unwrap();
        assert!(ds.rows.iter().all(|r| {
            !AGGREGATE_REGIONS.contains(&r.region.as_str())
        }));
        // Exact match only: a region merely containing "Euro area" survives.
        let csv = "\
TIME,GEO,UNIT,NA_ITEM,Value
2010,Euro area (19 countries),U,I,1.0
2010,Euro area (19 countries) extra,U,I,2.0
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.regions, vec!["Euro area (19 countries) extra"]);
    }

    #[test]
    fn sentinels_load_as_missing_but_rows_stay_listed() {
        let ds = from_reader(SAMPLE.as_bytes()).unwrap();
        let missing: Vec<&Observation> =
            ds.rows.iter().filter(|r| r.value.is_none()).collect();
        assert_eq!(missing.len(), 2);
        assert!(missing.iter().all(|r| r.year == 2011));
        // The 2011 year is still offered for selection despite both of its
        // values being missing.
        assert_eq!(ds.years, vec![2010, 2011]);
    }

    #[test]
    fn derived_label_combines_item_and_unit() {
        let ds = from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(
            ds.indicators,
            vec!["Gross domestic product at market prices (Current prices million euro)"]
        );
        for r in &ds.rows {
            assert_eq!(r.indicator, format!("{} ({})", r.item_code, r.unit));
        }
    }

    #[test]
    fn malformed_rows_are_skipped_without_corrupting_neighbours() {
        let csv = "\
TIME,GEO,UNIT,NA_ITEM,Value
2010,Belgium,U,I,1.0
not-a-year,Belgium,U,I,2.0
2011,Belgium,U,I,abc
2012,Belgium,U,I,3.0
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        let values: Vec<(i32, Option<f64>)> =
            ds.rows.iter().map(|r| (r.year, r.value)).collect();
        assert_eq!(values, vec![(2010, Some(1.0)), (2012, Some(3.0))]);
    }

    #[test]
    fn header_order_does_not_matter() {
        let csv = "\
Value,NA_ITEM,GEO,TIME,UNIT
42.0,GDP,France,2015,EUR
";
        let ds = from_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.rows[0].region, "France");
        assert_eq!(ds.rows[0].value, Some(42.0));
    }

    #[test]
    fn header_only_input_is_an_error() {
        let err = from_reader("TIME,GEO,UNIT,NA_ITEM,Value\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn aggregates_only_input_is_an_error() {
        let csv = "\
TIME,GEO,UNIT,NA_ITEM,Value
2010,Euro area (12 countries),U,I,1.0
";
        let err = from_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Empty));
    }

    #[test]
    fn missing_column_is_reported() {
        let err = from_reader("TIME,GEO,UNIT,NA_ITEM\n2010,A,U,I\n".as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("Value")));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_csv(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
