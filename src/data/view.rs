use super::model::Dataset;

// ---------------------------------------------------------------------------
// Axis scale hint
// ---------------------------------------------------------------------------

/// Axis rendering hint chosen by the user. Has no effect on which rows a
/// projection selects; only the plot layer interprets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisScale {
    Linear,
    Log,
}

impl AxisScale {
    pub fn label(self) -> &'static str {
        match self {
            AxisScale::Linear => "Linear",
            AxisScale::Log => "Log",
        }
    }
}

// ---------------------------------------------------------------------------
// Cross-sectional projection (one year, all countries)
// ---------------------------------------------------------------------------

/// Scatter data for one year: x-values from one indicator, y-values and
/// their region labels from another.
///
/// The x and y subsets come from independent filters over the same year;
/// points pair by position, not by region, and pairing truncates to the
/// shorter side. `labels` runs parallel to `ys`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub xs: Vec<Option<f64>>,
    pub ys: Vec<Option<f64>>,
    pub labels: Vec<String>,
    pub x_title: String,
    pub y_title: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,
}

impl ScatterSeries {
    /// Positionally paired `(x, y, region)` triples with missing values
    /// dropped.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, &str)> + '_ {
        self.xs
            .iter()
            .zip(self.ys.iter().zip(self.labels.iter()))
            .filter_map(|(x, (y, region))| Some(((*x)?, (*y)?, region.as_str())))
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty() && self.ys.is_empty()
    }
}

/// Project the dataset onto one year: a snapshot across regions with one
/// indicator per axis.
///
/// Unknown indicators or a year absent from the dataset yield an empty
/// series, not an error.
pub fn cross_section(
    dataset: &Dataset,
    x_indicator: &str,
    y_indicator: &str,
    year: i32,
    x_scale: AxisScale,
    y_scale: AxisScale,
) -> ScatterSeries {
    let in_year = || dataset.rows.iter().filter(move |r| r.year == year);

    let xs = in_year()
        .filter(|r| r.indicator == x_indicator)
        .map(|r| r.value)
        .collect();
    let (ys, labels) = in_year()
        .filter(|r| r.indicator == y_indicator)
        .map(|r| (r.value, r.region.clone()))
        .unzip();

    ScatterSeries {
        xs,
        ys,
        labels,
        x_title: x_indicator.to_owned(),
        y_title: y_indicator.to_owned(),
        x_scale,
        y_scale,
    }
}

// ---------------------------------------------------------------------------
// Time-series projection (one country, all years)
// ---------------------------------------------------------------------------

/// Line data for one region and indicator: `(year, value)` pairs in the
/// dataset's original row order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSeries {
    pub region: String,
    pub indicator: String,
    pub points: Vec<(i32, Option<f64>)>,
}

impl LineSeries {
    /// The plottable `(year, value)` pairs, missing values dropped.
    pub fn values(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.points.iter().filter_map(|&(year, v)| Some((year, v?)))
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Project the dataset onto one region and indicator across all years.
///
/// An unknown region or indicator yields an empty series, not an error.
pub fn time_series(dataset: &Dataset, region: &str, indicator: &str) -> LineSeries {
    let points = dataset
        .rows
        .iter()
        .filter(|r| r.region == region && r.indicator == indicator)
        .map(|r| (r.year, r.value))
        .collect();

    LineSeries {
        region: region.to_owned(),
        indicator: indicator.to_owned(),
        points,
    }
}
