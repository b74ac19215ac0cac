use crate::color::ColorMap;
use crate::data::model::Dataset;
use crate::data::view::AxisScale;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file is loaded).
    pub dataset: Option<Dataset>,

    /// Scatterplot selections: one indicator per axis plus scale hints.
    pub x_indicator: String,
    pub y_indicator: String,
    pub x_scale: AxisScale,
    pub y_scale: AxisScale,

    /// Year shown in the cross-sectional view.
    pub year: Option<i32>,

    /// Line-chart selections.
    pub country: String,
    pub line_indicator: String,

    /// Stable region → colour assignment for the current dataset.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,

    /// Whether a file loading operation is in progress.
    pub loading: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            x_indicator: String::new(),
            y_indicator: String::new(),
            x_scale: AxisScale::Linear,
            y_scale: AxisScale::Linear,
            year: None,
            country: String::new(),
            line_indicator: String::new(),
            color_map: None,
            status_message: None,
            loading: false,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset and reset every selection to its
    /// default: first indicator on x, second on y (first when only one
    /// exists), latest year, first country.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.x_indicator = dataset.indicators.first().cloned().unwrap_or_default();
        self.y_indicator = dataset
            .indicators
            .get(1)
            .or_else(|| dataset.indicators.first())
            .cloned()
            .unwrap_or_default();
        self.x_scale = AxisScale::Linear;
        self.y_scale = AxisScale::Linear;
        self.year = dataset.years.last().copied();

        self.country = dataset.regions.first().cloned().unwrap_or_default();
        self.line_indicator = self.x_indicator.clone();

        self.color_map = Some(ColorMap::new(&dataset.regions));
        self.dataset = Some(dataset);
        self.status_message = None;
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Observation;

    #[test]
    fn defaults_follow_selection_list_order() {
        let ds = Dataset::from_rows(vec![
            Observation::new("Belgium", "GDP", "EUR", 2010, Some(1.0)),
            Observation::new("Belgium", "POP", "PERS", 2010, Some(2.0)),
            Observation::new("Germany", "GDP", "EUR", 2011, Some(3.0)),
        ]);

        let mut state = AppState::default();
        state.set_dataset(ds);

        assert_eq!(state.x_indicator, "GDP (EUR)");
        assert_eq!(state.y_indicator, "POP (PERS)");
        assert_eq!(state.year, Some(2011));
        assert_eq!(state.country, "Belgium");
        assert_eq!(state.line_indicator, "GDP (EUR)");
        assert_eq!(state.x_scale, AxisScale::Linear);
    }

    #[test]
    fn single_indicator_dataset_uses_it_for_both_axes() {
        let ds = Dataset::from_rows(vec![Observation::new(
            "Belgium", "GDP", "EUR", 2010, Some(1.0),
        )]);

        let mut state = AppState::default();
        state.set_dataset(ds);

        assert_eq!(state.x_indicator, "GDP (EUR)");
        assert_eq!(state.y_indicator, "GDP (EUR)");
    }
}
