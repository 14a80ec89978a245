use serde::{Deserialize, Serialize};

use crate::core::dataset::DataDomain;
use crate::core::types::ViewportState;
use crate::error::{ChartError, ChartResult};

/// Monotonic linear mapping from a data domain onto a pixel range.
///
/// A zero-width domain is accepted and collapses every value onto the
/// range start, which is what an empty dataset produces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        let (domain_start, domain_end) = domain;
        let (range_start, range_end) = range;
        if !domain_start.is_finite() || !domain_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range_start.is_finite() || !range_end.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
            range_start,
            range_end,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.domain_end == self.domain_start
    }

    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        if span == 0.0 {
            return self.range_start;
        }
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    #[must_use]
    pub fn invert(self, pixel: f64) -> f64 {
        let span = self.range_end - self.range_start;
        if span == 0.0 {
            return self.domain_start;
        }
        let normalized = (pixel - self.range_start) / span;
        self.domain_start + normalized * (self.domain_end - self.domain_start)
    }
}

/// Horsepower (x) and miles-per-gallon (y) scales for one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ChartScales {
    /// Derives both scales from the dataset domain and the current plot area.
    ///
    /// The y range runs bottom-up so larger values sit higher on screen.
    pub fn build(domain: DataDomain, state: ViewportState) -> ChartResult<Self> {
        let x = LinearScale::new(
            (0.0, domain.max_horsepower),
            (state.plot_left(), state.plot_right()),
        )?;
        let y = LinearScale::new(
            (0.0, domain.max_miles_per_gallon),
            (state.plot_bottom(), state.plot_top()),
        )?;
        Ok(Self { x, y })
    }

    #[must_use]
    pub fn project(self, horsepower: f64, miles_per_gallon: f64) -> (f64, f64) {
        (self.x.map(horsepower), self.y.map(miles_per_gallon))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Margins, Viewport};

    #[test]
    fn maps_domain_ends_onto_range_ends() {
        let scale = LinearScale::new((0.0, 200.0), (60.0, 790.0)).expect("scale");
        assert_eq!(scale.map(0.0), 60.0);
        assert_eq!(scale.map(200.0), 790.0);
        assert_eq!(scale.map(100.0), 425.0);
    }

    #[test]
    fn invert_undoes_map() {
        let scale = LinearScale::new((0.0, 46.6), (550.0, 10.0)).expect("scale");
        let pixel = scale.map(23.3);
        assert!((scale.invert(pixel) - 23.3).abs() <= 1e-9);
    }

    #[test]
    fn degenerate_domain_collapses_to_range_start() {
        let scale = LinearScale::new((0.0, 0.0), (550.0, 10.0)).expect("scale");
        assert!(scale.is_degenerate());
        assert_eq!(scale.map(0.0), 550.0);
        assert_eq!(scale.map(42.0), 550.0);
    }

    #[test]
    fn non_finite_domain_is_rejected() {
        assert!(LinearScale::new((0.0, f64::NAN), (0.0, 1.0)).is_err());
        assert!(LinearScale::new((0.0, 1.0), (f64::INFINITY, 1.0)).is_err());
    }

    #[test]
    fn chart_scales_invert_y_axis() {
        let state = ViewportState::new(Viewport::new(800, 600), Margins::default()).expect("state");
        let domain = DataDomain {
            max_horsepower: 200.0,
            max_miles_per_gallon: 40.0,
        };
        let scales = ChartScales::build(domain, state).expect("scales");
        assert_eq!(scales.y.map(0.0), 550.0);
        assert_eq!(scales.y.map(40.0), 10.0);
        assert_eq!(scales.x.map(200.0), 790.0);
    }
}
