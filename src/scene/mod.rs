//! Scene catalog: the fixed, ordered set of filtered views.
//!
//! Each scene pairs a record predicate with a marker color and a list of
//! annotations anchored in data space (horsepower, mpg), never in pixels.

use serde::{Deserialize, Serialize};
use smallvec::{SmallVec, smallvec};

use crate::core::CarRecord;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Number of scenes the catalog cycles through.
pub const SCENE_COUNT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneKind {
    All,
    HighMpg,
    HighHp,
}

impl SceneKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::HighMpg => "HighMPG",
            Self::HighHp => "HighHP",
        }
    }
}

/// Text label anchored at a data-space coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    /// Horsepower units.
    pub x: f64,
    /// Miles-per-gallon units.
    pub y: f64,
    pub text: String,
}

impl Annotation {
    #[must_use]
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
        }
    }
}

pub type ScenePredicate = fn(&CarRecord) -> bool;

#[derive(Debug, Clone)]
pub struct SceneDefinition {
    pub index: usize,
    pub kind: SceneKind,
    pub predicate: ScenePredicate,
    pub color: Color,
    pub annotations: SmallVec<[Annotation; 3]>,
}

impl SceneDefinition {
    #[must_use]
    pub fn accepts(&self, record: &CarRecord) -> bool {
        (self.predicate)(record)
    }

    /// Indices of `records` that pass this scene's predicate, in order.
    pub fn visible_indices<'a>(
        &'a self,
        records: &'a [CarRecord],
    ) -> impl Iterator<Item = usize> + 'a {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.accepts(record))
            .map(|(index, _)| index)
    }
}

fn accept_all(_: &CarRecord) -> bool {
    true
}

fn high_miles_per_gallon(record: &CarRecord) -> bool {
    record.miles_per_gallon > 30.0
}

fn high_horsepower(record: &CarRecord) -> bool {
    record.horsepower > 150.0
}

/// Ordered, immutable list of the three scenes.
#[derive(Debug, Clone)]
pub struct SceneCatalog {
    scenes: [SceneDefinition; SCENE_COUNT],
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl SceneCatalog {
    #[must_use]
    pub fn standard() -> Self {
        Self {
            scenes: [
                SceneDefinition {
                    index: 0,
                    kind: SceneKind::All,
                    predicate: accept_all,
                    color: Color::STEELBLUE,
                    annotations: smallvec![
                        Annotation::new(50.0, 40.0, "High MPG, Low Horsepower"),
                        Annotation::new(200.0, 250.0, "Average MPG, Average Horsepower"),
                        Annotation::new(500.0, 550.0, "Low MPG, High Horsepower"),
                    ],
                },
                SceneDefinition {
                    index: 1,
                    kind: SceneKind::HighMpg,
                    predicate: high_miles_per_gallon,
                    color: Color::ORANGE,
                    annotations: smallvec![Annotation::new(300.0, 100.0, "Cars with MPG > 30")],
                },
                SceneDefinition {
                    index: 2,
                    kind: SceneKind::HighHp,
                    predicate: high_horsepower,
                    color: Color::GREEN,
                    annotations: smallvec![Annotation::new(
                        500.0,
                        500.0,
                        "Cars with Horsepower > 150"
                    )],
                },
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    pub fn scene(&self, index: usize) -> ChartResult<&SceneDefinition> {
        self.scenes.get(index).ok_or(ChartError::SceneOutOfRange {
            index,
            count: self.scenes.len(),
        })
    }

    /// Total lookup: `index` is reduced modulo the scene count.
    #[must_use]
    pub fn scene_wrapping(&self, index: usize) -> &SceneDefinition {
        &self.scenes[index % SCENE_COUNT]
    }

    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % SCENE_COUNT
    }

    pub fn iter(&self) -> impl Iterator<Item = &SceneDefinition> {
        self.scenes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_order_is_fixed() {
        let catalog = SceneCatalog::standard();
        let kinds: Vec<_> = catalog.iter().map(|scene| scene.kind).collect();
        assert_eq!(kinds, [SceneKind::All, SceneKind::HighMpg, SceneKind::HighHp]);
        for (position, scene) in catalog.iter().enumerate() {
            assert_eq!(scene.index, position);
        }
    }

    #[test]
    fn out_of_range_lookup_fails() {
        let catalog = SceneCatalog::standard();
        let err = catalog.scene(3).expect_err("index 3 is out of range");
        assert!(matches!(
            err,
            ChartError::SceneOutOfRange { index: 3, count: 3 }
        ));
    }

    #[test]
    fn predicates_use_strict_thresholds() {
        let catalog = SceneCatalog::standard();
        let high_mpg = catalog.scene(1).expect("scene 1");
        let high_hp = catalog.scene(2).expect("scene 2");

        assert!(!high_mpg.accepts(&CarRecord::new("edge", 100.0, 30.0)));
        assert!(high_mpg.accepts(&CarRecord::new("above", 100.0, 30.1)));
        assert!(!high_hp.accepts(&CarRecord::new("edge", 150.0, 20.0)));
        assert!(high_hp.accepts(&CarRecord::new("above", 151.0, 20.0)));
    }

    #[test]
    fn annotation_counts_match_scene() {
        let catalog = SceneCatalog::standard();
        let counts: Vec<_> = catalog.iter().map(|scene| scene.annotations.len()).collect();
        assert_eq!(counts, [3, 1, 1]);
    }
}
