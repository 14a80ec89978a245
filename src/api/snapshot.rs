use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{Renderer, TextRole};
use crate::scene::SceneKind;

use super::SceneChart;

pub const SCENE_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerSnapshot {
    pub record_index: usize,
    pub name: String,
    pub horsepower: f64,
    pub miles_per_gallon: f64,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationSnapshot {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TooltipSnapshot {
    pub record_index: usize,
    pub left: f64,
    pub top: f64,
    pub opacity: f64,
}

/// Deterministic description of what the chart currently shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub scene_index: usize,
    pub scene: SceneKind,
    pub color_hex: String,
    pub viewport: Viewport,
    pub markers: Vec<MarkerSnapshot>,
    pub annotations: Vec<AnnotationSnapshot>,
    pub tooltip: Option<TooltipSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: SceneSnapshot,
}

impl SceneSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = SceneSnapshotJsonContractV1 {
            schema_version: SCENE_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<SceneSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: SceneSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != SCENE_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<R: Renderer> SceneChart<R> {
    #[must_use]
    pub fn snapshot(&self) -> SceneSnapshot {
        let scene = self.current_scene();
        let markers = self
            .frame
            .circles
            .iter()
            .filter_map(|marker| {
                let record = self.dataset.get(marker.record_index)?;
                Some(MarkerSnapshot {
                    record_index: marker.record_index,
                    name: record.name.clone(),
                    horsepower: record.horsepower,
                    miles_per_gallon: record.miles_per_gallon,
                    x: marker.cx,
                    y: marker.cy,
                })
            })
            .collect();
        let annotations = self
            .frame
            .texts_with_role(TextRole::Annotation)
            .map(|text| AnnotationSnapshot {
                text: text.text.clone(),
                x: text.x,
                y: text.y,
            })
            .collect();
        let tooltip = self.frame.tooltip.as_ref().and_then(|overlay| {
            Some(TooltipSnapshot {
                record_index: self.tooltip.record_index()?,
                left: overlay.left,
                top: overlay.top,
                opacity: overlay.opacity,
            })
        });

        SceneSnapshot {
            scene_index: scene.index,
            scene: scene.kind,
            color_hex: scene.color.to_hex(),
            viewport: self.viewport_state.viewport,
            markers,
            annotations,
            tooltip,
        }
    }

    pub fn snapshot_json_contract_v1_pretty(&self) -> ChartResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }
}
