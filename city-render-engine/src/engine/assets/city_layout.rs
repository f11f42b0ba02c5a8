use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::material_palette::MaterialKey;

/// The compiled-in layout manifest. Editing this JSON re-arranges the city
/// without touching generator code.
const LAYOUT_JSON: &str = include_str!("../../../assets/city_layout.json");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchetypeKind {
    CoreHub,
    StorageCluster,
    ProcessingLab,
    ChannelCubes,
    ShopRow,
    NotificationHub,
    ExchangeHub,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildingSite {
    pub archetype: ArchetypeKind,
    pub anchor: [f32; 3],
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipeRunConfig {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub material: MaterialKey,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusLayout {
    pub anchor: [f32; 3],
    pub runs: Vec<PipeRunConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForestPatch {
    pub center: [f32; 2],
    pub trees: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSlab {
    pub size: [f32; 2],
    pub center: [f32; 2],
}

/// Complete scene placement, mirroring the JSON manifest exactly.
/// Positions are stored as plain arrays; convert at the point of use.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct CityLayout {
    pub seed: u64,
    pub buildings: Vec<BuildingSite>,
    pub bus: BusLayout,
    pub forests: Vec<ForestPatch>,
    pub clouds: Vec<[f32; 3]>,
    pub paths: Vec<PathSlab>,
}

impl CityLayout {
    /// Parse the embedded manifest. A broken manifest degrades to a bare
    /// island (terrain only) rather than failing startup.
    pub fn load() -> Self {
        match serde_json::from_str(LAYOUT_JSON) {
            Ok(layout) => layout,
            Err(err) => {
                eprintln!("Warning: city layout manifest failed to parse ({err}); building bare island");
                Self::bare()
            }
        }
    }

    fn bare() -> Self {
        Self {
            seed: 0,
            buildings: Vec::new(),
            bus: BusLayout {
                anchor: [0.0; 3],
                runs: Vec::new(),
            },
            forests: Vec::new(),
            clouds: Vec::new(),
            paths: Vec::new(),
        }
    }
}
