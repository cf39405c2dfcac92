//! Map description loading.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use wayfind::nav::GridModel;

/// Map description, loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: u32,
    pub height: u32,
    pub cell_size: f32,
    /// Blocked cells as `[x, y]` pairs. Out-of-bounds entries are ignored,
    /// matching the grid's `set_blocked` semantics.
    pub obstacles: Vec<(i32, i32)>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 16,
            height: 16,
            cell_size: 64.0,
            obstacles: Vec::new(),
        }
    }
}

impl MapConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading map file {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing map file {}", path.display()))?;
        Ok(config)
    }

    pub fn to_grid(&self) -> GridModel {
        let mut grid = GridModel::new(self.width, self.height, self.cell_size);
        for &(x, y) in &self.obstacles {
            grid.set_blocked(x, y, true);
        }
        grid
    }
}
