use layout21::raw::Layer;
use layout21::raw::LayerPurpose;
use layout21::raw::Layers;
use layout21::raw::LayoutResult;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub use layout21::raw::Int;
pub use layout21::raw::Units;

/// The type to use for nonnegative values.
/// Defaults to the same as [`Int`] for now.
pub type Uint = isize;

/// Process layer table: symbolic layer names mapped to GDS layer numbers
/// and purposes. Numeric design rules do not live here; they are explicit
/// per-device records in the tech modules.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TechConfig {
    pub tech: String,
    pub units: Units,
    layers: HashMap<String, LayerConfig>,
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct LayerConfig {
    #[serde(default)]
    pub desc: String,
    pub layernum: i16,
    #[serde(default)]
    pub purposes: Vec<(LayerPurpose, i16)>,
}

impl TechConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let txt = std::fs::read_to_string(path)?;
        Self::from_toml(&txt)
    }

    pub fn from_toml(s: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(s)?)
    }

    pub fn layer(&self, l: &str) -> Option<&LayerConfig> {
        self.layers.get(l)
    }

    pub fn get_layers(&self) -> LayoutResult<Layers> {
        let mut layers = Layers::default();
        for (name, cfg) in self.layers.iter() {
            let mut l = Layer::new(cfg.layernum, name);
            for (p, i) in cfg.purposes.iter() {
                l.add_purpose(*i, p.clone())?;
            }
            layers.add(l);
        }
        Ok(layers)
    }
}
