use layout21::raw::LayoutResult;

use crate::config::TechConfig;
use crate::{Pdk, PdkLib};

pub mod layers;
pub mod rules;


const GF180_LAYERS_TOML: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tech/gf180/layers.toml"
));

fn tech_config() -> TechConfig {
    TechConfig::from_toml(GF180_LAYERS_TOML).expect("failed to load gf180mcu tech config")
}

pub fn pdk() -> LayoutResult<Pdk> {
    Pdk::new(tech_config())
}

pub fn pdk_lib(name: &str) -> LayoutResult<PdkLib> {
    Ok(PdkLib::new(pdk()?, name))
}
