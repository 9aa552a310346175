use std::path::Path;

use config::TechConfig;
use layout21::{
    raw::{Cell, DepOrder, LayerKey, Layers, LayoutResult, Library},
    utils::{Ptr, PtrList},
};

pub mod config;
pub mod contact;
pub mod diode;
pub mod error;
pub mod geometry;
pub mod ring;
pub mod tech;

#[cfg(test)]
pub(crate) mod tests;

pub use anyhow::{anyhow, Result};

#[derive(Debug, Clone)]
pub struct Pdk {
    pub config: Ptr<TechConfig>,
    pub layers: Ptr<Layers>,
}

impl Pdk {
    pub fn new(config: TechConfig) -> LayoutResult<Self> {
        let layers = Ptr::new(config.get_layers()?);
        let config = Ptr::new(config);
        Ok(Self { config, layers })
    }

    #[inline]
    pub fn config(&self) -> Ptr<TechConfig> {
        Ptr::clone(&self.config)
    }

    #[inline]
    pub fn layers(&self) -> Ptr<Layers> {
        Ptr::clone(&self.layers)
    }

    pub fn get_layerkey(&self, layer: &str) -> Option<LayerKey> {
        let layers = self.layers.read().unwrap();
        layers.keyname(layer)
    }
}

/// A [`Pdk`] paired with the [`Library`] that generated cells are committed to.
pub struct PdkLib {
    pub pdk: Pdk,
    pub lib: Library,
}

impl PdkLib {
    pub fn new(pdk: Pdk, name: impl Into<String>) -> Self {
        let units = pdk.config.read().unwrap().units;
        let mut lib = Library::new(name, units);
        lib.layers = pdk.layers();
        Self { pdk, lib }
    }

    /// Commits `cell` to the library.
    ///
    /// If a cell of the same name is already present it is replaced, so
    /// generators with fixed cell names can be re-invoked freely.
    pub fn commit_cell(&mut self, cell: Ptr<Cell>) -> Ptr<Cell> {
        let name = cell.read().unwrap().name.clone();
        let existing = self
            .lib
            .cells
            .iter()
            .position(|c| c.read().unwrap().name == name);
        match existing {
            Some(i) => self.lib.cells[i] = Ptr::clone(&cell),
            None => self.lib.cells.push(Ptr::clone(&cell)),
        }
        cell
    }

    /// Writes the library to a GDSII file, dependency-ordering cells first.
    pub fn save_gds(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let cells = DepOrder::order(&self.lib);
        self.lib.cells = PtrList::from_ptrs(cells);
        let gds = self
            .lib
            .to_gds()
            .map_err(|e| anyhow!("gds export failed: {e}"))?;
        gds.save(&path)
            .map_err(|e| anyhow!("gds save failed: {e}"))?;
        log::info!(
            "wrote {} to {:?}",
            self.lib.name,
            path.as_ref()
        );
        Ok(())
    }
}
