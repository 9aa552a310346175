use layout21::raw::LayerKey;

use crate::Pdk;

pub trait Gf180Pdk {
    fn comp(&self) -> LayerKey;
    fn dnwell(&self) -> LayerKey;
    fn nwell(&self) -> LayerKey;
    fn lvpwell(&self) -> LayerKey;
    fn dualgate(&self) -> LayerKey;
    fn nplus(&self) -> LayerKey;
    fn pplus(&self) -> LayerKey;
    fn contact(&self) -> LayerKey;
    fn metal1(&self) -> LayerKey;
    fn diode_mk(&self) -> LayerKey;
    fn well_diode_mk(&self) -> LayerKey;
    fn schottky_diode(&self) -> LayerKey;
}

impl Gf180Pdk for Pdk {
    fn comp(&self) -> LayerKey {
        self.get_layerkey("comp").unwrap()
    }
    fn dnwell(&self) -> LayerKey {
        self.get_layerkey("dnwell").unwrap()
    }
    fn nwell(&self) -> LayerKey {
        self.get_layerkey("nwell").unwrap()
    }
    fn lvpwell(&self) -> LayerKey {
        self.get_layerkey("lvpwell").unwrap()
    }
    fn dualgate(&self) -> LayerKey {
        self.get_layerkey("dualgate").unwrap()
    }
    fn nplus(&self) -> LayerKey {
        self.get_layerkey("nplus").unwrap()
    }
    fn pplus(&self) -> LayerKey {
        self.get_layerkey("pplus").unwrap()
    }
    fn contact(&self) -> LayerKey {
        self.get_layerkey("contact").unwrap()
    }
    fn metal1(&self) -> LayerKey {
        self.get_layerkey("metal1").unwrap()
    }
    fn diode_mk(&self) -> LayerKey {
        self.get_layerkey("diode_mk").unwrap()
    }
    fn well_diode_mk(&self) -> LayerKey {
        self.get_layerkey("well_diode_mk").unwrap()
    }
    fn schottky_diode(&self) -> LayerKey {
        self.get_layerkey("schottky_diode").unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::Gf180Pdk;

    #[test]
    fn test_gf180_pdk_layers() -> Result<(), Box<dyn std::error::Error>> {
        let pdk = crate::tech::gf180::pdk()?;
        let _ = pdk.comp();
        let _ = pdk.dnwell();
        let _ = pdk.nwell();
        let _ = pdk.lvpwell();
        let _ = pdk.dualgate();
        let _ = pdk.nplus();
        let _ = pdk.pplus();
        let _ = pdk.contact();
        let _ = pdk.metal1();
        let _ = pdk.diode_mk();
        let _ = pdk.well_diode_mk();
        let _ = pdk.schottky_diode();
        Ok(())
    }
}
