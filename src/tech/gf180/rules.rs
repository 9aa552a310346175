//! GF180MCU diode design rules, in nanometers.
//!
//! Every rule a generator consults is an explicit field of one of these
//! records. Callers get process values from `Default` and may override
//! any field; nothing is looked up implicitly.

use layout21::raw::Int;

use crate::contact::ContactRules;
use crate::diode::Volt;

/// P+ substrate guard ring rules, shared by all deep-well variants.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GuardRingRules {
    /// Clearance from the enclosed dnwell to the ring's inner edge.
    pub enclosure: Int,
    /// Ring width.
    pub width: Int,
    /// Implant overhang past the ring.
    pub implant_enc: Int,
}

impl Default for GuardRingRules {
    fn default() -> Self {
        Self {
            enclosure: 2_500,
            width: 360,
            implant_enc: 160,
        }
    }
}

/// N+/LVPWELL junction diode rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Nd2psRules {
    pub comp_spacing: Int,
    pub np_enc_comp: Int,
    pub pp_enc_comp: Int,
    pub dg_enc_comp: Int,
    pub dn_enc_lvpwell: Int,
    /// LVPWELL enclosure of the N+ comp outside a deep n-well.
    pub lvpwell_enc_ncmp: Int,
    /// LVPWELL enclosure of the N+ comp inside a deep n-well.
    pub lvpwell_enc_ncmp_dn: Int,
    pub lvpwell_enc_pcmp: Int,
    pub dg_enc_dn: Int,
    pub contact: ContactRules,
    pub guard_ring: GuardRingRules,
}

impl Default for Nd2psRules {
    fn default() -> Self {
        Self {
            comp_spacing: 480,
            np_enc_comp: 160,
            pp_enc_comp: 160,
            dg_enc_comp: 240,
            dn_enc_lvpwell: 2_500,
            lvpwell_enc_ncmp: 160,
            lvpwell_enc_ncmp_dn: 600,
            lvpwell_enc_pcmp: 160,
            dg_enc_dn: 500,
            contact: ContactRules::default(),
            guard_ring: GuardRingRules::default(),
        }
    }
}

/// P+/Nwell junction diode rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pd2nwRules {
    pub comp_spacing: Int,
    pub np_enc_comp: Int,
    pub pp_enc_comp: Int,
    pub dg_enc_comp: Int,
    pub dn_enc_nwell: Int,
    pub nwell_enc_ncmp: Int,
    pub nwell_enc_pcmp_lv: Int,
    pub nwell_enc_pcmp_hv: Int,
    pub dg_enc_dn: Int,
    pub contact: ContactRules,
    pub guard_ring: GuardRingRules,
}

impl Pd2nwRules {
    pub fn nwell_enc_pcmp(&self, volt: Volt) -> Int {
        match volt {
            Volt::V3_3 => self.nwell_enc_pcmp_lv,
            Volt::V5_6 => self.nwell_enc_pcmp_hv,
        }
    }
}

impl Default for Pd2nwRules {
    fn default() -> Self {
        Self {
            comp_spacing: 480,
            np_enc_comp: 160,
            pp_enc_comp: 160,
            dg_enc_comp: 240,
            dn_enc_nwell: 500,
            nwell_enc_ncmp: 280,
            nwell_enc_pcmp_lv: 430,
            nwell_enc_pcmp_hv: 600,
            dg_enc_dn: 500,
            contact: ContactRules::default(),
            guard_ring: GuardRingRules::default(),
        }
    }
}

/// Nwell/Psub diode rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Nw2psRules {
    pub comp_spacing: Int,
    pub np_enc_comp: Int,
    pub pp_enc_comp: Int,
    pub dg_enc_comp: Int,
    pub nwell_enc_ncmp: Int,
    pub contact: ContactRules,
}

impl Default for Nw2psRules {
    fn default() -> Self {
        Self {
            comp_spacing: 480,
            np_enc_comp: 160,
            pp_enc_comp: 160,
            dg_enc_comp: 240,
            nwell_enc_ncmp: 160,
            contact: ContactRules::default(),
        }
    }
}

/// LVPWELL/DNWELL diode rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Pw2dwRules {
    pub comp_spacing: Int,
    pub np_enc_comp: Int,
    pub pp_enc_comp: Int,
    pub dg_enc_dn: Int,
    pub lvpwell_enc_pcmp: Int,
    pub dn_enc_lvpwell: Int,
    /// Width of the well-tap ring when the ring topology is selected.
    pub ring_width: Int,
    pub contact: ContactRules,
    pub guard_ring: GuardRingRules,
}

impl Default for Pw2dwRules {
    fn default() -> Self {
        Self {
            comp_spacing: 920,
            np_enc_comp: 160,
            pp_enc_comp: 160,
            dg_enc_dn: 500,
            lvpwell_enc_pcmp: 160,
            dn_enc_lvpwell: 2_500,
            ring_width: 360,
            contact: ContactRules::default(),
            guard_ring: GuardRingRules::default(),
        }
    }
}

/// DNWELL/Psub diode rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Dw2psRules {
    pub comp_spacing: Int,
    pub np_enc_comp: Int,
    pub dn_enc_ncmp_lv: Int,
    pub dn_enc_ncmp_hv: Int,
    pub dg_enc_dn: Int,
    pub contact: ContactRules,
    pub guard_ring: GuardRingRules,
}

impl Dw2psRules {
    pub fn dn_enc_ncmp(&self, volt: Volt) -> Int {
        match volt {
            Volt::V3_3 => self.dn_enc_ncmp_lv,
            Volt::V5_6 => self.dn_enc_ncmp_hv,
        }
    }
}

impl Default for Dw2psRules {
    fn default() -> Self {
        Self {
            comp_spacing: 920,
            np_enc_comp: 160,
            dn_enc_ncmp_lv: 620,
            dn_enc_ncmp_hv: 660,
            dg_enc_dn: 500,
            contact: ContactRules::default(),
            guard_ring: GuardRingRules::default(),
        }
    }
}

/// Schottky diode rules.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct ScDiodeRules {
    /// Schottky marker enclosure of the cathode array.
    pub marker_enc: Int,
    /// Comp-to-comp spacing between anode and cathode straps.
    pub comp_spacing: Int,
    /// DNWELL enclosure of the strap array.
    pub dn_enc: Int,
    /// N+ implant enclosure of cathode comps.
    pub np_enc_comp: Int,
    /// Width of the metal1 bus bars.
    pub m1_width: Int,
    pub contact: ContactRules,
    pub guard_ring: GuardRingRules,
}

impl Default for ScDiodeRules {
    fn default() -> Self {
        Self {
            marker_enc: 160,
            comp_spacing: 280,
            dn_enc: 1_400,
            np_enc_comp: 30,
            m1_width: 230,
            contact: ContactRules::default(),
            guard_ring: GuardRingRules::default(),
        }
    }
}
