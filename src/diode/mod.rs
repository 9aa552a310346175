//! Diode PCell generators.
//!
//! Six variants, each emitting a fixed-name cell committed to a [`PdkLib`]:
//! junction diodes (`nd2ps`, `pd2nw`), well diodes (`nw2ps`, `pw2dw`,
//! `dw2ps`), and the Schottky finger diode (`sc_diode`).

use layout21::raw::{Cell, Element, Int, LayerKey, LayerPurpose, Layout, Rect, Shape};
use layout21::utils::Ptr;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::config::Uint;
use crate::error::{DiodeError, DiodeResult};

mod junction;
mod schottky;
mod well;

pub use junction::{draw_diode_nd2ps, draw_diode_nw2ps, draw_diode_pd2nw};
pub use schottky::draw_sc_diode;
pub use well::{draw_diode_dw2ps, draw_diode_pw2dw};

/// Operating voltage class.
///
/// Only the two process-defined classes exist; anything else is a
/// configuration error, never silently defaulted.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Volt {
    #[default]
    #[serde(rename = "3.3V")]
    V3_3,
    #[serde(rename = "5/6V")]
    V5_6,
}

impl Display for Volt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::V3_3 => write!(f, "3.3V"),
            Self::V5_6 => write!(f, "5/6V"),
        }
    }
}

impl FromStr for Volt {
    type Err = DiodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "3.3V" => Ok(Self::V3_3),
            "5/6V" => Ok(Self::V5_6),
            other => Err(DiodeError::UnknownVolt(other.to_string())),
        }
    }
}

/// Terminal label texts, exported on the metal1 label purpose.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct DiodeLabels {
    /// N-terminal label.
    pub n: String,
    /// P-terminal label.
    pub p: String,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct DiodeParams {
    /// Junction length (y extent), nm.
    pub length: Int,
    /// Junction width (x extent), nm.
    pub width: Int,
    /// Width of the terminal strip or ring on the opposite side, nm.
    pub cathode_width: Int,
    #[builder(default)]
    pub volt: Volt,
    /// Place the device inside a deep n-well.
    #[builder(default)]
    pub deepnwell: bool,
    /// Surround the device with a P+ substrate guard ring.
    #[builder(default)]
    pub guard_ring: bool,
    #[builder(default)]
    pub labels: Option<DiodeLabels>,
}

impl DiodeParams {
    #[inline]
    pub fn builder() -> DiodeParamsBuilder {
        DiodeParamsBuilder::default()
    }

    pub fn validate(&self) -> DiodeResult<()> {
        if self.width <= 0 || self.length <= 0 {
            return Err(DiodeError::DegenerateRect {
                width: self.width,
                height: self.length,
            });
        }
        if self.cathode_width <= 0 {
            return Err(DiodeError::BadParams(format!(
                "cathode width must be positive, got {}",
                self.cathode_width
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct ScDiodeParams {
    /// Anode strap length (y extent), nm.
    pub length: Int,
    /// Anode strap width, nm.
    pub width: Int,
    /// Cathode strap width, nm.
    pub cathode_width: Int,
    /// Number of anode fingers.
    pub fingers: Uint,
    #[builder(default)]
    pub guard_ring: bool,
    #[builder(default)]
    pub labels: Option<DiodeLabels>,
}

impl ScDiodeParams {
    #[inline]
    pub fn builder() -> ScDiodeParamsBuilder {
        ScDiodeParamsBuilder::default()
    }

    pub fn validate(&self) -> DiodeResult<()> {
        if self.width <= 0 || self.length <= 0 {
            return Err(DiodeError::DegenerateRect {
                width: self.width,
                height: self.length,
            });
        }
        if self.cathode_width <= 0 {
            return Err(DiodeError::BadParams(format!(
                "cathode width must be positive, got {}",
                self.cathode_width
            )));
        }
        if self.fingers < 1 {
            return Err(DiodeError::BadParams(format!(
                "finger count must be at least 1, got {}",
                self.fingers
            )));
        }
        Ok(())
    }
}

/// How a well-tap terminal is drawn.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ContactTopology {
    /// The well is too small for a ring; fill it with a solid via stack.
    Solid,
    /// A tap ring with via bars on all four segments.
    Ring,
}

impl ContactTopology {
    /// Picks the topology for a `width` x `length` well contacted by a
    /// ring of the given width, keeping `spacing` across the ring opening
    /// and `enc` of well enclosure outside it.
    pub fn select(width: Int, length: Int, ring_width: Int, spacing: Int, enc: Int) -> Self {
        let threshold = 2 * ring_width + spacing + 2 * enc;
        if width < threshold || length < threshold {
            Self::Solid
        } else {
            Self::Ring
        }
    }
}

pub(crate) fn draw_rect(elems: &mut Vec<Element>, layer: LayerKey, r: &Rect) {
    elems.push(Element {
        net: None,
        layer,
        purpose: LayerPurpose::Drawing,
        inner: Shape::Rect(r.clone()),
    });
}

pub(crate) fn finish_cell(name: &str, elems: Vec<Element>) -> Ptr<Cell> {
    let layout = Layout {
        name: name.to_string(),
        insts: vec![],
        annotations: vec![],
        elems,
    };
    let cell = Cell {
        name: name.to_string(),
        abs: None,
        layout: Some(layout),
    };
    Ptr::new(cell)
}
