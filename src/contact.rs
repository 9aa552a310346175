use itertools::iproduct;
use layout21::raw::{Element, Int, LayerKey, LayerPurpose, Rect, Shape};
use serde::{Deserialize, Serialize};

use crate::error::{DiodeError, DiodeResult};
use crate::geometry::RectExt;

/// Contact cut rules: cut size, cut-to-cut spacing, and the enclosure the
/// surrounding region must keep around the outermost cuts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ContactRules {
    pub size: Int,
    pub space: Int,
    pub enc: Int,
}

impl Default for ContactRules {
    fn default() -> Self {
        Self {
            size: 220,
            space: 280,
            enc: 70,
        }
    }
}

/// Tiles one axis of a via array.
///
/// Returns the minimum-edge coordinates of each cut. The outermost cuts
/// keep `enc` of margin inside `[lo, hi]`, and residual slack is split
/// evenly between both ends. A span too short for a single cut is an
/// error, never an empty array.
pub fn tile_axis(lo: Int, hi: Int, rules: &ContactRules) -> DiodeResult<Vec<Int>> {
    let usable_lo = lo + rules.enc;
    let usable_hi = hi - rules.enc;
    let usable = usable_hi - usable_lo;
    if usable < rules.size {
        return Err(DiodeError::DegenerateSpan {
            len: hi - lo,
            size: rules.size,
            enc: rules.enc,
        });
    }
    let pitch = rules.size + rules.space;
    let n = std::cmp::max((usable + rules.space) / pitch, 1);
    let used = n * rules.size + (n - 1) * rules.space;
    let start = usable_lo + (usable - used) / 2;
    Ok((0..n).map(|i| start + i * pitch).collect())
}

/// Fills `region` with a grid of contact cuts on `layer`.
///
/// Both axes are tiled independently. Returns the bounding box of the cuts.
pub fn draw_via_array(
    elems: &mut Vec<Element>,
    layer: LayerKey,
    region: &Rect,
    rules: &ContactRules,
) -> DiodeResult<Rect> {
    let xs = tile_axis(region.xmin(), region.xmax(), rules)?;
    let ys = tile_axis(region.ymin(), region.ymax(), rules)?;

    for (x, y) in iproduct!(xs.iter(), ys.iter()) {
        let cut = crate::geometry::rect(rules.size, rules.size)
            .with_xmin(*x)
            .with_ymin(*y);
        elems.push(Element {
            net: None,
            layer,
            purpose: LayerPurpose::Drawing,
            inner: Shape::Rect(cut),
        });
    }

    let bbox = crate::geometry::rect(
        xs[xs.len() - 1] - xs[0] + rules.size,
        ys[ys.len() - 1] - ys[0] + rules.size,
    )
    .with_xmin(xs[0])
    .with_ymin(ys[0]);
    Ok(bbox)
}

/// Draws the solid-region contact stack: a grid of cuts covering `region`
/// plus a metal cap over the full region footprint.
///
/// If `label` is given it rides the cap and is exported as a text at the
/// cap's center on the metal layer's label purpose.
pub fn draw_via_stack(
    elems: &mut Vec<Element>,
    contact: LayerKey,
    metal: LayerKey,
    region: &Rect,
    rules: &ContactRules,
    label: Option<&str>,
) -> DiodeResult<Rect> {
    draw_via_array(elems, contact, region, rules)?;
    elems.push(Element {
        net: label.map(|s| s.to_string()),
        layer: metal,
        purpose: LayerPurpose::Drawing,
        inner: Shape::Rect(region.clone()),
    });
    Ok(region.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    #[test]
    fn test_tile_axis_single() -> DiodeResult<()> {
        let rules = ContactRules::default();
        // 360nm guard ring segment: exactly one 220nm cut, centered.
        let xs = tile_axis(0, 360, &rules)?;
        assert_eq!(xs, vec![70]);
        Ok(())
    }

    #[test]
    fn test_tile_axis_centered_slack() -> DiodeResult<()> {
        let rules = ContactRules::default();
        let xs = tile_axis(0, 2000, &rules)?;
        // usable 1860nm fits 4 cuts (1720nm used); 140nm slack splits evenly.
        assert_eq!(xs, vec![140, 640, 1140, 1640]);
        let left = xs[0];
        let right = 2000 - (xs[3] + rules.size);
        assert!((left - right).abs() <= 1);
        Ok(())
    }

    #[test]
    fn test_tile_axis_degenerate() {
        let rules = ContactRules::default();
        let err = tile_axis(0, 300, &rules).unwrap_err();
        assert!(matches!(err, DiodeError::DegenerateSpan { len: 300, .. }));
    }

    #[test]
    fn test_tile_axis_within_bounds() -> DiodeResult<()> {
        let rules = ContactRules::default();
        for hi in [360, 500, 777, 1201, 4800] {
            let xs = tile_axis(0, hi, &rules)?;
            assert!(xs[0] >= rules.enc);
            assert!(xs[xs.len() - 1] + rules.size <= hi - rules.enc);
        }
        Ok(())
    }

    #[test]
    fn test_via_array_grid() -> DiodeResult<()> {
        let mut elems = Vec::new();
        let key = crate::tech::gf180::pdk().unwrap().get_layerkey("contact").unwrap();
        let bbox = draw_via_array(&mut elems, key, &rect(1000, 520), &ContactRules::default())?;
        // 2 columns x 1 row of cuts.
        assert_eq!(elems.len(), 2);
        assert_eq!(bbox.width(), 2 * 220 + 280);
        assert_eq!(bbox.height(), 220);
        Ok(())
    }
}
