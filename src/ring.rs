use layout21::raw::{Element, Int, LayerKey, LayerPurpose, Point, Rect, Shape};

use crate::contact::{draw_via_array, ContactRules};
use crate::error::{DiodeError, DiodeResult};
use crate::geometry::RectExt;

/// A rectangular annulus: the area between `inner` and `outer`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Ring {
    inner: Rect,
    outer: Rect,
}

impl Ring {
    /// Builds a ring of the given width around `inner`.
    pub fn from_inner(inner: Rect, width: Int) -> DiodeResult<Self> {
        if width <= 0 {
            return Err(DiodeError::RingTooNarrow { growth: width });
        }
        if inner.width() <= 0 || inner.height() <= 0 {
            return Err(DiodeError::DegenerateRect {
                width: inner.width(),
                height: inner.height(),
            });
        }
        let outer = inner.grow(width);
        Ok(Self { inner, outer })
    }

    #[inline]
    pub fn inner(&self) -> Rect {
        self.inner.clone()
    }

    #[inline]
    pub fn outer(&self) -> Rect {
        self.outer.clone()
    }

    pub fn left(&self) -> Rect {
        Rect {
            p0: self.outer.p0,
            p1: Point::new(self.inner.p0.x, self.outer.p1.y),
        }
    }

    pub fn right(&self) -> Rect {
        Rect {
            p0: Point::new(self.inner.p1.x, self.outer.p0.y),
            p1: self.outer.p1,
        }
    }

    pub fn bottom(&self) -> Rect {
        Rect {
            p0: Point::new(self.inner.p0.x, self.outer.p0.y),
            p1: Point::new(self.inner.p1.x, self.inner.p0.y),
        }
    }

    pub fn top(&self) -> Rect {
        Rect {
            p0: Point::new(self.inner.p0.x, self.inner.p1.y),
            p1: Point::new(self.inner.p1.x, self.outer.p1.y),
        }
    }

    /// The frame decomposition of the annulus.
    ///
    /// The four rects are disjoint and tile `outer - inner` exactly; the
    /// vertical bars take the corners.
    #[inline]
    pub fn rects(&self) -> [Rect; 4] {
        [self.left(), self.bottom(), self.right(), self.top()]
    }
}

/// Emits the four frame rects of `ring` on `layer`.
///
/// If `label` is given it rides the left segment.
pub fn draw_ring(elems: &mut Vec<Element>, layer: LayerKey, ring: &Ring, label: Option<&str>) {
    let [left, bottom, right, top] = ring.rects();
    elems.push(Element {
        net: label.map(|s| s.to_string()),
        layer,
        purpose: LayerPurpose::Drawing,
        inner: Shape::Rect(left),
    });
    for r in [bottom, right, top] {
        elems.push(Element {
            net: None,
            layer,
            purpose: LayerPurpose::Drawing,
            inner: Shape::Rect(r),
        });
    }
}

/// Places one bar of contact cuts on each of the four ring segments.
///
/// The bar spans are inset by one cut size on the axis running along the
/// segment, so no cut ever lands in a corner region.
pub fn draw_ring_taps(
    elems: &mut Vec<Element>,
    contact: LayerKey,
    ring: &Ring,
    rules: &ContactRules,
) -> DiodeResult<()> {
    let inner = ring.inner();
    let outer = ring.outer();
    let inset = rules.size;

    // Bottom and top bars.
    for (ylo, yhi) in [(outer.ymin(), inner.ymin()), (inner.ymax(), outer.ymax())] {
        let bar = Rect {
            p0: Point::new(inner.xmin() + inset, ylo),
            p1: Point::new(inner.xmax() - inset, yhi),
        };
        draw_via_array(elems, contact, &bar, rules)?;
    }

    // Left and right bars.
    for (xlo, xhi) in [(outer.xmin(), inner.xmin()), (inner.xmax(), outer.xmax())] {
        let bar = Rect {
            p0: Point::new(xlo, inner.ymin() + inset),
            p1: Point::new(xhi, inner.ymax() - inset),
        };
        draw_via_array(elems, contact, &bar, rules)?;
    }

    Ok(())
}

/// Layer set for a substrate guard ring.
#[derive(Debug, Clone, Copy)]
pub struct GuardRingLayers {
    pub comp: LayerKey,
    pub implant: LayerKey,
    pub metal: LayerKey,
    pub contact: LayerKey,
}

#[derive(Debug, Clone)]
pub struct GuardRingParams {
    /// The region the guard ring surrounds.
    pub enclosed: Rect,
    /// Clearance between the enclosed region and the ring's inner edge.
    pub enclosure: Int,
    /// Ring width.
    pub width: Int,
    /// Implant overhang past the ring on both edges.
    pub implant_enc: Int,
    /// Optional terminal label, placed on the ring metal's left segment.
    pub label: Option<String>,
}

/// Draws a substrate tap ring: a comp ring with implant, a bar of contact
/// cuts on each segment, and a metal ring of the same footprint.
pub fn draw_guard_ring(
    elems: &mut Vec<Element>,
    layers: &GuardRingLayers,
    params: &GuardRingParams,
    rules: &ContactRules,
) -> DiodeResult<Ring> {
    let inner = params.enclosed.grow(params.enclosure);
    let ring = Ring::from_inner(inner.clone(), params.width)?;

    draw_ring(elems, layers.comp, &ring, None);

    let implant = Ring {
        inner: inner.shrink(params.implant_enc),
        outer: ring.outer().grow(params.implant_enc),
    };
    draw_ring(elems, layers.implant, &implant, None);

    draw_ring_taps(elems, layers.contact, &ring, rules)?;
    draw_ring(elems, layers.metal, &ring, params.label.as_deref());

    Ok(ring)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::rect;

    #[test]
    fn test_ring_containment() -> DiodeResult<()> {
        let inner = rect(5000, 3000);
        let ring = Ring::from_inner(inner.clone(), 360)?;
        let outer = ring.outer();
        assert!(outer.xmin() < inner.xmin());
        assert!(outer.ymin() < inner.ymin());
        assert!(outer.xmax() > inner.xmax());
        assert!(outer.ymax() > inner.ymax());
        assert_eq!(outer.width(), inner.width() + 2 * 360);
        assert_eq!(outer.height(), inner.height() + 2 * 360);
        Ok(())
    }

    #[test]
    fn test_ring_frame_tiles_annulus() -> DiodeResult<()> {
        let ring = Ring::from_inner(rect(2000, 1000), 360)?;
        let [left, bottom, right, top] = ring.rects();

        // Disjoint: vertical bars own the corners.
        assert_eq!(left.xmax(), bottom.xmin());
        assert_eq!(bottom.xmax(), right.xmin());
        assert_eq!(bottom.ymax(), ring.inner().ymin());
        assert_eq!(top.ymin(), ring.inner().ymax());

        // Areas sum to the annulus area.
        let area = |r: &Rect| r.width() * r.height();
        let annulus =
            area(&ring.outer()) - ring.inner().width() * ring.inner().height();
        assert_eq!(
            area(&left) + area(&bottom) + area(&right) + area(&top),
            annulus
        );
        Ok(())
    }

    #[test]
    fn test_ring_rejects_bad_growth() {
        let err = Ring::from_inner(rect(100, 100), 0).unwrap_err();
        assert!(matches!(err, DiodeError::RingTooNarrow { growth: 0 }));
    }

    #[test]
    fn test_taps_avoid_corners() -> DiodeResult<()> {
        let ring = Ring::from_inner(rect(5000, 5000), 360)?;
        let mut elems = Vec::new();
        let key = crate::tech::gf180::pdk()
            .unwrap()
            .get_layerkey("contact")
            .unwrap();
        draw_ring_taps(&mut elems, key, &ring, &ContactRules::default())?;
        assert!(!elems.is_empty());
        let inner = ring.inner();
        for e in &elems {
            if let Shape::Rect(cut) = &e.inner {
                let in_x = cut.xmax() <= inner.xmin() || cut.xmin() >= inner.xmax();
                let in_y = cut.ymax() <= inner.ymin() || cut.ymin() >= inner.ymax();
                // Each cut sits in exactly one segment, never a corner.
                assert!(in_x != in_y);
            }
        }
        Ok(())
    }
}
