//! Schottky barrier diode generator.
//!
//! An interdigitated strap array inside a grounded deep n-well: `fingers`
//! anode straps, each flanked by N+ cathode straps, with metal1 buses
//! collecting the two terminal groups on opposite ends.

use layout21::raw::{Cell, Element, LayerPurpose, Point, Rect, Shape};
use layout21::utils::Ptr;

use crate::contact::draw_via_stack;
use crate::diode::{draw_rect, finish_cell, DiodeResult, ScDiodeParams};
use crate::geometry::{rect, RectExt};
use crate::ring::{draw_guard_ring, GuardRingLayers, GuardRingParams};
use crate::tech::gf180::layers::Gf180Pdk;
use crate::tech::gf180::rules::ScDiodeRules;
use crate::PdkLib;

/// Draws the Schottky diode cell `sc_diode_dev`.
pub fn draw_sc_diode(lib: &mut PdkLib, params: &ScDiodeParams) -> DiodeResult<Ptr<Cell>> {
    draw_sc_diode_with_rules(lib, params, &ScDiodeRules::default())
}

pub fn draw_sc_diode_with_rules(
    lib: &mut PdkLib,
    params: &ScDiodeParams,
    rules: &ScDiodeRules,
) -> DiodeResult<Ptr<Cell>> {
    params.validate()?;
    log::info!("generating sc_diode_dev ({} fingers)", params.fingers);

    let pdk = &lib.pdk;
    let mut elems = Vec::new();

    let m = params.fingers;
    let la = params.length;
    let wa = params.width;
    let cw = params.cathode_width;
    let pitch = cw + wa + 2 * rules.comp_spacing;

    // m+1 cathode straps interleaved with m anode straps. Cathode comps
    // carry the N+ implant and the Schottky marker; anode comps are bare.
    for k in 0..=m {
        let cath = rect(cw, la).with_xmin(k * pitch);
        draw_rect(&mut elems, pdk.comp(), &cath);
        draw_rect(&mut elems, pdk.nplus(), &cath.grow(rules.np_enc_comp));
        draw_via_stack(&mut elems, pdk.contact(), pdk.metal1(), &cath, &rules.contact, None)?;
    }

    for j in 0..m {
        let anode = rect(wa, la).with_xmin(cw + rules.comp_spacing + j * pitch);
        draw_rect(&mut elems, pdk.comp(), &anode);
        let label = if m == 1 {
            params.labels.as_ref().map(|l| l.p.as_str())
        } else {
            None
        };
        draw_via_stack(
            &mut elems,
            pdk.contact(),
            pdk.metal1(),
            &anode,
            &rules.contact,
            label,
        )?;
    }

    let array_xmax = m * pitch + cw;

    // Cathode bus below the straps, abutting every cathode cap at y = 0.
    let cathode_bus = Rect {
        p0: Point::new(0, -rules.m1_width),
        p1: Point::new(array_xmax, 0),
    };
    elems.push(Element {
        net: params.labels.as_ref().map(|l| l.n.clone()),
        layer: pdk.metal1(),
        purpose: LayerPurpose::Drawing,
        inner: Shape::Rect(cathode_bus),
    });

    // Anode bus above the straps; a single finger keeps its label on the
    // strap cap instead.
    if m > 1 {
        let anode_bus = Rect {
            p0: Point::new(cw + rules.comp_spacing, la),
            p1: Point::new(
                cw + rules.comp_spacing + (m - 1) * pitch + wa,
                la + rules.m1_width,
            ),
        };
        elems.push(Element {
            net: params.labels.as_ref().map(|l| l.p.clone()),
            layer: pdk.metal1(),
            purpose: LayerPurpose::Drawing,
            inner: Shape::Rect(anode_bus),
        });
    }

    // Schottky marker and deep n-well wrap the implant extent of the array.
    let implant_extent = Rect {
        p0: Point::new(-rules.np_enc_comp, -rules.np_enc_comp),
        p1: Point::new(array_xmax + rules.np_enc_comp, la + rules.np_enc_comp),
    };
    draw_rect(
        &mut elems,
        pdk.schottky_diode(),
        &implant_extent.grow(rules.marker_enc),
    );

    let dn = Rect {
        p0: Point::new(implant_extent.xmin() - rules.dn_enc, -rules.dn_enc),
        p1: Point::new(implant_extent.xmax() + rules.dn_enc, la + rules.dn_enc),
    };
    draw_rect(&mut elems, pdk.dnwell(), &dn);

    if params.guard_ring {
        let gr = &rules.guard_ring;
        draw_guard_ring(
            &mut elems,
            &GuardRingLayers {
                comp: pdk.comp(),
                implant: pdk.pplus(),
                metal: pdk.metal1(),
                contact: pdk.contact(),
            },
            &GuardRingParams {
                enclosed: dn,
                enclosure: gr.enclosure,
                width: gr.width,
                implant_enc: gr.implant_enc,
                label: None,
            },
            &rules.contact,
        )?;
    }

    Ok(lib.commit_cell(finish_cell("sc_diode_dev", elems)))
}
