//! Well diode generators: LVPWELL/DNWELL and DNWELL/Psub.
//!
//! Both pick between a solid via-stack well tap and a tap ring, depending
//! on whether the well is large enough to hold a ring with its opening.

use layout21::raw::{Cell, Point, Rect};
use layout21::utils::Ptr;

use crate::contact::draw_via_stack;
use crate::diode::{
    draw_rect, finish_cell, ContactTopology, DiodeError, DiodeParams, DiodeResult, Volt,
};
use crate::geometry::{rect, RectExt};
use crate::ring::{
    draw_guard_ring, draw_ring, draw_ring_taps, GuardRingLayers, GuardRingParams, Ring,
};
use crate::tech::gf180::layers::Gf180Pdk;
use crate::tech::gf180::rules::{Dw2psRules, Pw2dwRules};
use crate::PdkLib;

/// Draws the LVPWELL/DNWELL diode cell `diode_pw2dw_dev`.
pub fn draw_diode_pw2dw(lib: &mut PdkLib, params: &DiodeParams) -> DiodeResult<Ptr<Cell>> {
    draw_diode_pw2dw_with_rules(lib, params, &Pw2dwRules::default())
}

pub fn draw_diode_pw2dw_with_rules(
    lib: &mut PdkLib,
    params: &DiodeParams,
    rules: &Pw2dwRules,
) -> DiodeResult<Ptr<Cell>> {
    params.validate()?;
    log::info!("generating diode_pw2dw_dev ({})", params.volt);

    let pdk = &lib.pdk;
    let mut elems = Vec::new();

    let lvpwell = rect(params.width, params.length);
    draw_rect(&mut elems, pdk.lvpwell(), &lvpwell);
    draw_rect(&mut elems, pdk.well_diode_mk(), &lvpwell);

    // The P+ tap region: the well interior after well enclosure.
    let tap = lvpwell.shrink(rules.lvpwell_enc_pcmp);
    if tap.width() <= 0 || tap.height() <= 0 {
        return Err(DiodeError::DegenerateRect {
            width: tap.width(),
            height: tap.height(),
        });
    }

    let topology = ContactTopology::select(
        params.width,
        params.length,
        rules.ring_width,
        rules.comp_spacing,
        rules.lvpwell_enc_pcmp,
    );

    match topology {
        ContactTopology::Solid => {
            let pplus = tap.grow(rules.pp_enc_comp);
            draw_rect(&mut elems, pdk.comp(), &tap);
            draw_rect(&mut elems, pdk.pplus(), &pplus);
            draw_via_stack(
                &mut elems,
                pdk.contact(),
                pdk.metal1(),
                &tap,
                &rules.contact,
                params.labels.as_ref().map(|l| l.p.as_str()),
            )?;
        }
        ContactTopology::Ring => {
            let ring = Ring::from_inner(tap.shrink(rules.ring_width), rules.ring_width)?;
            draw_ring(&mut elems, pdk.comp(), &ring, None);

            let implant = Ring::from_inner(
                ring.inner().shrink(rules.pp_enc_comp),
                rules.ring_width + 2 * rules.pp_enc_comp,
            )?;
            draw_ring(&mut elems, pdk.pplus(), &implant, None);

            draw_ring_taps(&mut elems, pdk.contact(), &ring, &rules.contact)?;
            draw_ring(
                &mut elems,
                pdk.metal1(),
                &ring,
                params.labels.as_ref().map(|l| l.p.as_str()),
            );
        }
    }

    // Cathode tap to the left; both topologies leave the same tap extent.
    let ncmp = rect(params.cathode_width, tap.height())
        .with_ycenter(lvpwell.ycenter())
        .with_xmax(tap.xmin() - rules.comp_spacing);
    let nplus = ncmp.grow(rules.np_enc_comp);
    draw_rect(&mut elems, pdk.comp(), &ncmp);
    draw_rect(&mut elems, pdk.nplus(), &nplus);
    draw_via_stack(
        &mut elems,
        pdk.contact(),
        pdk.metal1(),
        &ncmp,
        &rules.contact,
        params.labels.as_ref().map(|l| l.n.as_str()),
    )?;

    let dn = Rect {
        p0: Point::new(
            nplus.xmin() - rules.dn_enc_lvpwell,
            lvpwell.ymin() - rules.dn_enc_lvpwell,
        ),
        p1: Point::new(
            lvpwell.xmax() + rules.dn_enc_lvpwell,
            lvpwell.ymax() + rules.dn_enc_lvpwell,
        ),
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
                enclosed: dn.clone(),
                enclosure: gr.enclosure,
                width: gr.width,
                implant_enc: gr.implant_enc,
                label: None,
            },
            &rules.contact,
        )?;
    }

    if params.volt == Volt::V5_6 {
        draw_rect(&mut elems, pdk.dualgate(), &dn.grow(rules.dg_enc_dn));
    }

    Ok(lib.commit_cell(finish_cell("diode_pw2dw_dev", elems)))
}

/// Draws the DNWELL/Psub diode cell `diode_dw2ps_dev`.
///
/// The N-terminal taps the deep n-well itself; its width doubles as the
/// tap-ring width. The P terminal is the substrate, contacted only by the
/// optional guard ring.
pub fn draw_diode_dw2ps(lib: &mut PdkLib, params: &DiodeParams) -> DiodeResult<Ptr<Cell>> {
    draw_diode_dw2ps_with_rules(lib, params, &Dw2psRules::default())
}

pub fn draw_diode_dw2ps_with_rules(
    lib: &mut PdkLib,
    params: &DiodeParams,
    rules: &Dw2psRules,
) -> DiodeResult<Ptr<Cell>> {
    params.validate()?;
    log::info!("generating diode_dw2ps_dev ({})", params.volt);

    let pdk = &lib.pdk;
    let mut elems = Vec::new();

    let dn = rect(params.width, params.length);
    draw_rect(&mut elems, pdk.dnwell(), &dn);
    draw_rect(&mut elems, pdk.well_diode_mk(), &dn);

    let enc = rules.dn_enc_ncmp(params.volt);
    let cw = params.cathode_width;

    let topology =
        ContactTopology::select(params.width, params.length, cw, rules.comp_spacing, enc);

    match topology {
        ContactTopology::Solid => {
            let ncmp = rect(cw, params.length - 2 * enc).with_center(dn.xcenter(), dn.ycenter());
            if ncmp.height() <= 0 {
                return Err(DiodeError::DegenerateRect {
                    width: ncmp.width(),
                    height: ncmp.height(),
                });
            }
            draw_rect(&mut elems, pdk.comp(), &ncmp);
            draw_rect(&mut elems, pdk.nplus(), &ncmp.grow(rules.np_enc_comp));
            draw_via_stack(
                &mut elems,
                pdk.contact(),
                pdk.metal1(),
                &ncmp,
                &rules.contact,
                params.labels.as_ref().map(|l| l.n.as_str()),
            )?;
        }
        ContactTopology::Ring => {
            let outer = dn.shrink(enc);
            let ring = Ring::from_inner(outer.shrink(cw), cw)?;
            draw_ring(&mut elems, pdk.comp(), &ring, None);

            let implant = Ring::from_inner(
                ring.inner().shrink(rules.np_enc_comp),
                cw + 2 * rules.np_enc_comp,
            )?;
            draw_ring(&mut elems, pdk.nplus(), &implant, None);

            draw_ring_taps(&mut elems, pdk.contact(), &ring, &rules.contact)?;
            draw_ring(
                &mut elems,
                pdk.metal1(),
                &ring,
                params.labels.as_ref().map(|l| l.n.as_str()),
            );
        }
    }

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
                enclosed: dn.clone(),
                enclosure: gr.enclosure,
                width: gr.width,
                implant_enc: gr.implant_enc,
                label: params.labels.as_ref().map(|l| l.p.clone()),
            },
            &rules.contact,
        )?;
    }

    if params.volt == Volt::V5_6 {
        draw_rect(&mut elems, pdk.dualgate(), &dn.grow(rules.dg_enc_dn));
    }

    Ok(lib.commit_cell(finish_cell("diode_dw2ps_dev", elems)))
}
