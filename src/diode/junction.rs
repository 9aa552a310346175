//! Junction diode generators: N+/LVPWELL, P+/Nwell, and Nwell/Psub.

use layout21::raw::{Cell, Point, Rect};
use layout21::utils::Ptr;

use crate::contact::draw_via_stack;
use crate::diode::{draw_rect, finish_cell, DiodeError, DiodeParams, DiodeResult, Volt};
use crate::geometry::{rect, RectExt};
use crate::ring::{draw_guard_ring, GuardRingLayers, GuardRingParams};
use crate::tech::gf180::layers::Gf180Pdk;
use crate::tech::gf180::rules::{Nd2psRules, Nw2psRules, Pd2nwRules};
use crate::PdkLib;

/// Draws the N+/LVPWELL diode cell `diode_nd2ps_dev`.
///
/// The N+ junction comp sits at the origin; the P+ well-tap strip lands
/// to its left at the comp spacing. Outside a deep n-well the LVPWELL
/// tracks the junction marker; inside one it encloses both comps and is
/// wrapped by the DNWELL.
pub fn draw_diode_nd2ps(
    lib: &mut PdkLib,
    params: &DiodeParams,
) -> DiodeResult<Ptr<Cell>> {
    draw_diode_nd2ps_with_rules(lib, params, &Nd2psRules::default())
}

pub fn draw_diode_nd2ps_with_rules(
    lib: &mut PdkLib,
    params: &DiodeParams,
    rules: &Nd2psRules,
) -> DiodeResult<Ptr<Cell>> {
    params.validate()?;
    if params.guard_ring && !params.deepnwell {
        return Err(DiodeError::BadParams(
            "guard ring requires a deep n-well device".to_string(),
        ));
    }
    log::info!("generating diode_nd2ps_dev ({})", params.volt);

    let pdk = &lib.pdk;
    let mut elems = Vec::new();

    let ncmp = rect(params.width, params.length);
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

    let pcmp = rect(params.cathode_width, params.length)
        .with_xmax(ncmp.xmin() - rules.comp_spacing);
    let pplus = pcmp.grow(rules.pp_enc_comp);
    draw_rect(&mut elems, pdk.comp(), &pcmp);
    draw_rect(&mut elems, pdk.pplus(), &pplus);
    draw_via_stack(
        &mut elems,
        pdk.contact(),
        pdk.metal1(),
        &pcmp,
        &rules.contact,
        params.labels.as_ref().map(|l| l.p.as_str()),
    )?;

    let marker = pplus.union(&nplus);
    draw_rect(&mut elems, pdk.diode_mk(), &marker);

    if params.deepnwell {
        let lvpwell = Rect {
            p0: Point::new(
                pcmp.xmin() - rules.lvpwell_enc_pcmp,
                ncmp.ymin() - rules.lvpwell_enc_ncmp_dn,
            ),
            p1: Point::new(
                ncmp.xmax() + rules.lvpwell_enc_ncmp_dn,
                ncmp.ymax() + rules.lvpwell_enc_ncmp_dn,
            ),
        };
        draw_rect(&mut elems, pdk.lvpwell(), &lvpwell);

        let dn = lvpwell.grow(rules.dn_enc_lvpwell);
        draw_rect(&mut elems, pdk.dnwell(), &dn);

        if params.volt == Volt::V5_6 {
            draw_rect(&mut elems, pdk.dualgate(), &dn.grow(rules.dg_enc_dn));
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
                    enclosed: dn,
                    enclosure: gr.enclosure,
                    width: gr.width,
                    implant_enc: gr.implant_enc,
                    label: None,
                },
                &rules.contact,
            )?;
        }
    } else {
        if params.volt == Volt::V5_6 {
            draw_rect(
                &mut elems,
                pdk.dualgate(),
                &pcmp.union(&ncmp).grow(rules.dg_enc_comp),
            );
        }
        // Native well: follows the junction marker exactly.
        draw_rect(&mut elems, pdk.lvpwell(), &marker);
    }

    Ok(lib.commit_cell(finish_cell("diode_nd2ps_dev", elems)))
}

/// Draws the P+/Nwell diode cell `diode_pd2nw_dev`.
///
/// Doping mirror of [`draw_diode_nd2ps`]: P+ junction comp at the origin,
/// N+ well-tap strip to the left, and an NWELL that always encloses both.
pub fn draw_diode_pd2nw(
    lib: &mut PdkLib,
    params: &DiodeParams,
) -> DiodeResult<Ptr<Cell>> {
    draw_diode_pd2nw_with_rules(lib, params, &Pd2nwRules::default())
}

pub fn draw_diode_pd2nw_with_rules(
    lib: &mut PdkLib,
    params: &DiodeParams,
    rules: &Pd2nwRules,
) -> DiodeResult<Ptr<Cell>> {
    params.validate()?;
    if params.guard_ring && !params.deepnwell {
        return Err(DiodeError::BadParams(
            "guard ring requires a deep n-well device".to_string(),
        ));
    }
    log::info!("generating diode_pd2nw_dev ({})", params.volt);

    let pdk = &lib.pdk;
    let mut elems = Vec::new();

    let pcmp = rect(params.width, params.length);
    let pplus = pcmp.grow(rules.pp_enc_comp);
    draw_rect(&mut elems, pdk.comp(), &pcmp);
    draw_rect(&mut elems, pdk.pplus(), &pplus);
    draw_rect(&mut elems, pdk.diode_mk(), &pcmp);
    draw_via_stack(
        &mut elems,
        pdk.contact(),
        pdk.metal1(),
        &pcmp,
        &rules.contact,
        params.labels.as_ref().map(|l| l.p.as_str()),
    )?;

    let ncmp = rect(params.cathode_width, params.length)
        .with_xmax(pcmp.xmin() - rules.comp_spacing);
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

    let enc_pcmp = rules.nwell_enc_pcmp(params.volt);
    let nwell = Rect {
        p0: Point::new(
            ncmp.xmin() - rules.nwell_enc_ncmp,
            pcmp.ymin() - enc_pcmp,
        ),
        p1: Point::new(pcmp.xmax() + enc_pcmp, pcmp.ymax() + enc_pcmp),
    };
    draw_rect(&mut elems, pdk.nwell(), &nwell);

    if params.deepnwell {
        let dn = nwell.grow(rules.dn_enc_nwell);
        draw_rect(&mut elems, pdk.dnwell(), &dn);

        if params.volt == Volt::V5_6 {
            draw_rect(&mut elems, pdk.dualgate(), &dn.grow(rules.dg_enc_dn));
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
                    enclosed: dn,
                    enclosure: gr.enclosure,
                    width: gr.width,
                    implant_enc: gr.implant_enc,
                    label: None,
                },
                &rules.contact,
            )?;
        }
    } else if params.volt == Volt::V5_6 {
        draw_rect(
            &mut elems,
            pdk.dualgate(),
            &ncmp.union(&pcmp).grow(rules.dg_enc_comp),
        );
    }

    Ok(lib.commit_cell(finish_cell("diode_pd2nw_dev", elems)))
}

/// Draws the Nwell/Psub diode cell `diode_nw2ps_dev`.
///
/// The NWELL itself is the junction; its N+ tap fills the well interior
/// and the P+ substrate strip lands to the left.
pub fn draw_diode_nw2ps(
    lib: &mut PdkLib,
    params: &DiodeParams,
) -> DiodeResult<Ptr<Cell>> {
    draw_diode_nw2ps_with_rules(lib, params, &Nw2psRules::default())
}

pub fn draw_diode_nw2ps_with_rules(
    lib: &mut PdkLib,
    params: &DiodeParams,
    rules: &Nw2psRules,
) -> DiodeResult<Ptr<Cell>> {
    params.validate()?;
    if params.deepnwell || params.guard_ring {
        return Err(DiodeError::BadParams(
            "nw2ps diodes support neither deep n-well nor guard ring".to_string(),
        ));
    }
    log::info!("generating diode_nw2ps_dev ({})", params.volt);

    let pdk = &lib.pdk;
    let mut elems = Vec::new();

    let nwell = rect(params.width, params.length);
    draw_rect(&mut elems, pdk.nwell(), &nwell);

    let ncmp = nwell.shrink(rules.nwell_enc_ncmp);
    if ncmp.width() <= 0 || ncmp.height() <= 0 {
        return Err(DiodeError::DegenerateRect {
            width: ncmp.width(),
            height: ncmp.height(),
        });
    }
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

    let pcmp = rect(params.cathode_width, ncmp.height())
        .with_ycenter(ncmp.ycenter())
        .with_xmax(ncmp.xmin() - rules.comp_spacing);
    let pplus = pcmp.grow(rules.pp_enc_comp);
    draw_rect(&mut elems, pdk.comp(), &pcmp);
    draw_rect(&mut elems, pdk.pplus(), &pplus);
    draw_via_stack(
        &mut elems,
        pdk.contact(),
        pdk.metal1(),
        &pcmp,
        &rules.contact,
        params.labels.as_ref().map(|l| l.p.as_str()),
    )?;

    let marker = Rect {
        p0: Point::new(pplus.xmin(), nwell.ymin()),
        p1: Point::new(nwell.xmax(), nwell.ymax()),
    };
    draw_rect(&mut elems, pdk.well_diode_mk(), &marker);

    if params.volt == Volt::V5_6 {
        draw_rect(
            &mut elems,
            pdk.dualgate(),
            &pcmp.union(&ncmp).grow(rules.dg_enc_comp),
        );
    }

    Ok(lib.commit_cell(finish_cell("diode_nw2ps_dev", elems)))
}
