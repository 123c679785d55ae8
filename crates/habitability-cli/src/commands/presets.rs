use habitability::{AssessmentConfig, AtmosphereModel, RotationModel};
use planetary::solar_system::{self, ReferenceBody};
use planetary::{SyncAssessment, assess_periods};
use serde::Serialize;
use stellar::{HabitableZone, StellarReference, ZoneModel, reference};

use crate::terminal::print::{self, Output};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StarRow {
    #[serde(flatten)]
    star: StellarReference,
    habitable_zone: HabitableZone,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PlanetRow {
    #[serde(flatten)]
    body: ReferenceBody,
    synchronization: SyncAssessment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Presets<'a> {
    config: &'a AssessmentConfig,
    stars: Vec<StarRow>,
    planets: Vec<PlanetRow>,
}

fn marker(selected: bool) -> &'static str {
    if selected { "(selected)" } else { "" }
}

/// One table row: mass, semi-major axis, temperature and ΔP/P.
pub(crate) fn planet_summary(body: &ReferenceBody, ratio: f64) -> String {
    format!(
        "{:>8.2} M⊕ {:>10} {:>8.2} K  ΔP/P {:.4}",
        body.mass.to_earth_masses(),
        print::au(body.semi_major_axis.to_au()),
        body.mean_temperature.to_kelvin(),
        ratio,
    )
}

pub fn presets(cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    out.section("zone models");
    for model in ZoneModel::ALL {
        out.aligned_line(model.name(), marker(model == cfg.zone_model));
    }
    out.section("rotation models");
    for model in [RotationModel::Heuristic, RotationModel::Kepler] {
        out.aligned_line(model.name(), marker(model == cfg.rotation_model));
    }
    out.section("atmosphere models");
    for model in [AtmosphereModel::Categorical, AtmosphereModel::HazardIndex] {
        out.aligned_line(model.name(), marker(model == cfg.atmosphere_model));
    }

    out.section(&format!("reference stars ({} zone)", cfg.zone_model));
    let mut stars = Vec::new();
    for star in reference::all() {
        let habitable_zone = star.habitable_zone(cfg.zone_model)?;
        out.aligned_line(
            &star.class.to_string(),
            format!(
                "{:>6} M☉ {:>7} K {:>9} L☉  {} - {}",
                star.mass.to_solar_masses(),
                star.temperature.to_kelvin(),
                star.luminosity,
                print::au(habitable_zone.inner_edge.to_au()),
                print::au(habitable_zone.outer_edge.to_au()),
            ),
        );
        stars.push(StarRow {
            star: *star,
            habitable_zone,
        });
    }

    out.section("solar system");
    let mut planets = Vec::new();
    for body in solar_system::PLANETS.iter() {
        let synchronization = assess_periods(body.rotation_period, body.orbital_period, &cfg.sync)?;
        out.aligned_line(body.name, planet_summary(body, synchronization.ratio));
        planets.push(PlanetRow {
            body: *body,
            synchronization,
        });
    }

    out.emit(&Presets {
        config: cfg,
        stars,
        planets,
    })
}
