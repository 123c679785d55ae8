use anyhow::{Context, bail};
use habitability::AssessmentConfig;
use planetary::rotation::initial_spin_period;
use planetary::{
    AtmosphereCategory, AtmosphereComposition, HazardIndex, SyncAssessment, assess_periods,
    assess_synchronization, categorize, hazard_index, rotation_difference, solar_system,
};
use serde::Serialize;
use stellar::{HabitableZone, reference};
use units::{Length, Mass, Time};

use crate::commands::{AtmosphereArgs, RotationArgs, StarArgs, SyncArgs};
use crate::terminal::print::{self, Output};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StarReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    class: Option<String>,
    luminosity: f64,
    habitable_zone: HabitableZone,
    #[serde(skip_serializing_if = "Option::is_none")]
    in_habitable_zone: Option<bool>,
}

pub fn star(args: StarArgs, cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    let (class, luminosity, habitable_zone) = match (&args.class, args.magnitude) {
        (Some(designation), _) => {
            let entry = reference::lookup(designation)?
                .with_context(|| format!("no reference star for class {}", designation))?;
            (
                Some(entry.class.to_string()),
                entry.luminosity,
                entry.habitable_zone(cfg.zone_model)?,
            )
        }
        (None, Some(magnitude)) => {
            let luminosity = stellar::from_absolute_magnitude(magnitude)?;
            (
                None,
                luminosity,
                HabitableZone::from_luminosity(luminosity, cfg.zone_model)?,
            )
        }
        (None, None) => bail!("either --magnitude or --class is required"),
    };

    let in_habitable_zone = match args.distance {
        Some(d) => {
            let distance = Length::from_au(d);
            distance.positive_au("orbital distance")?;
            Some(habitable_zone.contains(distance))
        }
        None => None,
    };

    if let Some(class) = &class {
        out.aligned_line("Spectral class", class);
    }
    out.aligned_line("Luminosity", format!("{:.4} L☉", luminosity));
    out.aligned_line("Zone model", habitable_zone.model);
    out.aligned_line("Inner edge", print::au(habitable_zone.inner_edge.to_au()));
    out.aligned_line("Outer edge", print::au(habitable_zone.outer_edge.to_au()));
    out.aligned_line("Width", print::au(habitable_zone.width().to_au()));
    if let Some(inside) = in_habitable_zone {
        out.verdict("In habitable zone", if inside { "yes" } else { "no" }, inside);
    }

    out.emit(&StarReport {
        class,
        luminosity,
        habitable_zone,
        in_habitable_zone,
    })
}

pub fn rotation(args: RotationArgs, cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    let result = rotation_difference(Mass::from_solar_masses(args.mass), &cfg.heuristic_rotation)?;

    out.aligned_line("Stellar mass", format!("{} M☉", args.mass));
    out.aligned_line("Rotation difference", format!("{:.2} days", result.difference_days));
    out.verdict(
        "Rotation",
        result.verdict,
        result.verdict == planetary::HeuristicVerdict::Possible,
    );
    out.emit(&result)
}

pub fn sync(args: SyncArgs, cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    let assessment = sync_assessment(&args, cfg)?;

    out.aligned_line("Rotation period", format!("{:.4} days", assessment.rotation_period.to_days()));
    out.aligned_line("Orbital period", format!("{:.4} days", assessment.orbital_period.to_days()));
    out.aligned_line("ΔP/P", format!("{:.4}", assessment.ratio));
    out.verdict(
        "Synchronization",
        assessment.verdict,
        assessment.verdict.is_survivable(),
    );
    out.emit(&assessment)
}

fn sync_assessment(args: &SyncArgs, cfg: &AssessmentConfig) -> anyhow::Result<SyncAssessment> {
    if let Some(name) = &args.planet {
        let body = solar_system::lookup(name).with_context(|| format!("unknown planet {}", name))?;
        return Ok(assess_periods(body.rotation_period, body.orbital_period, &cfg.sync)?);
    }

    match (args.mass, args.radius, args.orbital_days) {
        (_, _, Some(orbital_days)) => {
            let rotation = args
                .rotation_days
                .map(Time::from_days)
                .unwrap_or_else(initial_spin_period);
            Ok(assess_periods(rotation, Time::from_days(orbital_days), &cfg.sync)?)
        }
        (Some(mass), Some(radius), None) => Ok(assess_synchronization(
            Length::from_au(radius),
            Mass::from_solar_masses(mass),
            &cfg.sync,
        )?),
        _ => bail!("pass --mass and --radius, --orbital-days, or --planet"),
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AtmosphereReport {
    composition: AtmosphereComposition,
    category: AtmosphereCategory,
    hazard: HazardIndex,
}

pub fn atmosphere(args: AtmosphereArgs, cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    let composition = match (&args.planet, args.o2, args.co2) {
        (Some(name), _, _) => {
            solar_system::lookup(name)
                .with_context(|| format!("unknown planet {}", name))?
                .atmosphere
        }
        (None, Some(o2), Some(co2)) => AtmosphereComposition::new(o2, co2)?,
        _ => bail!("pass --o2 and --co2, or --planet"),
    };

    let category = categorize(&composition, &cfg.categorical)?;
    let hazard = hazard_index(&composition, &cfg.hazard)?;

    out.aligned_line("O2", format!("{}%", composition.oxygen_percent));
    out.aligned_line("CO2", format!("{}%", composition.co2_percent));
    out.section("categorical");
    out.verdict("Survival", category, category == AtmosphereCategory::Normal);
    out.section("hazard index");
    out.aligned_line("O2 risk", format!("{:.4}", hazard.oxygen_risk));
    out.aligned_line("CO2 risk", format!("{:.4}", hazard.co2_risk));
    out.aligned_line("Hazard index", format!("{:.4}", hazard.total));
    out.verdict(
        "Survival",
        hazard.verdict,
        hazard.verdict == planetary::HazardVerdict::Survivable,
    );

    out.emit(&AtmosphereReport {
        composition,
        category,
        hazard,
    })
}
