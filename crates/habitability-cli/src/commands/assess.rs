use std::io::{self, BufRead, Write};

use habitability::{
    Assessment, AssessmentConfig, AssessmentInput, AtmosphereAssessment, RotationAssessment,
    fields,
};
use planetary::AtmosphereComposition;
use units::{Length, Mass};

use crate::commands::AssessArgs;
use crate::terminal::print::{self, Output};
use crate::terminal::prompt::value_or_prompt;

pub fn assess(args: AssessArgs, cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut prompts: Box<dyn Write> = if out.is_json() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };

    let input = collect_input(&args, &mut input, &mut prompts)?;
    let assessment = habitability::assess(&input, cfg)?;

    report(&assessment, out);
    out.emit(&assessment)
}

/// Fill every input from flags, prompting for the ones left out.
pub fn collect_input<R: BufRead, W: Write>(
    args: &AssessArgs,
    input: &mut R,
    output: &mut W,
) -> anyhow::Result<AssessmentInput> {
    let absolute_magnitude =
        value_or_prompt(args.magnitude, &fields::ABSOLUTE_MAGNITUDE, input, output)?;
    let distance = value_or_prompt(args.distance, &fields::ORBITAL_DISTANCE, input, output)?;
    let mass = value_or_prompt(args.mass, &fields::STELLAR_MASS, input, output)?;
    let o2 = value_or_prompt(args.o2, &fields::OXYGEN_PERCENT, input, output)?;
    let co2 = value_or_prompt(args.co2, &fields::CO2_PERCENT, input, output)?;

    Ok(AssessmentInput {
        absolute_magnitude,
        orbital_distance: Length::from_au(distance),
        star_mass: Mass::from_solar_masses(mass),
        atmosphere: AtmosphereComposition::new(o2, co2)?,
    })
}

fn report(assessment: &Assessment, out: &Output) {
    let star = &assessment.star;
    out.section("star");
    out.aligned_line("Luminosity", format!("{:.4} L☉", star.luminosity));
    out.aligned_line("Zone model", star.habitable_zone.model);
    out.aligned_line("Inner edge", print::au(star.habitable_zone.inner_edge.to_au()));
    out.aligned_line("Outer edge", print::au(star.habitable_zone.outer_edge.to_au()));
    out.verdict(
        "In habitable zone",
        if star.in_habitable_zone { "yes" } else { "no" },
        star.in_habitable_zone,
    );

    out.section("rotation");
    let favorable = assessment.rotation.is_favorable();
    match &assessment.rotation {
        RotationAssessment::Heuristic(r) => {
            out.aligned_line("Model", "heuristic");
            out.aligned_line("Rotation difference", format!("{:.2} days", r.difference_days));
            out.verdict("Rotation", r.verdict, favorable);
        }
        RotationAssessment::Kepler(s) => {
            out.aligned_line("Model", "kepler");
            out.aligned_line("Orbital period", format!("{:.4e} s", s.orbital_period.to_seconds()));
            out.aligned_line("ΔP/P", format!("{:.4}", s.ratio));
            out.verdict("Synchronization", s.verdict, favorable);
        }
    }

    out.section("atmosphere");
    let favorable = assessment.atmosphere.is_favorable();
    match &assessment.atmosphere {
        AtmosphereAssessment::Categorical { category } => {
            out.aligned_line("Model", "categorical");
            out.verdict("Survival", category, favorable);
        }
        AtmosphereAssessment::HazardIndex(h) => {
            out.aligned_line("Model", "hazard-index");
            out.aligned_line("O2 risk", format!("{:.4}", h.oxygen_risk));
            out.aligned_line("CO2 risk", format!("{:.4}", h.co2_risk));
            out.aligned_line("Hazard index", format!("{:.4}", h.total));
            out.verdict("Survival", h.verdict, favorable);
        }
    }

    out.separator();
    let habitable = assessment.is_habitable();
    out.verdict(
        "Habitable",
        if habitable { "yes" } else { "no" },
        habitable,
    );
}
