use std::fs;

use anyhow::Context;
use habitability::{
    AssessmentConfig, CatalogQuery, MassRange, PeriodConstraints, StaticCatalog, screen_catalog,
};
use tracing::info;

use crate::commands::CatalogArgs;
use crate::terminal::print::{self, Output};

pub fn query_from_args(args: &CatalogArgs) -> CatalogQuery {
    CatalogQuery {
        mass_range: MassRange {
            min: args.min_mass,
            max: args.max_mass,
        },
        period: PeriodConstraints {
            min_days: args.min_period,
            max_days: args.max_period,
        },
        limit: args.limit,
    }
}

pub fn catalog(args: CatalogArgs, cfg: &AssessmentConfig, out: &Output) -> anyhow::Result<()> {
    let raw = fs::read_to_string(&args.file)
        .with_context(|| format!("could not read catalog {}", args.file.display()))?;
    let catalog = StaticCatalog::from_json_str(&raw)?;
    info!("loaded {} catalog rows", catalog.len());

    let screened = screen_catalog(&catalog, &query_from_args(&args), cfg)?;

    for (idx, planet) in screened.iter().enumerate() {
        out.section(&format!("[{}] {}", idx, planet.record.name));
        out.aligned_line(
            "Orbital period",
            format!("{} days", planet.record.orbital_period_days),
        );
        out.aligned_line("Host mass", format!("{} M☉", planet.record.star_mass_solar));
        out.aligned_line(
            "Estimated a",
            print::au(planet.estimated_semi_major_axis.to_au()),
        );
        out.aligned_line("ΔP/P", format!("{:.4}", planet.synchronization.ratio));
        out.verdict(
            "Synchronization",
            planet.synchronization.verdict,
            planet.synchronization.verdict.is_survivable(),
        );
    }

    let survivable = screened
        .iter()
        .filter(|p| p.synchronization.verdict.is_survivable())
        .count();
    out.separator();
    out.aligned_line("Screened", screened.len());
    out.aligned_line("Non-synchronous", survivable);

    out.emit(&screened)
}
