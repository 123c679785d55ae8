mod commands;
mod terminal;

use commands::{CommandLine, Commands, assess, catalog, checks, presets};
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose, commands.quiet, commands.json);
    let cfg = commands.load_config()?;
    let out = print::Output::new(commands.json);

    match commands.command {
        Commands::Assess(args) => {
            out.header("habitability assessment");
            assess::assess(args, &cfg, &out)
        }
        Commands::Star(args) => {
            out.header("luminosity and habitable zone");
            checks::star(args, &cfg, &out)
        }
        Commands::Rotation(args) => {
            out.header("rotation difference");
            checks::rotation(args, &cfg, &out)
        }
        Commands::Sync(args) => {
            out.header("spin-orbit synchronization");
            checks::sync(args, &cfg, &out)
        }
        Commands::Atmosphere(args) => {
            out.header("atmospheric hazard");
            checks::atmosphere(args, &cfg, &out)
        }
        Commands::Catalog(args) => {
            out.header("catalog screening");
            catalog::catalog(args, &cfg, &out)
        }
        Commands::Presets => {
            out.header("reference tables");
            presets::presets(&cfg, &out)
        }
    }
}
