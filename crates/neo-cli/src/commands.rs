//! Subcommand implementations.

use anyhow::{Result, bail};
use neo_model::{NearEarthObject, NeoDatabase};

use crate::cli::{Cli, ExportArgs, InspectArgs};
use crate::pipeline::{export_all, load_database};

pub fn run_inspect(cli: &Cli, args: &InspectArgs) -> Result<()> {
    let database = load_database(&cli.neo_csv, &cli.cad_json)?;
    let neo = find_neo(&database, args)?;
    println!("{neo}");
    if args.approaches {
        for approach in database.approaches_of(neo) {
            println!("- {approach}");
        }
    }
    Ok(())
}

pub fn run_export(cli: &Cli, args: &ExportArgs) -> Result<()> {
    let database = load_database(&cli.neo_csv, &cli.cad_json)?;
    export_all(&database, &args.outfile)?;
    println!(
        "Wrote {} close approaches to {}",
        database.approaches().len(),
        args.outfile.display()
    );
    Ok(())
}

fn find_neo<'a>(database: &'a NeoDatabase, args: &InspectArgs) -> Result<&'a NearEarthObject> {
    if let Some(designation) = &args.designation {
        match database.get_neo(designation) {
            Some(neo) => Ok(neo),
            None => bail!("no NEO with designation {designation:?}"),
        }
    } else if let Some(name) = &args.name {
        match database.get_neo_by_name(name) {
            Some(neo) => Ok(neo),
            None => bail!("no NEO named {name:?}"),
        }
    } else {
        bail!("provide --designation or --name")
    }
}
