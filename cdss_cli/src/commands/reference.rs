//! The `reference` subcommand: lookup tables.

use anyhow::Result;
use cdss_api::types::ReferenceTableKind;
use cdss_api::{Client, ReferenceTableQuery};
use clap::Args;

use crate::output::{build_reference_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct ReferenceArgs {
    /// Table: county, waterdistricts, waterdivisions, designatedbasins,
    /// managementdistricts, telemetryparams, climateparams, divrectypes, flags
    pub table: ReferenceTableKind,

    /// Water division (waterdistricts and waterdivisions)
    #[arg(long)]
    pub division: Option<i64>,

    /// Water district (waterdistricts)
    #[arg(long)]
    pub water_district: Option<i64>,

    /// Name filter for tables that have one
    #[arg(long)]
    pub name: Option<String>,
}

pub fn run(args: &ReferenceArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = ReferenceTableQuery::new(args.table);
    if let Some(division) = args.division {
        query = query.with_division(division);
    }
    if let Some(water_district) = args.water_district {
        query = query.with_water_district(water_district);
    }
    if let Some(name) = &args.name {
        query = query.with_name(name);
    }

    let rows = client.get_reference_table(&query)?;
    eprintln!("{} rows in {}", rows.len(), args.table);

    match format {
        OutputFormat::Json => print_json(&rows),
        _ => print_rows(build_reference_rows(&rows), format)?,
    }
    Ok(())
}
