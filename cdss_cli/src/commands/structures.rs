//! The `structures` subcommand.

use anyhow::Result;
use cdss_api::{Client, StructureQuery};
use clap::Args;

use super::AoiArgs;
use crate::output::{build_structure_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct StructuresArgs {
    /// Structure WDIDs (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub wdid: Vec<String>,

    /// County name
    #[arg(long)]
    pub county: Option<String>,

    /// Water division (1-7)
    #[arg(long)]
    pub division: Option<i64>,

    /// Water district
    #[arg(long)]
    pub water_district: Option<i64>,

    /// GNIS ID of the water source
    #[arg(long)]
    pub gnis_id: Option<String>,

    #[command(flatten)]
    pub area: AoiArgs,
}

pub fn run(args: &StructuresArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = StructureQuery::default().with_wdids(&args.wdid);
    if let Some(county) = &args.county {
        query = query.with_county(county);
    }
    if let Some(division) = args.division {
        query = query.with_division(division);
    }
    if let Some(water_district) = args.water_district {
        query = query.with_water_district(water_district);
    }
    if let Some(gnis_id) = &args.gnis_id {
        query = query.with_gnis_id(gnis_id);
    }
    if let Some(aoi) = args.area.aoi()? {
        query = query.with_aoi(aoi);
    }
    if let Some(radius) = args.area.radius {
        query = query.with_radius(radius);
    }

    let structures = client.get_structures(&query)?;
    eprintln!("{} structures", structures.len());

    match format {
        OutputFormat::Json => print_json(&structures),
        _ => print_rows(build_structure_rows(&structures), format)?,
    }
    Ok(())
}
