//! The `water-rights` subcommand.

use anyhow::Result;
use cdss_api::{Client, WaterRightQuery};
use clap::Args;

use super::AoiArgs;
use crate::output::{build_water_right_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct WaterRightsArgs {
    /// List court transactions instead of net amounts
    #[arg(long)]
    pub transactions: bool,

    /// Structure WDID
    #[arg(long)]
    pub wdid: Option<String>,

    /// County name
    #[arg(long)]
    pub county: Option<String>,

    /// Water division (1-7)
    #[arg(long)]
    pub division: Option<i64>,

    /// Water district
    #[arg(long)]
    pub water_district: Option<i64>,

    #[command(flatten)]
    pub area: AoiArgs,
}

pub fn run(args: &WaterRightsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = WaterRightQuery::default();
    if let Some(wdid) = &args.wdid {
        query = query.with_wdid(wdid);
    }
    if let Some(county) = &args.county {
        query = query.with_county(county);
    }
    if let Some(division) = args.division {
        query = query.with_division(division);
    }
    if let Some(water_district) = args.water_district {
        query = query.with_water_district(water_district);
    }
    if let Some(aoi) = args.area.aoi()? {
        query = query.with_aoi(aoi);
    }
    if let Some(radius) = args.area.radius {
        query = query.with_radius(radius);
    }

    let rights = if args.transactions {
        client.get_water_rights_transactions(&query)?
    } else {
        client.get_water_rights_net_amounts(&query)?
    };
    eprintln!("{} water rights", rights.len());

    match format {
        OutputFormat::Json => print_json(&rights),
        _ => print_rows(build_water_right_rows(&rights), format)?,
    }
    Ok(())
}
