//! The `wells` subcommand: water-level and geophysical log wells, or the
//! measurements of one well.

use anyhow::Result;
use cdss_api::{Client, WellMeasurementQuery, WellQuery};
use chrono::NaiveDate;
use clap::Args;

use crate::output::{
    build_measurement_rows, build_well_rows, print_json, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct WellsArgs {
    /// List wells with geophysical logs instead of water-level wells
    #[arg(long, conflicts_with = "measurements")]
    pub geophysical: bool,

    /// Show the water-level measurements of this well ID
    #[arg(long)]
    pub measurements: Option<String>,

    /// County name
    #[arg(long)]
    pub county: Option<String>,

    /// Designated ground water basin
    #[arg(long)]
    pub designated_basin: Option<String>,

    /// Ground water management district
    #[arg(long)]
    pub management_district: Option<String>,

    /// Water division (1-7)
    #[arg(long)]
    pub division: Option<i64>,

    /// Water district
    #[arg(long)]
    pub water_district: Option<i64>,

    /// First measurement date (YYYY-MM-DD)
    #[arg(long, requires = "measurements")]
    pub since: Option<NaiveDate>,

    /// Last measurement date (YYYY-MM-DD)
    #[arg(long, requires = "measurements")]
    pub until: Option<NaiveDate>,
}

pub fn run(args: &WellsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    if let Some(well_id) = &args.measurements {
        let mut query = WellMeasurementQuery::new(well_id);
        if let Some(since) = args.since {
            query = query.with_start_date(since);
        }
        if let Some(until) = args.until {
            query = query.with_end_date(until);
        }
        let measurements = client.get_well_measurements(&query)?;
        eprintln!("{} measurements", measurements.len());
        match format {
            OutputFormat::Json => print_json(&measurements),
            _ => print_rows(build_measurement_rows(&measurements), format)?,
        }
        return Ok(());
    }

    let mut query = WellQuery::default();
    if let Some(county) = &args.county {
        query = query.with_county(county);
    }
    if let Some(designated_basin) = &args.designated_basin {
        query = query.with_designated_basin(designated_basin);
    }
    if let Some(management_district) = &args.management_district {
        query = query.with_management_district(management_district);
    }
    if let Some(division) = args.division {
        query = query.with_division(division);
    }
    if let Some(water_district) = args.water_district {
        query = query.with_water_district(water_district);
    }

    let wells = if args.geophysical {
        client.get_geophysical_log_wells(&query)?
    } else {
        client.get_water_level_wells(&query)?
    };
    eprintln!("{} wells", wells.len());

    match format {
        OutputFormat::Json => print_json(&wells),
        _ => print_rows(build_well_rows(&wells), format)?,
    }
    Ok(())
}
