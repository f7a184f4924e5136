//! The `stations` subcommand: surface water, telemetry and climate stations.

use anyhow::Result;
use cdss_api::{Client, ClimateStationQuery, SurfaceWaterStationQuery, TelemetryStationQuery};
use clap::{Args, ValueEnum};

use super::AoiArgs;
use crate::output::{
    build_climate_station_rows, build_station_rows, print_json, print_rows, OutputFormat,
};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StationSource {
    Surface,
    Telemetry,
    Climate,
}

#[derive(Args)]
pub struct StationsArgs {
    /// Station network: surface, telemetry or climate
    #[arg(long, value_enum, default_value = "telemetry")]
    pub source: StationSource,

    /// Station abbreviation (surface and telemetry only)
    #[arg(long)]
    pub abbrev: Option<String>,

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

pub fn run(args: &StationsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let aoi = args.area.aoi()?;

    if args.source == StationSource::Climate {
        let mut query = ClimateStationQuery::default();
        if let Some(county) = &args.county {
            query = query.with_county(county);
        }
        if let Some(division) = args.division {
            query = query.with_division(division);
        }
        if let Some(water_district) = args.water_district {
            query = query.with_water_district(water_district);
        }
        if let Some(aoi) = aoi {
            query = query.with_aoi(aoi);
        }
        if let Some(radius) = args.area.radius {
            query = query.with_radius(radius);
        }
        let stations = client.get_climate_stations(&query)?;
        eprintln!("{} climate stations", stations.len());
        return match format {
            OutputFormat::Json => {
                print_json(&stations);
                Ok(())
            }
            _ => print_rows(build_climate_station_rows(&stations), format),
        };
    }

    let stations = if args.source == StationSource::Surface {
        let mut query = SurfaceWaterStationQuery::default();
        if let Some(abbrev) = &args.abbrev {
            query = query.with_abbrev(abbrev);
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
        if let Some(aoi) = aoi {
            query = query.with_aoi(aoi);
        }
        if let Some(radius) = args.area.radius {
            query = query.with_radius(radius);
        }
        client.get_sw_stations(&query)?
    } else {
        let mut query = TelemetryStationQuery::default();
        if let Some(abbrev) = &args.abbrev {
            query = query.with_abbrev(abbrev);
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
        if let Some(aoi) = aoi {
            query = query.with_aoi(aoi);
        }
        if let Some(radius) = args.area.radius {
            query = query.with_radius(radius);
        }
        client.get_telemetry_stations(&query)?
    };

    eprintln!("{} stations", stations.len());
    match format {
        OutputFormat::Json => print_json(&stations),
        _ => print_rows(build_station_rows(&stations), format)?,
    }
    Ok(())
}
