//! The `readings` subcommand: time series for one station.

use anyhow::{bail, Result};
use cdss_api::types::{ClimateParameter, Timescale};
use cdss_api::{Client, ClimateTsQuery, FrostDatesQuery, SurfaceWaterTsQuery, TelemetryTsQuery};
use chrono::NaiveDate;
use clap::Args;

use super::stations::StationSource;
use crate::output::{
    build_climate_reading_rows, build_reading_rows, print_json, print_rows, OutputFormat,
};

#[derive(Args)]
pub struct ReadingsArgs {
    /// Station network: surface, telemetry or climate
    #[arg(long, value_enum, default_value = "telemetry")]
    pub source: StationSource,

    /// Station abbreviation (surface and telemetry)
    #[arg(long)]
    pub abbrev: Option<String>,

    /// Station number (surface water or climate)
    #[arg(long)]
    pub station: Option<String>,

    /// Telemetry parameter (e.g. DISCHRG, GAGE_HT) or climate measurement
    /// type (e.g. MaxTemp, Precip, FrostDate)
    #[arg(long)]
    pub parameter: Option<String>,

    /// Timescale: day, month, year, hour or raw, depending on the source.
    /// Surface water also takes wy / water_year
    #[arg(long, default_value = "day")]
    pub timescale: String,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,
}

pub fn run(args: &ReadingsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let timescale = match args.source {
        StationSource::Surface => Timescale::parse_water_year(&args.timescale)?,
        _ => args.timescale.parse::<Timescale>()?,
    };

    if args.source == StationSource::Climate {
        let parameter: ClimateParameter = match &args.parameter {
            Some(parameter) => parameter.parse()?,
            None => bail!("--parameter is required for climate readings"),
        };
        let readings = if parameter == ClimateParameter::FrostDate {
            let Some(station) = &args.station else {
                bail!("--station is required for frost dates");
            };
            let mut query = FrostDatesQuery::new(station);
            if let Some(since) = args.since {
                query = query.with_start_date(since);
            }
            if let Some(until) = args.until {
                query = query.with_end_date(until);
            }
            client.get_climate_frost_dates(&query)?
        } else {
            let mut query = ClimateTsQuery::new(parameter).with_timescale(timescale);
            if let Some(station) = &args.station {
                query = query.with_station_number(station);
            }
            if let Some(since) = args.since {
                query = query.with_start_date(since);
            }
            if let Some(until) = args.until {
                query = query.with_end_date(until);
            }
            client.get_climate_ts(&query)?
        };
        eprintln!("{} readings", readings.len());
        return match format {
            OutputFormat::Json => {
                print_json(&readings);
                Ok(())
            }
            _ => print_rows(build_climate_reading_rows(&readings), format),
        };
    }

    let readings = if args.source == StationSource::Surface {
        let mut query = SurfaceWaterTsQuery::default().with_timescale(timescale);
        if let Some(abbrev) = &args.abbrev {
            query = query.with_abbrev(abbrev);
        }
        if let Some(station) = &args.station {
            query = query.with_station_number(station);
        }
        if let Some(since) = args.since {
            query = query.with_start_date(since);
        }
        if let Some(until) = args.until {
            query = query.with_end_date(until);
        }
        client.get_sw_ts(&query)?
    } else {
        let Some(abbrev) = &args.abbrev else {
            bail!("--abbrev is required for telemetry readings");
        };
        let mut query = TelemetryTsQuery::new(abbrev).with_timescale(timescale);
        if let Some(parameter) = &args.parameter {
            query = query.with_parameter(parameter);
        }
        if let Some(since) = args.since {
            query = query.with_start_date(since);
        }
        if let Some(until) = args.until {
            query = query.with_end_date(until);
        }
        client.get_telemetry_ts(&query)?
    };

    eprintln!("{} readings", readings.len());
    match format {
        OutputFormat::Json => print_json(&readings),
        _ => print_rows(build_reading_rows(&readings), format)?,
    }
    Ok(())
}
