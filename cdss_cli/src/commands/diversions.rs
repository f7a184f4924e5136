//! The `diversions` subcommand: diversion, release and stage/volume records.

use anyhow::Result;
use cdss_api::types::DiversionRecordType;
use cdss_api::{Client, DiversionRecordQuery, StageVolumeQuery};
use chrono::NaiveDate;
use clap::Args;

use crate::output::{build_diversion_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct DiversionsArgs {
    /// Structure WDIDs (comma-separated; stage/volume uses the first)
    #[arg(long, value_delimiter = ',', required = true)]
    pub wdid: Vec<String>,

    /// Record type: day, month, year or stage-volume
    #[arg(long, default_value = "day")]
    pub record_type: DiversionRecordType,

    /// Water class: diversion, release or an identifier fragment
    #[arg(long)]
    pub wc_identifier: Option<String>,

    /// First date to include (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,
}

pub fn run(args: &DiversionsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let records = if args.record_type == DiversionRecordType::StageVolume {
        let wdid = args.wdid.first().map(String::as_str).unwrap_or_default();
        let mut query = StageVolumeQuery::new(wdid);
        if let Some(since) = args.since {
            query = query.with_start_date(since);
        }
        if let Some(until) = args.until {
            query = query.with_end_date(until);
        }
        client.get_stage_volume_ts(&query)?
    } else {
        let mut query = DiversionRecordQuery::default()
            .with_wdids(&args.wdid)
            .with_record_type(args.record_type);
        if let Some(wc_identifier) = &args.wc_identifier {
            query = query.with_wc_identifier(wc_identifier);
        }
        if let Some(since) = args.since {
            query = query.with_start_date(since);
        }
        if let Some(until) = args.until {
            query = query.with_end_date(until);
        }
        client.get_diversion_records_ts(&query)?
    };

    eprintln!("{} records", records.len());
    match format {
        OutputFormat::Json => print_json(&records),
        _ => print_rows(build_diversion_rows(&records), format)?,
    }
    Ok(())
}
