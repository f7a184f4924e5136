//! The `call-analysis` subcommand.

use anyhow::{bail, Result};
use cdss_api::{CallAnalysisGnisQuery, CallAnalysisWdidQuery, Client};
use chrono::NaiveDate;
use clap::Args;

use crate::output::{build_analysis_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct CallAnalysisArgs {
    /// Structure WDID to analyse
    #[arg(long, conflicts_with = "gnis_id")]
    pub wdid: Option<String>,

    /// GNIS ID of the stream to analyse (requires --stream-mile)
    #[arg(long, requires = "stream_mile")]
    pub gnis_id: Option<String>,

    /// Stream mile on the GNIS stream
    #[arg(long)]
    pub stream_mile: Option<f64>,

    /// Administration number of the right, e.g. 45678.12345
    #[arg(long)]
    pub admin_no: String,

    /// First date to analyse (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last date to analyse (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Send one request per calendar year
    #[arg(long)]
    pub batch: bool,
}

pub fn run(args: &CallAnalysisArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let analyses = match (&args.wdid, &args.gnis_id, args.stream_mile) {
        (Some(wdid), _, _) => {
            let mut query = CallAnalysisWdidQuery::new(wdid, &args.admin_no).with_batch(args.batch);
            if let Some(since) = args.since {
                query = query.with_start_date(since);
            }
            if let Some(until) = args.until {
                query = query.with_end_date(until);
            }
            client.get_call_analysis_wdid(&query)?
        }
        (None, Some(gnis_id), Some(stream_mile)) => {
            let mut query = CallAnalysisGnisQuery::new(gnis_id, &args.admin_no, stream_mile)
                .with_batch(args.batch);
            if let Some(since) = args.since {
                query = query.with_start_date(since);
            }
            if let Some(until) = args.until {
                query = query.with_end_date(until);
            }
            client.get_call_analysis_gnisid(&query)?
        }
        _ => bail!("either --wdid or --gnis-id with --stream-mile is required"),
    };
    eprintln!("{} analysis rows", analyses.len());

    match format {
        OutputFormat::Json => print_json(&analyses),
        _ => print_rows(build_analysis_rows(&analyses), format)?,
    }
    Ok(())
}
