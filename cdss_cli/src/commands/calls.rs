//! The `calls` subcommand: active or historical administrative calls.

use anyhow::Result;
use cdss_api::{AdminCallQuery, Client};
use chrono::NaiveDate;
use clap::Args;

use crate::output::{build_call_rows, print_json, print_rows, OutputFormat};

#[derive(Args)]
pub struct CallsArgs {
    /// Query released calls instead of the ones in effect
    #[arg(long)]
    pub historical: bool,

    /// Water division (1-7)
    #[arg(long)]
    pub division: Option<i64>,

    /// WDID of the call location
    #[arg(long)]
    pub location_wdid: Option<String>,

    /// Calls set on/after this date (YYYY-MM-DD)
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Calls set on/before this date (YYYY-MM-DD)
    #[arg(long)]
    pub until: Option<NaiveDate>,
}

pub fn run(args: &CallsArgs, client: &Client, format: &OutputFormat) -> Result<()> {
    let mut query = AdminCallQuery::default().with_active(!args.historical);
    if let Some(division) = args.division {
        query = query.with_division(division);
    }
    if let Some(location_wdid) = &args.location_wdid {
        query = query.with_location_wdid(location_wdid);
    }
    if let Some(since) = args.since {
        query = query.with_start_date(since);
    }
    if let Some(until) = args.until {
        query = query.with_end_date(until);
    }

    let calls = client.get_admin_calls(&query)?;
    eprintln!("{} calls", calls.len());

    match format {
        OutputFormat::Json => print_json(&calls),
        _ => print_rows(build_call_rows(&calls), format)?,
    }
    Ok(())
}
