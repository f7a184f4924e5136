use std::str::FromStr;

use serde::Serialize;

use super::Metadata;
use crate::{coerce::Timestamp, Error};

/// Which water rights listing a record was parsed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterRightKind {
    NetAmount,
    Transaction,
}

impl FromStr for WaterRightKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "net_amount" | "netamount" | "net" => Ok(WaterRightKind::NetAmount),
            "transaction" | "transactions" => Ok(WaterRightKind::Transaction),
            _ => Err(Error::invalid(format!(
                "unknown water rights type '{}'. Valid values: net_amount, transaction",
                s
            ))),
        }
    }
}

/// Fields that only one of the two listings reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum WaterRightDetails {
    NetAmount {
        appropriation_date: Option<Timestamp>,
        padj_date: Option<Timestamp>,
        adj_type: Option<String>,
        status: Option<String>,
        stream_mile: Option<f64>,
        structure_type: Option<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    },
    Transaction {
        trans_id: Option<String>,
        trans_type: Option<String>,
        case_number: Option<String>,
        action_comment: Option<String>,
        action_update: Option<String>,
    },
}

/// A decreed water right, either as a net amount or as a court transaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WaterRight {
    pub wdid: Option<String>,
    pub water_right_name: Option<String>,
    pub admin_number: Option<f64>,
    pub adj_date: Option<Timestamp>,
    pub order_number: Option<String>,
    pub prior_cases: Option<String>,
    pub decreed_uses: Option<String>,
    pub decreed_amount: Option<f64>,
    pub decreed_units: Option<String>,
    pub county: Option<String>,
    pub water_district: Option<i64>,
    pub division: Option<i64>,
    pub modified: Option<Timestamp>,
    pub details: WaterRightDetails,
    pub metadata: Metadata,
}

impl WaterRight {
    pub fn kind(&self) -> WaterRightKind {
        match self.details {
            WaterRightDetails::NetAmount { .. } => WaterRightKind::NetAmount,
            WaterRightDetails::Transaction { .. } => WaterRightKind::Transaction,
        }
    }
}
