//! Every endpoint the client talks to, with its wire conventions.
//!
//! The API is not uniform about list separators, date formats or value
//! encoding. Each endpoint declares its convention here once so the
//! filter structs never pick one themselves.

use super::builder::{ListJoin, QueryBuilder};
use crate::dates::DateStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    /// Path below the base URL, with leading and trailing slash.
    pub path: &'static str,
    pub list_join: ListJoin,
    pub date_style: DateStyle,
    /// Form-encode every wire value once more; the service decodes twice.
    pub encode_values: bool,
    /// Send `dateFormat=spaceSepToSeconds`.
    pub date_format: bool,
}

impl Endpoint {
    pub const fn new(path: &'static str) -> Self {
        Self {
            path,
            list_join: ListJoin::Comma,
            date_style: DateStyle::Dashed,
            encode_values: false,
            date_format: false,
        }
    }

    const fn with_date_format(mut self) -> Self {
        self.date_format = true;
        self
    }

    const fn with_list_join(mut self, list_join: ListJoin) -> Self {
        self.list_join = list_join;
        self
    }

    const fn with_encoded_values(mut self) -> Self {
        self.encode_values = true;
        self
    }

    /// A builder preloaded with this endpoint's conventions.
    pub fn query(&self) -> QueryBuilder {
        QueryBuilder::for_endpoint(self)
    }
}

pub const SW_STATIONS: Endpoint =
    Endpoint::new("/surfacewater/surfacewaterstations/").with_date_format();
pub const SW_TS_DAY: Endpoint = Endpoint::new("/surfacewater/surfacewatertsday/").with_date_format();
pub const SW_TS_MONTH: Endpoint =
    Endpoint::new("/surfacewater/surfacewatertsmonth/").with_date_format();
pub const SW_TS_WATER_YEAR: Endpoint =
    Endpoint::new("/surfacewater/surfacewatertswateryear/").with_date_format();

pub const TELEMETRY_STATIONS: Endpoint =
    Endpoint::new("/telemetrystations/telemetrystation/").with_date_format();
pub const TELEMETRY_TS_DAY: Endpoint =
    Endpoint::new("/telemetrystations/telemetrytimeseriesday/").with_date_format();
pub const TELEMETRY_TS_HOUR: Endpoint =
    Endpoint::new("/telemetrystations/telemetrytimeserieshour/").with_date_format();
pub const TELEMETRY_TS_RAW: Endpoint =
    Endpoint::new("/telemetrystations/telemetrytimeseriesraw/").with_date_format();

pub const CLIMATE_STATIONS: Endpoint =
    Endpoint::new("/climatedata/climatestations/").with_date_format();
pub const CLIMATE_FROST_DATES: Endpoint =
    Endpoint::new("/climatedata/climatestationfrostdates/").with_date_format();
pub const CLIMATE_TS_DAY: Endpoint =
    Endpoint::new("/climatedata/climatestationtsday/").with_date_format();
pub const CLIMATE_TS_MONTH: Endpoint =
    Endpoint::new("/climatedata/climatestationtsmonth/").with_date_format();

pub const WATER_LEVEL_WELLS: Endpoint =
    Endpoint::new("/groundwater/waterlevels/wells/").with_date_format();
pub const WELL_MEASUREMENTS: Endpoint =
    Endpoint::new("/groundwater/waterlevels/wellmeasurements/").with_date_format();
pub const GEOPHYSICAL_LOG_WELLS: Endpoint =
    Endpoint::new("/groundwater/geophysicallogs/wells/").with_date_format();
pub const GEOPHYSICAL_LOG_PICKS: Endpoint =
    Endpoint::new("/groundwater/geophysicallogs/geoplogpicks/").with_date_format();

pub const STRUCTURES: Endpoint =
    Endpoint::new("/structures/").with_list_join(ListJoin::EncodedCommaSpace);
pub const DIVREC_DAY: Endpoint = Endpoint::new("/structures/divrec/divrecday/")
    .with_list_join(ListJoin::EncodedCommaSpace);
pub const DIVREC_MONTH: Endpoint = Endpoint::new("/structures/divrec/divrecmonth/")
    .with_list_join(ListJoin::EncodedCommaSpace);
pub const DIVREC_YEAR: Endpoint = Endpoint::new("/structures/divrec/divrecyear/")
    .with_list_join(ListJoin::EncodedCommaSpace);
pub const STAGE_VOLUME: Endpoint = Endpoint::new("/structures/divrec/stagevolume/")
    .with_list_join(ListJoin::EncodedCommaSpace);
pub const WATER_CLASSES: Endpoint = Endpoint::new("/structures/divrec/waterclasses/")
    .with_list_join(ListJoin::EncodedCommaSpace);

pub const WATER_RIGHTS_NET_AMOUNT: Endpoint =
    Endpoint::new("/waterrights/netamount/").with_date_format();
pub const WATER_RIGHTS_TRANSACTION: Endpoint =
    Endpoint::new("/waterrights/transaction/").with_date_format();

pub const ADMIN_CALLS_ACTIVE: Endpoint = Endpoint::new("/administrativecalls/active/")
    .with_encoded_values()
    .with_date_format();
pub const ADMIN_CALLS_HISTORICAL: Endpoint = Endpoint::new("/administrativecalls/historical/")
    .with_encoded_values()
    .with_date_format();

pub const CALL_ANALYSIS_WDID: Endpoint =
    Endpoint::new("/analysisservices/callanalysisbywdid/");
pub const CALL_ANALYSIS_GNIS: Endpoint =
    Endpoint::new("/analysisservices/callanalysisbygnisid/");
pub const SOURCE_ROUTE_FRAMEWORK: Endpoint =
    Endpoint::new("/analysisservices/watersourcerouteframework/").with_date_format();
pub const SOURCE_ROUTE_ANALYSIS: Endpoint =
    Endpoint::new("/analysisservices/watersourcerouteanalysis/");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structure_endpoints_use_escaped_comma_space() {
        for endpoint in [STRUCTURES, DIVREC_DAY, STAGE_VOLUME, WATER_CLASSES] {
            assert_eq!(endpoint.list_join, ListJoin::EncodedCommaSpace, "{}", endpoint.path);
        }
        assert_eq!(SW_STATIONS.list_join, ListJoin::Comma);
    }

    #[test]
    fn only_admin_calls_encode_values() {
        assert!(ADMIN_CALLS_ACTIVE.encode_values);
        assert!(ADMIN_CALLS_HISTORICAL.encode_values);
        assert!(!STRUCTURES.encode_values);
        assert!(!CALL_ANALYSIS_WDID.encode_values);
    }
}
