use std::str::FromStr;

use serde::Serialize;

use super::Metadata;
use crate::Error;

/// The lookup tables published under `/referencetables/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceTableKind {
    County,
    WaterDistricts,
    WaterDivisions,
    DesignatedBasins,
    ManagementDistricts,
    TelemetryParams,
    ClimateParams,
    DivRecTypes,
    Flags,
}

impl ReferenceTableKind {
    pub const ALL: [ReferenceTableKind; 9] = [
        ReferenceTableKind::County,
        ReferenceTableKind::WaterDistricts,
        ReferenceTableKind::WaterDivisions,
        ReferenceTableKind::DesignatedBasins,
        ReferenceTableKind::ManagementDistricts,
        ReferenceTableKind::TelemetryParams,
        ReferenceTableKind::ClimateParams,
        ReferenceTableKind::DivRecTypes,
        ReferenceTableKind::Flags,
    ];

    /// Token accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            ReferenceTableKind::County => "county",
            ReferenceTableKind::WaterDistricts => "waterdistricts",
            ReferenceTableKind::WaterDivisions => "waterdivisions",
            ReferenceTableKind::DesignatedBasins => "designatedbasins",
            ReferenceTableKind::ManagementDistricts => "managementdistricts",
            ReferenceTableKind::TelemetryParams => "telemetryparams",
            ReferenceTableKind::ClimateParams => "climateparams",
            ReferenceTableKind::DivRecTypes => "divrectypes",
            ReferenceTableKind::Flags => "flags",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            ReferenceTableKind::County => "/referencetables/county/",
            ReferenceTableKind::WaterDistricts => "/referencetables/waterdistrict/",
            ReferenceTableKind::WaterDivisions => "/referencetables/waterdivision/",
            ReferenceTableKind::DesignatedBasins => "/referencetables/designatedbasin/",
            ReferenceTableKind::ManagementDistricts => "/referencetables/managementdistrict/",
            ReferenceTableKind::TelemetryParams => "/referencetables/telemetryparams/",
            ReferenceTableKind::ClimateParams => "/referencetables/climatestationmeastype/",
            ReferenceTableKind::DivRecTypes => "/referencetables/divrectypes/",
            ReferenceTableKind::Flags => "/referencetables/stationflags/",
        }
    }

    /// Query key of the table's name-like filter, if it has one.
    pub fn name_filter_key(&self) -> Option<&'static str> {
        match self {
            ReferenceTableKind::County => Some("county"),
            ReferenceTableKind::DesignatedBasins => Some("designatedBasinName"),
            ReferenceTableKind::ManagementDistricts => Some("managementDistrictName"),
            ReferenceTableKind::TelemetryParams => Some("parameter"),
            ReferenceTableKind::ClimateParams => Some("measType"),
            ReferenceTableKind::DivRecTypes => Some("divRecType"),
            ReferenceTableKind::Flags => Some("flag"),
            ReferenceTableKind::WaterDistricts | ReferenceTableKind::WaterDivisions => None,
        }
    }
}

impl std::fmt::Display for ReferenceTableKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ReferenceTableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| {
                let valid = Self::ALL.map(|kind| kind.name()).join(", ");
                Error::invalid(format!(
                    "invalid table name '{}'. Valid values: {}",
                    s, valid
                ))
            })
    }
}

/// One row of any reference table. The API serves nine structurally
/// different tables through this shape, so all qualifiers are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReferenceTable {
    pub name: Option<String>,
    pub code: Option<String>,
    pub description: Option<String>,
    pub division: Option<i64>,
    pub division_name: Option<String>,
    pub water_district: Option<i64>,
    pub water_district_name: Option<String>,
    pub county: Option<String>,
    pub management_district: Option<String>,
    pub management_district_name: Option<String>,
    pub designated_basin: Option<String>,
    pub designated_basin_name: Option<String>,
    pub parameter: Option<String>,
    pub flag: Option<String>,
    pub flag_column: Option<String>,
    pub divrectype: Option<String>,
    pub div_rec_type_long: Option<String>,
    pub additional_info: Option<String>,
    pub data_source: Option<String>,
    pub publication_name: Option<String>,
    pub action_name: Option<String>,
    pub action_descr: Option<String>,
    pub ciu_code: Option<String>,
    pub ciu_code_long: Option<String>,
    pub obs_code: Option<String>,
    pub obs_code_long: Option<String>,
    pub obs_descr: Option<String>,
    pub start_iyr: Option<i64>,
    pub end_iyr: Option<i64>,
    pub not_used_code: Option<String>,
    pub not_used_code_descr: Option<String>,
    pub submission_type: Option<String>,
    pub metadata: Metadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_table_name_parses() {
        for kind in ReferenceTableKind::ALL {
            assert_eq!(kind.name().parse::<ReferenceTableKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_table_is_invalid_argument() {
        let err = "rivers".parse::<ReferenceTableKind>().unwrap_err();
        match err {
            Error::InvalidArgument(msg) => assert!(msg.contains("waterdistricts")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
