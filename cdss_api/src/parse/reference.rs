use serde_json::Value;

use super::Record;
use crate::types::{Metadata, ReferenceTable};

/// Any reference table row. Climate parameters report `measType` where
/// telemetry parameters report `parameter`.
pub fn reference_table(raw: &Value) -> ReferenceTable {
    let r = Record::new(raw);
    ReferenceTable {
        name: r.string("name"),
        code: r.string("code"),
        description: r.string("description"),
        division: r.int("division"),
        division_name: r.string("divisionName"),
        water_district: r.int("waterDistrict"),
        water_district_name: r.string("waterDistrictName"),
        county: r.string("county"),
        management_district: r.string("managementDistrict"),
        management_district_name: r.string("managementDistrictName"),
        designated_basin: r.string("designatedBasin"),
        designated_basin_name: r.string("designatedBasinName"),
        parameter: r.string("parameter").or_else(|| r.string("measType")),
        flag: r.string("flag"),
        flag_column: r.string("flagColumn"),
        divrectype: r.string("divRecType"),
        div_rec_type_long: r.string("divRecTypeLong"),
        additional_info: r.string("additionalInfo"),
        data_source: r.string("dataSource"),
        publication_name: r.string("publicationName"),
        action_name: r.string("actionName"),
        action_descr: r.string("actionDescr"),
        ciu_code: r.string("ciuCode"),
        ciu_code_long: r.string("ciuCodeLong"),
        obs_code: r.string("obsCode"),
        obs_code_long: r.string("obsCodeLong"),
        obs_descr: r.string("obsDescr"),
        start_iyr: r.int("startIyr"),
        end_iyr: r.int("endIyr"),
        not_used_code: r.string("notUsedCode"),
        not_used_code_descr: r.string("notUsedCodeDescr"),
        submission_type: r.string("submissionType"),
        metadata: Metadata::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn parameter_falls_back_to_meas_type() {
        let climate = reference_table(&json!({"measType": "Precip", "description": "Precipitation"}));
        assert_eq!(climate.parameter.as_deref(), Some("Precip"));

        let telemetry = reference_table(&json!({"parameter": "DISCHRG", "measType": "ignored"}));
        assert_eq!(telemetry.parameter.as_deref(), Some("DISCHRG"));
    }
}
