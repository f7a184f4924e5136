use serde_json::Value;

use super::Record;
use crate::{
    coerce::{parse_timestamp_str, Timestamp},
    types::{DiversionRecord, DiversionRecordType, DiversionValues, Metadata, Structure, WaterClass},
};

pub fn structure(raw: &Value) -> Structure {
    let r = Record::new(raw);
    Structure {
        wdid: r.string("wdid"),
        structure_name: r.string("structureName"),
        structure_type: r.string("structureType"),
        water_source: r.string("waterSource"),
        location_wdid: r.string("locationWdid"),
        gnis_id: r.string("gnisId"),
        division: r.int("division"),
        water_district: r.int("waterDistrict"),
        county: r.string("county"),
        designated_basin: r.string("designatedBasin"),
        management_district: r.string("managementDistrict"),
        latitude: r.float("latitude"),
        longitude: r.float("longitude"),
        utm_x: r.float("utmX"),
        utm_y: r.float("utmY"),
        stream_num: r.string("streamNum"),
        structure_num: r.string("structureNum"),
        ciu_code: r.string("ciuCode"),
        ciucode_desc: r.string("ciucodeDesc"),
        modified: r.timestamp("modified"),
        metadata: Metadata::new(),
    }
}

pub fn diversion_record(raw: &Value, record_type: DiversionRecordType) -> DiversionRecord {
    let r = Record::new(raw);
    let values = match record_type {
        DiversionRecordType::StageVolume => DiversionValues::StageVolume {
            stage: r.float("stage"),
            volume: r.float("volume"),
        },
        _ => DiversionValues::Diversion {
            water_class_num: r.int("waterClassNum"),
            wc_identifier: r.string("wcIdentifier"),
            meas_interval: r.string("measInterval"),
            meas_count: r.int("measCount"),
            data_value: r.float("dataValue"),
            meas_units: r.string("measUnits"),
            obs_code: r.string("obsCode"),
            approval_status: r.string("approvalStatus"),
        },
    };
    DiversionRecord {
        record_type,
        wdid: r.string("wdid"),
        data_meas_date: data_meas_date(r.string("dataMeasDate").as_deref(), record_type),
        modified: r.timestamp("modified"),
        values,
        metadata: Metadata::new(),
    }
}

/// Year series report `YYYY` and month series `YYYY-MM`; both become the
/// first instant of the period.
fn data_meas_date(raw: Option<&str>, record_type: DiversionRecordType) -> Option<Timestamp> {
    let raw = raw?.trim();
    match record_type {
        DiversionRecordType::Year if raw.len() == 4 => {
            parse_timestamp_str(&format!("{}-01-01 00:00:00", raw))
        }
        DiversionRecordType::Month if raw.len() == 7 => {
            parse_timestamp_str(&format!("{}-01 00:00:00", raw))
        }
        _ => parse_timestamp_str(raw),
    }
}

pub fn water_class(raw: &Value) -> WaterClass {
    let r = Record::new(raw);
    WaterClass {
        wdid: r.string("wdid"),
        wc_identifier: r.string("wcIdentifier"),
        por_start: r.timestamp("porStart"),
        por_end: r.timestamp("porEnd"),
        div_type: r.string("divrectype"),
        timestep: r.string("timestep"),
        units: r.string("units"),
        source_code: r.string("sourceCode"),
        use_code: r.string("useCode"),
        op_code: r.string("opCode"),
        modified: r.timestamp("modified"),
        metadata: Metadata::new(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde_json::json;

    use super::*;

    #[test]
    fn year_and_month_dates_start_the_period() {
        let year = diversion_record(&json!({"dataMeasDate": "2020"}), DiversionRecordType::Year);
        let ts = year.data_meas_date.unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day(), ts.hour()), (2020, 1, 1, 0));

        let month = diversion_record(&json!({"dataMeasDate": "2020-03"}), DiversionRecordType::Month);
        let ts = month.data_meas_date.unwrap();
        assert_eq!((ts.year(), ts.month(), ts.day()), (2020, 3, 1));

        let day = diversion_record(
            &json!({"dataMeasDate": "2020-03-17 00:00:00"}),
            DiversionRecordType::Day,
        );
        assert_eq!(day.data_meas_date.unwrap().day(), 17);
    }

    #[test]
    fn diversion_and_stage_volume_shapes() {
        let raw = json!({
            "wdid": "0103817",
            "dataValue": "12.4",
            "measUnits": "CFS",
            "stage": "21.5",
            "volume": 1400
        });
        let diversion = diversion_record(&raw, DiversionRecordType::Day);
        assert_eq!(diversion.data_value(), Some(12.4));

        let stage = diversion_record(&raw, DiversionRecordType::StageVolume);
        assert_eq!(stage.data_value(), None);
        assert_eq!(
            stage.values,
            DiversionValues::StageVolume {
                stage: Some(21.5),
                volume: Some(1400.0)
            }
        );
    }
}
