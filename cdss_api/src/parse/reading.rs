use serde_json::Value;

use super::Record;
use crate::types::{
    ClimateReading, ClimateReadingKind, ClimateValues, DayFlags, FlowStatistics, Metadata,
    RawFlags, Reading, ReadingValues, Timescale,
};

/// Builds a reading with the field group of `timescale`. Hourly readings
/// carry the same two flags as raw ones.
pub fn reading(raw: &Value, timescale: Timescale) -> Reading {
    let r = Record::new(raw);
    let values = match timescale {
        Timescale::Day => ReadingValues::Day {
            value: r.float("value"),
            flags: DayFlags {
                flag_a: r.string("flagA"),
                flag_b: r.string("flagB"),
                flag_c: r.string("flagC"),
                flag_d: r.string("flagD"),
            },
        },
        Timescale::Month => ReadingValues::Month {
            cal_year: r.int("calYear"),
            cal_month_num: r.int("calMonNum"),
            flow: flow(r),
        },
        Timescale::Year => ReadingValues::Year {
            water_year: r.int("waterYear"),
            flow: flow(r),
        },
        Timescale::Raw | Timescale::Hour => ReadingValues::Raw {
            flags: RawFlags {
                flag_a: r.string("flagA"),
                flag_b: r.string("flagB"),
            },
        },
    };
    Reading {
        timescale,
        station_num: r.string("stationNum"),
        abbrev: r.string("abbrev"),
        parameter: r.string("parameter"),
        usgs_site_id: r.string("usgsSiteId"),
        meas_type: r.string("measType"),
        meas_unit: r.string("measUnit"),
        meas_count: r.int("measCount"),
        meas_value: r.float("measValue"),
        meas_date: r.timestamp("measDate"),
        meas_date_time: r.timestamp("measDateTime"),
        data_source: r.string("dataSource"),
        modified: r.timestamp("modified"),
        values,
        metadata: Metadata::new(),
    }
}

fn flow(r: Record<'_>) -> FlowStatistics {
    FlowStatistics {
        min_q_cfs: r.float("minQCfs"),
        max_q_cfs: r.float("maxQCfs"),
        avg_q_cfs: r.float("avgQCfs"),
        total_q_af: r.float("totalQAf"),
    }
}

/// Builds a climate reading for the endpoint `kind` came from.
pub fn climate_reading(raw: &Value, kind: ClimateReadingKind) -> ClimateReading {
    let r = Record::new(raw);
    let values = match kind {
        ClimateReadingKind::FrostDates => ClimateValues::FrostDates {
            cal_year: r.int("calYear"),
            spring_frost_date: r.timestamp("springFrostDate"),
            fall_frost_date: r.timestamp("fallFrostDate"),
            frost_date_28f_spring: r.timestamp("l28s"),
            frost_date_28f_fall: r.timestamp("f28s"),
            frost_date_32f_spring: r.timestamp("l32s"),
            frost_date_32f_fall: r.timestamp("f32f"),
        },
        ClimateReadingKind::Daily => ClimateValues::Daily {
            meas_date: r.timestamp("measDate"),
            value: r.float("value"),
            flag: r.string("flag"),
            units: r.string("units"),
        },
        ClimateReadingKind::Monthly => ClimateValues::Monthly {
            cal_year: r.int("calYear"),
            cal_month: r.int("calMonth"),
            value: r.float("value"),
            flag: r.string("flag"),
            units: r.string("units"),
        },
    };
    ClimateReading {
        station_number: r.string("stationNum"),
        site_id: r.string("siteId"),
        parameter: r.string("measType"),
        data_source: r.string("dataSource"),
        modified: r.timestamp("modified"),
        values,
        metadata: Metadata::new(),
    }
}
