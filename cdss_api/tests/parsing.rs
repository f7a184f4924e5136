use cdss_api::parse::{self, parse_collection};
use cdss_api::types::{Timescale, WaterRightDetails, WaterRightKind};
use chrono::{Datelike, Timelike};
use serde_json::Value;

fn load_fixture(name: &str) -> Value {
    let body = std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap();
    serde_json::from_str(&body).unwrap()
}

#[test]
fn parse_structures_full() {
    let page = load_fixture("structures.json");
    let structures = parse_collection(&page, parse::structure);
    assert_eq!(structures.len(), 2);

    let ditch = &structures[0];
    assert_eq!(ditch.wdid.as_deref(), Some("0100578"));
    assert_eq!(ditch.structure_name.as_deref(), Some("WESTERN MUTUAL DITCH"));
    assert_eq!(ditch.division, Some(1));
    assert_eq!(ditch.water_district, Some(1));
    assert_eq!(ditch.utm_x, Some(543592.3));
    assert_eq!(ditch.gnis_id.as_deref(), Some("00205110"));
    assert!(ditch.designated_basin.is_none());
    let modified = ditch.modified.unwrap();
    assert_eq!((modified.year(), modified.month(), modified.day()), (2020, 12, 7));
    assert_eq!((modified.hour(), modified.minute()), (9, 31));
    assert!(ditch.metadata.is_empty());
}

#[test]
fn parse_structures_absorbs_bad_values() {
    let page = load_fixture("structures.json");
    let reservoir = &parse_collection(&page, parse::structure)[1];
    assert_eq!(reservoir.division, Some(1));
    assert_eq!(reservoir.utm_x, None);
    assert_eq!(reservoir.modified, None);
    assert_eq!(reservoir.latitude, None);
}

#[test]
fn parse_surface_water_days() {
    let page = load_fixture("sw_ts_day.json");
    let readings = parse_collection(&page, |raw| parse::reading(raw, Timescale::Day));
    assert_eq!(readings.len(), 2);
    assert_eq!(readings[0].station_num.as_deref(), Some("6754000"));
    assert_eq!(readings[0].value(), Some(412.0));
    assert_eq!(readings[1].value(), Some(398.5));
    assert_eq!(
        readings[1].day_flags().and_then(|f| f.flag_a.as_deref()),
        Some("P")
    );
    assert!(readings.iter().all(|r| r.cal_year().is_none()));
    assert!(readings[0].meas_date.is_some());
}

#[test]
fn parse_admin_calls() {
    let page = load_fixture("admin_calls_active.json");
    let calls = parse_collection(&page, parse::admin_call);
    assert_eq!(calls.len(), 1);

    let call = &calls[0];
    assert_eq!(call.call_number, Some(32412));
    assert_eq!(call.priority_admin_number, Some(11048.0));
    assert_eq!(call.location_wdid_streammile, Some(238.51));
    assert_eq!(call.priority_number, Some(12));
    assert_eq!(call.priority_date.map(|d| d.year()), Some(1880));
    assert!(call.is_active());
}

#[test]
fn parse_net_amount_water_rights() {
    let page = load_fixture("water_rights_netamount.json");
    let rights = parse_collection(&page, |raw| parse::water_right(raw, WaterRightKind::NetAmount));
    assert_eq!(rights.len(), 1);

    let right = &rights[0];
    assert_eq!(right.kind(), WaterRightKind::NetAmount);
    assert_eq!(right.admin_number, Some(5631.0));
    assert_eq!(right.order_number.as_deref(), Some("0"));
    assert_eq!(right.decreed_amount, Some(25.0));
    match &right.details {
        WaterRightDetails::NetAmount {
            appropriation_date,
            status,
            ..
        } => {
            assert_eq!(appropriation_date.map(|d| d.year()), Some(1865));
            assert_eq!(status.as_deref(), Some("Absolute"));
        }
        other => panic!("unexpected details: {other:?}"),
    }
}

#[test]
fn parse_geophysical_log_picks() {
    let page = load_fixture("log_picks.json");
    let picks = parse_collection(&page, parse::log_pick);
    assert_eq!(picks.len(), 2);

    let dawson = &picks[0];
    assert_eq!(dawson.well_id.as_deref(), Some("12231"));
    assert_eq!(dawson.pick_depth, Some(412.5));
    assert_eq!(dawson.formation.as_deref(), Some("DAWSON"));
    assert_eq!(dawson.member.as_deref(), Some("UPPER"));
    assert_eq!(dawson.pick_quality.as_deref(), Some("GOOD"));
    assert_eq!(dawson.comments.as_deref(), Some("Top of aquifer from gamma log"));
    assert_eq!(dawson.modified.map(|m| m.year()), Some(2019));

    let denver = &picks[1];
    assert_eq!(denver.well_id.as_deref(), Some("12231"));
    assert_eq!(denver.pick_depth, None);
    assert_eq!(denver.formation.as_deref(), Some("DENVER"));
    assert!(denver.member.is_none());
    assert!(denver.comments.is_none());
    assert!(denver.modified.is_none());
}

#[test]
fn parse_empty_envelope() {
    let page: Value = serde_json::from_str(r#"{"ResultCount": 0}"#).unwrap();
    assert!(parse_collection(&page, parse::structure).is_empty());
}
