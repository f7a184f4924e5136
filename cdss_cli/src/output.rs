use std::fmt::Display;

use anyhow::Result;
use cdss_api::coerce::Timestamp;
use cdss_api::types::{
    AdminCall, CallAnalysis, ClimateReading, ClimateStation, ClimateValues, DiversionRecord,
    DiversionValues, ReadingValues, Reading, ReferenceTable, Station, Structure, WaterRight,
    WaterRightDetails, Well, WellMeasurement,
};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct StationRow {
    #[tabled(rename = "Station")]
    #[serde(rename = "Station")]
    station: String,
    #[tabled(rename = "Abbrev")]
    #[serde(rename = "Abbrev")]
    abbrev: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Division")]
    #[serde(rename = "Division")]
    division: String,
    #[tabled(rename = "District")]
    #[serde(rename = "District")]
    water_district: String,
    #[tabled(rename = "County")]
    #[serde(rename = "County")]
    county: String,
    #[tabled(rename = "Source")]
    #[serde(rename = "Source")]
    source: String,
}

#[derive(Tabled, Serialize)]
pub struct ReadingRow {
    #[tabled(rename = "Station")]
    #[serde(rename = "Station")]
    station: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Parameter")]
    #[serde(rename = "Parameter")]
    parameter: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Unit")]
    #[serde(rename = "Unit")]
    unit: String,
}

#[derive(Tabled, Serialize)]
pub struct StructureRow {
    #[tabled(rename = "WDID")]
    #[serde(rename = "WDID")]
    wdid: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    structure_type: String,
    #[tabled(rename = "Water Source")]
    #[serde(rename = "Water Source")]
    water_source: String,
    #[tabled(rename = "Division")]
    #[serde(rename = "Division")]
    division: String,
    #[tabled(rename = "District")]
    #[serde(rename = "District")]
    water_district: String,
    #[tabled(rename = "County")]
    #[serde(rename = "County")]
    county: String,
}

#[derive(Tabled, Serialize)]
pub struct DiversionRow {
    #[tabled(rename = "WDID")]
    #[serde(rename = "WDID")]
    wdid: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Class")]
    #[serde(rename = "Class")]
    class: String,
    #[tabled(rename = "Value")]
    #[serde(rename = "Value")]
    value: String,
    #[tabled(rename = "Units")]
    #[serde(rename = "Units")]
    units: String,
}

#[derive(Tabled, Serialize)]
pub struct WaterRightRow {
    #[tabled(rename = "WDID")]
    #[serde(rename = "WDID")]
    wdid: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Admin No")]
    #[serde(rename = "Admin No")]
    admin_number: String,
    #[tabled(rename = "Adjudicated")]
    #[serde(rename = "Adjudicated")]
    adj_date: String,
    #[tabled(rename = "Amount")]
    #[serde(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Status")]
    #[serde(rename = "Status")]
    status: String,
}

#[derive(Tabled, Serialize)]
pub struct CallRow {
    #[tabled(rename = "Call")]
    #[serde(rename = "Call")]
    call_number: String,
    #[tabled(rename = "Set")]
    #[serde(rename = "Set")]
    date_time_set: String,
    #[tabled(rename = "Released")]
    #[serde(rename = "Released")]
    date_time_released: String,
    #[tabled(rename = "Water Source")]
    #[serde(rename = "Water Source")]
    water_source: String,
    #[tabled(rename = "Priority Structure")]
    #[serde(rename = "Priority Structure")]
    priority_structure: String,
    #[tabled(rename = "Admin No")]
    #[serde(rename = "Admin No")]
    priority_admin_number: String,
}

#[derive(Tabled, Serialize)]
pub struct WellRow {
    #[tabled(rename = "Well")]
    #[serde(rename = "Well")]
    well_id: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "County")]
    #[serde(rename = "County")]
    county: String,
    #[tabled(rename = "Basin")]
    #[serde(rename = "Basin")]
    designated_basin: String,
    #[tabled(rename = "Depth")]
    #[serde(rename = "Depth")]
    depth: String,
}

#[derive(Tabled, Serialize)]
pub struct MeasurementRow {
    #[tabled(rename = "Well")]
    #[serde(rename = "Well")]
    well_id: String,
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Depth to Water")]
    #[serde(rename = "Depth to Water")]
    depth_to_water: String,
    #[tabled(rename = "Water Elevation")]
    #[serde(rename = "Water Elevation")]
    elevation_of_water: String,
}

#[derive(Tabled, Serialize)]
pub struct AnalysisRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Analysed")]
    #[serde(rename = "Analysed")]
    analysed: String,
    #[tabled(rename = "Out of Priority %")]
    #[serde(rename = "Out of Priority %")]
    percent_out_of_priority: String,
    #[tabled(rename = "Calling WDID")]
    #[serde(rename = "Calling WDID")]
    call_wdid: String,
    #[tabled(rename = "Calling Right")]
    #[serde(rename = "Calling Right")]
    call_right: String,
}

#[derive(Tabled, Serialize)]
pub struct ReferenceRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    #[serde(rename = "Description")]
    description: String,
    #[tabled(rename = "Division")]
    #[serde(rename = "Division")]
    division: String,
}

// -- Row builders --

pub fn build_station_rows(stations: &[Station]) -> Vec<StationRow> {
    stations
        .iter()
        .map(|s| StationRow {
            station: text(&s.station_num),
            abbrev: text(&s.abbrev),
            name: text(&s.name),
            division: number(s.division),
            water_district: number(s.water_district),
            county: text(&s.county),
            source: text(&s.agency),
        })
        .collect()
}

pub fn build_climate_station_rows(stations: &[ClimateStation]) -> Vec<StationRow> {
    stations
        .iter()
        .map(|s| StationRow {
            station: text(&s.station_number),
            abbrev: text(&s.site_id),
            name: text(&s.station_name),
            division: number(s.division),
            water_district: number(s.water_district),
            county: text(&s.county),
            source: text(&s.data_source),
        })
        .collect()
}

pub fn build_reading_rows(readings: &[Reading]) -> Vec<ReadingRow> {
    readings
        .iter()
        .map(|r| {
            let (date, value) = match &r.values {
                ReadingValues::Day { value, .. } => (date(r.meas_date), number(*value)),
                ReadingValues::Month {
                    cal_year,
                    cal_month_num,
                    flow,
                } => (year_month(*cal_year, *cal_month_num), number(flow.avg_q_cfs)),
                ReadingValues::Year { water_year, flow } => {
                    (number(*water_year), number(flow.avg_q_cfs))
                }
                ReadingValues::Raw { .. } => (
                    date_time(r.meas_date_time.or(r.meas_date)),
                    number(r.meas_value),
                ),
            };
            ReadingRow {
                station: text(&r.abbrev.clone().or_else(|| r.station_num.clone())),
                date,
                parameter: text(&r.parameter.clone().or_else(|| r.meas_type.clone())),
                value,
                unit: text(&r.meas_unit),
            }
        })
        .collect()
}

pub fn build_climate_reading_rows(readings: &[ClimateReading]) -> Vec<ReadingRow> {
    readings
        .iter()
        .map(|r| {
            let (date, value, unit) = match &r.values {
                ClimateValues::FrostDates {
                    cal_year,
                    frost_date_32f_spring,
                    frost_date_32f_fall,
                    ..
                } => (
                    number(*cal_year),
                    format!("{} / {}", date(*frost_date_32f_spring), date(*frost_date_32f_fall)),
                    String::new(),
                ),
                ClimateValues::Daily {
                    meas_date,
                    value,
                    units,
                    ..
                } => (date(*meas_date), number(*value), text(units)),
                ClimateValues::Monthly {
                    cal_year,
                    cal_month,
                    value,
                    units,
                    ..
                } => (year_month(*cal_year, *cal_month), number(*value), text(units)),
            };
            ReadingRow {
                station: text(&r.station_number),
                date,
                parameter: text(&r.parameter),
                value,
                unit,
            }
        })
        .collect()
}

pub fn build_structure_rows(structures: &[Structure]) -> Vec<StructureRow> {
    structures
        .iter()
        .map(|s| StructureRow {
            wdid: text(&s.wdid),
            name: text(&s.structure_name),
            structure_type: text(&s.structure_type),
            water_source: text(&s.water_source),
            division: number(s.division),
            water_district: number(s.water_district),
            county: text(&s.county),
        })
        .collect()
}

pub fn build_diversion_rows(records: &[DiversionRecord]) -> Vec<DiversionRow> {
    records
        .iter()
        .map(|r| {
            let (class, value, units) = match &r.values {
                DiversionValues::Diversion {
                    wc_identifier,
                    data_value,
                    meas_units,
                    ..
                } => (text(wc_identifier), number(*data_value), text(meas_units)),
                DiversionValues::StageVolume { stage, volume } => (
                    "stage/volume".to_string(),
                    format!("{} / {}", number(*stage), number(*volume)),
                    "FT / AF".to_string(),
                ),
            };
            DiversionRow {
                wdid: text(&r.wdid),
                date: date(r.data_meas_date),
                class,
                value,
                units,
            }
        })
        .collect()
}

pub fn build_water_right_rows(rights: &[WaterRight]) -> Vec<WaterRightRow> {
    rights
        .iter()
        .map(|w| WaterRightRow {
            wdid: text(&w.wdid),
            name: text(&w.water_right_name),
            admin_number: w
                .admin_number
                .map(|n| format!("{:.5}", n))
                .unwrap_or_default(),
            adj_date: date(w.adj_date),
            amount: match (&w.decreed_amount, &w.decreed_units) {
                (Some(amount), Some(units)) => format!("{} {}", amount, units),
                (amount, _) => number(*amount),
            },
            status: match &w.details {
                WaterRightDetails::NetAmount { status, .. } => text(status),
                WaterRightDetails::Transaction { trans_type, .. } => text(trans_type),
            },
        })
        .collect()
}

pub fn build_call_rows(calls: &[AdminCall]) -> Vec<CallRow> {
    calls
        .iter()
        .map(|c| CallRow {
            call_number: number(c.call_number),
            date_time_set: date_time(c.date_time_set),
            date_time_released: if c.is_active() {
                "active".to_string()
            } else {
                date_time(c.date_time_released)
            },
            water_source: text(&c.water_source_name),
            priority_structure: text(&c.priority_structure_name),
            priority_admin_number: c
                .priority_admin_number
                .map(|n| format!("{:.5}", n))
                .unwrap_or_default(),
        })
        .collect()
}

pub fn build_well_rows(wells: &[Well]) -> Vec<WellRow> {
    wells
        .iter()
        .map(|w| WellRow {
            well_id: text(&w.well_id),
            name: text(&w.well_name),
            county: text(&w.county),
            designated_basin: text(&w.designated_basin),
            depth: number(w.depth),
        })
        .collect()
}

pub fn build_measurement_rows(measurements: &[WellMeasurement]) -> Vec<MeasurementRow> {
    measurements
        .iter()
        .map(|m| MeasurementRow {
            well_id: text(&m.well_id),
            date: date(m.measurement_date),
            depth_to_water: number(m.depth_to_water),
            elevation_of_water: number(m.elevation_of_water),
        })
        .collect()
}

pub fn build_analysis_rows(analyses: &[CallAnalysis]) -> Vec<AnalysisRow> {
    analyses
        .iter()
        .map(|a| AnalysisRow {
            date: date(a.analysis_date),
            analysed: text(&a.wdid.clone().or_else(|| a.gnis_id.clone())),
            percent_out_of_priority: number(a.percent_time_out_of_priority),
            call_wdid: text(&a.downstream_call_wdid),
            call_right: text(&a.downstream_call_right),
        })
        .collect()
}

pub fn build_reference_rows(rows: &[ReferenceTable]) -> Vec<ReferenceRow> {
    rows.iter()
        .map(|r| ReferenceRow {
            code: text(
                &r.code
                    .clone()
                    .or_else(|| r.parameter.clone())
                    .or_else(|| r.divrectype.clone())
                    .or_else(|| r.flag.clone())
                    .or_else(|| r.water_district.map(|d| d.to_string())),
            ),
            name: text(
                &r.name
                    .clone()
                    .or_else(|| r.county.clone())
                    .or_else(|| r.water_district_name.clone())
                    .or_else(|| r.division_name.clone())
                    .or_else(|| r.designated_basin_name.clone())
                    .or_else(|| r.management_district_name.clone()),
            ),
            description: text(&r.description),
            division: number(r.division),
        })
        .collect()
}

// -- Output --

/// Prints rows as a table, markdown table or CSV. JSON output is handled by
/// [`print_json`] on the full records.
pub fn print_rows<R: Tabled + Serialize>(rows: Vec<R>, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        OutputFormat::Markdown => {
            let mut table = Table::new(rows);
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Table | OutputFormat::Json => println!("{}", Table::new(rows)),
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn number<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn date(value: Option<Timestamp>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

fn date_time(value: Option<Timestamp>) -> String {
    value
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_default()
}

fn year_month(year: Option<i64>, month: Option<i64>) -> String {
    match (year, month) {
        (Some(year), Some(month)) => format!("{}-{:02}", year, month),
        (year, _) => number(year),
    }
}
