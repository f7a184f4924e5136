use chrono::NaiveDate;

use super::{endpoint, require_id, Aoi, Endpoint, Query, QueryPairs};
use crate::{types::DiversionRecordType, Error};

/// Filters for `/structures/`. Several WDIDs may be requested at once.
#[derive(Debug, Clone, Default)]
pub struct StructureQuery {
    pub aoi: Option<Aoi>,
    pub radius: Option<f64>,
    pub county: Option<String>,
    pub division: Option<i64>,
    pub gnis_id: Option<String>,
    pub water_district: Option<i64>,
    pub wdids: Vec<String>,
}

impl Query for StructureQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .param("county", self.county.as_deref())
            .param("division", self.division)
            .param("gnisId", self.gnis_id.as_deref())
            .param("waterDistrict", self.water_district)
            .param("wdid", Some(self.wdids.as_slice()))
            .set("units", "miles")
            .aoi(self.aoi.as_ref(), self.radius)
            .build())
    }
}

impl StructureQuery {
    pub fn with_aoi(mut self, aoi: Aoi) -> Self {
        self.aoi = Some(aoi);
        self
    }
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn with_county(mut self, county: &str) -> Self {
        self.county = Some(county.to_string());
        self
    }
    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_gnis_id(mut self, gnis_id: &str) -> Self {
        self.gnis_id = Some(gnis_id.to_string());
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
    pub fn with_wdid(mut self, wdid: &str) -> Self {
        self.wdids.push(wdid.to_string());
        self
    }
    pub fn with_wdids(mut self, wdids: &[String]) -> Self {
        self.wdids.extend_from_slice(wdids);
        self
    }
}

/// Maps a water class identifier to the pattern the diversion endpoints
/// match on. No identifier matches every diversion class.
pub fn normalize_wc_identifier(identifier: Option<&str>) -> String {
    let Some(identifier) = identifier else {
        return "*diversion*".to_string();
    };
    match identifier.trim().to_lowercase().as_str() {
        "diversion" | "diversions" | "div" | "divs" | "d" => "diversion".to_string(),
        "release" | "releases" | "rel" | "rels" | "r" => "release".to_string(),
        _ => format!("*{}*", identifier.trim()),
    }
}

/// Filters for the day, month and year diversion record series.
#[derive(Debug, Clone, Default)]
pub struct DiversionRecordQuery {
    pub wdids: Vec<String>,
    pub wc_identifier: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub record_type: DiversionRecordType,
}

impl DiversionRecordQuery {
    pub fn new(wdid: &str) -> Self {
        Self::default().with_wdid(wdid)
    }

    /// Fails for `StageVolume`, which has its own query.
    pub fn endpoint(&self) -> Result<Endpoint, Error> {
        match self.record_type {
            DiversionRecordType::Day => Ok(endpoint::DIVREC_DAY),
            DiversionRecordType::Month => Ok(endpoint::DIVREC_MONTH),
            DiversionRecordType::Year => Ok(endpoint::DIVREC_YEAR),
            DiversionRecordType::StageVolume => Err(Error::invalid(
                "stage/volume records are not a diversion timescale. Valid values: day, month, year",
            )),
        }
    }

    pub fn with_wdid(mut self, wdid: &str) -> Self {
        self.wdids.push(wdid.to_string());
        self
    }
    pub fn with_wdids(mut self, wdids: &[String]) -> Self {
        self.wdids.extend_from_slice(wdids);
        self
    }
    pub fn with_wc_identifier(mut self, wc_identifier: &str) -> Self {
        self.wc_identifier = Some(wc_identifier.to_string());
        self
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
    pub fn with_record_type(mut self, record_type: DiversionRecordType) -> Self {
        self.record_type = record_type;
        self
    }
}

impl Query for DiversionRecordQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        self.endpoint()?;
        if self.wdids.iter().all(|wdid| wdid.trim().is_empty()) {
            return Err(Error::invalid("at least one wdid is required"));
        }
        Ok(endpoint
            .query()
            .param("wdid", Some(self.wdids.as_slice()))
            .set(
                "wcIdentifier",
                normalize_wc_identifier(self.wc_identifier.as_deref()),
            )
            .param("min-dataMeasDate", self.start_date)
            .param("max-dataMeasDate", self.end_date)
            .build())
    }
}

/// Filters for `/structures/divrec/stagevolume/`.
#[derive(Debug, Clone)]
pub struct StageVolumeQuery {
    pub wdid: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl StageVolumeQuery {
    pub fn new(wdid: &str) -> Self {
        Self {
            wdid: wdid.to_string(),
            start_date: None,
            end_date: None,
        }
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

impl Query for StageVolumeQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("wdid", require_id("wdid", &self.wdid)?)
            .param("min-dataMeasDate", self.start_date)
            .param("max-dataMeasDate", self.end_date)
            .build())
    }
}

/// Filters for `/structures/divrec/waterclasses/`. The dates bound the
/// period of record: classes starting on or after `start_date` and ending
/// on or before `end_date`.
#[derive(Debug, Clone, Default)]
pub struct WaterClassQuery {
    pub wdids: Vec<String>,
    pub county: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub wc_identifier: Option<String>,
    pub timestep: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub divrectype: Option<String>,
    pub ciu_code: Option<String>,
    pub gnis_id: Option<String>,
    pub aoi: Option<Aoi>,
    pub radius: Option<f64>,
}

impl Query for WaterClassQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        let mut builder = endpoint
            .query()
            .param("wdid", Some(self.wdids.as_slice()))
            .param("county", self.county.as_deref())
            .param("division", self.division)
            .param("waterDistrict", self.water_district)
            .set(
                "wcIdentifier",
                normalize_wc_identifier(self.wc_identifier.as_deref()),
            )
            .param("timestep", self.timestep.as_deref())
            .param("min-porStart", self.start_date)
            .param("max-porEnd", self.end_date)
            .param("divrectype", self.divrectype.as_deref())
            .param("ciuCode", self.ciu_code.as_deref())
            .param("gnisId", self.gnis_id.as_deref());
        if self.aoi.is_some() {
            builder = builder
                .aoi(self.aoi.as_ref(), self.radius)
                .set("units", "miles");
        }
        Ok(builder.build())
    }
}

impl WaterClassQuery {
    pub fn with_wdid(mut self, wdid: &str) -> Self {
        self.wdids.push(wdid.to_string());
        self
    }
    pub fn with_county(mut self, county: &str) -> Self {
        self.county = Some(county.to_string());
        self
    }
    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
    pub fn with_wc_identifier(mut self, wc_identifier: &str) -> Self {
        self.wc_identifier = Some(wc_identifier.to_string());
        self
    }
    pub fn with_timestep(mut self, timestep: &str) -> Self {
        self.timestep = Some(timestep.to_string());
        self
    }
    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = Some(start_date);
        self
    }
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
    pub fn with_divrectype(mut self, divrectype: &str) -> Self {
        self.divrectype = Some(divrectype.to_string());
        self
    }
    pub fn with_ciu_code(mut self, ciu_code: &str) -> Self {
        self.ciu_code = Some(ciu_code.to_string());
        self
    }
    pub fn with_gnis_id(mut self, gnis_id: &str) -> Self {
        self.gnis_id = Some(gnis_id.to_string());
        self
    }
    pub fn with_aoi(mut self, aoi: Aoi) -> Self {
        self.aoi = Some(aoi);
        self
    }
    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wc_identifier_aliases() {
        assert_eq!(normalize_wc_identifier(None), "*diversion*");
        assert_eq!(normalize_wc_identifier(Some("DIVS")), "diversion");
        assert_eq!(normalize_wc_identifier(Some("d")), "diversion");
        assert_eq!(normalize_wc_identifier(Some("Releases")), "release");
        assert_eq!(normalize_wc_identifier(Some("r")), "release");
        assert_eq!(normalize_wc_identifier(Some("Storage")), "*Storage*");
    }
}
