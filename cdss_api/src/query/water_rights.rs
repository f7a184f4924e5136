use super::{Aoi, Endpoint, Query, QueryPairs};
use crate::Error;

/// Filters shared by the net amount and transaction listings.
#[derive(Debug, Clone, Default)]
pub struct WaterRightQuery {
    pub aoi: Option<Aoi>,
    pub radius: Option<f64>,
    pub county: Option<String>,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub wdid: Option<String>,
}

impl Query for WaterRightQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("units", "miles")
            .param("county", self.county.as_deref())
            .param("division", self.division)
            .param("waterDistrict", self.water_district)
            .param("wdid", self.wdid.as_deref())
            .aoi(self.aoi.as_ref(), self.radius)
            .build())
    }
}

impl WaterRightQuery {
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
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
    pub fn with_wdid(mut self, wdid: &str) -> Self {
        self.wdid = Some(wdid.to_string());
        self
    }
}
