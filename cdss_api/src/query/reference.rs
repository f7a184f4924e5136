use super::{Endpoint, Query, QueryPairs};
use crate::{types::ReferenceTableKind, Error};

/// Filters for one reference table. `division` and `water_district` apply
/// to the district and division tables; `name` applies to every other table
/// through its own filter key.
#[derive(Debug, Clone)]
pub struct ReferenceTableQuery {
    pub table: ReferenceTableKind,
    pub division: Option<i64>,
    pub water_district: Option<i64>,
    pub name: Option<String>,
}

impl ReferenceTableQuery {
    pub fn new(table: ReferenceTableKind) -> Self {
        Self {
            table,
            division: None,
            water_district: None,
            name: None,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        Endpoint::new(self.table.endpoint())
    }

    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}

impl Query for ReferenceTableQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        let name_key = self.table.name_filter_key();
        if self.name.is_some() && name_key.is_none() {
            return Err(Error::invalid(format!(
                "table '{}' cannot be filtered by name",
                self.table
            )));
        }
        let builder = endpoint.query();
        let builder = match (self.table, name_key) {
            (ReferenceTableKind::WaterDistricts, _) => builder
                .param("division", self.division)
                .param("waterDistrict", self.water_district),
            (ReferenceTableKind::WaterDivisions, _) => builder.param("division", self.division),
            (_, Some(key)) => builder.param(key, self.name.as_deref()),
            (_, None) => builder,
        };
        Ok(builder.build())
    }
}
