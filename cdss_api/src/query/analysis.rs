use chrono::NaiveDate;

use super::{require_id, Endpoint, Query, QueryPairs};
use crate::{dates::batch_dates, Error};

type DateRange = (Option<NaiveDate>, Option<NaiveDate>);

/// One range for a plain request, one per calendar year when batching.
/// A start after the end is rejected rather than fetched as nothing.
fn date_ranges(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    batch: bool,
) -> Result<Vec<DateRange>, Error> {
    if let (Some(start), Some(end)) = (start, end) {
        if start > end {
            return Err(Error::invalid(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }
    }
    if !batch {
        return Ok(vec![(start, end)]);
    }
    let ranges = batch_dates(start, end);
    if ranges.is_empty() {
        return Err(Error::invalid("batched date range is empty"));
    }
    Ok(ranges
        .into_iter()
        .map(|(start, end)| (Some(start), Some(end)))
        .collect())
}

/// Filters for `/analysisservices/callanalysisbywdid/`.
#[derive(Debug, Clone)]
pub struct CallAnalysisWdidQuery {
    pub wdid: String,
    /// Administration number of the right being analysed, e.g. `"12345.00000"`.
    pub admin_no: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    /// Split the range into one request per calendar year.
    pub batch: bool,
}

impl CallAnalysisWdidQuery {
    pub fn new(wdid: &str, admin_no: &str) -> Self {
        Self {
            wdid: wdid.to_string(),
            admin_no: admin_no.to_string(),
            start_date: None,
            end_date: None,
            batch: false,
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
    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    /// The per-request queries this filter expands to.
    pub fn requests(&self) -> Result<Vec<Self>, Error> {
        Ok(date_ranges(self.start_date, self.end_date, self.batch)?
            .into_iter()
            .map(|(start_date, end_date)| Self {
                start_date,
                end_date,
                batch: false,
                ..self.clone()
            })
            .collect())
    }
}

impl Query for CallAnalysisWdidQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("wdid", require_id("wdid", &self.wdid)?)
            .set("adminNo", require_id("admin number", &self.admin_no)?)
            .param("startDate", self.start_date)
            .param("endDate", self.end_date)
            .build())
    }
}

/// Filters for `/analysisservices/callanalysisbygnisid/`.
#[derive(Debug, Clone)]
pub struct CallAnalysisGnisQuery {
    pub gnis_id: String,
    pub admin_no: String,
    pub stream_mile: f64,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub batch: bool,
}

impl CallAnalysisGnisQuery {
    pub fn new(gnis_id: &str, admin_no: &str, stream_mile: f64) -> Self {
        Self {
            gnis_id: gnis_id.to_string(),
            admin_no: admin_no.to_string(),
            stream_mile,
            start_date: None,
            end_date: None,
            batch: false,
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
    pub fn with_batch(mut self, batch: bool) -> Self {
        self.batch = batch;
        self
    }

    pub fn requests(&self) -> Result<Vec<Self>, Error> {
        Ok(date_ranges(self.start_date, self.end_date, self.batch)?
            .into_iter()
            .map(|(start_date, end_date)| Self {
                start_date,
                end_date,
                batch: false,
                ..self.clone()
            })
            .collect())
    }
}

impl Query for CallAnalysisGnisQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("gnisId", require_id("gnis id", &self.gnis_id)?)
            .set("adminNo", require_id("admin number", &self.admin_no)?)
            .set("streamMile", self.stream_mile)
            .param("startDate", self.start_date)
            .param("endDate", self.end_date)
            .build())
    }
}

/// Filters for `/analysisservices/watersourcerouteframework/`.
#[derive(Debug, Clone, Default)]
pub struct SourceRouteFrameworkQuery {
    pub division: Option<i64>,
    pub gnis_name: Option<String>,
    pub water_district: Option<i64>,
}

impl SourceRouteFrameworkQuery {
    pub fn with_division(mut self, division: i64) -> Self {
        self.division = Some(division);
        self
    }
    pub fn with_gnis_name(mut self, gnis_name: &str) -> Self {
        self.gnis_name = Some(gnis_name.to_string());
        self
    }
    pub fn with_water_district(mut self, water_district: i64) -> Self {
        self.water_district = Some(water_district);
        self
    }
}

impl Query for SourceRouteFrameworkQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .param("division", self.division)
            .param("gnisName", self.gnis_name.as_deref())
            .param("waterDistrict", self.water_district)
            .build())
    }
}

/// Filters for `/analysisservices/watersourcerouteanalysis/`: the
/// structures between a lower and an upper terminus.
#[derive(Debug, Clone)]
pub struct SourceRouteAnalysisQuery {
    pub lt_gnis_id: String,
    pub lt_stream_mile: f64,
    pub ut_gnis_id: String,
    pub ut_stream_mile: f64,
}

impl SourceRouteAnalysisQuery {
    pub fn new(lt_gnis_id: &str, lt_stream_mile: f64, ut_gnis_id: &str, ut_stream_mile: f64) -> Self {
        Self {
            lt_gnis_id: lt_gnis_id.to_string(),
            lt_stream_mile,
            ut_gnis_id: ut_gnis_id.to_string(),
            ut_stream_mile,
        }
    }
}

impl Query for SourceRouteAnalysisQuery {
    fn to_query(&self, endpoint: &Endpoint) -> Result<QueryPairs, Error> {
        Ok(endpoint
            .query()
            .set("ltGnisId", require_id("lower terminus gnis id", &self.lt_gnis_id)?)
            .set("ltStreamMile", self.lt_stream_mile)
            .set("utGnisId", require_id("upper terminus gnis id", &self.ut_gnis_id)?)
            .set("utStreamMile", self.ut_stream_mile)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn unbatched_is_a_single_request() {
        let query = CallAnalysisWdidQuery::new("0100578", "12345.00000")
            .with_start_date(ymd(2019, 5, 1))
            .with_end_date(ymd(2021, 5, 1));
        let requests = query.requests().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].start_date, Some(ymd(2019, 5, 1)));
    }

    #[test]
    fn batched_splits_by_year() {
        let query = CallAnalysisGnisQuery::new("00178359", "12345.00000", 10.5)
            .with_start_date(ymd(2019, 5, 1))
            .with_end_date(ymd(2021, 5, 1))
            .with_batch(true);
        let ranges: Vec<_> = query
            .requests()
            .unwrap()
            .into_iter()
            .map(|q| (q.start_date, q.end_date))
            .collect();
        assert_eq!(
            ranges,
            vec![
                (Some(ymd(2019, 5, 1)), Some(ymd(2019, 12, 31))),
                (Some(ymd(2020, 1, 1)), Some(ymd(2020, 12, 31))),
                (Some(ymd(2021, 1, 1)), Some(ymd(2021, 5, 1))),
            ]
        );
    }

    #[test]
    fn inverted_ranges_are_rejected() {
        let wdid = CallAnalysisWdidQuery::new("0100578", "12345.00000")
            .with_start_date(ymd(2022, 1, 1))
            .with_end_date(ymd(2021, 1, 1));
        assert!(matches!(wdid.requests(), Err(Error::InvalidArgument(_))));
        assert!(matches!(
            wdid.with_batch(true).requests(),
            Err(Error::InvalidArgument(_))
        ));

        let gnis = CallAnalysisGnisQuery::new("00178359", "12345.00000", 10.5)
            .with_start_date(ymd(2022, 1, 1))
            .with_end_date(ymd(2021, 1, 1))
            .with_batch(true);
        assert!(matches!(gnis.requests(), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn batching_from_a_future_start_is_rejected() {
        let query = CallAnalysisWdidQuery::new("0100578", "12345.00000")
            .with_start_date(ymd(9999, 1, 1))
            .with_batch(true);
        assert!(matches!(query.requests(), Err(Error::InvalidArgument(_))));
    }
}
