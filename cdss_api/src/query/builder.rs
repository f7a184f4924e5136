//! Turns logical filters into wire-format query pairs.

use chrono::NaiveDate;

use super::{aoi::Aoi, endpoint::Endpoint};
use crate::dates::{format_date, DateStyle};

/// Ordered `(key, value)` pairs, already in wire format.
pub type QueryPairs = Vec<(String, String)>;

/// Separator used when a filter takes several values.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ListJoin {
    /// `a,b`
    #[default]
    Comma,
    /// `a%2C+b`, an escaped ", ".
    EncodedCommaSpace,
}

impl ListJoin {
    /// The separator as it appears on the wire.
    pub fn separator(self) -> &'static str {
        match self {
            ListJoin::Comma => ",",
            ListJoin::EncodedCommaSpace => "%2C+",
        }
    }
}

/// A filter value before formatting.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    Date(NaiveDate),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::Text(value.clone())
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        QueryValue::Integer(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        QueryValue::Integer(value.into())
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        QueryValue::Bool(value)
    }
}

impl From<NaiveDate> for QueryValue {
    fn from(value: NaiveDate) -> Self {
        QueryValue::Date(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        QueryValue::List(value)
    }
}

impl From<&[String]> for QueryValue {
    fn from(value: &[String]) -> Self {
        QueryValue::List(value.to_vec())
    }
}

impl From<&[&str]> for QueryValue {
    fn from(value: &[&str]) -> Self {
        QueryValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Collects filters and formats them per the endpoint's conventions:
///
/// 1. absent values (and empty text or lists) are dropped,
/// 2. text and list items are form-encoded,
/// 3. lists are joined with the configured [`ListJoin`],
/// 4. dates are written `MM-DD-YYYY` (or slash-escaped).
///
/// The output is wire format and goes out unchanged. With value encoding
/// on, every wire value is form-encoded a second time for services that
/// decode twice. Setting a key twice keeps the last value.
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    params: Vec<(String, QueryValue)>,
    list_join: ListJoin,
    date_style: DateStyle,
    encode_values: bool,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    /// Starts a query carrying only `format=json`.
    pub fn new() -> Self {
        Self {
            params: vec![("format".to_string(), QueryValue::from("json"))],
            list_join: ListJoin::default(),
            date_style: DateStyle::default(),
            encode_values: false,
        }
    }

    /// Starts a query configured with an endpoint's conventions.
    pub fn for_endpoint(endpoint: &Endpoint) -> Self {
        let builder = Self::new()
            .with_list_join(endpoint.list_join)
            .with_date_style(endpoint.date_style);
        let builder = if endpoint.encode_values {
            builder.with_encoded_values()
        } else {
            builder
        };
        if endpoint.date_format {
            builder.with_date_format()
        } else {
            builder
        }
    }

    pub fn with_list_join(mut self, list_join: ListJoin) -> Self {
        self.list_join = list_join;
        self
    }

    pub fn with_date_style(mut self, date_style: DateStyle) -> Self {
        self.date_style = date_style;
        self
    }

    pub fn with_encoded_values(mut self) -> Self {
        self.encode_values = true;
        self
    }

    /// Asks the API for `YYYY-MM-DD HH:MM:SS` timestamps.
    pub fn with_date_format(self) -> Self {
        self.set("dateFormat", "spaceSepToSeconds")
    }

    /// Adds `key` when `value` is present.
    pub fn param<V: Into<QueryValue>>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(key, value),
            None => self,
        }
    }

    /// Adds `key` unconditionally, replacing an earlier value.
    pub fn set<V: Into<QueryValue>>(mut self, key: &str, value: V) -> Self {
        let value = value.into();
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
        self
    }

    /// Uppercases a name filter so spaces go out as `+`, the form the
    /// ground water endpoints match on.
    pub fn plus_spaced(self, key: &str, value: Option<&str>) -> Self {
        self.param(key, value.map(|v| v.trim().to_uppercase()))
    }

    /// Adds `latitude`, `longitude` and `radius` for a spatial search.
    pub fn aoi(self, aoi: Option<&Aoi>, radius: Option<f64>) -> Self {
        match aoi {
            Some(aoi) => {
                let (latitude, longitude, radius) = aoi.resolve(radius);
                self.set("latitude", latitude)
                    .set("longitude", longitude)
                    .set("radius", radius)
            }
            None => self,
        }
    }

    /// Formats every collected value.
    pub fn build(&self) -> QueryPairs {
        self.params
            .iter()
            .filter_map(|(key, value)| self.format(value).map(|v| (encode(key), v)))
            .collect()
    }

    fn format(&self, value: &QueryValue) -> Option<String> {
        let wire = match value {
            QueryValue::Text(text) if text.is_empty() => return None,
            QueryValue::Text(text) => encode(text),
            QueryValue::Integer(n) => n.to_string(),
            QueryValue::Float(n) => n.to_string(),
            QueryValue::Bool(b) => b.to_string(),
            QueryValue::List(items) if items.is_empty() => return None,
            QueryValue::List(items) => items
                .iter()
                .map(|item| encode(item))
                .collect::<Vec<_>>()
                .join(self.list_join.separator()),
            QueryValue::Date(date) => format_date(*date, self.date_style),
        };
        Some(if self.encode_values { encode(&wire) } else { wire })
    }
}

fn encode(raw: &str) -> String {
    url::form_urlencoded::byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn value_of<'a>(pairs: &'a QueryPairs, key: &str) -> Option<&'a str> {
        pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn defaults_to_json() {
        assert_eq!(
            QueryBuilder::new().build(),
            vec![("format".to_string(), "json".to_string())]
        );
    }

    #[test]
    fn absent_values_are_omitted() {
        let pairs = QueryBuilder::new()
            .param("county", None::<&str>)
            .param("division", None::<i64>)
            .param("wdid", Some(Vec::<String>::new()))
            .param("abbrev", Some(""))
            .build();
        assert_eq!(pairs.len(), 1);
        assert!(value_of(&pairs, "county").is_none());
        assert!(value_of(&pairs, "wdid").is_none());
        assert!(value_of(&pairs, "abbrev").is_none());
    }

    #[test]
    fn lists_use_the_configured_separator() {
        let wdids = vec!["0100578".to_string(), "0100504".to_string()];
        let comma = QueryBuilder::new().param("wdid", Some(wdids.clone())).build();
        assert_eq!(value_of(&comma, "wdid"), Some("0100578,0100504"));

        let escaped = QueryBuilder::new()
            .with_list_join(ListJoin::EncodedCommaSpace)
            .param("wdid", Some(wdids.clone()))
            .build();
        assert_eq!(value_of(&escaped, "wdid"), Some("0100578%2C+0100504"));
    }

    #[test]
    fn list_items_are_encoded_before_joining() {
        let names = vec!["A,B".to_string(), "C D".to_string()];
        let pairs = QueryBuilder::new()
            .with_list_join(ListJoin::EncodedCommaSpace)
            .param("structureName", Some(names))
            .build();
        assert_eq!(value_of(&pairs, "structureName"), Some("A%2CB%2C+C+D"));
    }

    #[test]
    fn text_is_form_encoded() {
        let pairs = QueryBuilder::new()
            .param("stationName", Some("A+B 100% C=D&E#F"))
            .build();
        assert_eq!(
            value_of(&pairs, "stationName"),
            Some("A%2BB+100%25+C%3DD%26E%23F")
        );
    }

    #[test]
    fn dates_follow_the_date_style() {
        let date = NaiveDate::from_ymd_opt(2023, 4, 9).unwrap();
        let dashed = QueryBuilder::new().param("min-measDate", Some(date)).build();
        assert_eq!(value_of(&dashed, "min-measDate"), Some("04-09-2023"));

        let slashed = QueryBuilder::new()
            .with_date_style(DateStyle::SlashEscaped)
            .param("min-measDate", Some(date))
            .build();
        assert_eq!(value_of(&slashed, "min-measDate"), Some("04%2F09%2F2023"));
    }

    #[test]
    fn encoded_values_are_encoded_twice() {
        let pairs = QueryBuilder::new()
            .with_encoded_values()
            .param("waterSource", Some("SOUTH PLATTE/RIVER"))
            .param("min-dateTimeSet", NaiveDate::from_ymd_opt(2024, 1, 2))
            .build();
        assert_eq!(value_of(&pairs, "waterSource"), Some("SOUTH%2BPLATTE%252FRIVER"));
        assert_eq!(value_of(&pairs, "min-dateTimeSet"), Some("01-02-2024"));
        assert_eq!(value_of(&pairs, "format"), Some("json"));
    }

    #[test]
    fn plus_spaced_uppercases() {
        let pairs = QueryBuilder::new()
            .plus_spaced("county", Some("rio grande"))
            .plus_spaced("designatedBasin", Some("a+b basin"))
            .build();
        assert_eq!(value_of(&pairs, "county"), Some("RIO+GRANDE"));
        assert_eq!(value_of(&pairs, "designatedBasin"), Some("A%2BB+BASIN"));
    }

    #[test]
    fn later_values_replace_earlier_ones() {
        let pairs = QueryBuilder::new()
            .set("pageIndex", 1)
            .set("pageIndex", 2)
            .build();
        assert_eq!(pairs.iter().filter(|(k, _)| k == "pageIndex").count(), 1);
        assert_eq!(value_of(&pairs, "pageIndex"), Some("2"));
    }

    #[test]
    fn aoi_adds_coordinates_and_default_radius() {
        let aoi = Aoi::new(39.7, -104.9).unwrap();
        let pairs = QueryBuilder::new().aoi(Some(&aoi), None).build();
        assert_eq!(value_of(&pairs, "latitude"), Some("39.7"));
        assert_eq!(value_of(&pairs, "longitude"), Some("-104.9"));
        assert_eq!(value_of(&pairs, "radius"), Some("20"));

        let pairs = QueryBuilder::new().aoi(Some(&aoi), Some(5.5)).build();
        assert_eq!(value_of(&pairs, "radius"), Some("5.5"));
    }
}
