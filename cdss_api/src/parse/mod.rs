//! Builders from raw JSON records to typed models.
//!
//! One function per resource shape. Shape-dependent builders take an explicit
//! discriminator and never look at the record to guess it. Builders cannot
//! fail: bad field values become `None`.

use serde_json::Value;

use crate::coerce::{parse_timestamp, safe_float, safe_int, safe_string, Timestamp};

mod station;
pub use self::station::{climate_station, station};

mod reading;
pub use self::reading::{climate_reading, reading};

mod well;
pub use self::well::{geophysical_well, log_pick, well, well_measurement};

mod admin_call;
pub use self::admin_call::admin_call;

mod analysis;
pub use self::analysis::{call_analysis, route_analysis, source_route};

mod structure;
pub use self::structure::{diversion_record, structure, water_class};

mod water_right;
pub use self::water_right::water_right;

mod reference;
pub use self::reference::reference_table;

/// Key of the record list in every response envelope.
pub const RESULT_LIST: &str = "ResultList";

/// Builds one model per record of a page. A missing or non-array
/// `ResultList` is an empty page.
pub fn parse_collection<M, F>(page: &Value, build: F) -> Vec<M>
where
    F: Fn(&Value) -> M,
{
    page.get(RESULT_LIST)
        .and_then(Value::as_array)
        .map(|records| records.iter().map(build).collect())
        .unwrap_or_default()
}

/// Typed field access over one raw record.
#[derive(Clone, Copy)]
pub(crate) struct Record<'a>(&'a Value);

impl<'a> Record<'a> {
    pub(crate) fn new(raw: &'a Value) -> Self {
        Self(raw)
    }

    pub(crate) fn get(&self, key: &str) -> Option<&'a Value> {
        self.0.get(key)
    }

    pub(crate) fn string(&self, key: &str) -> Option<String> {
        safe_string(self.get(key))
    }

    pub(crate) fn float(&self, key: &str) -> Option<f64> {
        safe_float(self.get(key))
    }

    pub(crate) fn int(&self, key: &str) -> Option<i64> {
        safe_int(self.get(key))
    }

    pub(crate) fn timestamp(&self, key: &str) -> Option<Timestamp> {
        parse_timestamp(self.get(key))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn missing_or_malformed_envelope_is_empty() {
        let count = |page: Value| parse_collection(&page, |_| ()).len();
        assert_eq!(count(json!({})), 0);
        assert_eq!(count(json!({"ResultList": null})), 0);
        assert_eq!(count(json!({"ResultList": {"wdid": "1"}})), 0);
        assert_eq!(count(json!([])), 0);
        assert_eq!(count(json!({"ResultList": [{}, {}]})), 2);
    }
}
