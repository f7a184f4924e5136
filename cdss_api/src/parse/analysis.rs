use serde_json::Value;

use super::Record;
use crate::types::{CallAnalysis, CallAnalysisKind, Metadata, RouteAnalysis, SourceRoute};

/// Builds a call analysis row. Gnis-keyed rows also carry the analysed
/// stream location. Secondary call attributes that are present go to
/// `metadata`.
pub fn call_analysis(raw: &Value, kind: CallAnalysisKind) -> CallAnalysis {
    let r = Record::new(raw);
    let (gnis_id, stream_mile) = match kind {
        CallAnalysisKind::Gnis => (r.string("gnisId"), r.float("streamMile")),
        CallAnalysisKind::Wdid => (None, None),
    };
    CallAnalysis {
        kind,
        analysis_date: r.timestamp("analysisDate"),
        wdid: r.string("analysisWdid"),
        gnis_id,
        stream_mile,
        admin_number: r.float("analysisWrAdminNo"),
        percent_time_out_of_priority: r.float("analysisOutOfPriorityPercentOfDay"),
        downstream_call_wdid: r.string("locationWdid"),
        downstream_call_right: r.string("priorityStructure"),
        downstream_call_stream_mile: r.float("locationWdidStreamMile"),
        downstream_call_admin_number: r.float("priorityAdminNo"),
        downstream_call_decreed_amount: None,
        downstream_call_decreed_unit: None,
        downstream_call_appropriation_date: r.timestamp("priorityDate"),
        downstream_call_status: r.string("callType"),
        modified: r.timestamp("dateTimeSet"),
        metadata: call_metadata(r),
    }
}

fn call_metadata(r: Record<'_>) -> Metadata {
    let mut metadata = Metadata::new();
    let mut put = |key: &str, value: Option<Value>| {
        if let Some(value) = value {
            metadata.insert(key.to_string(), value);
        }
    };
    put("division", r.int("division").map(Value::from));
    put(
        "date_time_released",
        r.timestamp("dateTimeReleased").map(|ts| Value::from(ts.to_rfc3339())),
    );
    put("water_source_name", r.string("waterSourceName").map(Value::from));
    put("location_structure", r.string("locationStructure").map(Value::from));
    put("priority_order_no", r.int("priorityOrderNo").map(Value::from));
    put("priority_no", r.string("priorityNo").map(Value::from));
    put("bounding_wdid", r.string("boundingWdid").map(Value::from));
    put("bounding_structure_name", r.string("boundingStructureName").map(Value::from));
    put("set_comments", r.string("setComments").map(Value::from));
    put("release_comment", r.string("releaseComment").map(Value::from));
    metadata
}

pub fn source_route(raw: &Value) -> SourceRoute {
    let r = Record::new(raw);
    SourceRoute {
        gnis_id: r.string("gnisId"),
        gnis_name: r.string("gnisName"),
        division: r.int("division"),
        water_district: r.int("waterDistrict"),
        stream_length: r.float("streamLength"),
        tributary_to_level: r.int("tributaryToLevel"),
        tributary_to_gnis_id: r.string("TributaryToGnisId"),
        tributary_gnis_name: r.string("tribGnisName"),
        tributary_to_stream_mile: r.float("tributaryToStreamMile"),
        metadata: Metadata::new(),
    }
}

pub fn route_analysis(raw: &Value) -> RouteAnalysis {
    let r = Record::new(raw);
    RouteAnalysis {
        wdid: r.string("wdid"),
        structure_name: r.string("structureName"),
        stream_mile: r.float("streamMile"),
        structure_type: r.string("structureType"),
        decreed_amount: r.float("decreedAmount"),
        decreed_unit: r.string("decreedUnit"),
        appropriation_date: r.timestamp("appropriationDate"),
        admin_number: r.float("adminNo"),
        modified: r.timestamp("modified"),
        metadata: Metadata::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn call_analysis_promotes_and_collects_metadata() {
        let raw = json!({
            "analysisDate": "2021-06-01 00:00:00",
            "analysisWdid": "0100578",
            "analysisWrAdminNo": "45678.12345",
            "analysisOutOfPriorityPercentOfDay": 100,
            "locationWdid": "0200810",
            "priorityStructure": "SOUTH PLATTE CANAL",
            "priorityDate": "1871-04-01",
            "callType": "Active",
            "division": 1,
            "waterSourceName": "SOUTH PLATTE RIVER",
            "boundingWdid": null
        });
        let analysis = call_analysis(&raw, CallAnalysisKind::Wdid);
        assert_eq!(analysis.kind, CallAnalysisKind::Wdid);
        assert_eq!(analysis.wdid.as_deref(), Some("0100578"));
        assert_eq!(analysis.admin_number, Some(45678.12345));
        assert_eq!(analysis.percent_time_out_of_priority, Some(100.0));
        assert_eq!(analysis.downstream_call_right.as_deref(), Some("SOUTH PLATTE CANAL"));
        assert_eq!(analysis.downstream_call_status.as_deref(), Some("Active"));
        assert!(analysis.downstream_call_decreed_amount.is_none());
        assert!(analysis.gnis_id.is_none());
        assert_eq!(analysis.metadata.get("division"), Some(&json!(1)));
        assert_eq!(
            analysis.metadata.get("water_source_name"),
            Some(&json!("SOUTH PLATTE RIVER"))
        );
        assert!(!analysis.metadata.contains_key("bounding_wdid"));
    }

    #[test]
    fn gnis_analysis_reads_stream_location() {
        let raw = json!({"gnisId": "00178359", "streamMile": "12.5"});
        let analysis = call_analysis(&raw, CallAnalysisKind::Gnis);
        assert_eq!(analysis.gnis_id.as_deref(), Some("00178359"));
        assert_eq!(analysis.stream_mile, Some(12.5));
        assert!(analysis.metadata.is_empty());
    }
}
