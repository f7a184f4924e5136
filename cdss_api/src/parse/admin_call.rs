use serde_json::Value;

use super::Record;
use crate::types::{AdminCall, Metadata};

pub fn admin_call(raw: &Value) -> AdminCall {
    let r = Record::new(raw);
    AdminCall {
        call_number: r.int("callNumber"),
        call_type: r.string("callType"),
        date_time_set: r.timestamp("dateTimeSet"),
        date_time_released: r.timestamp("dateTimeReleased"),
        water_source_name: r.string("waterSourceName"),
        location_wdid: r.string("locationWdid"),
        location_wdid_streammile: r.float("locationWdidStreammile"),
        location_structure_name: r.string("locationStructureName"),
        priority_wdid: r.string("priorityWdid"),
        priority_structure_name: r.string("priorityStructureName"),
        priority_admin_number: r.float("priorityAdminNumber"),
        priority_order_number: r.int("priorityOrderNumber"),
        priority_date: r.timestamp("priorityDate"),
        priority_number: r.int("priorityNumber"),
        bounding_wdid: r.string("boundingWdid"),
        bounding_structure_name: r.string("boundingStructureName"),
        set_comments: r.string("setComments"),
        release_comment: r.string("releaseComment"),
        division: r.int("division"),
        location_structure_latitude: r.float("locationStructureLatitude"),
        location_structure_longitude: r.float("locationStructureLongitude"),
        bounding_structure_latitude: r.float("boundingStructureLatitude"),
        bounding_structure_longitude: r.float("boundingStructureLongitude"),
        modified: r.timestamp("modified"),
        more_information: r.string("moreInformation"),
        metadata: Metadata::new(),
    }
}
