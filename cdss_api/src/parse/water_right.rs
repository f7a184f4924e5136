use serde_json::Value;

use super::Record;
use crate::types::{Metadata, WaterRight, WaterRightDetails, WaterRightKind};

/// Builds a water right from the listing named by `kind`.
pub fn water_right(raw: &Value, kind: WaterRightKind) -> WaterRight {
    let r = Record::new(raw);
    let details = match kind {
        WaterRightKind::NetAmount => WaterRightDetails::NetAmount {
            appropriation_date: r.timestamp("appropriationDate"),
            padj_date: r.timestamp("padjDate"),
            adj_type: r.string("adjType"),
            status: r.string("status"),
            stream_mile: r.float("streamMile"),
            structure_type: r.string("structureType"),
            latitude: r.float("latitude"),
            longitude: r.float("longitude"),
        },
        WaterRightKind::Transaction => WaterRightDetails::Transaction {
            trans_id: r.string("transId"),
            trans_type: r.string("transType"),
            case_number: r.string("caseNumber"),
            action_comment: r.string("actionComment"),
            action_update: r.string("actionUpdate"),
        },
    };
    WaterRight {
        wdid: r.string("wdid"),
        water_right_name: r.string("waterRightName"),
        admin_number: r.float("adminNumber"),
        adj_date: r.timestamp("adjDate"),
        order_number: r.string("orderNumber"),
        prior_cases: r.string("priorCases"),
        decreed_uses: r.string("decreedUses"),
        decreed_amount: r.float("decreedAmount"),
        decreed_units: r.string("decreedUnits"),
        county: r.string("county"),
        water_district: r.int("waterDistrict"),
        division: r.int("division"),
        modified: r.timestamp("modified"),
        details,
        metadata: Metadata::new(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn kind_selects_details() {
        let raw = json!({
            "wdid": "0100501",
            "adminNumber": "11048.00000",
            "status": "Absolute",
            "transId": 912,
            "caseNumber": "W-1234"
        });
        let net = water_right(&raw, WaterRightKind::NetAmount);
        assert_eq!(net.kind(), WaterRightKind::NetAmount);
        assert_eq!(net.admin_number, Some(11048.0));
        assert!(matches!(
            net.details,
            WaterRightDetails::NetAmount { ref status, .. } if status.as_deref() == Some("Absolute")
        ));

        let transaction = water_right(&raw, WaterRightKind::Transaction);
        assert_eq!(transaction.kind(), WaterRightKind::Transaction);
        match transaction.details {
            WaterRightDetails::Transaction {
                trans_id,
                case_number,
                ..
            } => {
                assert_eq!(trans_id.as_deref(), Some("912"));
                assert_eq!(case_number.as_deref(), Some("W-1234"));
            }
            other => panic!("unexpected details: {other:?}"),
        }
    }
}
