//! Quick order response entities.
//!
//! The order identifier and response header live in the order vocabulary.

use roxmltree::Node;
use serde::Serialize;

use super::{parse_timestamp, FromXmlNode};
use crate::config::ORDER_NS;
use crate::xml::find_text;

/// Top-level result of a `QuickOrder` call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuickOrderResponse {
    pub result: QuickOrderResult,
}

impl FromXmlNode for QuickOrderResponse {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            result: QuickOrderResult::deserialize(node),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QuickOrderResult {
    /// Order identifier assigned by GeoTrust.
    pub order_id: String,
    pub order_response: OrderResponseHeader,
}

impl FromXmlNode for QuickOrderResult {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            order_id: find_text(node, ".//m:GeoTrustOrderID", &ORDER_NS),
            order_response: OrderResponseHeader::deserialize(node),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderResponseHeader {
    pub partner_order_id: String,
    /// "0" on success.
    pub success_code: String,
    pub timestamp: String,
}

impl OrderResponseHeader {
    /// The response time, if `timestamp` is a valid RFC 3339 timestamp.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        parse_timestamp(&self.timestamp)
    }
}

impl FromXmlNode for OrderResponseHeader {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            partner_order_id: find_text(node, ".//m:PartnerOrderID", &ORDER_NS),
            success_code: find_text(node, ".//m:SuccessCode", &ORDER_NS),
            timestamp: find_text(node, ".//m:Timestamp", &ORDER_NS),
        }
    }
}
