//! Order detail entities from the query vocabulary.

use roxmltree::Node;
use serde::Serialize;

use super::collection::{CollectionItem, Sequence};
use super::contacts::OrderContacts;
use super::{parse_timestamp, FromXmlNode};
use crate::config::{Namespaces, QUERY_NS};
use crate::xml::{find, find_text};

/// All order details in a query response.
pub type OrderDetails = Sequence<OrderDetail>;

/// Modification history of an order.
pub type ModificationEvents = Sequence<ModificationEvent>;

/// Vulnerability scan summary of an order.
pub type Vulnerabilities = Sequence<Vulnerability>;

/// Status, organization and history of a single order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderDetail {
    /// Minor status code (e.g., "1100").
    pub status_code: String,

    /// Human readable minor status name.
    pub status_name: String,

    /// Address the domain approval email was sent to.
    pub approver_email: String,

    pub organization_info: OrganizationInfo,

    pub organization_contacts: OrderContacts,

    /// Empty when the response carries no `ModificationEvents`.
    pub modified_events: ModificationEvents,

    /// Empty when the response carries no `Vulnerabilities`.
    pub vulnerabilities: Vulnerabilities,
}

impl FromXmlNode for OrderDetail {
    fn deserialize(node: Node<'_, '_>) -> Self {
        let mut detail = Self {
            status_code: find_text(node, ".//m:OrderStatusMinorCode", &QUERY_NS),
            status_name: find_text(node, ".//m:OrderStatusMinorName", &QUERY_NS),
            approver_email: find_text(node, ".//m:ApproverEmailAddress", &QUERY_NS),
            ..Self::default()
        };

        match find(node, ".//m:OrganizationInfo", &QUERY_NS) {
            Some(org_info) => detail.organization_info = OrganizationInfo::deserialize(org_info),
            None => tracing::trace!("OrderDetail has no OrganizationInfo, using default"),
        }

        match find(node, ".//m:OrderContacts", &QUERY_NS) {
            Some(contacts) => detail.organization_contacts = OrderContacts::deserialize(contacts),
            None => tracing::trace!("OrderDetail has no OrderContacts, using default"),
        }

        if let Some(events) = find(node, ".//m:ModificationEvents", &QUERY_NS) {
            detail.modified_events = ModificationEvents::deserialize(events);
        }

        if let Some(vulnerabilities) = find(node, ".//m:Vulnerabilities", &QUERY_NS) {
            detail.vulnerabilities = Vulnerabilities::deserialize(vulnerabilities);
        }

        detail
    }
}

impl CollectionItem for OrderDetail {
    const ITEM_PATH: &'static str = ".//m:OrderDetail";
    const NAMESPACES: Namespaces = QUERY_NS;
}

/// Organization the certificate is issued to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrganizationInfo {
    pub name: String,
    pub city: String,
    /// Region is also the state or province.
    pub region: String,
    pub country: String,
}

impl FromXmlNode for OrganizationInfo {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            name: find_text(node, ".//m:OrganizationName", &QUERY_NS),
            city: find_text(node, ".//m:City", &QUERY_NS),
            region: find_text(node, ".//m:Region", &QUERY_NS),
            country: find_text(node, ".//m:Country", &QUERY_NS),
        }
    }
}

/// A single change recorded against an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModificationEvent {
    pub mod_id: String,
    pub event_name: String,
    pub time_stamp: String,
}

impl ModificationEvent {
    /// The event time, if `time_stamp` is a valid RFC 3339 timestamp.
    #[must_use]
    pub fn parsed_timestamp(&self) -> Option<chrono::DateTime<chrono::FixedOffset>> {
        parse_timestamp(&self.time_stamp)
    }
}

impl FromXmlNode for ModificationEvent {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            mod_id: find_text(node, ".//m:ModificationEventID", &QUERY_NS),
            event_name: find_text(node, ".//m:ModificationEventName", &QUERY_NS),
            time_stamp: find_text(node, ".//m:ModificationTimestamp", &QUERY_NS),
        }
    }
}

impl CollectionItem for ModificationEvent {
    const ITEM_PATH: &'static str = ".//m:ModificationEvent";
    const NAMESPACES: Namespaces = QUERY_NS;
}

/// Number of vulnerabilities found at one severity level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Vulnerability {
    pub severity: String,
    pub number_found: String,
}

impl FromXmlNode for Vulnerability {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            severity: find_text(node, ".//m:Severity", &QUERY_NS),
            number_found: find_text(node, ".//m:NumberFound", &QUERY_NS),
        }
    }
}

impl CollectionItem for Vulnerability {
    const ITEM_PATH: &'static str = ".//m:Vulnerability";
    const NAMESPACES: Namespaces = QUERY_NS;
}
