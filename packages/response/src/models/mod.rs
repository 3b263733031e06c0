//! Typed entities deserialized from WebTrust response trees.
//!
//! Every entity implements [`FromXmlNode`]. Deserialization never fails:
//! a missing leaf becomes an empty string, a missing collection becomes an
//! empty [`Sequence`], and a missing nested entity keeps its default.

mod certificate;
mod collection;
mod contacts;
mod order;
mod quick_order;

use roxmltree::Node;

pub use certificate::{Certificate, CertificateInfo, IntermediateCertificate};
pub use collection::{CollectionItem, Sequence};
pub use contacts::{Contact, OrderContacts};
pub use order::{
    ModificationEvent, ModificationEvents, OrderDetail, OrderDetails, OrganizationInfo,
    Vulnerabilities, Vulnerability,
};
pub use quick_order::{OrderResponseHeader, QuickOrderResponse, QuickOrderResult};

/// Conversion from an XML element into a typed entity.
pub trait FromXmlNode: Sized {
    /// Build the entity from `node`, defaulting anything that is absent.
    fn deserialize(node: Node<'_, '_>) -> Self;
}

/// Parse an RFC 3339 timestamp, returning `None` for empty or malformed text.
fn parse_timestamp(text: &str) -> Option<chrono::DateTime<chrono::FixedOffset>> {
    chrono::DateTime::parse_from_rfc3339(text.trim()).ok()
}
