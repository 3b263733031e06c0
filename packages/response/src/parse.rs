//! Entry points turning response XML into typed entities.

use std::fmt;
use std::str::FromStr;

use roxmltree::Document;
use serde::Serialize;

use crate::envelope;
use crate::error::{ResponseError, Result};
use crate::models::{
    Certificate, CertificateInfo, FromXmlNode, OrderContacts, OrderDetail, OrderDetails,
    OrganizationInfo, QuickOrderResponse,
};

/// Deserialize the payload of a parsed document.
///
/// SOAP framing is stripped first; fragments are deserialized from their root element.
pub fn from_document<T: FromXmlNode>(doc: &Document<'_>) -> T {
    T::deserialize(envelope::payload(doc.root_element()))
}

/// Parse XML text and deserialize its payload.
///
/// # Errors
/// Returns `ResponseError::XmlParse` if the text is not well-formed XML.
///
/// # Examples
/// ```
/// use webtrust_response::models::QuickOrderResponse;
/// use webtrust_response::parse::from_xml;
///
/// let xml = r#"<QuickOrderResponse xmlns="http://api.geotrust.com/webtrust/order">
///   <GeoTrustOrderID>123</GeoTrustOrderID>
/// </QuickOrderResponse>"#;
/// let response: QuickOrderResponse = from_xml(xml).unwrap();
/// assert_eq!(response.result.order_id, "123");
/// ```
pub fn from_xml<T: FromXmlNode>(xml: &str) -> Result<T> {
    let doc = Document::parse(xml)?;
    Ok(from_document(&doc))
}

/// Fail with `ResponseError::SoapFault` if the document is a SOAP fault.
pub fn check_fault(doc: &Document<'_>) -> Result<()> {
    match envelope::fault(doc.root_element()) {
        Some(fault) => Err(ResponseError::SoapFault {
            code: fault.fault_code,
            message: fault.fault_string,
        }),
        None => Ok(()),
    }
}

/// Top-level entities a response document can be decoded as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    OrderDetails,
    OrderDetail,
    Certificate,
    CertificateInfo,
    OrganizationInfo,
    OrderContacts,
    QuickOrder,
}

impl ResponseKind {
    /// Command-line names of all kinds.
    pub const NAMES: &'static [&'static str] = &[
        "order-details",
        "order-detail",
        "certificate",
        "certificate-info",
        "organization-info",
        "order-contacts",
        "quick-order",
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OrderDetails => "order-details",
            Self::OrderDetail => "order-detail",
            Self::Certificate => "certificate",
            Self::CertificateInfo => "certificate-info",
            Self::OrganizationInfo => "organization-info",
            Self::OrderContacts => "order-contacts",
            Self::QuickOrder => "quick-order",
        }
    }

    /// Decode `doc` as this kind.
    #[must_use]
    pub fn decode(&self, doc: &Document<'_>) -> Decoded {
        match self {
            Self::OrderDetails => Decoded::OrderDetails(from_document(doc)),
            Self::OrderDetail => Decoded::OrderDetail(Box::new(from_document(doc))),
            Self::Certificate => Decoded::Certificate(from_document(doc)),
            Self::CertificateInfo => Decoded::CertificateInfo(from_document(doc)),
            Self::OrganizationInfo => Decoded::OrganizationInfo(from_document(doc)),
            Self::OrderContacts => Decoded::OrderContacts(from_document(doc)),
            Self::QuickOrder => Decoded::QuickOrder(from_document(doc)),
        }
    }
}

impl fmt::Display for ResponseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseKind {
    type Err = ResponseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "order-details" => Ok(Self::OrderDetails),
            "order-detail" => Ok(Self::OrderDetail),
            "certificate" => Ok(Self::Certificate),
            "certificate-info" => Ok(Self::CertificateInfo),
            "organization-info" => Ok(Self::OrganizationInfo),
            "order-contacts" => Ok(Self::OrderContacts),
            "quick-order" => Ok(Self::QuickOrder),
            _ => Err(ResponseError::UnknownKind(s.to_string())),
        }
    }
}

/// A decoded top-level entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Decoded {
    OrderDetails(OrderDetails),
    OrderDetail(Box<OrderDetail>),
    Certificate(Certificate),
    CertificateInfo(CertificateInfo),
    OrganizationInfo(OrganizationInfo),
    OrderContacts(OrderContacts),
    QuickOrder(QuickOrderResponse),
}

impl Decoded {
    /// One-line description for display.
    #[must_use]
    pub fn summary(&self) -> String {
        match self {
            Self::OrderDetails(details) => format!("{} order detail(s)", details.len()),
            Self::OrderDetail(detail) => format!(
                "order status {} ({} event(s))",
                detail.status_code,
                detail.modified_events.len()
            ),
            Self::Certificate(cert) => format!(
                "certificate with {} CA certificate(s)",
                cert.intermediates.len()
            ),
            Self::CertificateInfo(info) => format!("certificate info for {}", info.common_name),
            Self::OrganizationInfo(info) => format!("organization {}", info.name),
            Self::OrderContacts(contacts) => {
                format!("contacts (admin {})", contacts.admin_contact.email)
            }
            Self::QuickOrder(response) => format!(
                "quick order {} (success code {})",
                response.result.order_id, response.result.order_response.success_code
            ),
        }
    }
}
