//! WebTrust Response - typed deserialization of GeoTrust certificate-ordering responses.
//!
//! This crate turns namespaced XML returned by the GeoTrust WebTrust SOAP API
//! into plain Rust values. Missing data never fails: absent leaves become
//! empty strings and absent collections become empty sequences.
//!
//! # Example
//!
//! ```
//! use webtrust_response::models::OrderDetails;
//! use webtrust_response::parse::from_xml;
//!
//! let xml = r#"<soap:Envelope xmlns:soap="http://schemas.xmlsoap.org/soap/envelope/">
//!   <soap:Body>
//!     <GetOrderByPartnerOrderIDResponse xmlns="http://api.geotrust.com/webtrust/query">
//!       <OrderDetail><OrderStatusMinorCode>1100</OrderStatusMinorCode></OrderDetail>
//!     </GetOrderByPartnerOrderIDResponse>
//!   </soap:Body>
//! </soap:Envelope>"#;
//!
//! let details: OrderDetails = from_xml(xml).unwrap();
//! assert_eq!(details.len(), 1);
//! assert!(details.iter().all(|d| d.modified_events.is_empty()));
//! ```
//!
//! # Architecture
//!
//! - [`config`]: Namespace registry and constants
//! - [`xml`]: Namespace-aware node navigation and text extraction
//! - [`models`]: Entity and collection deserializers
//! - [`envelope`]: SOAP envelope unwrapping and fault detection
//! - [`parse`]: Entry points from XML text to entities
//! - [`output`]: YAML/JSON rendering
//! - [`error`]: Error types and Result alias
//! - [`cli`]: Command-line interface

pub mod cli;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod output;
pub mod parse;
pub mod xml;

// Re-export commonly used items
pub use error::{ResponseError, Result};
pub use models::{FromXmlNode, OrderDetail, OrderDetails, QuickOrderResponse, Sequence};
pub use parse::{from_document, from_xml};
