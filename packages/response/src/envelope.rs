//! SOAP 1.1 envelope handling.
//!
//! Responses arrive wrapped in `soap:Envelope/soap:Body`. The helpers here
//! strip that framing so entity deserializers only see the payload, and
//! surface `soap:Fault` bodies.

use roxmltree::Node;
use serde::Serialize;

use crate::config::SOAP_NS;
use crate::xml::{element_children, find, find_text, parse_path};

/// Fault details returned instead of a regular payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoapFault {
    pub fault_code: String,
    pub fault_string: String,
}

/// Check if `node` is the element named by a single-step `path`.
fn is_soap_element(node: Node<'_, '_>, path: &str) -> bool {
    parse_path(path)
        .and_then(|steps| steps.first().map(|step| step.matches(node, &SOAP_NS)))
        .unwrap_or(false)
}

/// Find the `soap:Body` for an envelope or body node.
///
/// # Returns
/// The body element, or `None` when `node` is not SOAP framing (e.g., a fragment)
pub fn body<'a, 'input>(node: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    if is_soap_element(node, "soap:Body") {
        return Some(node);
    }
    if is_soap_element(node, "soap:Envelope") {
        return find(node, "soap:Body", &SOAP_NS);
    }
    None
}

/// Get the payload element to deserialize from.
///
/// For an envelope or body this is the first element inside the body.
/// Anything else is returned unchanged, so fragments pass straight through.
pub fn payload<'a, 'input>(node: Node<'a, 'input>) -> Node<'a, 'input> {
    match body(node) {
        Some(body) => {
            let inner = element_children(body).next();
            tracing::debug!(
                payload = inner.map(|n| n.tag_name().name()),
                "Unwrapped SOAP body"
            );
            inner.unwrap_or(body)
        }
        None => node,
    }
}

/// Extract a `soap:Fault` from an envelope or body node.
///
/// `faultcode` and `faultstring` are unqualified per SOAP 1.1.
pub fn fault(node: Node<'_, '_>) -> Option<SoapFault> {
    let body = body(node)?;
    let fault = find(body, "soap:Fault", &SOAP_NS)?;

    Some(SoapFault {
        fault_code: find_text(fault, "faultcode", &SOAP_NS),
        fault_string: find_text(fault, "faultstring", &SOAP_NS),
    })
}
