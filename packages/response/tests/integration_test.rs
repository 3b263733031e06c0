//! End-to-end tests decoding full SOAP responses.
//!
//! Fixtures mirror what the GeoTrust WebTrust API returns for
//! `GetOrderByPartnerOrderID` and `QuickOrder`.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use roxmltree::Document;
use webtrust_response::models::{
    Certificate, CertificateInfo, Contact, OrderDetails, OrderResponseHeader, QuickOrderResponse,
};
use webtrust_response::parse::{check_fault, from_document, from_xml, ResponseKind};
use webtrust_response::ResponseError;

/// Load fixture file content.
fn load_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e))
}

#[test]
fn test_order_details_from_envelope() {
    let xml = load_fixture("order_details.xml");
    let details: OrderDetails = from_xml(&xml).unwrap();

    assert_eq!(details.len(), 2);
    let codes: Vec<_> = details.iter().map(|d| d.status_code.as_str()).collect();
    assert_eq!(codes, vec!["ORDER_COMPLETE", "1100"]);
}

#[test]
fn test_complete_order_detail() {
    let xml = load_fixture("order_details.xml");
    let details: OrderDetails = from_xml(&xml).unwrap();
    let detail = details.iter().next().unwrap();

    assert_eq!(detail.status_name, "Order Complete");
    assert_eq!(detail.approver_email, "admin@example.com");
    assert_eq!(detail.organization_info.name, "Example & Sons B.V.");
    assert_eq!(detail.organization_info.region, "Zuid-Holland");
    assert_eq!(
        detail.organization_contacts.billing_contact,
        Contact {
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@example.com".to_string(),
            ..Contact::default()
        }
    );

    let events: Vec<_> = detail
        .modified_events
        .iter()
        .map(|e| (e.mod_id.as_str(), e.event_name.as_str()))
        .collect();
    assert_eq!(
        events,
        vec![
            ("101", "Order Created"),
            ("102", "Domain Approved"),
            ("103", "Certificate Issued"),
        ]
    );
    assert!(detail
        .modified_events
        .iter()
        .all(|e| e.parsed_timestamp().is_some()));

    assert_eq!(detail.vulnerabilities.len(), 1);
    assert_eq!(detail.vulnerabilities.as_slice()[0].severity, "critical");
}

#[test]
fn test_pending_order_detail_defaults() {
    let xml = load_fixture("order_details.xml");
    let details: OrderDetails = from_xml(&xml).unwrap();
    let detail = details.iter().nth(1).unwrap();

    assert_eq!(detail.status_code, "1100");
    assert_eq!(detail.approver_email, "a@example.com");
    assert_eq!(detail.organization_info.region, "");
    assert_eq!(detail.organization_info.city, "Amsterdam");
    assert!(detail.modified_events.is_empty());
    assert!(detail.vulnerabilities.is_empty());
    assert_eq!(detail.organization_contacts.admin_contact, Contact::default());
}

#[test]
fn test_certificate_from_same_response() {
    let xml = load_fixture("order_details.xml");
    let doc = Document::parse(&xml).unwrap();

    let cert: Certificate = from_document(&doc);
    assert!(cert.server_cert.starts_with("-----BEGIN CERTIFICATE-----\nMIIserver"));
    let types: Vec<_> = cert
        .intermediates
        .iter()
        .map(|c| c.cert_type.as_str())
        .collect();
    assert_eq!(types, vec!["INTERMEDIATE", "ROOT"]);

    let info: CertificateInfo = from_document(&doc);
    assert_eq!(info.common_name, "www.example.com");
    assert_eq!(info.hash_algorithm, "SHA256");
}

#[test]
fn test_quick_order_from_envelope() {
    let xml = load_fixture("quick_order.xml");
    let response: QuickOrderResponse = from_xml(&xml).unwrap();

    assert_eq!(response.result.order_id, "ORD-1");
    assert_eq!(
        response.result.order_response,
        OrderResponseHeader {
            partner_order_id: "P-1".to_string(),
            success_code: "0".to_string(),
            timestamp: "2020-01-01T00:00:00Z".to_string(),
        }
    );
}

#[test]
fn test_vocabulary_mismatch_yields_defaults() {
    // Order details decoded from a quick order response find nothing.
    let xml = load_fixture("quick_order.xml");
    let details: OrderDetails = from_xml(&xml).unwrap();
    assert!(details.is_empty());

    let response: QuickOrderResponse = from_xml(&load_fixture("order_details.xml")).unwrap();
    assert_eq!(response, QuickOrderResponse::default());
}

#[test]
fn test_decoding_is_idempotent() {
    let xml = load_fixture("order_details.xml");
    let doc = Document::parse(&xml).unwrap();

    let first = ResponseKind::OrderDetails.decode(&doc);
    let second = ResponseKind::OrderDetails.decode(&doc);
    assert_eq!(first, second);
}

#[test]
fn test_concurrent_reads_of_one_tree() {
    let xml = load_fixture("order_details.xml");
    let doc = Document::parse(&xml).unwrap();
    let expected: OrderDetails = from_document(&doc);

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| from_document::<OrderDetails>(&doc)))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn test_fault_detection() {
    let xml = load_fixture("fault.xml");
    let doc = Document::parse(&xml).unwrap();

    let err = check_fault(&doc).unwrap_err();
    assert!(matches!(
        err,
        ResponseError::SoapFault { ref code, .. } if code == "soap:Client"
    ));

    assert!(check_fault(&Document::parse(&load_fixture("quick_order.xml")).unwrap()).is_ok());
}
