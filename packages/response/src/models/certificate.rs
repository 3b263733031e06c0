//! Certificate entities from the query vocabulary.

use roxmltree::Node;
use serde::Serialize;

use super::FromXmlNode;
use crate::config::QUERY_NS;
use crate::xml::{element_children, find, find_text};

/// Summary of an issued certificate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CertificateInfo {
    pub common_name: String,
    pub status: String,
    pub hash_algorithm: String,
    pub encryption_algorithm: String,
}

impl FromXmlNode for CertificateInfo {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            common_name: find_text(node, ".//m:CommonName", &QUERY_NS),
            status: find_text(node, ".//m:CertificateStatus", &QUERY_NS),
            hash_algorithm: find_text(node, ".//m:SignatureHashAlgorithm", &QUERY_NS),
            encryption_algorithm: find_text(node, ".//m:SignatureEncryptionAlgorithm", &QUERY_NS),
        }
    }
}

/// Server certificate together with its CA chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Certificate {
    /// PEM encoded server certificate.
    pub server_cert: String,

    /// CA certificates in the order the response lists them.
    pub intermediates: Vec<IntermediateCertificate>,
}

impl FromXmlNode for Certificate {
    fn deserialize(node: Node<'_, '_>) -> Self {
        let server_cert = find_text(node, ".//m:ServerCertificate", &QUERY_NS);

        // Every child of CACertificates is a certificate, whatever its tag.
        let ca_certs = find(node, ".//m:CACertificates", &QUERY_NS);
        let intermediates: Vec<IntermediateCertificate> = ca_certs
            .map(|ca_certs| {
                element_children(ca_certs)
                    .map(IntermediateCertificate::deserialize)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            server_cert,
            intermediates,
        }
    }
}

/// One certificate of the CA chain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IntermediateCertificate {
    /// Role in the chain (e.g., "ROOT", "INTERMEDIATE", "CROSS").
    #[serde(rename = "type")]
    pub cert_type: String,

    /// PEM encoded certificate.
    pub cert: String,
}

impl FromXmlNode for IntermediateCertificate {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            cert_type: find_text(node, ".//m:Type", &QUERY_NS),
            cert: find_text(node, ".//m:CACert", &QUERY_NS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    #[test]
    fn test_certificate_with_chain() {
        let xml = r#"<Certificates xmlns="http://api.geotrust.com/webtrust/query">
            <ServerCertificate>PEM1</ServerCertificate>
            <CACertificates>
                <CACertificate><Type>Root</Type><CACert>PEM2</CACert></CACertificate>
                <CACertificate><Type>Cross</Type><CACert>PEM3</CACert></CACertificate>
            </CACertificates>
        </Certificates>"#;
        let doc = Document::parse(xml).unwrap();
        let cert = Certificate::deserialize(doc.root_element());

        assert_eq!(cert.server_cert, "PEM1");
        assert_eq!(
            cert.intermediates,
            vec![
                IntermediateCertificate {
                    cert_type: "Root".to_string(),
                    cert: "PEM2".to_string(),
                },
                IntermediateCertificate {
                    cert_type: "Cross".to_string(),
                    cert: "PEM3".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_certificate_empty_chain() {
        let xml = r#"<Certificates xmlns="http://api.geotrust.com/webtrust/query">
            <ServerCertificate>PEM1</ServerCertificate>
            <CACertificates/>
        </Certificates>"#;
        let doc = Document::parse(xml).unwrap();
        let cert = Certificate::deserialize(doc.root_element());

        assert_eq!(cert.server_cert, "PEM1");
        assert!(cert.intermediates.is_empty());
    }

    #[test]
    fn test_certificate_missing_chain() {
        let xml = r#"<Certificates xmlns="http://api.geotrust.com/webtrust/query"/>"#;
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            Certificate::deserialize(doc.root_element()),
            Certificate::default()
        );
    }

    #[test]
    fn test_certificate_info() {
        let xml = r#"<CertificateInfo xmlns="http://api.geotrust.com/webtrust/query">
            <CommonName>www.example.com</CommonName>
            <CertificateStatus>VALID</CertificateStatus>
            <SignatureHashAlgorithm>SHA256</SignatureHashAlgorithm>
            <SignatureEncryptionAlgorithm>RSA</SignatureEncryptionAlgorithm>
        </CertificateInfo>"#;
        let doc = Document::parse(xml).unwrap();
        let info = CertificateInfo::deserialize(doc.root_element());

        assert_eq!(
            info,
            CertificateInfo {
                common_name: "www.example.com".to_string(),
                status: "VALID".to_string(),
                hash_algorithm: "SHA256".to_string(),
                encryption_algorithm: "RSA".to_string(),
            }
        );
    }
}
