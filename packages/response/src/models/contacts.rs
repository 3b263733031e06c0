//! Order contacts.

use roxmltree::Node;
use serde::Serialize;

use super::FromXmlNode;
use crate::config::QUERY_NS;
use crate::xml::{find, find_text};

/// A person attached to an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Contact {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub title: String,
}

impl FromXmlNode for Contact {
    fn deserialize(node: Node<'_, '_>) -> Self {
        Self {
            first_name: find_text(node, ".//m:FirstName", &QUERY_NS),
            last_name: find_text(node, ".//m:LastName", &QUERY_NS),
            phone: find_text(node, ".//m:Phone", &QUERY_NS),
            email: find_text(node, ".//m:Email", &QUERY_NS),
            title: find_text(node, ".//m:Title", &QUERY_NS),
        }
    }
}

/// Administrative, technical and billing contacts of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OrderContacts {
    pub admin_contact: Contact,
    pub tech_contact: Contact,
    pub billing_contact: Contact,
}

impl FromXmlNode for OrderContacts {
    fn deserialize(node: Node<'_, '_>) -> Self {
        let contact = |path: &str| {
            find(node, path, &QUERY_NS)
                .map(Contact::deserialize)
                .unwrap_or_default()
        };

        Self {
            admin_contact: contact(".//m:AdminContact"),
            tech_contact: contact(".//m:TechContact"),
            billing_contact: contact(".//m:BillingContact"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    #[test]
    fn test_order_contacts() {
        let xml = r#"<OrderContacts xmlns="http://api.geotrust.com/webtrust/query">
            <AdminContact>
                <FirstName>Ada</FirstName>
                <LastName>Lovelace</LastName>
                <Phone>+31 70 000 0000</Phone>
                <Email>ada@example.com</Email>
                <Title>CTO</Title>
            </AdminContact>
            <TechContact>
                <FirstName>Alan</FirstName>
                <Email>alan@example.com</Email>
            </TechContact>
        </OrderContacts>"#;
        let doc = Document::parse(xml).unwrap();
        let contacts = OrderContacts::deserialize(doc.root_element());

        assert_eq!(
            contacts.admin_contact,
            Contact {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                phone: "+31 70 000 0000".to_string(),
                email: "ada@example.com".to_string(),
                title: "CTO".to_string(),
            }
        );
        assert_eq!(contacts.tech_contact.first_name, "Alan");
        assert_eq!(contacts.tech_contact.last_name, "");
        assert_eq!(contacts.billing_contact, Contact::default());
    }
}
