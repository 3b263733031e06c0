//! Namespace registry and configuration constants.
//!
//! The WebTrust API uses three XML vocabularies. Each one is exposed here as
//! a [`Namespaces`] mapping that is passed explicitly into every navigation
//! call, so an entity that straddles two vocabularies can pick the right one
//! per field.

/// URI of the query vocabulary (order details, certificates, contacts).
pub const QUERY_NAMESPACE_URI: &str = "http://api.geotrust.com/webtrust/query";

/// URI of the order vocabulary (order identifiers, response headers).
pub const ORDER_NAMESPACE_URI: &str = "http://api.geotrust.com/webtrust/order";

/// URI of the SOAP 1.1 envelope vocabulary.
pub const SOAP_NAMESPACE_URI: &str = "http://schemas.xmlsoap.org/soap/envelope/";

/// A set of prefix-to-URI bindings used to resolve qualified tag names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Namespaces {
    bindings: &'static [(&'static str, &'static str)],
}

impl Namespaces {
    /// Create a mapping from a static list of `(prefix, uri)` pairs.
    ///
    /// # Examples
    /// ```
    /// use webtrust_response::config::Namespaces;
    ///
    /// let ns = Namespaces::new(&[("x", "urn:example")]);
    /// assert_eq!(ns.resolve("x"), Some("urn:example"));
    /// assert_eq!(ns.resolve("y"), None);
    /// ```
    #[must_use]
    pub const fn new(bindings: &'static [(&'static str, &'static str)]) -> Self {
        Self { bindings }
    }

    /// Look up the URI bound to `prefix`.
    #[must_use]
    pub fn resolve(&self, prefix: &str) -> Option<&'static str> {
        self.bindings
            .iter()
            .find(|(p, _)| *p == prefix)
            .map(|(_, uri)| *uri)
    }

    /// Iterate over all `(prefix, uri)` bindings.
    pub fn bindings(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.bindings.iter().copied()
    }
}

/// Query vocabulary mapping (`m` prefix).
pub const QUERY_NS: Namespaces = Namespaces::new(&[("m", QUERY_NAMESPACE_URI)]);

/// Order vocabulary mapping (`m` prefix).
pub const ORDER_NS: Namespaces = Namespaces::new(&[("m", ORDER_NAMESPACE_URI)]);

/// Envelope vocabulary mapping (`soap` prefix).
pub const SOAP_NS: Namespaces = Namespaces::new(&[("soap", SOAP_NAMESPACE_URI)]);

/// Default `RUST_LOG` filter for the inspect binary.
pub const DEFAULT_LOG_FILTER: &str = "warn";
