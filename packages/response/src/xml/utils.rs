//! XML utility functions for navigating namespaced response trees.

use std::collections::HashSet;

use roxmltree::Node;

use super::path::{parse_path, Axis};
use crate::config::Namespaces;

/// Find every element matching a path expression, in document order.
///
/// # Arguments
/// * `node` - Context node the path is evaluated from
/// * `path` - Relative path expression (e.g., `.//m:OrderDetail`)
/// * `ns` - Namespace mapping used to resolve prefixes in `path`
///
/// # Returns
/// Matching elements without duplicates; empty if nothing matches or the path is invalid
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use webtrust_response::config::QUERY_NS;
/// use webtrust_response::xml::find_all;
///
/// let xml = r#"<r xmlns="http://api.geotrust.com/webtrust/query">
///   <Events><Event>1</Event><Event>2</Event></Events>
/// </r>"#;
/// let doc = Document::parse(xml).unwrap();
///
/// let events = find_all(doc.root_element(), ".//m:Event", &QUERY_NS);
/// assert_eq!(events.len(), 2);
/// ```
pub fn find_all<'a, 'input>(
    node: Node<'a, 'input>,
    path: &str,
    ns: &Namespaces,
) -> Vec<Node<'a, 'input>> {
    let Some(steps) = parse_path(path) else {
        tracing::warn!(path, "Invalid path expression, treating as no match");
        return Vec::new();
    };

    let mut current = vec![node];
    for step in &steps {
        let mut seen = HashSet::new();
        let mut next = Vec::new();

        let mut visit = |candidate: Node<'a, 'input>| {
            if step.matches(candidate, ns) && seen.insert(candidate.id()) {
                next.push(candidate);
            }
        };

        for context in &current {
            match step.axis {
                Axis::Child => context.children().for_each(&mut visit),
                Axis::Descendant => context.descendants().skip(1).for_each(&mut visit),
            }
        }

        // Several contexts can reach the same descendant in a different order.
        next.sort_by_key(|n| n.id().get());
        current = next;

        if current.is_empty() {
            break;
        }
    }

    current
}

/// Find the first element matching a path expression.
///
/// # Arguments
/// * `node` - Context node the path is evaluated from
/// * `path` - Relative path expression (e.g., `.//m:City`)
/// * `ns` - Namespace mapping used to resolve prefixes in `path`
///
/// # Returns
/// First matching element in document order, or `None`
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use webtrust_response::config::{ORDER_NS, QUERY_NS};
/// use webtrust_response::xml::find;
///
/// let xml = r#"<r xmlns:q="http://api.geotrust.com/webtrust/query"><q:City>Delft</q:City></r>"#;
/// let doc = Document::parse(xml).unwrap();
/// let root = doc.root_element();
///
/// assert!(find(root, ".//m:City", &QUERY_NS).is_some());
/// assert!(find(root, ".//m:City", &ORDER_NS).is_none());
/// ```
pub fn find<'a, 'input>(
    node: Node<'a, 'input>,
    path: &str,
    ns: &Namespaces,
) -> Option<Node<'a, 'input>> {
    find_all(node, path, ns).into_iter().next()
}

/// Get the text content of an optional node.
///
/// Collects the text children that precede the first child element, so
/// comments and processing instructions inside the text are skipped. The
/// text is returned verbatim (no trimming). An absent node or a node
/// without text yields an empty string.
///
/// # Examples
/// ```
/// use roxmltree::Document;
/// use webtrust_response::xml::text_of;
///
/// let doc = Document::parse("<a> PEM </a>").unwrap();
/// assert_eq!(text_of(Some(doc.root_element())), " PEM ");
/// assert_eq!(text_of(None), "");
/// ```
pub fn text_of(node: Option<Node<'_, '_>>) -> String {
    let Some(node) = node else {
        return String::new();
    };

    node.children()
        .take_while(|child| !child.is_element())
        .filter(|child| child.is_text())
        .filter_map(|child| child.text())
        .collect()
}

/// Find an element by path and return its text, or an empty string.
pub fn find_text(node: Node<'_, '_>, path: &str, ns: &Namespaces) -> String {
    text_of(find(node, path, ns))
}

/// Get all element children of a node.
///
/// # Arguments
/// * `node` - Parent node
///
/// # Returns
/// Iterator over element children (excludes text nodes, comments, etc.)
pub fn element_children<'a, 'input>(
    node: Node<'a, 'input>,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.children().filter(|child| child.is_element())
}
