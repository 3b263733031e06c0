//! Relative path expressions used to locate namespaced elements.
//!
//! Supported syntax is the subset of ElementPath the response models need:
//!
//! - `m:Tag` matches a direct child
//! - `.//m:Tag` matches a descendant at any depth
//! - `m:A/m:B` chains steps
//! - `.` is the current node, `*` matches any element

use std::sync::LazyLock;

use regex::Regex;
use roxmltree::Node;

use crate::config::Namespaces;

/// A single step: `prefix:local`, `local`, or `*`.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STEP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:([A-Za-z_][\w.-]*):)?([A-Za-z_][\w.-]*|\*)$").expect("valid regex")
});

/// How a step selects candidates relative to its context node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Element children of the context node.
    Child,
    /// All element descendants, excluding the context node itself.
    Descendant,
}

/// One parsed location step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step<'p> {
    pub axis: Axis,
    pub prefix: Option<&'p str>,
    /// Local name, or `*` for any element.
    pub local: &'p str,
}

impl Step<'_> {
    /// Check whether `node` is an element selected by this step.
    ///
    /// A prefix that is not bound in `ns` selects nothing.
    pub fn matches(&self, node: Node<'_, '_>, ns: &Namespaces) -> bool {
        if !node.is_element() {
            return false;
        }

        let tag = node.tag_name();
        if self.local != "*" && tag.name() != self.local {
            return false;
        }

        match self.prefix {
            Some(prefix) => match ns.resolve(prefix) {
                Some(uri) => tag.namespace() == Some(uri),
                None => false,
            },
            None => self.local == "*" || tag.namespace().is_none(),
        }
    }
}

/// Parse a path expression into steps.
///
/// Returns `None` if any step is syntactically invalid.
///
/// # Examples
/// ```
/// use webtrust_response::xml::{parse_path, Axis};
///
/// let steps = parse_path(".//m:OrderDetail/m:OrderInfo").unwrap();
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[0].axis, Axis::Descendant);
/// assert_eq!(steps[1].axis, Axis::Child);
/// assert_eq!(steps[1].local, "OrderInfo");
/// ```
pub fn parse_path(path: &str) -> Option<Vec<Step<'_>>> {
    let mut steps = Vec::new();
    let mut axis = Axis::Child;

    for (index, part) in path.split('/').enumerate() {
        match part {
            // Leading empty part comes from an absolute path, which is
            // evaluated relative to the context node anyway.
            "" if index == 0 => {}
            "" => axis = Axis::Descendant,
            "." => {}
            _ => {
                let captures = STEP_PATTERN.captures(part)?;
                let local = captures.get(2)?.as_str();
                let prefix = captures.get(1).map(|m| m.as_str());
                steps.push(Step {
                    axis,
                    prefix,
                    local,
                });
                axis = Axis::Child;
            }
        }
    }

    // A trailing `//` has nothing to apply to.
    if axis == Axis::Descendant {
        return None;
    }

    Some(steps)
}
