//! Namespace-aware navigation over parsed response trees.

mod path;
mod utils;

pub use path::{parse_path, Axis, Step};
pub use utils::{element_children, find, find_all, find_text, text_of};
