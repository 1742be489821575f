//! Rendering module: reconstruction of the document model to its output forms.

mod json;
mod text;
pub mod visitor;

pub use json::{to_json, JsonFormat};
pub use text::to_text;
pub use visitor::{render_with_visitor, DefaultVisitor, DocumentVisitor, VisitorAction};
