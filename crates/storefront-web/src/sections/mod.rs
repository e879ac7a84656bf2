//! Section renderers.
//!
//! Each renderer is a pure function from state to an HTML fragment, so
//! rendering the same state twice yields the same markup.

mod about;
mod blog;
mod cart;
mod categories;
mod modal;
mod products;
mod testimonials;

pub use about::*;
pub use blog::*;
pub use cart::*;
pub use categories::*;
pub use modal::*;
pub use products::*;
pub use testimonials::*;

/// Filled star icon, shared by product cards, the modal and testimonials.
const STAR_ICON: &str = r#"<svg class="w-4 h-4 text-amber-500" fill="currentColor" viewBox="0 0 20 20"><path d="M9.049 2.927c.3-.921 1.603-.921 1.902 0l1.07 3.292a1 1 0 00.95.69h3.462c.969 0 1.371 1.24.588 1.81l-2.8 2.034a1 1 0 00-.364 1.118l1.07 3.292c.3.921-.755 1.688-1.54 1.118l-2.8-2.034a1 1 0 00-1.175 0l-2.8 2.034c-.784.57-1.838-.197-1.539-1.118l1.07-3.292a1 1 0 00-.364-1.118L2.98 8.72c-.783-.57-.38-1.81.588-1.81h3.461a1 1 0 00.951-.69l1.07-3.292z"/></svg>"#;

/// Escape text for element content and quoted attribute values.
pub(crate) fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}
