//! Page sections.

mod ad_space;
mod banners;

pub use ad_space::render_ad_space;
pub use banners::{render_banner, render_side_rail};

/// Escape a value for HTML text or attribute position.
pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
