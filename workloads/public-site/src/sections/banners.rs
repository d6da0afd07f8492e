//! Fixed-layout banners.
//!
//! The shell banners (navbar, hero, mobile, bottom) and the side rails
//! are position-locked; like the generic ad space, a visible slot with
//! no creative keeps its placeholder so the layout shows the inventory.

use nrnhub_ads::{url::normalize_image_url, AdPlacements, AdSlot};

use super::html_escape;

/// Render a fixed banner for one slot with a layout class.
pub fn render_banner(placements: &AdPlacements, base: &str, slot: AdSlot, class: &str) -> String {
    if !placements.is_visible(slot) {
        return String::new();
    }

    let image = placements.image(slot).map(str::trim).unwrap_or("");
    let inner = if image.is_empty() {
        r#"<div class="banner-placeholder"><a href="/advertise">Your ad here</a></div>"#.to_string()
    } else {
        let src = normalize_image_url(base, image);
        let img = format!(
            r#"<img src="{}" alt="{}">"#,
            html_escape(&src),
            html_escape(slot.label())
        );
        match placements.link(slot).map(str::trim).filter(|l| !l.is_empty()) {
            Some(link) => format!(
                r#"<a href="{}" target="_blank" rel="noopener sponsored">{}</a>"#,
                html_escape(link),
                img
            ),
            None => img,
        }
    };

    format!(
        r#"<section class="ad-banner {}" data-slot="{}">{}</section>"#,
        class,
        slot.as_str(),
        inner
    )
}

/// Render a vertical rail of banner slots.
pub fn render_side_rail(placements: &AdPlacements, base: &str, slots: &[AdSlot], class: &str) -> String {
    let items: String = slots
        .iter()
        .map(|&slot| render_banner(placements, base, slot, "rail-item"))
        .collect();
    if items.is_empty() {
        return String::new();
    }
    format!(r#"<aside class="ad-rail {}">{}</aside>"#, class, items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://nrnhub.com";

    #[test]
    fn test_hidden_banner_renders_nothing() {
        let placements = AdPlacements::default();
        assert_eq!(render_banner(&placements, BASE, AdSlot::Navbar, "navbar"), "");
    }

    #[test]
    fn test_visible_banner_without_image_keeps_placeholder() {
        let mut placements = AdPlacements::default();
        placements.set_visible(AdSlot::Navbar, true);
        let html = render_banner(&placements, BASE, AdSlot::Navbar, "navbar");
        assert!(html.contains("banner-placeholder"));
    }

    #[test]
    fn test_rail_skips_hidden_slots() {
        let mut placements = AdPlacements::default();
        placements.set_visible(AdSlot::Left2, true);
        placements.set_image(AdSlot::Left2, "Uploads/ads/l2.png");

        let html = render_side_rail(&placements, BASE, &AdSlot::LEFT_RAIL, "rail-left");
        assert_eq!(html.matches("<section").count(), 1);
        assert!(html.contains(r#"data-slot="left2""#));
    }

    #[test]
    fn test_empty_rail_renders_nothing() {
        let placements = AdPlacements::default();
        assert_eq!(
            render_side_rail(&placements, BASE, &AdSlot::RIGHT_RAIL, "rail-right"),
            ""
        );
    }
}
