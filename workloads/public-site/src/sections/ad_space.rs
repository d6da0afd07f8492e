//! Generic ad space keyed by slot.
//!
//! Three observable states, and the middle one matters: a hidden slot
//! renders nothing at all, while a visible slot with no creative renders
//! the invitation placeholder so unsold inventory stays visible on the
//! page.

use nrnhub_ads::{url::normalize_image_url, AdPlacements, AdSlot};

use super::html_escape;

/// Render one ad space.
pub fn render_ad_space(placements: &AdPlacements, base: &str, slot: AdSlot) -> String {
    if !placements.is_visible(slot) {
        return String::new();
    }

    let image = placements.image(slot).map(str::trim).unwrap_or("");
    if image.is_empty() {
        return render_placeholder(slot);
    }

    let src = normalize_image_url(base, image);
    let img = format!(
        r#"<img src="{}" alt="{}" loading="lazy">"#,
        html_escape(&src),
        html_escape(slot.label())
    );
    let inner = match placements.link(slot).map(str::trim).filter(|l| !l.is_empty()) {
        Some(link) => format!(
            r#"<a href="{}" target="_blank" rel="noopener sponsored">{}</a>"#,
            html_escape(link),
            img
        ),
        None => img,
    };

    format!(
        r#"<div class="ad-space" data-slot="{}">
    <span class="ad-badge">Ad</span>
    {}
</div>"#,
        slot.as_str(),
        inner
    )
}

fn render_placeholder(slot: AdSlot) -> String {
    format!(
        r#"<div class="ad-space ad-placeholder" data-slot="{}">
    <span class="ad-badge">Advertisement</span>
    <p class="ad-pitch">This space is available.</p>
    <a class="ad-cta" href="/advertise">Advertise with NRNHUB</a>
</div>"#,
        slot.as_str()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://nrnhub.com";

    #[test]
    fn test_hidden_slot_renders_nothing() {
        let placements = AdPlacements::default();
        assert_eq!(render_ad_space(&placements, BASE, AdSlot::Hero), "");
    }

    #[test]
    fn test_visible_without_image_renders_placeholder() {
        let mut placements = AdPlacements::default();
        placements.set_visible(AdSlot::Hero, true);
        let html = render_ad_space(&placements, BASE, AdSlot::Hero);
        assert!(html.contains("ad-placeholder"));
        assert!(html.contains("Advertise with NRNHUB"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_visible_with_image_renders_creative() {
        let mut placements = AdPlacements::default();
        placements.set_visible(AdSlot::Hero, true);
        placements.set_image(AdSlot::Hero, "Uploads/ads/a.png");
        placements.set_link(AdSlot::Hero, "https://adv.example/offer");

        let html = render_ad_space(&placements, BASE, AdSlot::Hero);
        assert!(html.contains(r#"src="https://nrnhub.com/Uploads/ads/a.png""#));
        assert!(html.contains(r#"href="https://adv.example/offer""#));
        assert!(!html.contains("ad-placeholder"));
    }

    #[test]
    fn test_image_without_link_is_unwrapped() {
        let mut placements = AdPlacements::default();
        placements.set_visible(AdSlot::Bottom, true);
        placements.set_image(AdSlot::Bottom, "Uploads/ads/b.png");
        let html = render_ad_space(&placements, BASE, AdSlot::Bottom);
        assert!(html.contains("<img"));
        assert!(!html.contains("<a "));
    }

    #[test]
    fn test_attributes_escaped() {
        let mut placements = AdPlacements::default();
        placements.set_visible(AdSlot::Left1, true);
        placements.set_image(AdSlot::Left1, "Uploads/ads/a.png");
        placements.set_link(AdSlot::Left1, "https://adv.example/?a=1&b=\"2\"");
        let html = render_ad_space(&placements, BASE, AdSlot::Left1);
        assert!(html.contains("&amp;"));
        assert!(html.contains("&quot;"));
    }

    #[test]
    fn test_placeholder_and_hidden_are_distinct() {
        let mut placements = AdPlacements::default();
        let hidden = render_ad_space(&placements, BASE, AdSlot::Navbar);
        placements.set_visible(AdSlot::Navbar, true);
        let placeholder = render_ad_space(&placements, BASE, AdSlot::Navbar);
        assert_ne!(hidden, placeholder);
        assert!(hidden.is_empty());
        assert!(!placeholder.is_empty());
    }
}
