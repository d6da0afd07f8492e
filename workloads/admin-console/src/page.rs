//! Console page composition.

use nrnhub_ads::{url::normalize_image_url, AdSlot, SlotGroup};
use nrnhub_console::ConsoleState;

/// Escape a value for HTML text or attribute position.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the management console from the current state.
pub fn render_console(state: &ConsoleState, base: &str) -> String {
    let cards: String = AdSlot::ALL
        .iter()
        .map(|&slot| render_slot_card(state, base, slot))
        .collect();

    let review = state.review_for_submit();
    let warning = review
        .warning_message()
        .map(|w| format!(r#"<p class="submit-warning">{}</p>"#, html_escape(&w)))
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>{styles}</style>
    <title>Ad Manager | NRNHUB</title>
</head>
<body>
<header class="console-header">
    <h1>Ad Manager</h1>
    <div class="toolbar">
        <label><input type="checkbox" id="group-economy" {economy_checked}> Economy pair</label>
        <label><input type="checkbox" id="group-lifestyle" {lifestyle_checked}> Lifestyle pair</label>
        <button type="button" id="clear-all" class="btn-secondary">Clear all</button>
        <button type="button" id="submit-all" class="btn-primary">Save placements</button>
    </div>
</header>
<div id="status-bar" class="status-bar" hidden></div>
{warning}
<main class="slot-grid">
{cards}
</main>
{script}
</body>
</html>"#,
        styles = CONSOLE_STYLES,
        economy_checked = group_checked(state, SlotGroup::Economy),
        lifestyle_checked = group_checked(state, SlotGroup::Lifestyle),
        warning = warning,
        cards = cards,
        script = CONSOLE_SCRIPT,
    )
}

fn group_checked(state: &ConsoleState, group: SlotGroup) -> &'static str {
    if group.slots().iter().all(|&slot| state.is_visible(slot)) {
        "checked"
    } else {
        ""
    }
}

fn render_slot_card(state: &ConsoleState, base: &str, slot: AdSlot) -> String {
    let placements = state.placements();
    let visible = if state.is_visible(slot) { "checked" } else { "" };
    let link = placements.link(slot).unwrap_or("");

    let preview = match placements.image(slot).map(str::trim).filter(|i| !i.is_empty()) {
        Some(image) => {
            let src = normalize_image_url(base, image);
            format!(
                r#"<img class="preview" src="{}" alt="{}" data-path="{}">"#,
                html_escape(&src),
                html_escape(slot.label()),
                html_escape(image)
            )
        }
        None => r#"<div class="preview preview-empty">No creative</div>"#.to_string(),
    };

    format!(
        r#"<div class="slot-card" data-slot="{name}">
    <div class="slot-head">
        <h2>{label}</h2>
        <label class="visible-toggle"><input type="checkbox" class="slot-visible" {visible}> Visible</label>
    </div>
    {preview}
    <input type="file" class="slot-file" accept="image/*">
    <input type="url" class="slot-link" placeholder="Redirect link" value="{link}">
    <button type="button" class="slot-clear btn-secondary">Clear</button>
</div>"#,
        name = slot.as_str(),
        label = html_escape(slot.label()),
        visible = visible,
        preview = preview,
        link = html_escape(link),
    )
}

const CONSOLE_SCRIPT: &str = r#"<script>
const token = localStorage.getItem('nrnhub_admin_token')
    || prompt('Admin token');
if (token) localStorage.setItem('nrnhub_admin_token', token);

const statusBar = document.getElementById('status-bar');

function toast(message, kind) {
    statusBar.textContent = message;
    statusBar.className = 'status-bar status-' + kind;
    statusBar.hidden = false;
    setTimeout(() => { statusBar.hidden = true; }, 6000);
}

function cardState() {
    const adImages = {}, adLinks = {}, visibility = {};
    document.querySelectorAll('.slot-card').forEach((card) => {
        const slot = card.dataset.slot;
        const img = card.querySelector('img.preview');
        if (img && img.dataset.path) adImages[slot] = img.dataset.path;
        const link = card.querySelector('.slot-link').value.trim();
        if (link) adLinks[slot] = link;
        visibility[slot] = card.querySelector('.slot-visible').checked;
    });
    return { adImages, adLinks, visibility };
}

document.querySelectorAll('.slot-card').forEach((card) => {
    const slot = card.dataset.slot;

    card.querySelector('.slot-file').addEventListener('change', async (e) => {
        const file = e.target.files[0];
        if (!file) return;
        try {
            const res = await fetch('/api/ads/upload?filename=' + encodeURIComponent(file.name), {
                method: 'POST',
                headers: {
                    'content-type': file.type,
                    'authorization': 'Bearer ' + token,
                },
                body: file,
            });
            const data = await res.json();
            if (!res.ok) throw new Error(data.error || 'Upload failed');
            let img = card.querySelector('img.preview');
            if (!img) {
                card.querySelector('.preview').outerHTML = '<img class="preview">';
                img = card.querySelector('img.preview');
            }
            img.src = data.url;
            img.dataset.path = data.url;
            toast('Uploaded creative for ' + slot, 'ok');
        } catch (error) {
            toast(error.message, 'err');
        }
    });

    card.querySelector('.slot-clear').addEventListener('click', () => {
        card.querySelector('.slot-visible').checked = false;
        card.querySelector('.slot-link').value = '';
        const img = card.querySelector('img.preview');
        if (img) img.outerHTML = '<div class="preview preview-empty">No creative</div>';
    });
});

document.getElementById('clear-all').addEventListener('click', () => {
    document.querySelectorAll('.slot-card .slot-clear').forEach((b) => b.click());
});

function wireGroup(id, slots) {
    document.getElementById(id).addEventListener('change', (e) => {
        slots.forEach((slot) => {
            const card = document.querySelector('.slot-card[data-slot="' + slot + '"]');
            if (card) card.querySelector('.slot-visible').checked = e.target.checked;
        });
    });
}
wireGroup('group-economy', ['economyAds1', 'economyAds2']);
wireGroup('group-lifestyle', ['lifestyle1', 'lifestyle2']);

document.getElementById('submit-all').addEventListener('click', async () => {
    const payload = cardState();

    const missingImages = Object.keys(payload.visibility)
        .filter((slot) => payload.visibility[slot] && !payload.adImages[slot]);
    if (missingImages.length > 0) {
        toast('Image required for visible slots: ' + missingImages.join(', '), 'err');
        return;
    }
    const missingLinks = Object.keys(payload.visibility)
        .filter((slot) => payload.visibility[slot] && !payload.adLinks[slot]);
    if (missingLinks.length > 0) {
        toast('No link configured for: ' + missingLinks.join(', '), 'warn');
    }

    try {
        const res = await fetch('/api/ads', {
            method: 'POST',
            headers: {
                'content-type': 'application/json',
                'authorization': 'Bearer ' + token,
            },
            body: JSON.stringify(payload),
        });
        const data = await res.json();
        if (!res.ok) throw new Error(data.error || 'Save failed');
        toast('Placements saved', 'ok');
    } catch (error) {
        toast(error.message, 'err');
    }
});
</script>"#;

const CONSOLE_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
}

.console-header {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem 2rem;
    background: white;
    border-bottom: 1px solid #e2e8f0;
}

.toolbar { display: flex; align-items: center; gap: 1rem; }

.btn-primary {
    background: #b91c1c;
    color: white;
    border: none;
    border-radius: 8px;
    padding: 0.625rem 1.25rem;
    font-weight: 600;
    cursor: pointer;
}

.btn-secondary {
    background: white;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    padding: 0.625rem 1.25rem;
    cursor: pointer;
}

.status-bar { margin: 1rem 2rem 0; padding: 0.875rem 1rem; border-radius: 8px; }
.status-ok { background: #dcfce7; color: #166534; }
.status-warn { background: #fef9c3; color: #854d0e; }
.status-err { background: #fef2f2; color: #991b1b; }

.submit-warning { margin: 1rem 2rem 0; color: #854d0e; }

.slot-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
    gap: 1rem;
    padding: 1.5rem 2rem;
}

.slot-card {
    background: white;
    border: 1px solid #e2e8f0;
    border-radius: 12px;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.slot-head { display: flex; align-items: center; justify-content: space-between; }
.slot-head h2 { font-size: 1rem; }

.preview { width: 100%; border-radius: 8px; }
.preview-empty {
    border: 1px dashed #cbd5e1;
    color: #94a3b8;
    text-align: center;
    padding: 1.5rem 0;
}

.slot-link {
    padding: 0.5rem 0.75rem;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use nrnhub_ads::PlacementsPayload;

    const BASE: &str = "https://nrnhub.com";

    fn loaded_state() -> ConsoleState {
        let mut payload = PlacementsPayload::default();
        payload
            .ad_images
            .insert("hero".to_string(), "Uploads/ads/hero.png".to_string());
        payload
            .ad_links
            .insert("hero".to_string(), "https://adv.example".to_string());
        payload.visibility.insert("hero".to_string(), true);

        let mut state = ConsoleState::new();
        state.fetch_succeeded(&payload);
        state
    }

    #[test]
    fn test_one_card_per_catalog_slot() {
        let html = render_console(&ConsoleState::new(), BASE);
        for slot in AdSlot::ALL {
            assert!(
                html.contains(&format!(r#"data-slot="{}""#, slot.as_str())),
                "missing card for {}",
                slot
            );
        }
    }

    #[test]
    fn test_visible_slot_checkbox_checked() {
        let html = render_console(&loaded_state(), BASE);
        let hero_card = html
            .split(r#"data-slot="hero""#)
            .nth(1)
            .and_then(|rest| rest.split("slot-card").next())
            .unwrap();
        assert!(hero_card.contains(r#"class="slot-visible" checked"#));
    }

    #[test]
    fn test_preview_uses_normalized_url() {
        let html = render_console(&loaded_state(), BASE);
        assert!(html.contains(r#"src="https://nrnhub.com/Uploads/ads/hero.png""#));
    }

    #[test]
    fn test_empty_slot_shows_no_creative() {
        let html = render_console(&ConsoleState::new(), BASE);
        assert!(html.contains("No creative"));
    }

    #[test]
    fn test_warning_shown_for_visible_without_link() {
        let mut state = loaded_state();
        state.toggle(AdSlot::Bottom);
        state.set_image(AdSlot::Bottom, "Uploads/ads/b.png");
        let html = render_console(&state, BASE);
        assert!(html.contains("submit-warning"));
        assert!(html.contains("bottom"));
    }

    #[test]
    fn test_group_toggle_reflects_state() {
        let mut state = ConsoleState::new();
        state.set_group(SlotGroup::Economy, true);
        let html = render_console(&state, BASE);
        assert!(html.contains(r#"id="group-economy" checked"#));
        assert!(html.contains(r#"id="group-lifestyle" >"#));
    }
}
