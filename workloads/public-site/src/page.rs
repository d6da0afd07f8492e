//! Page composition.

use nrnhub_ads::{AdPlacements, AdSlot};

use crate::sections::{render_ad_space, render_banner, render_side_rail};

/// Render the home page around the current placements.
pub fn render_home(placements: &AdPlacements, base: &str) -> String {
    let navbar = render_banner(placements, base, AdSlot::Navbar, "banner-navbar");
    let hero = render_banner(placements, base, AdSlot::Hero, "banner-hero");
    let mobile = render_banner(placements, base, AdSlot::Mobile, "banner-mobile");
    let bottom = render_banner(placements, base, AdSlot::Bottom, "banner-bottom");
    let left = render_side_rail(placements, base, &AdSlot::LEFT_RAIL, "rail-left");
    let right = render_side_rail(placements, base, &AdSlot::RIGHT_RAIL, "rail-right");

    let home_grid: String = AdSlot::BLOG_HOME
        .iter()
        .map(|&slot| render_ad_space(placements, base, slot))
        .collect();
    let economy: String = nrnhub_ads::SlotGroup::Economy
        .slots()
        .iter()
        .map(|&slot| render_ad_space(placements, base, slot))
        .collect();
    let lifestyle: String = nrnhub_ads::SlotGroup::Lifestyle
        .slots()
        .iter()
        .map(|&slot| render_ad_space(placements, base, slot))
        .collect();

    let body = format!(
        r#"{navbar}
<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">NRNHUB</a>
        <div class="nav-links">
            <a href="/economy">Economy</a>
            <a href="/lifestyle">Lifestyle</a>
            <a href="/events">Events</a>
            <a href="/advertise">Advertise</a>
        </div>
    </nav>
</header>
{hero}
{mobile}
<main class="page-layout">
    {left}
    <div class="page-main">
        <section class="home-grid" data-section="home-grid">{home_grid}</section>
        <section class="topic-row" data-section="economy">{economy}</section>
        <section class="topic-row" data-section="lifestyle">{lifestyle}</section>
    </div>
    {right}
</main>
{bottom}"#
    );

    page_shell("NRNHUB", &body)
}

/// Render the advertise page with the public inquiry form.
pub fn render_advertise() -> String {
    let body = format!(
        r#"<header class="site-header">
    <nav class="nav-container">
        <a href="/" class="logo">NRNHUB</a>
    </nav>
</header>
<main class="advertise">
    <h1>Advertise with NRNHUB</h1>
    <p>Tell us about your campaign and we will get back to you.</p>
    <form id="inquiry-form" class="inquiry-form">
        <input type="text" name="name" placeholder="Your name" required>
        <input type="email" name="email" placeholder="Email" required>
        <input type="text" name="company" placeholder="Company (optional)">
        <select name="adType" required>
            <option value="">Placement type</option>
            <option value="Banner">Banner</option>
            <option value="Sidebar">Sidebar</option>
            <option value="Sponsored">Sponsored content</option>
        </select>
        <textarea name="message" placeholder="Message (optional)"></textarea>
        <button type="submit">Send inquiry</button>
    </form>
    <div class="inquiry-success" hidden>Thanks! We received your inquiry.</div>
    <div class="inquiry-error" hidden><span class="error-message"></span></div>
</main>
{}"#,
        INQUIRY_SCRIPT
    );

    page_shell("Advertise | NRNHUB", &body)
}

/// Generate the HTML shell around a page body.
fn page_shell(title: &str, body_html: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <style>{SITE_STYLES}</style>
    <title>{title}</title>
</head>
<body>
    {body_html}
</body>
</html>"#
    )
}

const INQUIRY_SCRIPT: &str = r#"<script>
document.getElementById('inquiry-form')?.addEventListener('submit', async (e) => {
    e.preventDefault();
    const form = e.target;
    const successDiv = document.querySelector('.inquiry-success');
    const errorDiv = document.querySelector('.inquiry-error');
    const payload = {
        name: form.name.value,
        email: form.email.value,
        company: form.company.value,
        adType: form.adType.value,
        message: form.message.value,
    };

    try {
        const res = await fetch('/api/ads/inquiry', {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(payload),
        });
        const data = await res.json();
        if (!res.ok) {
            throw new Error(data.error || 'Submission failed');
        }
        form.hidden = true;
        successDiv.hidden = false;
        errorDiv.hidden = true;
    } catch (error) {
        errorDiv.querySelector('.error-message').textContent = error.message;
        errorDiv.hidden = false;
    }
});
</script>"#;

const SITE_STYLES: &str = r#"
* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    color: #1e293b;
    line-height: 1.6;
}

.site-header { border-bottom: 1px solid #e2e8f0; }

.nav-container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 1rem 2rem;
    display: flex;
    align-items: center;
    justify-content: space-between;
}

.logo { font-size: 1.5rem; font-weight: 700; color: #b91c1c; text-decoration: none; }

.nav-links { display: flex; gap: 2rem; }
.nav-links a { color: #1e293b; text-decoration: none; font-weight: 500; }

.page-layout {
    max-width: 1200px;
    margin: 0 auto;
    display: flex;
    gap: 1.5rem;
    padding: 1.5rem 2rem;
}

.page-main { flex: 1; }

.ad-rail { width: 180px; display: flex; flex-direction: column; gap: 1rem; }

.ad-banner { text-align: center; }
.ad-banner img { max-width: 100%; display: block; margin: 0 auto; }
.banner-navbar { background: #f8fafc; padding: 0.25rem; }
.banner-hero { padding: 0.5rem 0; }
.banner-mobile { display: none; }
.banner-bottom { padding: 1rem 0 2rem; }

.banner-placeholder, .ad-placeholder {
    border: 1px dashed #cbd5e1;
    border-radius: 8px;
    padding: 1.25rem;
    text-align: center;
    color: #64748b;
}

.ad-badge {
    display: inline-block;
    font-size: 0.7rem;
    text-transform: uppercase;
    letter-spacing: 0.05em;
    color: #94a3b8;
}

.ad-space img { max-width: 100%; display: block; }

.home-grid, .topic-row { display: grid; gap: 1rem; margin-bottom: 1.5rem; }

.advertise { max-width: 560px; margin: 0 auto; padding: 3rem 2rem; }
.advertise h1 { margin-bottom: 0.5rem; }
.advertise p { color: #64748b; margin-bottom: 1.5rem; }

.inquiry-form { display: flex; flex-direction: column; gap: 0.75rem; }
.inquiry-form input, .inquiry-form select, .inquiry-form textarea {
    padding: 0.75rem 1rem;
    border: 1px solid #e2e8f0;
    border-radius: 8px;
    font-size: 1rem;
}
.inquiry-form button {
    padding: 0.875rem 1.5rem;
    background: #b91c1c;
    color: white;
    border: none;
    border-radius: 8px;
    font-weight: 600;
    cursor: pointer;
}

.inquiry-success { padding: 1.5rem; background: #dcfce7; border-radius: 8px; color: #166534; }
.inquiry-error { padding: 1.5rem; background: #fef2f2; border-radius: 8px; color: #991b1b; }

@media (max-width: 768px) {
    .nav-links { display: none; }
    .ad-rail { display: none; }
    .banner-hero { display: none; }
    .banner-mobile { display: block; }
}
"#;
