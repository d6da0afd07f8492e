//! NRNHUB public pages.
//!
//! Server-rendered pages that consume the placements document read-only:
//! the home page with its banner rails and ad spaces, and the advertise
//! page with the public inquiry form.

mod page;
mod sections;

pub use page::{render_advertise, render_home};
pub use sections::{render_ad_space, render_banner, render_side_rail};

#[cfg(target_arch = "wasm32")]
mod component;
