//! NRNHUB ad management console.
//!
//! One server-rendered page: a card per catalog slot for visibility,
//! creative upload, and redirect link, plus group toggles, clear-all,
//! and a bulk submit that re-validates before it leaves the browser.

mod page;

pub use page::render_console;

#[cfg(target_arch = "wasm32")]
mod component;
