//! NRNHUB ad delivery and inquiry API.
//!
//! JSON surface:
//! - `GET  /api/ads` - the placements document, image URLs absolutized
//! - `POST /api/ads` - whole-document replace (admin)
//! - `POST /api/ads/inquiry` - public advertiser inquiry
//! - `GET  /api/ads/inquiries` - newest-first listing (admin, paged)
//! - `POST /api/ads/upload` - creative upload (admin)
//! - `GET  /Uploads/ads/{file}` - stored creatives

mod handlers;

pub use handlers::{AdsApi, ApiResponse};

#[cfg(target_arch = "wasm32")]
mod component;
