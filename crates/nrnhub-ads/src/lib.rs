//! Ad placement domain types and logic for NRNHUB.
//!
//! This crate provides the types behind the advertising surfaces of the
//! site:
//!
//! - **Slots**: the closed catalog of placement positions
//! - **Placements**: the single aggregate holding every slot's creative,
//!   link, and visibility
//! - **Inquiries**: advertiser contact records
//! - **Urls**: creative path normalization against the configured base URL
//!
//! # Example
//!
//! ```rust,ignore
//! use nrnhub_ads::prelude::*;
//!
//! let mut placements = AdPlacements::default();
//! placements.set_image(AdSlot::Hero, "Uploads/ads/spring-sale.png");
//! placements.set_link(AdSlot::Hero, "https://advertiser.example/spring");
//! placements.toggle(AdSlot::Hero);
//!
//! assert!(placements.is_visible(AdSlot::Hero));
//! assert!(placements.missing_images().is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod inquiry;
pub mod placements;
pub mod slot;
pub mod url;

pub use error::AdsError;
pub use ids::*;
pub use inquiry::{AdInquiry, InquiryDraft};
pub use placements::{AdPlacements, PlacementsPayload};
pub use slot::{AdSlot, SlotGroup};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::AdsError;
    pub use crate::ids::*;
    pub use crate::inquiry::{AdInquiry, InquiryDraft};
    pub use crate::placements::{AdPlacements, PlacementsPayload};
    pub use crate::slot::{AdSlot, SlotGroup};
    pub use crate::url::{absolutize, normalize_image_url};
}
