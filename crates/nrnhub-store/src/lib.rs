//! Key-value persistence for the NRNHUB ad subsystem.
//!
//! Three repositories over one store:
//!
//! - [`PlacementsStore`] - the singleton placements document
//! - [`InquiryStore`] - append-only advertiser inquiries
//! - [`MediaStore`] - uploaded ad creatives
//!
//! On Spin the backing store is the component's Key-Value store; natively
//! an in-memory map stands in so repository logic runs under `cargo test`.

mod error;
mod inquiries;
mod kv;
mod media;
mod placements;

pub use error::StoreError;
pub use inquiries::InquiryStore;
pub use kv::KvStore;
pub use media::MediaStore;
pub use placements::PlacementsStore;
