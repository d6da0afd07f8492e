//! The placements aggregate.
//!
//! All slot state lives in one document: an image path, a redirect link,
//! and a visibility flag per slot. The three maps are independent: a
//! slot may carry a link with no image or an image while hidden. Absent
//! visibility reads as hidden.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::slot::{AdSlot, SlotGroup};
use crate::url;

/// Wire shape of the placements document.
///
/// Keys are open strings here; everything funnels through
/// [`AdPlacements::from_payload`], the single gate that drops entries
/// outside the slot catalog on both the inbound and outbound paths.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlacementsPayload {
    /// Slot name -> image path/URL.
    #[serde(default, rename = "adImages")]
    pub ad_images: BTreeMap<String, String>,
    /// Slot name -> redirect link.
    #[serde(default, rename = "adLinks")]
    pub ad_links: BTreeMap<String, String>,
    /// Slot name -> visibility flag.
    #[serde(default)]
    pub visibility: BTreeMap<String, bool>,
}

impl PlacementsPayload {
    /// True when all three maps are empty.
    pub fn is_empty(&self) -> bool {
        self.ad_images.is_empty() && self.ad_links.is_empty() && self.visibility.is_empty()
    }
}

/// The typed placements aggregate, keyed by the closed slot catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdPlacements {
    images: BTreeMap<AdSlot, String>,
    links: BTreeMap<AdSlot, String>,
    visibility: BTreeMap<AdSlot, bool>,
}

impl AdPlacements {
    /// Build from a wire payload, dropping anything outside the catalog.
    ///
    /// This is the only conversion from open maps to typed state. Rules:
    /// unknown slot names are dropped silently; image and link entries
    /// that are empty after trimming are dropped; visibility entries are
    /// kept whenever the slot is known, including explicit `false`.
    pub fn from_payload(payload: &PlacementsPayload) -> Self {
        let mut placements = Self::default();
        for (name, value) in &payload.ad_images {
            if let Some(slot) = AdSlot::from_str(name) {
                let value = value.trim();
                if !value.is_empty() {
                    placements.images.insert(slot, value.to_string());
                }
            }
        }
        for (name, value) in &payload.ad_links {
            if let Some(slot) = AdSlot::from_str(name) {
                let value = value.trim();
                if !value.is_empty() {
                    placements.links.insert(slot, value.to_string());
                }
            }
        }
        for (name, value) in &payload.visibility {
            if let Some(slot) = AdSlot::from_str(name) {
                placements.visibility.insert(slot, *value);
            }
        }
        placements
    }

    /// Serialize back to the wire shape.
    pub fn to_payload(&self) -> PlacementsPayload {
        PlacementsPayload {
            ad_images: self
                .images
                .iter()
                .map(|(slot, v)| (slot.as_str().to_string(), v.clone()))
                .collect(),
            ad_links: self
                .links
                .iter()
                .map(|(slot, v)| (slot.as_str().to_string(), v.clone()))
                .collect(),
            visibility: self
                .visibility
                .iter()
                .map(|(slot, v)| (slot.as_str().to_string(), *v))
                .collect(),
        }
    }

    /// Run a wire payload through the catalog gate and back.
    pub fn sanitize(payload: &PlacementsPayload) -> PlacementsPayload {
        Self::from_payload(payload).to_payload()
    }

    /// Whether a slot is currently visible. Absent reads as hidden.
    pub fn is_visible(&self, slot: AdSlot) -> bool {
        self.visibility.get(&slot).copied().unwrap_or(false)
    }

    /// The slot's image path, if one is configured.
    pub fn image(&self, slot: AdSlot) -> Option<&str> {
        self.images.get(&slot).map(|s| s.as_str())
    }

    /// The slot's redirect link, if one is configured.
    pub fn link(&self, slot: AdSlot) -> Option<&str> {
        self.links.get(&slot).map(|s| s.as_str())
    }

    /// Flip a slot's visibility and return the new value.
    pub fn toggle(&mut self, slot: AdSlot) -> bool {
        let next = !self.is_visible(slot);
        self.visibility.insert(slot, next);
        next
    }

    /// Set a slot's visibility explicitly.
    pub fn set_visible(&mut self, slot: AdSlot, visible: bool) {
        self.visibility.insert(slot, visible);
    }

    /// Set both members of a slot group to the same visibility.
    pub fn set_group(&mut self, group: SlotGroup, visible: bool) {
        for slot in group.slots() {
            self.visibility.insert(slot, visible);
        }
    }

    /// Overwrite a slot's image path unconditionally.
    pub fn set_image(&mut self, slot: AdSlot, path: impl Into<String>) {
        self.images.insert(slot, path.into());
    }

    /// Overwrite a slot's redirect link unconditionally.
    pub fn set_link(&mut self, slot: AdSlot, link: impl Into<String>) {
        self.links.insert(slot, link.into());
    }

    /// Remove a slot from all three maps.
    pub fn clear(&mut self, slot: AdSlot) {
        self.images.remove(&slot);
        self.links.remove(&slot);
        self.visibility.remove(&slot);
    }

    /// Clear every slot in the catalog, one at a time.
    pub fn clear_all(&mut self) {
        for slot in AdSlot::ALL {
            self.clear(slot);
        }
    }

    /// Visible slots with no usable image. These block submission.
    pub fn missing_images(&self) -> Vec<AdSlot> {
        AdSlot::ALL
            .into_iter()
            .filter(|&slot| {
                self.is_visible(slot)
                    && self.image(slot).map(str::trim).unwrap_or("").is_empty()
            })
            .collect()
    }

    /// Visible slots with no redirect link. Worth a warning, not a block.
    pub fn missing_links(&self) -> Vec<AdSlot> {
        AdSlot::ALL
            .into_iter()
            .filter(|&slot| {
                self.is_visible(slot)
                    && self.link(slot).map(str::trim).unwrap_or("").is_empty()
            })
            .collect()
    }

    /// Copy with every image path made absolute against the base URL.
    pub fn absolutized(&self, base: &str) -> Self {
        let mut out = self.clone();
        for value in out.images.values_mut() {
            *value = url::absolutize(base, value);
        }
        out
    }

    /// True when no slot has any state.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.links.is_empty() && self.visibility.is_empty()
    }
}
