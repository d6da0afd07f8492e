//! The console state machine.
//!
//! Mirrors the stored placements document plus status flags for the most
//! recent fetch or submit. There is no per-slot request tracking and no
//! optimistic rollback. Both the fetch and submit success paths replace
//! the mirror through the same catalog gate, so the two can never
//! diverge on filtering rules.

use nrnhub_ads::{AdPlacements, AdSlot, PlacementsPayload, SlotGroup};

/// In-memory editing state for the ad management console.
#[derive(Debug, Clone, Default)]
pub struct ConsoleState {
    placements: AdPlacements,
    /// A fetch is in flight.
    pub loading: bool,
    /// The mirror reflects a successfully fetched document.
    pub visibility_loaded: bool,
    /// A submit is in flight.
    pub submitting: bool,
    /// The most recent submit succeeded.
    pub submit_success: bool,
    /// Message from the most recent failed operation.
    pub error: Option<String>,
}

impl ConsoleState {
    /// Fresh state with an empty mirror.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current mirror.
    pub fn placements(&self) -> &AdPlacements {
        &self.placements
    }

    /// Whether a slot is currently visible in the mirror.
    pub fn is_visible(&self, slot: AdSlot) -> bool {
        self.placements.is_visible(slot)
    }

    // --- fetch lifecycle ---

    /// A fetch has started.
    pub fn begin_fetch(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// A fetch returned; replace the whole mirror.
    pub fn fetch_succeeded(&mut self, payload: &PlacementsPayload) {
        self.placements = AdPlacements::from_payload(payload);
        self.visibility_loaded = true;
        self.loading = false;
    }

    /// A fetch failed; the mirror is left untouched.
    pub fn fetch_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.visibility_loaded = false;
        self.loading = false;
    }

    // --- submit lifecycle ---

    /// A submit has started.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.submit_success = false;
        self.error = None;
    }

    /// The server accepted the submission and echoed the persisted
    /// state; replace the mirror with it.
    pub fn submit_succeeded(&mut self, payload: &PlacementsPayload) {
        self.placements = AdPlacements::from_payload(payload);
        self.submitting = false;
        self.submit_success = true;
    }

    /// The submit failed; edits are preserved for resubmission.
    pub fn submit_failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.submitting = false;
        self.submit_success = false;
    }

    /// Clear submit status without touching placement data.
    pub fn reset_submit_status(&mut self) {
        self.submit_success = false;
        self.error = None;
    }

    // --- local edits ---

    /// Flip one slot's visibility.
    pub fn toggle(&mut self, slot: AdSlot) -> bool {
        self.placements.toggle(slot)
    }

    /// Set a slot group's visibility in one step.
    pub fn set_group(&mut self, group: SlotGroup, visible: bool) {
        self.placements.set_group(group, visible);
    }

    /// Record an uploaded or typed creative path for a slot.
    pub fn set_image(&mut self, slot: AdSlot, path: impl Into<String>) {
        self.placements.set_image(slot, path);
    }

    /// Record a redirect link for a slot.
    pub fn set_link(&mut self, slot: AdSlot, link: impl Into<String>) {
        self.placements.set_link(slot, link);
    }

    /// Drop one slot's image, link, and visibility.
    pub fn clear(&mut self, slot: AdSlot) {
        self.placements.clear(slot);
    }

    /// Clear every slot in the catalog.
    pub fn clear_all(&mut self) {
        self.placements.clear_all();
    }

    // --- submission ---

    /// Review the mirror before submitting.
    pub fn review_for_submit(&self) -> SubmitReview {
        SubmitReview {
            missing_images: self.placements.missing_images(),
            missing_links: self.placements.missing_links(),
        }
    }

    /// Build the outbound payload through the shared catalog gate.
    pub fn submission_payload(&self) -> PlacementsPayload {
        AdPlacements::sanitize(&self.placements.to_payload())
    }
}

/// Pre-submission review: what blocks, what only warns.
#[derive(Debug, Clone, Default)]
pub struct SubmitReview {
    /// Visible slots with no creative; submission must not proceed.
    pub missing_images: Vec<AdSlot>,
    /// Visible slots with no redirect link; advisory only.
    pub missing_links: Vec<AdSlot>,
}

impl SubmitReview {
    /// Whether submission is blocked.
    pub fn is_blocked(&self) -> bool {
        !self.missing_images.is_empty()
    }

    /// Error text naming the offending slots, or `None` when clear.
    pub fn blocking_message(&self) -> Option<String> {
        if self.missing_images.is_empty() {
            return None;
        }
        let slots: Vec<&str> = self.missing_images.iter().map(|s| s.as_str()).collect();
        Some(format!(
            "image required for visible slots: {}",
            slots.join(", ")
        ))
    }

    /// Advisory text for slots without links, or `None`.
    pub fn warning_message(&self) -> Option<String> {
        if self.missing_links.is_empty() {
            return None;
        }
        let slots: Vec<&str> = self.missing_links.iter().map(|s| s.as_str()).collect();
        Some(format!("no link configured for: {}", slots.join(", ")))
    }
}
