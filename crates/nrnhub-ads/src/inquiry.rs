//! Advertiser inquiries.
//!
//! Inquiries are append-only: once stored they are never updated or
//! deleted. The creation timestamp is always server-assigned.

use serde::{Deserialize, Serialize};

use crate::error::AdsError;
use crate::ids::InquiryId;

/// An inbound inquiry as submitted from the public form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InquiryDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub company: String,
    #[serde(default, rename = "adType")]
    pub ad_type: String,
    #[serde(default)]
    pub message: String,
}

impl InquiryDraft {
    /// Validate the draft: name, email, and ad type are required after
    /// trimming; the email must look like an address.
    pub fn validate(&self) -> Result<(), AdsError> {
        if self.name.trim().is_empty() {
            return Err(AdsError::Validation("name is required".to_string()));
        }
        if self.email.trim().is_empty() {
            return Err(AdsError::Validation("email is required".to_string()));
        }
        if !is_plausible_email(self.email.trim()) {
            return Err(AdsError::Validation(format!(
                "email is not a valid address: {}",
                self.email.trim()
            )));
        }
        if self.ad_type.trim().is_empty() {
            return Err(AdsError::Validation("adType is required".to_string()));
        }
        Ok(())
    }
}

/// A stored advertiser inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdInquiry {
    /// Unique inquiry identifier.
    pub id: InquiryId,
    /// Contact name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Company name; empty when not provided.
    pub company: String,
    /// Requested placement kind (free text from a fixed UI list).
    #[serde(rename = "adType")]
    pub ad_type: String,
    /// Free-form message; empty when not provided.
    pub message: String,
    /// Unix timestamp of creation, server-assigned.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

impl AdInquiry {
    /// Validate a draft and mint the stored record.
    pub fn from_draft(draft: InquiryDraft) -> Result<Self, AdsError> {
        draft.validate()?;
        Ok(Self {
            id: InquiryId::generate(),
            name: draft.name.trim().to_string(),
            email: draft.email.trim().to_string(),
            company: draft.company.trim().to_string(),
            ad_type: draft.ad_type.trim().to_string(),
            message: draft.message.trim().to_string(),
            created_at: current_timestamp(),
        })
    }
}

/// Minimal structural email check: one `@`, non-empty local part, and a
/// dotted domain.
fn is_plausible_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !email.contains(char::is_whitespace)
}

/// Get current Unix timestamp.
fn current_timestamp() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
