//! User-facing notices produced by the copy and share flows.

use crate::capability::CopyOutcome;
use crate::config::{Labels, SiteConfig};

/// How an outcome should be surfaced.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    /// Shown briefly, then removed
    Transient { message: String, duration_ms: u32 },
    /// Needs acknowledgement (`window.alert`)
    Blocking(String),
    /// Nothing to show
    Silent,
}

impl Feedback {
    /// Feedback for the modal's copy button.
    pub fn for_recipe_copy(outcome: CopyOutcome, config: &SiteConfig) -> Self {
        let labels = &config.labels;
        match outcome {
            CopyOutcome::Copied | CopyOutcome::CopiedLegacy => Feedback::Transient {
                message: labels.copy_done.clone(),
                duration_ms: config.copy_feedback_ms,
            },
            CopyOutcome::Failed => Feedback::Blocking(labels.copy_failed.clone()),
            CopyOutcome::Empty => Feedback::Blocking(labels.recipe_empty.clone()),
        }
    }

    /// Feedback for the fallback share panel's copy button.
    pub fn for_panel_copy(outcome: CopyOutcome, config: &SiteConfig) -> Self {
        let labels: &Labels = &config.labels;
        match outcome {
            CopyOutcome::Copied | CopyOutcome::CopiedLegacy => Feedback::Transient {
                message: labels.share_copied.clone(),
                duration_ms: config.toast_ms,
            },
            CopyOutcome::Failed => Feedback::Blocking(labels.copy_failed.clone()),
            CopyOutcome::Empty => Feedback::Silent,
        }
    }
}

/// A transient notice with an expiry time, in page-clock milliseconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TransientNotice {
    pub message: String,
    expires_at: f64,
}

impl TransientNotice {
    pub fn new(message: impl Into<String>, now_ms: f64, duration_ms: u32) -> Self {
        Self {
            message: message.into(),
            expires_at: now_ms + f64::from(duration_ms),
        }
    }

    pub fn is_visible(&self, now_ms: f64) -> bool {
        now_ms < self.expires_at
    }
}
