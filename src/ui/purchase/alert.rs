use serde::Serialize;

use crate::iap::TransactionOutcome;

const SUCCESS_MESSAGE: &str = "Ads have been successfully removed! 🎉 Thank you!";
const NOTHING_TO_RESTORE_MESSAGE: &str =
    "There was no previous purchase found to restore for this account.";

/// Dismissible notification shown when a request resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub title: String,
    pub message: Option<String>,
    pub dismiss_title: &'static str,
}

impl Alert {
    /// Failures use their error message as the title and carry no body.
    pub fn for_outcome(outcome: &TransactionOutcome) -> Self {
        let (title, message) = match outcome {
            TransactionOutcome::PurchaseCompleted => {
                ("Purchase Completed!".to_string(), Some(SUCCESS_MESSAGE))
            }
            TransactionOutcome::PurchaseRestored => {
                ("Purchase Restored!".to_string(), Some(SUCCESS_MESSAGE))
            }
            TransactionOutcome::NoPurchaseToRestore => (
                "No Purchase Found".to_string(),
                Some(NOTHING_TO_RESTORE_MESSAGE),
            ),
            TransactionOutcome::PurchaseFailed { message }
            | TransactionOutcome::RestoreFailed { message } => (message.clone(), None),
        };

        Self {
            title,
            message: message.map(str::to_string),
            dismiss_title: "OK",
        }
    }
}

/// Whether outcome alerts are surfaced. Never affects transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertToggle {
    #[default]
    On,
    Off,
}

impl AlertToggle {
    pub fn is_on(&self) -> bool {
        matches!(self, Self::On)
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::On => Self::Off,
            Self::Off => Self::On,
        }
    }
}

impl From<bool> for AlertToggle {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::On
        } else {
            Self::Off
        }
    }
}
