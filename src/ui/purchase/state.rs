//! State for the purchase screen.

use serde::Serialize;

use crate::ui::mvi::{Projection, UiState};

/// Height of the purchase area while it is shown.
pub const PURCHASE_AREA_HEIGHT: f32 = 138.0;

const ENABLED_ALPHA: f32 = 1.0;
const DISABLED_ALPHA: f32 = 0.7;

const PURCHASE_TITLE: &str = "Purchase";
const PURCHASING_TITLE: &str = "Waiting for Confirmation...";
const PURCHASED_TITLE: &str = "Purchased!";
const PREVIOUSLY_PURCHASED_TITLE: &str = "Previously Purchased!";

const RESTORE_TITLE: &str = "Restore Purchases";
const RESTORING_TITLE: &str = "Restoring Previous Purchase...";
const RESTORED_TITLE: &str = "Successfully Restored!";

const PITCH_MESSAGE: &str = "As an independent developer, ads help pay for development, \
data maintenance, and hosting costs.\n\nIf you would rather not see any ads, use this \
one-time In-App Purchase to remove them permanently for around a cup of ☕️!";
const THANKS_MESSAGE: &str =
    "Thank you for your support! 🎉\n\nAds have been removed permanently.\n\nCheers!";

const PITCH_FONT_SIZE: f32 = 14.0;
const THANKS_FONT_SIZE: f32 = 16.0;

const RESTORE_HINT_FOOTER: &str = "Already Purchased? Use the Restore button above to remove \
ads again after reinstalling the app, or installing on a new device.";
const SUPPORT_FOOTER: &str = "If you still see ads, please get in touch using the Send \
Feedback button at the bottom of the main Settings screen.";

/// What the purchase screen is doing.
///
/// `Purchasing` and `Restoring` mean a request is in flight; only one can
/// be at a time. `Purchased` and `Restored` are the two success flavors and
/// have no outgoing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseScreenState {
    /// Waiting for the product to load.
    #[default]
    Fetching,
    NotPurchased,
    Purchasing,
    Purchased,
    Restoring,
    Restored,
}

impl UiState for PurchaseScreenState {}

impl PurchaseScreenState {
    /// Check if a purchase or restore request is in flight.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::Purchasing | Self::Restoring)
    }

    /// Check if the screen reached one of its success states.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Purchased | Self::Restored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ButtonAttributes {
    pub title: &'static str,
    pub enabled: bool,
    pub alpha: f32,
}

impl ButtonAttributes {
    fn enabled(title: &'static str) -> Self {
        Self {
            title,
            enabled: true,
            alpha: ENABLED_ALPHA,
        }
    }

    fn disabled(title: &'static str) -> Self {
        Self {
            title,
            enabled: false,
            alpha: DISABLED_ALPHA,
        }
    }
}

/// Flat attribute record for the purchase screen. Every field is set for
/// every state; the renderer applies it as is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenAttributes {
    pub purchase_button: ButtonAttributes,
    pub restore_button: ButtonAttributes,
    pub loading_indicator_alpha: f32,
    pub product_info_alpha: f32,
    pub purchase_area_visible: bool,
    pub purchase_area_alpha: f32,
    pub purchase_area_height: f32,
    pub message_text: &'static str,
    pub message_font_size: f32,
    pub footer_text: &'static str,
}

impl Projection for PurchaseScreenState {
    type Attributes = ScreenAttributes;

    fn attributes(&self) -> ScreenAttributes {
        match self {
            Self::Fetching => ScreenAttributes {
                purchase_button: ButtonAttributes::disabled(PURCHASE_TITLE),
                restore_button: ButtonAttributes::disabled(RESTORE_TITLE),
                loading_indicator_alpha: 1.0,
                product_info_alpha: 0.0,
                purchase_area_visible: true,
                purchase_area_alpha: 1.0,
                purchase_area_height: PURCHASE_AREA_HEIGHT,
                message_text: PITCH_MESSAGE,
                message_font_size: PITCH_FONT_SIZE,
                footer_text: RESTORE_HINT_FOOTER,
            },
            Self::NotPurchased => ScreenAttributes {
                purchase_button: ButtonAttributes::enabled(PURCHASE_TITLE),
                restore_button: ButtonAttributes::enabled(RESTORE_TITLE),
                loading_indicator_alpha: 0.0,
                product_info_alpha: 1.0,
                purchase_area_visible: true,
                purchase_area_alpha: 1.0,
                purchase_area_height: PURCHASE_AREA_HEIGHT,
                message_text: PITCH_MESSAGE,
                message_font_size: PITCH_FONT_SIZE,
                footer_text: RESTORE_HINT_FOOTER,
            },
            Self::Purchasing => ScreenAttributes {
                purchase_button: ButtonAttributes::disabled(PURCHASING_TITLE),
                restore_button: ButtonAttributes::disabled(RESTORE_TITLE),
                loading_indicator_alpha: 0.0,
                product_info_alpha: 1.0,
                purchase_area_visible: true,
                purchase_area_alpha: 1.0,
                purchase_area_height: PURCHASE_AREA_HEIGHT,
                message_text: PITCH_MESSAGE,
                message_font_size: PITCH_FONT_SIZE,
                footer_text: RESTORE_HINT_FOOTER,
            },
            Self::Purchased => ScreenAttributes {
                purchase_button: ButtonAttributes::disabled(PURCHASED_TITLE),
                restore_button: ButtonAttributes::disabled(RESTORE_TITLE),
                loading_indicator_alpha: 0.0,
                product_info_alpha: 0.0,
                purchase_area_visible: false,
                purchase_area_alpha: 0.0,
                purchase_area_height: 0.0,
                message_text: THANKS_MESSAGE,
                message_font_size: THANKS_FONT_SIZE,
                footer_text: SUPPORT_FOOTER,
            },
            Self::Restoring => ScreenAttributes {
                purchase_button: ButtonAttributes::disabled(PURCHASE_TITLE),
                restore_button: ButtonAttributes::disabled(RESTORING_TITLE),
                loading_indicator_alpha: 0.0,
                product_info_alpha: 1.0,
                purchase_area_visible: true,
                purchase_area_alpha: 1.0,
                purchase_area_height: PURCHASE_AREA_HEIGHT,
                message_text: PITCH_MESSAGE,
                message_font_size: PITCH_FONT_SIZE,
                footer_text: RESTORE_HINT_FOOTER,
            },
            Self::Restored => ScreenAttributes {
                purchase_button: ButtonAttributes::disabled(PREVIOUSLY_PURCHASED_TITLE),
                restore_button: ButtonAttributes::disabled(RESTORED_TITLE),
                loading_indicator_alpha: 0.0,
                product_info_alpha: 0.0,
                purchase_area_visible: false,
                purchase_area_alpha: 0.0,
                purchase_area_height: 0.0,
                message_text: THANKS_MESSAGE,
                message_font_size: THANKS_FONT_SIZE,
                footer_text: SUPPORT_FOOTER,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [PurchaseScreenState; 6] = [
        PurchaseScreenState::Fetching,
        PurchaseScreenState::NotPurchased,
        PurchaseScreenState::Purchasing,
        PurchaseScreenState::Purchased,
        PurchaseScreenState::Restoring,
        PurchaseScreenState::Restored,
    ];

    #[test]
    fn fetching_is_default() {
        assert_eq!(PurchaseScreenState::default(), PurchaseScreenState::Fetching);
    }

    #[test]
    fn purchase_area_shown_unless_success() {
        for state in ALL {
            let attrs = state.attributes();
            if state.is_success() {
                assert!(!attrs.purchase_area_visible, "{:?}", state);
                assert_eq!(attrs.purchase_area_height, 0.0);
            } else {
                assert!(attrs.purchase_area_visible, "{:?}", state);
                assert_eq!(attrs.purchase_area_height, PURCHASE_AREA_HEIGHT);
            }
        }
    }

    #[test]
    fn only_not_purchased_enables_buttons() {
        for state in ALL {
            let attrs = state.attributes();
            let expected = state == PurchaseScreenState::NotPurchased;
            assert_eq!(attrs.purchase_button.enabled, expected, "{:?}", state);
            assert_eq!(attrs.restore_button.enabled, expected, "{:?}", state);
        }
    }

    #[test]
    fn spinner_only_while_fetching() {
        for state in ALL {
            let alpha = state.attributes().loading_indicator_alpha;
            if state == PurchaseScreenState::Fetching {
                assert_eq!(alpha, 1.0);
            } else {
                assert_eq!(alpha, 0.0);
            }
        }
    }

    #[test]
    fn in_flight_titles() {
        assert_eq!(
            PurchaseScreenState::Purchasing.attributes().purchase_button.title,
            "Waiting for Confirmation..."
        );
        assert_eq!(
            PurchaseScreenState::Restoring.attributes().restore_button.title,
            "Restoring Previous Purchase..."
        );
    }

    #[test]
    fn copy_switches_on_success() {
        for state in ALL {
            let attrs = state.attributes();
            if state.is_success() {
                assert!(attrs.message_text.starts_with("Thank you for your support!"));
                assert_eq!(attrs.message_font_size, 16.0);
                assert!(attrs.footer_text.contains("please get in touch"), "{:?}", state);
            } else {
                assert!(attrs.message_text.starts_with("As an independent developer,"));
                assert_eq!(attrs.message_font_size, 14.0);
                assert!(attrs.footer_text.starts_with("Already Purchased?"), "{:?}", state);
            }
        }
    }

    #[test]
    fn in_flight_helpers() {
        assert!(PurchaseScreenState::Purchasing.is_in_flight());
        assert!(PurchaseScreenState::Restoring.is_in_flight());
        assert!(!PurchaseScreenState::NotPurchased.is_in_flight());
        assert!(!PurchaseScreenState::Purchased.is_in_flight());
    }
}
