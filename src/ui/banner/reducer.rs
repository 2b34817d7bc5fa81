use crate::ui::mvi::Reducer;

use super::intent::BannerIntent;
use super::state::BannerViewState;

pub struct BannerReducer;

impl Reducer for BannerReducer {
    type State = BannerViewState;
    type Intent = BannerIntent;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            BannerIntent::Appear { status } => BannerViewState::from_status(status),
            BannerIntent::ResetTapped => BannerViewState::Showing,
        }
    }
}
