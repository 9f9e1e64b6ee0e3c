use super::config::Settings;
use crate::account::inbound::state::AccountState;
use crate::referral::usecase::ReferralUseCase;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    // Each module gets its own state struct.
    pub account: AccountState,
    pub referral: Arc<dyn ReferralUseCase>,
}
