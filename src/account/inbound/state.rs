use crate::account::usecase::{authn::AuthnUseCase, profile::ProfileUseCase};
use std::sync::Arc;

#[derive(Clone)]
pub struct AccountState {
    pub authn: Arc<dyn AuthnUseCase>,
    pub profile: Arc<dyn ProfileUseCase>,
}

impl AccountState {
    pub fn new(authn: Arc<dyn AuthnUseCase>, profile: Arc<dyn ProfileUseCase>) -> Self {
        Self { authn, profile }
    }
}

#[cfg(test)]
mod tests {
    use crate::account::usecase::authn::MockAuthnUseCase;
    use crate::account::usecase::profile::MockProfileUseCase;

    use super::*;

    #[test]
    fn test_account_state_new() {
        let authn: Arc<dyn AuthnUseCase> = Arc::new(MockAuthnUseCase::new());
        let profile: Arc<dyn ProfileUseCase> = Arc::new(MockProfileUseCase::new());

        let state = AccountState::new(authn.clone(), profile.clone());

        assert!(Arc::ptr_eq(&state.authn, &authn));
        assert!(Arc::ptr_eq(&state.profile, &profile));
    }
}
