use crate::{config::Config, mail::MailQueue};
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub mail: MailQueue,
}

impl FromRef<AppState> for MailQueue {
    fn from_ref(state: &AppState) -> Self {
        state.mail.clone()
    }
}
