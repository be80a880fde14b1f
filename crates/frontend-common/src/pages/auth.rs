//! Login and registration page

use super::Controller;
use crate::effects::{ApiOutcome, Effect, Page};
use tracing::{debug, info};
use worksheet_core::Credentials;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthTab {
    #[default]
    Login,
    Register,
}

impl AuthTab {
    pub const ALL: [Self; 2] = [Self::Login, Self::Register];

    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthPage {
    /// Visible panel; exactly one is shown at a time
    pub tab: AuthTab,
    /// Inline error from the last submission
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum AuthEvent {
    Started { token_present: bool },
    SelectTab(AuthTab),
    SubmitLogin(Credentials),
    SubmitRegister(Credentials),
    Api(ApiOutcome),
}

impl From<ApiOutcome> for AuthEvent {
    fn from(outcome: ApiOutcome) -> Self {
        Self::Api(outcome)
    }
}

impl Controller for AuthPage {
    type Event = AuthEvent;

    fn started(token_present: bool) -> AuthEvent {
        AuthEvent::Started { token_present }
    }

    fn handle(&mut self, event: AuthEvent) -> Vec<Effect> {
        match event {
            AuthEvent::Started { token_present } => {
                if token_present {
                    debug!("session already active, skipping login");
                    vec![Effect::Redirect(Page::Dashboard)]
                } else {
                    Vec::new()
                }
            }
            AuthEvent::SelectTab(tab) => {
                self.tab = tab;
                Vec::new()
            }
            AuthEvent::SubmitLogin(credentials) => {
                self.message = None;
                vec![Effect::Login(credentials)]
            }
            AuthEvent::SubmitRegister(credentials) => {
                self.message = None;
                vec![Effect::Register(credentials)]
            }
            AuthEvent::Api(ApiOutcome::Registered {
                credentials,
                result,
            }) => match result {
                Ok(user) => {
                    info!(id = ?user.id, "registered, logging in");
                    vec![Effect::Login(credentials)]
                }
                Err(err) => {
                    self.message = Some(err.to_string());
                    Vec::new()
                }
            },
            AuthEvent::Api(ApiOutcome::LoggedIn(result)) => match result {
                Ok(response) => vec![
                    Effect::SaveToken(response.access_token),
                    Effect::Redirect(Page::Dashboard),
                ],
                Err(err) => {
                    self.message = Some(err.to_string());
                    Vec::new()
                }
            },
            AuthEvent::Api(outcome) => {
                debug!(?outcome, "ignoring outcome not requested by the auth page");
                Vec::new()
            }
        }
    }
}
