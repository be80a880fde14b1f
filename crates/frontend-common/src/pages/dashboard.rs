//! Dashboard page: profile summary, worksheet form and result

use super::Controller;
use crate::effects::{ApiOutcome, Effect, Page};
use crate::forms::GenerateForm;
use tracing::{debug, info, warn};
use worksheet_core::WorksheetResult;
use worksheet_http::ClientError;

pub const SUBMIT_LABEL: &str = "Generate";
pub const SUBMIT_BUSY_LABEL: &str = "Generating...";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardPage {
    pub email: Option<String>,
    pub credits: Option<i64>,
    pub plan: Option<String>,
    pub message: Option<String>,
    /// Last generated worksheet; kept while hidden
    pub result: Option<WorksheetResult>,
    pub result_visible: bool,
    /// A generation request is in flight
    pub submitting: bool,
}

impl DashboardPage {
    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            SUBMIT_BUSY_LABEL
        } else {
            SUBMIT_LABEL
        }
    }

    pub fn credits_text(&self) -> String {
        self.credits
            .map(|credits| credits.to_string())
            .unwrap_or_default()
    }

    /// Result to render, only while it is meant to be visible
    pub fn visible_result(&self) -> Option<&WorksheetResult> {
        self.result.as_ref().filter(|_| self.result_visible)
    }

    /// 401 forces a logout with no message; anything else is shown inline
    fn fail(&mut self, err: ClientError) -> Vec<Effect> {
        if err.is_auth_expired() {
            info!("session rejected, logging out");
            return logout();
        }
        warn!(status = ?err.status(), error = %err, "dashboard request failed");
        self.message = Some(err.to_string());
        Vec::new()
    }
}

#[derive(Debug)]
pub enum DashboardEvent {
    Started { token_present: bool },
    Submit(GenerateForm),
    Logout,
    Api(ApiOutcome),
}

impl From<ApiOutcome> for DashboardEvent {
    fn from(outcome: ApiOutcome) -> Self {
        Self::Api(outcome)
    }
}

fn logout() -> Vec<Effect> {
    vec![Effect::ClearToken, Effect::Redirect(Page::Auth)]
}

impl Controller for DashboardPage {
    type Event = DashboardEvent;

    fn started(token_present: bool) -> DashboardEvent {
        DashboardEvent::Started { token_present }
    }

    fn handle(&mut self, event: DashboardEvent) -> Vec<Effect> {
        match event {
            DashboardEvent::Started { token_present } => {
                if token_present {
                    vec![Effect::FetchProfile]
                } else {
                    debug!("no session, back to login");
                    vec![Effect::Redirect(Page::Auth)]
                }
            }
            DashboardEvent::Logout => logout(),
            DashboardEvent::Submit(form) => {
                self.message = None;
                self.result_visible = false;

                match form.to_request() {
                    Ok(request) => {
                        self.submitting = true;
                        vec![Effect::GenerateWorksheet(request)]
                    }
                    Err(err) => {
                        self.message = Some(err.to_string());
                        Vec::new()
                    }
                }
            }
            DashboardEvent::Api(ApiOutcome::Profile(result)) => match result {
                Ok(profile) => {
                    self.email = Some(profile.email);
                    self.credits = Some(profile.credits);
                    self.plan = profile.plan;
                    Vec::new()
                }
                Err(err) => self.fail(err),
            },
            DashboardEvent::Api(ApiOutcome::Generated(result)) => {
                self.submitting = false;
                match result {
                    Ok(worksheet) => {
                        self.credits = Some(worksheet.remaining_credits);
                        self.result = Some(worksheet);
                        self.result_visible = true;
                        Vec::new()
                    }
                    Err(err) => self.fail(err),
                }
            }
            DashboardEvent::Api(outcome) => {
                debug!(?outcome, "ignoring outcome not requested by the dashboard");
                Vec::new()
            }
        }
    }
}
