//! Executes controller effects against the session, the API client and
//! the browser location

use crate::effects::{ApiOutcome, Effect, Page};
use crate::pages::Controller;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use tracing::debug;
use worksheet_core::Session;
use worksheet_http::WorksheetClient;

/// Performs full-page navigation
pub trait Navigator {
    fn redirect(&self, page: Page);
}

/// Drives one page controller
///
/// Effects run in the order the controller returned them. API calls are
/// awaited one at a time within a dispatch and their outcomes are handed
/// back to the controller, whose follow-up effects join the queue. The
/// controller is only borrowed between awaits, so independent dispatches
/// may interleave freely and nothing in flight is ever cancelled.
pub struct Runtime<C: Controller> {
    controller: RefCell<C>,
    client: WorksheetClient,
    session: Session,
    navigator: Rc<dyn Navigator>,
    observer: RefCell<Option<Rc<dyn Fn()>>>,
}

impl<C: Controller> Runtime<C> {
    pub fn new(controller: C, client: WorksheetClient, navigator: Rc<dyn Navigator>) -> Self {
        let session = client.session().clone();
        Self {
            controller: RefCell::new(controller),
            client,
            session,
            navigator,
            observer: RefCell::new(None),
        }
    }

    /// Register the callback run after every state change
    pub fn set_observer(&self, observer: impl Fn() + 'static) {
        *self.observer.borrow_mut() = Some(Rc::new(observer));
    }

    /// Read the controller state
    pub fn with_state<R>(&self, f: impl FnOnce(&C) -> R) -> R {
        f(&self.controller.borrow())
    }

    pub fn snapshot(&self) -> C
    where
        C: Clone,
    {
        self.controller.borrow().clone()
    }

    /// Deliver the mount event, telling the controller whether a session
    /// token is present
    pub async fn start(&self) {
        self.dispatch(C::started(self.session.is_active())).await;
    }

    pub async fn dispatch(&self, event: C::Event) {
        let mut pending: VecDeque<Effect> = self.apply(event).into();

        while let Some(effect) = pending.pop_front() {
            if let Some(outcome) = self.execute(effect).await {
                pending.extend(self.apply(C::Event::from(outcome)));
            }
        }
    }

    fn apply(&self, event: C::Event) -> Vec<Effect> {
        debug!(?event, "page event");
        let effects = self.controller.borrow_mut().handle(event);
        self.notify();
        effects
    }

    fn notify(&self) {
        let observer = self.observer.borrow().clone();
        if let Some(observer) = observer {
            observer();
        }
    }

    async fn execute(&self, effect: Effect) -> Option<ApiOutcome> {
        debug!(effect = effect.kind(), "running effect");

        match effect {
            Effect::Redirect(page) => {
                self.navigator.redirect(page);
                None
            }
            Effect::SaveToken(token) => {
                self.session.save(&token);
                None
            }
            Effect::ClearToken => {
                self.session.clear();
                None
            }
            Effect::Register(credentials) => {
                let result = self.client.register(&credentials).await;
                Some(ApiOutcome::Registered {
                    credentials,
                    result,
                })
            }
            Effect::Login(credentials) => {
                Some(ApiOutcome::LoggedIn(self.client.login(&credentials).await))
            }
            Effect::FetchProfile => Some(ApiOutcome::Profile(self.client.fetch_me().await)),
            Effect::GenerateWorksheet(request) => Some(ApiOutcome::Generated(
                self.client.generate_worksheet(&request).await,
            )),
        }
    }
}
