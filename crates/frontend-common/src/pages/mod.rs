//! Page controllers
//!
//! A controller owns the state of one page and reacts to events by
//! mutating that state and returning the effects it wants performed.
//! It never touches the DOM, storage or network directly; the
//! [`Runtime`](crate::runtime::Runtime) performs effects and feeds API
//! outcomes back in as events.

pub mod auth;
pub mod dashboard;

use crate::effects::{ApiOutcome, Effect};
use std::fmt;

pub use auth::{AuthEvent, AuthPage, AuthTab};
pub use dashboard::{DashboardEvent, DashboardPage};

pub trait Controller {
    type Event: From<ApiOutcome> + fmt::Debug;

    /// Event delivered once when the page mounts
    fn started(token_present: bool) -> Self::Event;

    fn handle(&mut self, event: Self::Event) -> Vec<Effect>;
}
