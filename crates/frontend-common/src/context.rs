//! API client shared with page components

use std::rc::Rc;
use worksheet_http::WorksheetClient;

/// Shared handle to the API client
///
/// Two handles are equal when they point at the same client, which is all
/// Yew needs to decide whether props changed.
#[derive(Clone)]
pub struct ClientContext {
    pub client: Rc<WorksheetClient>,
}

impl ClientContext {
    pub fn new(client: WorksheetClient) -> Self {
        Self {
            client: Rc::new(client),
        }
    }
}

impl PartialEq for ClientContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}
