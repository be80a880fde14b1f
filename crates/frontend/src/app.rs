//! Root component: builds the API client and mounts the requested page

use crate::auth_page::AuthPageView;
use crate::dashboard_page::DashboardPageView;
use std::sync::Arc;
use tracing::{error, warn};
use worksheet_core::{ClientConfig, Session};
use worksheet_frontend_common::browser::LocalStorageTokenStore;
use worksheet_frontend_common::{ClientContext, MessageBanner, Page};
use worksheet_http::{ClientError, WorksheetClient};
use yew::prelude::*;

fn build_client() -> Result<ClientContext, ClientError> {
    let session = Session::new(Arc::new(LocalStorageTokenStore::default()));
    WorksheetClient::new(ClientConfig::api_base(), session).map(ClientContext::new)
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub page: Option<Page>,
}

/// Props shared by both page components
#[derive(Properties, PartialEq)]
pub struct PageProps {
    pub ctx: ClientContext,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let client = use_memo((), |_| build_client());

    match (&*client, props.page) {
        (Ok(ctx), Some(Page::Auth)) => html! { <AuthPageView ctx={ctx.clone()} /> },
        (Ok(ctx), Some(Page::Dashboard)) => html! { <DashboardPageView ctx={ctx.clone()} /> },
        (Ok(_), None) => {
            warn!("document has no recognised data-page marker");
            Html::default()
        }
        (Err(err), _) => {
            error!(%err, "failed to set up API client");
            html! { <MessageBanner message={Some(err.to_string())} /> }
        }
    }
}
