//! Login and registration view

use crate::app::PageProps;
use crate::form_data::{submitted_form_data, text};
use worksheet_core::Credentials;
use worksheet_frontend_common::MessageBanner;
use worksheet_frontend_common::hooks::{dispatcher, use_runtime};
use worksheet_frontend_common::pages::{AuthEvent, AuthPage, AuthTab};
use yew::prelude::*;

fn read_credentials(event: &SubmitEvent) -> Option<Credentials> {
    let data = submitted_form_data(event)?;
    Some(Credentials::new(
        text(&data, "email"),
        text(&data, "password"),
    ))
}

fn on_submit(
    dispatch: &Callback<AuthEvent>,
    to_event: fn(Credentials) -> AuthEvent,
) -> Callback<SubmitEvent> {
    let dispatch = dispatch.clone();
    Callback::from(move |event: SubmitEvent| {
        event.prevent_default();
        if let Some(credentials) = read_credentials(&event) {
            dispatch.emit(to_event(credentials));
        }
    })
}

#[function_component(AuthPageView)]
pub fn auth_page_view(props: &PageProps) -> Html {
    let runtime = use_runtime(props.ctx.clone(), AuthPage::default);
    let dispatch = dispatcher(&runtime);
    let page = runtime.snapshot();

    let tabs = AuthTab::ALL.iter().map(|&tab| {
        let active = page.tab == tab;
        let onclick = dispatch.reform(move |_: MouseEvent| AuthEvent::SelectTab(tab));
        html! {
            <button
                type="button"
                class={classes!(
                    "tab",
                    "flex-1", "py-2", "text-sm", "font-medium", "border-b-2",
                    if active { "active border-indigo-500 text-indigo-700" } else { "border-transparent text-gray-500" }
                )}
                {onclick}
            >
                {tab.label()}
            </button>
        }
    });

    let on_login = on_submit(&dispatch, AuthEvent::SubmitLogin);
    let on_register = on_submit(&dispatch, AuthEvent::SubmitRegister);

    html! {
        <main class="max-w-md mx-auto mt-16 p-8 bg-white rounded-xl shadow">
            <h1 class="text-2xl font-semibold mb-6">{"Worksheet Studio"}</h1>
            <nav class="flex mb-6">{ for tabs }</nav>

            <MessageBanner id="auth-message" message={page.message.clone()} />

            <form
                id="login-form"
                class="panel flex flex-col gap-4 mt-4"
                hidden={page.tab != AuthTab::Login}
                onsubmit={on_login}
            >
                <input class="border rounded px-3 py-2" type="email" name="email" placeholder="Email" required=true />
                <input class="border rounded px-3 py-2" type="password" name="password" placeholder="Password" required=true />
                <button class="bg-indigo-600 text-white rounded py-2" type="submit">{"Login"}</button>
            </form>

            <form
                id="register-form"
                class="panel flex flex-col gap-4 mt-4"
                hidden={page.tab != AuthTab::Register}
                onsubmit={on_register}
            >
                <input class="border rounded px-3 py-2" type="email" name="email" placeholder="Email" required=true />
                <input class="border rounded px-3 py-2" type="password" name="password" placeholder="Password" required=true />
                <button class="bg-indigo-600 text-white rounded py-2" type="submit">{"Create account"}</button>
            </form>
        </main>
    }
}
