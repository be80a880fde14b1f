//! Inline error banner

use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct MessageBannerProps {
    #[prop_or_default]
    pub message: Option<String>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// Renders nothing until there is a message to show
#[function_component(MessageBanner)]
pub fn message_banner(props: &MessageBannerProps) -> Html {
    match &props.message {
        Some(message) => html! {
            <div
                id={props.id.clone()}
                class="message show rounded-md px-4 py-3 text-sm bg-red-100 text-red-800"
                role="alert"
            >
                {message}
            </div>
        },
        None => Html::default(),
    }
}
