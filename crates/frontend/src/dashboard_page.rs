//! Dashboard view: account summary, worksheet form and generated result

use crate::app::PageProps;
use crate::form_data::{all_text, submitted_form_data, text};
use worksheet_core::WorksheetResult;
use worksheet_frontend_common::forms::{
    ACTIVITY_TYPES, AGE_GROUPS, DEFAULT_DURATION, DURATIONS, GenerateForm, LEVELS,
};
use worksheet_frontend_common::hooks::{dispatcher, use_runtime};
use worksheet_frontend_common::pages::{DashboardEvent, DashboardPage};
use worksheet_frontend_common::{MessageBanner, Spinner};
use yew::prelude::*;

fn read_form(event: &SubmitEvent) -> Option<GenerateForm> {
    let data = submitted_form_data(event)?;
    Some(GenerateForm {
        level: text(&data, "level"),
        topic: text(&data, "topic"),
        age_group: text(&data, "age_group"),
        duration: text(&data, "duration")
            .parse()
            .unwrap_or(DEFAULT_DURATION),
        activity_types: all_text(&data, "activity_types"),
        theme_words: text(&data, "theme_words"),
    })
}

/// Server strings are rendered as text nodes, so markup in them is shown
/// literally
fn list_items(items: &[String]) -> Html {
    items
        .iter()
        .map(|item| html! { <li>{ item.clone() }</li> })
        .collect()
}

fn result_view(result: &WorksheetResult) -> Html {
    html! {
        <section id="result" class="mt-8 p-6 bg-white rounded-xl shadow">
            <h2 id="result-title" class="text-xl font-semibold">{ result.title.clone() }</h2>
            <p id="result-duration" class="text-sm text-gray-500 mb-4">
                { result.estimated_duration.to_string() }
            </p>
            <h3 class="font-medium mt-4">{"Exercises"}</h3>
            <ul id="result-content" class="list-disc pl-6">{ list_items(&result.content) }</ul>
            <h3 class="font-medium mt-4">{"Solutions"}</h3>
            <ul id="result-solutions" class="list-disc pl-6">{ list_items(&result.solutions) }</ul>
        </section>
    }
}

#[function_component(DashboardPageView)]
pub fn dashboard_page_view(props: &PageProps) -> Html {
    let runtime = use_runtime(props.ctx.clone(), DashboardPage::default);
    let dispatch = dispatcher(&runtime);
    let page = runtime.snapshot();

    let on_logout = dispatch.reform(|_: MouseEvent| DashboardEvent::Logout);
    let on_submit = {
        let dispatch = dispatch.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if let Some(form) = read_form(&event) {
                dispatch.emit(DashboardEvent::Submit(form));
            }
        })
    };

    html! {
        <main class="max-w-3xl mx-auto mt-10 px-4">
            <header class="flex items-center justify-between mb-6">
                <div>
                    <p id="user-email" class="font-medium">{ page.email.clone().unwrap_or_default() }</p>
                    <p class="text-sm text-gray-600">
                        {"Credits: "}<span id="user-credits">{ page.credits_text() }</span>
                        if let Some(plan) = &page.plan {
                            <span class="ml-3 uppercase text-xs text-gray-400">{ plan.clone() }</span>
                        }
                    </p>
                </div>
                <button id="logout" type="button" class="text-sm text-indigo-600" onclick={on_logout}>
                    {"Logout"}
                </button>
            </header>

            <MessageBanner id="dashboard-message" message={page.message.clone()} />

            <form id="worksheet-form" class="grid gap-4 mt-4 p-6 bg-white rounded-xl shadow" onsubmit={on_submit}>
                <label class="flex flex-col gap-1">
                    {"Level"}
                    <select name="level" class="border rounded px-3 py-2">
                        { for LEVELS.iter().map(|level| html! { <option value={*level}>{ *level }</option> }) }
                    </select>
                </label>
                <label class="flex flex-col gap-1">
                    {"Topic"}
                    <input name="topic" type="text" class="border rounded px-3 py-2" required=true />
                </label>
                <label class="flex flex-col gap-1">
                    {"Age group"}
                    <select name="age_group" class="border rounded px-3 py-2">
                        { for AGE_GROUPS.iter().map(|group| html! { <option value={*group}>{ *group }</option> }) }
                    </select>
                </label>
                <label class="flex flex-col gap-1">
                    {"Duration"}
                    <select name="duration" class="border rounded px-3 py-2">
                        { for DURATIONS.iter().map(|minutes| html! {
                            <option value={minutes.to_string()} selected={*minutes == DEFAULT_DURATION}>
                                { format!("{minutes} min") }
                            </option>
                        }) }
                    </select>
                </label>
                <fieldset class="flex flex-wrap gap-4">
                    <legend class="mb-1">{"Activity types"}</legend>
                    { for ACTIVITY_TYPES.iter().map(|(value, label)| html! {
                        <label class="flex items-center gap-2">
                            <input type="checkbox" name="activity_types" value={*value} />
                            { *label }
                        </label>
                    }) }
                </fieldset>
                <label class="flex flex-col gap-1">
                    {"Theme words (comma separated)"}
                    <input name="theme_words" type="text" class="border rounded px-3 py-2" />
                </label>
                <button
                    type="submit"
                    class="bg-indigo-600 text-white rounded py-2 disabled:opacity-60"
                    disabled={page.submitting}
                >
                    { page.submit_label() }
                </button>
            </form>

            if page.submitting {
                <Spinner text={Some("Generating your worksheet".to_string())} />
            }

            if let Some(result) = page.visible_result() {
                { result_view(result) }
            }
        </main>
    }
}
