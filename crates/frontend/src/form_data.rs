//! Reading submitted forms through `FormData`

use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

pub fn submitted_form_data(event: &SubmitEvent) -> Option<FormData> {
    let form: HtmlFormElement = event.target_dyn_into()?;
    FormData::new_with_form(&form).ok()
}

/// Single text field; missing fields read as empty
pub fn text(data: &FormData, name: &str) -> String {
    data.get(name).as_string().unwrap_or_default()
}

/// Every value submitted under `name`, e.g. checked checkboxes
pub fn all_text(data: &FormData, name: &str) -> Vec<String> {
    data.get_all(name)
        .iter()
        .filter_map(|value| value.as_string())
        .collect()
}
