use crate::browser::BrowserNavigator;
use crate::context::ClientContext;
use crate::pages::Controller;
use crate::runtime::Runtime;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use worksheet_http::WorksheetClient;
use yew::prelude::*;

/// Create a page runtime once per component, re-render on every state
/// change and deliver the mount event
#[hook]
pub fn use_runtime<C, F>(ctx: ClientContext, init: F) -> Rc<Runtime<C>>
where
    C: Controller + 'static,
    C::Event: 'static,
    F: FnOnce() -> C,
{
    let update = use_force_update();
    let client = WorksheetClient::clone(&ctx.client);
    let runtime = use_memo((), move |_| {
        Runtime::new(init(), client, Rc::new(BrowserNavigator))
    });

    {
        let runtime = runtime.clone();
        use_effect_with((), move |_| {
            runtime.set_observer(move || update.force_update());
            spawn_local(async move { runtime.start().await });
            || ()
        });
    }

    runtime
}

/// Callback that dispatches an event on a fresh local task
pub fn dispatcher<C>(runtime: &Rc<Runtime<C>>) -> Callback<C::Event>
where
    C: Controller + 'static,
    C::Event: 'static,
{
    let runtime = runtime.clone();
    Callback::from(move |event: C::Event| {
        let runtime = runtime.clone();
        spawn_local(async move { runtime.dispatch(event).await });
    })
}
