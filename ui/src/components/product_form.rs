//! Product create/edit form
//!
//! Thin view over [`ProductEditor`]: inputs feed field changes in, the
//! editor's phase drives the disabled state, and every outcome is handed
//! to the shared notice banner.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};
use product_editor::application::{Notice, ProductEditor, SubmitOutcome};
use product_editor::domain::{Navigator, ProductField, ProductId, ProductService};

use crate::api::BrowserProductService;
use crate::navigation::{NoticeContext, RouterNavigator};

#[component]
pub fn ProductForm() -> impl IntoView {
    let params = use_params_map();
    let route_id = move || params.read().get("id");

    let notice = NoticeContext::expect();
    let navigator = RouterNavigator::new(use_navigate());
    let editor = RwSignal::new(ProductEditor::new(None));
    let (input_error, set_input_error) = signal(Option::<String>::None);

    // Load whenever the route identifier changes
    Effect::new(move |_| {
        let id = match route_id().as_deref().map(str::parse::<ProductId>).transpose() {
            Ok(id) => id,
            Err(e) => {
                log::warn!("{}", e);
                notice.show(Some(Notice::NotFound));
                return;
            }
        };

        if editor.try_update(|e| e.retarget(id)).flatten().is_none() {
            return;
        }
        let Some(Ok(load_id)) = editor.try_update(|e| e.begin_load()) else {
            return;
        };

        spawn_local(async move {
            let result = BrowserProductService.fetch_one(load_id).await;
            if let Some(outcome) = editor.try_update(|e| e.complete_load(load_id, result)) {
                notice.show(outcome.notice());
            }
        });
    });

    let on_change = Callback::new(move |(field, value): (ProductField, String)| {
        match editor.try_update(|e| e.change_field(field, &value)) {
            Some(Err(e)) => set_input_error.set(Some(e.to_string())),
            _ => set_input_error.set(None),
        }
    });

    let submit_navigator = navigator.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        notice.clear();

        let request = match editor.try_update(|e| e.begin_submit()) {
            Some(Ok(request)) => request,
            Some(Err(outcome)) => {
                notice.show(outcome.notice());
                return;
            }
            None => return,
        };

        let mut navigator = submit_navigator.clone();
        spawn_local(async move {
            let result = request.dispatch(&BrowserProductService).await;
            let Some(outcome) = editor.try_update(|e| e.complete_submit(result)) else {
                return;
            };
            notice.show(outcome.notice());
            if let SubmitOutcome::Saved { navigate_to, .. } = &outcome {
                navigator.navigate(navigate_to);
            }
        });
    };

    let on_cancel = move |_| {
        let mut navigator = navigator.clone();
        editor.with_untracked(|e| e.cancel(&mut navigator));
    };

    let mode = move || editor.with(|e| e.mode());
    let busy = move || editor.with(|e| e.is_busy());

    view! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-6">{move || mode().title()}</h2>

            <form on:submit=on_submit novalidate=true autocomplete="off" class="bg-white rounded-lg shadow p-6 max-w-xl">
                {move || input_error.get().map(|e| view! {
                    <div class="mb-4 p-3 bg-yellow-100 border border-yellow-400 text-yellow-800 rounded">
                        {e}
                    </div>
                })}

                <div class="space-y-4">
                    {ProductField::ALL
                        .into_iter()
                        .map(|field| view! { <FieldInput field=field editor=editor on_change=on_change /> })
                        .collect::<Vec<_>>()}
                </div>

                <div class="mt-6 flex justify-between">
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600 disabled:opacity-50"
                        disabled=busy
                    >
                        {move || mode().submit_label()}
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 border border-gray-300 rounded hover:bg-gray-50 disabled:opacity-50"
                        disabled=busy
                        on:click=on_cancel
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One labelled input bound to a draft field
#[component]
fn FieldInput(
    field: ProductField,
    editor: RwSignal<ProductEditor>,
    on_change: Callback<(ProductField, String)>,
) -> impl IntoView {
    let input_type = if field.is_numeric() { "number" } else { "text" };
    let step = match field {
        ProductField::Price => Some("0.01"),
        ProductField::Quantity => Some("1"),
        _ => None,
    };
    let label = if field.is_required() {
        format!("{} *", field.label())
    } else {
        field.label().to_string()
    };

    view! {
        <div>
            <label class="block text-sm font-medium text-gray-700 mb-1">{label}</label>
            <input
                type=input_type
                name=field.as_str()
                required=field.is_required()
                min=field.is_numeric().then_some("0")
                step=step
                class="w-full px-3 py-2 border border-gray-300 rounded-md focus:outline-none focus:ring-2 focus:ring-blue-500"
                prop:value=move || editor.with(|e| e.draft().field_text(field))
                disabled=move || editor.with(|e| e.is_busy())
                on:input=move |ev| on_change.run((field, event_target_value(&ev)))
            />
        </div>
    }
}
