//! Browser side of the editor's navigation and notice handling

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use product_editor::application::Notice;
use product_editor::domain::Navigator;

/// [`Navigator`] over the client-side router, so leaving the form keeps
/// the app (and the pending notice) alive.
#[derive(Clone)]
pub struct RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    navigate: F,
}

impl<F> RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    pub fn new(navigate: F) -> Self {
        Self { navigate }
    }
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions) + Clone,
{
    fn navigate(&mut self, path: &str) {
        (self.navigate)(path, NavigateOptions::default());
    }

    fn back(&mut self) {
        let went_back = web_sys::window()
            .and_then(|w| w.history().ok())
            .map(|h| h.back().is_ok())
            .unwrap_or(false);
        if !went_back {
            log::warn!("Browser history unavailable, staying on the form");
        }
    }
}

/// Latest notice, shared by every page so it survives navigation.
#[derive(Clone, Copy)]
pub struct NoticeContext(pub RwSignal<Option<Notice>>);

impl NoticeContext {
    pub fn provide() -> Self {
        let ctx = Self(RwSignal::new(None));
        provide_context(ctx);
        ctx
    }

    pub fn expect() -> Self {
        expect_context::<Self>()
    }

    pub fn show(self, notice: Option<Notice>) {
        if notice.is_some() {
            self.0.set(notice);
        }
    }

    pub fn clear(self) {
        self.0.set(None);
    }
}

/// Dismissible banner replacing blocking alerts
#[component]
pub fn NoticeBanner() -> impl IntoView {
    let notice = NoticeContext::expect();

    view! {
        {move || notice.0.get().map(|n| {
            let class = if n.is_error() {
                "mb-4 p-3 bg-red-100 border border-red-400 text-red-700 rounded flex justify-between"
            } else {
                "mb-4 p-3 bg-green-100 border border-green-400 text-green-700 rounded flex justify-between"
            };
            view! {
                <div class=class role="alert">
                    <span>{n.to_string()}</span>
                    <button type="button" class="font-bold" on:click=move |_| notice.clear()>
                        "×"
                    </button>
                </div>
            }
        })}
    }
}
