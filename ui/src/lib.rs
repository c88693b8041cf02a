use leptos::prelude::*;
use leptos_router::components::{Router, Route, Routes, A};
use leptos_router::path;

mod api;
mod components;
mod navigation;

use components::product_form::ProductForm;
use components::product_list::ProductList;
use navigation::{NoticeBanner, NoticeContext};

#[component]
pub fn App() -> impl IntoView {
    NoticeContext::provide();

    view! {
        <Router>
            <div class="flex h-screen bg-gray-100">
                // Sidebar
                <div class="w-64 bg-gray-800 text-white p-4 flex flex-col">
                    <h1 class="text-2xl font-bold mb-8">"Products"</h1>
                    <nav class="space-y-1 flex-1">
                        <NavLink href="/" label="All Products" />
                        <NavLink href="/products/new" label="New Product" />
                    </nav>
                </div>

                // Main Content
                <div class="flex-1 overflow-y-auto">
                    <div class="px-6 pt-6">
                        <NoticeBanner />
                    </div>
                    <Routes fallback=|| "Not found.">
                        <Route path=path!("/") view=ProductList/>
                        <Route path=path!("/products/new") view=ProductForm/>
                        <Route path=path!("/products/:id/edit") view=ProductForm/>
                    </Routes>
                </div>
            </div>
        </Router>
    }
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <A href=href attr:class="block p-2 hover:bg-gray-700 rounded transition-colors">
            {label}
        </A>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::mount_to_body(App);
}
