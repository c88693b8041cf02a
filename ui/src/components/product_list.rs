use leptos::prelude::*;
use product_editor::domain::ProductService;

use crate::api::BrowserProductService;

/// Listing view the form returns to after a save
#[component]
pub fn ProductList() -> impl IntoView {
    let products = LocalResource::new(|| async { BrowserProductService.list().await });

    view! {
        <div class="p-6">
            <div class="flex justify-between items-center mb-6">
                <h2 class="text-2xl font-bold">"Products"</h2>
                <a href="/products/new" class="px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600">
                    "+ New Product"
                </a>
            </div>

            <Suspense fallback=move || view! { <p class="text-gray-500">"Loading products..."</p> }>
                {move || products.get().map(|result| match result {
                    Ok(list) if list.is_empty() => view! {
                        <p class="text-gray-500">"No products yet."</p>
                    }.into_any(),
                    Ok(list) => view! {
                        <table class="min-w-full bg-white rounded-lg shadow">
                            <thead>
                                <tr class="text-left text-sm text-gray-600 border-b">
                                    <th class="p-3">"Name"</th>
                                    <th class="p-3">"Description"</th>
                                    <th class="p-3">"Price"</th>
                                    <th class="p-3">"Quantity"</th>
                                    <th class="p-3"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {list.into_iter().map(|product| {
                                    let edit_href = format!("/products/{}/edit", product.id);
                                    view! {
                                        <tr class="border-b">
                                            <td class="p-3 font-medium">{product.draft.name}</td>
                                            <td class="p-3 text-gray-600">{product.draft.description}</td>
                                            <td class="p-3">{format!("{:.2}", product.draft.price)}</td>
                                            <td class="p-3">{product.draft.quantity}</td>
                                            <td class="p-3">
                                                <a href=edit_href class="text-blue-500 hover:underline">"Edit"</a>
                                            </td>
                                        </tr>
                                    }
                                }).collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }.into_any(),
                    Err(e) => view! {
                        <div class="p-3 bg-red-100 border border-red-400 text-red-700 rounded">
                            {format!("Failed to load products: {}", e)}
                        </div>
                    }.into_any(),
                })}
            </Suspense>
        </div>
    }
}
