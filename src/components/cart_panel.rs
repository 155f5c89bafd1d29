//! Cart list with quantity controls

use leptos::*;

use crate::controller::CartAction;
use crate::ShopContext;

#[component]
pub fn CartPanel() -> impl IntoView {
    let ctx = use_context::<ShopContext>().expect("ShopContext not found");
    let currency = ctx.config.currency;
    let cart_view = move || ctx.controller.with(|c| c.cart().view(currency));

    view! {
        <div class="cart-panel">
            <h4>
                "Your Cart "
                <span class="badge bg-secondary">{move || cart_view().item_count}</span>
            </h4>
            <ul id="cart-items" class="list-group mb-3">
                {move || {
                    let rows = cart_view().rows;
                    if rows.is_empty() {
                        return view! {
                            <li class="list-group-item text-muted">"Your cart is empty."</li>
                        }.into_view();
                    }
                    rows.into_iter().enumerate().map(|(index, row)| view! {
                        <li class="list-group-item d-flex justify-content-between align-items-center">
                            <span>{row}</span>
                            <div class="btn-group btn-group-sm">
                                <button
                                    class="btn btn-outline-secondary"
                                    on:click=move |_| { ctx.dispatch(CartAction::ChangeQuantity { index, delta: -1 }); }
                                >"-"</button>
                                <button
                                    class="btn btn-outline-secondary"
                                    on:click=move |_| { ctx.dispatch(CartAction::ChangeQuantity { index, delta: 1 }); }
                                >"+"</button>
                            </div>
                        </li>
                    }).collect_view()
                }}
            </ul>
            <p class="fw-bold">
                "Total: " {currency} " "
                <span id="cart-total">{move || cart_view().total}</span>
            </p>
        </div>
    }
}
