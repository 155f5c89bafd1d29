//! Service catalog

use leptos::*;

use crate::controller::CartAction;
use crate::models::SERVICES;
use crate::ShopContext;

#[component]
pub fn ServiceCatalog() -> impl IntoView {
    let ctx = use_context::<ShopContext>().expect("ShopContext not found");
    let currency = ctx.config.currency;

    view! {
        <div class="row g-3 service-catalog">
            {SERVICES.iter().map(|offer| {
                let name = offer.name;
                let unit_price = offer.unit_price();
                let on_add = move |_| {
                    ctx.dispatch(CartAction::Add {
                        name: name.to_string(),
                        unit_price,
                    });
                };
                view! {
                    <div class="col-sm-6 col-lg-4">
                        <div class="card h-100 service-card">
                            <div class="card-body d-flex flex-column">
                                <h5 class="card-title">{offer.name}</h5>
                                <p class="card-text">{offer.description}</p>
                                <p class="price fw-bold">{format!("{} {}", currency, offer.price)}</p>
                                <button class="btn btn-primary mt-auto" on:click=on_add>
                                    "Add to Cart"
                                </button>
                            </div>
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
