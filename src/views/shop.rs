//! Shop section: catalog, cart and WhatsApp checkout

use leptos::*;

use crate::components::{CartPanel, FormFieldInput, ServiceCatalog};
use crate::controller::{CartAction, CartEvent};
use crate::forms::FormFields;
use crate::utils::open_in_new_tab;
use crate::ShopContext;

const NOTICE_MS: u32 = 3000;

#[component]
pub fn ShopView() -> impl IntoView {
    view! {
        <section id="shop" class="py-5">
            <div class="container">
                <h2 class="mb-4">"Shop & Services"</h2>
                <div class="row g-4">
                    <div class="col-lg-8">
                        <ServiceCatalog />
                    </div>
                    <div class="col-lg-4">
                        <CartPanel />
                        <CheckoutForm />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Customer details + "Order on WhatsApp"
#[component]
fn CheckoutForm() -> impl IntoView {
    let ctx = use_context::<ShopContext>().expect("ShopContext not found");
    let form = create_rw_signal(FormFields::checkout());
    let (validated, set_validated) = create_signal(false);
    let (notice, set_notice) = create_signal(false);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let fields = form.get_untracked();
        match ctx.dispatch(CartAction::Checkout(fields)) {
            Some(CartEvent::CheckedOut { link }) => {
                open_in_new_tab(&link);
                form.update(FormFields::reset);
                set_validated.set(false);
                set_notice.set(true);
                spawn_local(async move {
                    gloo::timers::future::TimeoutFuture::new(NOTICE_MS).await;
                    set_notice.set(false);
                });
            }
            Some(CartEvent::CheckoutRejected { .. }) => set_validated.set(true),
            _ => {}
        }
    };

    let fields = form.with_untracked(|f| f.fields().to_vec());

    view! {
        <form
            id="checkout-form"
            novalidate
            class=move || if validated.get() { "checkout-form was-validated" } else { "checkout-form" }
            on:submit=on_submit
        >
            <h5>"Checkout"</h5>
            {fields.into_iter().map(|field| view! {
                <FormFieldInput id_prefix="checkout" field=field form=form validated=validated />
            }).collect_view()}
            <button type="submit" class="btn btn-success w-100">"Order on WhatsApp"</button>
            {move || notice.get().then(|| view! {
                <div class="alert alert-success mt-3">"Order sent to WhatsApp. We will confirm shortly."</div>
            })}
        </form>
    }
}
