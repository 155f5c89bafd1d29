//! Contact form

use leptos::*;

use crate::components::FormFieldInput;
use crate::forms::FormFields;
use crate::models::SubmitStatus;
use crate::utils::contact::{submit_contact, track_event};
use crate::ShopContext;

#[component]
pub fn ContactView() -> impl IntoView {
    let ctx = use_context::<ShopContext>().expect("ShopContext not found");
    let form = create_rw_signal(FormFields::contact());
    let (validated, set_validated) = create_signal(false);
    let (status, set_status) = create_signal(SubmitStatus::Idle);

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let fields = form.get_untracked();
        if !fields.is_valid() {
            set_validated.set(true);
            return;
        }

        set_status.set(SubmitStatus::Sending);
        let config = ctx.config;
        spawn_local(async move {
            match submit_contact(&config, &fields).await {
                Ok(()) => {
                    log::info!("contact form sent");
                    set_status.set(SubmitStatus::Sent);
                    form.update(FormFields::reset);
                    set_validated.set(false);
                    track_event("contact_form_submit", "website");
                }
                Err(e) => {
                    log::warn!("contact form failed: {}", e);
                    set_status.set(SubmitStatus::Failed);
                }
            }
        });
    };

    let fields = form.with_untracked(|f| f.fields().to_vec());

    view! {
        <section id="contact" class="py-5 bg-light">
            <div class="container">
                <h2 class="mb-4">"Contact Us"</h2>
                <form
                    id="contactForm"
                    novalidate
                    class=move || if validated.get() { "was-validated" } else { "" }
                    on:submit=on_submit
                >
                    {fields.into_iter().map(|field| view! {
                        <FormFieldInput id_prefix="contact" field=field form=form validated=validated />
                    }).collect_view()}
                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || status.get().is_pending()
                    >
                        "Send Message"
                    </button>
                    <div id="formAlert" class=move || format!("{} mt-3", status.get().alert_class()) role="alert">
                        {move || status.get().message()}
                    </div>
                </form>
            </div>
        </section>
    }
}
