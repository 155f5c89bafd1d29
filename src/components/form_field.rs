//! Bound form input

use leptos::*;

use crate::forms::{FieldKind, FormField, FormFields};

/// Label + input (or textarea) bound to one key of `form`.
/// Invalid fields are marked once `validated` is set.
#[component]
pub fn FormFieldInput(
    id_prefix: &'static str,
    field: FormField,
    form: RwSignal<FormFields>,
    validated: ReadSignal<bool>,
) -> impl IntoView {
    let key = field.key;
    let id = format!("{}-{}", id_prefix, key);
    let feedback = format!("Please provide a valid {}.", field.label.to_lowercase());

    let class = move || {
        if validated.get() && !form.with(|f| f.is_field_valid(key)) {
            "form-control is-invalid"
        } else {
            "form-control"
        }
    };
    let value = move || form.with(|f| f.value(key).to_string());
    let on_input = move |ev: ev::Event| {
        let new_value = event_target_value(&ev);
        form.update(|f| f.set(key, new_value));
    };

    let control = match field.kind {
        FieldKind::TextArea => view! {
            <textarea
                id=id.clone()
                name=key
                class=class
                rows="3"
                required=field.required
                prop:value=value
                on:input=on_input
            ></textarea>
        }
        .into_view(),
        kind => view! {
            <input
                type=kind.input_type()
                id=id.clone()
                name=key
                class=class
                required=field.required
                prop:value=value
                on:input=on_input
            />
        }
        .into_view(),
    };

    view! {
        <div class="mb-3">
            <label class="form-label" for=id>
                {field.label}
                {field.required.then(|| view! { <span class="text-danger">" *"</span> })}
            </label>
            {control}
            <div class="invalid-feedback">{feedback}</div>
        </div>
    }
}
