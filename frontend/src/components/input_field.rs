//! Labelled text input with inline error.

use coverreg_shared::Field;
use leptos::*;

use crate::wizard::field_copy;

#[component]
pub fn InputField(
    field: Field,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    on_input: Callback<String>,
) -> impl IntoView {
    let copy = field_copy(field);

    view! {
        <div class="input-group">
            <label class="input-field">
                <span class="input-label">
                    {copy.label}
                    {copy.required.then(|| view! { <span class="required">"*"</span> })}
                </span>
                <input
                    type=copy.input_type
                    name=field.as_str()
                    placeholder=copy.placeholder
                    required=copy.required
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.call(event_target_value(&ev))
                />
                {move || error.get().map(|message| view! { <p class="input-error">{message}</p> })}
            </label>
            {copy.hint.map(|hint| view! { <p class="input-hint">{hint}</p> })}
        </div>
    }
}
