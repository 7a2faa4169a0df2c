use leptos::prelude::*;

/// Text input with label and inline error
#[component]
pub fn TextField(
    /// Label text
    #[prop(into)]
    label: String,
    /// Bound value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Input type: "text" (default), "number", "date", etc.
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the input element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let input_placeholder = move || placeholder.get().unwrap_or_default();
    let input_t = move || input_type.get().unwrap_or_else(|| "text".to_string());

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                class="form__input"
                type=input_t
                prop:value=move || value.get()
                placeholder=input_placeholder
                required=required
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
