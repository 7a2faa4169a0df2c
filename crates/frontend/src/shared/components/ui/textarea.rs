use leptos::prelude::*;

/// Textarea component with label support
#[component]
pub fn TextArea(
    /// Label text
    #[prop(into)]
    label: String,
    /// Bound value
    value: RwSignal<String>,
    /// Hint shown under the label
    #[prop(optional, into)]
    hint: MaybeProp<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Rows attribute
    #[prop(optional)]
    rows: Option<u32>,
    /// ID for the textarea element
    #[prop(into)]
    id: String,
) -> impl IntoView {
    let textarea_placeholder = move || placeholder.get().unwrap_or_default();
    let textarea_rows = rows.unwrap_or(3);

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
            </label>
            {move || hint.get().map(|h| view! { <span class="form__hint">{h}</span> })}
            <textarea
                id=id
                class="form__textarea"
                placeholder=textarea_placeholder
                rows=textarea_rows
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}
