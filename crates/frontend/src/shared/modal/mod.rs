use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: String,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) to display in header
    #[prop(optional)]
    action_buttons: Option<ChildrenFn>,
    /// Extra class for the modal surface
    #[prop(optional, into)]
    class: MaybeProp<String>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape closes the modal; the listener goes away with it
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Deferred so the overlay is not removed during its own click dispatch
    let handle_overlay_click = move |_| {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let stop_propagation = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
    };

    let handle_close = move |_| {
        on_close.run(());
    };

    let modal_class = move || format!("modal {}", class.get().unwrap_or_default());

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class=modal_class on:click=stop_propagation>
                <div class="modal-header">
                    <h2 class="modal-title">{title}</h2>
                    <div class="modal-header-actions">
                        {move || action_buttons.as_ref().map(|buttons| buttons())}
                        <button class="button button--icon modal__close" on:click=handle_close>
                            {icon("x")}
                        </button>
                    </div>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
            </div>
        </div>
    }
}

/// Yes/no question before a destructive action
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    /// Disables both buttons while the action runs
    #[prop(optional, into)]
    busy: Signal<bool>,
    #[prop(optional, into)] confirm_label: MaybeProp<String>,
) -> impl IntoView {
    let confirm_label = move || confirm_label.get().unwrap_or_else(|| "Delete".to_string());

    view! {
        <Modal title=title on_close=on_cancel class="modal--confirm">
            <p class="confirm-dialog__message">{message}</p>
            <div class="confirm-dialog__actions">
                <button
                    class="button button--secondary"
                    disabled=move || busy.get()
                    on:click=move |_| on_cancel.run(())
                >
                    "Cancel"
                </button>
                <button
                    class="button button--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {confirm_label}
                </button>
            </div>
        </Modal>
    }
}
