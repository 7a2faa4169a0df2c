//! Transient toast notifications
//!
//! [`NotificationService`] is `Copy` and lives in Leptos context; any view can
//! push a [`Notice`] and it disappears after the configured timeout.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::config::DEFAULT_NOTICE_TIMEOUT_MS;
use crate::shared::icons::icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.level == NoticeLevel::Success
    }

    fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "toast toast--success",
            NoticeLevel::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct NotificationService {
    notices: RwSignal<Vec<(u64, Notice)>>,
    next_id: RwSignal<u64>,
    timeout_ms: u32,
}

impl NotificationService {
    pub fn new(timeout_ms: u32) -> Self {
        Self {
            notices: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
            timeout_ms: if timeout_ms == 0 {
                DEFAULT_NOTICE_TIMEOUT_MS
            } else {
                timeout_ms
            },
        }
    }

    pub fn push(&self, notice: Notice) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        match notice.level {
            NoticeLevel::Success => log::info!("{}", notice.message),
            NoticeLevel::Error => log::warn!("{}", notice.message),
        }
        self.notices.update(|list| list.push((id, notice)));

        let svc = *self;
        spawn_local(async move {
            TimeoutFuture::new(svc.timeout_ms).await;
            svc.dismiss(id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(Notice::success(message));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(Notice::error(message));
    }

    pub fn dismiss(&self, id: u64) {
        // The owner may already be gone when the timer fires
        let _ = self.notices.try_update(|list| list.retain(|(n, _)| *n != id));
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService context not found")
}

/// Toast stack rendered once by the application shell
#[component]
pub fn Notifications() -> impl IntoView {
    let svc = use_notifications();

    view! {
        <div class="toast-container">
            <For
                each=move || svc.notices.get()
                key=|(id, _)| *id
                children=move |(id, notice)| {
                    let class = notice.class();
                    view! {
                        <div class=class role="status">
                            <span class="toast__message">{notice.message}</span>
                            <button
                                class="button button--icon toast__close"
                                on:click=move |_| svc.dismiss(id)
                            >
                                {icon("x")}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_levels() {
        let ok = Notice::success("Job deleted successfully!");
        assert!(ok.is_success());
        assert_eq!(ok.class(), "toast toast--success");

        let failed = Notice::error("Error deleting job");
        assert!(!failed.is_success());
        assert_eq!(failed.class(), "toast toast--error");
    }
}
