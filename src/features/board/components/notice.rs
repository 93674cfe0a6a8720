use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible outcome message (clipboard result, import failure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }
}

#[component]
pub fn NoticeBanner(notice: RwSignal<Option<Notice>>) -> impl IntoView {
    view! {
        {move || {
            notice.get().map(|n| {
                let class = match n.kind {
                    NoticeKind::Success => "notice notice-success",
                    NoticeKind::Error => "notice notice-error",
                };
                view! {
                    <div class=class role="status">
                        <span>{n.message}</span>
                        <button class="notice-dismiss" on:click=move |_| notice.set(None)>
                            "×"
                        </button>
                    </div>
                }
            })
        }}
    }
}
