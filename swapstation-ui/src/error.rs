//! Toast notices and inline feedback components
//!
//! Rejected forms and stubbed actions report through a [`Toaster`]
//! provided at the app root. Each notice dismisses itself after the
//! configured duration.

use leptos::*;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeLevel {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "alert-success",
            NoticeLevel::Info => "alert-info",
            NoticeLevel::Warning => "alert-warning",
            NoticeLevel::Error => "alert-error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeLevel::Success => "✅",
            NoticeLevel::Info => "ℹ️",
            NoticeLevel::Warning => "⚠️",
            NoticeLevel::Error => "❌",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: 0,
            level,
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, description)
    }

    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, description)
    }

    /// Validation failures are warnings; the user can fix the form and retry
    pub fn from_error(title: impl Into<String>, error: &swapstation_common::Error) -> Self {
        let level = match error {
            swapstation_common::Error::Config(_) | swapstation_common::Error::InvalidConfig(_) => {
                NoticeLevel::Error
            }
            _ => NoticeLevel::Warning,
        };
        Self::new(level, title, error.to_string())
    }
}

/// Handle to the notice stack, cheap to copy into event handlers
#[derive(Clone, Copy)]
pub struct Toaster {
    notices: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
    duration_ms: u32,
}

impl Toaster {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            notices: create_rw_signal(Vec::new()),
            next_id: store_value(1),
            duration_ms,
        }
    }

    pub fn push(&self, mut notice: Notice) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        notice.id = id;
        self.notices.update(|notices| notices.push(notice));

        // Auto-dismiss after duration
        if self.duration_ms > 0 {
            let toaster = *self;
            set_timeout(
                move || toaster.dismiss(id),
                Duration::from_millis(self.duration_ms as u64),
            );
        }
    }

    pub fn dismiss(&self, id: u64) {
        self.notices.update(|notices| notices.retain(|n| n.id != id));
    }

    pub fn notices(&self) -> Signal<Vec<Notice>> {
        self.notices.into()
    }
}

pub fn provide_toaster(duration_ms: u32) -> Toaster {
    let toaster = Toaster::new(duration_ms);
    provide_context(toaster);
    toaster
}

pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Stack of live notices, mounted once at the app root
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();
    let notices = toaster.notices();

    view! {
        <div class="toast-stack">
            <For
                each=move || notices.get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class={format!("toast {}", notice.level.class())}>
                            <div class="toast-icon">{notice.level.icon()}</div>
                            <div class="toast-body">
                                <div class="toast-title">{notice.title}</div>
                                <div class="toast-message">{notice.description}</div>
                            </div>
                            <button class="toast-close" on:click=move |_| toaster.dismiss(id)>
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Inline error message for form fields
#[component]
pub fn FieldError(
    /// Error message
    #[prop(into)]
    message: String,
) -> impl IntoView {
    view! {
        <div class="field-error">
            <span class="field-error-icon">"⚠️"</span>
            <span class="field-error-message">{message}</span>
        </div>
    }
}

/// Shown when a filtered list has no rows
#[component]
pub fn EmptyState(
    #[prop(default = "📦")]
    icon: &'static str,
    #[prop(into)]
    title: String,
    #[prop(into)]
    description: String,
) -> impl IntoView {
    view! {
        <div class="empty-state">
            <div class="empty-state-icon">{icon}</div>
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swapstation_common::Error;

    #[test]
    fn test_level_classes() {
        assert_eq!(NoticeLevel::Success.class(), "alert-success");
        assert_eq!(NoticeLevel::Warning.class(), "alert-warning");
        assert_eq!(NoticeLevel::Error.class(), "alert-error");
    }

    #[test]
    fn test_validation_error_is_warning() {
        let notice = Notice::from_error("Refund", &Error::MissingBankDetails);
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.description, "Please fill in all bank details");
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let notice = Notice::from_error("Settings", &Error::InvalidConfig("jitter".to_string()));
        assert_eq!(notice.level, NoticeLevel::Error);
    }

    #[test]
    fn test_missing_field_message() {
        let notice = Notice::from_error("Inspection", &Error::MissingField("Inspector"));
        assert_eq!(notice.title, "Inspection");
        assert_eq!(notice.description, "Inspector is required");
    }
}
