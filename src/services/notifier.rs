// src/services/notifier.rs
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// Transient, non-blocking message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub kind: NotificationKind,
}

/// Capability the report controller uses to tell the user about outcomes.
pub trait Notifier {
    fn notify(&mut self, title: &str, description: &str, kind: NotificationKind);
}

/// Collects the toasts raised while handling one request so the page
/// can render them.
#[derive(Debug, Default)]
pub struct ToastQueue {
    toasts: Vec<Notification>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toasts(&self) -> &[Notification] {
        &self.toasts
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, title: &str, description: &str, kind: NotificationKind) {
        match kind {
            NotificationKind::Error => tracing::warn!(kind = kind.as_str(), "toast: {}", title),
            _ => tracing::info!(kind = kind.as_str(), "toast: {}", title),
        }
        self.toasts.push(Notification {
            title: title.to_string(),
            description: description.to_string(),
            kind,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_queue_keeps_order() {
        let mut queue = ToastQueue::new();
        queue.notify("first", "a", NotificationKind::Info);
        queue.notify("second", "b", NotificationKind::Error);

        let titles: Vec<&str> = queue.toasts().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
        assert_eq!(queue.toasts()[1].kind, NotificationKind::Error);
    }
}
