//! Единственный слот уведомлений: новое сообщение вытесняет предыдущее.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            NotificationKind::Success => "✅",
            NotificationKind::Error => "❌",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Monotonic id, lets a dismiss timer target only its own message
    pub id: u64,
    pub kind: NotificationKind,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSlot {
    current: Option<Notification>,
    next_id: u64,
}

impl NotificationSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Заменяет текущее сообщение новым, возвращает его id
    pub fn show(&mut self, kind: NotificationKind, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.current = Some(Notification {
            id,
            kind,
            text: text.into(),
        });
        id
    }

    /// Убирает сообщение, только если оно всё ещё отображается
    pub fn dismiss(&mut self, id: u64) -> bool {
        match &self.current {
            Some(n) if n.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_message_replaces_previous() {
        let mut slot = NotificationSlot::new();
        slot.show(NotificationKind::Success, "первое");
        slot.show(NotificationKind::Error, "второе");

        let current = slot.current().unwrap();
        assert_eq!(current.kind, NotificationKind::Error);
        assert_eq!(current.text, "второе");
    }

    #[test]
    fn test_stale_timer_does_not_dismiss_newer_message() {
        let mut slot = NotificationSlot::new();
        let first = slot.show(NotificationKind::Success, "первое");
        let second = slot.show(NotificationKind::Success, "второе");

        assert!(!slot.dismiss(first));
        assert_eq!(slot.current().map(|n| n.id), Some(second));
        assert!(slot.dismiss(second));
        assert!(slot.current().is_none());
    }

    #[test]
    fn test_dismiss_of_empty_slot_is_noop() {
        let mut slot = NotificationSlot::new();
        assert!(!slot.dismiss(1));
        assert!(slot.current().is_none());
    }
}
