use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::models::{Notification, NotificationKind, Priority};

/// Per-category toggles. Only `market_updates` gates a producer (the market
/// simulation ticker); the rest are carried for the preferences screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub transactions: bool,
    pub market_updates: bool,
    pub system_alerts: bool,
    pub price_alerts: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            transactions: true,
            market_updates: true,
            system_alerts: true,
            price_alerts: true,
        }
    }
}

/// In-memory, append-only queue of user-facing alert events.
///
/// Notifications are always prepended, so the list is reverse-chronological
/// by construction regardless of wall-clock skew. `unread_count` is
/// maintained incrementally and floored at zero; nothing is ever deleted
/// within a session.
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    unread: usize,
    settings: NotificationSettings,
    /// Disambiguates ids pushed within the same millisecond
    seq: u64,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            unread: 0,
            settings: NotificationSettings::default(),
            seq: 0,
        }
    }

    /// Prepend a new unread notification; returns its id
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: impl Into<String>,
        message: impl Into<String>,
        priority: Priority,
    ) -> String {
        let id = format!("{}-{}", Utc::now().timestamp_millis(), self.seq);
        self.seq += 1;

        self.notifications.insert(
            0,
            Notification {
                id: id.clone(),
                kind,
                title: title.into(),
                message: message.into(),
                timestamp: Utc::now(),
                read: false,
                priority,
            },
        );
        self.unread += 1;

        id
    }

    /// Mark one notification read. Already-read or unknown ids are no-ops,
    /// so the unread count never double-decrements.
    pub fn mark_read(&mut self, id: &str) {
        if let Some(notification) = self
            .notifications
            .iter_mut()
            .find(|n| n.id == id && !n.read)
        {
            notification.read = true;
            self.unread = self.unread.saturating_sub(1);
        }
    }

    /// Mark everything read. Idempotent.
    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
        self.unread = 0;
    }

    /// All notifications, newest first
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn unread_count(&self) -> usize {
        self.unread
    }

    pub fn settings(&self) -> NotificationSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: NotificationSettings) {
        self.settings = settings;
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}
