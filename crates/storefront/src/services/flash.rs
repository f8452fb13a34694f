//! One-shot flash messages rendered as toasts.
//!
//! Messages queue in the session and are drained by the next full page
//! render. HTMX fragment responses carry their toast inline instead (see the
//! `toast` partial), so only redirects go through here.

use serde::{Deserialize, Serialize};
use tower_sessions::Session;

const FLASH_KEY: &str = "flash";

type Result<T> = std::result::Result<T, tower_sessions::session::Error>;

/// Severity of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlashLevel {
    Success,
    Error,
}

/// A transient user-facing notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    /// A success toast.
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    /// An error toast.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Error,
            message: message.into(),
        }
    }

    /// CSS class for the toast element.
    #[must_use]
    pub const fn css_class(&self) -> &'static str {
        match self.level {
            FlashLevel::Success => "toast-success",
            FlashLevel::Error => "toast-error",
        }
    }
}

/// Queue a flash message for the next rendered page.
pub async fn push(session: &Session, flash: Flash) -> Result<()> {
    let mut queued: Vec<Flash> = session.get(FLASH_KEY).await?.unwrap_or_default();
    queued.push(flash);
    session.insert(FLASH_KEY, &queued).await
}

/// Take all queued messages, clearing the queue.
pub async fn take(session: &Session) -> Result<Vec<Flash>> {
    Ok(session
        .remove::<Vec<Flash>>(FLASH_KEY)
        .await?
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_class_per_level() {
        assert_eq!(Flash::success("ok").css_class(), "toast-success");
        assert_eq!(Flash::error("bad").css_class(), "toast-error");
    }
}
