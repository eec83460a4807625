use serde::{Deserialize, Serialize};

/// Which screen-level view is currently rendered.
///
/// Exactly one holds at any time. A search submission forces `Search`; `Home`
/// and `Favorites` are reached only by explicit navigation. Background work
/// never changes the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActiveView {
    Home,
    Search,
    Favorites,
}

impl Default for ActiveView {
    fn default() -> Self {
        ActiveView::Home
    }
}

/// In-flight state of the poster enrichment batch.
///
/// A refresh requested while a batch is `Running` is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BatchState {
    Idle,
    Running,
}

impl Default for BatchState {
    fn default() -> Self {
        BatchState::Idle
    }
}

/// Severity of a user-facing notice from the recommendation path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    /// Benign, e.g. an unparseable recommendation response
    Info,
    /// Recoverable, e.g. the recommendation service was unreachable
    Error,
}

/// Last user-facing notice; cleared when a new search starts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_view_is_home() {
        assert_eq!(ActiveView::default(), ActiveView::Home);
    }

    #[test]
    fn test_initial_batch_state_is_idle() {
        assert_eq!(BatchState::default(), BatchState::Idle);
    }

    #[test]
    fn test_view_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ActiveView::Favorites).unwrap(),
            r#""favorites""#
        );
        let view: ActiveView = serde_json::from_str(r#""search""#).unwrap();
        assert_eq!(view, ActiveView::Search);
    }

    #[test]
    fn test_notice_constructors() {
        let info = Notice::info("try a different search term");
        assert_eq!(info.level, NoticeLevel::Info);

        let error = Notice::error("unable to get recommendations");
        assert_eq!(error.level, NoticeLevel::Error);
    }
}
