//! The "AI search" box: a free-text description that simply becomes the text query

use super::state::FilterState;
use crate::host::{Host, MessageKind};

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query";
pub const AI_SEARCH_MESSAGE: &str =
    "AI search activated! Finding properties that match your description.";

/// Apply a described search to `filter`. A blank description is rejected and leaves the
/// filter untouched.
pub fn ai_search(description: &str, filter: &mut FilterState, host: &mut dyn Host) -> bool {
    let description = description.trim();
    if description.is_empty() {
        host.notify(EMPTY_QUERY_MESSAGE, MessageKind::Error);
        return false;
    }

    filter.query = description.to_string();
    host.notify(AI_SEARCH_MESSAGE, MessageKind::Success);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::RecordingHost;

    #[test]
    fn test_empty_query_rejected() {
        let mut host = RecordingHost::new();
        let mut filter = FilterState::new().with_query("miami");

        assert!(!ai_search("   ", &mut filter, &mut host));
        assert_eq!(filter.query, "miami");
        let note = host.last_notification().unwrap();
        assert_eq!(note.text, EMPTY_QUERY_MESSAGE);
        assert_eq!(note.kind, MessageKind::Error);
    }

    #[test]
    fn test_query_becomes_text_filter() {
        let mut host = RecordingHost::new();
        let mut filter = FilterState::new();

        assert!(ai_search(" Austin ", &mut filter, &mut host));
        assert_eq!(filter.query, "Austin");
        assert_eq!(host.last_notification().unwrap().text, AI_SEARCH_MESSAGE);
    }
}
