//! Response envelope helpers
//!
//! Every tool call answers with a single text block, tagged either as a
//! success or as an error (`isError: true`).

use rmcp::model::{CallToolResult, Content};

/// Success envelope carrying one text block
///
/// ```rust,ignore
/// Ok(text_success("ADB server terminated successfully"))
/// ```
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Error envelope carrying one text block
///
/// The call itself still succeeds at the protocol layer; the client sees
/// `isError: true` and a readable message.
pub fn text_failure(text: impl Into<String>) -> CallToolResult {
    CallToolResult::error(vec![Content::text(text.into())])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only_text(result: &CallToolResult) -> &str {
        assert_eq!(result.content.len(), 1);
        &result.content[0].as_text().expect("text content").text
    }

    #[test]
    fn test_text_success() {
        let result = text_success("List of devices attached");
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(only_text(&result), "List of devices attached");
    }

    #[test]
    fn test_text_failure() {
        let result = text_failure("Failed to get ADB help: boom");
        assert_eq!(result.is_error, Some(true));
        assert_eq!(only_text(&result), "Failed to get ADB help: boom");
    }
}
