//! Server-Sent Events (SSE) decoding for streamed chat completions.
//!
//! Turns the raw byte stream of an OpenAI-compatible `stream: true`
//! response into the fragment sequence the session manager consumes.

use anyhow::Result;
use bytes::Bytes;
use futures_util::Stream;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct StreamResponse {
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    delta: Delta,
}

#[derive(Debug, Deserialize)]
struct Delta {
    content: Option<String>,
}

/// Converts a raw SSE byte stream into a stream of response fragments.
///
/// Fragments are yielded in arrival order, exactly once. A `data: [DONE]`
/// marker ends the stream. Events whose delta carries no text (absent or
/// empty `content`) are zero-length fragments and are skipped rather than
/// treated as errors.
pub fn sse_to_fragment_stream(
    byte_stream: impl Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
) -> impl Stream<Item = Result<String>> + Send {
    async_stream::stream! {
        use futures_util::StreamExt;

        let mut byte_stream = std::pin::pin!(byte_stream);
        let mut buffer = String::new();

        while let Some(chunk_result) = byte_stream.next().await {
            let chunk = match chunk_result {
                Ok(c) => c,
                Err(e) => {
                    yield Err(anyhow::anyhow!("Stream error: {e}"));
                    continue;
                }
            };

            buffer.push_str(&String::from_utf8_lossy(&chunk));

            while let Some(line_end) = buffer.find('\n') {
                let line: String = buffer.drain(..=line_end).collect();

                if let Some(fragment) = parse_sse_line(line.trim()) {
                    yield Ok(fragment);
                } else if line.trim() == "data: [DONE]" {
                    return;
                }
            }
        }
    }
}

/// Parses a single SSE line and extracts the fragment text.
///
/// Returns `None` for non-data lines, empty deltas, the `[DONE]` marker,
/// and anything that fails to decode.
fn parse_sse_line(line: &str) -> Option<String> {
    let json_str = line.strip_prefix("data: ")?;

    let response = serde_json::from_str::<StreamResponse>(json_str).ok()?;

    let fragment: String = response
        .choices
        .into_iter()
        .filter_map(|c| c.delta.content)
        .filter(|c| !c.is_empty())
        .collect();

    if fragment.is_empty() {
        None
    } else {
        Some(fragment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sse_line_with_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"I'd recommend"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("I'd recommend".to_string()));
    }

    #[test]
    fn test_parse_sse_line_empty_content_is_skipped() {
        let line = r#"data: {"choices":[{"delta":{"content":""}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_absent_content_is_skipped() {
        let line = r#"data: {"choices":[{"delta":{}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_concatenates_choices() {
        let line =
            r#"data: {"choices":[{"delta":{"content":"Ghost"}},{"delta":{"content":" V3"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("Ghost V3".to_string()));
    }

    #[test]
    fn test_parse_sse_line_requires_data_prefix() {
        let line = r#"{"choices":[{"delta":{"content":"Ghost"}}]}"#;
        assert_eq!(parse_sse_line(line), None);
    }

    #[test]
    fn test_parse_sse_line_invalid_json() {
        assert_eq!(parse_sse_line("data: not json"), None);
    }

    #[test]
    fn test_parse_sse_line_done_marker() {
        assert_eq!(parse_sse_line("data: [DONE]"), None);
    }

    #[test]
    fn test_parse_sse_line_empty_line() {
        assert_eq!(parse_sse_line(""), None);
    }

    #[test]
    fn test_parse_sse_line_comment() {
        assert_eq!(parse_sse_line(": keep-alive"), None);
    }

    #[test]
    fn test_parse_sse_line_unicode_content() {
        let line = r#"data: {"choices":[{"delta":{"content":"₹39,900.50"}}]}"#;
        assert_eq!(parse_sse_line(line), Some("₹39,900.50".to_string()));
    }

    #[tokio::test]
    async fn test_fragment_stream_ends_at_done_marker() {
        use futures_util::StreamExt;

        let body = concat!(
            "data: {\"choices\":[{\"delta\":{\"content\":\"Hel\"}}]}\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"lo\"}}]}\n",
            "data: [DONE]\n",
            "data: {\"choices\":[{\"delta\":{\"content\":\"ignored\"}}]}\n",
        );
        let bytes = futures_util::stream::iter(vec![reqwest::Result::Ok(Bytes::from(body))]);

        let fragments: Vec<String> = sse_to_fragment_stream(bytes)
            .filter_map(|f| async { f.ok() })
            .collect()
            .await;

        assert_eq!(fragments, vec!["Hel".to_string(), "lo".to_string()]);
    }

    #[tokio::test]
    async fn test_fragment_stream_reassembles_split_lines() {
        use futures_util::StreamExt;

        // A data line split across two network chunks must still decode.
        let bytes = futures_util::stream::iter(vec![
            reqwest::Result::Ok(Bytes::from("data: {\"choices\":[{\"delta\":{\"con")),
            reqwest::Result::Ok(Bytes::from("tent\":\"Hello\"}}]}\ndata: [DONE]\n")),
        ]);

        let fragments: Vec<String> = sse_to_fragment_stream(bytes)
            .filter_map(|f| async { f.ok() })
            .collect()
            .await;

        assert_eq!(fragments, vec!["Hello".to_string()]);
    }
}
