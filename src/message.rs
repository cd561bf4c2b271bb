//! src/message.rs
//!
//! Commit messages are handled as raw bytes: git allows non-UTF-8 messages
//! through `i18n.commitEncoding`.

use crate::branch::IssueKey;
use crate::config::HookPolicy;

/// Removes git's `#` comment lines. Lines are rejoined with `\n` and the
/// final line terminator is not kept; `\r\n` counts as a terminator.
pub fn strip_comment_lines(message: &[u8]) -> Vec<u8> {
    let body = message.strip_suffix(b"\n").unwrap_or(message);
    if body.is_empty() {
        return Vec::new();
    }

    body.split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.starts_with(b"#"))
        .collect::<Vec<_>>()
        .join(&b'\n')
}

pub fn contains_key(message: &[u8], key: &IssueKey) -> bool {
    let needle = key.as_str().as_bytes();
    message.windows(needle.len()).any(|window| window == needle)
}

/// Builds the rewritten message, or `None` when the key is already present.
pub fn tag_message(raw: &[u8], key: &IssueKey, policy: &HookPolicy) -> Option<Vec<u8>> {
    let message = if policy.strip_comments {
        strip_comment_lines(raw)
    } else {
        raw.to_vec()
    };

    if contains_key(&message, key) {
        return None;
    }

    let mut tagged = policy.prefix_style.render(key).into_bytes();
    tagged.extend_from_slice(&message);
    Some(tagged)
}
