//! Comment stripping for prompt submission.
//!
//! The scanner keeps `//...//` comments as spans so the editor can style
//! them; before a prompt is handed to the generation backend the comments
//! have to be removed. Unlike the scanner this step is fallible: silently
//! submitting half-commented text would be worse than rejecting it.

/// Error produced while stripping comments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommentError {
    /// A `//` opener with no matching closing `//`.
    #[error("unclosed comment starting at byte {0}")]
    Unclosed(usize),
}

/// Remove every `//...//` construct from `input`.
///
/// # Errors
///
/// Returns [`CommentError::Unclosed`] if a comment opener is never closed.
pub fn strip_comments(input: &str) -> Result<String, CommentError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;

    while pos < chars.len() {
        let (byte_pos, ch) = chars[pos];
        if ch == '/' && chars.get(pos + 1).map(|&(_, c)| c) == Some('/') {
            let mut i = pos + 2;
            let mut closed = false;
            while i + 1 < chars.len() {
                if chars[i].1 == '/' && chars[i + 1].1 == '/' {
                    pos = i + 2;
                    closed = true;
                    break;
                }
                i += 1;
            }
            if !closed {
                return Err(CommentError::Unclosed(byte_pos));
            }
        } else {
            out.push(ch);
            pos += 1;
        }
    }

    Ok(out)
}
