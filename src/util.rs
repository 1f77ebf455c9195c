//! Utility functions for sdsview.

use crate::clipboard;
use crate::error::Result;
use crate::presentation::RecordView;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Copy record information to clipboard.
pub fn copy_record_info(view: &RecordView<'_>) -> Result<()> {
    clipboard::copy_to_clipboard(&view.to_plain_text())
}

/// Cut `text` to fit `max_width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut result = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("H₂SO₄", 10), "H₂SO₄");
    }

    #[test]
    fn long_text_is_cut_by_columns() {
        let cut = truncate_to_width("Natrium Hidroksida (NaOH)", 10);
        assert_eq!(cut, "Natrium H…");
        assert_eq!(cut.width(), 10);
    }

    #[test]
    fn zero_width_gives_empty() {
        assert_eq!(truncate_to_width("NaOH", 0), "");
    }
}
