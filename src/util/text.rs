use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate a string to fit within `max_cells` terminal cells, appending `…`
/// when anything was cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if max_cells == 0 {
        return String::new();
    }
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 1 {
        return "\u{2026}".to_string();
    }
    let budget = max_cells - 1;
    let mut out = String::new();
    let mut used = 0;
    for g in s.graphemes(true) {
        let gw = UnicodeWidthStr::width(g);
        if used + gw > budget {
            break;
        }
        used += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Truncate and right-pad with spaces to exactly `cells` terminal cells.
/// Column layout helper for plain-text tables.
pub fn fit_to_width(s: &str, cells: usize) -> String {
    let mut out = truncate_to_width(s, cells);
    let w = display_width(&out);
    for _ in w..cells {
        out.push(' ');
    }
    out
}

/// Byte offset of the grapheme boundary after `offset`, or None at the end.
pub fn next_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset >= s.len() {
        return None;
    }
    s[offset..]
        .grapheme_indices(true)
        .nth(1)
        .map(|(i, _)| offset + i)
        .or(Some(s.len()))
}

/// Byte offset of the grapheme boundary before `offset`, or None at the start.
pub fn prev_grapheme_boundary(s: &str, offset: usize) -> Option<usize> {
    if offset == 0 {
        return None;
    }
    s[..offset].grapheme_indices(true).last().map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ascii_and_cjk() {
        assert_eq!(display_width("board"), 5);
        assert_eq!(display_width("看板"), 4);
    }

    #[test]
    fn truncate_short_input_untouched() {
        assert_eq!(truncate_to_width("todo", 10), "todo");
    }

    #[test]
    fn truncate_reserves_ellipsis_cell() {
        assert_eq!(truncate_to_width("Design new UI", 7), "Design\u{2026}");
    }

    #[test]
    fn truncate_never_splits_wide_chars() {
        let out = truncate_to_width("看板看板", 4);
        assert!(display_width(&out) <= 4);
        assert!(out.ends_with('\u{2026}'));
    }

    #[test]
    fn truncate_degenerate_widths() {
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "\u{2026}");
    }

    #[test]
    fn fit_pads_to_exact_cells() {
        assert_eq!(fit_to_width("ab", 4), "ab  ");
        assert_eq!(display_width(&fit_to_width("看板看板", 5)), 5);
    }

    #[test]
    fn grapheme_boundaries_ascii() {
        assert_eq!(next_grapheme_boundary("task", 0), Some(1));
        assert_eq!(next_grapheme_boundary("task", 4), None);
        assert_eq!(prev_grapheme_boundary("task", 4), Some(3));
        assert_eq!(prev_grapheme_boundary("task", 0), None);
    }

    #[test]
    fn grapheme_boundaries_combining() {
        let s = "cafe\u{0301}!";
        assert_eq!(next_grapheme_boundary(s, 3), Some(6));
        assert_eq!(prev_grapheme_boundary(s, 6), Some(3));
    }
}
