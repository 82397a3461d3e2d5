use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub const ELLIPSIS: char = '…';

pub fn focused_border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

pub fn build_hint_line<'a>(hints: &[(&'a str, &'a str)]) -> Line<'a> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        spans.push(Span::raw(format!("{} ", label)));
    }
    Line::from(spans)
}

/// Cut `text` to `max_width` characters, ending in an ellipsis when cut
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut truncated: String = text.chars().take(max_width - 1).collect();
    truncated.push(ELLIPSIS);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_unchanged() {
        assert_eq!(truncate_with_ellipsis("Fix bug", 10), "Fix bug");
        assert_eq!(truncate_with_ellipsis("Fix bug", 7), "Fix bug");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("Refactor the parser", 8), "Refacto…");
        assert_eq!(truncate_with_ellipsis("Refactor", 1), "…");
        assert_eq!(truncate_with_ellipsis("Refactor", 0), "");
    }

    #[test]
    fn test_truncate_counts_chars_not_bytes() {
        assert_eq!(truncate_with_ellipsis("Überprüfung", 5), "Über…");
    }

    #[test]
    fn test_centered_rect_stays_inside() {
        let area = Rect::new(10, 5, 20, 10);
        let rect = centered_rect(area, 40, 4);
        assert_eq!(rect, Rect::new(10, 8, 20, 4));
    }
}
