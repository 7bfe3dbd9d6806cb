use crate::app::RenderState;
use crate::engine::Token;
use crate::ui::chips::{self, ChipList, ChipSlot};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Minimum columns kept free for the field after the last chip
pub const MIN_FIELD_WIDTH: u16 = 12;

/// Screen geometry from the last frame, kept for mouse hit testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameLayout {
    pub container: Rect,
    pub slots: Vec<ChipSlot>,
    pub field: Rect,
    pub hidden: usize,
}

/// Chip as laid out in `slot`, styled by the token's validity.
pub fn render_chip(
    slot: &ChipSlot,
    token: &Token,
    selected: bool,
    theme: &Theme,
) -> Span<'static> {
    Span::styled(slot.label.clone(), theme.chip(token.is_valid, selected))
}

pub fn render_field(state: &RenderState, theme: &Theme) -> Paragraph<'static> {
    let style = if state.showing_placeholder() {
        theme.placeholder()
    } else {
        theme.input()
    };
    let style = if state.is_focused() {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    };

    Paragraph::new(Line::from(Span::styled(state.field_text().to_string(), style)))
}

pub fn render_status(state: &RenderState, hidden: usize, theme: &Theme) -> Line<'static> {
    let noun = if state.token_count == 1 {
        "address"
    } else {
        "addresses"
    };
    let mut text = format!("{} {}", state.token_count, noun);
    if state.invalid_count > 0 {
        text.push_str(&format!(", {} invalid", state.invalid_count));
    }
    if hidden > 0 {
        text.push_str(&format!(", {hidden} hidden above"));
    }
    text.push_str("  ·  Enter/, add  ·  Esc leave  ·  Ctrl+Q quit");

    Line::from(Span::styled(text, theme.status()))
}

/// Draws the whole control and returns where everything landed.
pub fn render_control(
    frame: &mut Frame,
    chip_list: &ChipList,
    state: &RenderState,
    theme: &Theme,
) -> FrameLayout {
    let area = frame.area();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);
    let container = rows[0];

    let border_style = if state.is_focused() {
        theme.container().fg(theme.palette().accent)
    } else {
        theme.container()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(Style::default().bg(theme.palette().background));
    let inner = block.inner(container);
    frame.render_widget(block, container);

    let chips::FlowLayout {
        slots,
        field,
        hidden,
    } = chips::layout(chip_list.chips(), inner, MIN_FIELD_WIDTH);
    for (slot, index) in slots.iter().zip(hidden..) {
        let Some(token) = chip_list.chips().get(index) else {
            break;
        };
        let selected = chip_list.selected() == Some(index);
        frame.render_widget(
            Paragraph::new(Line::from(render_chip(slot, token, selected, theme))),
            slot.area,
        );
    }

    frame.render_widget(render_field(state, theme), field);
    if state.is_focused() && chip_list.selected().is_none() {
        let typed = u16::try_from(state.buffer.width()).unwrap_or(u16::MAX);
        let column = field.x.saturating_add(typed).min(field.x + field.width);
        frame.set_cursor_position(Position::new(column, field.y));
    }

    frame.render_widget(render_status(state, hidden, theme), rows[1]);

    FrameLayout {
        container,
        slots,
        field,
        hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::AppMode;
    use crate::input::Change;
    use ratatui::{backend::TestBackend, Terminal};

    fn state(buffer: &str, token_count: usize, invalid_count: usize) -> RenderState {
        RenderState {
            mode: AppMode::Editing,
            buffer: buffer.to_string(),
            placeholder: "add more people...".to_string(),
            token_count,
            invalid_count,
        }
    }

    fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_chip_uses_invalid_style() {
        let theme = Theme::default();
        let valid_token = Token::new("a@b.com", true);
        let invalid_token = Token::new("oops", false);
        let flow = chips::layout(
            &[valid_token.clone(), invalid_token.clone()],
            Rect::new(0, 0, 40, 1),
            1,
        );
        let valid = render_chip(&flow.slots[0], &valid_token, false, &theme);
        let invalid = render_chip(&flow.slots[1], &invalid_token, false, &theme);
        assert_eq!(valid.content, " a@b.com x ");
        assert_ne!(valid.style, invalid.style);
    }

    #[test]
    fn test_render_status_counts() {
        let theme = Theme::default();
        let line = render_status(&state("", 3, 1), 0, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("3 addresses, 1 invalid"));

        let line = render_status(&state("", 1, 0), 0, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("1 address  "));
    }

    #[test]
    fn test_render_control_draws_chips_and_placeholder() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let mut chip_list = ChipList::new();
        chip_list.apply(&Change::Added(Token::new("a@b.com", true)));
        let theme = Theme::default();
        let state = state("", 1, 0);

        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = render_control(frame, &chip_list, &state, &theme))
            .unwrap();

        assert_eq!(layout.container, Rect::new(0, 0, 40, 5));
        assert_eq!(layout.slots.len(), 1);
        assert_eq!(layout.slots[0].area, Rect::new(1, 1, 11, 1));
        assert!(row_text(&terminal, 1).contains(" a@b.com x  add more people..."));
        assert!(row_text(&terminal, 5).starts_with("1 address"));
    }

    #[test]
    fn test_render_control_shows_buffer() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let chip_list = ChipList::new();
        let theme = Theme::default();
        let state = state("half@typed", 0, 0);

        terminal
            .draw(|frame| {
                render_control(frame, &chip_list, &state, &theme);
            })
            .unwrap();

        assert!(row_text(&terminal, 1).contains("half@typed"));
        assert!(!row_text(&terminal, 1).contains("add more people"));
    }

    #[test]
    fn test_render_status_reports_hidden_chips() {
        let theme = Theme::default();
        let line = render_status(&state("", 10, 0), 3, &theme);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.starts_with("10 addresses, 3 hidden above"));
    }

    #[test]
    fn test_render_control_scrolls_when_chips_overflow() {
        let mut terminal = Terminal::new(TestBackend::new(40, 6)).unwrap();
        let mut chip_list = ChipList::new();
        for i in 0..10 {
            chip_list.apply(&Change::Added(Token::new(format!("a{i}@b.com"), true)));
        }
        let theme = Theme::default();
        let state = state("typing@here", 10, 0);

        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = render_control(frame, &chip_list, &state, &theme))
            .unwrap();

        assert_eq!(layout.hidden, 3);
        assert_eq!(layout.slots.len(), 7);
        assert!(layout.field.width > 0);
        assert!(row_text(&terminal, 1).contains(" a3@b.com x "));
        assert!(row_text(&terminal, 3).contains(" a9@b.com x  typing@here"));
        assert!(row_text(&terminal, 5).contains("3 hidden above"));
    }

    #[test]
    fn test_render_control_elides_wide_chip() {
        let mut terminal = Terminal::new(TestBackend::new(14, 5)).unwrap();
        let mut chip_list = ChipList::new();
        chip_list.apply(&Change::Added(Token::new(
            "averyverylongaddress@example.com",
            true,
        )));
        let theme = Theme::default();
        let state = state("", 1, 0);

        let mut layout = FrameLayout::default();
        terminal
            .draw(|frame| layout = render_control(frame, &chip_list, &state, &theme))
            .unwrap();

        assert_eq!(layout.slots[0].area, Rect::new(1, 1, 12, 1));
        assert_eq!(row_text(&terminal, 1), "│ averyve… x │");
        assert_eq!(layout.slots[0].remove_column(), 11);
    }
}
