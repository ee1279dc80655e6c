use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Paragraph};
use tui_input::Input;

/// Render a single-line text input inside `block`, scrolled so the cursor
/// stays visible. The terminal cursor is placed only when `focused`.
pub(in crate::tui) fn draw_input_field(
    frame: &mut Frame,
    area: Rect,
    input: &Input,
    placeholder: Option<&str>,
    focused: bool,
    block: Block,
) {
    let inner = block.inner(area);
    // One column stays free for the cursor at the end of the text.
    let width = inner.width.saturating_sub(1).max(1) as usize;
    let scroll = input.visual_scroll(width);

    let paragraph = match placeholder {
        Some(placeholder) if input.value().is_empty() => Paragraph::new(Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )),
        _ => Paragraph::new(input.value()).scroll((0, scroll as u16)),
    };
    frame.render_widget(paragraph.block(block), area);

    if focused && inner.width > 0 && inner.height > 0 {
        let offset = input.visual_cursor().saturating_sub(scroll) as u16;
        frame.set_cursor_position((inner.x + offset.min(inner.width - 1), inner.y));
    }
}
