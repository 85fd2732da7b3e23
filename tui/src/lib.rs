//! TUI rendering for Cardfolio using ratatui.

mod input;
mod theme;

pub use input::{InputPump, handle_event, handle_events, handle_key};
pub use theme::{Glyphs, Palette, glyphs, palette, styles};

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use cardfolio_engine::{AGE_HINT, App, Field, Mode};

pub const APP_TITLE: &str = "Cardfolio";

const CARD_MAX_WIDTH: u16 = 64;
/// Borders (2) + chip (1) + gap (1) + header (2) + divider (1) + inputs (3 * 3)
/// + age hint (1) + buttons (1) + toast (1).
const CARD_HEIGHT: u16 = 19;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let options = app.ui_options();
    let palette = palette(options);
    let glyphs = glyphs(options);

    let bg_block = Block::default().style(Style::default().bg(palette.bg_dark));
    frame.render_widget(bg_block, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Min(1),    // Card
            Constraint::Length(1), // Key hints
        ])
        .split(frame.area());

    draw_title(frame, chunks[0], &palette);
    draw_card(frame, app, card_area(chunks[1]), &palette, &glyphs);
    draw_key_hints(frame, app, chunks[2], &palette);
}

fn card_area(area: Rect) -> Rect {
    let width = CARD_MAX_WIDTH.min(area.width);
    let height = CARD_HEIGHT.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn draw_title(frame: &mut Frame, area: Rect, palette: &Palette) {
    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(palette.primary)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn draw_card(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.bg_border))
        .style(Style::default().bg(palette.bg_panel))
        .padding(Padding::horizontal(1));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Chip
            Constraint::Length(1), // Gap
            Constraint::Length(2), // Header
            Constraint::Length(1), // Divider
            Constraint::Length(3), // Name
            Constraint::Length(3), // Hobby
            Constraint::Length(3), // Age
            Constraint::Length(1), // Age hint
            Constraint::Length(1), // Buttons
            Constraint::Length(1), // Toast
        ])
        .split(inner);

    draw_chip(frame, app, rows[0], palette, glyphs);
    draw_header(frame, app, rows[2], palette, glyphs);
    frame.render_widget(
        Paragraph::new(glyphs.divider.repeat(usize::from(rows[3].width)))
            .style(Style::default().fg(palette.bg_border)),
        rows[3],
    );
    for (field, row) in Field::ALL.into_iter().zip([rows[4], rows[5], rows[6]]) {
        draw_input(frame, app, field, row, palette, glyphs);
    }
    if app.mode().is_editable() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!(" {AGE_HINT}"),
                Style::default().fg(palette.text_muted),
            )),
            rows[7],
        );
    }
    draw_buttons(frame, app, rows[8], palette, glyphs);
    draw_toast(frame, app, rows[9], palette);
}

fn draw_chip(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let (icon, label, style) = match app.mode() {
        Mode::Editable => (glyphs.editing, "Editing", styles::chip_editing(palette)),
        Mode::Locked => (glyphs.locked, "Locked", styles::chip_locked(palette)),
    };
    let chip = Paragraph::new(Line::from(Span::styled(format!(" {icon} {label} "), style)))
        .alignment(Alignment::Right);
    frame.render_widget(chip, area);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let state = app.state();
    let lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", glyphs.avatar),
                Style::default().fg(palette.accent),
            ),
            Span::styled(
                state.display(Field::Name).to_string(),
                Style::default()
                    .fg(palette.text_primary)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::raw(" ".repeat(glyphs.avatar.width() + 1)),
            Span::styled(
                state.display(Field::Hobby).to_string(),
                Style::default().fg(palette.text_secondary),
            ),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn field_icon(field: Field, glyphs: &Glyphs) -> &'static str {
    match field {
        Field::Name => glyphs.name,
        Field::Hobby => glyphs.hobby,
        Field::Age => glyphs.age,
    }
}

fn draw_input(
    frame: &mut Frame,
    app: &App,
    field: Field,
    area: Rect,
    palette: &Palette,
    glyphs: &Glyphs,
) {
    let editable = app.mode().is_editable();
    let focused = editable && app.focus() == field;

    let border_color = if !editable {
        palette.text_disabled
    } else if focused {
        palette.accent
    } else {
        palette.bg_border
    };
    let text_color = if editable {
        palette.text_primary
    } else {
        palette.text_secondary
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border_color))
        .title(format!(" {} {} ", field_icon(field, glyphs), field.label()));
    let inner = block.inner(area);

    let value = app.state().value(field);
    let mut scroll_x = 0;
    let mut cursor_pos = None;
    if focused && inner.width > 0 {
        let before_cursor: String = value.graphemes(true).take(app.cursor()).collect();
        let cursor_col = u16::try_from(before_cursor.width()).unwrap_or(u16::MAX);
        let visible = inner.width.saturating_sub(1);
        scroll_x = cursor_col.saturating_sub(visible);
        cursor_pos = Some(Position::new(inner.x + (cursor_col - scroll_x), inner.y));
    }

    let style = if focused {
        Style::default().fg(text_color).bg(palette.bg_highlight)
    } else {
        Style::default().fg(text_color)
    };
    let input = Paragraph::new(value.to_string())
        .style(style)
        .scroll((0, scroll_x))
        .block(block);
    frame.render_widget(input, area);

    if let Some(position) = cursor_pos {
        frame.set_cursor_position(position);
    }
}

fn draw_buttons(frame: &mut Frame, app: &App, area: Rect, palette: &Palette, glyphs: &Glyphs) {
    let form = app.form();
    let line = Line::from(vec![
        Span::styled(
            format!("[ {} Edit ]", glyphs.editing),
            styles::button(palette, form.can_unlock()),
        ),
        Span::raw("  "),
        Span::styled(
            format!("[ {} Show ]", glyphs.check),
            styles::button(palette, form.can_commit()),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Right), area);
}

fn draw_toast(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let Some(toast) = app.toast() else {
        return;
    };
    let color = if toast.notice().is_error() {
        palette.error
    } else {
        palette.success
    };
    let line = Line::from(Span::styled(
        toast.text(),
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_key_hints(frame: &mut Frame, app: &App, area: Rect, palette: &Palette) {
    let enter_action = match app.mode() {
        Mode::Editable => " show  ",
        Mode::Locked => " edit  ",
    };
    let hints = [
        ("Tab", " next  "),
        ("Enter", enter_action),
        ("^T", " toggle  "),
        ("^U", " clear  "),
        ("Esc", " quit"),
    ];
    let spans: Vec<Span> = hints
        .into_iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(key, styles::key_highlight(palette)),
                Span::styled(action, styles::key_hint(palette)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}
