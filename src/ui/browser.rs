//! Browser UI rendering.

use super::details::format_record_details;
use super::ThemeColors;
use crate::app::App;
use crate::presentation::{classify, HazardStyle};
use crate::query::{HazardTag, COLOR_LEGEND};
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the browser UI.
pub(super) fn draw_browser(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Header, main content, status bar and key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_header(f, chunks[0], &colors);

    let sidebar_area = if app.show_details {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(app.layout.sidebar_percent),
                Constraint::Percentage(100 - app.layout.sidebar_percent),
            ])
            .split(chunks[1]);
        draw_details(f, app, content[1], &colors);
        content[0]
    } else {
        chunks[1]
    };

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(app.layout.filter_panel_height),
            Constraint::Min(3),
        ])
        .split(sidebar_area);

    draw_filters(f, app, sidebar[0], &colors);
    draw_results(f, app, sidebar[1], &colors);

    draw_status(f, app, chunks[2], &colors);
    draw_keymap(f, app, chunks[3], &colors);
}

fn draw_header(f: &mut Frame<'_>, area: Rect, colors: &ThemeColors) {
    let lines = vec![
        Line::from(vec![
            Span::styled(
                "📋 Chemical Safety Data Sheet (SDS)",
                Style::default()
                    .fg(colors.heading)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "  For chemical safety education only.",
                Style::default().fg(colors.label),
            ),
        ]),
        Line::from(Span::styled(
            "Chemical safety procedures based on the Globally Harmonized System (GHS).",
            Style::default().fg(colors.text),
        )),
    ];

    let paragraph = Paragraph::new(lines).style(Style::default().bg(colors.bg));

    f.render_widget(paragraph, area);
}

fn panel<'a>(title: &'a str, focused: bool, colors: &ThemeColors) -> Block<'a> {
    let border = if focused {
        colors.focus_border
    } else {
        colors.border
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.bg))
}

fn draw_filters(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let label = Style::default().fg(colors.label);
    let mut lines = Vec::new();

    let search_text = if app.search.is_active() {
        format!("{}▏", app.search.buffer())
    } else if app.search.term().is_empty() {
        "(any)".to_string()
    } else {
        app.search.term().to_string()
    };
    lines.push(Line::from(vec![
        Span::styled("🔍 Name/formula: ", label),
        Span::styled(search_text, Style::default().fg(colors.value)),
    ]));

    lines.push(Line::from(Span::styled(
        format!("Hazard classes ({} selected):", app.hazards.selected_count()),
        label,
    )));
    for (idx, tag) in HazardTag::ALL.into_iter().enumerate() {
        let mark = if app.hazards.is_selected(tag) { "[x]" } else { "[ ]" };
        let text = format!("  {} {} ({})", mark, tag.label(), tag.english());
        let style = if app.hazards.is_active() && idx == app.hazards.cursor() {
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.text)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Color code legend:",
        Style::default()
            .fg(colors.heading)
            .add_modifier(Modifier::BOLD),
    )));
    for (code, meaning) in COLOR_LEGEND {
        lines.push(Line::from(vec![
            Span::styled("  ■ ", Style::default().fg(colors.color_code(code))),
            Span::styled(format!("{}: ", code), label),
            Span::styled(meaning, Style::default().fg(colors.text)),
        ]));
    }

    let focused = app.search.is_active() || app.hazards.is_active();
    let paragraph = Paragraph::new(lines)
        .block(panel(" Filters ", focused, colors))
        .style(Style::default().fg(colors.text));

    f.render_widget(paragraph, area);
}

fn draw_results(f: &mut Frame<'_>, app: &mut App, area: Rect, colors: &ThemeColors) {
    let title = format!(" Chemicals ({}/{}) ", app.results.len(), app.catalog.len());
    let focused = !app.search.is_active() && !app.hazards.is_active();

    if app.no_results() {
        draw_no_results(f, area, &title, colors);
        return;
    }

    // Subtract 2 for borders
    let viewport_height = area.height.saturating_sub(2) as usize;
    let text_width = area.width.saturating_sub(4) as usize;
    app.results.adjust_scroll(viewport_height);

    let cursor = app.results.cursor();
    let items: Vec<ListItem<'_>> = app
        .results
        .indices()
        .iter()
        .enumerate()
        .skip(app.results.scroll_offset())
        .take(viewport_height)
        .filter_map(|(pos, &idx)| {
            let record = app.catalog.records().get(idx)?;
            let icon = classify(&record.classification).icon();
            let text = truncate_to_width(&record.title(), text_width.saturating_sub(3));

            let style = if pos == cursor {
                Style::default()
                    .fg(colors.cursor_fg)
                    .bg(colors.cursor_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors.text)
            };

            Some(ListItem::new(Line::from(format!("{} {}", icon, text))).style(style))
        })
        .collect();

    let list = List::new(items).block(panel(&title, focused, colors));

    f.render_widget(list, area);
}

fn draw_no_results(f: &mut Frame<'_>, area: Rect, title: &str, colors: &ThemeColors) {
    let lines = vec![
        Line::from(Span::styled(
            "⚠ No chemicals match the current filters.",
            Style::default()
                .fg(colors.warning)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Press / to change the search or x to clear filters."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(panel(title, false, colors))
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_details(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let (lines, title) = match app.current_view() {
        Some(view) => {
            let title = match view.style() {
                HazardStyle::Danger => " Details: danger ",
                HazardStyle::Warning => " Details: warning ",
                HazardStyle::Safe => " Details: safe ",
            };
            (format_record_details(&view, colors), title)
        },
        None => (
            vec![Line::from(Span::styled(
                "Select a chemical to view its safety data",
                Style::default().fg(colors.text),
            ))],
            " Details ",
        ),
    };

    let paragraph = Paragraph::new(lines)
        .block(panel(title, false, colors))
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true })
        .scroll((app.results.details_scroll, 0));

    f.render_widget(paragraph, area);
}

fn draw_status(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let text = if app.search.is_active() {
        format!("/{}  ({})", app.search.buffer(), app.match_summary())
    } else {
        app.status.clone()
    };

    let paragraph =
        Paragraph::new(text).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}

fn draw_keymap(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let keymap_text = if app.search.is_active() {
        "Enter:apply | Esc:cancel | Type to search"
    } else if app.hazards.is_active() {
        "jk/↑↓:nav | Space/Enter:toggle | x:clear | Esc/Tab:back"
    } else {
        "q:quit | jk:nav | /:search | Tab:hazards | x:clear | t:details | e:export | y:copy | T:theme"
    };

    let paragraph =
        Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
