//! Details pane formatting for chemical records.

use super::ThemeColors;
use crate::presentation::RecordView;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Format a record for the details pane.
pub fn format_record_details(view: &RecordView<'_>, colors: &ThemeColors) -> Vec<Line<'static>> {
    let record = view.record();
    let style = view.style();
    let heading = Style::default()
        .fg(colors.heading)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(view.title(), heading)),
        Line::from(Span::styled("─".repeat(50), Style::default().fg(colors.border))),
        Line::from(""),
    ];

    // Pictogram and color code
    let pictogram = match record.pictogram_code() {
        Some(code) => format!("GHS {}", code),
        None => "GHS".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled("Pictogram: ", Style::default().fg(colors.label)),
        Span::styled(pictogram, Style::default().fg(colors.value)),
    ]));
    lines.push(Line::from(Span::styled(
        format!("  {}", view.pictogram_url()),
        Style::default().fg(colors.text),
    )));
    lines.push(Line::from(vec![
        Span::styled("Color code: ", Style::default().fg(colors.label)),
        Span::styled(
            "■ ",
            Style::default().fg(colors.color_code(view.color_code())),
        ),
        Span::styled(
            view.color_code().to_string(),
            Style::default()
                .fg(colors.value)
                .add_modifier(Modifier::BOLD),
        ),
    ]));
    let mut classes = vec![Span::styled(
        "Classification: ",
        Style::default().fg(colors.label),
    )];
    for class in record.hazard_classes() {
        classes.push(Span::styled(
            format!("[{}] ", class),
            Style::default()
                .fg(colors.value)
                .add_modifier(Modifier::BOLD),
        ));
    }
    lines.push(Line::from(classes));
    lines.push(Line::from(""));

    // Hazard block, styled by category
    let block = Style::default()
        .fg(colors.block_fg)
        .bg(colors.hazard_bg(style));
    lines.push(Line::from(vec![
        Span::styled(
            format!(" {} Primary hazard: ", style.icon()),
            block.add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("{} ", record.hazard_description), block),
    ]));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "─".repeat(50),
        Style::default().fg(colors.border),
    )));
    for (label, value) in [
        ("🏚️ Storage: ", &record.storage),
        ("🧤 Safe handling: ", &record.handling),
        ("🆘 First aid: ", &record.first_aid),
    ] {
        lines.push(Line::from(vec![
            Span::styled(label, Style::default().fg(colors.label)),
            Span::styled(value.clone(), Style::default().fg(colors.text)),
        ]));
    }

    lines
}
