use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Key definitions: (key_label, description)
const KEYS: &[(&str, &str)] = &[
    ("q", "Quit  "),
    ("Z", "Pause "),
    ("g", "Charts"),
    ("+", "Faster"),
    ("-", "Slower"),
    ("?", "Help  "),
];

/// Draw the bottom key bar (htop styling: key in black-on-cyan, description
/// in light gray on dark)
pub fn draw_footer(f: &mut Frame, area: Rect) {
    // Full-width dark background first
    let bg_fill = " ".repeat(area.width as usize);
    f.render_widget(
        Paragraph::new(bg_fill).style(Style::default().bg(Color::Indexed(234))),
        area,
    );

    let mut spans: Vec<Span> = Vec::new();

    for (key, desc) in KEYS {
        spans.push(Span::styled(
            key.to_string(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            desc.to_string(),
            Style::default()
                .fg(Color::Indexed(252))
                .bg(Color::Indexed(234)),
        ));
    }

    let line = Line::from(spans);
    f.render_widget(Paragraph::new(line), area);
}
