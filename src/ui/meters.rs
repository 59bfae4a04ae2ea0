//! The header meters, htop bracket style:
//!
//! LEFT COLUMN (50%):                      RIGHT COLUMN (50%):
//!   Cpu[||||              23.4%]           Load average: 1.23
//!   Mem[||||||        5.2G/16.0G]          Uptime: 05:12:01
//!   Net[||rx|tx  1.2M/s↓ 340K/s↑]          Time: 14:03:22
//!   Dsk[||||||||  200.0G/512.0G]           Source: en0 · /

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::system::snapshot::{format_bytes, format_rate};

pub fn draw_meters(f: &mut Frame, app: &App, area: Rect) {
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = rows(panels[0], 4);
    draw_cpu_bar(f, app, left[0]);
    draw_memory_bar(f, app, left[1]);
    draw_network_bar(f, app, left[2]);
    draw_disk_bar(f, app, left[3]);

    let right = rows(panels[1], 4);
    draw_load_line(f, app, right[0]);
    draw_uptime_line(f, app, right[1]);
    draw_clock_line(f, right[2]);
    draw_source_line(f, app, right[3]);
}

fn rows(area: Rect, n: usize) -> std::rc::Rc<[Rect]> {
    let constraints: Vec<Constraint> = (0..n).map(|_| Constraint::Length(1)).collect();
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
}

/// Fill color by level: green under 50%, yellow under 80%, red above.
fn level_color(percent: f64) -> Color {
    if percent > 80.0 {
        Color::Red
    } else if percent > 50.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Draw one single-color bracket meter: `prefix[|||||   suffix]`.
/// Widths are display widths, so suffixes with arrows line up correctly.
fn draw_meter(
    f: &mut Frame,
    area: Rect,
    prefix: &str,
    suffix: &str,
    frac: f64,
    fill: Color,
) {
    let bar_width = area.width as usize;
    let bracket_len = 2;
    let available =
        bar_width.saturating_sub(prefix.width() + suffix.width() + bracket_len + 1);

    let filled = ((frac.clamp(0.0, 1.0)) * available as f64) as usize;
    let filled = filled.min(available);
    let empty = available.saturating_sub(filled);

    let line = Line::from(vec![
        Span::styled(
            prefix.to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("[", Style::default().fg(Color::Cyan)),
        Span::styled("|".repeat(filled), Style::default().fg(fill)),
        Span::styled(" ".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::styled("] ", Style::default().fg(Color::Cyan)),
        Span::styled(suffix.to_string(), Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Draw the aggregate CPU bar: "Cpu[||||     23.4%]"
fn draw_cpu_bar(f: &mut Frame, app: &App, area: Rect) {
    let pct = app.snapshot.cpu_percent;
    let suffix = format!("{:>5.1}%", pct);
    draw_meter(f, area, "Cpu", &suffix, pct / 100.0, level_color(pct));
}

/// Draw the memory bar: "Mem[||||  5.2G/16.0G]"
fn draw_memory_bar(f: &mut Frame, app: &App, area: Rect) {
    let snap = &app.snapshot;
    let suffix = format!(
        "{}/{}",
        format_bytes(snap.memory_used),
        format_bytes(snap.memory_total)
    );
    draw_meter(
        f,
        area,
        "Mem",
        &suffix,
        snap.memory_percent / 100.0,
        level_color(snap.memory_percent),
    );
}

/// Draw network throughput bar: "Net[||||rx|||tx| 1.2M/s↓ 340K/s↑]"
fn draw_network_bar(f: &mut Frame, app: &App, area: Rect) {
    let snap = &app.snapshot;

    let rx_str = format_rate(snap.download_rate);
    let tx_str = format_rate(snap.upload_rate);
    let suffix = format!("{}↓ {}↑", rx_str, tx_str);

    let prefix = "Net";
    let bar_width = area.width as usize;
    let bracket_len = 2;
    let available =
        bar_width.saturating_sub(prefix.width() + suffix.width() + bracket_len + 1);

    // Use 1 Gbps as visual max for the bar
    let max_rate = 125_000_000.0_f64; // bytes/sec

    let rx_frac = (snap.download_rate / max_rate).clamp(0.0, 1.0);
    let tx_frac = (snap.upload_rate / max_rate).clamp(0.0, 1.0);

    let green_len = (rx_frac * available as f64).min(available as f64) as usize;
    let magenta_len =
        (tx_frac * available as f64).min((available - green_len) as f64) as usize;
    let total_filled = (green_len + magenta_len).min(available);
    let empty = available.saturating_sub(total_filled);

    let line = Line::from(vec![
        Span::styled(
            prefix,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled("[", Style::default().fg(Color::Cyan)),
        Span::styled("|".repeat(green_len), Style::default().fg(Color::Green)),
        Span::styled("|".repeat(magenta_len), Style::default().fg(Color::Magenta)),
        Span::styled(" ".repeat(empty), Style::default().fg(Color::DarkGray)),
        Span::styled("] ", Style::default().fg(Color::Cyan)),
        Span::styled(suffix, Style::default().fg(Color::Gray)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Draw the disk bar: "Dsk[||||||  200.0G/512.0G]"
fn draw_disk_bar(f: &mut Frame, app: &App, area: Rect) {
    let snap = &app.snapshot;
    let suffix = format!(
        "{}/{}",
        format_bytes(snap.disk_used),
        format_bytes(snap.disk_total)
    );
    draw_meter(
        f,
        area,
        "Dsk",
        &suffix,
        snap.disk_percent / 100.0,
        level_color(snap.disk_percent),
    );
}

/// Draw: "Load average: 1.23"
fn draw_load_line(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Load average: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{:.2}", app.snapshot.load_avg),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Draw: "Uptime: 05:12:01"
fn draw_uptime_line(f: &mut Frame, app: &App, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Uptime: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format_uptime(app.uptime_seconds),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Draw: "Time: 14:03:22"
fn draw_clock_line(f: &mut Frame, area: Rect) {
    let now = chrono::Local::now();
    let line = Line::from(vec![
        Span::styled(
            "Time: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            now.format("%H:%M:%S").to_string(),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

/// Draw: "Source: en0 · /" plus paused/demo badges.
fn draw_source_line(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(
            "Source: ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} · {}", app.source_name, app.disk_path),
            Style::default().fg(Color::White),
        ),
    ];
    if app.synthetic {
        spans.push(Span::styled(
            "  demo data",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
    }
    if app.paused {
        spans.push(Span::styled(
            "  PAUSED",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Format uptime as DD days, HH:MM:SS (matching htop)
pub fn format_uptime(seconds: u64) -> String {
    let days = seconds / 86400;
    let hours = (seconds % 86400) / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    if days > 0 {
        format!("{} days, {:02}:{:02}:{:02}", days, hours, minutes, secs)
    } else {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uptime_formatting() {
        assert_eq!(format_uptime(61), "00:01:01");
        assert_eq!(format_uptime(86400 + 3661), "1 days, 01:01:01");
    }
}
