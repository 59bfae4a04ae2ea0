//! Sparkline panels over the 60-sample metric rings.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Sparkline};
use ratatui::Frame;

use crate::app::App;
use crate::system::history::MetricHistory;
use crate::system::snapshot::format_rate;

/// Resolution of the pre-scaled sparkline series.
const SPARK_LEVELS: u64 = 100;

pub fn draw_charts(f: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    // Left column: the two throughput directions.
    let net_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(columns[0]);

    let down_title = format!(
        " Download {} (peak {}) ",
        format_rate(app.snapshot.download_rate),
        format_rate(app.history.download.max()),
    );
    draw_spark(f, net_rows[0], &app.history.download, &down_title, Color::Green);

    let up_title = format!(
        " Upload {} (peak {}) ",
        format_rate(app.snapshot.upload_rate),
        format_rate(app.history.upload.max()),
    );
    draw_spark(f, net_rows[1], &app.history.upload, &up_title, Color::Magenta);

    // Right column: the three gauges.
    let gauge_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(columns[1]);

    let cpu_title = format!(" Cpu {:.1}% ", app.snapshot.cpu_percent);
    draw_spark(f, gauge_rows[0], &app.history.cpu, &cpu_title, Color::Cyan);

    let mem_title = format!(" Mem {:.1}% ", app.snapshot.memory_percent);
    draw_spark(f, gauge_rows[1], &app.history.memory, &mem_title, Color::Yellow);

    let disk_title = format!(" Dsk {:.1}% ", app.snapshot.disk_percent);
    draw_spark(f, gauge_rows[2], &app.history.disk, &disk_title, Color::Blue);
}

fn draw_spark(f: &mut Frame, area: Rect, history: &MetricHistory, title: &str, color: Color) {
    let data = history.sparkline_data(SPARK_LEVELS);
    let spark = Sparkline::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .data(&data)
        .style(Style::default().fg(color));
    f.render_widget(spark, area);
}
