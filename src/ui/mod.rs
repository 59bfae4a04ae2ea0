pub mod charts;
pub mod footer;
pub mod help;
pub mod meters;

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::app::{App, AppMode};

/// Header rows: CPU, Mem, Net, Dsk on the left; info lines on the right.
pub const HEADER_HEIGHT: u16 = 4;

/// Render the complete UI
pub fn draw(f: &mut Frame, app: &App) {
    let size = f.area();

    let chart_rows = if app.show_charts {
        Constraint::Min(6)
    } else {
        Constraint::Length(0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // meters
            chart_rows,                        // sparkline history
            Constraint::Min(0),                // filler when charts are off
            Constraint::Length(1),             // key bar
        ])
        .split(size);

    meters::draw_meters(f, app, chunks[0]);
    if app.show_charts {
        charts::draw_charts(f, app, chunks[1]);
    }
    footer::draw_footer(f, chunks[3]);

    // Overlay popups
    if app.mode == AppMode::Help {
        help::draw_help(f);
    }
}
