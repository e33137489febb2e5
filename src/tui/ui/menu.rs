use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, inner};

const BANNER: &str = r#"
  ___ _                _                   
 / __| |_  _____ __ __| |_____ __ ___ _    
 \__ \ ' \/ _ \ V  V / _` / _ \ V  V / ' \ 
 |___/_||_\___/\_/\_/\__,_\___/\_/\_/|_||_|
"#;

pub(super) fn draw_menu(f: &mut Frame, app: &AppState) {
    let area = centered_rect(80, 80, f.area());
    let block = Block::default().title("showdown").borders(Borders::ALL);
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let banner: Vec<Line> = BANNER
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(Color::Cyan))))
        .collect();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(banner.len() as u16 + 1), Constraint::Min(3)])
        .split(inner(area));
    f.render_widget(Paragraph::new(banner).alignment(Alignment::Center), rows[0]);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        "Table setup:",
        Style::default().add_modifier(Modifier::BOLD),
    ))];
    for (i, item) in app.menu_items_display().into_iter().enumerate() {
        let style = if i == app.menu_index {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(item, style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[Enter] Apply  [Q] Quit  [Esc] Cancel  [↑/↓] Move  [+/-] Adjust",
        Style::default().add_modifier(Modifier::DIM),
    )));
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, rows[1]);
}
