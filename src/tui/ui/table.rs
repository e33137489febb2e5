use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use crate::tui::app::AppState;
use ratatui::prelude::*;
use ratatui::widgets::*;

use super::layout::{centered_rect, columns, inner};

pub(super) fn draw_table(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // header
            Constraint::Min(6),    // seats
            Constraint::Length(4), // status bar
        ])
        .split(f.area());

    let header = Paragraph::new(Line::from(format!(
        "Round {}   Players: {}   Straights: {}   Cards left: {}",
        app.round,
        app.players,
        app.rules,
        app.cards_left()
    )))
    .block(Block::default().title("showdown").borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    draw_seats(f, chunks[1], app);
    draw_status(f, chunks[2], app);
}

fn draw_seats(f: &mut Frame, area: Rect, app: &AppState) {
    // Two rows of seats; the top row takes the odd one out.
    let top = (app.players + 1) / 2;
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    for (row, seats) in [(rows[0], 0..top), (rows[1], top..app.players)] {
        let cols = columns(row, seats.len());
        for (col, idx) in cols.into_iter().zip(seats) {
            draw_seat(f, col, app, idx);
        }
    }
}

fn draw_seat(f: &mut Frame, area: Rect, app: &AppState, idx: usize) {
    let hand = app.hands.get(idx);
    let winner = hand.is_some() && app.winners.contains(&idx);
    let mut title = format!("P{}", idx + 1);
    if winner {
        title.push_str(if app.winners.len() > 1 { " [SPLIT]" } else { " [WIN]" });
    }
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if winner {
        block = block.border_style(Style::default().fg(Color::Green));
    }
    f.render_widget(block, area);

    let lines = match hand {
        Some(hand) => vec![card_line(hand), Line::from(""), description_line(hand, winner)],
        None => vec![Line::from(Span::styled(
            "waiting for deal",
            Style::default().add_modifier(Modifier::DIM),
        ))],
    };
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).alignment(Alignment::Center);
    f.render_widget(para, inner(area));
}

fn card_line(hand: &Hand) -> Line<'static> {
    let mut spans = Vec::with_capacity(HAND_SIZE * 2);
    for (i, card) in hand.cards().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(card_span(*card));
    }
    Line::from(spans)
}

fn description_line(hand: &Hand, winner: bool) -> Line<'static> {
    let style = if winner {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    Line::from(Span::styled(hand.describe(), style))
}

fn draw_status(f: &mut Frame, area: Rect, app: &AppState) {
    f.render_widget(Block::default().borders(Borders::ALL).title("Status"), area);
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner(area));

    let mut left = vec![Line::from(if app.round == 0 {
        "No hands yet. Press Space to deal.".to_string()
    } else {
        winners_summary(app)
    })];
    if let Some(err) = app.deal_error() {
        left.push(Line::from(Span::styled(
            format!("Error: {err}"),
            Style::default().fg(Color::Red),
        )));
    }
    let right = vec![Line::from("Space deal • ? help • M menu • Q quit")];
    f.render_widget(Paragraph::new(left).wrap(Wrap { trim: true }), cols[0]);
    f.render_widget(
        Paragraph::new(right).wrap(Wrap { trim: true }).alignment(Alignment::Right),
        cols[1],
    );
}

fn winners_summary(app: &AppState) -> String {
    let seats: Vec<String> = app.winners.iter().map(|i| format!("P{}", i + 1)).collect();
    let best = app.winners.first().and_then(|&i| app.hands.get(i)).map(Hand::describe);
    match (seats.len(), best) {
        (1, Some(best)) => format!("{} wins with {best}", seats[0]),
        (_, Some(best)) => format!("Split between {} with {best}", seats.join(", ")),
        _ => String::new(),
    }
}

pub(super) fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 60, f.area());
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let lines = vec![
        Line::from(Span::styled("Table:", bold)),
        Line::from("- Space / Enter: deal a new round"),
        Line::from("- M: open menu"),
        Line::from("- Q: quit"),
        Line::from(""),
        Line::from(Span::styled("Menu:", bold)),
        Line::from("- Up / Down: move selection"),
        Line::from("- + / -: adjust value"),
        Line::from("- Enter: apply"),
        Line::from("- Esc: cancel"),
        Line::from(""),
        Line::from("Close help: ? or Esc"),
    ];
    f.render_widget(Clear, area);
    f.render_widget(Block::default().title("Help").borders(Borders::ALL), area);
    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner(area));
}

fn suit_glyph_and_style(s: Suit) -> (char, Style) {
    match s {
        Suit::Hearts => ('♥', Style::default().fg(Color::Red)),
        Suit::Diamonds => ('♦', Style::default().fg(Color::Red)),
        Suit::Spades => ('♠', Style::default().fg(Color::White)),
        Suit::Clubs => ('♣', Style::default().fg(Color::White)),
    }
}

fn rank_label(r: Rank) -> String {
    match r {
        Rank::Ten => "10".to_string(),
        other => other.to_char().to_string(),
    }
}

fn card_span(c: Card) -> Span<'static> {
    let (glyph, style) = suit_glyph_and_style(c.suit());
    Span::styled(format!("{}{glyph}", rank_label(c.rank())), style)
}
