use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use poker_hands::tui::{app::AppState, controller};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, crossterm::terminal::EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), crossterm::terminal::LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Deal a single round and print it as plain text.
fn print_showdown() {
    let mut app = AppState::default();
    app.apply_menu();
    if !app.deal_round() {
        eprintln!("deal failed: {}", app.deal_error().unwrap_or("unknown error"));
        return;
    }
    println!("showdown {} ({} players, {} rules)", poker_hands::VERSION, app.players, app.rules);
    for (idx, hand) in app.hands.iter().enumerate() {
        let cards: Vec<String> = hand.cards().iter().map(|c| c.to_string()).collect();
        let mark = if app.winners.contains(&idx) { "*" } else { " " };
        println!("{mark} P{:<2} {}  {}", idx + 1, cards.join(" "), hand.describe());
    }
}

fn main() -> io::Result<()> {
    env_logger::builder().filter_level(log::LevelFilter::Warn).parse_default_env().init();

    if !io::stdout().is_terminal() {
        print_showdown();
        return Ok(());
    }
    let mut terminal = setup_terminal()?;
    let mut app = AppState::default();

    let res = controller::run(&mut terminal, &mut app, Duration::from_millis(250));

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
