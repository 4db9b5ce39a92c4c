//! TUI rendering with ratatui
//!
//! Visualizations for the computer-guesses interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::{elimination_bar, score_to_pegs};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Candidates are listed individually at or below this count
const LISTED_CANDIDATES: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        "🔢 DIGITMIND - Computer Guesses (digits 0-{})",
        app.solver.level().max_digit()
    );
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Current guess
            Constraint::Percentage(35), // Candidates
            Constraint::Percentage(35), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    let content = match app.current_guess {
        Some(guess) => vec![
            Line::from(vec![
                Span::raw("My guess:  "),
                Span::styled(
                    guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(format!(
                "Chosen from {} consistent combinations",
                app.candidates_count()
            )),
        ],
        None => vec![Line::from("No guess available")],
    };

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.solver.candidates();

    let content = if candidates.is_empty() {
        vec![Line::from(Span::styled(
            "No combination fits the scores given",
            Style::default().fg(Color::Red),
        ))]
    } else if candidates.len() <= LISTED_CANDIDATES {
        let listed: Vec<String> = candidates.iter().map(ToString::to_string).collect();
        vec![
            Line::from(format!("{} remaining:", candidates.len())),
            Line::from(Span::styled(
                listed.join("  "),
                Style::default().fg(Color::Green),
            )),
        ]
    } else {
        vec![Line::from(format!(
            "{} of {} combinations remain",
            candidates.len(),
            app.solver.total()
        ))]
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Candidates ")
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history_items: Vec<ListItem> = app
        .solver
        .history()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, entry)| {
            let content = format!(
                "{}: {} {} {} → {}",
                i + 1,
                entry.guess,
                score_to_pegs(entry.score),
                entry.candidates_before,
                entry.candidates_after
            );
            ListItem::new(content)
        })
        .collect();

    let history =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let total = app.solver.total();
    let remaining = app.candidates_count();
    let eliminated = total.saturating_sub(remaining);
    let progress_pct = (eliminated * 100 / total.max(1)) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Search Space Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct.min(100))
        .label(format!(
            "{} {eliminated}/{total} ruled out",
            elimination_bar(remaining, total, 10)
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 FOUND IT! 🎉 | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            " Enter Score: right-position count, wrong-position count (e.g. 1 2) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let level = Paragraph::new(format!("Level: {}", app.solver.level()))
        .alignment(Alignment::Center);
    f.render_widget(level, chunks[0]);

    let stats_text = format!(
        "Won: {} | Avg: {:.1}",
        app.stats.games_won,
        app.stats.average_guesses()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.candidates_count());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.input_mode == InputMode::WinCelebration {
        "q: Quit | n: New Game"
    } else {
        "q: Quit | u: Undo | n: New | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
