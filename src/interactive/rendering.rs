//! TUI rendering with ratatui
//!
//! Root word up top, the words found so far in the middle, input at the bottom.

use super::app::App;
use crate::dictionary::DictionaryOracle;
use crate::output::formatters::{length_badge, streak_flames};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<O: DictionaryOracle>(f: &mut Frame, app: &App<'_, O>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Root word + stats
            Constraint::Min(6),    // Used words
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Help line
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_used_words(f, app, chunks[1]);
    render_input(f, app, chunks[2]);
    render_help(f, chunks[3]);

    if app.alert.is_some() {
        let area = f.area();
        render_alert(f, app, area);
    }
}

fn render_header<O: DictionaryOracle>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let state = app.game.state();

    let content = vec![
        Line::from(Span::styled(
            state.root_word().to_uppercase(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!("Words: {}  ", state.used_words().len()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("Score: {}  ", state.score()),
                Style::default().fg(Color::Gray),
            ),
            Span::styled(
                format!("Streak: {} {}", state.streak(), streak_flames(state.streak())),
                Style::default().fg(Color::Gray),
            ),
        ]),
        Line::from(Span::styled(
            format!(
                "Round {} | Best score {} | Best streak {}",
                app.stats.rounds_played, app.stats.best_score, app.stats.best_streak
            ),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let header = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .title(" Word Scramble ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(header, area);
}

fn render_used_words<O: DictionaryOracle>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let used = app.game.state().used_words();

    let items: Vec<ListItem> = if used.is_empty() {
        vec![
            ListItem::new("Form new words from the root")
                .style(Style::default().fg(Color::DarkGray)),
        ]
    } else {
        used.iter()
            .enumerate()
            .map(|(i, word)| {
                let style = if i == 0 {
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                let mut spans = vec![
                    Span::styled(
                        format!("{} ", length_badge(word.chars().count())),
                        Style::default().fg(Color::Cyan),
                    ),
                    Span::styled(word.clone(), style),
                ];
                if i == 0
                    && let Some((_, points)) = &app.last_accepted
                {
                    spans.push(Span::styled(
                        format!("  +{points}"),
                        Style::default().fg(Color::Green),
                    ));
                }
                ListItem::new(Line::from(spans))
            })
            .collect()
    };

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_input<O: DictionaryOracle>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let input = Paragraph::new(app.input_buffer.as_str())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .title(" Your word ")
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(Color::Yellow)),
        );
    f.render_widget(input, area);
}

fn render_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new("Enter: Submit | Ctrl+N: New Round | Esc: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_alert<O: DictionaryOracle>(f: &mut Frame, app: &App<'_, O>, area: Rect) {
    let Some(alert) = &app.alert else {
        return;
    };

    let popup = centered_rect(60, 7, area);

    let mut lines = vec![Line::from(alert.message.clone()), Line::from("")];
    if alert.streak_lost {
        lines.push(Line::from(Span::styled(
            "Streak lost!",
            Style::default().fg(Color::Red),
        )));
    }
    lines.push(Line::from(Span::styled(
        "Press any key",
        Style::default().fg(Color::DarkGray),
    )));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(format!(" {} ", alert.title))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Red)),
        );

    f.render_widget(Clear, popup);
    f.render_widget(paragraph, popup);
}

/// Rectangle of `percent_x` width and `height` rows, centered in `area`
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
