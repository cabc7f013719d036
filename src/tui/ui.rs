//! UI rendering using ratatui
//!
//! One screen: the root word across the top, round and score, the input
//! line, the words found so far, and an alert box over everything when the
//! last submission was rejected.

use crate::app::{Alert, App};
use crate::game::dictionary::SpellChecker;
use crate::game::RoundState;
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const ALERT_WIDTH: u16 = 44;
const ALERT_HEIGHT: u16 = 7;

/// Render the whole screen from app state
pub fn render<C: SpellChecker>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let round = app.round();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header with root word
            Constraint::Length(1), // Round and score
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Used words
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], round);
    render_status(frame, layout[1], round);
    render_input(frame, layout[2], &app.input, app.alert().is_none());
    render_used_words(frame, layout[3], round);

    let footer = Paragraph::new("Enter Submit  Tab Change word  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[4]);

    if let Some(alert) = app.alert() {
        render_alert(frame, area, alert);
    }
}

/// Render the header: title and root word
fn render_header(frame: &mut Frame, area: Rect, round: &RoundState) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(15), // Title
            Constraint::Min(20),    // Root word
            Constraint::Length(15), // Balance the title
        ])
        .split(inner);

    let title = Paragraph::new("WORD SCRAMBLE")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(title, header_layout[0]);

    let root = Paragraph::new(format_root_word(round.root_word()))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(root, header_layout[1]);
}

fn render_status(frame: &mut Frame, area: Rect, round: &RoundState) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(0)
        .split(area);

    let round_text = Paragraph::new(format!(" Round : {}", round.round()))
        .style(Style::default().fg(Color::White).bold());
    frame.render_widget(round_text, halves[0]);

    let score_text = Paragraph::new(format!("Score : {} ", round.score()))
        .style(Style::default().fg(Color::Magenta).bold())
        .alignment(Alignment::Right);
    frame.render_widget(score_text, halves[1]);
}

fn render_input(frame: &mut Frame, area: Rect, input: &str, focused: bool) {
    let border = if focused { Color::Cyan } else { Color::DarkGray };
    let input = Paragraph::new(format!("> {}_", input))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title("Enter your word"),
        );
    frame.render_widget(input, area);
}

/// Words found this round, most recent at the top
fn render_used_words(frame: &mut Frame, area: Rect, round: &RoundState) {
    let items: Vec<ListItem> = round
        .used_words()
        .iter()
        .map(|word| {
            let badge = letter_badge(word.chars().count());
            ListItem::new(format!(" {} {}", badge, word)).style(Style::default().fg(Color::Green))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!("Words ({})", round.used_words().len())),
    );
    frame.render_widget(list, area);
}

/// Render the alert box over the rest of the screen
fn render_alert(frame: &mut Frame, area: Rect, alert: &Alert) {
    let popup = popup_area(area, ALERT_WIDTH, ALERT_HEIGHT);
    frame.render_widget(Clear, popup);

    let text = vec![
        Line::from(alert.message.as_str()),
        Line::from(""),
        Line::from("[ Enter OK ]").style(Style::default().fg(Color::DarkGray)),
    ];
    let body = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title(alert.title.as_str())
                .title_style(Style::default().fg(Color::Red).bold()),
        );
    frame.render_widget(body, popup);
}

/// Format the root word for display
fn format_root_word(root: &str) -> String {
    let letters: Vec<String> = root.chars().map(|c| c.to_uppercase().to_string()).collect();
    format!("[ {} ]", letters.join(" "))
}

/// Letter count marker: circled digits up to twenty, plain otherwise
fn letter_badge(count: usize) -> String {
    match count {
        1..=20 => char::from_u32(0x2460 + count as u32 - 1)
            .map(String::from)
            .unwrap_or_else(|| format!("({})", count)),
        _ => format!("({})", count),
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
