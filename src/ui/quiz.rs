use crate::models::{GameMode, QuizSession};
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{cursor_column, truncate_string};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, session: &QuizSession) {
    let layout = calculate_quiz_chunks(f.area());

    let header_text = format!(
        "Score {} / {}  -  {} remaining  -  {}",
        session.score,
        session.answered,
        session.remaining(),
        truncate_string(&session.category, 30)
    );
    let header = Paragraph::new(header_text)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    let question_title = match session.mode {
        GameMode::Reverse => "What is this standard about?",
        _ => "Which ERC/EIP standard is this?",
    };
    let question = Paragraph::new(Text::from(session.question_prompt()))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(question_title));
    f.render_widget(question, layout.question_area);

    if session.showing_answer {
        draw_reveal(f, session, layout.answer_area);
    } else {
        draw_input(f, session, layout.answer_area);
    }

    let mut help_text = Vec::new();

    let mut basic_spans = Vec::new();
    if !session.showing_answer {
        basic_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Submit  "),
            Span::styled(
                "Ctrl+K",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Skip  "),
        ]);
    } else {
        basic_spans.extend([
            Span::styled(
                "Enter",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(" Next Question  "),
        ]);
    }
    basic_spans.extend([
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit to Menu"),
    ]);
    help_text.push(Line::from(basic_spans));

    help_text.push(Line::from(vec![
        Span::styled(
            "Ctrl+M",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Change Mode  "),
        Span::styled(
            "Ctrl+G",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Change Category  "),
        Span::styled(
            "Ctrl+R",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Restart  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ]));

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}

fn draw_input(f: &mut Frame, session: &QuizSession, area: ratatui::layout::Rect) {
    let content = if session.input_buffer.is_empty() {
        Text::from(Span::styled(
            format!("[{}]", session.mode.input_hint()),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Text::from(session.input_buffer.as_str())
    };

    let input = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Your Answer (Enter to submit)"),
    );
    f.render_widget(input, area);

    let cursor_x = area.x + 1 + cursor_column(&session.input_buffer, session.cursor_position) as u16;
    f.set_cursor_position((cursor_x, area.y + 1));
}

fn draw_reveal(f: &mut Frame, session: &QuizSession, area: ratatui::layout::Rect) {
    let mut text = Text::default();

    let verdict = if session.last_result == Some(true) {
        Span::styled(
            "Correct!",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            "Incorrect!",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };
    text.push_line(Line::from(vec![
        verdict,
        Span::from(format!(" The answer is: {}", session.expected_answer())),
    ]));

    if !session.input_buffer.trim().is_empty() {
        text.push_line(Line::from(""));
        text.push_line(Line::from(vec![
            Span::styled(
                "Your answer: ",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::from(session.input_buffer.trim().to_string()),
        ]));
    }

    if let Some(record) = &session.current_question {
        text.push_line(Line::from(""));
        text.push_line(Line::from(vec![
            Span::styled(
                format!("{}: ", record.label()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::from(record.title.as_str()),
        ]));
        text.push_line(Line::from(record.description.as_str()));
        text.push_line(Line::from(vec![
            Span::styled("Keywords: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(record.keywords.join(", ")),
        ]));
        text.push_line(Line::from(vec![
            Span::styled("Category: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::from(record.category.as_str()),
        ]));
    }

    let reveal = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Answer"));
    f.render_widget(reveal, area);
}

pub fn draw_quit_confirmation(f: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(5)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = Paragraph::new("Quit to Menu")
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let message = Paragraph::new("Abandon this session and return to the menu?")
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, chunks[1]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "y",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Yes (Return to Menu)  "),
        Span::styled(
            "n",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::from(" No (Continue Quiz)  "),
        Span::styled(
            "Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Exit App"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[2]);
}
