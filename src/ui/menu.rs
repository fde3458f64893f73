use crate::models::GameMode;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn draw_panel_header(area: ratatui::layout::Rect, title: &str, focused: bool, f: &mut Frame) {
    let style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let header = Paragraph::new(title)
        .style(style)
        .alignment(Alignment::Left)
        .block(Block::default());

    f.render_widget(header, area);
}

fn panel_border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn selection_style(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

pub fn draw_menu(
    f: &mut Frame,
    selected_mode_index: usize,
    categories: &[String],
    selected_category_index: usize,
    focused_panel: usize,
    catalog_len: usize,
) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Min(1),
            Constraint::Length(4),
        ])
        .split(area);

    let title = Paragraph::new("Ethereum Standards Guessing Game")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    let mode_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[1]);

    let category_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(chunks[2]);

    draw_panel_header(mode_chunks[0], "[1] Game Mode", focused_panel == 0, f);

    let mode_items: Vec<ListItem> = GameMode::ALL
        .iter()
        .enumerate()
        .map(|(i, mode)| {
            ListItem::new(mode.label())
                .style(selection_style(i == selected_mode_index && focused_panel == 0))
        })
        .collect();

    let mode_list = List::new(mode_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(panel_border_style(focused_panel == 0)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(mode_list, mode_chunks[1]);

    draw_panel_header(
        category_chunks[0],
        "[2] Category Filter",
        focused_panel == 1,
        f,
    );

    let category_items: Vec<ListItem> = categories
        .iter()
        .enumerate()
        .map(|(i, category)| {
            ListItem::new(category.as_str())
                .style(selection_style(i == selected_category_index && focused_panel == 1))
        })
        .collect();

    let category_list = List::new(category_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(panel_border_style(focused_panel == 1)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    f.render_widget(category_list, category_chunks[1]);

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[3]);

    let catalog_status = Paragraph::new(vec![
        Line::from(format!("{} standards", catalog_len)),
        Line::from(format!("{} categories", categories.len().saturating_sub(1))),
    ])
    .style(Style::default().fg(Color::Green))
    .alignment(Alignment::Left)
    .block(Block::default().borders(Borders::ALL).title("Catalog"));
    f.render_widget(catalog_status, footer_chunks[0]);

    let help_text = vec![Line::from(vec![
        Span::styled(
            "1/2",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Focus Panel  "),
        Span::styled(
            "↑/↓",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Navigate  "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Start Quiz  "),
        Span::styled(
            "Esc/Ctrl+C",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, footer_chunks[1]);
}
