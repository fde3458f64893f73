use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use standards_quiz::{
    catalog::{categories, CATALOG},
    handle_quiz_input, logger,
    models::{AppState, GameMode, QuizSession, StandardRecord},
    ui::{draw_menu, draw_quit_confirmation, draw_quiz, draw_summary},
};
use std::io;

fn main() -> io::Result<()> {
    logger::init();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let catalog: &[StandardRecord] = CATALOG.as_slice();
    let category_tags = categories(catalog);
    let mut rng = rand::thread_rng();

    let mut app_state = AppState::Menu;
    let mut selected_mode_index: usize = 0;
    let mut selected_category_index: usize = 0;
    let mut focused_panel: usize = 0;
    let mut quiz_session: Option<QuizSession> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                selected_mode_index,
                &category_tags,
                selected_category_index,
                focused_panel,
                catalog.len(),
            ),
            AppState::Quiz => {
                if let Some(session) = &quiz_session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &quiz_session {
                    draw_summary(f, session);
                }
            }
        })?;

        if let Event::Key(key) = event::read()? {
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                break;
            }

            match app_state {
                AppState::Menu => match key.code {
                    KeyCode::Char('1') => focused_panel = 0,
                    KeyCode::Char('2') => focused_panel = 1,
                    KeyCode::Tab => focused_panel = (focused_panel + 1) % 2,
                    KeyCode::Up => {
                        if focused_panel == 0 {
                            selected_mode_index = selected_mode_index.saturating_sub(1);
                        } else {
                            selected_category_index = selected_category_index.saturating_sub(1);
                        }
                    }
                    KeyCode::Down => {
                        if focused_panel == 0 {
                            if selected_mode_index < GameMode::ALL.len() - 1 {
                                selected_mode_index += 1;
                            }
                        } else if selected_category_index < category_tags.len() - 1 {
                            selected_category_index += 1;
                        }
                    }
                    KeyCode::Enter => {
                        let session = QuizSession::new(
                            catalog,
                            GameMode::ALL[selected_mode_index],
                            &category_tags[selected_category_index],
                            &mut rng,
                        );
                        app_state = if session.is_over() {
                            AppState::Summary
                        } else {
                            AppState::Quiz
                        };
                        quiz_session = Some(session);
                    }
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    _ => {}
                },
                AppState::Quiz => {
                    if let Some(session) = &mut quiz_session {
                        handle_quiz_input(session, key, &mut app_state, catalog, &mut rng);
                    }
                }
                AppState::QuizQuitConfirm => match key.code {
                    KeyCode::Char('y') => {
                        quiz_session = None;
                        app_state = AppState::Menu;
                    }
                    KeyCode::Char('n') | KeyCode::Esc => {
                        app_state = AppState::Quiz;
                    }
                    _ => {}
                },
                AppState::Summary => match key.code {
                    KeyCode::Char('r') => {
                        if let Some(session) = &mut quiz_session {
                            let category = session.category.clone();
                            session.change_category(catalog, &category, &mut rng);
                            if !session.is_over() {
                                app_state = AppState::Quiz;
                            }
                        }
                    }
                    KeyCode::Char('m') => {
                        quiz_session = None;
                        app_state = AppState::Menu;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                },
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
