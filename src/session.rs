use crate::catalog::categories;
use crate::models::{AppState, QuizSession, StandardRecord};
use crate::utils::byte_offset;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::Rng;

/// Translate a key event on the quiz screen into engine operations.
/// Ctrl+letter commands work in both phases; everything else depends on
/// whether the answer is currently revealed.
pub fn handle_quiz_input(
    session: &mut QuizSession,
    key: KeyEvent,
    app_state: &mut AppState,
    catalog: &[StandardRecord],
    rng: &mut impl Rng,
) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('k') => {
                session.skip();
            }
            KeyCode::Char('r') => {
                let category = session.category.clone();
                session.change_category(catalog, &category, rng);
            }
            KeyCode::Char('m') => {
                session.change_mode(catalog, session.mode.next(), rng);
            }
            KeyCode::Char('g') => {
                let cats = categories(catalog);
                let current = cats
                    .iter()
                    .position(|c| *c == session.category)
                    .unwrap_or(0);
                let next = cats[(current + 1) % cats.len()].clone();
                session.change_category(catalog, &next, rng);
            }
            _ => {}
        }
        return;
    }

    if !session.showing_answer {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
            }
            KeyCode::Enter => {
                if !session.input_buffer.trim().is_empty() {
                    let guess = session.input_buffer.clone();
                    session.submit_answer(&guess);
                }
            }
            // cursor_position is a char index; convert to a byte offset
            // before touching the buffer so multi-byte input cannot land
            // inside a char boundary.
            KeyCode::Left => {
                if session.cursor_position > 0 {
                    session.cursor_position -= 1;
                }
                session.cursor_position = session
                    .cursor_position
                    .min(session.input_buffer.chars().count());
            }
            KeyCode::Right => {
                if session.cursor_position < session.input_buffer.chars().count() {
                    session.cursor_position += 1;
                }
            }
            KeyCode::Backspace => {
                if session.cursor_position > 0 {
                    session.cursor_position -= 1;
                    let offset = byte_offset(&session.input_buffer, session.cursor_position);
                    session.input_buffer.remove(offset);
                }
            }
            KeyCode::Char(c) => {
                let offset = byte_offset(&session.input_buffer, session.cursor_position);
                session.input_buffer.insert(offset, c);
                session.cursor_position += 1;
            }
            _ => {}
        }
    } else {
        match key.code {
            KeyCode::Esc => {
                *app_state = AppState::QuizQuitConfirm;
            }
            KeyCode::Enter => {
                session.advance(rng);
                if session.is_over() {
                    *app_state = AppState::Summary;
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GameMode, ALL_CATEGORIES};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn catalog() -> Vec<StandardRecord> {
        vec![
            StandardRecord {
                number: "20".to_string(),
                kind: "ERC".to_string(),
                title: "Token Standard".to_string(),
                description: "Fungible tokens.".to_string(),
                keywords: vec!["token".to_string()],
                category: "Token Standards".to_string(),
            },
            StandardRecord {
                number: "4337".to_string(),
                kind: "EIP".to_string(),
                title: "Account Abstraction".to_string(),
                description: "Entry point contract.".to_string(),
                keywords: vec!["bundler".to_string()],
                category: "Account Abstraction".to_string(),
            },
        ]
    }

    fn plain(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_typing_edits_input_buffer() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        for c in ['7', '2', '1'] {
            handle_quiz_input(&mut session, plain(KeyCode::Char(c)), &mut state, &catalog, &mut rng);
        }
        assert_eq!(session.input_buffer, "721");
        assert_eq!(session.cursor_position, 3);

        handle_quiz_input(&mut session, plain(KeyCode::Backspace), &mut state, &catalog, &mut rng);
        assert_eq!(session.input_buffer, "72");

        handle_quiz_input(&mut session, plain(KeyCode::Left), &mut state, &catalog, &mut rng);
        handle_quiz_input(&mut session, plain(KeyCode::Char('0')), &mut state, &catalog, &mut rng);
        assert_eq!(session.input_buffer, "702");
    }

    #[test]
    fn test_typing_multibyte_chars_edits_without_panicking() {
        // Free-text answers can contain non-ASCII (Reverse mode expects
        // titles), so editing must index by char, not by byte.
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Reverse, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, plain(KeyCode::Char('é')), &mut state, &catalog, &mut rng);
        handle_quiz_input(&mut session, plain(KeyCode::Char('x')), &mut state, &catalog, &mut rng);
        assert_eq!(session.input_buffer, "éx");
        assert_eq!(session.cursor_position, 2);

        handle_quiz_input(&mut session, plain(KeyCode::Backspace), &mut state, &catalog, &mut rng);
        assert_eq!(session.input_buffer, "é");
        assert_eq!(session.cursor_position, 1);

        // Insert before a multi-byte char.
        handle_quiz_input(&mut session, plain(KeyCode::Left), &mut state, &catalog, &mut rng);
        handle_quiz_input(&mut session, plain(KeyCode::Char('ü')), &mut state, &catalog, &mut rng);
        assert_eq!(session.input_buffer, "üé");
        assert_eq!(session.cursor_position, 1);

        // Delete the multi-byte char itself.
        handle_quiz_input(&mut session, plain(KeyCode::Backspace), &mut state, &catalog, &mut rng);
        assert_eq!(session.input_buffer, "é");
        assert_eq!(session.cursor_position, 0);
    }

    #[test]
    fn test_cursor_clamps_to_char_count_with_multibyte_input() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Reverse, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        for c in ['é', 'é'] {
            handle_quiz_input(&mut session, plain(KeyCode::Char(c)), &mut state, &catalog, &mut rng);
        }
        // Two chars, four bytes; the cursor may never pass char count 2.
        for _ in 0..5 {
            handle_quiz_input(&mut session, plain(KeyCode::Right), &mut state, &catalog, &mut rng);
        }
        assert_eq!(session.cursor_position, 2);

        session.cursor_position = 10;
        handle_quiz_input(&mut session, plain(KeyCode::Left), &mut state, &catalog, &mut rng);
        assert_eq!(session.cursor_position, 2);
    }

    #[test]
    fn test_enter_submits_and_reveals() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        let number = session.current_question.as_ref().unwrap().number.clone();
        for c in number.chars() {
            handle_quiz_input(&mut session, plain(KeyCode::Char(c)), &mut state, &catalog, &mut rng);
        }
        handle_quiz_input(&mut session, plain(KeyCode::Enter), &mut state, &catalog, &mut rng);

        assert!(session.showing_answer);
        assert_eq!(session.last_result, Some(true));
        assert_eq!(session.score, 1);
        assert_eq!(state, AppState::Quiz);
    }

    #[test]
    fn test_enter_with_blank_input_does_nothing() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, plain(KeyCode::Char(' ')), &mut state, &catalog, &mut rng);
        handle_quiz_input(&mut session, plain(KeyCode::Enter), &mut state, &catalog, &mut rng);

        assert!(!session.showing_answer);
        assert_eq!(session.answered, 0);
    }

    #[test]
    fn test_ctrl_k_skips() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, ctrl('k'), &mut state, &catalog, &mut rng);

        assert!(session.showing_answer);
        assert_eq!(session.answered, 1);
        assert_eq!(session.score, 0);
    }

    #[test]
    fn test_plain_k_types_instead_of_skipping() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, plain(KeyCode::Char('k')), &mut state, &catalog, &mut rng);

        assert_eq!(session.input_buffer, "k");
        assert!(!session.showing_answer);
    }

    #[test]
    fn test_enter_advances_after_reveal_and_ends_session() {
        let catalog = vec![catalog().remove(0)];
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, ctrl('k'), &mut state, &catalog, &mut rng);
        handle_quiz_input(&mut session, plain(KeyCode::Enter), &mut state, &catalog, &mut rng);

        assert!(session.is_over());
        assert_eq!(state, AppState::Summary);
    }

    #[test]
    fn test_esc_asks_for_quit_confirmation() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, plain(KeyCode::Esc), &mut state, &catalog, &mut rng);
        assert_eq!(state, AppState::QuizQuitConfirm);
    }

    #[test]
    fn test_ctrl_r_restarts_with_same_filters() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session =
            QuizSession::new(&catalog, GameMode::Keywords, "Token Standards", &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, ctrl('k'), &mut state, &catalog, &mut rng);
        assert_eq!(session.answered, 1);

        handle_quiz_input(&mut session, ctrl('r'), &mut state, &catalog, &mut rng);
        assert_eq!(session.answered, 0);
        assert_eq!(session.mode, GameMode::Keywords);
        assert_eq!(session.category, "Token Standards");
        assert!(session.current_question.is_some());
    }

    #[test]
    fn test_ctrl_m_cycles_mode_and_resets() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, ctrl('k'), &mut state, &catalog, &mut rng);
        handle_quiz_input(&mut session, ctrl('m'), &mut state, &catalog, &mut rng);

        assert_eq!(session.mode, GameMode::Keywords);
        assert_eq!(session.answered, 0);
        assert!(!session.showing_answer);
    }

    #[test]
    fn test_ctrl_g_cycles_category() {
        let catalog = catalog();
        let mut rng = StdRng::seed_from_u64(1);
        let mut session = QuizSession::new(&catalog, GameMode::Description, ALL_CATEGORIES, &mut rng);
        let mut state = AppState::Quiz;

        handle_quiz_input(&mut session, ctrl('g'), &mut state, &catalog, &mut rng);
        assert_eq!(session.category, "Token Standards");

        handle_quiz_input(&mut session, ctrl('g'), &mut state, &catalog, &mut rng);
        assert_eq!(session.category, "Account Abstraction");

        handle_quiz_input(&mut session, ctrl('g'), &mut state, &catalog, &mut rng);
        assert_eq!(session.category, ALL_CATEGORIES);
    }
}
