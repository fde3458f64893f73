use crate::logger;
use crate::models::{GameMode, QuizSession, StandardRecord, ALL_CATEGORIES};
use rand::Rng;

impl QuizSession {
    /// Start a fresh session: filter the catalog by category, zero the
    /// counters and draw the first question. A category that matches
    /// nothing yields an empty pool and a session that is already over;
    /// that is a normal state, not an error.
    pub fn new(
        catalog: &[StandardRecord],
        mode: GameMode,
        category: &str,
        rng: &mut impl Rng,
    ) -> Self {
        let pool: Vec<StandardRecord> = if category == ALL_CATEGORIES {
            catalog.to_vec()
        } else {
            catalog
                .iter()
                .filter(|r| r.category == category)
                .cloned()
                .collect()
        };

        logger::log(&format!(
            "New session: mode '{}', category '{}', {} standards in pool",
            mode.label(),
            category,
            pool.len()
        ));

        let mut session = QuizSession {
            mode,
            category: category.to_string(),
            pool,
            current_question: None,
            showing_answer: false,
            last_result: None,
            score: 0,
            answered: 0,
            input_buffer: String::new(),
            cursor_position: 0,
        };
        session.draw_next(rng);
        session
    }

    /// Draw a uniformly random standard from the pool, without replacement.
    /// An empty pool ends the session by leaving `current_question` absent.
    pub fn draw_next(&mut self, rng: &mut impl Rng) {
        self.input_buffer.clear();
        self.cursor_position = 0;
        self.showing_answer = false;
        self.last_result = None;

        if self.pool.is_empty() {
            if self.current_question.take().is_some() {
                logger::log("Pool exhausted, session over");
            }
            return;
        }

        let index = rng.gen_range(0..self.pool.len());
        self.current_question = Some(self.pool.swap_remove(index));
    }

    /// The question text shown to the player, per mode. Empty once the
    /// session is over.
    pub fn question_prompt(&self) -> String {
        let Some(question) = &self.current_question else {
            return String::new();
        };
        match self.mode {
            GameMode::Description => {
                format!("\"{}\": {}", question.title, question.description)
            }
            GameMode::Keywords => question.keywords.join(", "),
            GameMode::Reverse => question.label(),
        }
    }

    /// The answer displayed on reveal, per mode. Empty once the session
    /// is over.
    pub fn expected_answer(&self) -> String {
        let Some(question) = &self.current_question else {
            return String::new();
        };
        match self.mode {
            GameMode::Description | GameMode::Keywords => question.label(),
            GameMode::Reverse => question.title.clone(),
        }
    }

    /// Grade the player's guess against the current question. A blank
    /// guess, an absent question, or an already revealed answer make this
    /// a no-op, so the counters can never double-increment.
    pub fn submit_answer(&mut self, raw: &str) {
        if self.showing_answer {
            return;
        }
        let Some(question) = &self.current_question else {
            return;
        };
        let guess = raw.trim();
        if guess.is_empty() {
            return;
        }

        // Grading always targets the bare number, even in Reverse mode
        // where the displayed expected answer is the title. The original
        // game behaves this way; kept literally rather than guessed at.
        let correct = guess == question.number;

        self.answered += 1;
        if correct {
            self.score += 1;
        }
        self.last_result = Some(correct);
        self.showing_answer = true;

        logger::log(&format!(
            "Graded {}: {} ({}/{})",
            question.label(),
            if correct { "correct" } else { "incorrect" },
            self.score,
            self.answered
        ));
    }

    /// Give up on the current question. Counts as answered, never scores.
    pub fn skip(&mut self) {
        if self.showing_answer || self.current_question.is_none() {
            return;
        }
        self.answered += 1;
        self.last_result = Some(false);
        self.showing_answer = true;
        logger::log("Question skipped");
    }

    /// Move on to the next question once the answer has been revealed.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        if !self.showing_answer {
            return;
        }
        self.draw_next(rng);
    }

    /// Switch game mode. Always a full reset with a fresh pool.
    pub fn change_mode(&mut self, catalog: &[StandardRecord], mode: GameMode, rng: &mut impl Rng) {
        let category = self.category.clone();
        *self = QuizSession::new(catalog, mode, &category, rng);
    }

    /// Switch category filter. Always a full reset with a fresh pool.
    pub fn change_category(
        &mut self,
        catalog: &[StandardRecord],
        category: &str,
        rng: &mut impl Rng,
    ) {
        *self = QuizSession::new(catalog, self.mode, category, rng);
    }

    pub fn remaining(&self) -> usize {
        self.pool.len()
    }

    pub fn is_over(&self) -> bool {
        self.current_question.is_none()
    }
}
