use serde::Deserialize;

/// One entry of the standards catalog. Immutable configuration data,
/// deserialized once from the embedded JSON catalog.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StandardRecord {
    pub number: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub category: String,
}

impl StandardRecord {
    /// Display label like "ERC-721".
    pub fn label(&self) -> String {
        format!("{}-{}", self.kind, self.number)
    }
}

/// Sentinel category that selects the whole catalog.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Guess the number from title + description.
    Description,
    /// Guess the number from the keyword list.
    Keywords,
    /// Guess the title from the number.
    Reverse,
}

impl GameMode {
    pub const ALL: [GameMode; 3] = [GameMode::Description, GameMode::Keywords, GameMode::Reverse];

    pub fn label(&self) -> &'static str {
        match self {
            GameMode::Description => "Guess the ERC/EIP number from description",
            GameMode::Keywords => "Guess the ERC/EIP number from keywords",
            GameMode::Reverse => "Guess the title from ERC/EIP number",
        }
    }

    pub fn input_hint(&self) -> &'static str {
        match self {
            GameMode::Reverse => "e.g. Token Standard",
            _ => "e.g. 721",
        }
    }

    /// The next mode in cycling order.
    pub fn next(&self) -> GameMode {
        match self {
            GameMode::Description => GameMode::Keywords,
            GameMode::Keywords => GameMode::Reverse,
            GameMode::Reverse => GameMode::Description,
        }
    }
}

/// All mutable quiz state, owned exclusively by the running session and
/// replaced wholesale on restart or mode/category change.
#[derive(Debug)]
pub struct QuizSession {
    pub mode: GameMode,
    pub category: String,
    /// Records not yet drawn this session.
    pub pool: Vec<StandardRecord>,
    /// Absent once the pool was empty at draw time (session over).
    pub current_question: Option<StandardRecord>,
    pub showing_answer: bool,
    /// Outcome of the last graded/skipped question; meaningful only while
    /// `showing_answer` is true.
    pub last_result: Option<bool>,
    pub score: usize,
    pub answered: usize,
    pub input_buffer: String,
    pub cursor_position: usize,
}

#[derive(Debug, PartialEq)]
pub enum AppState {
    Menu,
    Quiz,
    QuizQuitConfirm,
    Summary,
}
