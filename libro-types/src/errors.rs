use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// No catalog candidate fits the round constraints. Fatal to round
    /// start; the session surfaces it without retrying.
    #[error("no candidate title qualifies for a round")]
    EmptyPool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TitleError {
    #[error("title is empty")]
    Empty,
    #[error("title contains unsupported character {0:?}")]
    UnsupportedCharacter(char),
}
