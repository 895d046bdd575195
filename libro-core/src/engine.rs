use std::collections::BTreeSet;

use rand::Rng;
use rand::seq::SliceRandom;
use uuid::Uuid;

use libro_types::{
    BookCandidate, EngineError, MAX_ATTEMPTS, Outcome, RoundState, Title, is_alphabet_symbol,
};

/// Longest title considered playable on a phone-sized keyboard layout.
pub const MAX_TITLE_LEN: usize = 30;

/// Parses a candidate into a playable title, or `None` when the title is
/// too long or uses symbols outside the game alphabet.
pub fn playable_title(candidate: &BookCandidate) -> Option<Title> {
    Title::new(&candidate.title)
        .ok()
        .filter(|title| title.len() <= MAX_TITLE_LEN)
}

/// Picks a playable candidate uniformly at random, returning the
/// normalized title alongside the catalog entry it came from.
pub fn select_candidate_with<'a, R: Rng + ?Sized>(
    candidates: &'a [BookCandidate],
    rng: &mut R,
) -> Result<(Title, &'a BookCandidate), EngineError> {
    let pool: Vec<(Title, &BookCandidate)> = candidates
        .iter()
        .filter_map(|candidate| playable_title(candidate).map(|title| (title, candidate)))
        .collect();

    tracing::debug!(
        candidates = candidates.len(),
        playable = pool.len(),
        "selecting round title"
    );

    pool.choose(rng).cloned().ok_or(EngineError::EmptyPool)
}

/// Picks a playable title uniformly at random from `candidates`.
pub fn select_title(candidates: &[BookCandidate]) -> Result<Title, EngineError> {
    select_candidate_with(candidates, &mut rand::thread_rng()).map(|(title, _)| title)
}

/// Starts a fresh round for `title`: no guesses, no wrong attempts.
pub fn new_round(title: Title) -> RoundState {
    RoundState {
        id: Uuid::new_v4(),
        title,
        guesses: BTreeSet::new(),
        wrong_count: 0,
        outcome: Outcome::InProgress,
    }
}

/// Applies one letter guess and returns the resulting state. Pure: the
/// input state is untouched and no side effects occur.
///
/// Repeat letters, guesses after a terminal outcome and symbols outside
/// the alphabet all return the state unchanged rather than erroring;
/// tolerating sloppy input is deliberate.
pub fn guess_letter(state: &RoundState, letter: char) -> RoundState {
    let letter = letter.to_ascii_uppercase();

    if state.outcome.is_terminal()
        || letter == ' '
        || !is_alphabet_symbol(letter)
        || state.guesses.contains(&letter)
    {
        return state.clone();
    }

    let mut next = state.clone();
    next.guesses.insert(letter);
    if !next.title.contains(letter) {
        next.wrong_count += 1;
    }

    // Won is checked first: a correct final guess takes the round even if
    // the wrong-guess budget is already spent.
    if next.title.letters().all(|c| next.guesses.contains(&c)) {
        next.outcome = Outcome::Won;
    } else if next.wrong_count >= MAX_ATTEMPTS {
        next.outcome = Outcome::Lost;
    }

    next
}

/// Masked view of the title: spaces always show, guessed letters show, and
/// a terminal outcome reveals everything. Everything else renders as '_'.
pub fn render(state: &RoundState) -> String {
    let reveal_all = state.outcome.is_terminal();
    state
        .title
        .chars()
        .map(|c| {
            if c == ' ' || reveal_all || state.guesses.contains(&c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}
