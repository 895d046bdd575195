use libro_core::{guess_letter, new_round};
use libro_types::{BookCandidate, RoundState, Title};

pub fn create_candidate(id: u64, title: &str) -> BookCandidate {
    BookCandidate {
        id,
        title: title.to_string(),
        thumbnail_url: "https://example.com/cover.jpg".to_string(),
    }
}

pub fn create_round(title: &str) -> RoundState {
    new_round(Title::new(title).expect("test title must be playable"))
}

/// Applies a sequence of guesses and returns the final state.
pub fn play(mut state: RoundState, letters: &str) -> RoundState {
    for letter in letters.chars() {
        state = guess_letter(&state, letter);
    }
    state
}
