mod common;

use common::*;
use libro_core::{guess_letter, render, select_title};
use libro_types::{EngineError, Outcome};

#[test]
fn test_full_correct_sequence_wins() {
    // title="EL LIBRO": E, L, I, B, R, O covers every letter.
    let state = play(create_round("EL LIBRO"), "ELIBRO");
    assert_eq!(state.outcome, Outcome::Won);
    assert_eq!(state.wrong_count, 0);
    assert_eq!(render(&state), "EL LIBRO");
}

#[test]
fn test_five_wrong_guesses_lose() {
    let state = play(create_round("CAT"), "ZXQWV");
    assert_eq!(state.outcome, Outcome::Lost);
    assert_eq!(state.wrong_count, 5);

    // A sixth guess is a no-op.
    let after = guess_letter(&state, 'M');
    assert_eq!(after.guesses, state.guesses);
    assert_eq!(after.wrong_count, 5);
}

#[test]
fn test_mixed_sequence_reveals_progressively() {
    let state = play(create_round("EL LIBRO"), "EZL");
    assert_eq!(state.outcome, Outcome::InProgress);
    assert_eq!(state.wrong_count, 1);
    assert_eq!(render(&state), "EL L____");
}

#[test]
fn test_render_never_leaks_unguessed_letters() {
    let state = play(create_round("EL LIBRO"), "EL");
    let rendered = render(&state);
    for (position, c) in rendered.chars().enumerate() {
        let original = state.title.chars().nth(position).unwrap();
        if c != '_' {
            assert!(
                original == ' ' || state.guesses.contains(&original),
                "revealed {original:?} without a guess"
            );
        }
    }
}

#[test]
fn test_round_start_from_selected_pool() {
    let pool = vec![
        create_candidate(1, "La Celestina"),
        create_candidate(2, "Don Quijote"),
        create_candidate(3, "Niebla"),
    ];
    for _ in 0..20 {
        let title = select_title(&pool).unwrap();
        let state = create_round(title.as_str());
        assert!(title.len() <= 30);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(state.wrong_count, 0);
        assert!(state.guesses.is_empty());
    }
}

#[test]
fn test_select_title_rejects_oversized_pool() {
    let pool = vec![create_candidate(
        1,
        "Historia verdadera de la conquista de la Nueva Espana",
    )];
    assert_eq!(select_title(&pool), Err(EngineError::EmptyPool));
}
