use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::catalog::{CatalogError, CatalogSource};
use crate::identity::IdentityProvider;
use libro_core::{guess_letter, new_round, render, select_candidate_with};
use libro_persistence::ResultStore;
use libro_types::{
    BookCandidate, EngineError, MAX_ATTEMPTS, Outcome, RoundState, SessionView, UserAggregate,
    UserId,
};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("no active round")]
    NoActiveRound,
}

struct ActiveRound {
    state: RoundState,
    book_id: u64,
    thumbnail_url: String,
    /// Set when the terminal transition has fired its outcome write, so a
    /// round never persists twice.
    recorded: bool,
}

#[derive(Default)]
struct SessionState {
    /// Bumped on every round start; a catalog fetch that finishes under an
    /// older generation is discarded instead of clobbering the new round.
    generation: u64,
    user: Option<UserId>,
    /// Local tally shown on screen. Mirrors the store when signed in, but
    /// advances on every finished round regardless of persistence.
    aggregate: UserAggregate,
    candidates: Vec<BookCandidate>,
    round: Option<ActiveRound>,
}

/// Drives one player's session: identity resolution, round lifecycle and
/// best-effort result persistence. Network calls suspend without holding
/// the session lock.
pub struct SessionController {
    catalog: Arc<dyn CatalogSource>,
    identity: Arc<dyn IdentityProvider>,
    results: ResultStore,
    state: RwLock<SessionState>,
}

impl SessionController {
    pub fn new(
        catalog: Arc<dyn CatalogSource>,
        identity: Arc<dyn IdentityProvider>,
        results: ResultStore,
    ) -> Self {
        Self {
            catalog,
            identity,
            results,
            state: RwLock::new(SessionState::default()),
        }
    }

    /// Resolves the user, loads their tally and starts the first round.
    /// Identity settles before any store traffic is issued.
    pub async fn start(&self) -> Result<SessionView, SessionError> {
        self.refresh_identity().await;
        self.begin_round().await
    }

    /// Discards the current round and starts a fresh one. The win/loss
    /// tally carries across restarts within the session.
    pub async fn restart(&self) -> Result<SessionView, SessionError> {
        self.begin_round().await
    }

    /// Re-resolves the signed-in user. A repeat report of the same id
    /// leaves the session untouched; an actual change reloads the tally
    /// (or zeroes it for guest mode).
    pub async fn refresh_identity(&self) {
        let user = self.identity.resolve().await;
        {
            let state = self.state.read().await;
            if state.user == user {
                return;
            }
        }

        let aggregate = match &user {
            Some(user_id) => match self.results.load_aggregate(user_id).await {
                Ok(aggregate) => aggregate,
                Err(e) => {
                    // Best-effort bookkeeping: play on with a zero tally.
                    warn!(user = %user_id, "failed to load aggregate, starting at zero: {e}");
                    UserAggregate::default()
                }
            },
            None => {
                info!("no signed-in user, persistence disabled for this session");
                UserAggregate::default()
            }
        };

        let mut state = self.state.write().await;
        state.user = user;
        state.aggregate = aggregate;
    }

    /// Applies one letter guess. When the guess finishes the round, the
    /// outcome is written exactly once; a write failure is logged and the
    /// on-screen result stands.
    pub async fn guess(&self, letter: char) -> Result<SessionView, SessionError> {
        let (view, completion) = {
            let mut state = self.state.write().await;
            let before = state.aggregate;
            let user = state.user.clone();

            let Some(round) = state.round.as_mut() else {
                return Err(SessionError::NoActiveRound);
            };

            let was_in_progress = round.state.outcome == Outcome::InProgress;
            round.state = guess_letter(&round.state, letter);

            let finished =
                was_in_progress && round.state.outcome.is_terminal() && !round.recorded;
            let mut completion = None;
            if finished {
                round.recorded = true;
                let correct = round.state.outcome == Outcome::Won;
                completion = user.map(|user_id| (user_id, round.state.title.clone(), correct));
                state.aggregate = before.record(correct);
            }

            let view = state
                .round
                .as_ref()
                .map(|round| Self::make_view(round, state.aggregate))
                .ok_or(SessionError::NoActiveRound)?;
            (view, completion.map(|c| (c, before)))
        };

        if let Some(((user_id, title, correct), before)) = completion {
            match self
                .results
                .record_outcome(&user_id, &title, correct, before)
                .await
            {
                Ok(after) => self.state.write().await.aggregate = after,
                Err(e) => warn!(user = %user_id, "failed to persist round outcome: {e}"),
            }
        }

        Ok(view)
    }

    /// Current snapshot for the presentation layer, if a round is active.
    pub async fn view(&self) -> Option<SessionView> {
        let state = self.state.read().await;
        state
            .round
            .as_ref()
            .map(|round| Self::make_view(round, state.aggregate))
    }

    pub async fn aggregate(&self) -> UserAggregate {
        self.state.read().await.aggregate
    }

    /// Last catalog page fetched for this session, for a browse screen.
    pub async fn catalog_page(&self) -> Vec<BookCandidate> {
        self.state.read().await.candidates.clone()
    }

    async fn begin_round(&self) -> Result<SessionView, SessionError> {
        let generation = {
            let mut state = self.state.write().await;
            state.generation += 1;
            state.round = None;
            state.generation
        };

        // Suspends without the lock; a concurrent restart may supersede us.
        let candidates = self.catalog.fetch_candidates().await?;

        let (title, book_id, thumbnail_url) = {
            let mut rng = rand::thread_rng();
            let (title, book) = select_candidate_with(&candidates, &mut rng)?;
            (title, book.id, book.thumbnail_url.clone())
        };

        let mut state = self.state.write().await;
        if state.generation != generation {
            info!(
                stale = generation,
                current = state.generation,
                "discarding catalog fetch from a discarded round"
            );
            let round = state.round.as_ref().ok_or(SessionError::NoActiveRound)?;
            return Ok(Self::make_view(round, state.aggregate));
        }

        let round = ActiveRound {
            state: new_round(title),
            book_id,
            thumbnail_url,
            recorded: false,
        };
        info!(round = %round.state.id, book_id, "round started");

        let view = Self::make_view(&round, state.aggregate);
        state.candidates = candidates;
        state.round = Some(round);
        Ok(view)
    }

    fn make_view(round: &ActiveRound, aggregate: UserAggregate) -> SessionView {
        SessionView {
            rendered: render(&round.state),
            wrong_count: round.state.wrong_count,
            max_attempts: MAX_ATTEMPTS,
            outcome: round.state.outcome,
            wins: aggregate.wins,
            losses: aggregate.losses,
            book_id: round.book_id,
            thumbnail_url: round.thumbnail_url.clone(),
        }
    }
}
