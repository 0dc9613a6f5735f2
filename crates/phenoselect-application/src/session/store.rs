use phenoselect_core::session::{AppState, BodySystem, Mutation, Term};
use std::sync::Arc;
use tokio::sync::RwLock;

struct StoreInner {
    state: AppState,
    /// Bumped once per committed mutation
    revision: u64,
}

/// Owner of the application state.
///
/// Every change goes through [`SessionStore::commit`], which applies one
/// mutation under the write lock, so mutations never interleave. Clones share
/// the same state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<StoreInner>>,
}

impl SessionStore {
    /// Creates a store holding a brand new session.
    pub fn new() -> Self {
        Self::with_state(AppState::new())
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner { state, revision: 0 })),
        }
    }

    /// Applies `mutation` and returns the revision it produced.
    ///
    /// # Panics
    ///
    /// Panics on `RemoveTermAtIndex` with an out-of-range index.
    pub async fn commit(&self, mutation: Mutation) -> u64 {
        let name = mutation.name();
        let mut inner = self.inner.write().await;
        inner.state.apply(mutation);
        inner.revision += 1;

        tracing::debug!(
            "[SessionStore] {} committed (session={}, revision={})",
            name,
            inner.state.session.session_id(),
            inner.revision
        );
        inner.revision
    }

    /// Runs `f` against a consistent view of the state.
    pub async fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        let inner = self.inner.read().await;
        f(&inner.state)
    }

    /// Like [`SessionStore::read`], also returning the revision the view was taken at.
    pub async fn read_at_revision<R>(&self, f: impl FnOnce(&AppState) -> R) -> (R, u64) {
        let inner = self.inner.read().await;
        (f(&inner.state), inner.revision)
    }

    /// Returns a copy of the whole state.
    pub async fn snapshot(&self) -> AppState {
        self.read(AppState::clone).await
    }

    pub async fn revision(&self) -> u64 {
        self.inner.read().await.revision
    }

    // ============================================================================
    // User actions
    // ============================================================================

    pub async fn add_term(&self, term: Term, filter_enabled: bool) -> u64 {
        self.commit(Mutation::AddTerm {
            term,
            filter_enabled,
        })
        .await
    }

    pub async fn remove_term_at_index(&self, index: usize) -> u64 {
        self.commit(Mutation::RemoveTermAtIndex(index)).await
    }

    pub async fn toggle_system(&self, system: BodySystem) -> u64 {
        self.commit(Mutation::ToggleSystem(system)).await
    }

    pub async fn accept_terms_of_use(&self) -> u64 {
        self.commit(Mutation::AcceptTermsOfUse).await
    }

    pub async fn set_found_all_conditions(&self, value: bool) -> u64 {
        self.commit(Mutation::SetFoundAllConditions(value)).await
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
