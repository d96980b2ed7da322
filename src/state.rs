use std::sync::Arc;

use tokio::sync::RwLock;

use crate::browser::{Action, BrowserState};
use crate::catalog::RecipeCatalog;
use crate::view::PageView;

/// A browser snapshot tagged with the number of actions applied so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Revision {
    pub version: u64,
    pub state: BrowserState,
}

/// Application state shared across handlers.
///
/// The revision is only ever replaced whole, under the write lock, so
/// versions are handed out in the order actions are applied.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<RecipeCatalog>,
    session: Arc<RwLock<Revision>>,
}

impl AppState {
    pub fn new(catalog: RecipeCatalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            session: Arc::new(RwLock::new(Revision::default())),
        }
    }

    /// Current revision.
    pub async fn revision(&self) -> Revision {
        self.session.read().await.clone()
    }

    /// Current snapshot.
    pub async fn snapshot(&self) -> BrowserState {
        self.revision().await.state
    }

    /// Applies `action` and returns the resulting revision.
    pub async fn dispatch(&self, action: Action) -> Revision {
        let mut session = self.session.write().await;
        let next = Revision {
            version: session.version + 1,
            state: session.state.apply(action.clone()),
        };
        tracing::info!(?action, version = next.version, "Applied action");
        *session = next.clone();
        next
    }

    pub async fn page(&self) -> PageView {
        let revision = self.revision().await;
        PageView::build(&self.catalog, &revision.state, revision.version)
    }
}
