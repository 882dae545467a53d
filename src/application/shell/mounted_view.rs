use crate::listing::domain::{Post, User, ViewKind, ViewState};
use crate::listing::policies::ListLimit;
use crate::shared::Result;

/// Identity of one mount of a view.
///
/// Every mount gets a fresh id, so a response can be matched against the
/// view that requested it even if the same kind of view was remounted since.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl MountId {
    pub fn first() -> Self {
        MountId(1)
    }

    pub fn next(self) -> Self {
        MountId(self.0 + 1)
    }
}

impl std::fmt::Display for MountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Result of a view's single request, tagged by the kind of list it carries
pub enum FetchOutcome {
    Users(Result<Vec<User>>),
    Posts(Result<Vec<Post>>),
}

impl FetchOutcome {
    pub fn kind(&self) -> ViewKind {
        match self {
            FetchOutcome::Users(_) => ViewKind::Users,
            FetchOutcome::Posts(_) => ViewKind::Posts,
        }
    }
}

/// The list view currently mounted by the shell, owning its state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountedView {
    Users {
        mount: MountId,
        state: ViewState<User>,
    },
    Posts {
        mount: MountId,
        state: ViewState<Post>,
    },
}

impl MountedView {
    /// Creates a freshly mounted view in the loading state
    pub fn new(kind: ViewKind, mount: MountId) -> Self {
        match kind {
            ViewKind::Users => MountedView::Users {
                mount,
                state: ViewState::new(),
            },
            ViewKind::Posts => MountedView::Posts {
                mount,
                state: ViewState::new(),
            },
        }
    }

    pub fn kind(&self) -> ViewKind {
        match self {
            MountedView::Users { .. } => ViewKind::Users,
            MountedView::Posts { .. } => ViewKind::Posts,
        }
    }

    pub fn mount_id(&self) -> MountId {
        match self {
            MountedView::Users { mount, .. } | MountedView::Posts { mount, .. } => *mount,
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            MountedView::Users { state, .. } => state.is_loading(),
            MountedView::Posts { state, .. } => state.is_loading(),
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            MountedView::Users { state, .. } => state.failure(),
            MountedView::Posts { state, .. } => state.failure(),
        }
    }

    pub fn item_count(&self) -> usize {
        match self {
            MountedView::Users { state, .. } => state.items().len(),
            MountedView::Posts { state, .. } => state.items().len(),
        }
    }

    /// Applies the view's response, leaving the loading state.
    ///
    /// Users are stored as delivered; posts go through `post_limit`.
    /// A failed request becomes the failed state with the error chain as
    /// its reason.
    ///
    /// # Errors
    /// Returns an error if the view already left the loading state or the
    /// outcome belongs to the other kind of view.
    pub fn resolve(&mut self, outcome: FetchOutcome, post_limit: ListLimit) -> Result<()> {
        match (self, outcome) {
            (MountedView::Users { state, .. }, FetchOutcome::Users(result)) => match result {
                Ok(users) => state.load(users)?,
                Err(e) => state.fail(format!("{:#}", e))?,
            },
            (MountedView::Posts { state, .. }, FetchOutcome::Posts(result)) => match result {
                Ok(posts) => state.load(post_limit.apply(posts))?,
                Err(e) => state.fail(format!("{:#}", e))?,
            },
            (view, outcome) => anyhow::bail!(
                "{} response delivered to the {} view",
                outcome.kind(),
                view.kind()
            ),
        }
        Ok(())
    }
}
