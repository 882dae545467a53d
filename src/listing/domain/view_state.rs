use crate::shared::error::ShellError;

/// Loading state of one mounted list view.
///
/// A view starts in `Loading` and leaves it exactly once, either to
/// `Loaded` with the response items or to `Failed` with a reason. Both
/// are terminal for the lifetime of the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Loaded(Vec<T>),
    Failed(String),
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        ViewState::Loading
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, ViewState::Failed(_))
    }

    /// Items held by the view; empty unless loaded
    pub fn items(&self) -> &[T] {
        match self {
            ViewState::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            ViewState::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// Stores the response items and leaves the loading state
    pub fn load(&mut self, items: Vec<T>) -> Result<(), ShellError> {
        self.ensure_loading("load")?;
        *self = ViewState::Loaded(items);
        Ok(())
    }

    /// Records a failed request and leaves the loading state
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), ShellError> {
        self.ensure_loading("fail")?;
        *self = ViewState::Failed(reason.into());
        Ok(())
    }

    fn ensure_loading(&self, action: &'static str) -> Result<(), ShellError> {
        match self {
            ViewState::Loading => Ok(()),
            ViewState::Loaded(_) => Err(ShellError::InvalidTransition {
                action,
                state: "loaded",
            }),
            ViewState::Failed(_) => Err(ShellError::InvalidTransition {
                action,
                state: "failed",
            }),
        }
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}
