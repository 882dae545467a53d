use crate::application::dto::{BrowseRequest, BrowseResponse};
use crate::application::shell::{Shell, ShellCommand, ShellSettings};
use crate::listing::domain::RouteTable;
use crate::ports::outbound::{
    OutputPresenter, PageRenderer, PostRepository, ProgressReporter, UserRepository,
};
use crate::shared::Result;
use std::sync::Arc;
use tokio::sync::mpsc;

/// BrowseListsUseCase - drives the shell through a browsing session
///
/// A session is either scripted (a fixed list of paths) or interactive
/// (paths arriving on a command channel). Infrastructure is injected
/// through generic parameters and boxed renderer/presenter adapters.
///
/// # Type Parameters
/// * `U` - UserRepository implementation
/// * `P` - PostRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct BrowseListsUseCase<U, P, PR> {
    user_repository: Arc<U>,
    post_repository: Arc<P>,
    progress_reporter: PR,
    renderer: Box<dyn PageRenderer>,
    presenter: Box<dyn OutputPresenter>,
}

impl<U, P, PR> BrowseListsUseCase<U, P, PR>
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    PR: ProgressReporter,
{
    /// Creates a new BrowseListsUseCase with injected dependencies
    pub fn new(
        user_repository: U,
        post_repository: P,
        progress_reporter: PR,
        renderer: Box<dyn PageRenderer>,
        presenter: Box<dyn OutputPresenter>,
    ) -> Self {
        Self {
            user_repository: Arc::new(user_repository),
            post_repository: Arc::new(post_repository),
            progress_reporter,
            renderer,
            presenter,
        }
    }

    /// Visits every requested path in order.
    ///
    /// With `settle_each`, each view finishes loading before the next
    /// navigation; otherwise navigations happen back to back and earlier
    /// responses arrive for views that are no longer mounted. The session
    /// always ends with no request in flight.
    pub async fn execute(self, request: BrowseRequest) -> Result<BrowseResponse> {
        let settle_each = request.settle_each;
        let paths = request.paths.clone();
        let mut shell = self.into_shell(&request, request.live);

        for path in &paths {
            shell.navigate(path)?;
            if settle_each {
                shell.settle().await?;
            }
        }
        shell.settle().await?;
        shell.finish()?;

        Ok(BrowseResponse::new(shell.page(), shell.stats()))
    }

    /// Visits the requested paths, then follows commands until `Quit` or
    /// until the channel closes. Every frame is presented as it renders.
    pub async fn execute_interactive(
        self,
        request: BrowseRequest,
        commands: mpsc::UnboundedReceiver<ShellCommand>,
    ) -> Result<BrowseResponse> {
        let paths = request.paths.clone();
        let mut shell = self.into_shell(&request, true);

        for path in &paths {
            shell.navigate(path)?;
        }
        shell.run(commands).await?;

        Ok(BrowseResponse::new(shell.page(), shell.stats()))
    }

    fn into_shell(self, request: &BrowseRequest, live: bool) -> Shell<U, P, PR> {
        let settings = ShellSettings {
            brand: request.brand.clone(),
            post_limit: request.post_limit,
            live,
            routes: RouteTable::standard(),
        };

        Shell::new(
            self.user_repository,
            self.post_repository,
            self.progress_reporter,
            self.renderer,
            self.presenter,
            settings,
        )
    }
}
