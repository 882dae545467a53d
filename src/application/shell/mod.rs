//! The shell - router, mounted view and the event loop driving both
//!
//! The shell owns at most one mounted list view. Navigation is synchronous:
//! it resolves the route, swaps the mounted view and renders the new frame
//! right away. The view's request is queued on the shell's own
//! `FuturesUnordered` and only makes progress while the loop is driven
//! (`settle` or `run`), so response handling is serialised with navigation.

mod command;
mod mounted_view;

pub use command::ShellCommand;
pub use mounted_view::{FetchOutcome, MountId, MountedView};

use crate::application::read_models::{PageReadModel, PageReadModelBuilder};
use crate::listing::domain::{RouteTable, ViewKind};
use crate::listing::policies::ListLimit;
use crate::listing::services::RouteMatcher;
use crate::ports::outbound::{
    OutputPresenter, PageRenderer, PostRepository, ProgressReporter, UserRepository,
};
use crate::shared::Result;
use futures::future::BoxFuture;
use futures::stream::{FuturesUnordered, StreamExt};
use std::sync::Arc;
use tokio::sync::mpsc;

/// Default brand shown in the navigation bar
pub const DEFAULT_BRAND: &str = "Symfony React Project";

type PendingFetch = BoxFuture<'static, (MountId, FetchOutcome)>;

/// Settings the shell is constructed with
#[derive(Debug, Clone)]
pub struct ShellSettings {
    pub brand: String,
    pub post_limit: ListLimit,
    /// Present every rendered frame instead of only the last one
    pub live: bool,
    pub routes: RouteTable,
}

impl Default for ShellSettings {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            post_limit: ListLimit::posts_default(),
            live: false,
            routes: RouteTable::standard(),
        }
    }
}

/// Counters describing what the shell did
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShellStats {
    pub frames_rendered: usize,
    pub requests_issued: usize,
    /// Responses that arrived after their view was unmounted
    pub stale_responses: usize,
}

/// Shell - routes paths to list views and drives their requests
///
/// # Type Parameters
/// * `U` - UserRepository implementation
/// * `P` - PostRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct Shell<U, P, PR> {
    users: Arc<U>,
    posts: Arc<P>,
    progress_reporter: PR,
    renderer: Box<dyn PageRenderer>,
    presenter: Box<dyn OutputPresenter>,
    settings: ShellSettings,
    location: String,
    active: Option<MountedView>,
    last_mount: Option<MountId>,
    in_flight: FuturesUnordered<PendingFetch>,
    last_frame: Option<String>,
    stats: ShellStats,
}

impl<U, P, PR> Shell<U, P, PR>
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
    PR: ProgressReporter,
{
    pub fn new(
        users: Arc<U>,
        posts: Arc<P>,
        progress_reporter: PR,
        renderer: Box<dyn PageRenderer>,
        presenter: Box<dyn OutputPresenter>,
        settings: ShellSettings,
    ) -> Self {
        Self {
            users,
            posts,
            progress_reporter,
            renderer,
            presenter,
            settings,
            location: "/".to_string(),
            active: None,
            last_mount: None,
            in_flight: FuturesUnordered::new(),
            last_frame: None,
            stats: ShellStats::default(),
        }
    }

    /// Navigates to a path.
    ///
    /// A path resolving to the view that is already mounted only moves the
    /// location. Any other path unmounts the current view; if a route
    /// matched, the new view is mounted in the loading state and its request
    /// is queued. The resulting frame is rendered before returning.
    pub fn navigate(&mut self, path: &str) -> Result<()> {
        let resolution = RouteMatcher::resolve(&self.settings.routes, path)?;
        if resolution.redirects > 0 {
            tracing::debug!(from = path, to = %resolution.location, "redirected");
            self.progress_reporter
                .report(&format!("↪ Redirected {} to {}", path, resolution.location));
        }
        self.location = resolution.location;

        let current = self.active.as_ref().map(MountedView::kind);
        if resolution.view.is_some() && resolution.view == current {
            tracing::debug!(location = %self.location, "view already mounted");
            return self.render();
        }

        self.unmount();
        match resolution.view {
            Some(kind) => self.mount(kind),
            None => {
                tracing::debug!(location = %self.location, "no route matched");
                self.progress_reporter
                    .report(&format!("⚠️  No view matches {}", self.location));
            }
        }
        self.render()
    }

    /// Drives the loop until no request is in flight
    pub async fn settle(&mut self) -> Result<()> {
        while let Some((mount, outcome)) = self.in_flight.next().await {
            self.apply(mount, outcome)?;
        }
        Ok(())
    }

    /// Runs the event loop over a command channel.
    ///
    /// Commands and responses are handled one at a time in arrival order.
    /// `Quit` stops immediately; a closed channel lets in-flight requests
    /// finish first.
    pub async fn run(&mut self, mut commands: mpsc::UnboundedReceiver<ShellCommand>) -> Result<()> {
        loop {
            tokio::select! {
                command = commands.recv() => match command {
                    Some(ShellCommand::Navigate(path)) => self.navigate(&path)?,
                    Some(ShellCommand::Quit) => break,
                    None => {
                        self.settle().await?;
                        break;
                    }
                },
                Some((mount, outcome)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.apply(mount, outcome)?;
                }
            }
        }
        Ok(())
    }

    /// Presents the last rendered frame when frames are not presented live
    pub fn finish(&self) -> Result<()> {
        if self.settings.live {
            return Ok(());
        }
        if let Some(frame) = &self.last_frame {
            self.presenter.present(frame)?;
        }
        Ok(())
    }

    /// Builds the read model for the current state
    pub fn page(&self) -> PageReadModel {
        PageReadModelBuilder::build(&self.settings.brand, &self.location, self.active.as_ref())
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn active_view(&self) -> Option<&MountedView> {
        self.active.as_ref()
    }

    pub fn pending_requests(&self) -> usize {
        self.in_flight.len()
    }

    pub fn last_frame(&self) -> Option<&str> {
        self.last_frame.as_deref()
    }

    pub fn stats(&self) -> ShellStats {
        self.stats
    }

    fn mount(&mut self, kind: ViewKind) {
        let mount = self.last_mount.map_or_else(MountId::first, MountId::next);
        self.last_mount = Some(mount);
        self.active = Some(MountedView::new(kind, mount));

        let pending = self.request(kind, mount);
        self.in_flight.push(pending);
        self.stats.requests_issued += 1;

        tracing::debug!(view = %kind, %mount, "mounted view");
        self.progress_reporter
            .report_loading(&format!("Loading {}...", kind));
    }

    fn unmount(&mut self) {
        if let Some(view) = self.active.take() {
            tracing::debug!(view = %view.kind(), mount = %view.mount_id(), "unmounted view");
        }
    }

    fn request(&self, kind: ViewKind, mount: MountId) -> PendingFetch {
        match kind {
            ViewKind::Users => {
                let users = Arc::clone(&self.users);
                Box::pin(async move { (mount, FetchOutcome::Users(users.fetch_users().await)) })
            }
            ViewKind::Posts => {
                let posts = Arc::clone(&self.posts);
                Box::pin(async move { (mount, FetchOutcome::Posts(posts.fetch_posts().await)) })
            }
        }
    }

    /// Applies a response to the view that requested it.
    ///
    /// Returns `false` when that view is no longer mounted; the response is
    /// then dropped without touching any state.
    fn apply(&mut self, mount: MountId, outcome: FetchOutcome) -> Result<bool> {
        let post_limit = self.settings.post_limit;
        let Some(view) = self
            .active
            .as_mut()
            .filter(|view| view.mount_id() == mount)
        else {
            self.stats.stale_responses += 1;
            tracing::debug!(%mount, view = %outcome.kind(), "discarding response for unmounted view");
            return Ok(false);
        };

        view.resolve(outcome, post_limit)?;

        let kind = view.kind();
        match view.failure() {
            Some(reason) => {
                tracing::warn!(view = %kind, %mount, reason, "view failed to load");
                self.progress_reporter
                    .report_error(&format!("❌ Failed to load {}: {}", kind, reason));
            }
            None => {
                let count = view.item_count();
                tracing::debug!(view = %kind, %mount, count, "view loaded");
                self.progress_reporter
                    .report_completion(&format!("✅ Loaded {} {}", count, kind));
            }
        }

        self.render()?;
        Ok(true)
    }

    fn render(&mut self) -> Result<()> {
        let page = self.page();
        let frame = self.renderer.render(&page)?;
        if self.settings.live {
            self.presenter.present(&frame)?;
        }
        self.last_frame = Some(frame);
        self.stats.frames_rendered += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
