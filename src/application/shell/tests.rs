use super::*;
use crate::application::read_models::ListBody;
use crate::listing::domain::{Post, User};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// Mock implementations for testing
struct StaticUsers {
    users: Vec<User>,
    calls: AtomicUsize,
}

impl StaticUsers {
    fn with_count(count: i32) -> Self {
        Self {
            users: (1..=count)
                .map(|i| User::new(i, format!("user {}", i), "desc", "http://x/a.png"))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for StaticUsers {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.users.clone())
    }
}

struct StaticPosts {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl StaticPosts {
    fn with_count(count: i32) -> Self {
        Self {
            posts: (1..=count)
                .map(|i| Post::new(i, format!("post {}", i), "body"))
                .collect(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PostRepository for StaticPosts {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

struct FailingUsers;

#[async_trait]
impl UserRepository for FailingUsers {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        anyhow::bail!("connection refused")
    }
}

struct NeverRespondingUsers;

#[async_trait]
impl UserRepository for NeverRespondingUsers {
    async fn fetch_users(&self) -> Result<Vec<User>> {
        futures::future::pending::<()>().await;
        Ok(vec![])
    }
}

#[derive(Clone, Default)]
struct RecordingReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

impl ProgressReporter for RecordingReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
    fn report_loading(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Loading: {}", message));
    }
    fn report_error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
    fn report_completion(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Completed: {}", message));
    }
}

/// Renders a one-line summary of the page so frames are easy to compare
struct SummaryRenderer;

impl PageRenderer for SummaryRenderer {
    fn render(&self, page: &PageReadModel) -> Result<String> {
        let body = match page.view.as_ref().map(|v| &v.body) {
            None => "none".to_string(),
            Some(ListBody::Loading) => "loading".to_string(),
            Some(ListBody::Users { items }) => format!("users:{}", items.len()),
            Some(ListBody::Posts { items }) => format!("posts:{}", items.len()),
            Some(ListBody::Failed { .. }) => "failed".to_string(),
        };
        Ok(format!("{} {}", page.location, body))
    }
}

#[derive(Clone, Default)]
struct CapturingPresenter {
    frames: Arc<Mutex<Vec<String>>>,
}

impl CapturingPresenter {
    fn frames(&self) -> Vec<String> {
        self.frames.lock().unwrap().clone()
    }
}

impl OutputPresenter for CapturingPresenter {
    fn present(&self, content: &str) -> Result<()> {
        self.frames.lock().unwrap().push(content.to_string());
        Ok(())
    }
}

fn live_settings() -> ShellSettings {
    ShellSettings {
        live: true,
        ..ShellSettings::default()
    }
}

fn shell_with<U, P>(
    users: Arc<U>,
    posts: Arc<P>,
    settings: ShellSettings,
) -> (Shell<U, P, RecordingReporter>, CapturingPresenter, RecordingReporter)
where
    U: UserRepository + 'static,
    P: PostRepository + 'static,
{
    let presenter = CapturingPresenter::default();
    let reporter = RecordingReporter::default();
    let shell = Shell::new(
        users,
        posts,
        reporter.clone(),
        Box::new(SummaryRenderer),
        Box::new(presenter.clone()),
        settings,
    );
    (shell, presenter, reporter)
}

#[tokio::test]
async fn test_root_redirects_and_loads_users() {
    let users = Arc::new(StaticUsers::with_count(3));
    let posts = Arc::new(StaticPosts::with_count(3));
    let (mut shell, presenter, _) =
        shell_with(Arc::clone(&users), Arc::clone(&posts), live_settings());

    shell.navigate("/").unwrap();

    assert_eq!(shell.location(), "/users");
    assert!(shell.active_view().unwrap().is_loading());
    assert_eq!(shell.pending_requests(), 1);
    assert_eq!(shell.last_frame(), Some("/users loading"));

    shell.settle().await.unwrap();

    assert_eq!(shell.pending_requests(), 0);
    assert_eq!(shell.active_view().unwrap().item_count(), 3);
    assert_eq!(users.calls(), 1);
    assert_eq!(posts.calls(), 0);
    assert_eq!(
        presenter.frames(),
        vec!["/users loading".to_string(), "/users users:3".to_string()]
    );
}

#[tokio::test]
async fn test_loading_page_shows_spinner_only() {
    let (mut shell, _, _) = shell_with(
        Arc::new(StaticUsers::with_count(2)),
        Arc::new(StaticPosts::with_count(2)),
        ShellSettings::default(),
    );

    shell.navigate("/users").unwrap();
    let loading = shell.page();
    assert!(loading.is_loading());
    assert_eq!(loading.view.as_ref().unwrap().body.item_count(), 0);

    shell.settle().await.unwrap();
    let loaded = shell.page();
    assert!(!loaded.is_loading());
    assert_eq!(loaded.view.unwrap().body.item_count(), 2);
}

#[tokio::test]
async fn test_posts_are_limited_to_fifteen() {
    let (mut shell, _, _) = shell_with(
        Arc::new(StaticUsers::with_count(1)),
        Arc::new(StaticPosts::with_count(100)),
        ShellSettings::default(),
    );

    shell.navigate("/posts").unwrap();
    shell.settle().await.unwrap();

    match shell.page().view.unwrap().body {
        ListBody::Posts { items } => {
            assert_eq!(items.len(), 15);
            assert_eq!(items[0].title, "post 1");
            assert_eq!(items[14].title, "post 15");
        }
        other => panic!("expected posts, got {:?}", other),
    }
}

#[tokio::test]
async fn test_short_posts_list_is_rendered_whole() {
    let (mut shell, _, _) = shell_with(
        Arc::new(StaticUsers::with_count(1)),
        Arc::new(StaticPosts::with_count(4)),
        ShellSettings::default(),
    );

    shell.navigate("/posts").unwrap();
    shell.settle().await.unwrap();

    assert_eq!(shell.last_frame(), Some("/posts posts:4"));
}

#[tokio::test]
async fn test_custom_post_limit() {
    let settings = ShellSettings {
        post_limit: ListLimit::at_most(5).unwrap(),
        ..ShellSettings::default()
    };
    let (mut shell, _, _) = shell_with(
        Arc::new(StaticUsers::with_count(1)),
        Arc::new(StaticPosts::with_count(20)),
        settings,
    );

    shell.navigate("/posts").unwrap();
    shell.settle().await.unwrap();

    assert_eq!(shell.last_frame(), Some("/posts posts:5"));
}

#[tokio::test]
async fn test_navigating_back_remounts_and_refetches() {
    let users = Arc::new(StaticUsers::with_count(2));
    let posts = Arc::new(StaticPosts::with_count(2));
    let (mut shell, _, _) =
        shell_with(Arc::clone(&users), Arc::clone(&posts), ShellSettings::default());

    shell.navigate("/users").unwrap();
    shell.settle().await.unwrap();
    let first_mount = shell.active_view().unwrap().mount_id();

    shell.navigate("/posts").unwrap();
    shell.settle().await.unwrap();

    shell.navigate("/users").unwrap();
    let remounted = shell.active_view().unwrap();
    assert!(remounted.is_loading());
    assert_ne!(remounted.mount_id(), first_mount);

    shell.settle().await.unwrap();
    assert_eq!(users.calls(), 2);
    assert_eq!(posts.calls(), 1);
    assert_eq!(shell.stats().requests_issued, 3);
}

#[tokio::test]
async fn test_response_for_unmounted_view_is_discarded() {
    let (mut shell, presenter, _) = shell_with(
        Arc::new(StaticUsers::with_count(2)),
        Arc::new(StaticPosts::with_count(3)),
        live_settings(),
    );

    shell.navigate("/users").unwrap();
    shell.navigate("/posts").unwrap();
    shell.settle().await.unwrap();

    assert_eq!(shell.stats().stale_responses, 1);
    assert_eq!(shell.active_view().unwrap().kind(), ViewKind::Posts);
    assert_eq!(shell.last_frame(), Some("/posts posts:3"));
    assert!(!presenter.frames().iter().any(|f| f.contains("users:")));
}

#[tokio::test]
async fn test_same_view_navigation_keeps_mount() {
    let users = Arc::new(StaticUsers::with_count(2));
    let (mut shell, _, _) = shell_with(
        Arc::clone(&users),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    shell.navigate("/users").unwrap();
    shell.settle().await.unwrap();
    let mount = shell.active_view().unwrap().mount_id();

    shell.navigate("/users/2").unwrap();

    assert_eq!(shell.location(), "/users/2");
    assert_eq!(shell.active_view().unwrap().mount_id(), mount);
    assert_eq!(shell.pending_requests(), 0);
    assert_eq!(users.calls(), 1);
    assert_eq!(shell.last_frame(), Some("/users/2 users:2"));
}

#[tokio::test]
async fn test_unmatched_path_unmounts_view() {
    let (mut shell, _, _) = shell_with(
        Arc::new(StaticUsers::with_count(2)),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    shell.navigate("/users").unwrap();
    shell.settle().await.unwrap();
    shell.navigate("/about").unwrap();

    assert!(shell.active_view().is_none());
    assert_eq!(shell.last_frame(), Some("/about none"));
    assert_eq!(shell.page().nav.len(), 2);
}

#[tokio::test]
async fn test_failed_request_reaches_failed_state() {
    let (mut shell, _, reporter) = shell_with(
        Arc::new(FailingUsers),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    shell.navigate("/users").unwrap();
    shell.settle().await.unwrap();

    let view = shell.active_view().unwrap();
    assert_eq!(view.failure(), Some("connection refused"));
    assert!(shell.page().is_failed());
    assert_eq!(shell.last_frame(), Some("/users failed"));
    assert!(reporter
        .messages()
        .iter()
        .any(|m| m.starts_with("Error:") && m.contains("connection refused")));
}

#[tokio::test]
async fn test_reporter_sees_loading_then_completion() {
    let (mut shell, _, reporter) = shell_with(
        Arc::new(StaticUsers::with_count(4)),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    shell.navigate("/users").unwrap();
    shell.settle().await.unwrap();

    assert_eq!(
        reporter.messages(),
        vec![
            "Loading: Loading users...".to_string(),
            "Completed: ✅ Loaded 4 users".to_string(),
        ]
    );
}

#[tokio::test]
async fn test_reporter_announces_redirect_and_unmatched_path() {
    let (mut shell, _, reporter) = shell_with(
        Arc::new(StaticUsers::with_count(1)),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    shell.navigate("/").unwrap();
    shell.settle().await.unwrap();
    shell.navigate("/about").unwrap();

    let messages = reporter.messages();
    assert_eq!(messages.first().map(String::as_str), Some("↪ Redirected / to /users"));
    assert_eq!(messages.last().map(String::as_str), Some("⚠️  No view matches /about"));
}

#[tokio::test]
async fn test_final_mode_presents_only_last_frame() {
    let (mut shell, presenter, _) = shell_with(
        Arc::new(StaticUsers::with_count(1)),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    shell.navigate("/posts").unwrap();
    shell.settle().await.unwrap();
    assert!(presenter.frames().is_empty());
    assert_eq!(shell.stats().frames_rendered, 2);

    shell.finish().unwrap();
    assert_eq!(presenter.frames(), vec!["/posts posts:1".to_string()]);
}

#[tokio::test]
async fn test_run_processes_commands_and_settles_on_close() {
    let posts = Arc::new(StaticPosts::with_count(6));
    let (mut shell, _, _) = shell_with(
        Arc::new(StaticUsers::with_count(1)),
        Arc::clone(&posts),
        ShellSettings::default(),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ShellCommand::Navigate("/posts".to_string())).unwrap();
    drop(tx);

    shell.run(rx).await.unwrap();

    assert_eq!(shell.pending_requests(), 0);
    assert_eq!(shell.last_frame(), Some("/posts posts:6"));
    assert_eq!(posts.calls(), 1);
}

#[tokio::test]
async fn test_run_quit_stops_without_waiting() {
    let (mut shell, _, _) = shell_with(
        Arc::new(NeverRespondingUsers),
        Arc::new(StaticPosts::with_count(1)),
        ShellSettings::default(),
    );

    let (tx, rx) = mpsc::unbounded_channel();
    tx.send(ShellCommand::Navigate("/".to_string())).unwrap();
    tx.send(ShellCommand::Quit).unwrap();

    shell.run(rx).await.unwrap();

    assert!(shell.active_view().unwrap().is_loading());
    assert_eq!(shell.last_frame(), Some("/users loading"));
}
