use serde::Serialize;

/// The two list views the shell can mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewKind {
    Users,
    Posts,
}

impl ViewKind {
    /// Canonical path that activates this view
    pub fn path(self) -> &'static str {
        match self {
            ViewKind::Users => "/users",
            ViewKind::Posts => "/posts",
        }
    }

    /// Navigation link label
    pub fn label(self) -> &'static str {
        match self {
            ViewKind::Users => "Users",
            ViewKind::Posts => "Posts",
        }
    }

    /// Section heading shown above the list
    pub fn heading(self) -> &'static str {
        match self {
            ViewKind::Users => "List of users",
            ViewKind::Posts => "List of posts",
        }
    }

    /// Navigation bar order: posts first, then users
    pub fn nav_order() -> [ViewKind; 2] {
        [ViewKind::Posts, ViewKind::Users]
    }
}

impl std::fmt::Display for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Users => write!(f, "users"),
            ViewKind::Posts => write!(f, "posts"),
        }
    }
}
