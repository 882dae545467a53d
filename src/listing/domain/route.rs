use super::view_kind::ViewKind;

/// One entry of the route table.
///
/// Redirects match the exact path; mounts match their prefix on a
/// segment boundary, so `/users/7` activates `/users` but `/usersx` does not.
/// Both comparisons ignore ASCII case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteRule {
    Redirect { from: String, to: String },
    Mount { prefix: String, view: ViewKind },
}

impl RouteRule {
    pub fn redirect(from: impl Into<String>, to: impl Into<String>) -> Self {
        RouteRule::Redirect {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn mount(view: ViewKind) -> Self {
        RouteRule::Mount {
            prefix: view.path().to_string(),
            view,
        }
    }

    /// Whether this rule applies to an already normalised path
    pub fn matches(&self, path: &str) -> bool {
        match self {
            RouteRule::Redirect { from, .. } => path.eq_ignore_ascii_case(from),
            RouteRule::Mount { prefix, .. } => matches_prefix(path, prefix),
        }
    }
}

fn matches_prefix(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return true;
    }
    if path.len() < prefix.len() || !path.is_char_boundary(prefix.len()) {
        return false;
    }
    let (head, rest) = path.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix) && (rest.is_empty() || rest.starts_with('/'))
}

/// Ordered list of route rules; the first matching rule wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    rules: Vec<RouteRule>,
}

impl RouteTable {
    pub fn new(rules: Vec<RouteRule>) -> Self {
        Self { rules }
    }

    /// Root redirects to users; `/users` and `/posts` mount their views.
    pub fn standard() -> Self {
        Self::new(vec![
            RouteRule::redirect("/", ViewKind::Users.path()),
            RouteRule::mount(ViewKind::Users),
            RouteRule::mount(ViewKind::Posts),
        ])
    }

    pub fn rules(&self) -> &[RouteRule] {
        &self.rules
    }

    pub fn first_match(&self, path: &str) -> Option<&RouteRule> {
        self.rules.iter().find(|rule| rule.matches(path))
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::standard()
    }
}
