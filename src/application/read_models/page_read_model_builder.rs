//! Builder for constructing PageReadModel from the shell's state

use super::list_view::{ListBody, ListViewModel, PostCard, UserCard, CONTACT_LABEL};
use super::page_read_model::{NavLinkView, PageReadModel};
use crate::application::shell::MountedView;
use crate::listing::domain::{Post, RouteRule, User, ViewKind, ViewState};

/// Builder for constructing PageReadModel from the mounted view
pub struct PageReadModelBuilder;

impl PageReadModelBuilder {
    /// Builds the page for the current location
    ///
    /// # Arguments
    /// * `brand` - Navigation bar brand text
    /// * `location` - Current location after redirects
    /// * `view` - The mounted view, if a route matched
    pub fn build(brand: &str, location: &str, view: Option<&MountedView>) -> PageReadModel {
        PageReadModel {
            brand: brand.to_string(),
            location: location.to_string(),
            nav: Self::build_nav(location),
            view: view.map(Self::build_view),
        }
    }

    fn build_nav(location: &str) -> Vec<NavLinkView> {
        ViewKind::nav_order()
            .into_iter()
            .map(|kind| NavLinkView {
                label: kind.label().to_string(),
                href: kind.path().to_string(),
                active: RouteRule::mount(kind).matches(location),
            })
            .collect()
    }

    fn build_view(view: &MountedView) -> ListViewModel {
        let kind = view.kind();
        let body = match view {
            MountedView::Users { state, .. } => Self::users_body(kind, state),
            MountedView::Posts { state, .. } => Self::posts_body(kind, state),
        };

        ListViewModel {
            kind,
            heading: kind.heading().to_string(),
            body,
        }
    }

    fn users_body(kind: ViewKind, state: &ViewState<User>) -> ListBody {
        match state {
            ViewState::Loading => ListBody::Loading,
            ViewState::Loaded(users) => ListBody::Users {
                items: users.iter().map(Self::user_card).collect(),
            },
            ViewState::Failed(reason) => Self::failed_body(kind, reason),
        }
    }

    fn posts_body(kind: ViewKind, state: &ViewState<Post>) -> ListBody {
        match state {
            ViewState::Loading => ListBody::Loading,
            ViewState::Loaded(posts) => ListBody::Posts {
                items: posts.iter().map(Self::post_card).collect(),
            },
            ViewState::Failed(reason) => Self::failed_body(kind, reason),
        }
    }

    fn failed_body(kind: ViewKind, reason: &str) -> ListBody {
        ListBody::Failed {
            message: format!("Could not load {}: {}", kind, reason),
        }
    }

    fn user_card(user: &User) -> UserCard {
        UserCard {
            key: user.id().to_string(),
            name: user.name().to_string(),
            description: user.description().to_string(),
            image_url: user.image_url().to_string(),
            contact_label: CONTACT_LABEL.to_string(),
        }
    }

    fn post_card(post: &Post) -> PostCard {
        PostCard {
            key: post.id().to_string(),
            title: post.title().to_string(),
            body: post.body().to_string(),
        }
    }
}
