//! HTML page renderer
//!
//! Produces a standalone document with the Bootstrap navigation bar and the
//! mounted list view, using the same class names as the browser front-end so
//! the page can be dropped next to its stylesheet.

use crate::application::read_models::{
    ListBody, ListViewModel, NavLinkView, PageReadModel, PostCard, UserCard,
};
use crate::ports::outbound::PageRenderer;
use crate::shared::Result;
use maud::{html, Markup, DOCTYPE};

const BOOTSTRAP_CSS: &str =
    "https://stackpath.bootstrapcdn.com/bootstrap/4.1.3/css/bootstrap.min.css";
const FONT_AWESOME_CSS: &str =
    "https://maxcdn.bootstrapcdn.com/font-awesome/4.7.0/css/font-awesome.min.css";

/// HtmlRenderer adapter rendering pages with maud
pub struct HtmlRenderer;

impl HtmlRenderer {
    pub fn new() -> Self {
        Self
    }

    fn document(page: &PageReadModel) -> Markup {
        html! {
            (DOCTYPE)
            html lang="en" {
                head {
                    meta charset="UTF-8";
                    title { (page.brand) }
                    link rel="stylesheet" href=(BOOTSTRAP_CSS);
                    link rel="stylesheet" href=(FONT_AWESOME_CSS);
                }
                body data-location=(page.location) {
                    div {
                        (Self::navbar(&page.brand, &page.nav))
                        @if let Some(view) = &page.view {
                            (Self::list_view(view))
                        }
                    }
                }
            }
        }
    }

    fn navbar(brand: &str, links: &[NavLinkView]) -> Markup {
        html! {
            nav class="navbar navbar-expand-lg navbar-dark bg-dark" {
                a class="navbar-brand" href="/" { " " (brand) " " }
                div class="collapse navbar-collapse" id="navbarText" {
                    ul class="navbar-nav mr-auto" {
                        @for link in links {
                            li class=(if link.active { "nav-item active" } else { "nav-item" }) {
                                a class="nav-link" href=(link.href) { " " (link.label) " " }
                            }
                        }
                    }
                }
            }
        }
    }

    fn list_view(view: &ListViewModel) -> Markup {
        html! {
            section class="row-section" {
                div class="container" {
                    div class="row" {
                        h2 class="text-center" {
                            span { (view.heading) }
                            "Created with "
                            i class="fa fa-heart" {}
                            " by yemiwebby"
                        }
                    }
                    @match &view.body {
                        ListBody::Loading => {
                            div class="row text-center" {
                                span class="fa fa-spin fa-spinner fa-4x" {}
                            }
                        }
                        ListBody::Users { items } => {
                            div class="row" {
                                @for user in items {
                                    (Self::user_block(user))
                                }
                            }
                        }
                        ListBody::Posts { items } => {
                            div class="row" {
                                @for post in items {
                                    (Self::post_block(post))
                                }
                            }
                        }
                        ListBody::Failed { message } => {
                            div class="row" {
                                div class="col-md-10 offset-md-1 alert alert-danger" role="alert" {
                                    (message)
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    fn user_block(user: &UserCard) -> Markup {
        html! {
            div class="col-md-10 offset-md-1 row-block" data-key=(user.key) {
                ul id="sortable" {
                    li {
                        div class="media" {
                            div class="media-left align-self-center" {
                                img class="rounded-circle" src=(user.image_url);
                            }
                            div class="media-body" {
                                h4 { (user.name) }
                                p { (user.description) }
                            }
                            div class="media-right align-self-center" {
                                a href="#" class="btn btn-default" { (user.contact_label) }
                            }
                        }
                    }
                }
            }
        }
    }

    fn post_block(post: &PostCard) -> Markup {
        html! {
            div class="col-md-10 offset-md-1 row-block" data-key=(post.key) {
                ul id="sortable" {
                    li {
                        div class="media" {
                            div class="media-body" {
                                h4 { (post.title) }
                                p { (post.body) }
                            }
                        }
                    }
                }
            }
        }
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl PageRenderer for HtmlRenderer {
    fn render(&self, page: &PageReadModel) -> Result<String> {
        Ok(Self::document(page).into_string())
    }
}
