//! List view structs for the page read model

use crate::listing::domain::ViewKind;
use serde::Serialize;

/// Label of the static contact affordance on each user card
pub const CONTACT_LABEL: &str = "Contact Now";

/// View representation of the mounted list view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListViewModel {
    pub kind: ViewKind,
    pub heading: String,
    pub body: ListBody,
}

/// What the view shows: exactly one of spinner, list or failure message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum ListBody {
    Loading,
    Users { items: Vec<UserCard> },
    Posts { items: Vec<PostCard> },
    Failed { message: String },
}

impl ListBody {
    /// Number of item blocks rendered
    pub fn item_count(&self) -> usize {
        match self {
            ListBody::Users { items } => items.len(),
            ListBody::Posts { items } => items.len(),
            ListBody::Loading | ListBody::Failed { .. } => 0,
        }
    }
}

/// One user block: avatar, name, description and the contact button
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserCard {
    pub key: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub contact_label: String,
}

/// One post block: title and body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostCard {
    pub key: String,
    pub title: String,
    pub body: String,
}
