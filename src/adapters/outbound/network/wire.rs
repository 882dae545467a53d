//! Wire representations of the endpoint payloads
//!
//! Items are taken as they arrive: every field accepts any JSON value, so one
//! odd entry never fails the whole list.

use crate::listing::domain::{ItemId, Post, User};
use serde::Deserialize;
use serde_json::Value;

/// Text form of a wire field
///
/// Absent and `null` become empty, strings are kept verbatim, and any other
/// value (numbers, booleans) uses its JSON text.
fn wire_text(value: Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
    }
}

/// One entry of `GET /api/users`
#[derive(Debug, Deserialize)]
pub(super) struct UserDto {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    name: Option<Value>,
    #[serde(default)]
    description: Option<Value>,
    #[serde(default, rename = "imageURL")]
    image_url: Option<Value>,
}

impl From<UserDto> for User {
    fn from(dto: UserDto) -> Self {
        User::new(
            ItemId::new(wire_text(dto.id)),
            wire_text(dto.name),
            wire_text(dto.description),
            wire_text(dto.image_url),
        )
    }
}

/// One entry of the posts endpoint; other fields (`userId`) are ignored
#[derive(Debug, Deserialize)]
pub(super) struct PostDto {
    #[serde(default)]
    id: Option<Value>,
    #[serde(default)]
    title: Option<Value>,
    #[serde(default)]
    body: Option<Value>,
}

impl From<PostDto> for Post {
    fn from(dto: PostDto) -> Self {
        Post::new(
            ItemId::new(wire_text(dto.id)),
            wire_text(dto.title),
            wire_text(dto.body),
        )
    }
}
