pub mod item;
pub mod route;
pub mod view_kind;
pub mod view_state;

pub use item::{ItemId, Post, User};
pub use route::{RouteRule, RouteTable};
pub use view_kind::ViewKind;
pub use view_state::ViewState;
