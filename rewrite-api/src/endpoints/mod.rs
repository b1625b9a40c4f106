//! Resource facades.
//!
//! Each facade borrows a [`RestClient`](crate::client::RestClient), maps its
//! methods to routes, and sends every call with the same [`FetchOptions`]
//! (set through `with_options`).

pub mod api_keys;
pub mod projects;
pub mod templates;
pub mod webhooks;

pub use api_keys::ApiKeys;
pub use projects::Projects;
pub use templates::Templates;
pub use webhooks::Webhooks;
