//! Resource models organized by API resource.

pub mod common;
pub mod project;
pub mod template;
pub mod webhook;
pub mod api_key;
