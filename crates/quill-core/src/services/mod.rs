//! Services - the use-case layer over domain entities and ports.
//!
//! One service per concern: content (posts), social graph (follows and
//! notifications), and the assistant gateway.

pub mod assistant;
pub mod content;
pub mod slug;
pub mod social;

pub use assistant::AssistantService;
pub use content::{ContentService, NewPost, PostFilter, PostUpdate};
pub use social::SocialGraphService;
