//! SeaORM entities for the four record collections.

pub mod follow;
pub mod notification;
pub mod post;
pub mod profile;
