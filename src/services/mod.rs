pub use errors::{ServiceError, ServiceResult};

pub mod api;
pub mod articles;
pub mod categories;
pub mod chat;
pub mod errors;
pub mod explorer;
pub mod main;
pub mod objects;
pub mod timeline;
