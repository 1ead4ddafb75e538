//! Core library exports for the Brahmand catalog service.
//!
//! Brahmand is a server-rendered astronomy catalog: category listings,
//! object detail pages, a daily-featured hero, a NASA image-search explorer
//! and a chat widget relayed to a hosted LLM gateway.

pub mod chat;
pub mod compose;
pub mod datasource;
pub mod db;
pub mod domain;
pub mod dto;
pub mod fetch_guard;
pub mod forms;
pub mod models;
pub mod nasa;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;
