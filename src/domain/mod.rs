pub mod category;
pub mod chat;
pub mod daily_fact;
pub mod discovery;
pub mod event;
pub mod object;
pub mod types;
