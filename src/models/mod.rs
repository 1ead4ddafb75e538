pub mod category;
pub mod config;
pub mod daily_fact;
pub mod discovery;
pub mod event;
pub mod object;
