pub mod categories;
pub mod discoveries;
pub mod events;
pub mod nasa;
pub mod objects;
