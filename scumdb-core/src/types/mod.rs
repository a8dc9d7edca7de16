pub mod attributes;
pub mod player;
pub mod schema;
