//! Command parsing and entity resolution.

mod command;
mod resolver;

pub use command::{Command, Direction, parse_command};
pub use resolver::{fuzzy_match, resolve_entity, resolve_entity_at_location, suggest_entities};
