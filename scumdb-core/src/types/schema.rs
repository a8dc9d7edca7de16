//! Schema variants the editor understands.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the closed set of on-disk table layouts shipped by different game versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaVariant {
    /// Variant "A": `entity` + `entity_component` tables, keyed by platform id.
    EntityComponent,
    /// Variant "B": flat `Characters` table, keyed by row id.
    CharacterTable,
}

impl SchemaVariant {
    pub const ALL: [SchemaVariant; 2] = [Self::EntityComponent, Self::CharacterTable];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::EntityComponent => "entity_component",
            Self::CharacterTable => "character_table",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "entity_component" => Some(Self::EntityComponent),
            "character_table" => Some(Self::CharacterTable),
            _ => None,
        }
    }
}

impl fmt::Display for SchemaVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
