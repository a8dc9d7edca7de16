//! Per-variant table layouts.
//!
//! Every table and column the directory reader, attribute mapper and writer
//! touch is named here, once per `SchemaVariant`. Identifiers are static and
//! interpolated into SQL; player keys are always bound as parameters.

use scumdb_core::{PlayerKey, SchemaVariant};

/// Which `PlayerKey` form a layout stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyKind {
    RowId,
    PlatformId,
}

impl KeyKind {
    pub fn matches(&self, key: &PlayerKey) -> bool {
        match self {
            Self::RowId => key.is_row_id(),
            Self::PlatformId => key.is_platform_id(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DirectoryTable {
    pub table: &'static str,
    pub key: &'static str,
    pub name: &'static str,
    /// Sort ascending by display name. When false, storage order is kept.
    pub order_by_name: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct EconomyTable {
    pub table: &'static str,
    pub key: &'static str,
    pub fame_points: &'static str,
    pub money: &'static str,
    pub gold: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct MetabolismTable {
    pub table: &'static str,
    pub key: &'static str,
    pub strength_level: &'static str,
    pub constitution_level: &'static str,
    pub dexterity_level: &'static str,
    pub intelligence_level: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BodyTable {
    pub table: &'static str,
    pub key: &'static str,
    pub muscle_mass: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RestTable {
    pub table: &'static str,
    pub key: &'static str,
    pub rest_quality: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct InjuryTable {
    pub table: &'static str,
    pub key: &'static str,
    pub damage: &'static str,
    pub head_damage: &'static str,
}

/// Everything the editor needs to know about one variant's tables.
#[derive(Debug, Clone, Copy)]
pub struct SchemaLayout {
    pub variant: SchemaVariant,
    pub key_kind: KeyKind,
    pub directory: DirectoryTable,
    pub economy: EconomyTable,
    pub metabolism: MetabolismTable,
    pub body: BodyTable,
    pub rest: RestTable,
    pub injury: InjuryTable,
}

impl SchemaLayout {
    /// Distinct tables this layout reads or writes, in write order.
    pub fn tables(&self) -> Vec<&'static str> {
        let mut tables = vec![self.directory.table];
        for t in [
            self.economy.table,
            self.metabolism.table,
            self.body.table,
            self.rest.table,
            self.injury.table,
        ] {
            if !tables.iter().any(|seen| seen.eq_ignore_ascii_case(t)) {
                tables.push(t);
            }
        }
        tables
    }
}

static ENTITY_COMPONENT: SchemaLayout = SchemaLayout {
    variant: SchemaVariant::EntityComponent,
    key_kind: KeyKind::PlatformId,
    directory: DirectoryTable {
        table: "user_profile",
        key: "user_id",
        name: "name",
        order_by_name: true,
    },
    economy: EconomyTable {
        table: "fame",
        key: "user_id",
        fame_points: "fame_points",
        money: "money",
        gold: "gold",
    },
    metabolism: MetabolismTable {
        table: "character_stats",
        key: "user_id",
        strength_level: "strength_level",
        constitution_level: "constitution_level",
        dexterity_level: "dexterity_level",
        intelligence_level: "intelligence_level",
    },
    body: BodyTable {
        table: "body_simulation",
        key: "user_id",
        muscle_mass: "muscle_mass",
    },
    rest: RestTable {
        table: "prisoner_rest",
        key: "user_id",
        rest_quality: "rest_quality",
    },
    injury: InjuryTable {
        table: "prisoner_injury",
        key: "user_id",
        damage: "damage",
        head_damage: "head_damage",
    },
};

static CHARACTER_TABLE: SchemaLayout = SchemaLayout {
    variant: SchemaVariant::CharacterTable,
    key_kind: KeyKind::RowId,
    directory: DirectoryTable {
        table: "Characters",
        key: "Id",
        name: "Name",
        order_by_name: false,
    },
    economy: EconomyTable {
        table: "Characters",
        key: "Id",
        fame_points: "FamePoints",
        money: "Money",
        gold: "Gold",
    },
    metabolism: MetabolismTable {
        table: "CharacterStats",
        key: "CharacterId",
        strength_level: "StrengthLevel",
        constitution_level: "ConstitutionLevel",
        dexterity_level: "DexterityLevel",
        intelligence_level: "IntelligenceLevel",
    },
    body: BodyTable {
        table: "BodySimulation",
        key: "CharacterId",
        muscle_mass: "MuscleMass",
    },
    rest: RestTable {
        table: "RestState",
        key: "CharacterId",
        rest_quality: "RestQuality",
    },
    injury: InjuryTable {
        table: "Injuries",
        key: "CharacterId",
        damage: "Damage",
        head_damage: "HeadDamage",
    },
};

/// Layout for a detected variant.
pub fn layout_for(variant: SchemaVariant) -> &'static SchemaLayout {
    match variant {
        SchemaVariant::EntityComponent => &ENTITY_COMPONENT,
        SchemaVariant::CharacterTable => &CHARACTER_TABLE,
    }
}
