//! Canonical player attributes and the column mapping behind them.
//!
//! Economy fields are stored verbatim. The four body attributes are derived on
//! read from a base level plus (or minus) a modifier held in another table:
//!
//! | attribute    | read                              | written back to                      |
//! |--------------|-----------------------------------|--------------------------------------|
//! | strength     | strength_level + muscle_mass      | strength_level, muscle_mass          |
//! | constitution | constitution_level - injury_damage| constitution_level, injury_damage    |
//! | dexterity    | dexterity_level + rest_quality    | dexterity_level, rest_quality        |
//! | intelligence | intelligence_level - head_damage  | intelligence_level, head_damage      |
//!
//! The write side copies the edited value into both columns and does not
//! subtract the modifier back out, so `derive(decompose(a)) != a` in general.
//! Only the economy fields survive a load/save cycle unchanged.

use serde::{Deserialize, Serialize};

/// Fame, money and gold, read and written without transformation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EconomyRecord {
    pub fame_points: i64,
    pub money: i64,
    pub gold: i64,
}

/// Stored column values for one player, independent of the table layout they came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPlayerColumns {
    pub economy: EconomyRecord,
    pub strength_level: i64,
    pub constitution_level: i64,
    pub dexterity_level: i64,
    pub intelligence_level: i64,
    pub muscle_mass: i64,
    pub injury_damage: i64,
    pub rest_quality: i64,
    pub head_damage: i64,
}

impl RawPlayerColumns {
    /// Split an edited record into the columns the writer updates.
    pub fn decompose(attrs: &PlayerAttributes) -> Self {
        Self {
            economy: EconomyRecord {
                fame_points: attrs.fame_points,
                money: attrs.money,
                gold: attrs.gold,
            },
            strength_level: attrs.strength,
            constitution_level: attrs.constitution,
            dexterity_level: attrs.dexterity,
            intelligence_level: attrs.intelligence,
            muscle_mass: attrs.strength,
            injury_damage: attrs.constitution,
            rest_quality: attrs.dexterity,
            head_damage: attrs.intelligence,
        }
    }
}

/// The variant-independent record handed to editors.
///
/// Derived fields can be negative when a modifier outweighs its base level;
/// that reflects the stored data, not invalid input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    pub fame_points: i64,
    pub money: i64,
    pub gold: i64,
    pub strength: i64,
    pub constitution: i64,
    pub dexterity: i64,
    pub intelligence: i64,
}

impl PlayerAttributes {
    /// Fold stored columns into the canonical record. Saturates instead of overflowing.
    pub fn derive(raw: &RawPlayerColumns) -> Self {
        Self {
            fame_points: raw.economy.fame_points,
            money: raw.economy.money,
            gold: raw.economy.gold,
            strength: raw.strength_level.saturating_add(raw.muscle_mass),
            constitution: raw.constitution_level.saturating_sub(raw.injury_damage),
            dexterity: raw.dexterity_level.saturating_add(raw.rest_quality),
            intelligence: raw.intelligence_level.saturating_sub(raw.head_damage),
        }
    }

    pub fn economy(&self) -> EconomyRecord {
        EconomyRecord {
            fame_points: self.fame_points,
            money: self.money,
            gold: self.gold,
        }
    }
}
