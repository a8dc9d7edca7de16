//! Upward interface consumed by the presentation layer.

use crate::errors::SaveEditResult;
use crate::types::attributes::PlayerAttributes;
use crate::types::player::{PlayerIdentity, PlayerKey};
use crate::types::schema::SchemaVariant;

/// Schema-adaptive access to the players in one save database.
///
/// Every call blocks on the database and may fail. Reads borrow the store
/// shared; `save_attributes` needs it exclusively for the duration of its
/// transaction.
pub trait IPlayerStore {
    /// Variant detected when the store was opened.
    fn variant(&self) -> SchemaVariant;

    /// All players, ordered by name where the variant has one, storage order otherwise.
    fn list_players(&self) -> SaveEditResult<Vec<PlayerIdentity>>;

    /// Canonical attributes for one player. `NotFound` if its identity or economy row is gone.
    fn load_attributes(&self, key: &PlayerKey) -> SaveEditResult<PlayerAttributes>;

    /// Back up the database file, then write `attrs` across all tables in one transaction.
    fn save_attributes(&mut self, key: &PlayerKey, attrs: &PlayerAttributes) -> SaveEditResult<()>;
}
