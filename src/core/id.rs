//! Identity tokens.
//!
//! Keys are generational: once an entry is removed its key never resolves
//! again, even if the slot is reused.

use slotmap::new_key_type;

new_key_type! {
    /// Identity of a registry entry, stable for the entry's lifetime.
    pub struct ItemId;
    /// Identity of a map feature (marker or shape) known to the menu.
    pub struct FeatureId;
}
