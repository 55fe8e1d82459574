//! Filter clauses
//!
//! A query holds at most one clause: a preset paired with a property and
//! its typed arguments. The single-clause constraint is a deliberate
//! simplicity rule enforced by the facade, not a technical limit.

use sq_presets::{Preset, PresetArgs};

/// One (preset, property, args) filter condition
#[derive(Debug, Clone)]
pub struct FilterClause<P> {
    pub preset: Preset,
    pub property: P,
    pub args: PresetArgs,
}

impl<P> FilterClause<P> {
    pub fn new(preset: impl Into<Preset>, property: P, args: PresetArgs) -> Self {
        Self {
            preset: preset.into(),
            property,
            args,
        }
    }
}
