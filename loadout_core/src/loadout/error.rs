//! Recoverable loadout errors

use crate::types::SlotType;
use thiserror::Error;

/// Why a loadout mutation was rejected
///
/// All variants are expected outcomes of user-driven configuration. A rejected call
/// leaves the engine untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadoutError {
    #[error("'{name}' is not a structural component")]
    InvalidComponent { name: String },
    #[error("slot {0:?} is not a body slot")]
    UnknownSlot(SlotType),
    #[error("'{name}' is not a weapon")]
    NotAWeapon { name: String },
    #[error("slot {0:?} has no hardpoints")]
    NoHardpoint(SlotType),
    #[error("hardpoints {start}..{} of slot {slot:?} are not free", .start + .required)]
    RangeUnavailable {
        slot: SlotType,
        start: usize,
        required: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_message() {
        let err = LoadoutError::RangeUnavailable {
            slot: SlotType::Core,
            start: 1,
            required: 2,
        };
        assert_eq!(err.to_string(), "hardpoints 1..3 of slot Core are not free");
    }
}
