//! Lot selection policies used by attendants.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::lot::{LotHandle, Occupancy};
use parkade_core::{ParkingError, ParkingResult};

/// Picks the lot an attendant parks the next car in.
///
/// Lots whose lock is poisoned are never eligible.
pub trait LotSelector: Send + Sync + core::fmt::Debug {
    fn select<'a>(&self, lots: &'a [LotHandle]) -> ParkingResult<&'a LotHandle>;
}

/// Lots with at least one free slot, in assignment order.
fn open_lots(lots: &[LotHandle]) -> impl Iterator<Item = (&LotHandle, Occupancy)> {
    lots.iter()
        .filter_map(|lot| lot.occupancy().ok().map(|occ| (lot, occ)))
        .filter(|(_, occ)| !occ.is_full())
}

/// First assigned lot that still has room.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FirstAvailable;

impl LotSelector for FirstAvailable {
    fn select<'a>(&self, lots: &'a [LotHandle]) -> ParkingResult<&'a LotHandle> {
        open_lots(lots)
            .map(|(lot, _)| lot)
            .next()
            .ok_or(ParkingError::AllLotsFull)
    }
}

/// Non-full lot with the fewest parked cars; ties go to the earlier lot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FewestOccupied;

impl LotSelector for FewestOccupied {
    fn select<'a>(&self, lots: &'a [LotHandle]) -> ParkingResult<&'a LotHandle> {
        open_lots(lots)
            .min_by_key(|(_, occ)| occ.parked)
            .map(|(lot, _)| lot)
            .ok_or(ParkingError::AllLotsFull)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown selection policy: {0}")]
pub struct UnknownPolicy(pub String);

/// Configuration value naming a selection policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SelectionPolicy {
    #[default]
    FirstAvailable,
    #[serde(alias = "smart")]
    FewestOccupied,
}

impl SelectionPolicy {
    pub fn selector(self) -> Box<dyn LotSelector> {
        match self {
            SelectionPolicy::FirstAvailable => Box::new(FirstAvailable),
            SelectionPolicy::FewestOccupied => Box::new(FewestOccupied),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = UnknownPolicy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-available" | "normal" => Ok(Self::FirstAvailable),
            "fewest-occupied" | "smart" => Ok(Self::FewestOccupied),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}
