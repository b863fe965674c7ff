//! Parking domain error model.

use thiserror::Error;

/// Result type used across the parking domain.
pub type ParkingResult<T> = Result<T, ParkingError>;

/// Domain-level error.
///
/// Every variant is a deterministic business failure returned to the immediate
/// caller. Nothing in the domain retries or swallows these, except scanning
/// loops that try several lots before reporting a single aggregate failure.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParkingError {
    /// A lot was constructed with zero slots.
    #[error("parking lot capacity must be at least 1 (got {0})")]
    InvalidCapacity(usize),

    /// Park attempted on a lot with no free slot.
    #[error("parking lot is full")]
    LotFull,

    /// The car is already parked (in this lot, or by this attendant).
    #[error("car already parked")]
    CarAlreadyParked,

    /// The slot already holds a car.
    #[error("slot is occupied")]
    SlotOccupied,

    /// Unpark attempted on an empty slot.
    #[error("slot is already free")]
    SlotAlreadyFree,

    /// The ticket does not match any car in the lot.
    #[error("invalid ticket")]
    InvalidTicket,

    /// None of the attendant's lots recognize the ticket.
    #[error("car not found")]
    CarNotFound,

    /// The lot is already in the attendant's set.
    #[error("parking lot already assigned")]
    LotAlreadyAssigned,

    /// The owner tried to act on a lot it did not create.
    #[error("this parking lot is not owned by the owner")]
    NotOwned,

    /// The attendant already works for a different owner.
    #[error("attendant already serves another owner")]
    AttendantBoundToOtherOwner,

    /// The selection strategy found no lot with a free slot.
    #[error("all parking lots are full")]
    AllLotsFull,

    /// Park requested from an attendant that has no lots.
    #[error("no parking lot assigned")]
    NoLotAssigned,

    /// A registration number was required but empty.
    #[error("car needs registration number")]
    MissingRegistration,

    /// The lot's guard was poisoned by a panicking caller.
    #[error("parking lot is unavailable")]
    LotUnavailable,

    /// An identifier failed to parse.
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl ParkingError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    /// Whether the error means "no room", as opposed to a bad request.
    pub fn is_capacity_exhausted(&self) -> bool {
        matches!(self, Self::LotFull | Self::AllLotsFull)
    }
}
