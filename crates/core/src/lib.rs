//! `parkade-core` — domain foundation building blocks.
//!
//! This crate contains the error taxonomy and typed identifiers shared by the
//! parking domain (no IO, no locking, no logging).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{ParkingError, ParkingResult};
pub use id::{AttendantId, LotId, OwnerId, TicketId};
