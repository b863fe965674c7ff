//! Parking domain module.
//!
//! Owners create fixed-capacity lots, attendants park and retrieve cars
//! against tickets, and observers are told when a lot fills up or frees a
//! slot again. Pure in-memory domain logic (no IO, no storage).

pub mod attendant;
pub mod car;
pub mod lot;
pub mod observer;
pub mod owner;
pub mod policeman;
pub mod slot;
pub mod strategy;
pub mod ticket;

pub use attendant::Attendant;
pub use car::{Car, Color};
pub use lot::{LotHandle, Occupancy, ParkingLot};
pub use observer::{LotObserver, LotSignal};
pub use owner::{Owner, OwnerNotifier};
pub use policeman::Policeman;
pub use slot::Slot;
pub use strategy::{FewestOccupied, FirstAvailable, LotSelector, SelectionPolicy, UnknownPolicy};
pub use ticket::Ticket;

pub use parkade_core::{AttendantId, LotId, OwnerId, ParkingError, ParkingResult, TicketId};
