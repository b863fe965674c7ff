use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};

use crate::car::{Car, Color};
use crate::observer::{LotObserver, LotSignal};
use crate::slot::Slot;
use crate::ticket::Ticket;
use parkade_core::{Entity, LotId, OwnerId, ParkingError, ParkingResult};

/// Point-in-time occupancy of a lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    pub parked: usize,
    pub capacity: usize,
}

impl Occupancy {
    pub fn is_full(&self) -> bool {
        self.parked >= self.capacity
    }
}

/// Fixed-size, ordered collection of slots.
///
/// Cars always go into the lowest-index free slot. The full flag tracks edge
/// transitions: observers hear "full" once when the last slot is taken and
/// "available" once when a slot frees up on a full lot.
pub struct ParkingLot {
    id: LotId,
    owner: Option<OwnerId>,
    slots: Vec<Slot>,
    full: bool,
    observers: Vec<Arc<dyn LotObserver>>,
}

impl ParkingLot {
    /// Create a lot with `capacity` empty slots.
    pub fn new(capacity: usize) -> ParkingResult<Self> {
        if capacity == 0 {
            return Err(ParkingError::InvalidCapacity(capacity));
        }
        Ok(Self {
            id: LotId::new(),
            owner: None,
            slots: (0..capacity).map(|_| Slot::new()).collect(),
            full: false,
            observers: Vec::new(),
        })
    }

    /// Create a lot recording `owner` as its owner key.
    pub fn owned_by(capacity: usize, owner: OwnerId) -> ParkingResult<Self> {
        let mut lot = Self::new(capacity)?;
        lot.owner = Some(owner);
        Ok(lot)
    }

    pub fn owner(&self) -> Option<OwnerId> {
        self.owner
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Park `car` in the nearest free slot.
    pub fn park(&mut self, car: Car) -> ParkingResult<Ticket> {
        if self.is_car_parked(&car) {
            return Err(ParkingError::CarAlreadyParked);
        }

        let (index, slot) = self
            .slots
            .iter_mut()
            .enumerate()
            .find(|(_, slot)| slot.is_free())
            .ok_or(ParkingError::LotFull)?;

        let registration = car.registration().to_string();
        let ticket = slot.park(car)?;
        debug!(
            lot_id = %self.id,
            slot = index,
            ticket_id = %ticket.id(),
            registration = %registration,
            "car parked"
        );

        if !self.full && self.is_full() {
            self.full = true;
            self.notify(LotSignal::Full);
        }

        Ok(ticket)
    }

    /// Return the car `ticket` was issued for, freeing its slot.
    pub fn unpark(&mut self, ticket: &Ticket) -> ParkingResult<Car> {
        let car = self
            .slots
            .iter_mut()
            .find_map(|slot| slot.unpark(ticket).ok())
            .ok_or(ParkingError::InvalidTicket)?;

        debug!(
            lot_id = %self.id,
            ticket_id = %ticket.id(),
            registration = %car.registration(),
            "car unparked"
        );

        if self.full && !self.is_full() {
            self.full = false;
            self.notify(LotSignal::Available);
        }

        Ok(car)
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|slot| !slot.is_free())
    }

    pub fn count_parked_cars(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_free()).count()
    }

    pub fn free_slots(&self) -> usize {
        self.capacity() - self.count_parked_cars()
    }

    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            parked: self.count_parked_cars(),
            capacity: self.capacity(),
        }
    }

    pub fn count_cars_by_color(&self, color: Color) -> usize {
        self.slots.iter().filter(|slot| slot.has_color(color)).count()
    }

    pub fn is_car_parked(&self, car: &Car) -> bool {
        self.slots.iter().any(|slot| slot.contains_car(car))
    }

    pub fn is_registration_parked(&self, registration: &str) -> ParkingResult<bool> {
        let registration = registration.trim();
        if registration.is_empty() {
            return Err(ParkingError::MissingRegistration);
        }
        Ok(self
            .slots
            .iter()
            .any(|slot| slot.has_registration(registration)))
    }

    /// Index of the slot holding the car for `ticket`.
    pub fn slot_index_of(&self, ticket: &Ticket) -> Option<usize> {
        self.slots.iter().position(|slot| slot.holds_ticket(ticket))
    }

    /// Subscribe `observer` to full/available transitions.
    ///
    /// No de-duplication: registering the same observer twice delivers every
    /// notification twice.
    pub fn register_observer(&mut self, observer: Arc<dyn LotObserver>) {
        self.observers.push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    fn notify(&self, signal: LotSignal) {
        info!(
            lot_id = %self.id,
            signal = signal.as_str(),
            observers = self.observers.len(),
            "lot state changed"
        );
        for observer in &self.observers {
            observer.notify(self.id, signal);
        }
    }
}

impl Entity for ParkingLot {
    type Id = LotId;

    fn id(&self) -> LotId {
        self.id
    }
}

impl core::fmt::Debug for ParkingLot {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ParkingLot")
            .field("id", &self.id)
            .field("owner", &self.owner)
            .field("capacity", &self.capacity())
            .field("parked", &self.count_parked_cars())
            .field("full", &self.full)
            .field("observers", &self.observers.len())
            .finish()
    }
}

/// Shared handle to one lot.
///
/// Owners and attendants hold clones of the same handle. The mutex is the
/// lot's single exclusion boundary: a whole park or unpark, including the
/// full check and the notification fan-out, runs under one lock.
#[derive(Clone)]
pub struct LotHandle {
    id: LotId,
    inner: Arc<Mutex<ParkingLot>>,
}

impl LotHandle {
    pub fn new(lot: ParkingLot) -> Self {
        Self {
            id: lot.id,
            inner: Arc::new(Mutex::new(lot)),
        }
    }

    /// Shortcut for `LotHandle::new(ParkingLot::new(capacity)?)`.
    pub fn with_capacity(capacity: usize) -> ParkingResult<Self> {
        Ok(Self::new(ParkingLot::new(capacity)?))
    }

    pub fn id(&self) -> LotId {
        self.id
    }

    fn lock(&self) -> ParkingResult<MutexGuard<'_, ParkingLot>> {
        self.inner.lock().map_err(|_| ParkingError::LotUnavailable)
    }

    /// Run `f` with exclusive access to the lot.
    pub fn with<R>(&self, f: impl FnOnce(&mut ParkingLot) -> R) -> ParkingResult<R> {
        let mut lot = self.lock()?;
        Ok(f(&mut lot))
    }

    pub fn park(&self, car: Car) -> ParkingResult<Ticket> {
        self.lock()?.park(car)
    }

    pub fn unpark(&self, ticket: &Ticket) -> ParkingResult<Car> {
        self.lock()?.unpark(ticket)
    }

    pub fn owner(&self) -> ParkingResult<Option<OwnerId>> {
        Ok(self.lock()?.owner())
    }

    pub fn capacity(&self) -> ParkingResult<usize> {
        Ok(self.lock()?.capacity())
    }

    pub fn is_full(&self) -> ParkingResult<bool> {
        Ok(self.lock()?.is_full())
    }

    pub fn occupancy(&self) -> ParkingResult<Occupancy> {
        Ok(self.lock()?.occupancy())
    }

    pub fn count_parked_cars(&self) -> ParkingResult<usize> {
        Ok(self.lock()?.count_parked_cars())
    }

    pub fn count_cars_by_color(&self, color: Color) -> ParkingResult<usize> {
        Ok(self.lock()?.count_cars_by_color(color))
    }

    pub fn is_car_parked(&self, car: &Car) -> ParkingResult<bool> {
        Ok(self.lock()?.is_car_parked(car))
    }

    pub fn is_registration_parked(&self, registration: &str) -> ParkingResult<bool> {
        self.lock()?.is_registration_parked(registration)
    }

    pub fn slot_index_of(&self, ticket: &Ticket) -> ParkingResult<Option<usize>> {
        Ok(self.lock()?.slot_index_of(ticket))
    }

    pub fn register_observer(&self, observer: Arc<dyn LotObserver>) -> ParkingResult<()> {
        self.lock()?.register_observer(observer);
        Ok(())
    }
}

impl PartialEq for LotHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for LotHandle {}

impl core::fmt::Debug for LotHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("LotHandle").field(&self.id).finish()
    }
}
