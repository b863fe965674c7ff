use std::sync::Arc;

use tracing::{debug, info};

use crate::attendant::Attendant;
use crate::car::Car;
use crate::lot::{LotHandle, ParkingLot};
use crate::observer::LotObserver;
use crate::strategy::SelectionPolicy;
use crate::ticket::Ticket;
use parkade_core::{Entity, LotId, OwnerId, ParkingError, ParkingResult};

/// Creator of parking lots.
///
/// The owner keeps handles to the lots it created and can hand them to
/// attendants or run them itself through its own attendant desk.
#[derive(Debug)]
pub struct Owner {
    id: OwnerId,
    lots: Vec<LotHandle>,
    desk: Attendant,
}

impl Owner {
    pub fn new() -> Self {
        Self::with_policy(SelectionPolicy::default())
    }

    /// Owner whose own desk picks lots with `policy`.
    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self {
            id: OwnerId::new(),
            lots: Vec::new(),
            desk: Attendant::with_policy(policy),
        }
    }

    pub fn lots(&self) -> &[LotHandle] {
        &self.lots
    }

    pub fn owns(&self, lot: &LotHandle) -> bool {
        self.lots.contains(lot)
    }

    /// The receiver this owner subscribes to its lots.
    pub fn notifier(&self) -> OwnerNotifier {
        OwnerNotifier { owner: self.id }
    }

    /// Create a lot with `capacity` slots, owned by and reporting to this owner.
    pub fn create_lot(&mut self, capacity: usize) -> ParkingResult<LotHandle> {
        let mut lot = ParkingLot::owned_by(capacity, self.id)?;
        lot.register_observer(Arc::new(self.notifier()));

        let handle = LotHandle::new(lot);
        info!(owner_id = %self.id, lot_id = %handle.id(), capacity, "parking lot created");
        self.lots.push(handle.clone());
        Ok(handle)
    }

    fn ensure_owned(&self, lot: &LotHandle) -> ParkingResult<()> {
        if self.owns(lot) {
            Ok(())
        } else {
            Err(ParkingError::NotOwned)
        }
    }

    /// Hand one of this owner's lots to `attendant`.
    pub fn assign_to_attendant(
        &self,
        attendant: &mut Attendant,
        lot: &LotHandle,
    ) -> ParkingResult<()> {
        self.ensure_owned(lot)?;
        attendant.assign_for(self.id, lot.clone())?;
        debug!(owner_id = %self.id, attendant_id = %attendant.id(), lot_id = %lot.id(), "lot delegated");
        Ok(())
    }

    /// Run one of this owner's lots personally.
    pub fn assign_to_self(&mut self, lot: &LotHandle) -> ParkingResult<()> {
        self.ensure_owned(lot)?;
        self.desk.assign_for(self.id, lot.clone())
    }

    /// Subscribe an extra receiver (e.g. a policeman) to an owned lot.
    pub fn register_observer(
        &self,
        lot: &LotHandle,
        observer: Arc<dyn LotObserver>,
    ) -> ParkingResult<()> {
        self.ensure_owned(lot)?;
        lot.register_observer(observer)
    }

    /// Park through the owner's own desk.
    pub fn park(&mut self, car: Car) -> ParkingResult<Ticket> {
        self.desk.park(car)
    }

    /// Unpark through the owner's own desk. Only lots assigned to self count.
    pub fn unpark(&mut self, ticket: &Ticket) -> ParkingResult<Car> {
        self.desk.unpark(ticket)
    }

    pub fn desk(&self) -> &Attendant {
        &self.desk
    }
}

impl Default for Owner {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Owner {
    type Id = OwnerId;

    fn id(&self) -> OwnerId {
        self.id
    }
}

impl LotObserver for Owner {
    fn on_full(&self, lot: LotId) {
        self.notifier().on_full(lot)
    }

    fn on_available(&self, lot: LotId) {
        self.notifier().on_available(lot)
    }
}

/// Owner-side notification receiver.
///
/// Lots hold this instead of the owner itself, keyed by owner id, so a lot
/// never keeps its owner alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OwnerNotifier {
    owner: OwnerId,
}

impl OwnerNotifier {
    pub fn owner(&self) -> OwnerId {
        self.owner
    }
}

impl LotObserver for OwnerNotifier {
    fn on_full(&self, lot: LotId) {
        info!(owner_id = %self.owner, lot_id = %lot, "owner notified: parking lot is full");
    }

    fn on_available(&self, lot: LotId) {
        info!(owner_id = %self.owner, lot_id = %lot, "owner notified: parking lot has available slots");
    }
}
