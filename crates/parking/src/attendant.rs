use tracing::{debug, warn};

use crate::car::Car;
use crate::lot::LotHandle;
use crate::strategy::{LotSelector, SelectionPolicy};
use crate::ticket::Ticket;
use parkade_core::{AttendantId, Entity, OwnerId, ParkingError, ParkingResult};

/// Routes park/unpark requests across the lots assigned to it.
///
/// The attendant remembers the cars it parked itself and refuses to park one
/// of them again; that check is local and says nothing about other attendants
/// sharing the same lot.
#[derive(Debug)]
pub struct Attendant {
    id: AttendantId,
    employer: Option<OwnerId>,
    lots: Vec<LotHandle>,
    parked: Vec<Car>,
    selector: Box<dyn LotSelector>,
}

impl Attendant {
    /// Attendant using the first-available policy.
    pub fn new() -> Self {
        Self::with_policy(SelectionPolicy::default())
    }

    pub fn with_policy(policy: SelectionPolicy) -> Self {
        Self::with_selector(policy.selector())
    }

    pub fn with_selector(selector: Box<dyn LotSelector>) -> Self {
        Self {
            id: AttendantId::new(),
            employer: None,
            lots: Vec::new(),
            parked: Vec::new(),
            selector,
        }
    }

    /// Owner this attendant works for, fixed by the first owner assignment.
    pub fn employer(&self) -> Option<OwnerId> {
        self.employer
    }

    pub fn lots(&self) -> &[LotHandle] {
        &self.lots
    }

    pub fn parked_cars(&self) -> &[Car] {
        &self.parked
    }

    pub fn is_assigned(&self, lot: &LotHandle) -> bool {
        self.lots.contains(lot)
    }

    /// Add `lot` to this attendant's set.
    pub fn assign(&mut self, lot: LotHandle) -> ParkingResult<()> {
        if self.is_assigned(&lot) {
            return Err(ParkingError::LotAlreadyAssigned);
        }
        debug!(attendant_id = %self.id, lot_id = %lot.id(), "lot assigned");
        self.lots.push(lot);
        Ok(())
    }

    /// Assignment made by `owner`. The first owner to assign becomes the
    /// attendant's employer; other owners are turned away afterwards.
    pub(crate) fn assign_for(&mut self, owner: OwnerId, lot: LotHandle) -> ParkingResult<()> {
        if self.employer.is_some_and(|employer| employer != owner) {
            return Err(ParkingError::AttendantBoundToOtherOwner);
        }
        self.assign(lot)?;
        self.employer.get_or_insert(owner);
        Ok(())
    }

    /// Park `car` in the lot chosen by the selection policy.
    pub fn park(&mut self, car: Car) -> ParkingResult<Ticket> {
        if self.lots.is_empty() {
            return Err(ParkingError::NoLotAssigned);
        }
        if self.parked.contains(&car) {
            return Err(ParkingError::CarAlreadyParked);
        }

        let lot = self.selector.select(&self.lots)?;
        let ticket = lot.park(car.clone()).inspect_err(|e| {
            warn!(attendant_id = %self.id, lot_id = %lot.id(), error = %e, "park rejected by lot");
        })?;

        debug!(
            attendant_id = %self.id,
            lot_id = %lot.id(),
            registration = %car.registration(),
            "car parked by attendant"
        );
        self.parked.push(car);
        Ok(ticket)
    }

    /// Try each assigned lot in order until one accepts `ticket`.
    pub fn unpark(&mut self, ticket: &Ticket) -> ParkingResult<Car> {
        let car = self
            .lots
            .iter()
            .find_map(|lot| lot.unpark(ticket).ok())
            .ok_or(ParkingError::CarNotFound)?;

        if let Some(pos) = self.parked.iter().position(|parked| *parked == car) {
            self.parked.remove(pos);
        }
        debug!(
            attendant_id = %self.id,
            ticket_id = %ticket.id(),
            registration = %car.registration(),
            "car returned by attendant"
        );
        Ok(car)
    }
}

impl Default for Attendant {
    fn default() -> Self {
        Self::new()
    }
}

impl Entity for Attendant {
    type Id = AttendantId;

    fn id(&self) -> AttendantId {
        self.id
    }
}
