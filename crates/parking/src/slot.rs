use crate::car::{Car, Color};
use crate::ticket::Ticket;
use parkade_core::{ParkingError, ParkingResult};

/// Single-car capacity unit of a lot.
///
/// The car and its ticket live in one `Option`, so a slot can never hold a
/// car without a ticket or a ticket without a car.
#[derive(Debug, Clone, Default)]
pub struct Slot {
    occupant: Option<(Car, Ticket)>,
}

impl Slot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// Store `car` and mint its ticket.
    pub fn park(&mut self, car: Car) -> ParkingResult<Ticket> {
        if self.occupant.is_some() {
            return Err(ParkingError::SlotOccupied);
        }
        let ticket = Ticket::issue();
        self.occupant = Some((car, ticket.clone()));
        Ok(ticket)
    }

    /// Release the car if `ticket` is the one issued for it.
    pub fn unpark(&mut self, ticket: &Ticket) -> ParkingResult<Car> {
        match self.occupant.take() {
            None => Err(ParkingError::SlotAlreadyFree),
            Some((car, issued)) if issued == *ticket => Ok(car),
            Some(occupant) => {
                self.occupant = Some(occupant);
                Err(ParkingError::InvalidTicket)
            }
        }
    }

    pub fn car(&self) -> Option<&Car> {
        self.occupant.as_ref().map(|(car, _)| car)
    }

    pub fn holds_ticket(&self, ticket: &Ticket) -> bool {
        matches!(&self.occupant, Some((_, issued)) if issued == ticket)
    }

    pub fn has_color(&self, color: Color) -> bool {
        self.car().is_some_and(|car| car.is_color(color))
    }

    pub fn has_registration(&self, registration: &str) -> bool {
        self.car().is_some_and(|car| car.has_registration(registration))
    }

    pub fn contains_car(&self, car: &Car) -> bool {
        self.car() == Some(car)
    }
}
