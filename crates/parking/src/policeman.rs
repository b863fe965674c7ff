use tracing::info;

use crate::observer::LotObserver;
use parkade_core::LotId;

/// External auditor that only listens to lot notifications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Policeman;

impl Policeman {
    pub fn new() -> Self {
        Self
    }
}

impl LotObserver for Policeman {
    fn on_full(&self, lot: LotId) {
        info!(lot_id = %lot, "policeman notified: parking lot is full");
    }

    fn on_available(&self, lot: LotId) {
        info!(lot_id = %lot, "policeman notified: parking lot has available slots");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::car::{Car, Color};
    use crate::lot::ParkingLot;
    use std::sync::Arc;

    #[test]
    fn policeman_can_watch_a_lot() {
        let mut lot = ParkingLot::new(1).unwrap();
        lot.register_observer(Arc::new(Policeman::new()));

        let ticket = lot.park(Car::new("AP-1234", Color::Red).unwrap()).unwrap();
        assert!(lot.is_full());
        lot.unpark(&ticket).unwrap();
        assert!(!lot.is_full());
    }
}
