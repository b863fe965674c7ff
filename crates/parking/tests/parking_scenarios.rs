//! End-to-end scenarios: owners, attendants and observers working one set of lots.

use std::sync::{Arc, Mutex};

use parkade_parking::{
    Attendant, Car, Color, LotHandle, LotId, LotObserver, LotSignal, Owner, ParkingError,
    Policeman, SelectionPolicy,
};

/// Test double that records every notification it receives.
#[derive(Default)]
struct RecordingObserver {
    events: Mutex<Vec<(LotId, LotSignal)>>,
}

impl RecordingObserver {
    fn events(&self) -> Vec<(LotId, LotSignal)> {
        self.events.lock().unwrap().clone()
    }
}

impl LotObserver for RecordingObserver {
    fn on_full(&self, lot: LotId) {
        self.events.lock().unwrap().push((lot, LotSignal::Full));
    }

    fn on_available(&self, lot: LotId) {
        self.events.lock().unwrap().push((lot, LotSignal::Available));
    }
}

fn init_tracing() {
    parkade_observability::init();
}

fn car(registration: &str, color: Color) -> Car {
    Car::new(registration, color).unwrap()
}

#[test]
fn capacity_one_lot_full_cycle() {
    init_tracing();
    let mut owner = Owner::new();
    let lot = owner.create_lot(1).unwrap();
    owner.assign_to_self(&lot).unwrap();

    let ticket = owner.park(car("AP-1234", Color::Red)).unwrap();
    assert_eq!(lot.is_full(), Ok(true));
    assert_eq!(lot.park(car("AP-5678", Color::Blue)), Err(ParkingError::LotFull));

    let returned = owner.unpark(&ticket).unwrap();
    assert_eq!(returned.registration(), "AP-1234");
    assert_eq!(lot.is_full(), Ok(false));
    assert!(lot.park(car("AP-5678", Color::Blue)).is_ok());
}

#[test]
fn owner_and_policeman_hear_each_edge_once() {
    init_tracing();
    let mut owner = Owner::new();
    let lot = owner.create_lot(2).unwrap();
    let recorder = Arc::new(RecordingObserver::default());
    owner.register_observer(&lot, recorder.clone()).unwrap();
    owner.register_observer(&lot, Arc::new(Policeman::new())).unwrap();

    let mut attendant = Attendant::new();
    owner.assign_to_attendant(&mut attendant, &lot).unwrap();

    let t1 = attendant.park(car("AP-0001", Color::Red)).unwrap();
    attendant.park(car("AP-0002", Color::Red)).unwrap();
    assert_eq!(
        attendant.park(car("AP-0003", Color::Red)),
        Err(ParkingError::AllLotsFull)
    );
    attendant.unpark(&t1).unwrap();

    assert_eq!(
        recorder.events(),
        vec![(lot.id(), LotSignal::Full), (lot.id(), LotSignal::Available)]
    );
}

#[test]
fn observer_watching_several_lots_sees_each_lot() {
    let mut owner = Owner::new();
    let first = owner.create_lot(1).unwrap();
    let second = owner.create_lot(2).unwrap();
    let recorder = Arc::new(RecordingObserver::default());
    owner.register_observer(&first, recorder.clone()).unwrap();
    owner.register_observer(&second, recorder.clone()).unwrap();

    first.park(car("AP-1234", Color::Red)).unwrap();
    second.park(car("AP-5678", Color::Blue)).unwrap();
    assert_eq!(recorder.events(), vec![(first.id(), LotSignal::Full)]);

    assert_eq!(first.park(car("AP-9999", Color::Green)), Err(ParkingError::LotFull));
    second.park(car("AP-9998", Color::Yellow)).unwrap();
    assert_eq!(
        recorder.events(),
        vec![(first.id(), LotSignal::Full), (second.id(), LotSignal::Full)]
    );
}

#[test]
fn fewest_occupied_attendant_lands_in_the_other_lot() {
    let mut owner = Owner::new();
    let a = owner.create_lot(2).unwrap();
    let b = owner.create_lot(2).unwrap();
    let mut attendant = Attendant::with_policy(SelectionPolicy::FewestOccupied);
    owner.assign_to_attendant(&mut attendant, &a).unwrap();
    owner.assign_to_attendant(&mut attendant, &b).unwrap();

    a.park(car("AP-0001", Color::White)).unwrap();
    let ticket = attendant.park(car("AP-0002", Color::White)).unwrap();

    assert_eq!(b.slot_index_of(&ticket), Ok(Some(0)));
    assert_eq!(a.count_parked_cars(), Ok(1));
    assert_eq!(b.count_parked_cars(), Ok(1));
}

#[test]
fn two_attendants_share_a_lot() {
    let mut owner = Owner::new();
    let lot = owner.create_lot(3).unwrap();
    let mut first = Attendant::new();
    let mut second = Attendant::new();
    owner.assign_to_attendant(&mut first, &lot).unwrap();
    owner.assign_to_attendant(&mut second, &lot).unwrap();

    let ticket = first.park(car("AP-1234", Color::Black)).unwrap();
    second.park(car("AP-5678", Color::Black)).unwrap();

    // Any attendant of the lot can return the car for a valid ticket.
    assert_eq!(second.unpark(&ticket).unwrap().registration(), "AP-1234");
    assert_eq!(lot.count_parked_cars(), Ok(1));
    assert_eq!(first.unpark(&ticket), Err(ParkingError::CarNotFound));
}

#[test]
fn color_and_registration_queries() {
    let lot = LotHandle::with_capacity(4).unwrap();
    lot.park(car("AP-0001", Color::Red)).unwrap();
    lot.park(car("AP-0002", Color::Red)).unwrap();
    lot.park(car("AP-0003", Color::Blue)).unwrap();

    assert_eq!(lot.count_cars_by_color(Color::Red), Ok(2));
    assert_eq!(lot.is_registration_parked("AP-0003"), Ok(true));
    assert_eq!(lot.is_car_parked(&car("AP-0002", Color::Green)), Ok(true));
    assert_eq!(
        lot.is_registration_parked(""),
        Err(ParkingError::MissingRegistration)
    );
}

#[test]
fn lots_can_be_driven_from_several_threads() {
    let lot = LotHandle::with_capacity(64).unwrap();
    let recorder = Arc::new(RecordingObserver::default());
    lot.register_observer(recorder.clone()).unwrap();

    let handles: Vec<_> = (0..8)
        .map(|worker| {
            let lot = lot.clone();
            std::thread::spawn(move || {
                for n in 0..8 {
                    lot.park(car(&format!("TH-{worker}-{n}"), Color::Blue)).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(lot.count_parked_cars(), Ok(64));
    assert_eq!(recorder.events(), vec![(lot.id(), LotSignal::Full)]);
}
