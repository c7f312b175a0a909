//! Factory Method: creators decide which vehicle they build. Ids are handed
//! out by a counter scoped to the creator type, so ships and trucks number
//! themselves independently.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::console::Console;

static SHIPS_BUILT: AtomicUsize = AtomicUsize::new(0);
static TRUCKS_BUILT: AtomicUsize = AtomicUsize::new(0);

// =============================================================================
// Products
// =============================================================================

pub trait Vehicle {
    fn operation(&self) -> String;
}

pub struct Ship {
    id: usize,
}

impl Vehicle for Ship {
    fn operation(&self) -> String {
        format!("Ship no. {}", self.id)
    }
}

pub struct Truck {
    id: usize,
}

impl Vehicle for Truck {
    fn operation(&self) -> String {
        format!("Truck no. {}", self.id)
    }
}

// =============================================================================
// Creators
// =============================================================================

/// The factory method is the only thing concrete creators override; the
/// business logic in `travelling` stays independent of the vehicle type.
pub trait Creator {
    fn factory_method(&self) -> Box<dyn Vehicle>;

    fn travelling(&self) -> String {
        format!(
            "Travelling in the vehicle: {}",
            self.factory_method().operation()
        )
    }
}

pub struct ShipCreator;

impl Creator for ShipCreator {
    fn factory_method(&self) -> Box<dyn Vehicle> {
        let id = SHIPS_BUILT.fetch_add(1, Ordering::SeqCst) + 1;
        Box::new(Ship { id })
    }
}

pub struct TruckCreator;

impl Creator for TruckCreator {
    fn factory_method(&self) -> Box<dyn Vehicle> {
        let id = TRUCKS_BUILT.fetch_add(1, Ordering::SeqCst) + 1;
        Box::new(Truck { id })
    }
}

// =============================================================================
// Demo
// =============================================================================

/// Three ship journeys and a truck journey. Ship ids advance 1, 2, 3 while
/// the truck count stays on its own sequence.
pub fn demo(out: &mut dyn Console) {
    let creators: [&dyn Creator; 4] = [&ShipCreator, &ShipCreator, &ShipCreator, &TruckCreator];
    for creator in creators {
        out.line(&creator.travelling());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::Capture;
    use std::sync::Mutex;

    // The id counters are process globals; serialize the tests that bump them.
    static COUNTER_LOCK: Mutex<()> = Mutex::new(());

    fn id_of(vehicle: &dyn Vehicle, prefix: &str) -> usize {
        let operation = vehicle.operation();
        operation
            .strip_prefix(prefix)
            .and_then(|rest| rest.parse().ok())
            .unwrap_or_else(|| panic!("unexpected operation: {operation}"))
    }

    #[test]
    fn test_ship_ids_are_consecutive() {
        let _guard = COUNTER_LOCK.lock().unwrap();

        let first = id_of(ShipCreator.factory_method().as_ref(), "Ship no. ");
        let second = id_of(ShipCreator.factory_method().as_ref(), "Ship no. ");
        let third = id_of(ShipCreator.factory_method().as_ref(), "Ship no. ");

        assert_eq!(second, first + 1);
        assert_eq!(third, first + 2);
    }

    #[test]
    fn test_counters_are_scoped_per_creator_type() {
        let _guard = COUNTER_LOCK.lock().unwrap();

        let truck_before = id_of(TruckCreator.factory_method().as_ref(), "Truck no. ");
        // Building ships must not advance the truck sequence.
        ShipCreator.factory_method();
        ShipCreator.factory_method();
        let truck_after = id_of(TruckCreator.factory_method().as_ref(), "Truck no. ");

        assert_eq!(truck_after, truck_before + 1);
    }

    #[test]
    fn test_travelling_wraps_the_operation() {
        let _guard = COUNTER_LOCK.lock().unwrap();

        let line = ShipCreator.travelling();
        assert!(line.starts_with("Travelling in the vehicle: Ship no. "));
    }

    #[test]
    fn test_demo_output_shape() {
        let _guard = COUNTER_LOCK.lock().unwrap();

        let mut capture = Capture::new();
        demo(&mut capture);

        let lines = capture.lines();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Travelling in the vehicle: Ship no. "));
        assert!(lines[1].starts_with("Travelling in the vehicle: Ship no. "));
        assert!(lines[2].starts_with("Travelling in the vehicle: Ship no. "));
        assert!(lines[3].starts_with("Travelling in the vehicle: Truck no. "));
    }
}
