//! Singleton: one process-wide counter behind an accessor function. The
//! constructor is private to this module, so the accessor is the only way
//! to reach an instance, and first access initializes it exactly once even
//! with concurrent callers.

use std::sync::Mutex;

use lazy_static::lazy_static;

use crate::console::Console;

/// The shared counter. Only [`instance`] can hand one out.
#[derive(Debug)]
pub struct Counter {
    value: i64,
}

impl Counter {
    fn new() -> Self {
        Self { value: 0 }
    }

    pub fn get(&self) -> i64 {
        self.value
    }

    pub fn set(&mut self, value: i64) {
        self.value = value;
    }

    pub fn increment(&mut self) {
        self.value += 1;
    }

    pub fn decrement(&mut self) {
        self.value -= 1;
    }
}

lazy_static! {
    static ref INSTANCE: Mutex<Counter> = Mutex::new(Counter::new());
}

/// Global access point. Every call returns the same instance.
pub fn instance() -> &'static Mutex<Counter> {
    &INSTANCE
}

// =============================================================================
// Demo
// =============================================================================

/// Mutates the counter through one handle and reads it back through another.
pub fn demo(out: &mut dyn Console) {
    let first = instance();
    {
        let mut counter = first.lock().unwrap();
        counter.set(5);
        counter.increment();
        counter.increment();
        counter.decrement();
        out.line(&format!(
            "counter after set(5), two increments and a decrement: {}",
            counter.get()
        ));
    }

    let second = instance();
    if std::ptr::eq(first, second) {
        out.line("Singleton works, both variables contain the same instance.");
    } else {
        out.line("Singleton failed, variables contain different instances.");
    }
}
