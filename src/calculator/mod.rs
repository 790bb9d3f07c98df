// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Notifying arithmetic operations.
//!
//! [`EventCalculator`] wraps four binary numeric operations in an observer
//! notification mechanism: every successful operation notifies the
//! operation observers, and a rejected operation (divide by zero) notifies
//! the error observers instead. Notification is synchronous and strictly
//! in registration order. Domain errors are recovered locally and never
//! propagate to the caller.

use crate::dispatch::{ObserverId, ObserverList};
use crate::observability::messages::calculator::{OperationPerformed, OperationRejected};
use crate::observability::messages::StructuredLog;

/// Notification payload for a successfully performed operation.
///
/// Created per invocation and discarded after dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationEvent {
    pub operation: String,
    pub operand1: f64,
    pub operand2: f64,
    pub result: f64,
}

/// Notification payload for a rejected operation.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationError {
    pub operation: String,
    pub message: String,
}

/// Four binary numeric operations with multicast completion/error events.
///
/// The calculator holds no state beyond its two observer lists; operations
/// are pure computation plus notification fan-out.
#[derive(Debug, Default)]
pub struct EventCalculator {
    operation_observers: ObserverList<CalculationEvent>,
    error_observers: ObserverList<CalculationError>,
}

impl EventCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an operation-performed observer.
    pub fn on_operation<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&CalculationEvent) + 'static,
    {
        self.operation_observers.subscribe(observer)
    }

    /// Register an error observer.
    pub fn on_error<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&CalculationError) + 'static,
    {
        self.error_observers.subscribe(observer)
    }

    /// Remove an operation observer by its handle.
    pub fn remove_operation_observer(&mut self, id: ObserverId) -> bool {
        self.operation_observers.unsubscribe(id)
    }

    /// Remove an error observer by its handle.
    pub fn remove_error_observer(&mut self, id: ObserverId) -> bool {
        self.error_observers.unsubscribe(id)
    }

    pub fn add(&mut self, a: f64, b: f64) -> f64 {
        let result = a + b;
        self.notify_performed("Add", a, b, result);
        result
    }

    pub fn subtract(&mut self, a: f64, b: f64) -> f64 {
        let result = a - b;
        self.notify_performed("Subtract", a, b, result);
        result
    }

    pub fn multiply(&mut self, a: f64, b: f64) -> f64 {
        let result = a * b;
        self.notify_performed("Multiply", a, b, result);
        result
    }

    /// Divide `a` by `b`.
    ///
    /// Division by zero is a domain error, not a fault: error observers are
    /// notified with "Cannot divide by zero" and the not-a-number sentinel
    /// is returned. No operation-performed notification fires in that case.
    pub fn divide(&mut self, a: f64, b: f64) -> f64 {
        if b == 0.0 {
            self.notify_rejected("Divide", "Cannot divide by zero");
            return f64::NAN;
        }

        let result = a / b;
        self.notify_performed("Divide", a, b, result);
        result
    }

    fn notify_performed(&mut self, operation: &str, operand1: f64, operand2: f64, result: f64) {
        OperationPerformed {
            operation,
            operand1,
            operand2,
            result,
        }
        .log();

        self.operation_observers.notify(&CalculationEvent {
            operation: operation.to_string(),
            operand1,
            operand2,
            result,
        });
    }

    fn notify_rejected(&mut self, operation: &str, message: &str) {
        OperationRejected { operation, message }.log();

        self.error_observers.notify(&CalculationError {
            operation: operation.to_string(),
            message: message.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_calculator() -> (
        EventCalculator,
        Rc<RefCell<Vec<CalculationEvent>>>,
        Rc<RefCell<Vec<CalculationError>>>,
    ) {
        let mut calculator = EventCalculator::new();
        let events = Rc::new(RefCell::new(Vec::new()));
        let errors = Rc::new(RefCell::new(Vec::new()));

        {
            let events = events.clone();
            calculator.on_operation(move |event| events.borrow_mut().push(event.clone()));
        }
        {
            let errors = errors.clone();
            calculator.on_error(move |error| errors.borrow_mut().push(error.clone()));
        }

        (calculator, events, errors)
    }

    #[test]
    fn operations_compute_and_notify_once() {
        let (mut calculator, events, errors) = recording_calculator();

        assert_eq!(calculator.add(10.0, 5.0), 15.0);
        assert_eq!(calculator.subtract(10.0, 3.0), 7.0);
        assert_eq!(calculator.multiply(4.0, 7.0), 28.0);
        assert_eq!(calculator.divide(15.0, 3.0), 5.0);

        let events = events.borrow();
        assert_eq!(events.len(), 4);
        assert_eq!(events[0].operation, "Add");
        assert_eq!(events[1].operation, "Subtract");
        assert_eq!(events[2].operation, "Multiply");
        assert_eq!(
            events[3],
            CalculationEvent {
                operation: "Divide".to_string(),
                operand1: 15.0,
                operand2: 3.0,
                result: 5.0,
            }
        );
        assert!(errors.borrow().is_empty());
    }

    #[test]
    fn divide_by_zero_returns_nan_and_notifies_error_observers_only() {
        let (mut calculator, events, errors) = recording_calculator();

        let result = calculator.divide(10.0, 0.0);

        assert!(result.is_nan());
        assert!(events.borrow().is_empty());
        let errors = errors.borrow();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].operation, "Divide");
        assert_eq!(errors[0].message, "Cannot divide by zero");
    }

    #[test]
    fn divide_by_negative_zero_is_still_rejected() {
        let (mut calculator, events, errors) = recording_calculator();

        assert!(calculator.divide(1.0, -0.0).is_nan());
        assert!(events.borrow().is_empty());
        assert_eq!(errors.borrow().len(), 1);
    }

    #[test]
    fn observers_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut calculator = EventCalculator::new();

        for tag in ["o1", "o2"] {
            let order = order.clone();
            calculator.on_operation(move |_| order.borrow_mut().push(tag));
        }

        calculator.add(1.0, 1.0);
        calculator.multiply(2.0, 2.0);

        assert_eq!(*order.borrow(), vec!["o1", "o2", "o1", "o2"]);
    }

    #[test]
    fn removed_observer_is_not_notified() {
        let (mut calculator, events, _errors) = recording_calculator();

        let counted = Rc::new(RefCell::new(0));
        let id = {
            let counted = counted.clone();
            calculator.on_operation(move |_| *counted.borrow_mut() += 1)
        };

        calculator.add(1.0, 2.0);
        assert!(calculator.remove_operation_observer(id));
        calculator.add(3.0, 4.0);

        assert_eq!(*counted.borrow(), 1);
        assert_eq!(events.borrow().len(), 2, "remaining observer still fires");
    }

    #[test]
    fn panicking_observer_does_not_corrupt_the_result() {
        let mut calculator = EventCalculator::new();
        calculator.on_operation(|_| panic!("observer bug"));

        let after = Rc::new(RefCell::new(0));
        {
            let after = after.clone();
            calculator.on_operation(move |_| *after.borrow_mut() += 1);
        }

        assert_eq!(calculator.add(2.0, 3.0), 5.0);
        assert_eq!(*after.borrow(), 1);
    }
}
