// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Stage chain and pipeline runner.
//!
//! A [`StageChain`] is an ordered, mutable sequence of named stages; a
//! [`StagePipeline`] executes a chain over an input string, one stage at a
//! time, notifying stage observers after every stage. A failing stage does
//! not abort the run: its error becomes the `"[Error: <message>]"`
//! placeholder and the next stage receives that string as input. The chain
//! may grow or shrink between runs, never during one.

mod chain;


pub use chain::StageChain;

use std::time::Instant;

use crate::dispatch::{ObserverId, ObserverList};
use crate::observability::messages::pipeline::{
    PipelineRunCompleted, PipelineRunStarted, StageExecutionCompleted, StageExecutionFailed,
    StageExecutionStarted,
};
use crate::observability::messages::StructuredLog;

/// Stage-completion notification: one per stage, per run. Ephemeral.
#[derive(Debug, Clone, PartialEq)]
pub struct StageEvent {
    pub stage: String,
    pub input: String,
    pub output: String,
}

/// Executes stage chains with per-stage observation.
///
/// A run is a single synchronous pass: not resumable, not cancellable, and
/// it never returns an error or panics past its own boundary.
#[derive(Debug, Default)]
pub struct StagePipeline {
    stage_observers: ObserverList<StageEvent>,
}

impl StagePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a stage-completed observer.
    pub fn on_stage_completed<F>(&mut self, observer: F) -> ObserverId
    where
        F: FnMut(&StageEvent) + 'static,
    {
        self.stage_observers.subscribe(observer)
    }

    /// Remove a stage observer by its handle.
    pub fn remove_stage_observer(&mut self, id: ObserverId) -> bool {
        self.stage_observers.unsubscribe(id)
    }

    /// Apply every stage in `chain` to `input`, strictly in order.
    ///
    /// The output of stage *i* becomes the input of stage *i+1*. After each
    /// stage, every stage observer is notified once, in registration order,
    /// with the stage's name, input, and output. A stage error is converted
    /// into the placeholder output and the run continues.
    pub fn run(&mut self, input: &str, chain: &StageChain) -> String {
        let run_msg = PipelineRunStarted {
            stage_count: chain.len(),
            input_len: input.len(),
        };
        let span = run_msg.span("run");
        let _guard = span.enter();
        run_msg.log();

        let mut current = input.to_string();
        let mut failed_stages = 0;

        for stage in chain.iter() {
            StageExecutionStarted {
                stage: stage.name(),
                input_len: current.len(),
            }
            .log();

            let start_time = Instant::now();
            let output = match stage.apply(&current) {
                Ok(output) => {
                    StageExecutionCompleted {
                        stage: stage.name(),
                        input_len: current.len(),
                        output_len: output.len(),
                        duration: start_time.elapsed(),
                    }
                    .log();
                    output
                }
                Err(error) => {
                    failed_stages += 1;
                    StageExecutionFailed {
                        stage: stage.name(),
                        error: &error,
                    }
                    .log();
                    format!("[Error: {}]", error)
                }
            };

            self.stage_observers.notify(&StageEvent {
                stage: stage.name().to_string(),
                input: current.clone(),
                output: output.clone(),
            });

            current = output;
        }

        PipelineRunCompleted {
            stage_count: chain.len(),
            output_len: current.len(),
            failed_stages,
        }
        .log();

        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::StageError;
    use crate::stages::FnStage;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn uppercase_chain() -> StageChain {
        let mut chain = StageChain::new();
        chain.push(FnStage::new("upper", |input: &str| Ok(input.to_uppercase())));
        chain
    }

    #[test]
    fn run_threads_output_into_next_stage() {
        let mut chain = uppercase_chain();
        chain.push(FnStage::new("exclaim", |input: &str| {
            Ok(format!("{}!", input))
        }));

        let mut pipeline = StagePipeline::new();
        assert_eq!(pipeline.run("hello", &chain), "HELLO!");
    }

    #[test]
    fn run_with_empty_chain_returns_input_unchanged() {
        let mut pipeline = StagePipeline::new();
        assert_eq!(pipeline.run("untouched", &StageChain::new()), "untouched");
    }

    #[test]
    fn each_stage_fires_exactly_one_notification() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = StagePipeline::new();
        {
            let events = events.clone();
            pipeline.on_stage_completed(move |event| events.borrow_mut().push(event.clone()));
        }

        let mut chain = uppercase_chain();
        chain.push(FnStage::new("exclaim", |input: &str| {
            Ok(format!("{}!", input))
        }));
        pipeline.run("hi", &chain);

        let events = events.borrow();
        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            StageEvent {
                stage: "upper".to_string(),
                input: "hi".to_string(),
                output: "HI".to_string(),
            }
        );
        assert_eq!(events[1].stage, "exclaim");
        assert_eq!(events[1].input, "HI");
        assert_eq!(events[1].output, "HI!");
    }

    #[test]
    fn failing_stage_becomes_placeholder_and_feeds_the_next_stage() {
        let mut chain = StageChain::new();
        chain.push(FnStage::new("reject", |_: &str| {
            Err(StageError::invalid_input("no good"))
        }));
        chain.push(FnStage::new("upper", |input: &str| Ok(input.to_uppercase())));

        let mut pipeline = StagePipeline::new();
        let result = pipeline.run("anything", &chain);

        assert_eq!(result, "[ERROR: NO GOOD]");
    }

    #[test]
    fn failing_stage_still_notifies_observers() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = StagePipeline::new();
        {
            let events = events.clone();
            pipeline.on_stage_completed(move |event| events.borrow_mut().push(event.clone()));
        }

        let mut chain = StageChain::new();
        chain.push(FnStage::new("reject", |_: &str| {
            Err(StageError::transform_failed("broken"))
        }));
        pipeline.run("in", &chain);

        let events = events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].input, "in");
        assert_eq!(events[0].output, "[Error: broken]");
    }

    #[test]
    fn stage_observers_fire_in_registration_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut pipeline = StagePipeline::new();
        for tag in ["o1", "o2"] {
            let order = order.clone();
            pipeline.on_stage_completed(move |_| order.borrow_mut().push(tag));
        }

        pipeline.run("x", &uppercase_chain());
        assert_eq!(*order.borrow(), vec!["o1", "o2"]);
    }

    #[test]
    fn removed_stage_observer_stops_receiving_events() {
        let count = Rc::new(RefCell::new(0));
        let mut pipeline = StagePipeline::new();
        let id = {
            let count = count.clone();
            pipeline.on_stage_completed(move |_| *count.borrow_mut() += 1)
        };

        let chain = uppercase_chain();
        pipeline.run("a", &chain);
        assert!(pipeline.remove_stage_observer(id));
        pipeline.run("b", &chain);

        assert_eq!(*count.borrow(), 1);
    }
}
