// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::cell::Cell;
use std::env;
use std::rc::Rc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use stagewire::calculator::EventCalculator;
use stagewire::config::{build_chain, load_and_validate_chain_config};
use stagewire::observers::{CalculationAuditor, CalculationLogger, StageLogger, StageMonitor};
use stagewire::pipeline::{StageChain, StagePipeline};
use stagewire::stages::{
    Base64EncodeStage, ChangeTextCaseStage, ReverseTextStage, StripWhitespaceStage,
    TimestampPrefixStage, ValidateInputStage,
};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();

    // No arguments: run the fixed demonstration script
    if args.len() < 2 {
        run_calculator_demo();
        run_pipeline_demo();
        return Ok(());
    }

    if args.len() < 3 {
        eprintln!("Usage: {} [chain1.yaml ...] <input_text>", args[0]);
        eprintln!("       {}            (fixed demo script)", args[0]);
        eprintln!(
            "Example: {} chains/uppercase-demo.yaml \"hello world\"",
            args[0]
        );
        std::process::exit(1);
    }

    // The last argument is the input text; everything before it is a chain file
    let input_text = &args[args.len() - 1];
    let chain_files = &args[1..args.len() - 1];

    for (i, chain_file) in chain_files.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "-".repeat(60));
        }
        run_configured_chain(chain_file, input_text)
            .with_context(|| format!("failed to execute chain '{}'", chain_file))?;
    }

    Ok(())
}

fn run_configured_chain(chain_file: &str, input_text: &str) -> anyhow::Result<()> {
    let config = load_and_validate_chain_config(chain_file)?;
    let chain = build_chain(&config)?;

    println!(
        "Chain: {} ({})",
        config.name.as_deref().unwrap_or(chain_file),
        chain.names().join(" -> ")
    );
    println!("Input:  \"{}\"", input_text);

    let mut pipeline = StagePipeline::new();
    let step = Rc::new(Cell::new(0usize));
    {
        let step = step.clone();
        pipeline.on_stage_completed(move |event| {
            step.set(step.get() + 1);
            println!("  {}. {} => \"{}\"", step.get(), event.stage, event.output);
        });
    }

    let output = pipeline.run(input_text, &chain);
    println!("Output: \"{}\"", output);

    Ok(())
}

fn run_calculator_demo() {
    println!("=== EVENT CALCULATOR ===\n");

    let mut calculator = EventCalculator::new();
    let auditor = CalculationAuditor::new();

    calculator.on_operation(CalculationLogger::operation_handler());
    calculator.on_operation(auditor.recorder());
    calculator.on_error(CalculationLogger::error_handler());
    calculator.on_operation(|event| {
        println!(
            "[LOG] {} performed: {} and {} => Result = {}",
            event.operation, event.operand1, event.operand2, event.result
        );
    });
    calculator.on_error(|error| {
        println!(
            "[ERROR] Operation '{}' failed: {}",
            error.operation, error.message
        );
    });

    calculator.add(10.0, 5.0);
    calculator.subtract(10.0, 3.0);
    calculator.multiply(4.0, 7.0);
    calculator.divide(15.0, 3.0);
    calculator.divide(10.0, 0.0); // triggers the error observers

    println!(
        "\n[STATS] Total successful operations performed: {}\n",
        auditor.operation_count()
    );
}

fn run_pipeline_demo() {
    println!("=== STAGE PIPELINE ===\n");

    let mut pipeline = StagePipeline::new();
    let monitor = StageMonitor::new();
    pipeline.on_stage_completed(StageLogger::handler());
    pipeline.on_stage_completed(monitor.recorder());
    pipeline.on_stage_completed(|event| {
        println!(
            "[LOG] Stage: {}, Input: \"{}\", Output: \"{}\"",
            event.stage, event.input, event.output
        );
    });

    let mut chain = StageChain::new();
    chain.push(ValidateInputStage::new());
    chain.push(StripWhitespaceStage::new());
    chain.push(ChangeTextCaseStage::upper());
    chain.push(TimestampPrefixStage::default());

    let input = "Hello World from Rust";
    println!("Input: {}", input);
    let result = pipeline.run(input, &chain);
    println!("Output: {}\n", result);

    // Add more stages
    chain.push(ReverseTextStage::new());
    chain.push(Base64EncodeStage::new());

    let result = pipeline.run("Extended Pipeline Test", &chain);
    println!("Extended Output: {}\n", result);

    // Remove a stage
    chain.remove_first("reverse_text");
    let result = pipeline.run("Without Reverse", &chain);
    println!("Modified Output: {}\n", result);

    println!("[STATS] Total stages executed: {}", monitor.stage_count());

    // Blank input: validation fails, the failure flows through as data
    let result = pipeline.run("", &chain);
    println!("Blank Input Result: {}", result);
}
