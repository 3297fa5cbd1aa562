// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::error::Error;
use streamguard::classify::ClassifierPolicy;
use streamguard::config::consts::DEFAULT_LOG_FILTER;
use streamguard::config::{load_and_validate_config, Runtime, RuntimeBuilder, Strategy};
use streamguard::context::CollectingContext;
use streamguard::converters::DeadLetterFormat;
use streamguard::decorators::{ErrorCapturing, ErrorDescribing, ErrorLogging};
use streamguard::observability::messages::config::ConfigLoaded;
use streamguard::observability::messages::StructuredLog;
use streamguard::record::{Record, RecordMetadata};
use streamguard::stage::{self, MapValues};
use streamguard::traits::FixedKeyProcessor;
use streamguard::{Fault, ProcessingFailure};
use tracing_subscriber::EnvFilter;

const INPUT_TOPIC: &str = "demo-input";

type ParseStage = MapValues<fn(&String) -> Result<u64, Fault>>;

/// Demo stage: every input must be a quantity, which is doubled.
fn parse_quantity(value: &String) -> Result<u64, Fault> {
    let quantity = value.trim().parse::<u64>()?;
    Ok(quantity * 2)
}

fn demo_stage() -> ParseStage {
    stage::map_values(parse_quantity as fn(&String) -> Result<u64, Fault>)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <config.yaml> <value> [value ...]", args[0]);
        eprintln!("Example: {} configs/capture.yaml 1 2 three 4", args[0]);
        eprintln!("Example: {} configs/headers.yaml 10 ten", args[0]);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let inputs = &args[2..];

    if let Err(e) = run(config_file, inputs) {
        eprintln!("Failed to run {}: {}", config_file, e);
        std::process::exit(1);
    }
}

fn run(config_file: &str, inputs: &[String]) -> Result<(), Box<dyn Error>> {
    let config = load_and_validate_config(config_file)?;
    let runtime = RuntimeBuilder::from_config(&config);

    let loaded = ConfigLoaded {
        path: config_file,
        description: &runtime.description,
        strategy: runtime.strategy.as_str(),
        classifier: runtime.classifier.as_str(),
    };
    let span = loaded.span("demo");
    let _guard = span.enter();

    println!("Configuration: {}", config_file);
    println!("Strategy: {}", runtime.strategy.as_str());
    println!("Classifier: {}", runtime.classifier.as_str());
    println!();

    let records = inputs
        .iter()
        .enumerate()
        .map(|(offset, value)| (offset as i64, value.clone()))
        .collect::<Vec<_>>();

    match runtime.strategy {
        Strategy::Capture => run_capture(&runtime, records),
        Strategy::LogAndDrop => run_log_and_drop(runtime.classifier, records),
        Strategy::Describe => run_describe(records),
        Strategy::Headers => run_headers(&runtime, records),
    }
}

fn metadata(offset: i64) -> RecordMetadata {
    RecordMetadata::new(INPUT_TOPIC, 0, offset)
}

fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Split each record's outcomes into the success stream and the error stream.
fn capture_all(
    classifier: ClassifierPolicy,
    records: Vec<(i64, String)>,
) -> Result<(Vec<(i64, u64)>, Vec<(i64, ProcessingFailure<String>)>), Fault> {
    let mut decorated = ErrorCapturing::new(demo_stage()).with_classifier(classifier);
    let mut successes = Vec::new();
    let mut failures = Vec::new();

    for (key, value) in records {
        for outcome in decorated.apply(key, value)? {
            match outcome.into_error() {
                Ok(values) => successes.extend(values.into_iter().map(|v| (key, v))),
                Err(failure) => failures.push(failure),
            }
        }
    }
    Ok((successes, failures))
}

fn run_capture(runtime: &Runtime, records: Vec<(i64, String)>) -> Result<(), Box<dyn Error>> {
    let (successes, failures) = capture_all(runtime.classifier, records)?;

    println!("Outputs:");
    for (key, value) in successes {
        println!("  {} -> {}", key, value);
    }

    let mut processor = runtime.dead_letter_processor();
    let mut context: CollectingContext<i64, Vec<u8>> =
        CollectingContext::new(RecordMetadata::unavailable());

    println!("Dead letters:");
    for (key, failure) in failures {
        context.set_metadata(metadata(key));
        context.set_system_time_ms(now_ms());
        processor.process(&Record::new(key, failure, now_ms()), &mut context)?;
    }
    for dead_letter in context.take_forwarded() {
        match runtime.converter.format() {
            DeadLetterFormat::Json => {
                println!("  {} -> {}", dead_letter.key, String::from_utf8_lossy(&dead_letter.value))
            }
            DeadLetterFormat::Protobuf => {
                println!("  {} -> {} protobuf bytes", dead_letter.key, dead_letter.value.len())
            }
        }
    }
    Ok(())
}

fn run_log_and_drop(
    classifier: ClassifierPolicy,
    records: Vec<(i64, String)>,
) -> Result<(), Box<dyn Error>> {
    let mut decorated = ErrorLogging::new(demo_stage()).with_classifier(classifier);

    println!("Outputs:");
    for (key, value) in records {
        if let Some(doubled) = decorated.apply(&key, &value)? {
            println!("  {} -> {}", key, doubled);
        }
    }
    Ok(())
}

fn run_describe(records: Vec<(i64, String)>) -> Result<(), Box<dyn Error>> {
    let mut decorated = ErrorDescribing::new(demo_stage());

    println!("Outputs:");
    for (key, value) in records {
        match decorated.apply(&key, &value) {
            Ok(Some(doubled)) => println!("  {} -> {}", key, doubled),
            Ok(None) => {}
            Err(fault) => {
                println!("  {} failed: {}", key, fault);
                if let Some(source) = fault.source() {
                    println!("      caused by: {}", source);
                }
            }
        }
    }
    Ok(())
}

fn run_headers(runtime: &Runtime, records: Vec<(i64, String)>) -> Result<(), Box<dyn Error>> {
    let (successes, failures) = capture_all(runtime.classifier, records)?;

    println!("Outputs:");
    for (key, value) in successes {
        println!("  {} -> {}", key, value);
    }

    let mut processor = runtime.header_processor();
    let mut context: CollectingContext<i64, String> =
        CollectingContext::new(RecordMetadata::unavailable());

    println!("Tagged failures:");
    for (key, failure) in failures {
        context.set_metadata(metadata(key));
        processor.process(&Record::new(key, failure, now_ms()), &mut context)?;
    }
    for tagged in context.take_forwarded() {
        println!("  {} -> {}", tagged.key, tagged.value);
        for header in tagged.headers.iter() {
            let value = header
                .value
                .as_deref()
                .map(String::from_utf8_lossy)
                .unwrap_or_default();
            println!("      {} = {}", header.key, value.lines().next().unwrap_or_default());
        }
    }
    Ok(())
}
