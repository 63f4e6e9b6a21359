// ============================================================================
// Basic Usage Example
// ============================================================================

use memory_calculator::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Memory Calculator Example ===\n");

    let mut acc = AccumulatorBuilder::new()
        .event_handler(Arc::new(LoggingEventHandler))
        .build()
        .expect("standard configuration is valid");

    println!("{}", acc);

    println!("\nArithmetic...");
    for (label, result) in [
        ("add(3)", acc.add(3)),
        ("divide(2)", acc.divide(2)),
        ("multiply(-4)", acc.multiply(-4)),
        ("subtract(0.54)", acc.subtract(0.54)),
    ] {
        match result {
            Ok(value) => println!("  {:<16} -> {}", label, value),
            Err(e) => println!("  {:<16} -> error: {}", label, e),
        }
    }
    println!("{}", acc);

    println!("\nRoots...");
    acc.set_value(-8).expect("integer value is numeric");
    match acc.root(-3) {
        Ok(value) => println!("  root(-3) of -8    -> {}", value),
        Err(e) => println!("  root(-3) of -8    -> error: {}", e),
    }
    acc.set_value(-16).expect("integer value is numeric");
    if let Err(e) = acc.root(-4) {
        println!("  root(-4) of -16   -> error: {} ({:?})", e, e.kind());
    }

    println!("\nRejected input...");
    if let Err(e) = acc.divide(0) {
        println!("  divide(0)         -> error: {}", e);
    }
    if let Err(e) = acc.set_value("teststring") {
        println!("  set_value(str)    -> error: {}", e);
    }
    if let Err(e) = acc.set_precision(17) {
        println!("  set_precision(17) -> error: {}", e);
    }
    println!("{}", acc);

    println!("\nShared between threads...");
    let shared = SharedAccumulator::new(Accumulator::default());
    let handles: Vec<_> = (1..=4)
        .map(|i| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.add(i))
        })
        .collect();
    for handle in handles {
        let _ = handle.join();
    }
    println!("{}", shared);

    println!("\nReset -> {}", acc.reset());
    println!("\n=== Example Complete ===");
}
