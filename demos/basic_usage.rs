// ============================================================================
// Basic Usage Example
// ============================================================================

use price_guard::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt::init();

    println!("=== Price Guard Example ===\n");

    // A static source standing in for a live oracle reader: 42.0 reported
    // at t=1_700_000_000 with 8 fractional digits
    let source = StaticSource::new(RawReading::new(4_200_000_000, 1_700_000_000, 8));

    let guard = PriceGuardBuilder::new()
        .stale_after(300)
        .build(Box::new(source));

    println!("Reading 100 seconds after the report...");
    match guard.read_at(1_700_000_100) {
        Ok(price) => println!("  normalized price: {} (raw {})", price, price.raw_value()),
        Err(err) => println!("  rejected: {}", err),
    }

    println!("\nReading 10 minutes after the report...");
    match guard.read_at(1_700_000_600) {
        Ok(price) => println!("  normalized price: {}", price),
        Err(err) => println!("  rejected: {}", err),
    }

    // The pure path, for callers that already hold a reading
    println!("\nNormalizing a zero value...");
    let reading = RawReading::new(0, 1_700_000_000, 8);
    let ctx = ValidationContext::new(1_700_000_000, 300);
    match normalize(&reading, &ctx) {
        Ok(price) => println!("  normalized price: {}", price),
        Err(err) => println!("  rejected: {}", err),
    }
}
