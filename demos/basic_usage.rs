//! Basic logger usage example
//!
//! Demonstrates both formats, request metadata, error values and an extra
//! file sink.
//!
//! Run with: cargo run --example basic_usage

use bitnacle::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn main() -> Result<()> {
    println!("=== Bitnacle - Basic Usage Example ===\n");

    // Default simple format, console only
    let logger = Logger::new(LoggerOptions::default())?;

    println!("1. Logging at different levels (ERROR goes to stderr):");
    logger.debug("This is a debug message", None)?;
    logger.info("This is an info message", None)?;
    logger.warning("This is a warning message", None)?;
    logger.error("This is an error message", None)?;

    println!("\n2. Request metadata and extra fields:");
    let extra_info = json!({
        "req": {"method": "GET", "originalUrl": "/users/42", "ip": "127.0.0.1", "id": "req-1"},
        "extra": {"status": 200, "cache": "hit"},
    });
    logger.info("Request handled", Some(&extra_info))?;

    println!("\n3. Error values:");
    let err = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml not found");
    logger.error(Message::from_error(&err), None)?;

    println!("\n4. JSON format with a file sink:");
    let path = std::env::temp_dir().join("bitnacle-demo.log");
    let file = Arc::new(FileSink::open(&path)?);
    let json_logger = Logger::builder().format("json").stream(file.clone()).build()?;
    json_logger.info("Written to stdout and the file", Some(&extra_info))?;
    file.close()?;
    println!("   (also appended to {})", path.display());

    println!("\n5. Rejected configuration:");
    if let Err(e) = Logger::new(LoggerOptions::new().with_format("extended")) {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
