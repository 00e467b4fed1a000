//! Example demonstrating the standalone accessors
//!
//! These never fail: unset, empty or invalid values fall back to the default.
//! Run with `RUST_LOG=warn` to see the discarded values.

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    std::env::set_var("PORT", "not_a_number");
    std::env::set_var("VERBOSE", "T");
    std::env::set_var("PORTS", "8080, 8081, 8082");
    std::env::set_var("REGION", "");

    println!("Standalone accessors:");
    println!("  Region: {}", envload::get("REGION", "eu-west-1"));
    println!("  Port: {}", envload::get_int("PORT", 3000));
    println!("  Verbose: {}", envload::get_bool("VERBOSE", false));
    println!("  Timeout: {}", envload::get_int64("TIMEOUT_MS", 30_000));
    println!("  Ports: {:?}", envload::get_int_slice("PORTS", vec![3000, 3001]));
    println!(
        "  Max Sizes: {:?}",
        envload::get_int64_slice("MAX_SIZES", vec![512, 1024])
    );
    println!("  Hosts: {:?}", envload::to_list("a.example;b.example", ";"));
}
