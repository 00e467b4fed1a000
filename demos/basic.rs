//! Basic usage example

use envload::EnvStruct;

#[derive(Debug, Default, EnvStruct)]
struct Config {
    // Loaded from DATABASE_URL, empty if unset
    #[env(name = "DATABASE_URL")]
    pub database_url: String,

    // With default value
    #[env(name = "SERVER_HOST", default = "127.0.0.1")]
    pub server_host: String,

    // Numeric type
    #[env(name = "MAX_CONNECTIONS", default = "10")]
    pub max_connections: i32,

    // Boolean type, false unless set
    #[env(name = "DEBUG_MODE")]
    pub debug_mode: bool,

    // No name: never read from the environment
    pub build_label: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Set environment variables for demonstration
    std::env::set_var("DATABASE_URL", "postgres://localhost/mydb");
    std::env::set_var("SERVER_HOST", "0.0.0.0");

    // Load configuration
    let mut config = Config {
        build_label: "dev".to_string(),
        ..Config::default()
    };
    envload::load_struct(&mut config)?;

    println!("Configuration loaded:");
    println!("  Database URL: {}", config.database_url);
    println!("  Server Host: {}", config.server_host);
    println!("  Max Connections: {}", config.max_connections);
    println!("  Debug Mode: {}", config.debug_mode);
    println!("  Build Label: {}", config.build_label);

    Ok(())
}
