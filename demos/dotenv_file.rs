//! Example demonstrating `.env` file loading
//!
//! Variables already present in the process environment win over the file.

use envload::EnvStruct;
use std::io::Write;

#[derive(Debug, Default, EnvStruct)]
struct Config {
    #[env(name = "APP_NAME", default = "unnamed")]
    pub app_name: String,

    #[env(name = "APP_PORT", default = "8080")]
    pub app_port: i32,

    #[env(name = "APP_FEATURES")]
    pub app_features: Vec<i32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Write a temporary env file and point ENV_FILE at it
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "APP_NAME=demo")?;
    writeln!(file, "APP_PORT=9000")?;
    writeln!(file, "APP_FEATURES=1,2,3")?;
    std::env::set_var(envload::ENV_FILE_KEY, file.path());

    // Already set, so the file's APP_PORT is ignored
    std::env::set_var("APP_PORT", "9443");

    let path = envload::load()?;

    let mut config = Config::default();
    envload::load_struct(&mut config)?;

    println!("Configuration loaded from {}:", path.display());
    println!("  App Name: {}", config.app_name);
    println!("  App Port: {}", config.app_port);
    println!("  App Features: {:?}", config.app_features);

    Ok(())
}
