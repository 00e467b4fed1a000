//! Example demonstrating integer lists and fixed-size arrays

use envload::EnvStruct;

#[derive(Debug, Default, EnvStruct)]
struct Config {
    // Comma-separated, any length
    #[env(name = "WORKER_PORTS", default = "9000,9001")]
    pub worker_ports: Vec<i32>,

    // 64-bit elements; empty elements read as 0
    #[env(name = "CACHE_SIZES")]
    pub cache_sizes: Vec<i64>,

    // Exactly three elements required
    #[env(name = "RGB", default = "255,255,255")]
    pub rgb: [i32; 3],
}

fn main() -> anyhow::Result<()> {
    std::env::set_var("CACHE_SIZES", "1024, ,4096");
    std::env::set_var("RGB", " 12, 34 ,56");

    let mut config = Config::default();
    envload::load_struct(&mut config)?;

    println!("Collections:");
    println!("  Worker Ports: {:?}", config.worker_ports);
    println!("  Cache Sizes: {:?}", config.cache_sizes);
    println!("  RGB: {:?}", config.rgb);

    // A wrong element count is an error that names the variable
    std::env::set_var("RGB", "1,2");
    if let Err(e) = envload::load_struct(&mut config) {
        println!("  Error: {}", e);
    }

    Ok(())
}
