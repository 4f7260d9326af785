use std::path::PathBuf;

use clap::Parser;

use www_router::config::{load_config, load_from_env};
use www_router::tenants::{self, Tenant};

#[derive(Parser)]
#[command(name = "www-routes")]
#[command(about = "Print the route table of each tenant", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(short, long, default_value = "config/www.toml")]
    config: PathBuf,

    /// Only print this tenant (corporate, service, staff).
    #[arg(short, long)]
    tenant: Option<Tenant>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = if cli.config.exists() {
        load_config(&cli.config)?
    } else {
        load_from_env()?
    };

    for table in tenants::build_tables(&config)? {
        if cli.tenant.is_some_and(|t| t != table.tenant()) {
            continue;
        }

        let host = config
            .hosts
            .for_tenant(table.tenant())
            .unwrap_or("(unbound)");
        println!("{} [{}]", table.tenant(), host);
        for route in table.routes() {
            println!("  {}", route);
        }
        println!();
    }

    Ok(())
}
