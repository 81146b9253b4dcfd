#[macro_use]
extern crate clap;

use {
    anyhow::Result,
    dns_config::{
        config::{resolve_config, SimulationConfig},
        parameters::Parameters,
        regime::Regime,
    },
    log::{error, info},
    simplelog::{Config as LogConfig, LevelFilter, TermLogger, TerminalMode},
    std::{env, fs::File, io::prelude::*},
};

#[quit::main]
fn main() {
    let matches = clap_app!(dns_config =>
        (version: crate_version!())
        (about: "Resolves the parameter set for the pseudo-spectral DNS solver.")
        (@arg REGIME: -r --regime +takes_value "Name of a built-in regime. Falls back to the DNS_REGIME environment variable.")
        (@arg PARAMETERS: -p --parameters +takes_value conflicts_with[REGIME] "Path to a YAML file containing simulation parameters.")
        (@arg OUTPUT: -o --output +takes_value "Write the resolved configuration to this YAML file.")
        (@subcommand regimes =>
            (about: "Lists the built-in regimes.")
        )
    )
    .get_matches();

    TermLogger::init(
        LevelFilter::Debug,
        LogConfig::default(),
        TerminalMode::Mixed,
    )
    .expect("Failed to initialize logger");

    if matches.subcommand_matches("regimes").is_some() {
        list_regimes();
        return;
    }

    let config = {
        let resolved = if let Some(path) = matches.value_of("PARAMETERS") {
            let parameters = Parameters::from_file(path).unwrap_or_else(|e| {
                error!("{:#}", e);
                quit::with_code(1);
            });
            SimulationConfig::resolve(&parameters)
        } else {
            let name = matches
                .value_of("REGIME")
                .map(str::to_string)
                .or_else(|| env::var("DNS_REGIME").ok())
                .unwrap_or_else(|| {
                    error!("No regime selected: pass --regime or set DNS_REGIME");
                    quit::with_code(1);
                });
            resolve_config(&name)
        };

        resolved.unwrap_or_else(|e| {
            error!("Error: \"{}\"", e);
            quit::with_code(1);
        })
    };

    info!("Resolved simulation configuration: \n{:#?}", config);

    if let Some(path) = matches.value_of("OUTPUT") {
        write_config(path, &config).unwrap_or_else(|e| {
            error!("Failed to write {}: \"{}\"", path, e);
            quit::with_code(1);
        });
        info!("Wrote resolved configuration to \"{}\"", path);
    }
}

fn list_regimes() {
    for regime in &Regime::ALL {
        // Built-in regimes are valid by construction
        let config = resolve_config(regime.name()).unwrap_or_else(|e| {
            error!("Error: \"{}\"", e);
            quit::with_code(1);
        });

        println!(
            "{:<13} {:>4}^3  Re={:<6} dt={:<12} nt={:<5} n_save={:<4} k_max={} ({} rule)",
            regime.name(),
            config.nx,
            config.re,
            config.dt,
            config.nt,
            config.n_save,
            config.k_max,
            config.dealias,
        );
    }
}

fn write_config(path: &str, config: &SimulationConfig) -> Result<()> {
    let mut f = File::create(path)?;
    f.write_all(serde_yaml::to_string(config)?.as_bytes())?;
    Ok(())
}
