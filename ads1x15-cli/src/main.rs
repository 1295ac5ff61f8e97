use std::time::Duration;

use ads1x15_oneshot::{Ads1x15, Channel, Chip};
use anyhow::Context;
use clap::Parser;
use linux_embedded_hal::{Delay, I2cdev};
use tracing_subscriber::EnvFilter;

use cli::Commands;
use read::Reading;

mod cli;
mod read;
mod util;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose);

    let i2c = I2cdev::new(&cli.bus)
        .with_context(|| format!("could not open I2C bus {}", cli.bus.display()))?;
    let mut adc = Ads1x15::new(i2c, Delay);
    let chip: Chip = cli.chip.into();
    tracing::debug!(bus = %cli.bus.display(), address = cli.address, ?chip, "opened bus");

    match cli.command {
        Commands::Read(args) => Reading::new(&args, cli.address, chip)?.run(&mut adc)?,
        Commands::ScanChannels { gain, volts } => {
            for channel in Channel::all() {
                Reading::for_channel(channel, gain, cli.address, chip, volts).run(&mut adc)?;
            }
        }
        Commands::Watch {
            read,
            interval_ms,
            count,
        } => {
            let reading = Reading::new(&read, cli.address, chip)?;
            read::watch(
                &mut adc,
                &reading,
                Duration::from_millis(interval_ms),
                count,
            )?;
        }
    }
    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` if set, otherwise by the verbosity flag.
fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
