use std::time::{Duration, Instant};

use ads1x15_oneshot::{Ads1x15, Channel, Chip, Gain};
use clap::{Parser, value_parser};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::cli::GainArg;

#[derive(Debug, Parser)]
pub(crate) struct ReadArgs {
    /// Input to convert, 0-3 for AIN0-AIN3.
    #[arg(value_parser = value_parser!(u8).range(0..=3))]
    channel: u8,
    #[arg(short, long, value_enum, default_value_t = GainArg::Two)]
    gain: GainArg,
    /// Print volts instead of raw counts.
    #[arg(long)]
    volts: bool,
}

/// One configured conversion and how to print its result.
pub(crate) struct Reading {
    channel: Channel,
    gain: Gain,
    address: u8,
    chip: Chip,
    volts: bool,
}

impl Reading {
    pub(crate) fn new(args: &ReadArgs, address: u8, chip: Chip) -> anyhow::Result<Self> {
        Ok(Self {
            channel: Channel::try_from(args.channel)?,
            gain: args.gain.into(),
            address,
            chip,
            volts: args.volts,
        })
    }

    pub(crate) fn for_channel(
        channel: Channel,
        gain: GainArg,
        address: u8,
        chip: Chip,
        volts: bool,
    ) -> Self {
        Self {
            channel,
            gain: gain.into(),
            address,
            chip,
            volts,
        }
    }

    /// Perform the conversion and print it on one line.
    pub(crate) fn run<I, D>(&self, adc: &mut Ads1x15<I, D>) -> anyhow::Result<()>
    where
        I: I2c,
        I::Error: Send + Sync + 'static,
        D: DelayNs,
    {
        let counts = adc.read_adc(self.channel, self.gain, self.address, self.chip)?;
        println!("{}", self.format(counts));
        Ok(())
    }

    fn format(&self, counts: i16) -> String {
        let label = format!("AIN{}", self.channel.index());
        if self.volts {
            format!("{label}: {:.4}V", volts_from_counts(counts, self.gain, self.chip))
        } else {
            format!("{label}: {counts}")
        }
    }
}

/// Scale a right-justified reading by the full-scale range of `gain`.
pub(crate) fn volts_from_counts(counts: i16, gain: Gain, chip: Chip) -> f64 {
    let full_scale = f64::from(gain.full_scale_millivolts()) / 1_000.0;
    let steps = f64::from(1u32 << (chip.resolution_bits() - 1));
    f64::from(counts) * full_scale / steps
}

/// Repeat `reading` every `interval`, `count` times or until an error.
pub(crate) fn watch<I, D>(
    adc: &mut Ads1x15<I, D>,
    reading: &Reading,
    interval: Duration,
    count: Option<u64>,
) -> anyhow::Result<()>
where
    I: I2c,
    I::Error: Send + Sync + 'static,
    D: DelayNs,
{
    let mut done = 0;
    while count.is_none_or(|count| done < count) {
        let started = Instant::now();
        reading.run(adc)?;
        done += 1;
        if let Some(remaining) = interval.checked_sub(started.elapsed()) {
            std::thread::sleep(remaining);
        }
    }
    Ok(())
}
