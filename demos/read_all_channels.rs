//! Read all four single-ended inputs of an ADS1115 on a Linux I2C bus.
//!
//! Run this on a board with the converter wired to `/dev/i2c-1` (the default bus
//! on a Raspberry Pi header) and its ADDR pin tied to GND.
//!
//! Each reading is a separate single-shot conversion, so the four channels are
//! not sampled at the same instant: with the ADS1115 at 128 SPS each conversion
//! takes about 9ms, and the whole loop roughly 40ms.
use ads1x15_oneshot::{Address, Ads1x15, Channel, Chip, Gain};
use linux_embedded_hal::{Delay, I2cdev};

/// ±4.096V full scale, which suits inputs from a 3.3V supply.
const GAIN: Gain = Gain::One;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let i2c = I2cdev::new("/dev/i2c-1")?;
    let mut adc = Ads1x15::new(i2c, Delay);

    for channel in Channel::all() {
        let counts = adc.read_adc(channel, GAIN, Address::Gnd.into(), Chip::Ads1115)?;
        println!(
            "AIN{}: {counts:>6}    {:.4}V",
            channel.index(),
            volts_from_counts(counts)
        );
    }

    Ok(())
}

/// Scale a 16-bit reading by the full-scale range of the chosen gain.
///
/// Positive full scale is one count short of the range, so the largest reading
/// at gain 1 is 32767 counts, or just under 4.096V.
fn volts_from_counts(counts: i16) -> f32 {
    let full_scale = GAIN.full_scale_millivolts() as f32 / 1_000.0;
    f32::from(counts) * full_scale / 32_768.0
}
