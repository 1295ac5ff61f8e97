use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use crate::Error;
use crate::config::{Channel, Chip, Config, Gain, check_address};
use crate::registers::pointer;

#[cfg(feature = "async")]
mod asynch;
mod shared;

#[cfg(feature = "async")]
pub use asynch::read_adc_async;
pub use shared::SharedAds1x15;

/// Perform one single-shot conversion and return the signed result.
///
/// Every parameter is required on every call, since the device cannot be relied on
/// to hold a previous configuration. The sequence is:
///
/// 1. Write the config pointer and the configuration word (3 bytes).
/// 2. Wait the chip's worst-case conversion time.
/// 3. Write the conversion pointer (1 byte).
/// 4. Read the 2-byte big-endian result.
///
/// ADS1015 results are shifted right by 4 (keeping the sign) so they are returned
/// as 12-bit values in the range `-2048..=2047`. The result is in raw counts; use
/// [`Gain::full_scale_millivolts`] and [`Chip::resolution_bits`] to convert.
///
/// # Errors
///
/// An address above `0x7F` is rejected with [`Error::InvalidSetting`] before the
/// bus is touched. Any transfer failure is returned as [`Error::I2c`] at once, and
/// the remaining steps are not performed.
///
/// # Datasheet
///
/// See section 9.5.3 ("Reading and Writing Registers") and section 9.4.2
/// ("Single-Shot Mode").
pub fn read_adc<I, D>(
    i2c: &mut I,
    delay: &mut D,
    channel: Channel,
    gain: Gain,
    address: u8,
    chip: Chip,
) -> Result<i16, Error<I::Error>>
where
    I: I2c,
    D: DelayNs,
{
    let address = check_address(address)?;
    let config = Config::single_shot(channel, gain, chip);
    tracing::debug!(
        address,
        ?chip,
        ?channel,
        ?gain,
        config = config.bits(),
        "starting single-shot conversion"
    );

    i2c.write(address, &config_request(config)).map_err(Error::I2c)?;

    let delay_ms = chip.conversion_delay_ms();
    tracing::trace!(delay_ms, "waiting for conversion");
    delay.delay_ms(delay_ms);

    i2c.write(address, &[pointer::CONVERSION]).map_err(Error::I2c)?;
    let mut buf = [0u8; 2];
    i2c.read(address, &mut buf).map_err(Error::I2c)?;

    let sample = decode_sample(buf, chip);
    tracing::trace!(raw = u16::from_be_bytes(buf), sample, "conversion read");
    Ok(sample)
}

/// Bytes of the configuration write: the config pointer then the word, MSB first.
///
/// Transports with a fixed transfer width may need to pad this, but the device
/// itself only expects these three bytes.
pub(crate) fn config_request(config: Config) -> [u8; 3] {
    let [high, low] = config.to_be_bytes();
    [pointer::CONFIG, high, low]
}

/// Interpret the conversion register contents for `chip`.
pub(crate) fn decode_sample(buf: [u8; 2], chip: Chip) -> i16 {
    // Shifting an i16 is arithmetic, so the sign is kept.
    i16::from_be_bytes(buf) >> chip.result_shift()
}

/// Driver for an ADS1115 or ADS1015 owning its I2C transport and delay.
///
/// This holds no device state: the bus address, chip and conversion options are
/// all given to [`Ads1x15::read_adc`] on each call. Because the struct takes `&mut
/// self`, one value cannot run two conversions at once. To share a bus between
/// threads, use [`SharedAds1x15`].
///
/// ```no_run
/// # use ads1x15_oneshot::{Ads1x15, Address, Channel, Chip, Gain};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let i2c = linux_embedded_hal::I2cdev::new("/dev/i2c-1")?;
/// let mut adc = Ads1x15::new(i2c, linux_embedded_hal::Delay);
/// let counts = adc.read_adc(Channel::Ain0, Gain::One, Address::Gnd.into(), Chip::Ads1115)?;
/// println!("AIN0: {counts}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Ads1x15<I, D> {
    i2c: I,
    delay: D,
}

impl<I, D> Ads1x15<I, D>
where
    I: I2c,
    D: DelayNs,
{
    /// Create the driver from an I2C transport and a delay provider.
    pub fn new(i2c: I, delay: D) -> Self {
        Self { i2c, delay }
    }

    /// Perform one single-shot conversion. See [`read_adc`].
    pub fn read_adc(
        &mut self,
        channel: Channel,
        gain: Gain,
        address: u8,
        chip: Chip,
    ) -> Result<i16, Error<I::Error>> {
        read_adc(&mut self.i2c, &mut self.delay, channel, gain, address, chip)
    }

    /// Give back the transport and delay.
    pub fn release(self) -> (I, D) {
        (self.i2c, self.delay)
    }
}
