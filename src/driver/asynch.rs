//! Async conversion over embedded-hal-async traits.
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::i2c::I2c;

use super::{config_request, decode_sample};
use crate::Error;
use crate::config::{Channel, Chip, Config, Gain, check_address};
use crate::registers::pointer;

/// Perform one single-shot conversion over an async transport.
///
/// The sequence, result and errors are those of [`read_adc`](super::read_adc); the
/// conversion delay is awaited instead of blocking. Dropping the future part way
/// through leaves the device with a conversion configured but unread, which the
/// next call overwrites.
pub async fn read_adc_async<I, D>(
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

    i2c.write(address, &config_request(config))
        .await
        .map_err(Error::I2c)?;

    let delay_ms = chip.conversion_delay_ms();
    tracing::trace!(delay_ms, "waiting for conversion");
    delay.delay_ms(delay_ms).await;

    i2c.write(address, &[pointer::CONVERSION])
        .await
        .map_err(Error::I2c)?;
    let mut buf = [0u8; 2];
    i2c.read(address, &mut buf).await.map_err(Error::I2c)?;

    let sample = decode_sample(buf, chip);
    tracing::trace!(raw = u16::from_be_bytes(buf), sample, "conversion read");
    Ok(sample)
}
