//! Serialized access to one bus from several threads.
use std::sync::{Mutex, PoisonError};

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::Ads1x15;
use crate::Error;
use crate::config::{Channel, Chip, Gain};

/// [`Ads1x15`] behind a mutex, for sharing between threads.
///
/// The device holds only one pending conversion, so the lock is held for the
/// whole configure, wait, select, read sequence rather than per transfer (as, for
/// example, `embedded_hal_bus::i2c::MutexDevice` would do). Calls made while a
/// conversion is in progress block until it finishes.
///
/// This takes `&self`, so it can be put in an `Arc` or borrowed by scoped threads.
#[derive(Debug)]
pub struct SharedAds1x15<I, D> {
    inner: Mutex<Ads1x15<I, D>>,
}

impl<I, D> SharedAds1x15<I, D>
where
    I: I2c,
    D: DelayNs,
{
    /// Create the shared driver from an I2C transport and a delay provider.
    pub fn new(i2c: I, delay: D) -> Self {
        Self {
            inner: Mutex::new(Ads1x15::new(i2c, delay)),
        }
    }

    /// Perform one single-shot conversion with exclusive use of the bus.
    ///
    /// See [`read_adc`](super::read_adc) for the sequence and errors.
    pub fn read_adc(
        &self,
        channel: Channel,
        gain: Gain,
        address: u8,
        chip: Chip,
    ) -> Result<i16, Error<I::Error>> {
        // A panic in another caller can only have left the device mid-sequence, and
        // the next configuration write replaces the whole register.
        let mut adc = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        adc.read_adc(channel, gain, address, chip)
    }

    /// Give back the transport and delay.
    pub fn release(self) -> (I, D) {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
            .release()
    }
}
