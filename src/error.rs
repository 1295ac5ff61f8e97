use core::fmt;

/// Wrapper for problems when reading from an ADS1x15.
///
/// `E` is the error type of the I2C transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error<E> {
    /// The I2C transport failed to complete a write or read.
    ///
    /// This covers the target not acknowledging its address, so an absent device
    /// and a faulty bus look the same. No bus traffic follows the failed transfer.
    I2c(E),
    /// A conversion parameter was rejected before anything was sent to the device.
    InvalidSetting(InvalidSetting),
}

impl<E> From<InvalidSetting> for Error<E> {
    fn from(value: InvalidSetting) -> Self {
        Self::InvalidSetting(value)
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C transfer failed: {e:?}"),
            Error::InvalidSetting(setting) => write!(f, "{setting}"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}

/// A raw value that does not name any setting of the converter.
///
/// Returned when converting plain integers into the driver's option types, and
/// when an address does not fit in 7 bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidSetting {
    /// I2C address above `0x7F`.
    Address(u8),
    /// Single-ended channel outside `0..=3`.
    Channel(u8),
    /// Value that is not one of the six PGA field encodings.
    Gain(u16),
}

impl fmt::Display for InvalidSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidSetting::Address(a) => write!(f, "address {a:#04x} is not a 7-bit I2C address"),
            InvalidSetting::Channel(c) => write!(f, "channel {c} is not one of AIN0-AIN3"),
            InvalidSetting::Gain(g) => write!(f, "{g:#06x} is not a PGA gain setting"),
        }
    }
}

impl core::error::Error for InvalidSetting {}
