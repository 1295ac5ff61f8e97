//! Conversion options and the configuration word built from them.

use bit_field::BitField;

use crate::error::InvalidSetting;
use crate::registers::{ads1015, ads1115, config};

/// Which member of the ADS1x15 family is on the bus.
///
/// Both parts share a register map, but the ADS1015 produces 12-bit results
/// left-justified in the 16-bit conversion register and converts faster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chip {
    /// 16-bit ADS1115.
    Ads1115,
    /// 12-bit ADS1015.
    Ads1015,
}

impl Chip {
    /// Time to wait after starting a conversion before the result is valid.
    ///
    /// The data rate is always fixed to 128 SPS, the ADS1015's slowest rate, so a
    /// single constant per chip covers every conversion.
    pub fn conversion_delay_ms(self) -> u32 {
        match self {
            Chip::Ads1115 => ads1115::CONVERSION_DELAY_MS,
            Chip::Ads1015 => ads1015::CONVERSION_DELAY_MS,
        }
    }

    /// Arithmetic right shift applied to the raw conversion register.
    pub fn result_shift(self) -> u32 {
        match self {
            Chip::Ads1115 => ads1115::RESULT_SHIFT,
            Chip::Ads1015 => ads1015::RESULT_SHIFT,
        }
    }

    /// Width of a right-justified result, sign bit included.
    pub fn resolution_bits(self) -> u32 {
        16 - self.result_shift()
    }

    /// Data rate field encoding 128 samples per second on this chip.
    pub fn data_rate(self) -> u16 {
        match self {
            Chip::Ads1115 => config::DR_ADS1115_128SPS,
            Chip::Ads1015 => config::DR_ADS1015_128SPS,
        }
    }
}

/// Programmable gain amplifier setting.
///
/// Each case is named for its gain; the input range it gives is reported by
/// [`Gain::full_scale_millivolts`]. Note that no input may exceed VDD + 0.3V
/// whatever the full-scale range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gain {
    /// Gain 2/3, ±6.144V.
    TwoThirds,
    /// Gain 1, ±4.096V.
    One,
    /// Gain 2, ±2.048V (power-on default).
    Two,
    /// Gain 4, ±1.024V.
    Four,
    /// Gain 8, ±0.512V.
    Eight,
    /// Gain 16, ±0.256V.
    Sixteen,
}

impl Gain {
    /// Every gain setting, from widest to narrowest input range.
    pub fn all() -> impl Iterator<Item = Self> {
        [
            Self::TwoThirds,
            Self::One,
            Self::Two,
            Self::Four,
            Self::Eight,
            Self::Sixteen,
        ]
        .into_iter()
    }

    /// Magnitude of the full-scale input range in millivolts.
    pub fn full_scale_millivolts(self) -> u32 {
        match self {
            Gain::TwoThirds => 6_144,
            Gain::One => 4_096,
            Gain::Two => 2_048,
            Gain::Four => 1_024,
            Gain::Eight => 512,
            Gain::Sixteen => 256,
        }
    }
}

impl From<Gain> for u16 {
    /// Convert a [`Gain`] into its PGA field, already in position.
    fn from(value: Gain) -> Self {
        match value {
            Gain::TwoThirds => config::PGA_6_144V,
            Gain::One => config::PGA_4_096V,
            Gain::Two => config::PGA_2_048V,
            Gain::Four => config::PGA_1_024V,
            Gain::Eight => config::PGA_0_512V,
            Gain::Sixteen => config::PGA_0_256V,
        }
    }
}

impl TryFrom<u16> for Gain {
    type Error = InvalidSetting;

    /// Interpret a positioned PGA field (as found in a configuration word masked
    /// with [`config::PGA_MASK`]).
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            config::PGA_6_144V => Ok(Self::TwoThirds),
            config::PGA_4_096V => Ok(Self::One),
            config::PGA_2_048V => Ok(Self::Two),
            config::PGA_1_024V => Ok(Self::Four),
            config::PGA_0_512V => Ok(Self::Eight),
            config::PGA_0_256V => Ok(Self::Sixteen),
            other => Err(InvalidSetting::Gain(other)),
        }
    }
}

/// Single-ended analog input, measured against GND.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Channel {
    Ain0,
    Ain1,
    Ain2,
    Ain3,
}

impl Channel {
    /// Iterate over all channels.
    pub fn all() -> impl Iterator<Item = Self> {
        [Self::Ain0, Self::Ain1, Self::Ain2, Self::Ain3].into_iter()
    }

    /// Input number, as in the pin name (AIN0 is 0).
    pub fn index(self) -> u8 {
        match self {
            Channel::Ain0 => 0,
            Channel::Ain1 => 1,
            Channel::Ain2 => 2,
            Channel::Ain3 => 3,
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = InvalidSetting;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Ain0),
            1 => Ok(Self::Ain1),
            2 => Ok(Self::Ain2),
            3 => Ok(Self::Ain3),
            other => Err(InvalidSetting::Channel(other)),
        }
    }
}

impl From<Channel> for u16 {
    /// Convert a [`Channel`] into its single-ended multiplexer field, already in
    /// position.
    fn from(value: Channel) -> Self {
        match value {
            Channel::Ain0 => config::MUX_SINGLE_0,
            Channel::Ain1 => config::MUX_SINGLE_1,
            Channel::Ain2 => config::MUX_SINGLE_2,
            Channel::Ain3 => config::MUX_SINGLE_3,
        }
    }
}

/// I2C address selected by the connection of the ADDR pin.
///
/// The driver accepts any 7-bit address, these are just the four the chips can
/// be strapped to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Address {
    /// ADDR connected to GND, 0x48.
    #[default]
    Gnd,
    /// ADDR connected to VDD, 0x49.
    Vdd,
    /// ADDR connected to SDA, 0x4A.
    Sda,
    /// ADDR connected to SCL, 0x4B.
    Scl,
}

impl From<Address> for u8 {
    fn from(value: Address) -> Self {
        match value {
            Address::Gnd => 0x48,
            Address::Vdd => 0x49,
            Address::Sda => 0x4A,
            Address::Scl => 0x4B,
        }
    }
}

/// Check that `address` fits in 7 bits.
pub(crate) fn check_address(address: u8) -> Result<u8, InvalidSetting> {
    if address <= 0x7F {
        Ok(address)
    } else {
        Err(InvalidSetting::Address(address))
    }
}

/// Configuration word for one single-shot conversion.
///
/// Built fresh for every read and never stored. The field accessors exist so the
/// word can be inspected (in logs and tests) without repeating the masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config(u16);

impl Config {
    /// Assemble the word that starts a single-shot conversion of `channel`.
    ///
    /// The comparator is disabled, the data rate fixed at 128 SPS, and the
    /// operational status bit, which starts the conversion, is set last.
    pub fn single_shot(channel: Channel, gain: Gain, chip: Chip) -> Self {
        let mut word = config::COMPARATOR_DISABLED | config::MODE_SINGLE_SHOT;
        word |= chip.data_rate();
        word |= u16::from(gain);
        word |= u16::from(channel);
        word |= config::OS_SINGLE;
        Self(word)
    }

    /// Wrap a raw word, for example one read back from the config register.
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    /// The raw 16-bit word.
    pub fn bits(self) -> u16 {
        self.0
    }

    /// The word as transmitted, most significant byte first.
    pub fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Whether the word starts a conversion.
    pub fn start_requested(self) -> bool {
        self.0.get_bit(15)
    }

    /// Single-ended input selected by the multiplexer field.
    ///
    /// `None` if the multiplexer is set to a differential pair.
    pub fn channel(self) -> Option<Channel> {
        match self.0.get_bits(config::MUX_BITS) {
            0b100 => Some(Channel::Ain0),
            0b101 => Some(Channel::Ain1),
            0b110 => Some(Channel::Ain2),
            0b111 => Some(Channel::Ain3),
            _ => None,
        }
    }

    /// Gain selected by the PGA field.
    pub fn gain(self) -> Result<Gain, InvalidSetting> {
        Gain::try_from(self.0 & config::PGA_MASK)
    }

    /// Whether the device is put in power-down single-shot mode.
    pub fn single_shot_mode(self) -> bool {
        self.0.get_bit(8)
    }

    /// Unshifted data rate field (0-7).
    pub fn data_rate_field(self) -> u16 {
        self.0.get_bits(config::DR_BITS)
    }

    /// Unshifted comparator queue field. 0b11 disables the comparator.
    pub fn comparator_queue(self) -> u16 {
        self.0.get_bits(0..=1)
    }
}

impl From<Config> for u16 {
    fn from(value: Config) -> Self {
        value.0
    }
}
