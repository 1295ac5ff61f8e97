//! Register map of the ADS1x15 family.
//!
//! The ADS1115 and ADS1015 share one register map and differ only in result width,
//! available data rates and, as a consequence, worst-case conversion time. Values
//! here are bit-for-bit those of the datasheets; a wrong value does not fail loudly,
//! it just skews every reading.
//!
//! # Datasheet
//!
//! See section 9.6 ("Register Map") of either the ADS1115 or ADS1015 datasheet.

/// Address pointer register values.
///
/// The first byte of every write selects which of the four registers subsequent
/// bytes (and subsequent reads) refer to. See table 8-3 ("Address Pointer Register
/// Field Descriptions").
pub mod pointer {
    /// Conversion register, holding the result of the last conversion.
    pub const CONVERSION: u8 = 0x00;
    /// Config register, holding the 16-bit configuration word.
    pub const CONFIG: u8 = 0x01;
    /// Comparator low threshold register.
    pub const LOW_THRESHOLD: u8 = 0x02;
    /// Comparator high threshold register.
    pub const HIGH_THRESHOLD: u8 = 0x03;
    /// Only the two low bits of the pointer byte are significant.
    pub const MASK: u8 = 0x03;
}

/// Config register fields.
///
/// Each field has a mask and one or more values already shifted into position, so
/// that a configuration word is a plain bitwise OR of the values.
pub mod config {
    use core::ops::RangeInclusive;

    /// Operational status bit (bit 15).
    ///
    /// Writing 1 while in single-shot mode starts a single conversion. Reads return
    /// 0 while a conversion is in progress.
    pub const OS_MASK: u16 = 0x8000;
    /// Start a single conversion.
    pub const OS_SINGLE: u16 = 0x8000;

    /// Input multiplexer (bits 14:12).
    pub const MUX_MASK: u16 = 0x7000;
    /// Bit range of the multiplexer field.
    pub const MUX_BITS: RangeInclusive<usize> = 12..=14;
    /// AIN0 measured against GND.
    pub const MUX_SINGLE_0: u16 = 0x4000;
    /// AIN1 measured against GND.
    pub const MUX_SINGLE_1: u16 = 0x5000;
    /// AIN2 measured against GND.
    pub const MUX_SINGLE_2: u16 = 0x6000;
    /// AIN3 measured against GND.
    pub const MUX_SINGLE_3: u16 = 0x7000;

    /// Programmable gain amplifier (bits 11:9).
    pub const PGA_MASK: u16 = 0x0E00;
    /// Bit range of the gain field.
    pub const PGA_BITS: RangeInclusive<usize> = 9..=11;
    /// ±6.144 V full scale (gain 2/3).
    pub const PGA_6_144V: u16 = 0x0000;
    /// ±4.096 V full scale (gain 1).
    pub const PGA_4_096V: u16 = 0x0200;
    /// ±2.048 V full scale (gain 2).
    pub const PGA_2_048V: u16 = 0x0400;
    /// ±1.024 V full scale (gain 4).
    pub const PGA_1_024V: u16 = 0x0600;
    /// ±0.512 V full scale (gain 8).
    pub const PGA_0_512V: u16 = 0x0800;
    /// ±0.256 V full scale (gain 16).
    pub const PGA_0_256V: u16 = 0x0A00;

    /// Operating mode (bit 8).
    pub const MODE_MASK: u16 = 0x0100;
    /// Continuous conversion mode.
    pub const MODE_CONTINUOUS: u16 = 0x0000;
    /// Power-down single-shot mode (power-on default).
    pub const MODE_SINGLE_SHOT: u16 = 0x0100;

    /// Data rate (bits 7:5).
    pub const DR_MASK: u16 = 0x00E0;
    /// Bit range of the data rate field.
    pub const DR_BITS: RangeInclusive<usize> = 5..=7;
    /// ADS1015: 128 samples per second, its lowest rate.
    pub const DR_ADS1015_128SPS: u16 = 0x0000;
    /// ADS1115: 128 samples per second.
    pub const DR_ADS1115_128SPS: u16 = 0x0080;

    /// Comparator mode (bit 4).
    pub const COMP_MODE_MASK: u16 = 0x0010;
    /// Traditional comparator with hysteresis (default).
    pub const COMP_MODE_TRADITIONAL: u16 = 0x0000;

    /// Comparator polarity (bit 3).
    pub const COMP_POL_MASK: u16 = 0x0008;
    /// ALERT/RDY pin is low when active (default).
    pub const COMP_POL_ACTIVE_LOW: u16 = 0x0000;

    /// Latching comparator (bit 2).
    pub const COMP_LAT_MASK: u16 = 0x0004;
    /// Non-latching comparator (default).
    pub const COMP_LAT_NON_LATCHING: u16 = 0x0000;

    /// Comparator queue and disable (bits 1:0).
    pub const COMP_QUE_MASK: u16 = 0x0003;
    /// Disable the comparator and put ALERT/RDY in the high state (default).
    pub const COMP_QUE_DISABLE: u16 = 0x0003;

    /// Fixed comparator settings used for every single-shot conversion.
    ///
    /// The comparator is never used by this driver, so it is disabled with all of
    /// its other fields left at their power-on values.
    pub const COMPARATOR_DISABLED: u16 =
        COMP_QUE_DISABLE | COMP_LAT_NON_LATCHING | COMP_POL_ACTIVE_LOW | COMP_MODE_TRADITIONAL;
}

/// Conversion timing and result layout for the ADS1115.
pub mod ads1115 {
    /// Worst-case conversion time at 128 SPS, in milliseconds, with margin.
    pub const CONVERSION_DELAY_MS: u32 = 9;
    /// The conversion register holds a full 16-bit result.
    pub const RESULT_SHIFT: u32 = 0;
}

/// Conversion timing and result layout for the ADS1015.
pub mod ads1015 {
    /// Worst-case conversion time at 128 SPS, in milliseconds, with margin.
    pub const CONVERSION_DELAY_MS: u32 = 7;
    /// The 12-bit result is left-justified in the conversion register.
    pub const RESULT_SHIFT: u32 = 4;
}
