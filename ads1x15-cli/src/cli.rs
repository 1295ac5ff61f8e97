use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::read::ReadArgs;
use crate::util;

/// CLI for the ADS1115 and ADS1015 analog-to-digital converters
///
/// Each reading is a single-shot conversion of one single-ended input (AIN0-AIN3
/// against GND), with the comparator disabled and the data rate fixed at 128
/// samples per second. Results are printed as raw signed counts, 16-bit for the
/// ADS1115 and 12-bit for the ADS1015, or in volts with --volts.
///
/// Set RUST_LOG (for example RUST_LOG=ads1x15_oneshot=trace) to see the bus
/// transfers of each conversion.
#[derive(Debug, Parser)]
#[command(version, about)]
pub(crate) struct Cli {
    /// I2C character device the converter is attached to
    #[arg(short, long, default_value = "/dev/i2c-1")]
    pub(crate) bus: PathBuf,
    /// 7-bit device address in hexadecimal (0x48-0x4B depending on ADDR)
    #[arg(short, long, default_value = "0x48", value_parser = util::u8_from_hex)]
    pub(crate) address: u8,
    /// Converter model
    #[arg(short, long, value_enum, default_value_t = ChipArg::Ads1115)]
    pub(crate) chip: ChipArg,
    /// Log protocol detail to stderr (repeat for every transfer)
    #[arg(short, long, action = ArgAction::Count)]
    pub(crate) verbose: u8,
    #[command(subcommand)]
    pub(crate) command: Commands,
}

#[derive(Debug, Parser)]
pub(crate) enum Commands {
    /// Convert one input once.
    Read(ReadArgs),
    /// Convert each of AIN0-AIN3 once.
    ScanChannels {
        #[arg(short, long, value_enum, default_value_t = GainArg::Two)]
        gain: GainArg,
        /// Print volts instead of raw counts.
        #[arg(long)]
        volts: bool,
    },
    /// Convert one input repeatedly.
    Watch {
        #[command(flatten)]
        read: ReadArgs,
        /// Time between the start of each conversion.
        #[arg(short, long, default_value_t = 1_000)]
        interval_ms: u64,
        /// Stop after this many readings.
        #[arg(short = 'n', long)]
        count: Option<u64>,
    },
}

/// Converter model.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum ChipArg {
    /// 16-bit ADS1115
    Ads1115,
    /// 12-bit ADS1015
    Ads1015,
}

impl From<ChipArg> for ads1x15_oneshot::Chip {
    fn from(value: ChipArg) -> Self {
        match value {
            ChipArg::Ads1115 => ads1x15_oneshot::Chip::Ads1115,
            ChipArg::Ads1015 => ads1x15_oneshot::Chip::Ads1015,
        }
    }
}

/// PGA gain, named for the gain itself.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub(crate) enum GainArg {
    /// ±6.144V
    #[value(name = "2/3")]
    TwoThirds,
    /// ±4.096V
    #[value(name = "1")]
    One,
    /// ±2.048V
    #[value(name = "2")]
    Two,
    /// ±1.024V
    #[value(name = "4")]
    Four,
    /// ±0.512V
    #[value(name = "8")]
    Eight,
    /// ±0.256V
    #[value(name = "16")]
    Sixteen,
}

impl From<GainArg> for ads1x15_oneshot::Gain {
    fn from(value: GainArg) -> Self {
        use ads1x15_oneshot::Gain;
        match value {
            GainArg::TwoThirds => Gain::TwoThirds,
            GainArg::One => Gain::One,
            GainArg::Two => Gain::Two,
            GainArg::Four => Gain::Four,
            GainArg::Eight => Gain::Eight,
            GainArg::Sixteen => Gain::Sixteen,
        }
    }
}
