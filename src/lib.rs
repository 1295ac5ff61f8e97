#![doc = include_str!("../README.md")]
#![deny(missing_docs)]
#![deny(unsafe_code)]

mod config;
mod driver;
mod error;
pub mod registers;

pub use config::{Address, Channel, Chip, Config, Gain};
#[cfg(feature = "async")]
pub use driver::read_adc_async;
pub use driver::{Ads1x15, SharedAds1x15, read_adc};
pub use error::{Error, InvalidSetting};
