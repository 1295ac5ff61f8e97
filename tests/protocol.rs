//! Bus-level behaviour of a conversion, checked against a recording mock transport.
use std::sync::{Arc, Mutex};

use ads1x15_oneshot::{
    Ads1x15, Channel, Chip, Config, Error, Gain, InvalidSetting, SharedAds1x15, read_adc,
};
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{self, ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Write(u8, Vec<u8>),
    DelayMs(u32),
    Read(u8, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MockError;

impl i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)
    }
}

/// Records every transfer and delay into a log shared between clones.
#[derive(Clone)]
struct MockBus {
    log: Arc<Mutex<Vec<Event>>>,
    /// Value returned by reads of the conversion register.
    sample: [u8; 2],
    /// Fail the nth transfer (0-based), counting writes and reads.
    fail_at: Option<usize>,
    transfers: usize,
}

impl MockBus {
    fn new(sample: [u8; 2]) -> Self {
        Self {
            log: Arc::new(Mutex::new(Vec::new())),
            sample,
            fail_at: None,
            transfers: 0,
        }
    }

    fn events(&self) -> Vec<Event> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, event: Event) {
        self.log.lock().unwrap().push(event);
    }

    fn next_transfer_fails(&mut self) -> bool {
        let n = self.transfers;
        self.transfers += 1;
        self.fail_at == Some(n)
    }
}

impl ErrorType for MockBus {
    type Error = MockError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        for op in operations {
            if self.next_transfer_fails() {
                return Err(MockError);
            }
            match op {
                Operation::Write(bytes) => self.record(Event::Write(address, bytes.to_vec())),
                Operation::Read(buf) => {
                    buf.copy_from_slice(&self.sample);
                    self.record(Event::Read(address, buf.len()));
                }
            }
        }
        Ok(())
    }
}

impl DelayNs for MockBus {
    fn delay_ns(&mut self, ns: u32) {
        self.record(Event::DelayMs(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(Event::DelayMs(ms));
        // Give other threads the chance to interleave, as a real wait would.
        std::thread::yield_now();
    }
}

fn chips() -> [Chip; 2] {
    [Chip::Ads1115, Chip::Ads1015]
}

#[test]
fn full_sequence_for_ads1115() {
    let mut bus = MockBus::new([0x12, 0x34]);
    let mut delay = bus.clone();
    let sample = read_adc(&mut bus, &mut delay, Channel::Ain0, Gain::One, 0x48, Chip::Ads1115);
    assert_eq!(sample, Ok(0x1234));
    assert_eq!(
        bus.events(),
        vec![
            Event::Write(0x48, vec![0x01, 0xC3, 0x83]),
            Event::DelayMs(9),
            Event::Write(0x48, vec![0x00]),
            Event::Read(0x48, 2),
        ]
    );
}

#[test]
fn full_sequence_for_ads1015() {
    let mut bus = MockBus::new([0x12, 0x34]);
    let mut delay = bus.clone();
    let sample = read_adc(&mut bus, &mut delay, Channel::Ain3, Gain::Sixteen, 0x4B, Chip::Ads1015);
    assert_eq!(sample, Ok(0x123));
    assert_eq!(
        bus.events(),
        vec![
            Event::Write(0x4B, vec![0x01, 0xFB, 0x03]),
            Event::DelayMs(7),
            Event::Write(0x4B, vec![0x00]),
            Event::Read(0x4B, 2),
        ]
    );
}

#[test]
fn written_bytes_reassemble_into_predicted_word() {
    for chip in chips() {
        let mut combinations = 0;
        for channel in Channel::all() {
            for gain in Gain::all() {
                let mut bus = MockBus::new([0, 0]);
                let mut delay = bus.clone();
                read_adc(&mut bus, &mut delay, channel, gain, 0x48, chip).unwrap();

                let events = bus.events();
                let Event::Write(_, bytes) = &events[0] else {
                    panic!("first event must be the config write");
                };
                assert_eq!(bytes.len(), 3, "pointer and two config bytes, no padding");
                assert_eq!(bytes[0], 0x01);
                let word = u16::from_be_bytes([bytes[1], bytes[2]]);
                assert_eq!(word, Config::single_shot(channel, gain, chip).bits());
                combinations += 1;
            }
        }
        assert_eq!(combinations, 24, "every channel and gain for {chip:?}");
    }
}

#[test]
fn delay_follows_chip() {
    for (chip, expected) in [(Chip::Ads1115, 9), (Chip::Ads1015, 7)] {
        let mut bus = MockBus::new([0, 0]);
        let mut delay = bus.clone();
        read_adc(&mut bus, &mut delay, Channel::Ain1, Gain::Two, 0x48, chip).unwrap();
        assert_eq!(bus.events()[1], Event::DelayMs(expected));
    }
}

#[test]
fn sign_is_preserved() {
    let cases = [
        ([0x80, 0x00], Chip::Ads1115, -32768),
        ([0x80, 0x00], Chip::Ads1015, -2048),
        ([0x7F, 0xF0], Chip::Ads1015, 2047),
        ([0xFF, 0xFF], Chip::Ads1115, -1),
    ];
    for (raw, chip, expected) in cases {
        let mut adc = Ads1x15::new(MockBus::new(raw), MockBus::new(raw));
        assert_eq!(
            adc.read_adc(Channel::Ain0, Gain::TwoThirds, 0x48, chip),
            Ok(expected)
        );
    }
}

#[test]
fn config_write_failure_stops_the_sequence() {
    let mut bus = MockBus::new([0x7F, 0xFF]);
    bus.fail_at = Some(0);
    let mut delay = bus.clone();
    let result = read_adc(&mut bus, &mut delay, Channel::Ain0, Gain::One, 0x48, Chip::Ads1115);
    assert_eq!(result, Err(Error::I2c(MockError)));
    assert!(bus.events().is_empty(), "no delay, pointer write or read");
}

#[test]
fn pointer_write_failure_skips_the_read() {
    let mut bus = MockBus::new([0x7F, 0xFF]);
    bus.fail_at = Some(1);
    let mut delay = bus.clone();
    let result = read_adc(&mut bus, &mut delay, Channel::Ain0, Gain::One, 0x48, Chip::Ads1015);
    assert_eq!(result, Err(Error::I2c(MockError)));
    assert_eq!(bus.events().len(), 2, "config write and delay only");
}

#[test]
fn read_failure_is_reported() {
    let mut bus = MockBus::new([0x7F, 0xFF]);
    bus.fail_at = Some(2);
    let mut delay = bus.clone();
    let result = read_adc(&mut bus, &mut delay, Channel::Ain0, Gain::One, 0x48, Chip::Ads1115);
    assert_eq!(result, Err(Error::I2c(MockError)));
}

#[test]
fn out_of_range_address_never_reaches_the_bus() {
    let mut bus = MockBus::new([0, 0]);
    let mut delay = bus.clone();
    let result = read_adc(&mut bus, &mut delay, Channel::Ain0, Gain::One, 0x80, Chip::Ads1115);
    assert_eq!(
        result,
        Err(Error::InvalidSetting(InvalidSetting::Address(0x80)))
    );
    assert!(bus.events().is_empty());
}

#[test]
fn shared_driver_never_interleaves_calls() {
    const READS: usize = 25;

    let bus = MockBus::new([0x01, 0x00]);
    let adc = SharedAds1x15::new(bus.clone(), bus.clone());

    // One thread per channel, so each call is identified by its mux field.
    std::thread::scope(|s| {
        for channel in Channel::all() {
            let adc = &adc;
            s.spawn(move || {
                for _ in 0..READS {
                    let sample = adc.read_adc(channel, Gain::Two, 0x48, Chip::Ads1115);
                    assert_eq!(sample, Ok(0x0100));
                }
            });
        }
    });

    let events = bus.events();
    assert_eq!(events.len(), 4 * READS * 4);
    let mut per_channel = [0; 4];
    for call in events.chunks(4) {
        let [
            Event::Write(_, config),
            Event::DelayMs(9),
            Event::Write(_, pointer),
            Event::Read(_, 2),
        ] = call
        else {
            panic!("interleaved sequence: {call:?}");
        };
        assert_eq!(pointer, &vec![0x00]);
        let word = u16::from_be_bytes([config[1], config[2]]);
        let channel = Config::from_bits(word).channel().unwrap();
        per_channel[channel.index() as usize] += 1;
    }
    assert_eq!(per_channel, [READS; 4]);
}
