pub(crate) fn u8_from_hex(value: &str) -> Result<u8, std::num::ParseIntError> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);
    u8::from_str_radix(digits, 16)
}
