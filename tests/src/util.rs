use ipfuscator_core::OctetModel;

/// Addresses covering zero octets, all-ones, and every position of a zero.
pub const ADDRESSES: &[[u8; 4]] = &[
    [0, 0, 0, 0],
    [255, 255, 255, 255],
    [192, 168, 0, 1],
    [127, 0, 0, 1],
    [10, 0, 13, 37],
    [0, 1, 2, 3],
    [1, 0, 2, 0],
    [8, 8, 8, 8],
    [172, 16, 254, 1],
    [100, 64, 7, 128],
];

pub fn models() -> impl Iterator<Item = OctetModel> {
    ADDRESSES.iter().map(|octets| OctetModel::from(*octets))
}

/// Parses a `0x`-prefixed hex octet.
pub fn parse_hex(token: &str) -> Option<u8> {
    u8::from_str_radix(token.strip_prefix("0x")?, 16).ok()
}

/// Parses octal digits; padding zeros are allowed.
pub fn parse_octal(token: &str) -> Option<u8> {
    u8::from_str_radix(token, 8).ok()
}

pub fn parse_decimal(token: &str) -> Option<u8> {
    token.parse::<u8>().ok()
}

pub fn split_octets(output: &str) -> Vec<&str> {
    output.split('.').collect()
}
