//! The variant generators.
//!
//! Every function here is infallible. Pure generators only read the
//! [`OctetModel`]; the padding and random-base ones also draw from an
//! [`Entropy`] source.

use std::net::Ipv4Addr;

use crate::entropy::Entropy;
use crate::octets::{HEX_PREFIX, OctetModel};

/// Upper bound (exclusive) of the random zero-run length, before the `+1`.
const MAX_PADDING: u32 = 30;

/// `⓪` followed by `①`..`⑨`.
const CIRCLED_DIGITS: [char; 10] = [
    '\u{24EA}', '\u{2460}', '\u{2461}', '\u{2462}', '\u{2463}', '\u{2464}', '\u{2465}',
    '\u{2466}', '\u{2467}', '\u{2468}',
];

/// The whole address as one unsigned 32-bit integer.
pub fn decimal(model: &OctetModel) -> String {
    u32::from(model.addr()).to_string()
}

pub fn hex(model: &OctetModel) -> String {
    model.hexes().join(".")
}

/// Octal octets with a single leading `0` before the whole address.
pub fn octal(model: &OctetModel) -> String {
    format!("0{}", model.octals().join("."))
}

pub fn ipv6_compatible_v4(model: &OctetModel) -> String {
    format!("[::ffff:{model}]")
}

/// Drops zero octets along with their separators.
///
/// `0.0.0.0` has nothing left to keep and renders as `"0"` so the output is never empty.
pub fn no_zeros(model: &OctetModel) -> String {
    let kept: Vec<&str> = model
        .octets()
        .iter()
        .zip(model.decimals())
        .filter(|(octet, _)| **octet != 0)
        .map(|(_, dec)| dec.as_str())
        .collect();

    if kept.is_empty() {
        return String::from("0");
    }
    kept.join(".")
}

pub fn circled_digits(model: &OctetModel) -> String {
    model
        .to_string()
        .chars()
        .map(|c| match c.to_digit(10) {
            Some(digit) => CIRCLED_DIGITS[digit as usize],
            None => c,
        })
        .collect()
}

/// Keeps the first three octets and replaces the last with a draw from `[0, 255)`.
pub fn rand_8bits(model: &OctetModel, entropy: &dyn Entropy) -> String {
    let [a, b, c, _] = model.octets();
    let d = entropy.uniform_below(u32::from(u8::MAX)) as u8;
    Ipv4Addr::new(a, b, c, d).to_string()
}

pub fn hex_with_padding(model: &OctetModel, entropy: &dyn Entropy) -> String {
    join_octets(|i, out| {
        out.push_str(HEX_PREFIX);
        push_padding(out, entropy);
        out.push_str(model.hex_digits(i));
    })
}

pub fn octal_with_padding(model: &OctetModel, entropy: &dyn Entropy) -> String {
    join_octets(|i, out| {
        push_padding(out, entropy);
        out.push_str(model.octal(i));
    })
}

/// Decimal octets where every zero octet gets an extra run of zeros.
pub fn base_with_padding(model: &OctetModel, entropy: &dyn Entropy) -> String {
    join_octets(|i, out| {
        if model.octet(i) == 0 {
            push_padding(out, entropy);
        }
        out.push_str(model.decimal(i));
    })
}

/// Picks decimal, hex or octal independently for each octet.
pub fn rand_base(model: &OctetModel, entropy: &dyn Entropy) -> String {
    join_octets(|i, out| match entropy.uniform_below(3) {
        0 => out.push_str(model.decimal(i)),
        1 => out.push_str(model.hex(i)),
        _ => {
            if i == 0 {
                out.push('0');
            }
            out.push_str(model.octal(i));
        }
    })
}

pub fn rand_base_with_padding(model: &OctetModel, entropy: &dyn Entropy) -> String {
    match entropy.uniform_below(3) {
        0 => base_with_padding(model, entropy),
        1 => hex_with_padding(model, entropy),
        _ => octal_with_padding(model, entropy),
    }
}

/// Exactly `k` ASCII zeros.
pub fn zeros(k: usize) -> String {
    "0".repeat(k)
}

fn push_padding(out: &mut String, entropy: &dyn Entropy) {
    let k = entropy.uniform_below(MAX_PADDING) + 1;
    out.push_str(&zeros(k as usize));
}

fn join_octets<F>(mut write_octet: F) -> String
where
    F: FnMut(usize, &mut String),
{
    let mut out = String::with_capacity(64);
    for i in 0..4 {
        if i > 0 {
            out.push('.');
        }
        write_octet(i, &mut out);
    }
    out
}
