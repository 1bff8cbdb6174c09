//! The fixed, ordered catalogue of variants and dispatch to their generators.

use std::fmt;
use std::str::FromStr;

use crate::entropy::{self, Entropy};
use crate::error::UnknownVariant;
use crate::octets::OctetModel;
use crate::variants;

/// Prefix carried by the method names of earlier releases (`ToHex`, ...).
pub const LEGACY_PREFIX: &str = "To";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Variant {
    BaseWithPadding,
    CircledDigits,
    Decimal,
    Hex,
    HexWithPadding,
    IPv6CompatibleV4,
    NoZeros,
    Octal,
    OctalWithPadding,
    Rand8Bits,
    RandBase,
    RandBaseWithPadding,
}

impl Variant {
    /// Every variant, ordered by id.
    pub const ALL: [Variant; 12] = [
        Variant::BaseWithPadding,
        Variant::CircledDigits,
        Variant::Decimal,
        Variant::Hex,
        Variant::HexWithPadding,
        Variant::IPv6CompatibleV4,
        Variant::NoZeros,
        Variant::Octal,
        Variant::OctalWithPadding,
        Variant::Rand8Bits,
        Variant::RandBase,
        Variant::RandBaseWithPadding,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Variant::BaseWithPadding => "BaseWithPadding",
            Variant::CircledDigits => "CircledDigits",
            Variant::Decimal => "Decimal",
            Variant::Hex => "Hex",
            Variant::HexWithPadding => "HexWithPadding",
            Variant::IPv6CompatibleV4 => "IPv6CompatibleV4",
            Variant::NoZeros => "NoZeros",
            Variant::Octal => "Octal",
            Variant::OctalWithPadding => "OctalWithPadding",
            Variant::Rand8Bits => "Rand8Bits",
            Variant::RandBase => "RandBase",
            Variant::RandBaseWithPadding => "RandBaseWithPadding",
        }
    }

    /// The name this variant had as a method, e.g. `ToHex`.
    pub fn legacy_name(self) -> String {
        format!("{LEGACY_PREFIX}{}", self.name())
    }

    /// Whether rendering draws from an entropy source.
    pub const fn is_randomised(self) -> bool {
        matches!(
            self,
            Variant::Rand8Bits
                | Variant::HexWithPadding
                | Variant::OctalWithPadding
                | Variant::BaseWithPadding
                | Variant::RandBase
                | Variant::RandBaseWithPadding
        )
    }

    /// Renders with the process-wide entropy source.
    pub fn render(self, model: &OctetModel) -> String {
        self.render_with(model, entropy::global())
    }

    pub fn render_with(self, model: &OctetModel, entropy: &dyn Entropy) -> String {
        match self {
            Variant::BaseWithPadding => variants::base_with_padding(model, entropy),
            Variant::CircledDigits => variants::circled_digits(model),
            Variant::Decimal => variants::decimal(model),
            Variant::Hex => variants::hex(model),
            Variant::HexWithPadding => variants::hex_with_padding(model, entropy),
            Variant::IPv6CompatibleV4 => variants::ipv6_compatible_v4(model),
            Variant::NoZeros => variants::no_zeros(model),
            Variant::Octal => variants::octal(model),
            Variant::OctalWithPadding => variants::octal_with_padding(model, entropy),
            Variant::Rand8Bits => variants::rand_8bits(model, entropy),
            Variant::RandBase => variants::rand_base(model, entropy),
            Variant::RandBaseWithPadding => variants::rand_base_with_padding(model, entropy),
        }
    }
}

/// All variant ids in their stable order.
pub fn enumerate_variants() -> &'static [Variant] {
    &Variant::ALL
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Variant {
    type Err = UnknownVariant;

    /// Case-insensitive lookup by id, with or without the legacy `To` prefix.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Variant::ALL
            .into_iter()
            .find(|variant| {
                name.eq_ignore_ascii_case(variant.name())
                    || name.eq_ignore_ascii_case(&variant.legacy_name())
            })
            .ok_or_else(|| UnknownVariant(s.to_string()))
    }
}
