//! # ipfuscator-core
//!
//! Alternative textual representations of a single IPv4 address.
//!
//! * **[`octets`]**: the [`OctetModel`], built once per address. All failure happens here.
//! * **[`entropy`]**: the randomness used by padding and random-base variants.
//! * **[`variants`]**: one generator function per representation.
//! * **[`catalogue`]**: the ordered [`Variant`] ids and dispatch to the generators.
//!
//! ```
//! use ipfuscator_core::{OctetModel, Variant};
//!
//! let model: OctetModel = "192.168.0.1".parse().unwrap();
//! assert_eq!(model.render(Variant::Hex), "0xc0.0xa8.0x0.0x1");
//! ```

pub mod catalogue;
pub mod entropy;
pub mod error;
pub mod octets;
pub mod variants;

pub use catalogue::{Variant, enumerate_variants};
pub use entropy::{Entropy, SeededEntropy};
pub use error::{InvalidAddress, UnknownVariant};
pub use octets::{OctetModel, build};
