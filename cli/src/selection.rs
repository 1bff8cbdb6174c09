//! Glob-based selection of variants from the catalogue.

use globset::{GlobBuilder, GlobMatcher};
use ipfuscator_core::{Variant, enumerate_variants};
use tracing::debug;

use crate::error::CliError;

pub struct Selector {
    matcher: GlobMatcher,
}

impl Selector {
    pub fn compile(method: &str) -> Result<Self, CliError> {
        if method.is_empty() {
            return Err(CliError::InvalidSelector {
                pattern: String::new(),
                reason: String::from("no conversion to run"),
            });
        }

        let glob = GlobBuilder::new(method)
            .literal_separator(false)
            .build()
            .map_err(|e| CliError::InvalidSelector {
                pattern: method.to_string(),
                reason: e.kind().to_string(),
            })?;

        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// A variant matches by id or by its legacy `To`-prefixed name.
    pub fn matches(&self, variant: Variant) -> bool {
        self.matcher.is_match(variant.name()) || self.matcher.is_match(variant.legacy_name())
    }

    /// Matching variants in catalogue order.
    pub fn select(&self) -> Vec<Variant> {
        let selected: Vec<Variant> = enumerate_variants()
            .iter()
            .copied()
            .filter(|variant| self.matches(*variant))
            .collect();

        debug!("'{}' selected {} method(s)", self.matcher.glob(), selected.len());
        selected
    }
}
