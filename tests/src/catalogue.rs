use std::collections::HashSet;

use ipfuscator_core::{SeededEntropy, Variant, enumerate_variants};

use crate::util::models;

#[test]
fn catalogue_lists_twelve_unique_ids() {
    let ids: HashSet<&str> = enumerate_variants().iter().map(|v| v.name()).collect();
    assert_eq!(ids.len(), 12);

    for expected in [
        "Decimal",
        "Hex",
        "Octal",
        "IPv6CompatibleV4",
        "NoZeros",
        "CircledDigits",
        "Rand8Bits",
        "HexWithPadding",
        "OctalWithPadding",
        "BaseWithPadding",
        "RandBase",
        "RandBaseWithPadding",
    ] {
        assert!(ids.contains(expected), "missing {expected}");
    }
}

#[test]
fn enumeration_order_is_stable() {
    assert_eq!(enumerate_variants(), enumerate_variants());
    assert_eq!(enumerate_variants().first(), Some(&Variant::BaseWithPadding));
    assert_eq!(enumerate_variants().last(), Some(&Variant::RandBaseWithPadding));
}

#[test]
fn every_variant_renders_non_empty_without_whitespace() {
    let entropy = SeededEntropy::from_seed(2024);
    for model in models() {
        for variant in Variant::ALL {
            for _ in 0..10 {
                let output = variant.render_with(&model, &entropy);
                assert!(!output.is_empty(), "{variant} on {model}");
                assert!(
                    !output.chars().any(char::is_whitespace),
                    "{variant} on {model}: {output:?}"
                );
            }
        }
    }
}

#[test]
fn render_from_threads() {
    let model = std::sync::Arc::new(models().nth(2).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let model = model.clone();
            std::thread::spawn(move || {
                Variant::ALL
                    .into_iter()
                    .map(|variant| model.render(variant))
                    .collect::<Vec<String>>()
            })
        })
        .collect();

    for handle in handles {
        let outputs = handle.join().unwrap();
        assert_eq!(outputs.len(), Variant::ALL.len());
        assert!(outputs.iter().all(|o| !o.is_empty()));
    }
}
