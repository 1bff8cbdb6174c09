use ipfuscator_core::{Variant, variants};

use crate::util::{self, models};

#[test]
fn decimal_round_trips() {
    for model in models() {
        let value: u32 = variants::decimal(&model).parse().expect("not a u32");
        assert_eq!(value.to_be_bytes(), model.octets());
    }
}

#[test]
fn hex_tokens_reparse() {
    for model in models() {
        let output = variants::hex(&model);
        let tokens = util::split_octets(&output);
        assert_eq!(tokens.len(), 4, "{output}");

        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(util::parse_hex(token), Some(model.octet(i)), "{output}");
        }
    }
}

#[test]
fn octal_has_single_leading_zero() {
    for model in models() {
        let output = variants::octal(&model);
        let stripped = output.strip_prefix('0').expect("missing leading zero");
        let tokens = util::split_octets(stripped);
        assert_eq!(tokens.len(), 4, "{output}");

        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(util::parse_octal(token), Some(model.octet(i)), "{output}");
        }
    }
}

#[test]
fn no_zeros_reinserts_to_canonical() {
    for model in models() {
        let output = variants::no_zeros(&model);
        assert!(!output.contains(".."), "{output}");
        assert!(!output.starts_with('.') && !output.ends_with('.'), "{output}");

        if model.octets() == [0, 0, 0, 0] {
            assert_eq!(output, "0");
            continue;
        }

        let mut kept = output.split('.');
        assert!(output.split('.').all(|token| token != "0"), "{output}");

        let rebuilt: Vec<String> = model
            .octets()
            .iter()
            .map(|&octet| match octet {
                0 => String::from("0"),
                _ => kept.next().expect("too few tokens").to_string(),
            })
            .collect();
        assert!(kept.next().is_none(), "{output}");
        assert_eq!(rebuilt.join("."), model.to_string());
    }
}

#[test]
fn circled_digits_replace_every_digit() {
    for model in models() {
        let canonical = model.to_string();
        let output = variants::circled_digits(&model);

        assert_eq!(output.chars().count(), canonical.chars().count());
        assert!(!output.chars().any(|c| c.is_ascii_digit()), "{output}");

        for (original, circled) in canonical.chars().zip(output.chars()) {
            match original {
                '.' => assert_eq!(circled, '.'),
                '0' => assert_eq!(circled, '\u{24EA}'),
                digit => {
                    let offset = digit.to_digit(10).expect("digit") - 1;
                    assert_eq!(u32::from(circled), 0x2460 + offset);
                }
            }
        }
    }
}

#[test]
fn ipv6_compatible_wraps_canonical() {
    for model in models() {
        assert_eq!(
            variants::ipv6_compatible_v4(&model),
            format!("[::ffff:{}]", model.addr())
        );
    }
}

#[test]
fn pure_variants_are_stable() {
    for model in models() {
        for variant in Variant::ALL.into_iter().filter(|v| !v.is_randomised()) {
            let first = variant.render(&model);
            for _ in 0..3 {
                assert_eq!(variant.render(&model), first, "{variant}");
            }
        }
    }
}
