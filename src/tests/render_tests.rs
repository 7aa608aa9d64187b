// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::catalogue::Catalogue;
use crate::config::GeneratorConfig;
use crate::fxp::qformat::RoundingPolicy;
use crate::render::{float_literal, TableRenderer};
use crate::types::constant::NamedConstant;
use crate::types::format::FixedPointFormat;
use crate::types::quantized::Classification;

fn q(frac_bits: u32) -> FixedPointFormat {
    FixedPointFormat::new(frac_bits).unwrap()
}

fn entry(name: &str, value: &str) -> String {
    format!("{:<35}{:<20}", name, value)
}

fn render_block(renderer: &TableRenderer, format: FixedPointFormat) -> String {
    let mut buf = Vec::new();
    renderer.render_format(&mut buf, format).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn test_float_literal() {
    assert_eq!(float_literal(1.0), "1.0");
    assert_eq!(float_literal(-16384.0), "-16384.0");
    assert_eq!(float_literal(16383.5), "16383.5");
    assert_eq!(float_literal(1.0 / 32768.0), "0.000030517578125");
    assert_eq!(float_literal(0.0), "0.0");
}

#[test]
fn test_render_format_header() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);

    let mut buf = Vec::new();
    renderer.render_format_header(&mut buf, q(1)).unwrap();
    let text = String::from_utf8(buf).unwrap();

    let expected = [
        entry("#define FP16_Q1", "(1)"),
        entry("#define FP16_Q1_PREC", "(0.5)"),
        entry("#define FP16_Q1_MAX", "(16383.5)"),
        entry("#define FP16_Q1_MIN", "(-16384.0)"),
    ];
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_render_q0_header_values() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);
    let block = render_block(&renderer, q(0));

    assert!(block.contains(&entry("#define FP16_Q0_PREC", "(1.0)")));
    assert!(block.contains(&entry("#define FP16_Q0_MAX", "(32767.0)")));
    assert!(block.contains(&entry("#define FP16_Q0_MIN", "(-32768.0)")));
}

#[test]
fn test_render_one_half_at_q1() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);
    let block = render_block(&renderer, q(1));

    let line = format!("{}// 0.5", entry("#define FP16_Q1_ONE_HALF", "(1)"));
    assert!(block.lines().any(|l| l == line), "missing line: {line}");
}

#[test]
fn test_overflow_uses_alternate_prefix() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);
    let block = render_block(&renderer, q(15));

    let pi = format!("{}// 3.1416015625", entry("#define FP32_Q15_M_PI", "(102944)"));
    assert!(block.lines().any(|l| l == pi));

    let one = format!("{}// 1.0", entry("#define FP32_Q15_ONE", "(32768)"));
    assert!(block.lines().any(|l| l == one));

    let minus_one = format!("{}// -1.0", entry("#define FP16_Q15_MINUS_ONE", "(-32768)"));
    assert!(block.lines().any(|l| l == minus_one));

    assert!(!block.contains("FP16_Q15_M_PI "));
}

#[test]
fn test_block_layout() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);
    let block = render_block(&renderer, q(3));
    let lines: Vec<&str> = block.split('\n').collect();

    let separator = format!("// {}", "-".repeat(74));
    assert_eq!(lines[0], separator);
    assert!(lines[1].starts_with("#define FP16_Q3 "));
    assert!(lines[4].starts_with("#define FP16_Q3_MIN"));
    assert_eq!(lines[5], separator);
    assert!(lines[6].starts_with("#define FP16_Q3_M_E "));
    assert!(lines[35].starts_with("#define FP16_Q3_MINUS_ONE "));
    // Two blank lines close the block
    assert_eq!(&lines[36..], &["", "", ""]);
    assert!(block.ends_with("\n\n\n"));
}

#[test]
fn test_constant_block_follows_catalogue_order() {
    let catalogue = Catalogue::new([
        NamedConstant::new("SECOND", 2.0),
        NamedConstant::new("FIRST", 1.0),
    ])
    .unwrap();
    let renderer = TableRenderer::new(&catalogue);

    let mut buf = Vec::new();
    let summary = renderer.render_constant_block(&mut buf, q(2)).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("#define FP16_Q2_SECOND"));
    assert!(lines[1].starts_with("#define FP16_Q2_FIRST"));
    assert_eq!(summary.in_range, 2);
    assert_eq!(summary.overflowed, 0);
}

#[test]
fn test_overflow_counts_per_format() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);

    let overflowed = |frac_bits| {
        renderer
            .quantize_catalogue(q(frac_bits))
            .filter(|c| c.class == Classification::Overflow)
            .count()
    };

    for frac_bits in 0..=12 {
        assert_eq!(overflowed(frac_bits), 0, "Q{frac_bits}");
    }
    // M_TWOPI
    assert_eq!(overflowed(13), 1);
    // M_E, M_PI, M_TWOPI, M_3PI_4
    assert_eq!(overflowed(14), 4);
    // Every constant >= 1.0
    assert_eq!(overflowed(15), 13);
}

#[test]
fn test_render_all_summary() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);

    let mut buf = Vec::new();
    let summary = renderer.render_all(&mut buf).unwrap();
    assert_eq!(summary.formats, 16);
    assert_eq!(summary.constants, 16 * 30);
    assert_eq!(summary.overflowed, 18);

    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.matches('\n').count(), 16 * 38);
    assert_eq!(text.matches("#define FP32_").count(), 18);
}

#[test]
fn test_blocks_emitted_in_ascending_order() {
    let catalogue = Catalogue::standard();
    let renderer = TableRenderer::new(&catalogue);
    let text = renderer.render_to_string().unwrap();

    let mut last = 0;
    for frac_bits in 0..=15u32 {
        let marker = format!("{}\n", entry(&format!("#define FP16_Q{frac_bits}"), &format!("({frac_bits})")));
        let pos = text.find(&marker).unwrap();
        assert!(pos >= last);
        last = pos;
    }
}

#[test]
fn test_custom_config() {
    let catalogue = Catalogue::new([NamedConstant::new("ONE_EIGHTH", 0.125)]).unwrap();
    let config = GeneratorConfig {
        name_width: 0,
        value_width: 0,
        rounding: RoundingPolicy::TiesAwayFromZero,
        ..GeneratorConfig::default()
    };
    let renderer = TableRenderer::with_config(&catalogue, config);

    let mut buf = Vec::new();
    renderer.render_constant_block(&mut buf, q(2)).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "#define FP16_Q2_ONE_EIGHTH(1)// 0.25\n");

    // Ties-to-even keeps 0.5 at zero
    let renderer = TableRenderer::with_config(
        &catalogue,
        GeneratorConfig { name_width: 0, value_width: 0, ..GeneratorConfig::default() },
    );
    let mut buf = Vec::new();
    renderer.render_constant_block(&mut buf, q(2)).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "#define FP16_Q2_ONE_EIGHTH(0)// 0.0\n");
}

#[test]
fn test_long_names_are_not_truncated() {
    let catalogue = Catalogue::new([NamedConstant::new("A_VERY_LONG_CONSTANT_NAME_EXCEEDING_WIDTH", 0.5)]).unwrap();
    let renderer = TableRenderer::new(&catalogue);

    let mut buf = Vec::new();
    renderer.render_constant_block(&mut buf, q(1)).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert!(text.starts_with("#define FP16_Q1_A_VERY_LONG_CONSTANT_NAME_EXCEEDING_WIDTH(1) "));
}
