// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Text emission of the Q-format constant tables.
//!
//! # Block layout
//! ```text
//! // --------------------------------------------------------------------------
//! #define FP16_Q1                    (1)
//! #define FP16_Q1_PREC               (0.5)
//! #define FP16_Q1_MAX                (16383.5)
//! #define FP16_Q1_MIN                (-16384.0)
//! // --------------------------------------------------------------------------
//! #define FP16_Q1_M_E                (5)                 // 2.5
//! ...
//!
//!
//! ```
//! Constants whose raw value does not fit an `i16` are emitted with the
//! overflow prefix (`FP32_Q..`) and keep their unclamped integer.

use std::io::Write;

use tracing::{debug, info};

use crate::catalogue::Catalogue;
use crate::config::{GeneratorConfig, SEPARATOR_DASHES};
use crate::error::Result;
use crate::types::format::FixedPointFormat;
use crate::types::quantized::{Classification, QuantizedConstant};

/// Per-format classification counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSummary {
    pub in_range: usize,
    pub overflowed: usize,
}

/// Counts over a whole generation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TableSummary {
    pub formats: usize,
    pub constants: usize,
    pub overflowed: usize,
}

pub struct TableRenderer<'a> {
    catalogue: &'a Catalogue,
    config: GeneratorConfig,
}

impl<'a> TableRenderer<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self::with_config(catalogue, GeneratorConfig::default())
    }

    pub fn with_config(catalogue: &'a Catalogue, config: GeneratorConfig) -> Self {
        Self { catalogue, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The catalogue converted into `format`, in catalogue order.
    pub fn quantize_catalogue(
        &self,
        format: FixedPointFormat,
    ) -> impl Iterator<Item = QuantizedConstant<'a>> + 'a {
        let policy = self.config.rounding;
        self.catalogue
            .iter()
            .map(move |constant| QuantizedConstant::new(constant, format, policy))
    }

    /// Name prefix for a classification outcome.
    pub fn prefix(&self, class: Classification) -> &'static str {
        match class {
            Classification::InRange => self.config.in_range_prefix,
            Classification::Overflow => self.config.overflow_prefix,
        }
    }

    /// Format index, precision, max and min of `format`.
    pub fn render_format_header<W: Write>(&self, out: &mut W, format: FixedPointFormat) -> Result<()> {
        let q = format.frac_bits();
        let base = format!("#define {}_Q{}", self.config.in_range_prefix, q);

        self.write_entry(out, &base, &format!("({q})"))?;
        writeln!(out)?;
        self.write_entry(out, &format!("{base}_PREC"), &format!("({})", float_literal(format.precision())))?;
        writeln!(out)?;
        self.write_entry(out, &format!("{base}_MAX"), &format!("({})", float_literal(format.max_value())))?;
        writeln!(out)?;
        self.write_entry(out, &format!("{base}_MIN"), &format!("({})", float_literal(format.min_value())))?;
        writeln!(out)?;
        Ok(())
    }

    /// One entry per catalogue constant, prefixed by its classification.
    pub fn render_constant_block<W: Write>(
        &self,
        out: &mut W,
        format: FixedPointFormat,
    ) -> Result<FormatSummary> {
        let mut summary = FormatSummary::default();

        for quantized in self.quantize_catalogue(format) {
            let name = format!(
                "#define {}_Q{}_{}",
                self.prefix(quantized.class),
                format.frac_bits(),
                quantized.name()
            );
            self.write_entry(out, &name, &format!("({})", quantized.raw))?;
            writeln!(out, "// {}", float_literal(quantized.realized()))?;

            match quantized.class {
                Classification::InRange => summary.in_range += 1,
                Classification::Overflow => {
                    debug!(format = %format, constant = quantized.name(), raw = quantized.raw, "constant overflows 16 bits");
                    summary.overflowed += 1;
                }
            }
        }

        Ok(summary)
    }

    /// A complete block: separators, header, constants, two blank lines.
    pub fn render_format<W: Write>(&self, out: &mut W, format: FixedPointFormat) -> Result<FormatSummary> {
        self.write_separator(out)?;
        self.render_format_header(out, format)?;
        self.write_separator(out)?;
        let summary = self.render_constant_block(out, format)?;
        writeln!(out)?;
        writeln!(out)?;

        debug!(
            format = %format,
            in_range = summary.in_range,
            overflowed = summary.overflowed,
            "rendered format block"
        );
        Ok(summary)
    }

    /// Every format from `Q0` to `Q15`, ascending.
    pub fn render_all<W: Write>(&self, out: &mut W) -> Result<TableSummary> {
        let mut table = TableSummary::default();

        for format in FixedPointFormat::all() {
            let summary = self.render_format(out, format)?;
            table.formats += 1;
            table.constants += summary.in_range + summary.overflowed;
            table.overflowed += summary.overflowed;
        }

        info!(
            formats = table.formats,
            constants = table.constants,
            overflowed = table.overflowed,
            "constant table generated"
        );
        Ok(table)
    }

    pub fn render_to_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.render_all(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    fn write_entry<W: Write>(&self, out: &mut W, name: &str, value: &str) -> Result<()> {
        write!(
            out,
            "{:<name_width$}{:<value_width$}",
            name,
            value,
            name_width = self.config.name_width,
            value_width = self.config.value_width
        )?;
        Ok(())
    }

    fn write_separator<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "// {}", "-".repeat(SEPARATOR_DASHES))?;
        Ok(())
    }
}

/// Shortest round-trip decimal form, always with a decimal point.
pub fn float_literal(value: f64) -> String {
    let mut s = format!("{value}");
    if value.is_finite() && !s.contains('.') {
        s.push_str(".0");
    }
    s
}
