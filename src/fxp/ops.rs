//! 16-bit fixed-point operations.
//!
//! Every operation works in an `i32` intermediate and saturates back to the
//! `i16` container. Operands of `fxp_add`/`fxp_sub` must share a Q-format.

// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::error::{GeneratorError, Result};
use crate::fxp::qformat::{scale, RoundingPolicy};
use crate::types::scalar::Fp16;

#[inline]
fn saturate_i32(value: i32) -> Fp16 {
    Fp16(value.clamp(i16::MIN as i32, i16::MAX as i32) as i16)
}

#[inline]
fn frac_mask(frac: u32) -> i32 {
    !((1i32 << frac) - 1)
}

/// Right shift rounding the dropped half-LSB away from zero.
fn rshift_round(value: i32, shift: u32) -> i32 {
    if shift == 0 {
        return value;
    }
    if value < 0 {
        let r = (-value) >> (shift - 1);
        -((r >> 1) + (r & 1))
    } else {
        let r = value >> (shift - 1);
        (r >> 1) + (r & 1)
    }
}

/// Converts a float into Q`frac`, rounding half away from zero and saturating.
pub fn fxp_from_f64(value: f64, frac: u32) -> Fp16 {
    let raw = RoundingPolicy::TiesAwayFromZero.round(value * scale(frac));
    Fp16(raw.clamp(i16::MIN as f64, i16::MAX as f64) as i16)
}

/// Converts a Q`frac` value into a float.
pub fn fxp_to_f64(fp: Fp16, frac: u32) -> f64 {
    fp.0 as f64 / scale(frac)
}

/// Converts an integer into Q`frac` with saturation.
pub fn fxp_from_int(value: i16, frac: u32) -> Fp16 {
    saturate_i32((value as i32) << frac)
}

pub fn fxp_rshift(fp: Fp16, shift: u32) -> Fp16 {
    saturate_i32(rshift_round(fp.0 as i32, shift))
}

pub fn fxp_lshift(fp: Fp16, shift: u32) -> Fp16 {
    saturate_i32((fp.0 as i32) << shift)
}

/// Moves a value from Q`from` to Q`to`.
pub fn fxp_convert(fp: Fp16, from: u32, to: u32) -> Fp16 {
    if from > to {
        fxp_rshift(fp, from - to)
    } else if from < to {
        fxp_lshift(fp, to - from)
    } else {
        fp
    }
}

/// Basic fixed-point addition with saturation.
pub fn fxp_add(a: Fp16, b: Fp16) -> Fp16 {
    Fp16(a.0.saturating_add(b.0))
}

/// Basic fixed-point subtraction with saturation.
pub fn fxp_sub(a: Fp16, b: Fp16) -> Fp16 {
    Fp16(a.0.saturating_sub(b.0))
}

/// Fixed-point multiplication. `b` may use another Q-format than `a`;
/// the product is returned in `a`'s format.
pub fn fxp_mul(a: Fp16, b: Fp16, b_frac: u32) -> Fp16 {
    let product = (a.0 as i32) * (b.0 as i32);
    saturate_i32(rshift_round(product, b_frac))
}

/// Fixed-point division, result in `a`'s format. Truncates toward zero.
pub fn fxp_div(a: Fp16, b: Fp16, b_frac: u32) -> Result<Fp16> {
    if b.0 == 0 {
        return Err(GeneratorError::DivisionByZero);
    }
    Ok(saturate_i32(((a.0 as i32) << b_frac) / (b.0 as i32)))
}

/// Largest integral value not greater than `x`.
pub fn fxp_floor(x: Fp16, frac: u32) -> Fp16 {
    saturate_i32((x.0 as i32) & frac_mask(frac))
}

/// Smallest integral value not less than `x`.
pub fn fxp_ceil(x: Fp16, frac: u32) -> Fp16 {
    let floored = (x.0 as i32) & frac_mask(frac);
    if floored == x.0 as i32 {
        return x;
    }
    saturate_i32(floored + (1 << frac))
}

/// Nearest integral value, halfway cases away from zero.
pub fn fxp_round(x: Fp16, frac: u32) -> Fp16 {
    if frac == 0 {
        return x;
    }
    let half = 1i32 << (frac - 1);
    let value = x.0 as i32;
    let rounded = if value < 0 {
        -((-value + half) & frac_mask(frac))
    } else {
        (value + half) & frac_mask(frac)
    };
    saturate_i32(rounded)
}
