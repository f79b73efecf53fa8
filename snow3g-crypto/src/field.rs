//! Finite-field arithmetic for the SNOW 3G LFSR and FSM
//!
//! The LFSR works over GF(2^32) built as an extension of GF(2^8). Its
//! feedback needs multiplication and division by the root `alpha`, both of
//! which reduce to byte-wise `MULx` chains in GF(2^8).
//!
//! Reference: ETSI/SAGE SNOW 3G Specification, sections 3.1 and 3.4

/// Reduction constant for the LFSR field GF(2^8)[x] / (x^8 + x^7 + x^5 + x^3 + 1)
pub const LFSR_POLY: u8 = 0xA9;

/// Reduction constant used by the S1 mixing step (AES polynomial)
pub const S1_POLY: u8 = 0x1B;

/// Reduction constant used by the S2 mixing step
pub const S2_POLY: u8 = 0x69;

/// `MULx`: multiplication of `v` by `x` in GF(2^8), reducing with `c`.
#[inline]
pub const fn mul_x(v: u8, c: u8) -> u8 {
    if v & 0x80 != 0 {
        (v << 1) ^ c
    } else {
        v << 1
    }
}

/// `MULxPOW`: `i` successive applications of [`mul_x`].
pub const fn mul_x_pow(v: u8, i: u8, c: u8) -> u8 {
    let mut result = v;
    let mut n = 0;
    while n < i {
        result = mul_x(result, c);
        n += 1;
    }
    result
}

/// `MULalpha`: multiplication of a byte by `alpha`, spread over a word.
pub const fn mul_alpha(c: u8) -> u32 {
    ((mul_x_pow(c, 23, LFSR_POLY) as u32) << 24)
        | ((mul_x_pow(c, 245, LFSR_POLY) as u32) << 16)
        | ((mul_x_pow(c, 48, LFSR_POLY) as u32) << 8)
        | (mul_x_pow(c, 239, LFSR_POLY) as u32)
}

/// `DIValpha`: division of a byte by `alpha`, spread over a word.
pub const fn div_alpha(c: u8) -> u32 {
    ((mul_x_pow(c, 16, LFSR_POLY) as u32) << 24)
        | ((mul_x_pow(c, 39, LFSR_POLY) as u32) << 16)
        | ((mul_x_pow(c, 6, LFSR_POLY) as u32) << 8)
        | (mul_x_pow(c, 64, LFSR_POLY) as u32)
}

/// Builds the `MULalpha` and `DIValpha` tables.
///
/// Both maps are GF(2)-linear in their byte argument, so only the eight
/// single-bit inputs need the full `MULx` chains; every other entry is the
/// XOR of the entries for its lowest set bit and the remaining bits.
const fn build_alpha_tables() -> ([u32; 256], [u32; 256]) {
    let mut mul = [0u32; 256];
    let mut div = [0u32; 256];
    let mut c = 1usize;
    while c < 256 {
        let low = c & c.wrapping_neg();
        if low == c {
            mul[c] = mul_alpha(c as u8);
            div[c] = div_alpha(c as u8);
        } else {
            mul[c] = mul[c ^ low] ^ mul[low];
            div[c] = div[c ^ low] ^ div[low];
        }
        c += 1;
    }
    (mul, div)
}

const ALPHA_TABLES: ([u32; 256], [u32; 256]) = build_alpha_tables();

/// `MULalpha` for every byte value
pub const MUL_ALPHA: [u32; 256] = ALPHA_TABLES.0;

/// `DIValpha` for every byte value
pub const DIV_ALPHA: [u32; 256] = ALPHA_TABLES.1;
