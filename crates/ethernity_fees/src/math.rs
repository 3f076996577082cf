//! Overflow-free fixed-point helpers - no unwrap, no panics

use primitive_types::U256;

/// floor(x * num / den) without forming `x * num`.
///
/// Splits `x = q * den + r`, so `x * num / den = q * num + r * num / den`
/// where the second term is exact because `r < den`. Returns `None` only
/// when the true result does not fit in 256 bits, or `den == 0`.
pub fn mul_div_floor(x: U256, num: u64, den: u64) -> Option<U256> {
    if den == 0 {
        return None;
    }
    let den_w = U256::from(den);
    let num_w = U256::from(num);

    let q = x / den_w;
    let r = x % den_w;

    let whole = q.checked_mul(num_w)?;
    // r < den and both fit in u64, so r * num fits in u128
    let part = (U256::from(r.low_u64()) * num_w) / den_w;

    whole.checked_add(part)
}
