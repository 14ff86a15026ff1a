pub mod rate_math;
pub mod status_parser;

#[inline(always)]
pub fn sanitize_to_u64(val: f64, fallback: u64) -> u64 {
    if !val.is_finite() || val < 0.0 {
        return fallback;
    }
    val.round() as u64
}
