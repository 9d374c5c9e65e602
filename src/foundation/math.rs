pub(crate) fn mul_div255_u16(x: u16, y: u16) -> u16 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u16
}

pub(crate) fn mul_div255_u8(x: u16, y: u16) -> u8 {
    mul_div255_u16(x, y) as u8
}

/// `(src * a + dst * (256 - a)) >> 8` with `a` in `0..=255`.
pub(crate) fn lerp_shift8(dst: u8, src: u8, a: u16) -> u8 {
    let a = u32::from(a.min(255));
    let inv = 256 - a;
    ((u32::from(src) * a + u32::from(dst) * inv) >> 8) as u8
}

/// `dst * (256 - a) >> 8`, the destination's surviving share under source alpha `a`.
pub(crate) fn inv_scale_shift8(dst: u8, a: u16) -> u8 {
    let inv = 256 - u32::from(a.min(255));
    ((u32::from(dst) * inv) >> 8) as u8
}

/// Quantize a coverage fraction to `0..=255`.
pub(crate) fn coverage_u8(coverage: f32) -> u16 {
    (coverage.clamp(0.0, 1.0) * 255.0).round() as u16
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
