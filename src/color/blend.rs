use crate::color::pixel::Pixel;
use crate::foundation::math::{inv_scale_shift8, lerp_shift8, mul_div255_u8};

/// How source pixels combine with the destination.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Write the source through.
    #[default]
    Replace,
    /// Source-over compositing weighted by source alpha.
    Blend,
    /// Write the source only where its alpha is non-zero.
    Mask,
}

/// Per-draw style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FillStyle {
    /// Blend mode.
    pub blend: BlendMode,
    /// Anti-alias shape edges.
    pub antialias: bool,
}

impl FillStyle {
    /// Replace without anti-aliasing.
    pub const REPLACE: Self = Self {
        blend: BlendMode::Replace,
        antialias: false,
    };

    /// Style with the given blend mode and no anti-aliasing.
    pub const fn with_blend(blend: BlendMode) -> Self {
        Self {
            blend,
            antialias: false,
        }
    }

    /// Same style with anti-aliasing switched on or off.
    pub const fn antialiased(self, antialias: bool) -> Self {
        Self {
            blend: self.blend,
            antialias,
        }
    }

    /// Return `true` for plain write-through without anti-aliasing.
    pub fn is_plain(&self) -> bool {
        self.blend == BlendMode::Replace && !self.antialias
    }
}

/// Mode a source pixel reduces to: Blend at alpha 255 and Mask at any positive alpha behave as
/// Replace at every coverage; Mask at alpha 0 draws nothing (`None`).
pub fn reduce_mode(mode: BlendMode, src_alpha: u8) -> Option<BlendMode> {
    match mode {
        BlendMode::Replace => Some(BlendMode::Replace),
        BlendMode::Blend if src_alpha == 255 => Some(BlendMode::Replace),
        BlendMode::Blend => Some(BlendMode::Blend),
        BlendMode::Mask if src_alpha == 0 => None,
        BlendMode::Mask => Some(BlendMode::Replace),
    }
}

/// Source-over: `c = (src.c * a + dst.c * (256 - a)) >> 8`, `alpha = a + (dst.a * (256 - a) >> 8)`.
///
/// `alpha` is the effective source alpha (already scaled by coverage). Alpha 0 leaves `dst`
/// untouched.
pub fn blend_over(dst: Pixel, src: Pixel, alpha: u8) -> Pixel {
    if alpha == 0 {
        return dst;
    }
    let a = u16::from(alpha);
    Pixel {
        a: alpha.saturating_add(inv_scale_shift8(dst.a, a)),
        r: lerp_shift8(dst.r, src.r, a),
        g: lerp_shift8(dst.g, src.g, a),
        b: lerp_shift8(dst.b, src.b, a),
    }
}

/// Move every channel of `dst` toward `src` by `weight / 256`.
fn lerp_pixel(dst: Pixel, src: Pixel, weight: u16) -> Pixel {
    Pixel {
        a: lerp_shift8(dst.a, src.a, weight),
        r: lerp_shift8(dst.r, src.r, weight),
        g: lerp_shift8(dst.g, src.g, weight),
        b: lerp_shift8(dst.b, src.b, weight),
    }
}

/// Composite one pixel.
///
/// The mode is first reduced for `src` (see [`reduce_mode`]), so an opaque Blend or a visible Mask
/// is exactly Replace. `coverage` is the quantized share of the pixel covered by the shape (`255`
/// = fully covered). Under Replace partially covered pixels move toward the source by the
/// coverage share; under Blend the coverage scales the source alpha instead. Returns `None` when
/// the destination stays unchanged.
pub fn composite(dst: Pixel, src: Pixel, coverage: u16, mode: BlendMode) -> Option<Pixel> {
    if coverage == 0 {
        return None;
    }
    let full = coverage >= 255;
    match reduce_mode(mode, src.a)? {
        BlendMode::Replace | BlendMode::Mask if full => Some(src),
        BlendMode::Replace | BlendMode::Mask => Some(lerp_pixel(dst, src, coverage)),
        BlendMode::Blend => {
            let alpha = if full {
                src.a
            } else {
                mul_div255_u8(u16::from(src.a), coverage)
            };
            (alpha != 0).then(|| blend_over(dst, src, alpha))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/blend.rs"]
mod tests;
