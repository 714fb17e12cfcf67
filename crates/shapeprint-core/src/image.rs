use crate::error::PixelBufferError;

/// Borrowed view over an RGBA8 pixel buffer.
#[derive(Clone, Copy, Debug)]
pub struct RgbaImageView<'a> {
    pub width: usize,
    pub height: usize,
    /// Row-major RGBA bytes, `len = width * height * 4`.
    pub data: &'a [u8],
}

impl<'a> RgbaImageView<'a> {
    /// Build a view, validating dimensions and buffer length.
    pub fn new(width: usize, height: usize, data: &'a [u8]) -> Result<Self, PixelBufferError> {
        if width == 0 || height == 0 {
            return Err(PixelBufferError::EmptyImage { width, height });
        }
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PixelBufferError::EmptyImage { width, height })?;
        if data.len() != expected {
            return Err(PixelBufferError::InvalidLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }
}

/// Owned single-channel intensity map with values in `[0, 255]`.
///
/// Maps produced by this crate are always finite since they are derived from
/// `u8` channels; code constructing one by hand must keep that property.
#[derive(Clone, Debug)]
pub struct LumaMap {
    pub width: usize,
    pub height: usize,
    /// Row-major, `len = width * height`.
    pub data: Vec<f32>,
}

/// Rec. 601 luma from one RGBA pixel, alpha ignored.
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> f32 {
    0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32
}

/// Convert an RGBA view to a luma map at full resolution.
pub fn luma_map(src: &RgbaImageView<'_>) -> LumaMap {
    let mut data = Vec::with_capacity(src.width * src.height);
    for px in src.data.chunks_exact(4) {
        data.push(luma(px[0], px[1], px[2]));
    }
    LumaMap {
        width: src.width,
        height: src.height,
        data,
    }
}

/// Downscale so the longer side is at most `max_side`, producing a luma map.
///
/// Uses bilinear sampling per channel; luma is linear in RGB, so converting
/// during the resample is equivalent to filtering an RGBA copy first.
/// Images already within bounds are converted 1:1.
pub fn downscale_to_luma(src: &RgbaImageView<'_>, max_side: usize) -> LumaMap {
    let longer = src.width.max(src.height);
    if max_side == 0 || longer <= max_side {
        return luma_map(src);
    }

    let scale = max_side as f32 / longer as f32;
    let w = ((src.width as f32 * scale).round() as usize).max(1);
    let h = ((src.height as f32 * scale).round() as usize).max(1);

    let sx = src.width as f32 / w as f32;
    let sy = src.height as f32 / h as f32;

    let mut data = Vec::with_capacity(w * h);
    for y in 0..h {
        let v = (y as f32 + 0.5) * sy - 0.5;
        for x in 0..w {
            let u = (x as f32 + 0.5) * sx - 0.5;
            let (r, g, b) = sample_bilinear_rgb(src, u, v);
            data.push(0.299 * r + 0.587 * g + 0.114 * b);
        }
    }
    LumaMap {
        width: w,
        height: h,
        data,
    }
}

#[inline]
fn rgb_at(src: &RgbaImageView<'_>, x: i64, y: i64) -> (f32, f32, f32) {
    let x = x.clamp(0, src.width as i64 - 1) as usize;
    let y = y.clamp(0, src.height as i64 - 1) as usize;
    let i = (y * src.width + x) * 4;
    (
        src.data[i] as f32,
        src.data[i + 1] as f32,
        src.data[i + 2] as f32,
    )
}

#[inline]
fn sample_bilinear_rgb(src: &RgbaImageView<'_>, x: f32, y: f32) -> (f32, f32, f32) {
    let x0 = x.floor() as i64;
    let y0 = y.floor() as i64;
    let fx = x - x0 as f32;
    let fy = y - y0 as f32;

    let p00 = rgb_at(src, x0, y0);
    let p10 = rgb_at(src, x0 + 1, y0);
    let p01 = rgb_at(src, x0, y0 + 1);
    let p11 = rgb_at(src, x0 + 1, y0 + 1);

    let lerp = |a: f32, b: f32, t: f32| a + t * (b - a);
    let top = (
        lerp(p00.0, p10.0, fx),
        lerp(p00.1, p10.1, fx),
        lerp(p00.2, p10.2, fx),
    );
    let bot = (
        lerp(p01.0, p11.0, fx),
        lerp(p01.1, p11.1, fx),
        lerp(p01.2, p11.2, fx),
    );
    (
        lerp(top.0, bot.0, fy),
        lerp(top.1, bot.1, fy),
        lerp(top.2, bot.2, fy),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn solid_rgba(width: usize, height: usize, rgba: [u8; 4]) -> Vec<u8> {
        rgba.iter()
            .copied()
            .cycle()
            .take(width * height * 4)
            .collect()
    }

    #[test]
    fn view_rejects_bad_buffers() {
        assert!(RgbaImageView::new(0, 4, &[]).is_err());
        assert!(RgbaImageView::new(2, 2, &[0u8; 15]).is_err());
        assert!(RgbaImageView::new(2, 2, &[0u8; 16]).is_ok());
    }

    #[test]
    fn luma_uses_rec601_weights() {
        assert_relative_eq!(luma(255, 0, 0), 255.0 * 0.299);
        assert_relative_eq!(luma(0, 255, 0), 255.0 * 0.587);
        assert_relative_eq!(luma(0, 0, 255), 255.0 * 0.114);
        assert_relative_eq!(luma(255, 255, 255), 255.0, epsilon = 1e-3);
    }

    #[test]
    fn luma_map_ignores_alpha() {
        let buf = solid_rgba(3, 2, [10, 20, 30, 0]);
        let view = RgbaImageView::new(3, 2, &buf).unwrap();
        let map = luma_map(&view);
        assert_eq!(map.width, 3);
        assert_eq!(map.height, 2);
        assert_relative_eq!(map.data[0], luma(10, 20, 30));
    }

    #[test]
    fn downscale_caps_longer_side() {
        let buf = solid_rgba(100, 40, [128, 128, 128, 255]);
        let view = RgbaImageView::new(100, 40, &buf).unwrap();
        let map = downscale_to_luma(&view, 50);
        assert_eq!(map.width, 50);
        assert_eq!(map.height, 20);
        assert_relative_eq!(map.data[0], 128.0, epsilon = 1e-3);
    }

    #[test]
    fn downscale_is_noop_within_bounds() {
        let buf = solid_rgba(8, 8, [255, 255, 255, 255]);
        let view = RgbaImageView::new(8, 8, &buf).unwrap();
        let map = downscale_to_luma(&view, 512);
        assert_eq!((map.width, map.height), (8, 8));
    }

    #[test]
    fn downscale_never_rounds_a_side_to_zero() {
        let buf = solid_rgba(2000, 1, [0, 0, 0, 255]);
        let view = RgbaImageView::new(2000, 1, &buf).unwrap();
        let map = downscale_to_luma(&view, 512);
        assert_eq!(map.width, 512);
        assert_eq!(map.height, 1);
    }
}
