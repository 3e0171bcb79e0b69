//! HSV color space conversions.
//!
//! Standard sector-based conversions between RGB and
//! hue/saturation/value:
//!
//! - [`hsv_to_rgb`] - hue in [0, 360), saturation and value in [0, 1],
//!   output channels in [0, 1]
//! - [`rgb_to_hsv`] - input channels in [0, 255] (the byte-oriented
//!   convention of the RGBA type's display range), hue in [0, 360)
//!
//! # Usage
//!
//! ```
//! use plinth_color::{hsv_to_rgb, rgb_to_hsv};
//!
//! let (r, g, b) = hsv_to_rgb(120.0, 1.0, 1.0);
//! assert_eq!((r, g, b), (0.0, 1.0, 0.0)); // pure green
//!
//! let (h, s, v) = rgb_to_hsv(0.0, 255.0, 0.0);
//! assert_eq!((h, s, v), (120.0, 1.0, 1.0));
//! ```

/// Converts HSV to RGB.
///
/// `hue` is in degrees in [0, 360) (debug-asserted), `saturation` and
/// `value` in [0, 1]. Returns `(r, g, b)` in [0, 1].
pub fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> (f32, f32, f32) {
    debug_assert!(
        (0.0..360.0).contains(&hue),
        "hue must be in [0, 360), got {}",
        hue
    );

    let chroma = value * saturation;
    let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = if (0.0..60.0).contains(&hue) {
        (chroma, x, 0.0)
    } else if (60.0..120.0).contains(&hue) {
        (x, chroma, 0.0)
    } else if (120.0..180.0).contains(&hue) {
        (0.0, chroma, x)
    } else if (180.0..240.0).contains(&hue) {
        (0.0, x, chroma)
    } else if (240.0..300.0).contains(&hue) {
        (x, 0.0, chroma)
    } else if (300.0..360.0).contains(&hue) {
        (chroma, 0.0, x)
    } else {
        (0.0, 0.0, 0.0)
    };

    (r + m, g + m, b + m)
}

/// Converts RGB to HSV.
///
/// Channels are in [0, 255]. Returns `(hue, saturation, value)` with
/// hue in degrees in [0, 360) (0 when the chroma delta is 0),
/// saturation in [0, 1] (0 when the maximum channel is 0) and value =
/// the maximum normalized channel.
pub fn rgb_to_hsv(red: f32, green: f32, blue: f32) -> (f32, f32, f32) {
    let r = red / 255.0;
    let g = green / 255.0;
    let b = blue / 255.0;

    let cmax = r.max(g).max(b);
    let cmin = r.min(g).min(b);
    let delta = cmax - cmin;

    let hue = if delta == 0.0 {
        0.0
    } else if cmax == r {
        // rem_euclid keeps the red sector's wrap-around in [0, 360).
        ((g - b) / delta).rem_euclid(6.0) * 60.0
    } else if cmax == g {
        ((b - r) / delta + 2.0) * 60.0
    } else {
        ((r - g) / delta + 4.0) * 60.0
    };

    let saturation = if cmax == 0.0 { 0.0 } else { delta / cmax };

    (hue, saturation, cmax)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), (1.0, 0.0, 0.0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), (0.0, 1.0, 0.0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), (0.0, 0.0, 1.0));
    }

    #[test]
    fn test_secondary_hues() {
        let (r, g, b) = hsv_to_rgb(60.0, 1.0, 1.0);
        assert_abs_diff_eq!(r, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        let (r, g, b) = hsv_to_rgb(200.0, 0.0, 0.5);
        assert_eq!((r, g, b), (0.5, 0.5, 0.5));
    }

    #[test]
    fn test_rgb_to_hsv_black_and_gray() {
        // Black: saturation and value both 0, hue defaults to 0.
        assert_eq!(rgb_to_hsv(0.0, 0.0, 0.0), (0.0, 0.0, 0.0));
        // Gray: no chroma, hue 0.
        let (h, s, v) = rgb_to_hsv(128.0, 128.0, 128.0);
        assert_eq!(h, 0.0);
        assert_eq!(s, 0.0);
        assert_abs_diff_eq!(v, 128.0 / 255.0, epsilon = 1e-6);
    }

    #[test]
    fn test_red_sector_hue_stays_in_range() {
        // A reddish color with blue > green wraps around zero; the hue
        // must land just under 360, never negative.
        let (h, _, _) = rgb_to_hsv(255.0, 0.0, 10.0);
        assert!((0.0..360.0).contains(&h), "hue out of range: {}", h);
        assert!(h > 350.0);
    }

    #[test]
    fn test_roundtrip() {
        for &(h, s, v) in &[
            (0.0, 1.0, 1.0),
            (45.0, 0.5, 0.75),
            (180.0, 0.25, 0.9),
            (300.0, 0.8, 0.3),
            (359.0, 1.0, 1.0),
        ] {
            let (r, g, b) = hsv_to_rgb(h, s, v);
            let (h2, s2, v2) = rgb_to_hsv(r * 255.0, g * 255.0, b * 255.0);
            assert_abs_diff_eq!(h, h2, epsilon = 1e-3);
            assert_abs_diff_eq!(s, s2, epsilon = 1e-5);
            assert_abs_diff_eq!(v, v2, epsilon = 1e-5);
        }
    }
}
