//! Color-space math for palette post-processing: luminance ranking,
//! RGB <-> HSL conversion and the derived complementary/analogous colors.

use rgb::RGB8;

/// Hue shift used for analogous colors, in degrees.
pub const ANALOGOUS_SHIFT: f64 = 30.0;

/// Relative luminance with Rec. 709 weights on the raw (non-linearized) channels.
#[inline]
pub fn luminance(c: RGB8) -> f64 {
    0.2126 * c.r as f64 + 0.7152 * c.g as f64 + 0.0722 * c.b as f64
}

/// Sort brightest first. Colors with equal luminance keep their order.
pub fn sort_by_luminance(colors: &mut [RGB8]) {
    colors.sort_by(|a, b| luminance(*b).total_cmp(&luminance(*a)));
}

/// Hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

pub fn rgb_to_hsl(c: RGB8) -> Hsl {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let (r, g, b) = (c.r as f64 / 255.0, c.g as f64 / 255.0, c.b as f64 / 255.0);
    let (maxf, minf) = (max as f64 / 255.0, min as f64 / 255.0);
    let l = (maxf + minf) / 2.0;

    if max == min {
        return Hsl { h: 0.0, s: 0.0, l };
    }

    let d = maxf - minf;
    let s = if l > 0.5 {
        d / (2.0 - maxf - minf)
    } else {
        d / (maxf + minf)
    };

    let sector = if max == c.r {
        (g - b) / d + if c.g < c.b { 6.0 } else { 0.0 }
    } else if max == c.g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };

    Hsl { h: sector * 60.0, s, l }
}

/// Piecewise-linear hue ramp between `p` and `q`; `t` is a fraction of a turn in `[0, 1)`.
fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

pub fn hsl_to_rgb(hsl: Hsl) -> RGB8 {
    let Hsl { h, s, l } = hsl;
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        let turn = h / 360.0;
        (
            hue_to_channel(p, q, (turn + 1.0 / 3.0).rem_euclid(1.0)),
            hue_to_channel(p, q, turn.rem_euclid(1.0)),
            hue_to_channel(p, q, (turn - 1.0 / 3.0).rem_euclid(1.0)),
        )
    };

    let to_u8 = |v: f64| (v * 255.0).round().clamp(0.0, 255.0) as u8;
    RGB8::new(to_u8(r), to_u8(g), to_u8(b))
}

/// Shift a hue by `degrees`, wrapping into `[0, 360)`.
#[inline]
pub fn rotate_hue(h: f64, degrees: f64) -> f64 {
    (h + degrees).rem_euclid(360.0)
}

/// Channel-wise inversion.
#[inline]
pub fn complementary(c: RGB8) -> RGB8 {
    RGB8::new(255 - c.r, 255 - c.g, 255 - c.b)
}

/// The two hue neighbours of `c`, `+30°` first and `-30°` second.
pub fn analogous(c: RGB8) -> [RGB8; 2] {
    let hsl = rgb_to_hsl(c);
    [ANALOGOUS_SHIFT, -ANALOGOUS_SHIFT].map(|shift| {
        hsl_to_rgb(Hsl {
            h: rotate_hue(hsl.h, shift),
            ..hsl
        })
    })
}

/// `#rrggbb`
pub fn to_hex(c: RGB8) -> String {
    format!("#{:02x}{:02x}{:02x}", c.r, c.g, c.b)
}

/// `rgb(r, g, b)`
pub fn to_css(c: RGB8) -> String {
    format!("rgb({}, {}, {})", c.r, c.g, c.b)
}
