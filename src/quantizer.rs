//! Median-cut quantization down to a fixed recursion depth.
//!
//! The sample set is split at the median of its widest channel, and each half
//! is split again until [`MAX_DEPTH`] is reached. Each leaf is then averaged
//! into one representative color, so a full run yields `2^MAX_DEPTH` colors.

use rgb::RGB8;
use std::fmt;

/// Recursion depth at which subsets stop splitting (16 leaves).
pub const MAX_DEPTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    #[inline]
    pub fn value(self, color: &RGB8) -> u8 {
        match self {
            Channel::Red => color.r,
            Channel::Green => color.g,
            Channel::Blue => color.b,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "r",
            Channel::Green => "g",
            Channel::Blue => "b",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Channel with the largest max-min spread. Ties go to red, then green.
/// An empty set has no spread on any channel and reports red.
pub fn widest_channel(samples: &[RGB8]) -> Channel {
    let (mut rmin, mut rmax) = (255u8, 0u8);
    let (mut gmin, mut gmax) = (255u8, 0u8);
    let (mut bmin, mut bmax) = (255u8, 0u8);
    for c in samples {
        rmin = rmin.min(c.r);
        rmax = rmax.max(c.r);
        gmin = gmin.min(c.g);
        gmax = gmax.max(c.g);
        bmin = bmin.min(c.b);
        bmax = bmax.max(c.b);
    }
    let rr = rmax as i16 - rmin as i16;
    let gr = gmax as i16 - gmin as i16;
    let br = bmax as i16 - bmin as i16;

    if rr >= gr && rr >= br {
        Channel::Red
    } else if gr >= br {
        Channel::Green
    } else {
        Channel::Blue
    }
}

/// Per-channel mean, rounded to the nearest integer. `None` when there is
/// nothing to average.
pub fn average_color(samples: &[RGB8]) -> Option<RGB8> {
    if samples.is_empty() {
        return None;
    }
    let (mut sr, mut sg, mut sb) = (0u64, 0u64, 0u64);
    for c in samples {
        sr += c.r as u64;
        sg += c.g as u64;
        sb += c.b as u64;
    }
    let n = samples.len() as f64;
    let mean = |sum: u64| (sum as f64 / n).round() as u8;
    Some(RGB8::new(mean(sr), mean(sg), mean(sb)))
}

/// Quantize a sample set into at most `2^MAX_DEPTH` representative colors.
///
/// The input is copied before sorting; the caller's order is left alone.
pub fn quantize(samples: &[RGB8]) -> Vec<RGB8> {
    quantize_from_depth(samples, 0)
}

/// Same as [`quantize`] but starting the recursion at `depth`, yielding at
/// most `2^(MAX_DEPTH - depth)` colors.
pub fn quantize_from_depth(samples: &[RGB8], depth: usize) -> Vec<RGB8> {
    let mut working = samples.to_vec();
    let mut leaves = Vec::with_capacity(1 << MAX_DEPTH.saturating_sub(depth));
    median_cut(&mut working, depth, &mut leaves);
    tracing::debug!(
        samples = samples.len(),
        colors = leaves.len(),
        "median-cut finished"
    );
    leaves
}

/// Lower-half leaves are pushed before upper-half leaves at every level.
/// Empty subsets contribute no leaf.
fn median_cut(samples: &mut [RGB8], depth: usize, leaves: &mut Vec<RGB8>) {
    if depth >= MAX_DEPTH || samples.is_empty() {
        if let Some(color) = average_color(samples) {
            leaves.push(color);
        }
        return;
    }

    let channel = widest_channel(samples);
    if depth == 0 {
        tracing::debug!(%channel, "splitting on widest channel");
    }
    // sort_by_key is stable, so equal channel values keep their relative order
    samples.sort_by_key(|c| channel.value(c));

    let mid = samples.len() / 2;
    let (lower, upper) = samples.split_at_mut(mid);
    median_cut(lower, depth + 1, leaves);
    median_cut(upper, depth + 1, leaves);
}
