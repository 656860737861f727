/// Selects which color palette to use for density rendering.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorMap {
    /// Black -> white, as in the classic smoke demo.
    Grayscale,
    /// Black -> dusk blue -> violet -> warm rose -> cream.
    Smoke,
}

impl ColorMap {
    /// Cycle to the next palette.
    pub fn next(self) -> Self {
        match self {
            ColorMap::Grayscale => ColorMap::Smoke,
            ColorMap::Smoke => ColorMap::Grayscale,
        }
    }
}

pub(crate) const GRAYSCALE_STOPS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 0.0),
    (63.75, 63.75, 63.75),
    (127.5, 127.5, 127.5),
    (191.25, 191.25, 191.25),
    (255.0, 255.0, 255.0),
];

pub(crate) const SMOKE_STOPS: [(f64, f64, f64); 5] = [
    (0.0, 0.0, 0.0),       // empty air     (0.00)
    (40.0, 44.0, 78.0),    // dusk blue     (0.25)
    (112.0, 88.0, 160.0),  // violet        (0.50)
    (222.0, 150.0, 140.0), // warm rose     (0.75)
    (255.0, 244.0, 228.0), // cream         (1.00)
];

/// Convert a [0.0, 1.0] value to RGBA using the specified color map.
pub fn map_to_rgba(t: f64, colormap: ColorMap) -> [u8; 4] {
    let stops = match colormap {
        ColorMap::Grayscale => &GRAYSCALE_STOPS,
        ColorMap::Smoke => &SMOKE_STOPS,
    };

    // NaN renders as empty
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let seg = t * 4.0;
    let i = (seg as usize).min(3);
    let s = seg - i as f64;

    let (r0, g0, b0) = stops[i];
    let (r1, g1, b1) = stops[i + 1];

    [
        (r0 + s * (r1 - r0)).round() as u8,
        (g0 + s * (g1 - g0)).round() as u8,
        (b0 + s * (b1 - b0)).round() as u8,
        255,
    ]
}

/// Pack RGBA into the 0RGB layout minifb expects.
pub fn rgba_to_argb(rgba: [u8; 4]) -> u32 {
    (rgba[0] as u32) << 16 | (rgba[1] as u32) << 8 | rgba[2] as u32
}
