use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0xda, 0x77, 0x56);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const PLACEHOLDER: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const MUTED: Color = Color::Gray;
pub const SHARED_ITEM_BG: Color = Color::Rgb(0x3a, 0x3a, 0x2a);

const ROW_SATURATION: f32 = 0.35;
const ROW_VALUE: f32 = 0.30;
const SHARE_SATURATION: f32 = 0.60;
const SHARE_VALUE: f32 = 0.90;

/// Background for participant row `index` of `count`.
pub fn row_background(index: usize, count: usize) -> Color {
    row_tint(index, count, ROW_SATURATION, ROW_VALUE)
}

/// Foreground for the share line of the participant at `index` of `count`.
pub fn share_foreground(index: usize, count: usize) -> Color {
    row_tint(index, count, SHARE_SATURATION, SHARE_VALUE)
}

/// Hue spread evenly across `count` rows.
pub fn row_tint(index: usize, count: usize, saturation: f32, value: f32) -> Color {
    let hue = if count == 0 {
        0.0
    } else {
        (index % count) as f32 / count as f32 * 360.0
    };
    hsv_to_rgb(hue, saturation, value)
}

fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> Color {
    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = value - chroma;
    let channel = |c: f32| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    Color::Rgb(channel(r), channel(g), channel(b))
}
