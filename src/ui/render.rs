//! Image rendering with half-block characters
//!
//! Each terminal cell shows two vertically stacked pixels: the upper one as
//! the foreground of `▀`, the lower one as the background.

use image::imageops::FilterType;
use image::{DynamicImage, Rgb};
use ratatui::prelude::*;

fn to_color(pixel: &Rgb<u8>) -> Color {
    Color::Rgb(pixel[0], pixel[1], pixel[2])
}

/// Scale `image` to fit `cols` x `rows` cells, keeping its aspect ratio,
/// and return one styled line per cell row.
pub fn render_image(image: &DynamicImage, cols: u16, rows: u16) -> Vec<Line<'static>> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let scaled = image
        .resize(u32::from(cols), u32::from(rows) * 2, FilterType::Triangle)
        .to_rgb8();
    let (width, height) = scaled.dimensions();
    let mut lines = Vec::with_capacity(height.div_ceil(2) as usize);

    for y in (0..height).step_by(2) {
        let mut spans = Vec::with_capacity(width as usize);
        for x in 0..width {
            let top = to_color(scaled.get_pixel(x, y));
            // Odd heights leave the last lower half empty
            let bottom = if y + 1 < height {
                to_color(scaled.get_pixel(x, y + 1))
            } else {
                Color::Reset
            };
            spans.push(Span::styled("▀", Style::default().fg(top).bg(bottom)));
        }
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbImage;

    #[test]
    fn test_zero_area_renders_nothing() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(4, 4));
        assert!(render_image(&img, 0, 10).is_empty());
        assert!(render_image(&img, 10, 0).is_empty());
    }

    #[test]
    fn test_two_pixel_rows_per_line() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([200, 10, 10])));
        let lines = render_image(&img, 4, 1);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].spans.len(), 4);
        let style = lines[0].spans[0].style;
        assert_eq!(style.fg, Some(Color::Rgb(200, 10, 10)));
        assert_eq!(style.bg, Some(Color::Rgb(200, 10, 10)));
    }

    #[test]
    fn test_fits_within_bounds() {
        let img = DynamicImage::ImageRgb8(RgbImage::new(300, 300));
        let lines = render_image(&img, 40, 10);
        assert!(lines.len() <= 10);
        assert!(lines.iter().all(|l| l.spans.len() <= 40));
    }
}
