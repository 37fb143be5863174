use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use egui::{Color32, Pos2, Rect};
use image::{Rgba, RgbaImage};

use super::Surface;
use crate::error::{ExportError, ExportResult};

/// Largest side length we are willing to allocate
pub const MAX_DIMENSION: u32 = 16_384;

/// Offscreen CPU surface backed by an RGBA image.
///
/// Every coordinate, line width and font size is multiplied by `scale`, so
/// the same drawing calls produce a magnified copy of the visible canvas.
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    /// Tried in order until one has a glyph for the character
    fonts: Vec<FontArc>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32, scale: f32) -> ExportResult<Self> {
        if width == 0 || height == 0 || width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(ExportError::SurfaceUnavailable { width, height });
        }
        Ok(Self {
            image: RgbaImage::new(width, height),
            scale,
            fonts: default_fonts()?,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel range covered by `rect`, clipped to the image
    fn pixel_span(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.min.x.floor().max(0.0) as u32;
        let y0 = rect.min.y.floor().max(0.0) as u32;
        let x1 = (rect.max.x.ceil().max(0.0) as u32).min(self.image.width());
        let y1 = (rect.max.y.ceil().max(0.0) as u32).min(self.image.height());
        (x0 < x1 && y0 < y1).then_some((x0, y0, x1, y1))
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
    }

    fn stroke_path(&mut self, points: &[Pos2], width: f32, color: Color32) {
        if points.len() < 2 {
            return;
        }
        let points: Vec<Pos2> = points
            .iter()
            .map(|p| Pos2::new(p.x * self.scale, p.y * self.scale))
            .collect();
        let half = (width * self.scale / 2.0).max(0.5);
        let bounds = crate::stroke::bounds(&points, half + 1.0);
        let Some((x0, y0, x1, y1)) = self.pixel_span(bounds) else {
            return;
        };

        // Max coverage per pixel so overlapping segments don't darken joints
        let span = (x1 - x0) as usize;
        let mut coverage = vec![0.0f32; span * (y1 - y0) as usize];
        for segment in points.windows(2) {
            let seg_rect = Rect::from_two_pos(segment[0], segment[1]).expand(half + 1.0);
            let Some((sx0, sy0, sx1, sy1)) = self.pixel_span(seg_rect) else {
                continue;
            };
            for y in sy0..sy1 {
                for x in sx0..sx1 {
                    let center = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let distance = distance_to_segment(center, segment[0], segment[1]);
                    let c = (half + 0.5 - distance).clamp(0.0, 1.0);
                    let cell = &mut coverage[(y - y0) as usize * span + (x - x0) as usize];
                    *cell = cell.max(c);
                }
            }
        }

        let rgba = color.to_srgba_unmultiplied();
        for y in y0..y1 {
            for x in x0..x1 {
                let c = coverage[(y - y0) as usize * span + (x - x0) as usize];
                blend(&mut self.image, x, y, rgba, c);
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = Pos2::new(center.x * self.scale, center.y * self.scale);
        let radius = radius * self.scale;
        let rect = Rect::from_center_size(center, egui::Vec2::splat(2.0 * radius + 2.0));
        let Some((x0, y0, x1, y1)) = self.pixel_span(rect) else {
            return;
        };
        let rgba = color.to_srgba_unmultiplied();
        for y in y0..y1 {
            for x in x0..x1 {
                let distance = center.distance(Pos2::new(x as f32 + 0.5, y as f32 + 0.5));
                let c = (radius + 0.5 - distance).clamp(0.0, 1.0);
                blend(&mut self.image, x, y, rgba, c);
            }
        }
    }

    fn draw_text(&mut self, origin: Pos2, text: &str, size: f32, color: Color32) {
        let Self {
            image,
            scale,
            fonts,
        } = self;
        let px = PxScale::from(size * *scale);
        let rgba = color.to_srgba_unmultiplied();
        let mut caret = ab_glyph::point(origin.x * *scale, origin.y * *scale);

        for ch in text.chars() {
            let Some(font) = fonts.iter().find(|f| f.glyph_id(ch).0 != 0) else {
                log::debug!("No export font has a glyph for {:?}", ch);
                continue;
            };
            let scaled = font.as_scaled(px);
            let mut glyph = scaled.scaled_glyph(ch);
            glyph.position = caret;
            caret.x += scaled.h_advance(glyph.id);

            let Some(outlined) = font.outline_glyph(glyph) else {
                continue;
            };
            let bounds = outlined.px_bounds();
            outlined.draw(|gx, gy, c| {
                let x = bounds.min.x as i64 + gx as i64;
                let y = bounds.min.y as i64 + gy as i64;
                if x >= 0 && y >= 0 && (x as u32) < image.width() && (y as u32) < image.height() {
                    blend(image, x as u32, y as u32, rgba, c);
                }
            });
        }
    }
}

fn default_fonts() -> ExportResult<Vec<FontArc>> {
    [
        epaint_default_fonts::UBUNTU_LIGHT,
        epaint_default_fonts::NOTO_EMOJI_REGULAR,
        epaint_default_fonts::EMOJI_ICON,
    ]
    .into_iter()
    .map(|bytes| FontArc::try_from_slice(bytes).map_err(ExportError::from))
    .collect()
}

/// Source-over blend of an unmultiplied color scaled by `coverage`
fn blend(image: &mut RgbaImage, x: u32, y: u32, color: [u8; 4], coverage: f32) {
    let src_a = color[3] as f32 / 255.0 * coverage;
    if src_a <= 0.0 {
        return;
    }
    let dst = image.get_pixel_mut(x, y);
    let dst_a = dst[3] as f32 / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    for i in 0..3 {
        let src = color[i] as f32 * src_a;
        let below = dst[i] as f32 * dst_a * (1.0 - src_a);
        dst[i] = ((src + below) / out_a).round().clamp(0.0, 255.0) as u8;
    }
    dst[3] = (out_a * 255.0).round() as u8;
}

/// Distance from a point to a line segment
fn distance_to_segment(point: Pos2, start: Pos2, end: Pos2) -> f32 {
    let line = end - start;
    let len_sq = line.length_sq();
    if len_sq == 0.0 {
        return point.distance(start);
    }
    let t = ((point - start).dot(line) / len_sq).clamp(0.0, 1.0);
    point.distance(start + line * t)
}
