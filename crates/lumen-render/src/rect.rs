use glam::Vec2;

use crate::{Color, GraphicsContext, TextureHandle};

/// How a rectangle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RectKind {
    #[default]
    Filled,
    /// Outline only, `line_width` thick.
    Border,
}

/// An axis-aligned rectangle in overlay coordinates.
///
/// Corner colors run counter-clockwise from the bottom-left corner. A filled
/// rectangle with a texture samples it across the whole area.
#[derive(Debug, Clone, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
    pub kind: RectKind,
    pub colors: [Color; 4],
    pub line_width: f32,
    pub texture: Option<TextureHandle>,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(width, height),
            kind: RectKind::Filled,
            colors: [Color::WHITE; 4],
            line_width: 1.0,
            texture: None,
        }
    }

    pub fn border(mut self, line_width: f32) -> Self {
        self.kind = RectKind::Border;
        self.line_width = line_width;
        self
    }

    /// Use one color for all four corners.
    pub fn color(mut self, color: Color) -> Self {
        self.colors = [color; 4];
        self
    }

    /// Per-corner colors, bottom-left first, counter-clockwise.
    pub fn gradient(mut self, colors: [Color; 4]) -> Self {
        self.colors = colors;
        self
    }

    pub fn texture(mut self, texture: TextureHandle) -> Self {
        self.texture = Some(texture);
        self
    }

    /// Corners in draw order, matching [`Rect::colors`].
    pub fn corners(&self) -> [Vec2; 4] {
        let min = self.origin;
        let max = self.origin + self.size;
        [min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y)]
    }

    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.origin + self.size;
        point.x >= self.origin.x && point.y >= self.origin.y && point.x <= max.x && point.y <= max.y
    }
}

/// Something that can draw overlay rectangles.
///
/// The overlay passes its graphics context along so the renderer draws with
/// the transform, blend state and color the overlay has established.
pub trait RectRenderer {
    fn draw_rectangle(&mut self, gfx: &mut dyn GraphicsContext, rect: &Rect);
}

impl<R: RectRenderer + ?Sized> RectRenderer for &mut R {
    fn draw_rectangle(&mut self, gfx: &mut dyn GraphicsContext, rect: &Rect) {
        (**self).draw_rectangle(gfx, rect);
    }
}

impl<R: RectRenderer + ?Sized> RectRenderer for Box<R> {
    fn draw_rectangle(&mut self, gfx: &mut dyn GraphicsContext, rect: &Rect) {
        (**self).draw_rectangle(gfx, rect);
    }
}
