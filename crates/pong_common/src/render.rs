use crate::color::Color;

/// Drawing capability handed to a game each frame.
///
/// Coordinates are normalized device coordinates: both axes span `[-1, 1]`
/// with `+y` pointing up.
pub trait Renderer {
    fn clear(&mut self, color: Color);

    /// Fill the axis-aligned rectangle centered at `(x, y)`.
    fn draw_rect(&mut self, x: f32, y: f32, half_width: f32, half_height: f32, color: Color);
}

/// Software renderer over an RGB24 pixel buffer, row-major from the top-left.
pub struct FrameBuffer<'a> {
    pixels: &'a mut [u8],
    width: usize,
    height: usize,
}

impl<'a> FrameBuffer<'a> {
    pub const BYTES_PER_PIXEL: usize = 3;

    pub fn new(pixels: &'a mut [u8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height * Self::BYTES_PER_PIXEL);
        Self {
            pixels,
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// RGB at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<(u8, u8, u8)> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let index = (y * self.width + x) * Self::BYTES_PER_PIXEL;
        match self.pixels.get(index..index + Self::BYTES_PER_PIXEL)? {
            [r, g, b] => Some((*r, *g, *b)),
            _ => None,
        }
    }

    fn blend(&mut self, x: usize, y: usize, color: Color) {
        let index = (y * self.width + x) * Self::BYTES_PER_PIXEL;
        let alpha = color.a as u32;
        let (r, g, b) = color.rgb();
        for (offset, src) in [r, g, b].into_iter().enumerate() {
            let dst = self.pixels[index + offset] as u32;
            self.pixels[index + offset] =
                ((src as u32 * alpha + dst * (255 - alpha) + 127) / 255) as u8;
        }
    }
}

impl Renderer for FrameBuffer<'_> {
    fn clear(&mut self, color: Color) {
        let (r, g, b) = color.rgb();
        for pixel in self.pixels.chunks_exact_mut(Self::BYTES_PER_PIXEL) {
            pixel[0] = r;
            pixel[1] = g;
            pixel[2] = b;
        }
    }

    fn draw_rect(&mut self, x: f32, y: f32, half_width: f32, half_height: f32, color: Color) {
        let left = ndc_to_column(x - half_width, self.width);
        let right = ndc_to_column(x + half_width, self.width);
        let top = ndc_to_row(y + half_height, self.height);
        let bottom = ndc_to_row(y - half_height, self.height);

        for row in top..bottom {
            for column in left..right {
                self.blend(column, row, color);
            }
        }
    }
}

fn ndc_to_column(x: f32, width: usize) -> usize {
    ((x + 1.0) * 0.5 * width as f32)
        .round()
        .clamp(0.0, width as f32) as usize
}

fn ndc_to_row(y: f32, height: usize) -> usize {
    ((1.0 - y) * 0.5 * height as f32)
        .round()
        .clamp(0.0, height as f32) as usize
}
