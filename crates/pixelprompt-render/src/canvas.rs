use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use image::RgbImage;
use pixelprompt::Rgb;

/// RGB pixel buffer that embedded-graphics can draw into.
///
/// Pixels outside the buffer are dropped.
#[derive(Clone, Debug)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// `width` x `height` buffer filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, image::Rgb(background.channels())),
        }
    }

    pub fn as_rgb(&self) -> &RgbImage {
        &self.image
    }

    pub fn into_image(self) -> RgbImage {
        self.image
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.image.width(), self.image.height())
    }
}

impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.image.dimensions();
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if x < width && y < height {
                self.image
                    .put_pixel(x, y, image::Rgb([color.r(), color.g(), color.b()]));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_canvas_is_filled_with_background() {
        let canvas = Canvas::new(4, 3, Rgb(10, 20, 30));
        assert_eq!(canvas.size(), Size::new(4, 3));
        assert!(canvas.as_rgb().pixels().all(|p| p.0 == [10, 20, 30]));
    }

    #[test]
    fn out_of_bounds_pixels_are_clipped() {
        let mut canvas = Canvas::new(2, 2, Rgb::WHITE);
        let pixels = [
            Pixel(Point::new(-1, 0), Rgb888::BLACK),
            Pixel(Point::new(1, 1), Rgb888::BLACK),
            Pixel(Point::new(2, 0), Rgb888::BLACK),
            Pixel(Point::new(0, 5), Rgb888::BLACK),
        ];
        let Ok(()) = canvas.draw_iter(pixels);
        let image = canvas.into_image();
        assert_eq!(image.get_pixel(1, 1).0, [0, 0, 0]);
        assert_eq!(image.pixels().filter(|p| p.0 == [0, 0, 0]).count(), 1);
    }
}
