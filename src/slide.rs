use raylib::prelude::*;

pub struct Slide {
    image: Texture2D,
    pub name: String,
}

/// Largest scale that fits `width × height` inside `bounds` without distortion.
pub fn fit_scale(width: f32, height: f32, bounds: &Rectangle) -> f32 {
    if width <= 0.0 || height <= 0.0 {
        return 0.0;
    }
    (bounds.width / width).min(bounds.height / height)
}

impl Slide {
    pub fn new(image: Texture2D, name: String) -> Self {
        Self { image, name }
    }

    /// Draws the slide centered in `panel`, scaled to fit.
    pub fn draw(&self, d: &mut RaylibDrawHandle, panel: &Rectangle) {
        let tex_width = self.image.width() as f32;
        let tex_height = self.image.height() as f32;

        let scale = fit_scale(tex_width, tex_height, panel);
        let scaled_width = tex_width * scale;
        let scaled_height = tex_height * scale;

        let dest = Rectangle::new(
            panel.x + (panel.width - scaled_width) * 0.5,
            panel.y + (panel.height - scaled_height) * 0.5,
            scaled_width,
            scaled_height,
        );

        d.draw_texture_pro(
            &self.image,
            Rectangle::new(0.0, 0.0, tex_width, tex_height),
            dest,
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }
}
