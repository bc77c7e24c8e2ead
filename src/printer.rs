use std::fs;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use tracing::debug;
use crate::constants::*;
use crate::errors::{DeckError, Result};
use crate::layout::Layout;
use crate::slide::Slide;
use crate::state::{DeckState, Frame};
use crate::window::{Window, draw_page};

/// File name of the printed page for a 1-based slide number.
pub fn page_file_name(slide: usize, total: usize) -> String {
    let width = total.to_string().len().max(2);
    format!("slide-{slide:0width$}.png")
}

/// Removes a page left over from an earlier print.
fn clear_stale_page(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(DeckError::Print(format!("cannot replace {:?}: {}", path, e))),
    }
}

/// Writes every slide of the deck as a PNG page.
pub struct Printer {
    dir: PathBuf,
}

impl Printer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn print(&self, window: &mut Window, slides: &[Slide]) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(&self.dir)
            .map_err(|e| DeckError::Print(format!("cannot create {:?}: {}", self.dir, e)))?;

        let total = slides.len();
        let mut state = DeckState::new(total)?;
        let layout = Layout::new(RENDER_WIDTH as f32, RENDER_HEIGHT as f32, total);

        let (rl, thread) = window.handle();
        let mut framebuffer = rl
            .load_render_texture(thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
            .map_err(|e| DeckError::Print(format!("cannot create render texture: {}", e)))?;

        let mut pages = Vec::with_capacity(total);
        for (i, slide) in slides.iter().enumerate() {
            state.jump(i + 1);
            let frame = Frame::from_state(&state);

            rl.draw_texture_mode(thread, &mut framebuffer, |mut tmd| {
                let mut d = tmd.begin_drawing(thread);
                draw_page(&mut d, slide, &layout, &frame);
            });

            // Render textures come back bottom-up
            let mut image = framebuffer
                .load_image()
                .map_err(|e| DeckError::Print(format!("cannot read back page {}: {}", i + 1, e)))?;
            image.flip_vertical();

            let path = self.dir.join(page_file_name(i + 1, total));
            let path_str = path
                .to_str()
                .ok_or_else(|| DeckError::Print(format!("non UTF-8 output path {:?}", path)))?;
            clear_stale_page(&path)?;
            image.export_image(path_str);
            if !path.is_file() {
                return Err(DeckError::Print(format!("page {} was not written to {:?}", i + 1, path)));
            }
            debug!(page = i + 1, slide = %slide.name, path = %path.display(), "printed page");
            pages.push(path);
        }

        Ok(pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_names_sort_in_deck_order() {
        assert_eq!(page_file_name(1, 8), "slide-01.png");
        assert_eq!(page_file_name(8, 8), "slide-08.png");
        assert_eq!(page_file_name(7, 120), "slide-007.png");
    }

    #[test]
    fn stale_page_is_removed_before_export() {
        let tmp = tempfile::tempdir().unwrap();
        let page = tmp.path().join(page_file_name(1, 8));
        fs::write(&page, b"old print").unwrap();

        clear_stale_page(&page).unwrap();
        assert!(!page.exists());
    }

    #[test]
    fn missing_page_is_fine_to_clear() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(clear_stale_page(&tmp.path().join("slide-01.png")).is_ok());
    }

    #[test]
    fn directory_in_place_of_page_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let page = tmp.path().join("slide-01.png");
        fs::create_dir(&page).unwrap();
        assert!(matches!(clear_stale_page(&page), Err(DeckError::Print(_))));
    }
}
