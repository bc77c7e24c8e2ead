use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use raylib::prelude::*;
use exif::{In, Reader, Tag, Value};
use tracing::warn;
use crate::errors::{DeckError, Result};

const SLIDE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "gif"];

fn lowercase_extension(path: &Path) -> String {
    path.extension().and_then(|s| s.to_str()).unwrap_or("").to_lowercase()
}

/// Image files directly inside `dir`, ordered by file name. Deck order is this order.
pub fn load_sorted_image_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|source| DeckError::ReadDir { path: dir.to_path_buf(), source })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| DeckError::ReadDir { path: dir.to_path_buf(), source })?;
        let path = entry.path();
        if path.is_file() && SLIDE_EXTENSIONS.contains(&lowercase_extension(&path).as_str()) {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(DeckError::NoImages(dir.to_path_buf()));
    }
    Ok(paths)
}

/// EXIF orientation tag, 1 (upright) when absent. Only JPEG carries it reliably.
fn read_orientation(path: &Path, bytes: &[u8]) -> u16 {
    match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => match exif.get_field(Tag::Orientation, In::PRIMARY).map(|field| &field.value) {
            Some(Value::Short(values)) if !values.is_empty() => values[0],
            _ => 1,
        },
        Err(e) => {
            warn!(path = %path.display(), error = %e, "could not read EXIF data");
            1
        }
    }
}

pub fn load_texture_with_exif_rotation(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    image_path: &Path,
) -> Result<Texture2D> {
    let file_bytes = fs::read(image_path)
        .map_err(|source| DeckError::ReadImage { path: image_path.to_path_buf(), source })?;

    let extension = lowercase_extension(image_path);
    let orientation = if extension == "jpg" || extension == "jpeg" {
        read_orientation(image_path, &file_bytes)
    } else {
        1
    };

    let mut image = Image::load_image_from_mem(&format!(".{extension}"), &file_bytes)
        .map_err(|e| DeckError::DecodeImage { path: image_path.to_path_buf(), reason: e.to_string() })?;

    // 3 = 180 deg, 6 = 90 deg CW, 8 = 90 deg CCW. Mirrored orientations are ignored.
    match orientation {
        3 => {
            image.rotate_cw();
            image.rotate_cw();
        }
        6 => image.rotate_cw(),
        8 => image.rotate_ccw(),
        _ => {}
    }

    rl.load_texture_from_image(thread, &image)
        .map_err(|e| DeckError::Texture { path: image_path.to_path_buf(), reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_images_in_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path();
        for name in ["03-end.PNG", "01-intro.jpg", "notes.txt", "02-middle.jpeg"] {
            fs::write(dir.join(name), b"").unwrap();
        }
        fs::create_dir(dir.join("04-folder.png")).unwrap();

        let names: Vec<String> = load_sorted_image_paths(dir)
            .unwrap()
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["01-intro.jpg", "02-middle.jpeg", "03-end.PNG"]);
    }

    #[test]
    fn directory_without_images_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(tmp.path().join("readme.md"), b"").unwrap();
        assert!(matches!(load_sorted_image_paths(tmp.path()), Err(DeckError::NoImages(_))));
    }

    #[test]
    fn missing_directory_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing");
        assert!(matches!(load_sorted_image_paths(&missing), Err(DeckError::ReadDir { .. })));
    }

    #[test]
    fn non_exif_bytes_default_to_upright() {
        assert_eq!(read_orientation(Path::new("plain.jpg"), b"not a jpeg"), 1);
    }
}
