use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};

use exif::{In, Reader, Tag, Value};
use raylib::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::media::MediaItem;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to decode image data for {path:?}: {reason}")]
    Decode { path: PathBuf, reason: String },
    #[error("failed to create texture for {path:?}: {reason}")]
    Texture { path: PathBuf, reason: String },
}

/// Rotation baked into a photo before upload, taken from its EXIF orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Normal,
    HalfTurn,
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    // 1 = top-left, 3 = bottom-right, 6 = top-right, 8 = bottom-left.
    // Mirrored variants are shown as-is.
    pub fn from_exif(value: u16) -> Self {
        match value {
            3 => Orientation::HalfTurn,
            6 => Orientation::Clockwise,
            8 => Orientation::CounterClockwise,
            _ => Orientation::Normal,
        }
    }

    fn apply(self, image: &mut Image) {
        match self {
            Orientation::Normal => {}
            Orientation::HalfTurn => {
                image.rotate_cw();
                image.rotate_cw();
            }
            Orientation::Clockwise => image.rotate_cw(),
            Orientation::CounterClockwise => image.rotate_ccw(),
        }
    }
}

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_lowercase()
}

/// Reads the EXIF orientation of JPEG bytes; anything unreadable counts as normal.
pub fn read_orientation(bytes: &[u8], extension: &str) -> Orientation {
    if extension != "jpg" && extension != "jpeg" {
        return Orientation::Normal;
    }

    let exif = match Reader::new().read_from_container(&mut Cursor::new(bytes)) {
        Ok(exif) => exif,
        Err(e) => {
            debug!("no usable EXIF data: {}", e);
            return Orientation::Normal;
        }
    };

    exif.get_field(Tag::Orientation, In::PRIMARY)
        .and_then(|field| match &field.value {
            Value::Short(values) => values.first().copied(),
            _ => None,
        })
        .map(Orientation::from_exif)
        .unwrap_or(Orientation::Normal)
}

/// Resolves slide sources against the media directory and uploads them as textures.
pub struct MediaLoader {
    root: PathBuf,
}

impl MediaLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn resolve(&self, item: &MediaItem) -> PathBuf {
        self.root.join(&item.source)
    }

    pub fn load(
        &self,
        rl: &mut RaylibHandle,
        thread: &RaylibThread,
        item: &MediaItem,
    ) -> Result<Texture2D, LoadError> {
        let path = self.resolve(item);
        let file_bytes = fs::read(&path).map_err(|source| LoadError::Read {
            path: path.clone(),
            source,
        })?;

        let extension = lowercase_extension(&path);
        let orientation = read_orientation(&file_bytes, &extension);

        let mut image = Image::load_image_from_mem(&format!(".{}", extension), &file_bytes)
            .map_err(|e| LoadError::Decode {
                path: path.clone(),
                reason: e.to_string(),
            })?;
        orientation.apply(&mut image);

        let texture = rl
            .load_texture_from_image(thread, &image)
            .map_err(|e| LoadError::Texture {
                path: path.clone(),
                reason: e.to_string(),
            })?;

        // CPU copy is no longer needed once the texture is on the GPU
        drop(image);

        debug!(
            id = item.id,
            width = texture.width(),
            height = texture.height(),
            ?orientation,
            "loaded {:?}",
            path
        );
        Ok(texture)
    }

    /// Checks the media directory up front so a wrong path shows in the log
    /// rather than only as 64 placeholders.
    pub fn check_root(&self) {
        match fs::metadata(&self.root) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => warn!("media path {:?} is not a directory", self.root),
            Err(e) => warn!("media directory {:?} is not accessible: {}", self.root, e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exif_values_map_to_quarter_turns() {
        assert_eq!(Orientation::from_exif(1), Orientation::Normal);
        assert_eq!(Orientation::from_exif(3), Orientation::HalfTurn);
        assert_eq!(Orientation::from_exif(6), Orientation::Clockwise);
        assert_eq!(Orientation::from_exif(8), Orientation::CounterClockwise);
        assert_eq!(Orientation::from_exif(2), Orientation::Normal);
        assert_eq!(Orientation::from_exif(0), Orientation::Normal);
    }

    #[test]
    fn non_jpeg_is_never_rotated() {
        assert_eq!(read_orientation(b"\x89PNG\r\n", "png"), Orientation::Normal);
    }

    #[test]
    fn garbage_jpeg_falls_back_to_normal() {
        assert_eq!(read_orientation(b"not a jpeg", "jpg"), Orientation::Normal);
        assert_eq!(read_orientation(&[], "jpeg"), Orientation::Normal);
    }

    #[test]
    fn sources_resolve_under_media_root() {
        let loader = MediaLoader::new("public");
        let item = MediaItem::photo(12);
        assert_eq!(loader.resolve(&item), PathBuf::from("public/foto12.jpg"));
    }

    #[test]
    fn extension_is_lowercased() {
        assert_eq!(lowercase_extension(Path::new("a/FOTO1.JPG")), "jpg");
        assert_eq!(lowercase_extension(Path::new("noext")), "");
    }

    #[test]
    fn read_error_names_the_path() {
        let err = LoadError::Read {
            path: PathBuf::from("public/foto3.jpg"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("foto3.jpg"));
    }
}
