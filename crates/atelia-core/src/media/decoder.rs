use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::{Error, Result};

/// Dimensions of a successfully decoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
}

/// Turns an image source into decoded pixels
#[async_trait]
pub trait ImageDecoder: Send + Sync {
    async fn decode(&self, src: &str) -> Result<DecodedImage>;
}

/// Decodes sources as paths relative to a base directory
#[derive(Debug, Clone)]
pub struct FsImageDecoder {
    base_dir: PathBuf,
}

impl FsImageDecoder {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn resolve(&self, src: &str) -> PathBuf {
        let path = Path::new(src);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

#[async_trait]
impl ImageDecoder for FsImageDecoder {
    async fn decode(&self, src: &str) -> Result<DecodedImage> {
        let path = self.resolve(src);
        let bytes = tokio::fs::read(&path).await?;

        tokio::task::spawn_blocking(move || decode_image_bytes(&bytes))
            .await
            .map_err(|e| Error::ImageDecode(format!("Task failed: {}", e)))?
    }
}

/// Decode image bytes with format detection
fn decode_image_bytes(bytes: &[u8]) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(Error::ImageDecode("Empty data".to_string()));
    }

    let image = image::load_from_memory(bytes)
        .map_err(|e| Error::ImageDecode(format!("{} ({}B)", e, bytes.len())))?;

    Ok(DecodedImage {
        width: image.width(),
        height: image.height(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("atelia-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_resolve_relative_and_absolute() {
        let decoder = FsImageDecoder::new("/srv/site");
        assert_eq!(
            decoder.resolve("image/a.jpg"),
            PathBuf::from("/srv/site/image/a.jpg")
        );
        assert_eq!(decoder.resolve("/tmp/b.png"), PathBuf::from("/tmp/b.png"));
    }

    #[test]
    fn test_empty_bytes_rejected() {
        assert!(matches!(decode_image_bytes(&[]), Err(Error::ImageDecode(_))));
    }

    #[tokio::test]
    async fn test_decode_png_from_disk() {
        let dir = scratch_dir("decode-png");
        let path = dir.join("tile.png");
        image::RgbImage::new(3, 2).save(&path).unwrap();

        let decoder = FsImageDecoder::new(&dir);
        let decoded = decoder.decode("tile.png").await.unwrap();
        assert_eq!(decoded, DecodedImage { width: 3, height: 2 });
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let decoder = FsImageDecoder::new(scratch_dir("decode-missing"));
        let err = decoder.decode("absent.jpg").await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[tokio::test]
    async fn test_garbage_bytes_fail_to_decode() {
        let dir = scratch_dir("decode-garbage");
        std::fs::write(dir.join("junk.jpg"), b"definitely not an image").unwrap();

        let decoder = FsImageDecoder::new(&dir);
        let err = decoder.decode("junk.jpg").await.unwrap_err();
        assert!(matches!(err, Error::ImageDecode(_)));
    }
}
