use std::io::Cursor;

use image::{DynamicImage, ImageFormat};
use rand::Rng;

use crate::error::ImageConnectorError;

static BUNDLED_FRAMES: &[(&str, &[u8])] = &[
    ("frame-1.png", include_bytes!("../data/frame-1.png")),
    ("frame-2.png", include_bytes!("../data/frame-2.png")),
    ("frame-3.png", include_bytes!("../data/frame-3.png")),
    ("frame-4.png", include_bytes!("../data/frame-4.png")),
    ("frame-5.png", include_bytes!("../data/frame-5.png")),
    ("frame-6.png", include_bytes!("../data/frame-6.png")),
];

/// The fixed set of frames this connector draws from, decoded once at startup.
pub struct ImageSet {
    images: Vec<DynamicImage>,
}

impl ImageSet {
    pub fn bundled() -> Result<Self, ImageConnectorError> {
        let mut images = Vec::with_capacity(BUNDLED_FRAMES.len());
        for (name, bytes) in BUNDLED_FRAMES.iter().copied() {
            let decoded = image::load_from_memory(bytes)
                .map_err(|source| ImageConnectorError::ImageDecode { name, source })?;
            images.push(decoded);
        }
        if images.is_empty() {
            return Err(ImageConnectorError::EmptyImageSet);
        }
        Ok(Self { images })
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Return a random image from the set
    pub fn get_random_image(&self) -> &DynamicImage {
        let index = rand::thread_rng().gen_range(0..self.images.len());
        &self.images[index]
    }
}

/// Serialize an image to the jpeg bytes that make up a record payload
pub fn to_record_bytes(image: &DynamicImage) -> Result<Vec<u8>, ImageConnectorError> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)
        .map_err(ImageConnectorError::ImageEncode)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_bundled_set_is_complete() -> Result<(), ImageConnectorError> {
        let images = ImageSet::bundled()?;
        assert_eq!(images.len(), BUNDLED_FRAMES.len());
        assert!(!images.is_empty());
        Ok(())
    }

    #[test]
    fn test_random_selection_draws_from_the_set() -> Result<(), ImageConnectorError> {
        //given
        let images = ImageSet::bundled()?;

        //when / then
        for _ in 0..100 {
            let selected = images.get_random_image();
            assert!(images
                .images
                .iter()
                .any(|member| std::ptr::eq(member, selected)));
        }
        Ok(())
    }

    #[test]
    fn test_every_frame_serializes_to_jpeg() -> Result<(), ImageConnectorError> {
        let images = ImageSet::bundled()?;
        for image in &images.images {
            let bytes = to_record_bytes(image)?;
            assert!(!bytes.is_empty());
            // jpeg start-of-image marker
            assert_eq!(bytes[..2], [0xFF, 0xD8]);
        }
        Ok(())
    }
}
