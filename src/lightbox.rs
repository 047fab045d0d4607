//! Gallery lightbox: `Closed` or `Open` on exactly one image.
//!
//! Switching from one open image to another is not a transition; the lightbox
//! has to be closed first.

use crate::content;
use crate::types::GalleryImage;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum LightboxError {
    #[error("no gallery image with id {0}")]
    UnknownImage(u32),
    #[error("image {open} is already open")]
    AlreadyOpen { open: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lightbox {
    #[default]
    Closed,
    Open(&'static GalleryImage),
}

impl Lightbox {
    /// Select a thumbnail.
    pub fn open(&mut self, id: u32) -> Result<&'static GalleryImage, LightboxError> {
        if let Lightbox::Open(current) = self {
            return Err(LightboxError::AlreadyOpen { open: current.id });
        }
        let image = content::gallery_image(id).ok_or(LightboxError::UnknownImage(id))?;
        *self = Lightbox::Open(image);
        log::debug!("lightbox opened on image {id}");
        Ok(image)
    }

    /// The explicit close button.
    pub fn close(&mut self) {
        *self = Lightbox::Closed;
    }

    /// A click on the dimmed area around the enlarged image.
    pub fn backdrop_click(&mut self) {
        self.close();
    }

    pub fn selected(&self) -> Option<u32> {
        match self {
            Lightbox::Closed => None,
            Lightbox::Open(image) => Some(image.id),
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Lightbox::Open(_))
    }
}
