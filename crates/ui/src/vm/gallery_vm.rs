use services::ImageGallery;
use services::gallery::ROOT_FOLDER;

pub const ROOT_FOLDER_LABEL: &str = "Root (assets/images)";
pub const NO_IMAGES_MESSAGE: &str = "No images found in assets/images directory";

#[must_use]
pub fn folder_label(choice: &str) -> String {
    if choice == ROOT_FOLDER {
        ROOT_FOLDER_LABEL.to_string()
    } else {
        choice.to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryImageVm {
    pub src: String,
    pub caption: String,
    pub has_previous: bool,
    pub has_next: bool,
}

/// `None` when the folder has no images to show.
#[must_use]
pub fn map_gallery(gallery: &ImageGallery) -> Option<GalleryImageVm> {
    let current = gallery.current()?;
    Some(GalleryImageVm {
        src: current.display().to_string(),
        caption: gallery.caption()?,
        has_previous: gallery.has_previous(),
        has_next: gallery.has_next(),
    })
}
