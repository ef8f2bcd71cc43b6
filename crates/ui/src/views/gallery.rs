use std::path::Path;

use dioxus::prelude::*;
use services::gallery::ROOT_FOLDER;
use services::{GalleryFolders, ImageGallery};
use tracing::warn;

use crate::context::AppContext;
use crate::vm::{NO_IMAGES_MESSAGE, folder_label, map_gallery};

use super::notice::{Notice, NoticeKind};

fn scan_folders(root: &Path) -> GalleryFolders {
    GalleryFolders::scan(root).unwrap_or_else(|err| {
        warn!(root = %root.display(), error = %err, "gallery root unreadable");
        GalleryFolders::empty(root)
    })
}

fn open_folder(folders: &GalleryFolders, choice: &str) -> ImageGallery {
    if folders.is_empty() {
        return ImageGallery::default();
    }
    let dir = folders.folder_path(choice);
    ImageGallery::open(&dir).unwrap_or_else(|err| {
        warn!(dir = %dir.display(), error = %err, "gallery folder unreadable");
        ImageGallery::default()
    })
}

#[component]
pub fn GalleryView() -> Element {
    let ctx = use_context::<AppContext>();
    let folders = use_hook(|| scan_folders(ctx.settings().gallery_root()));
    let mut selected = use_signal(|| ROOT_FOLDER.to_string());
    let mut gallery = {
        let folders = folders.clone();
        use_signal(move || open_folder(&folders, ROOT_FOLDER))
    };

    let choices = folders.choices().to_vec();
    let current_choice = selected.read().clone();
    let image = map_gallery(&gallery.read());

    rsx! {
        div { class: "page gallery-page",
            h2 { "Concepts App" }
            h3 { "Select Image Directory" }
            if !choices.is_empty() {
                div { class: "gallery__folders",
                    label { r#for: "gallery-folder", "Choose image folder:" }
                    select {
                        id: "gallery-folder",
                        onchange: move |evt: FormEvent| {
                            let choice = evt.value();
                            gallery.set(open_folder(&folders, &choice));
                            selected.set(choice);
                        },
                        for choice in choices {
                            option {
                                key: "{choice}",
                                value: "{choice}",
                                selected: choice == current_choice,
                                "{folder_label(&choice)}"
                            }
                        }
                    }
                }
            }
            match image {
                Some(image) => rsx! {
                    h3 { "Image Gallery" }
                    figure { class: "gallery__image",
                        img { src: "{image.src}", alt: "{image.caption}" }
                        figcaption { "{image.caption}" }
                    }
                    div { class: "gallery__nav",
                        button {
                            class: "btn btn-secondary",
                            id: "gallery-previous",
                            r#type: "button",
                            disabled: !image.has_previous,
                            onclick: move |_| gallery.write().show_previous(),
                            "⬅️ Previous"
                        }
                        button {
                            class: "btn btn-secondary",
                            id: "gallery-next",
                            r#type: "button",
                            disabled: !image.has_next,
                            onclick: move |_| gallery.write().show_next(),
                            "➡️ Next"
                        }
                    }
                },
                None => rsx! {
                    Notice { kind: NoticeKind::Warning, message: NO_IMAGES_MESSAGE.to_string() }
                },
            }
        }
    }
}
