mod choice;
mod gallery;
mod loader;
mod media;
mod notice;
mod ordering;
mod question;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use choice::ChoiceQuizView;
pub use gallery::GalleryView;
pub use notice::{Notice, NoticeKind};
pub use ordering::OrderingQuizView;
