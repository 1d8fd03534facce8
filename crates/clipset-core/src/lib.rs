//! Clipset Core Library
//!
//! Downloads source videos, cuts fixed-length square clip windows with ffmpeg,
//! and writes them alongside source/edit caption pairs and an edit-type index.

pub mod cache;
pub mod catalog;
pub mod emit;
pub mod error;
pub mod fetch;
pub mod format;
pub mod loveu;
pub mod media;
pub mod pipeline;
pub mod types;

// Re-export commonly used items at crate root
pub use cache::{get_loveu_video_path, get_root_cache_dir, get_youtube_video_path};
pub use catalog::{DREAMIX, LOVEU_NAMES, YOUTUBE};
pub use emit::Emitter;
pub use error::{ClipsetError, Result};
pub use fetch::{Fetch, HttpFetcher};
pub use format::{EDIT_TYPE_MAP_FILE, format_caption};
pub use media::{Ffmpeg, Media};
pub use pipeline::{RunObserver, run_dreamix, run_loveu, run_youtube};
pub use types::{
    Clip, ClipSpec, CropAnchor, CropRect, DreamixEntry, Edit, EditType, EditTypeIndex, LoveuRow,
    LoveuSection, RunConfig, YoutubeClip, YoutubeEntry,
};
