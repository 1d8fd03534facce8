use std::{collections::BTreeMap, fmt, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClipsetError, Result};

/// Coarse category of the change an edit caption asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditType {
    Object,
    Style,
    Motion,
    Background,
    MultiSpatial,
    MultiMotion,
}

impl EditType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditType::Object => "object",
            EditType::Style => "style",
            EditType::Motion => "motion",
            EditType::Background => "background",
            EditType::MultiSpatial => "multi_spatial",
            EditType::MultiMotion => "multi_motion",
        }
    }
}

impl fmt::Display for EditType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An edit caption together with its edit type label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edit {
    pub caption: &'static str,
    pub edit_type: EditType,
}

/// Fractional (top, left, bottom, right) rectangle applied before resampling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CropRect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Banner-removal presets for the Dreamix project page videos.
pub const DREAMIX_CROP_PRESETS: [CropRect; 2] = [
    CropRect {
        top: 0.27,
        left: 0.06,
        bottom: 0.73,
        right: 0.48,
    },
    CropRect {
        top: 0.27,
        left: 0.04,
        bottom: 0.73,
        right: 0.50,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct DreamixEntry {
    pub url: &'static str,
    /// Index into [`DREAMIX_CROP_PRESETS`].
    pub crop_preset: usize,
    pub offset_w: f64,
    pub offset_t: f64,
    pub caption: &'static str,
    pub edits: &'static [Edit],
}

impl DreamixEntry {
    pub fn crop_rect(&self) -> CropRect {
        DREAMIX_CROP_PRESETS[self.crop_preset]
    }
}

#[derive(Debug, Clone, Copy)]
pub struct YoutubeClip {
    pub offset_t: f64,
    pub offset_w: f64,
    pub caption: &'static str,
    pub edits: &'static [Edit],
}

#[derive(Debug, Clone, Copy)]
pub struct YoutubeEntry {
    pub video_id: &'static str,
    pub clips: &'static [YoutubeClip],
}

impl YoutubeEntry {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// A LOVEU manifest row that survived section and allow-list filtering.
#[derive(Debug, Clone, PartialEq)]
pub struct LoveuRow {
    pub video_name: String,
    pub section: LoveuSection,
    pub caption: String,
    /// Style, object, background and multiple-change captions, in that order.
    pub edits: Vec<(String, EditType)>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoveuSection {
    Davis,
    Youtube,
    Videvo,
}

impl LoveuSection {
    pub fn folder(&self) -> &'static str {
        match self {
            LoveuSection::Davis => "DAVIS_480p",
            LoveuSection::Youtube => "youtube_480p",
            LoveuSection::Videvo => "videvo_480p",
        }
    }
}

/// Horizontal placement of the square crop window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropAnchor {
    /// Left edge at `fraction * width`, top edge at 0.
    Left(f64),
    /// ffmpeg's default: centered on both axes.
    Center,
}

/// Everything the resample stage needs to cut one clip window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipSpec {
    pub fps: u32,
    pub resolution: u32,
    pub duration: u32,
    pub offset_t: f64,
    pub anchor: CropAnchor,
}

impl ClipSpec {
    pub fn frame_count(&self) -> usize {
        self.duration as usize * self.fps as usize
    }

    pub fn frame_size(&self) -> usize {
        (self.resolution as usize) * (self.resolution as usize) * 3
    }

    /// First frame of the window, `floor(offset_t * fps)`.
    pub fn start_frame(&self) -> usize {
        (self.offset_t * self.fps as f64) as usize
    }
}

/// A fixed-length run of RGB24 frames at a square resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub resolution: u32,
    pub frames: Vec<u8>,
}

impl Clip {
    pub fn frame_size(&self) -> usize {
        (self.resolution as usize) * (self.resolution as usize) * 3
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len() / self.frame_size()
    }

    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        self.frames.chunks_exact(self.frame_size()).nth(index)
    }
}

/// Clip base name to edit type, written once as `edit_type_map.json`.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditTypeIndex(BTreeMap<String, EditType>);

impl EditTypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: &str, edit_type: EditType) -> Result<()> {
        if self.0.contains_key(name) {
            return Err(ClipsetError::DuplicateClip {
                name: name.to_string(),
            });
        }
        self.0.insert(name.to_string(), edit_type);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<EditType> {
        self.0.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Immutable settings shared by every dataset run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_dir: PathBuf,
    pub resolution: u32,
    pub fps: u32,
    pub duration: u32,
    /// Skip sources whose decoded window has the wrong length instead of aborting.
    pub skip_mismatched: bool,
}

impl RunConfig {
    pub fn clip_spec(&self, offset_t: f64, anchor: CropAnchor) -> ClipSpec {
        ClipSpec {
            fps: self.fps,
            resolution: self.resolution,
            duration: self.duration,
            offset_t,
            anchor,
        }
    }
}
