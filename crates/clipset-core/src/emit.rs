use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::{
    error::Result,
    format::{EDIT_TYPE_MAP_FILE, format_caption},
    media::Media,
    types::{Clip, EditType, EditTypeIndex},
};

/// Writes clips and captions into the output folder and collects the index.
pub struct Emitter {
    output_dir: PathBuf,
    fps: u32,
    index: EditTypeIndex,
}

impl Emitter {
    pub fn new(output_dir: &Path, fps: u32) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            fps,
            index: EditTypeIndex::new(),
        }
    }

    pub fn index(&self) -> &EditTypeIndex {
        &self.index
    }

    /// Emit `<name>.mp4` and `<name>.txt` and record `edit_type` under `name`.
    pub async fn emit<M: Media>(
        &mut self,
        media: &M,
        name: &str,
        clip: &Clip,
        caption: &str,
        edit_caption: &str,
        edit_type: EditType,
    ) -> Result<()> {
        self.index.insert(name, edit_type)?;

        let video_path = self.output_dir.join(format!("{}.mp4", name));
        media.write_clip(&video_path, clip, self.fps).await?;

        let caption_path = self.output_dir.join(format!("{}.txt", name));
        fs::write(&caption_path, format_caption(caption, edit_caption)).await?;

        debug!(name, %edit_type, "emitted clip");
        Ok(())
    }

    /// Write `edit_type_map.json` and hand back the index.
    pub async fn finish(self) -> Result<EditTypeIndex> {
        let path = self.output_dir.join(EDIT_TYPE_MAP_FILE);
        let json = serde_json::to_string(&self.index)?;
        fs::write(&path, json).await?;
        Ok(self.index)
    }
}
