use std::path::Path;

use tokio::fs;
use tracing::{debug, info, warn};

use crate::{
    cache::{get_loveu_video_path, get_youtube_video_path},
    emit::Emitter,
    error::{ClipsetError, Result},
    fetch::Fetch,
    format::{dreamix_clip_name, loveu_clip_name, youtube_clip_name},
    loveu::read_manifest,
    media::Media,
    types::{Clip, ClipSpec, CropAnchor, DreamixEntry, EditTypeIndex, RunConfig, YoutubeEntry},
};

/// Progress hooks for a dataset run.
pub trait RunObserver {
    fn started(&self, _total: usize) {}
    fn source_started(&self, _label: &str) {}
    fn source_skipped(&self, _label: &str, _reason: &str) {}
    fn source_finished(&self, _label: &str) {}
}

impl RunObserver for () {}

/// Decode a clip window, honoring `skip_mismatched` for short sources.
async fn read_clip<M: Media>(
    media: &M,
    source: &Path,
    spec: &ClipSpec,
    config: &RunConfig,
    label: &str,
    observer: &impl RunObserver,
) -> Result<Option<Clip>> {
    match media.read_clip(source, spec).await {
        Ok(clip) => Ok(Some(clip)),
        Err(e) if config.skip_mismatched && e.is_frame_count_mismatch() => {
            warn!(source = label, error = %e, "skipping clip window");
            observer.source_skipped(label, &e.to_string());
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

/// Build the Dreamix set from its project page videos.
pub async fn run_dreamix<M: Media, F: Fetch>(
    config: &RunConfig,
    entries: &[DreamixEntry],
    media: &M,
    fetch: &F,
    observer: &impl RunObserver,
) -> Result<EditTypeIndex> {
    fs::create_dir_all(&config.output_dir).await?;
    let mut emitter = Emitter::new(&config.output_dir, config.fps);
    observer.started(entries.len());

    for (i, entry) in entries.iter().enumerate() {
        observer.source_started(entry.url);
        info!(url = entry.url, edits = entry.edits.len(), "processing dreamix source");

        let cropped = {
            let download = fetch.fetch_url(entry.url).await?;
            media.precrop(&download, &entry.crop_rect()).await?
        };

        let spec = config.clip_spec(entry.offset_t, CropAnchor::Left(entry.offset_w));
        if let Some(clip) = read_clip(media, &cropped, &spec, config, entry.url, observer).await? {
            for (j, edit) in entry.edits.iter().enumerate() {
                emitter
                    .emit(
                        media,
                        &dreamix_clip_name(i, j),
                        &clip,
                        entry.caption,
                        edit.caption,
                        edit.edit_type,
                    )
                    .await?;
            }
        }
        observer.source_finished(entry.url);
    }

    emitter.finish().await
}

/// Build the YouTube set, downloading sources into `cache_root` once.
pub async fn run_youtube<M: Media, F: Fetch>(
    config: &RunConfig,
    cache_root: &Path,
    entries: &[YoutubeEntry],
    media: &M,
    fetch: &F,
    observer: &impl RunObserver,
) -> Result<EditTypeIndex> {
    fs::create_dir_all(&config.output_dir).await?;
    let mut emitter = Emitter::new(&config.output_dir, config.fps);
    observer.started(entries.len());

    for entry in entries {
        observer.source_started(entry.video_id);
        let source = get_youtube_video_path(cache_root, entry.video_id);
        if source.exists() {
            debug!(video_id = entry.video_id, "using cached download");
        } else {
            info!(video_id = entry.video_id, url = %entry.watch_url(), "downloading");
            fetch.fetch_youtube(entry.video_id, &source).await?;
        }

        for (j, window) in entry.clips.iter().enumerate() {
            let spec = config.clip_spec(window.offset_t, CropAnchor::Left(window.offset_w));
            let label = format!("{}#{}", entry.video_id, j);
            let Some(clip) = read_clip(media, &source, &spec, config, &label, observer).await?
            else {
                continue;
            };

            for (k, edit) in window.edits.iter().enumerate() {
                emitter
                    .emit(
                        media,
                        &youtube_clip_name(entry.video_id, j, k),
                        &clip,
                        window.caption,
                        edit.caption,
                        edit.edit_type,
                    )
                    .await?;
            }
        }
        observer.source_finished(entry.video_id);
    }

    emitter.finish().await
}

/// Build the LOVEU-TGVE set from a local dataset folder.
pub async fn run_loveu<M: Media>(
    config: &RunConfig,
    loveu_dir: &Path,
    media: &M,
    observer: &impl RunObserver,
) -> Result<EditTypeIndex> {
    let rows = read_manifest(loveu_dir)?;
    fs::create_dir_all(&config.output_dir).await?;
    let mut emitter = Emitter::new(&config.output_dir, config.fps);
    observer.started(rows.len());

    for row in &rows {
        observer.source_started(&row.video_name);
        let source = get_loveu_video_path(loveu_dir, row.section.folder(), &row.video_name);
        if !source.exists() {
            return Err(ClipsetError::MissingSource { path: source });
        }
        info!(video = %row.video_name, section = row.section.folder(), "processing loveu video");

        let spec = config.clip_spec(0.0, CropAnchor::Center);
        if let Some(clip) =
            read_clip(media, &source, &spec, config, &row.video_name, observer).await?
        {
            for (j, (edit_caption, edit_type)) in row.edits.iter().enumerate() {
                emitter
                    .emit(
                        media,
                        &loveu_clip_name(&row.video_name, j),
                        &clip,
                        &row.caption,
                        edit_caption,
                        *edit_type,
                    )
                    .await?;
            }
        }
        observer.source_finished(&row.video_name);
    }

    emitter.finish().await
}
