use std::{
    path::{Path, PathBuf},
    process::Stdio,
};

use tempfile::TempPath;
use tokio::{io::AsyncWriteExt, process::Command};
use tracing::debug;

use crate::{
    error::{ClipsetError, Result},
    types::{Clip, ClipSpec, CropAnchor, CropRect},
};

/// Frame rate used when re-encoding a pre-cropped source.
pub const PRECROP_FPS: u32 = 30;

/// Decode, crop and encode backend.
pub trait Media {
    /// Resample `source` and cut the clip window described by `spec`.
    async fn read_clip(&self, source: &Path, spec: &ClipSpec) -> Result<Clip>;

    /// Crop `source` to `rect` and re-encode it into a temporary file.
    async fn precrop(&self, source: &Path, rect: &CropRect) -> Result<TempPath>;

    /// Encode `clip` as an MP4 at `fps`.
    async fn write_clip(&self, dest: &Path, clip: &Clip, fps: u32) -> Result<()>;
}

/// Filter chain turning a source into square RGB frames at the target rate.
pub fn resample_filter(spec: &ClipSpec) -> String {
    let res = spec.resolution;
    let crop = match spec.anchor {
        CropAnchor::Left(offset_w) => format!("crop={res}:{res}:{offset_w}*iw:0"),
        CropAnchor::Center => format!("crop={res}:{res}"),
    };
    format!(
        "fps=fps={}:round=up,scale=w={res}:h={res}:force_original_aspect_ratio=increase,{crop}",
        spec.fps
    )
}

/// Crop filter keeping `rect` with pixel bounds truncated toward zero.
///
/// Every decoded frame is restamped to `N / PRECROP_FPS`, so the cropped file
/// keeps all source frames and its timeline is counted in 30 fps frames.
pub fn precrop_filter(rect: &CropRect) -> String {
    format!(
        "setpts=N/({fps}*TB),\
         crop=w=trunc(iw*{r})-trunc(iw*{l}):h=trunc(ih*{b})-trunc(ih*{t}):x=trunc(iw*{l}):y=trunc(ih*{t}),\
         scale=trunc(iw/2)*2:trunc(ih/2)*2",
        t = rect.top,
        l = rect.left,
        b = rect.bottom,
        r = rect.right,
        fps = PRECROP_FPS,
    )
}

/// Slice the clip window out of a decoded RGB24 stream.
pub fn window_frames(source: &Path, mut raw: Vec<u8>, spec: &ClipSpec) -> Result<Clip> {
    let frame_size = spec.frame_size();
    if frame_size == 0 || raw.len() % frame_size != 0 {
        return Err(ClipsetError::Decode {
            path: source.to_path_buf(),
            reason: format!("{} bytes at {} bytes per frame", raw.len(), frame_size),
        });
    }

    let total = raw.len() / frame_size;
    let start = spec.start_frame().min(total);
    let end = (start + spec.frame_count()).min(total);

    let expected = spec.frame_count();
    let actual = end - start;
    if actual != expected {
        return Err(ClipsetError::FrameCountMismatch {
            path: source.to_path_buf(),
            expected,
            actual,
        });
    }

    raw.truncate(end * frame_size);
    raw.drain(..start * frame_size);

    Ok(Clip {
        resolution: spec.resolution,
        frames: raw,
    })
}

/// Media backend driving the `ffmpeg` executable.
pub struct Ffmpeg {
    binary: PathBuf,
}

impl Ffmpeg {
    pub fn new() -> Self {
        Self::with_binary("ffmpeg")
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(&self.binary);
        cmd.arg("-hide_banner").arg("-loglevel").arg("error").arg("-y");
        cmd
    }
}

impl Default for Ffmpeg {
    fn default() -> Self {
        Self::new()
    }
}

impl Media for Ffmpeg {
    async fn read_clip(&self, source: &Path, spec: &ClipSpec) -> Result<Clip> {
        let filter = resample_filter(spec);
        debug!(source = %source.display(), %filter, "decoding clip window");

        let output = self
            .command()
            .arg("-i")
            .arg(source)
            .arg("-vf")
            .arg(&filter)
            .arg("-f")
            .arg("rawvideo")
            .arg("-pix_fmt")
            .arg("rgb24")
            .arg("pipe:")
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            return Err(ClipsetError::FfmpegFailed {
                path: source.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        window_frames(source, output.stdout, spec)
    }

    async fn precrop(&self, source: &Path, rect: &CropRect) -> Result<TempPath> {
        let dest = tempfile::Builder::new()
            .prefix("clipset-crop-")
            .suffix(".mp4")
            .tempfile()?
            .into_temp_path();
        let filter = precrop_filter(rect);
        debug!(source = %source.display(), %filter, "pre-cropping source");

        let output = self
            .command()
            .arg("-i")
            .arg(source)
            .arg("-vf")
            .arg(&filter)
            .arg("-r")
            .arg(PRECROP_FPS.to_string())
            .arg("-an")
            .arg("-c:v")
            .arg("libx264")
            .arg("-pix_fmt")
            .arg("yuv420p")
            .arg(&*dest)
            .stdin(Stdio::null())
            .output()
            .await?;

        if !output.status.success() {
            return Err(ClipsetError::FfmpegFailed {
                path: source.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(dest)
    }

    async fn write_clip(&self, dest: &Path, clip: &Clip, fps: u32) -> Result<()> {
        let size = format!("{}x{}", clip.resolution, clip.resolution);
        let mut child = self
            .command()
            .arg("-f")
            .arg("rawvideo")
            .arg("-pix_fmt")
            .arg("rgb24")
            .arg("-s")
            .arg(&size)
            .arg("-r")
            .arg(fps.to_string())
            .arg("-i")
            .arg("pipe:")
            .arg("-c:v")
            .arg("libx264")
            .arg("-pix_fmt")
            .arg("yuv420p")
            .arg(dest)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .spawn()?;

        // ffmpeg may exit before draining stdin; its status explains why.
        let mut written: std::io::Result<()> = Ok(());
        if let Some(mut stdin) = child.stdin.take() {
            written = stdin.write_all(&clip.frames).await;
            if written.is_ok() {
                written = stdin.shutdown().await;
            }
        }

        let output = child.wait_with_output().await?;
        if !output.status.success() {
            return Err(ClipsetError::FfmpegFailed {
                path: dest.to_path_buf(),
                reason: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }
        written?;

        Ok(())
    }
}
