use std::path::{Path, PathBuf};

pub fn get_root_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("clipset")
}

/// Directory holding downloaded YouTube sources
pub fn get_youtube_cache_dir(cache_root: &Path) -> PathBuf {
    cache_root.join("youtube")
}

/// Get the path for a cached YouTube source video
pub fn get_youtube_video_path(cache_root: &Path, video_id: &str) -> PathBuf {
    get_youtube_cache_dir(cache_root).join(format!("{}.mp4", video_id))
}

/// Get the path of a LOVEU source video inside the dataset folder
pub fn get_loveu_video_path(loveu_dir: &Path, section_folder: &str, video_name: &str) -> PathBuf {
    loveu_dir
        .join(section_folder)
        .join("480p_videos")
        .join(format!("{}.mp4", video_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn youtube_path_keeps_leading_dash_ids() {
        let path = get_youtube_video_path(Path::new("/cache"), "-aAcv7W9SJo");
        assert_eq!(path, PathBuf::from("/cache/youtube/-aAcv7W9SJo.mp4"));
    }

    #[test]
    fn loveu_path_layout() {
        let path = get_loveu_video_path(Path::new("/data/loveu"), "DAVIS_480p", "gold-fish");
        assert_eq!(
            path,
            PathBuf::from("/data/loveu/DAVIS_480p/480p_videos/gold-fish.mp4")
        );
    }
}
