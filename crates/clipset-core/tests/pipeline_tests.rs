//! Dataset runs against in-memory media and fetch backends

use std::{
    cell::RefCell,
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use clipset_core::{
    Clip, ClipSpec, ClipsetError, CropRect, DreamixEntry, EDIT_TYPE_MAP_FILE, Edit, EditType,
    Fetch, Media, Result, RunConfig, YoutubeClip, YoutubeEntry, get_youtube_video_path,
    media::window_frames, run_dreamix, run_loveu, run_youtube,
};
use tempfile::{TempDir, TempPath};

/// Decodes every source to `frames` blank frames, or 1 frame for sources
/// whose path contains one of `short`.
struct FakeMedia {
    frames: usize,
    short: Vec<&'static str>,
    reads: RefCell<Vec<PathBuf>>,
}

impl FakeMedia {
    fn new() -> Self {
        Self {
            frames: 64,
            short: Vec::new(),
            reads: RefCell::new(Vec::new()),
        }
    }

    fn with_short(short: &[&'static str]) -> Self {
        Self {
            short: short.to_vec(),
            ..Self::new()
        }
    }
}

impl Media for FakeMedia {
    async fn read_clip(&self, source: &Path, spec: &ClipSpec) -> Result<Clip> {
        self.reads.borrow_mut().push(source.to_path_buf());
        let name = source.to_string_lossy();
        let frames = if self.short.iter().any(|s| name.contains(s)) {
            1
        } else {
            self.frames
        };
        window_frames(source, vec![0u8; frames * spec.frame_size()], spec)
    }

    async fn precrop(&self, source: &Path, _rect: &CropRect) -> Result<TempPath> {
        let cropped = tempfile::Builder::new()
            .prefix(&format!(
                "{}-crop-",
                source.file_stem().unwrap().to_string_lossy()
            ))
            .tempfile()?
            .into_temp_path();
        fs::copy(source, &cropped)?;
        Ok(cropped)
    }

    async fn write_clip(&self, dest: &Path, clip: &Clip, fps: u32) -> Result<()> {
        fs::write(dest, format!("{}@{}", clip.frame_count(), fps))?;
        Ok(())
    }
}

/// Names each download after the URL's last path segment; URLs containing
/// `fail` answer with a 503.
#[derive(Default)]
struct FakeFetch {
    youtube_calls: RefCell<Vec<String>>,
}

impl Fetch for FakeFetch {
    async fn fetch_url(&self, url: &str) -> Result<TempPath> {
        if url.contains("fail") {
            return Err(ClipsetError::HttpStatus {
                url: url.to_string(),
                status: 503,
            });
        }
        let stem = url.rsplit('/').next().unwrap().trim_end_matches(".mp4");
        let file = tempfile::Builder::new()
            .prefix(&format!("{}-", stem))
            .suffix(".mp4")
            .tempfile()?;
        fs::write(file.path(), url)?;
        Ok(file.into_temp_path())
    }

    async fn fetch_youtube(&self, video_id: &str, dest: &Path) -> Result<()> {
        self.youtube_calls.borrow_mut().push(video_id.to_string());
        fs::create_dir_all(dest.parent().unwrap())?;
        fs::write(dest, video_id)?;
        Ok(())
    }
}

fn config(output_dir: &Path) -> RunConfig {
    RunConfig {
        output_dir: output_dir.to_path_buf(),
        resolution: 4,
        fps: 4,
        duration: 2,
        skip_mismatched: false,
    }
}

fn read_index(dir: &Path) -> BTreeMap<String, String> {
    let json = fs::read_to_string(dir.join(EDIT_TYPE_MAP_FILE)).unwrap();
    serde_json::from_str(&json).unwrap()
}

fn count_with_extension(dir: &Path, ext: &str) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .flatten()
        .filter(|e| e.path().extension().is_some_and(|x| x == ext))
        .count()
}

static THREE_EDITS: &[Edit] = &[
    Edit {
        caption: "a cat jumping",
        edit_type: EditType::Motion,
    },
    Edit {
        caption: "a dog sitting",
        edit_type: EditType::Object,
    },
    Edit {
        caption: "a cat sitting in the snow",
        edit_type: EditType::Background,
    },
];

static ONE_EDIT: &[Edit] = &[Edit {
    caption: "a watercolor painting of a river",
    edit_type: EditType::Style,
}];

fn dreamix_entry(url: &'static str, edits: &'static [Edit]) -> DreamixEntry {
    DreamixEntry {
        url,
        crop_preset: 1,
        offset_w: 0.2,
        offset_t: 1.0,
        caption: "a source caption",
        edits,
    }
}

#[tokio::test]
async fn dreamix_emits_one_clip_per_edit() {
    let out = TempDir::new().unwrap();
    let entries = [
        dreamix_entry("https://example.com/cat.mp4", THREE_EDITS),
        dreamix_entry("https://example.com/river.mp4", ONE_EDIT),
    ];

    let index = run_dreamix(&config(out.path()), &entries, &FakeMedia::new(), &FakeFetch::default(), &())
        .await
        .unwrap();

    assert_eq!(index.len(), 4);
    assert_eq!(count_with_extension(out.path(), "mp4"), 4);
    assert_eq!(count_with_extension(out.path(), "txt"), 4);

    let on_disk = read_index(out.path());
    let keys: Vec<_> = on_disk.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["00_00", "00_01", "00_02", "01_00"]);
    assert_eq!(on_disk["00_02"], "background");
    assert_eq!(on_disk["01_00"], "style");

    let caption = fs::read_to_string(out.path().join("00_01.txt")).unwrap();
    assert_eq!(caption, "a source caption\na dog sitting");

    let clip = fs::read_to_string(out.path().join("01_00.mp4")).unwrap();
    assert_eq!(clip, "8@4");
}

#[tokio::test]
async fn http_failure_aborts_before_writing_that_entry() {
    let out = TempDir::new().unwrap();
    let entries = [
        dreamix_entry("https://example.com/cat.mp4", THREE_EDITS),
        dreamix_entry("https://example.com/fail.mp4", ONE_EDIT),
    ];

    let err = run_dreamix(&config(out.path()), &entries, &FakeMedia::new(), &FakeFetch::default(), &())
        .await
        .unwrap_err();

    assert!(matches!(err, ClipsetError::HttpStatus { status: 503, .. }));
    assert!(out.path().join("00_02.mp4").exists());
    assert!(!out.path().join("01_00.mp4").exists());
    assert!(!out.path().join("01_00.txt").exists());
    assert!(!out.path().join(EDIT_TYPE_MAP_FILE).exists());
}

#[tokio::test]
async fn frame_count_mismatch_aborts_by_default() {
    let out = TempDir::new().unwrap();
    let entries = [dreamix_entry("https://example.com/short.mp4", ONE_EDIT)];

    let err = run_dreamix(
        &config(out.path()),
        &entries,
        &FakeMedia::with_short(&["short"]),
        &FakeFetch::default(),
        &(),
    )
    .await
    .unwrap_err();

    assert!(err.is_frame_count_mismatch());
    assert_eq!(count_with_extension(out.path(), "mp4"), 0);
    assert_eq!(count_with_extension(out.path(), "txt"), 0);
}

#[tokio::test]
async fn frame_count_mismatch_can_be_skipped() {
    let out = TempDir::new().unwrap();
    let entries = [
        dreamix_entry("https://example.com/short.mp4", THREE_EDITS),
        dreamix_entry("https://example.com/river.mp4", ONE_EDIT),
    ];
    let config = RunConfig {
        skip_mismatched: true,
        ..config(out.path())
    };

    let index = run_dreamix(
        &config,
        &entries,
        &FakeMedia::with_short(&["short"]),
        &FakeFetch::default(),
        &(),
    )
    .await
    .unwrap();

    let names: Vec<_> = index.names().collect();
    assert_eq!(names, vec!["01_00"]);
    assert!(!out.path().join("00_00.mp4").exists());
    assert_eq!(read_index(out.path()).len(), 1);
}

static BIRD_EDITS: &[Edit] = &[
    Edit {
        caption: "a bird takes flight off a rock",
        edit_type: EditType::Motion,
    },
    Edit {
        caption: "a red cardinal takes flight off a rock",
        edit_type: EditType::MultiMotion,
    },
];

static BIRD_CLIPS: &[YoutubeClip] = &[
    YoutubeClip {
        offset_t: 3.0,
        offset_w: 0.2,
        caption: "a bird sitting on a rock",
        edits: BIRD_EDITS,
    },
    YoutubeClip {
        offset_t: 10.0,
        offset_w: 0.3,
        caption: "a bird sitting on a rock in a river",
        edits: ONE_EDIT,
    },
];

static CAT_CLIPS: &[YoutubeClip] = &[YoutubeClip {
    offset_t: 0.0,
    offset_w: 0.0,
    caption: "a cat in a box",
    edits: THREE_EDITS,
}];

#[tokio::test]
async fn youtube_names_clips_per_window_and_reuses_cache() {
    let out = TempDir::new().unwrap();
    let cache = TempDir::new().unwrap();
    let entries = [
        YoutubeEntry {
            video_id: "6mRgGoa08AQ",
            clips: BIRD_CLIPS,
        },
        YoutubeEntry {
            video_id: "-aAcv7W9SJo",
            clips: CAT_CLIPS,
        },
    ];

    let cached = get_youtube_video_path(cache.path(), "-aAcv7W9SJo");
    fs::create_dir_all(cached.parent().unwrap()).unwrap();
    fs::write(&cached, b"cached").unwrap();

    let fetch = FakeFetch::default();
    let media = FakeMedia::new();
    let index = run_youtube(&config(out.path()), cache.path(), &entries, &media, &fetch, &())
        .await
        .unwrap();

    assert_eq!(*fetch.youtube_calls.borrow(), vec!["6mRgGoa08AQ".to_string()]);
    assert_eq!(media.reads.borrow().len(), 3);

    let names: Vec<_> = index.names().collect();
    assert_eq!(
        names,
        vec![
            "-aAcv7W9SJo_00_00",
            "-aAcv7W9SJo_00_01",
            "-aAcv7W9SJo_00_02",
            "6mRgGoa08AQ_00_00",
            "6mRgGoa08AQ_00_01",
            "6mRgGoa08AQ_01_00",
        ]
    );
    assert_eq!(index.get("6mRgGoa08AQ_00_01"), Some(EditType::MultiMotion));

    let caption = fs::read_to_string(out.path().join("6mRgGoa08AQ_01_00.txt")).unwrap();
    assert_eq!(
        caption,
        "a bird sitting on a rock in a river\na watercolor painting of a river"
    );
}

const LOVEU_CSV: &str = "\
Video name,Our GT caption,Style Change Caption,Object Change Caption,Background Change Caption,Multiple Changes Caption
DAVIS Videos:,,,,,
blackswan,a black swan,s,o,b,m
gold-fish,goldfish swimming,goldfish in van gogh style,koi swimming,goldfish in the sea,koi in the sea in van gogh style
,,,,,
Youtube Videos:,,,,,
raindrops,raindrops on glass,s,o,b,m
,,,,,
Videvo Videos:,,,,,
unlisted-clip,something,s,o,b,m
";

fn loveu_fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("LOVEU-TGVE-2023_Dataset.csv"), LOVEU_CSV).unwrap();
    for (section, name) in [
        ("DAVIS_480p", "blackswan"),
        ("DAVIS_480p", "gold-fish"),
        ("youtube_480p", "raindrops"),
        ("videvo_480p", "unlisted-clip"),
    ] {
        let videos = dir.path().join(section).join("480p_videos");
        fs::create_dir_all(&videos).unwrap();
        fs::write(videos.join(format!("{}.mp4", name)), name).unwrap();
    }
    dir
}

#[tokio::test]
async fn loveu_skips_rows_outside_allow_list() {
    let loveu = loveu_fixture();
    let out = TempDir::new().unwrap();
    let media = FakeMedia::new();

    let index = run_loveu(&config(out.path()), loveu.path(), &media, &())
        .await
        .unwrap();

    assert_eq!(index.len(), 8);
    assert!(index.names().all(|n| n.starts_with("gold-fish_") || n.starts_with("raindrops_")));
    assert_eq!(count_with_extension(out.path(), "mp4"), 8);
    assert!(!out.path().join("blackswan_00.mp4").exists());
    assert!(!out.path().join("unlisted-clip_00.txt").exists());

    let read_names: Vec<_> = media
        .reads
        .borrow()
        .iter()
        .map(|p| p.file_stem().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(read_names, vec!["gold-fish", "raindrops"]);

    let on_disk = read_index(out.path());
    assert_eq!(on_disk["gold-fish_00"], "style");
    assert_eq!(on_disk["gold-fish_01"], "object");
    assert_eq!(on_disk["gold-fish_02"], "background");
    assert_eq!(on_disk["gold-fish_03"], "multi_spatial");

    let caption = fs::read_to_string(out.path().join("gold-fish_01.txt")).unwrap();
    assert_eq!(caption, "goldfish swimming\nkoi swimming");
}

#[tokio::test]
async fn loveu_missing_video_is_fatal() {
    let loveu = loveu_fixture();
    fs::remove_file(loveu.path().join("youtube_480p/480p_videos/raindrops.mp4")).unwrap();
    let out = TempDir::new().unwrap();

    let err = run_loveu(&config(out.path()), loveu.path(), &FakeMedia::new(), &())
        .await
        .unwrap_err();

    assert!(matches!(err, ClipsetError::MissingSource { .. }));
    assert!(!out.path().join(EDIT_TYPE_MAP_FILE).exists());
}

#[tokio::test]
async fn loveu_repeated_row_is_a_duplicate_clip() {
    let loveu = loveu_fixture();
    let csv = LOVEU_CSV.replace(
        "raindrops,raindrops on glass",
        "gold-fish,goldfish again",
    );
    fs::write(loveu.path().join("LOVEU-TGVE-2023_Dataset.csv"), csv).unwrap();
    fs::write(loveu.path().join("youtube_480p/480p_videos/gold-fish.mp4"), "again").unwrap();
    let out = TempDir::new().unwrap();

    let err = run_loveu(&config(out.path()), loveu.path(), &FakeMedia::new(), &())
        .await
        .unwrap_err();

    match err {
        ClipsetError::DuplicateClip { name } => assert_eq!(name, "gold-fish_00"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!out.path().join(EDIT_TYPE_MAP_FILE).exists());
    let caption = fs::read_to_string(out.path().join("gold-fish_00.txt")).unwrap();
    assert_eq!(caption, "goldfish swimming\ngoldfish in van gogh style");
}

#[tokio::test]
async fn temp_downloads_are_removed_after_run() {
    let out = TempDir::new().unwrap();
    let entries = [dreamix_entry("https://example.com/clipset-cleanup-check.mp4", ONE_EDIT)];
    let media = FakeMedia::new();

    run_dreamix(&config(out.path()), &entries, &media, &FakeFetch::default(), &())
        .await
        .unwrap();

    let read = media.reads.borrow()[0].clone();
    assert!(!read.exists());
    let leftovers = fs::read_dir(std::env::temp_dir())
        .unwrap()
        .flatten()
        .filter(|e| {
            e.file_name()
                .to_string_lossy()
                .starts_with("clipset-cleanup-check")
        })
        .count();
    assert_eq!(leftovers, 0);
}
