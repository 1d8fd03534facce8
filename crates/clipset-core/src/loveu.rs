//! LOVEU-TGVE-2023 manifest parsing.
//!
//! The manifest is one CSV whose `Video name` column holds three sentinel rows
//! splitting the table into DAVIS, YouTube and Videvo sections.

use std::{io::Read, path::Path};

use serde::Deserialize;

use crate::{
    catalog::is_loveu_name,
    error::{ClipsetError, Result},
    types::{EditType, LoveuRow, LoveuSection},
};

pub const MANIFEST_FILE: &str = "LOVEU-TGVE-2023_Dataset.csv";

const DAVIS_SENTINEL: &str = "DAVIS Videos:";
const YOUTUBE_SENTINEL: &str = "Youtube Videos:";
const VIDEVO_SENTINEL: &str = "Videvo Videos:";

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    #[serde(rename = "Video name")]
    video_name: String,
    #[serde(rename = "Our GT caption", default)]
    caption: String,
    #[serde(rename = "Style Change Caption", default)]
    style: String,
    #[serde(rename = "Object Change Caption", default)]
    object: String,
    #[serde(rename = "Background Change Caption", default)]
    background: String,
    #[serde(rename = "Multiple Changes Caption", default)]
    multiple: String,
}

/// Section of data row `row` given the sentinel row indices.
///
/// The row right before the YouTube and Videvo sentinels is a separator and
/// belongs to no section.
pub fn classify_row(row: usize, davis: usize, youtube: usize, videvo: usize) -> Option<LoveuSection> {
    if davis < row && row + 1 < youtube {
        Some(LoveuSection::Davis)
    } else if youtube < row && row + 1 < videvo {
        Some(LoveuSection::Youtube)
    } else if row > videvo {
        Some(LoveuSection::Videvo)
    } else {
        None
    }
}

/// Parse a manifest, keeping only allow-listed rows inside a section.
pub fn parse_manifest<R: Read>(reader: R, path: &Path) -> Result<Vec<LoveuRow>> {
    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let records = rdr
        .deserialize::<ManifestRecord>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let sentinel = |name: &str| {
        records
            .iter()
            .position(|r| r.video_name == name)
            .ok_or_else(|| ClipsetError::Manifest {
                path: path.to_path_buf(),
                reason: format!("missing sentinel row {:?}", name),
            })
    };
    let davis = sentinel(DAVIS_SENTINEL)?;
    let youtube = sentinel(YOUTUBE_SENTINEL)?;
    let videvo = sentinel(VIDEVO_SENTINEL)?;

    let rows = records
        .into_iter()
        .enumerate()
        .filter_map(|(idx, record)| {
            let section = classify_row(idx, davis, youtube, videvo)?;
            if !is_loveu_name(&record.video_name) {
                return None;
            }
            Some(LoveuRow {
                video_name: record.video_name,
                section,
                caption: record.caption,
                edits: vec![
                    (record.style, EditType::Style),
                    (record.object, EditType::Object),
                    (record.background, EditType::Background),
                    (record.multiple, EditType::MultiSpatial),
                ],
            })
        })
        .collect();

    Ok(rows)
}

/// Read `<loveu_dir>/LOVEU-TGVE-2023_Dataset.csv`.
pub fn read_manifest(loveu_dir: &Path) -> Result<Vec<LoveuRow>> {
    let path = loveu_dir.join(MANIFEST_FILE);
    let file = std::fs::File::open(&path).map_err(|e| open_error(&path, e))?;
    parse_manifest(file, &path)
}

fn open_error(path: &Path, err: std::io::Error) -> ClipsetError {
    match err.kind() {
        std::io::ErrorKind::NotFound => ClipsetError::MissingSource {
            path: path.to_path_buf(),
        },
        _ => ClipsetError::IoError(err),
    }
}
