/// Name of the edit-type index written at the end of every run
pub const EDIT_TYPE_MAP_FILE: &str = "edit_type_map.json";

/// Base name for the `edit`-th edit of the `entry`-th Dreamix source
pub fn dreamix_clip_name(entry: usize, edit: usize) -> String {
    format!("{:02}_{:02}", entry, edit)
}

/// Base name for the `edit`-th edit of the `clip`-th window of a YouTube video
pub fn youtube_clip_name(video_id: &str, clip: usize, edit: usize) -> String {
    format!("{}_{:02}_{:02}", video_id, clip, edit)
}

/// Base name for the `edit`-th edit of a LOVEU video
pub fn loveu_clip_name(video_name: &str, edit: usize) -> String {
    format!("{}_{:02}", video_name, edit)
}

/// Two-line caption file body: source caption, then edit caption
pub fn format_caption(caption: &str, edit_caption: &str) -> String {
    format!("{}\n{}", caption, edit_caption)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clip_names_are_zero_padded() {
        assert_eq!(dreamix_clip_name(3, 0), "03_00");
        assert_eq!(youtube_clip_name("w78UUl5E1Z8", 1, 0), "w78UUl5E1Z8_01_00");
        assert_eq!(loveu_clip_name("gold-fish", 3), "gold-fish_03");
    }

    #[test]
    fn caption_has_no_trailing_newline() {
        assert_eq!(format_caption("a cat", "a dog"), "a cat\na dog");
    }
}
