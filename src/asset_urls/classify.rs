//! Extension-based classification of media paths.

const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".gif", ".webp", ".avif", ".svg"];

const VIDEO_EXTENSIONS: &[&str] = &[".mp4", ".webm", ".mov", ".avi", ".mkv"];

/// Returns `true` when the path names an image file.
pub fn is_image_path(path: &str) -> bool {
    has_extension(path, IMAGE_EXTENSIONS)
}

/// Returns `true` when the path names a video file.
pub fn is_video_path(path: &str) -> bool {
    has_extension(path, VIDEO_EXTENSIONS)
}

fn has_extension(path: &str, extensions: &[&str]) -> bool {
    let lowered = path.to_ascii_lowercase();
    extensions.iter().any(|ext| lowered.ends_with(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_images_case_insensitively() {
        assert!(is_image_path("images/Cakes/cake_1.jpg"));
        assert!(is_image_path("images/logo.PNG"));
        assert!(is_image_path("placeholder.svg"));
        assert!(!is_image_path("videos/intro.mp4"));
        assert!(!is_image_path("images/readme"));
    }

    #[test]
    fn classifies_videos() {
        assert!(is_video_path("videos/Sweets_14.mp4"));
        assert!(is_video_path("clip.WebM"));
        assert!(!is_video_path("images/cake.jpg"));
    }
}
