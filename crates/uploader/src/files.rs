//! Folder listing and caption parsing for the upload job.

use std::path::Path;

use regex::Regex;

use crate::error::UploadError;

/// List `.jpg` file names in a folder, sorted by the trailing number in the
/// file name so `2.jpg` comes before `10.jpg` (a plain lexicographic sort
/// would interleave them).
pub fn list_images(dir: &Path) -> Result<Vec<String>, UploadError> {
    if !dir.is_dir() {
        return Err(UploadError::MissingFolder(dir.to_path_buf()));
    }

    let trailing_number = Regex::new(r"(\d+)\.jpg$").expect("static regex");

    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| name.ends_with(".jpg"))
        .collect();

    names.sort_by_key(|name| {
        trailing_number
            .captures(name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok())
            .unwrap_or(0)
    });

    Ok(names)
}

/// Read captions from a newline-separated file, one per image in order.
/// Blank lines are valid captions meaning "none".
pub fn read_captions(path: &Path) -> Result<Vec<String>, UploadError> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .map(|line| line.trim_end_matches('\r').to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::fs;

    fn temp_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("meridian-uploader-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn images_sort_numerically_not_lexicographically() {
        let dir = temp_dir("sort");
        for name in ["10.jpg", "2.jpg", "1.jpg", "notes.txt"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let names = list_images(&dir).unwrap();
        assert_eq!(names, vec!["1.jpg", "2.jpg", "10.jpg"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn trailing_number_anywhere_in_name_is_used() {
        let dir = temp_dir("prefix");
        for name in ["venice_12.jpg", "venice_3.jpg"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let names = list_images(&dir).unwrap();
        assert_eq!(names, vec!["venice_3.jpg", "venice_12.jpg"]);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_folder_is_an_error() {
        let missing = std::env::temp_dir().join("meridian-uploader-does-not-exist");
        assert!(matches!(
            list_images(&missing),
            Err(UploadError::MissingFolder(_))
        ));
    }

    #[test]
    fn captions_preserve_blank_lines() {
        let dir = temp_dir("captions");
        let path = dir.join("captions.txt");
        fs::write(&path, "First caption\n\nThird caption\n").unwrap();

        let captions = read_captions(&path).unwrap();
        assert_eq!(captions, vec!["First caption", "", "Third caption"]);

        fs::remove_dir_all(&dir).unwrap();
    }
}
