use rand::seq::IndexedRandom;
use rand::Rng;
use std::fs;
use std::path::Path;

/// Served when the backgrounds directory exists but holds no images.
pub const DEFAULT_BACKGROUND: &str = "/static/backgrounds/default.jpg";

/// Served when the backgrounds directory cannot be read at all.
pub const REMOTE_FALLBACK: &str = "https://source.unsplash.com/1600x900/?food,meal,cooking";

fn is_image(name: &str) -> bool {
    let lower = name.to_lowercase();
    lower.ends_with(".jpg") || lower.ends_with(".jpeg") || lower.ends_with(".png")
}

/// Picks one image uniformly at random from the backgrounds directory and
/// returns its public URL. Falls back per the constants above.
pub fn pick<R: Rng + ?Sized>(dir: &Path, rng: &mut R) -> String {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!("Failed to read backgrounds directory {}: {e}", dir.display());
            return REMOTE_FALLBACK.to_string();
        }
    };

    let files: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_image(name))
        .collect();

    match files.choose(rng) {
        Some(chosen) => format!("/static/backgrounds/{chosen}"),
        None => DEFAULT_BACKGROUND.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn picks_one_of_the_images() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("home.jpg")).unwrap();
        File::create(dir.path().join("login.PNG")).unwrap();
        File::create(dir.path().join("notes.txt")).unwrap();

        let mut rng = rand::rng();
        for _ in 0..10 {
            let url = pick(dir.path(), &mut rng);
            assert!(
                url == "/static/backgrounds/home.jpg" || url == "/static/backgrounds/login.PNG",
                "unexpected pick: {url}"
            );
        }
    }

    #[test]
    fn empty_directory_yields_the_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut rng = rand::rng();
        assert_eq!(pick(dir.path(), &mut rng), DEFAULT_BACKGROUND);
    }

    #[test]
    fn unreadable_directory_yields_the_remote_fallback() {
        let mut rng = rand::rng();
        let url = pick(Path::new("/definitely/not/a/real/dir"), &mut rng);
        assert_eq!(url, REMOTE_FALLBACK);
    }
}
