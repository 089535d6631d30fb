//! Default placeholder image selection.
//!
//! Trainees and users created without a photo/avatar get one of a fixed
//! set of bundled placeholder files. Selection is deterministic: the same
//! name always maps to the same file, so repeated creates and test runs
//! are stable.

use std::hash::{DefaultHasher, Hash, Hasher};

/// Number of bundled placeholder images (`img1.jpg` .. `img8.jpg`).
pub const PLACEHOLDER_IMAGE_COUNT: u64 = 8;

/// Pick the placeholder filename for a record, keyed on its name fields.
///
/// `seed` is `"{nom} {prenom}"` for a stagiaire and the login for a
/// utilisateur. `DefaultHasher` is keyed with fixed constants, so the
/// mapping is stable across processes.
pub fn default_image(seed: &str) -> String {
    let mut hasher = DefaultHasher::new();
    seed.hash(&mut hasher);
    let index = hasher.finish() % PLACEHOLDER_IMAGE_COUNT + 1;
    format!("img{index}.jpg")
}

/// Whether `file` is one of the bundled placeholder filenames.
pub fn is_placeholder(file: &str) -> bool {
    (1..=PLACEHOLDER_IMAGE_COUNT).any(|i| file == format!("img{i}.jpg"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_image_is_a_valid_placeholder() {
        for seed in ["El Amrani Yassine", "Benali Fatima", "admin", ""] {
            let file = default_image(seed);
            assert!(
                is_placeholder(&file),
                "{file} must be one of the {PLACEHOLDER_IMAGE_COUNT} placeholder files"
            );
        }
    }

    #[test]
    fn test_default_image_is_deterministic() {
        assert_eq!(default_image("Tazi Omar"), default_image("Tazi Omar"));
    }

    #[test]
    fn test_is_placeholder_rejects_other_files() {
        assert!(!is_placeholder("photo.png"));
        assert!(!is_placeholder("img9.jpg"));
        assert!(!is_placeholder("img0.jpg"));
        assert!(is_placeholder("img1.jpg"));
        assert!(is_placeholder("img8.jpg"));
    }
}
