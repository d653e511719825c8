/// Strips the final extension from a content file name.
///
/// `"intro.md"` becomes `"intro"`; dotfiles and extension-less names are
/// returned unchanged.
pub fn file_stem(name: &str) -> &str {
    match name.rfind('.') {
        Some(pos) if pos > 0 => &name[..pos],
        _ => name,
    }
}

/// Derives an entry identity key from a file stem.
///
/// Lowercases, keeps ASCII and Unicode alphanumerics plus `-` and `_`,
/// turns spaces into hyphens, and drops everything else. An empty result
/// falls back to `"entry"` so an id always exists.
pub fn slugify(stem: &str) -> String {
    let mut slug = String::with_capacity(stem.len());

    for ch in stem.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            slug.push(ch.to_ascii_lowercase());
        } else if ch == ' ' {
            slug.push('-');
        } else if !ch.is_ascii() && ch.is_alphanumeric() {
            for lower in ch.to_lowercase() {
                slug.push(lower);
            }
        }
    }

    if slug.is_empty() {
        slug.push_str("entry");
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stems_drop_one_extension() {
        assert_eq!(file_stem("intro.md"), "intro");
        assert_eq!(file_stem("notes.2024.md"), "notes.2024");
        assert_eq!(file_stem("README"), "README");
        assert_eq!(file_stem(".gitignore"), ".gitignore");
    }

    #[test]
    fn basic_slugs() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("intro"), "intro");
        assert_eq!(slugify("My_Post-2"), "my_post-2");
    }

    #[test]
    fn punctuation_is_dropped() {
        assert_eq!(slugify("what's new?"), "whats-new");
        assert_eq!(slugify("c++ tips"), "c-tips");
    }

    #[test]
    fn unicode_alphanumerics_survive() {
        assert_eq!(slugify("日本語 ガイド"), "日本語-ガイド");
        assert_eq!(slugify("Héllo"), "héllo");
    }

    #[test]
    fn empty_stems_fall_back() {
        assert_eq!(slugify(""), "entry");
        assert_eq!(slugify("!!!"), "entry");
    }
}
