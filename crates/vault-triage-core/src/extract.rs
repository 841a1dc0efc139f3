use crate::frontmatter::Frontmatter;
use crate::walker::NOTE_EXTENSION;

/// Resolve a note's display title.
///
/// Precedence, first match wins:
/// 1. the first level-1 heading (`# Title`) anywhere in the content
/// 2. a scalar `title` in the frontmatter
/// 3. the file name without its `.md` extension
///
/// # Examples
///
/// ```
/// use vault_triage_core::extract::extract_title;
/// use vault_triage_core::frontmatter::parse_frontmatter;
///
/// let content = "---\ntitle: From Frontmatter\n---\nIntro\n# From Heading";
/// let fm = parse_frontmatter(content);
/// assert_eq!(extract_title(content, &fm, "dir/note.md"), "From Heading");
///
/// let fm = parse_frontmatter("");
/// assert_eq!(extract_title("", &fm, "dir/note.md"), "note");
/// ```
pub fn extract_title(content: &str, frontmatter: &Frontmatter, path: &str) -> String {
    if let Some(heading) = content.lines().find_map(level_one_heading) {
        return heading.to_string();
    }

    if let Some(title) = frontmatter.scalar("title") {
        return title.to_string();
    }

    file_stem(path).to_string()
}

/// Tags from a `tags` list in the frontmatter, in declaration order.
pub fn extract_tags(frontmatter: &Frontmatter) -> Vec<String> {
    frontmatter
        .list("tags")
        .map(|tags| tags.to_vec())
        .unwrap_or_default()
}

fn level_one_heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('#')?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let text = rest.trim();
    (!text.is_empty()).then_some(text)
}

fn file_stem(path: &str) -> &str {
    let name = path.rsplit('/').next().unwrap_or(path);
    name.strip_suffix(NOTE_EXTENSION)
        .and_then(|n| n.strip_suffix('.'))
        .filter(|n| !n.is_empty())
        .unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parse_frontmatter;

    fn title_of(content: &str, path: &str) -> String {
        extract_title(content, &parse_frontmatter(content), path)
    }

    #[test]
    fn test_title_from_heading() {
        assert_eq!(title_of("# Note One\n\nSome content here.", "note1.md"), "Note One");
    }

    #[test]
    fn test_heading_is_found_anywhere() {
        let content = "intro paragraph\n\n## Section\n#   Late Title  \n";
        assert_eq!(title_of(content, "a.md"), "Late Title");
    }

    #[test]
    fn test_heading_beats_frontmatter_title() {
        let content = "---\ntitle: Custom Title\n---\n# Real Heading";
        assert_eq!(title_of(content, "a.md"), "Real Heading");
    }

    #[test]
    fn test_frontmatter_title_fallback() {
        let content = "---\ntags:\n  - meta\ntitle: Custom Title\n---\nBody text without heading.";
        assert_eq!(title_of(content, "frontmatter-only.md"), "Custom Title");
    }

    #[test]
    fn test_list_title_is_ignored() {
        let content = "---\ntitle: [a, b]\n---\n";
        assert_eq!(title_of(content, "folder/listy.md"), "listy");
    }

    #[test]
    fn test_filename_fallback() {
        assert_eq!(title_of("", "empty.md"), "empty");
        assert_eq!(title_of("plain", "a/b/deep.note.md"), "deep.note");
    }

    #[test]
    fn test_not_level_one_headings() {
        let content = "#tag\n##Two\n## Two\n#\n#   \n";
        assert_eq!(title_of(content, "fallback.md"), "fallback");
    }

    #[test]
    fn test_tags_from_both_shapes() {
        let block = parse_frontmatter("---\ntags:\n  - journal\n  - daily\n---");
        assert_eq!(extract_tags(&block), vec!["journal", "daily"]);

        let inline = parse_frontmatter("---\ntags: [project, active]\n---");
        assert_eq!(extract_tags(&inline), vec!["project", "active"]);
    }

    #[test]
    fn test_missing_or_scalar_tags() {
        assert!(extract_tags(&parse_frontmatter("# No frontmatter")).is_empty());
        assert!(extract_tags(&parse_frontmatter("---\ntags: solo\n---")).is_empty());
    }
}
