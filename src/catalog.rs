//! Tag Catalog
//!
//! The compiled-in tag palette. Adding or removing a tag is a code
//! change, not a runtime operation.

use crate::models::{Tag, TaskError};

/// Tag palette: catalog order is display order
const TAG_DEFS: &[(&str, &str)] = &[
    ("work", "rgba(137, 43, 226, 0.308)"),
    ("study", "rgb(117, 242, 250)"),
    ("entertainment", "rgb(247, 147, 148)"),
    ("family", "rgb(184, 255, 179)"),
];

/// All catalog tags in display order
pub fn list_tags() -> Vec<Tag> {
    TAG_DEFS
        .iter()
        .map(|(title, color)| Tag {
            title: (*title).to_string(),
            color: (*color).to_string(),
        })
        .collect()
}

/// Look up a catalog tag by title
pub fn find_tag(title: &str) -> Option<Tag> {
    TAG_DEFS
        .iter()
        .find(|(t, _)| *t == title)
        .map(|(t, color)| Tag {
            title: (*t).to_string(),
            color: (*color).to_string(),
        })
}

/// Check a task's tag references against the catalog.
///
/// Tasks reference tags by title, so a stray string would otherwise
/// drift silently. Rejects the first title not present in the catalog.
pub fn validate_tags(tags: &[String]) -> Result<(), TaskError> {
    match tags.iter().find(|t| find_tag(t).is_none()) {
        Some(unknown) => Err(TaskError::UnknownTag(unknown.clone())),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contents_and_order() {
        let tags = list_tags();

        assert_eq!(tags.len(), 4);
        assert_eq!(tags[0].title, "work");
        assert_eq!(tags[0].color, "rgba(137, 43, 226, 0.308)");
        assert_eq!(tags[1].title, "study");
        assert_eq!(tags[1].color, "rgb(117, 242, 250)");
        assert_eq!(tags[2].title, "entertainment");
        assert_eq!(tags[2].color, "rgb(247, 147, 148)");
        assert_eq!(tags[3].title, "family");
        assert_eq!(tags[3].color, "rgb(184, 255, 179)");
    }

    #[test]
    fn test_catalog_titles_non_empty_and_unique() {
        let tags = list_tags();

        for (i, tag) in tags.iter().enumerate() {
            assert!(!tag.title.is_empty());
            assert!(
                !tags[i + 1..].iter().any(|other| other.title == tag.title),
                "duplicate tag title: {}",
                tag.title
            );
        }
    }

    #[test]
    fn test_find_tag() {
        assert_eq!(find_tag("study").map(|t| t.color), Some("rgb(117, 242, 250)".to_string()));
        assert!(find_tag("chores").is_none());
        assert!(find_tag("").is_none());
    }

    #[test]
    fn test_validate_tags_accepts_catalog_titles() {
        let tags = vec!["work".to_string(), "family".to_string()];
        assert!(validate_tags(&tags).is_ok());
        assert!(validate_tags(&[]).is_ok());
    }

    #[test]
    fn test_validate_tags_rejects_unknown_title() {
        let tags = vec!["work".to_string(), "chores".to_string()];
        assert_eq!(
            validate_tags(&tags),
            Err(TaskError::UnknownTag("chores".to_string()))
        );
    }
}
