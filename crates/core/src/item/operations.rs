use super::error::{ItemError, MISSING_LANGUAGE, MISSING_PK, MISSING_PK_OR_SK};
use super::types::{Item, ItemView};

/// Returns the parameter when present and non-empty.
pub fn non_empty_param(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Validates the partition key path parameter.
pub fn require_pk(pk: Option<&str>) -> Result<&str, ItemError> {
    non_empty_param(pk).ok_or_else(|| ItemError::validation(MISSING_PK))
}

/// Validates the partition and sort key path parameters.
pub fn require_keys<'a>(
    pk: Option<&'a str>,
    sk: Option<&'a str>,
) -> Result<(&'a str, &'a str), ItemError> {
    match (non_empty_param(pk), non_empty_param(sk)) {
        (Some(pk), Some(sk)) => Ok((pk, sk)),
        _ => Err(ItemError::validation(MISSING_PK_OR_SK)),
    }
}

/// Validates the target language query parameter.
pub fn require_language(language: Option<&str>) -> Result<&str, ItemError> {
    non_empty_param(language).ok_or_else(|| ItemError::validation(MISSING_LANGUAGE))
}

/// Projects queried items and, when a filter is given, keeps only those whose
/// `otherAttr` matches it exactly. Query order is preserved.
pub fn project_items(items: &[Item], filter: Option<&str>) -> Vec<ItemView> {
    let filter = non_empty_param(filter);

    items
        .iter()
        .filter(|item| filter.is_none_or(|f| item.other_attr == f))
        .map(Item::to_view)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partition() -> Vec<Item> {
        vec![
            Item::new("user1", "a").with_other_attr("red"),
            Item::new("user1", "b").with_other_attr("blue"),
            Item::new("user1", "c").with_other_attr("red"),
            Item::new("user1", "d"),
        ]
    }

    #[test]
    fn test_project_without_filter_returns_everything_in_order() {
        let views = project_items(&partition(), None);
        let keys: Vec<&str> = views.iter().map(|v| v.sk.as_str()).collect();
        assert_eq!(keys, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_project_with_filter_keeps_ordered_subset() {
        let views = project_items(&partition(), Some("red"));
        let keys: Vec<&str> = views.iter().map(|v| v.sk.as_str()).collect();
        assert_eq!(keys, vec!["a", "c"]);
    }

    #[test]
    fn test_project_filter_is_exact_match() {
        assert!(project_items(&partition(), Some("Red")).is_empty());
        assert!(project_items(&partition(), Some("re")).is_empty());
    }

    #[test]
    fn test_empty_filter_means_no_filter() {
        assert_eq!(project_items(&partition(), Some("")).len(), 4);
    }

    #[test]
    fn test_project_empty_partition() {
        assert!(project_items(&[], Some("red")).is_empty());
    }

    #[test]
    fn test_require_keys() {
        assert_eq!(require_keys(Some("p"), Some("s")).unwrap(), ("p", "s"));
        assert_eq!(
            require_keys(Some("p"), None).unwrap_err(),
            ItemError::validation(MISSING_PK_OR_SK)
        );
        assert_eq!(
            require_keys(Some(""), Some("s")).unwrap_err(),
            ItemError::validation(MISSING_PK_OR_SK)
        );
    }

    #[test]
    fn test_require_pk_and_language() {
        assert_eq!(require_pk(Some("p")).unwrap(), "p");
        assert!(require_pk(None).is_err());
        assert_eq!(require_language(Some("fr")).unwrap(), "fr");
        assert_eq!(
            require_language(Some("")).unwrap_err(),
            ItemError::validation(MISSING_LANGUAGE)
        );
    }
}
