use crate::error::{Error, Result};
use crate::types::Entry;
use glob::Pattern;

/// Query entries by glob patterns on the key (OR logic)
/// Returns entries matching any of the provided patterns, in their original order
pub fn query_entries<'a, I>(entries: I, patterns: &[&str]) -> Result<Vec<Entry>>
where
    I: IntoIterator<Item = &'a Entry>,
{
    // Compile all patterns first to fail fast on invalid patterns
    let compiled_patterns: Vec<Pattern> = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| Error::InvalidGlobPattern {
                pattern: p.to_string(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // Keep if ANY pattern matches
    let queried = entries
        .into_iter()
        .filter(|entry| {
            compiled_patterns
                .iter()
                .any(|pattern| pattern.matches(&entry.key))
        })
        .cloned()
        .collect();

    Ok(queried)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_entries() -> Vec<Entry> {
        vec![
            Entry::new("Scene.LastOpened", "Assets/Main.unity"),
            Entry::new("Scene.ViewMode", "2"),
            Entry::new("kAutoRefresh", "1"),
            Entry::new("UnityEditor.Layout", "Default"),
            Entry::new("UnityEditor.Theme", "dark"),
        ]
    }

    fn keys(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.key.as_str()).collect()
    }

    #[test]
    fn test_query_single_pattern() {
        let entries = create_test_entries();
        let queried = query_entries(&entries, &["Scene.*"]).unwrap();
        assert_eq!(keys(&queried), ["Scene.LastOpened", "Scene.ViewMode"]);
    }

    #[test]
    fn test_query_multiple_patterns_or_logic() {
        let entries = create_test_entries();
        let queried = query_entries(&entries, &["Scene.*", "kAutoRefresh"]).unwrap();
        assert_eq!(queried.len(), 3);
        assert!(queried.iter().any(|e| e.key == "kAutoRefresh"));
    }

    #[test]
    fn test_query_no_matches() {
        let entries = create_test_entries();
        let queried = query_entries(&entries, &["nonexistent.*"]).unwrap();
        assert!(queried.is_empty());
    }

    #[test]
    fn test_query_invalid_pattern() {
        let entries = create_test_entries();
        let result = query_entries(&entries, &["[invalid"]);
        assert!(matches!(result, Err(Error::InvalidGlobPattern { .. })));
    }

    #[test]
    fn test_query_is_case_sensitive() {
        let entries = create_test_entries();
        let queried = query_entries(&entries, &["unityeditor.*"]).unwrap();
        assert!(queried.is_empty());
    }

    #[test]
    fn test_query_keeps_order() {
        let entries = create_test_entries();
        let queried = query_entries(&entries, &["*Theme", "*Layout"]).unwrap();
        assert_eq!(keys(&queried), ["UnityEditor.Layout", "UnityEditor.Theme"]);
    }
}
