//! String manipulation utilities

/// Pluralize a word based on count
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pluralize() {
        assert_eq!(pluralize("cycle", 0), "cycles");
        assert_eq!(pluralize("cycle", 1), "cycle");
        assert_eq!(pluralize("cookbook", 5), "cookbooks");
    }
}
