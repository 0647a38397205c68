/// Splits a comma-separated synonym list, trimming entries and dropping
/// blanks.
pub fn parse_synonym_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_and_trims() {
        assert_eq!(
            parse_synonym_list(" glucose, fpg ,, blood sugar ,"),
            vec!["glucose", "fpg", "blood sugar"]
        );
        assert!(parse_synonym_list("").is_empty());
        assert!(parse_synonym_list(" , ").is_empty());
    }
}
