use critvar_model::DietCategory;

/// Fragments marking a fruit intake column (Spanish and English).
pub const FRUIT_KEYWORDS: [&str; 2] = ["frut", "fruit"];

/// Fragments marking a vegetable intake column (Spanish and English).
pub const VEGETABLE_KEYWORDS: [&str; 3] = ["vegetal", "verdura", "vegetable"];

/// Buckets a diet column by its normalized name. Fruit wins over vegetable
/// when both appear.
pub fn classify_diet_column(normalized: &str) -> DietCategory {
    if FRUIT_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        DietCategory::Fruit
    } else if VEGETABLE_KEYWORDS.iter().any(|k| normalized.contains(k)) {
        DietCategory::Vegetable
    } else {
        DietCategory::General
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_by_keyword() {
        assert_eq!(
            classify_diet_column("consumo frutas diario"),
            DietCategory::Fruit
        );
        assert_eq!(
            classify_diet_column("vegetable intake"),
            DietCategory::Vegetable
        );
        assert_eq!(classify_diet_column("verduras"), DietCategory::Vegetable);
        assert_eq!(classify_diet_column("diet score"), DietCategory::General);
        assert_eq!(
            classify_diet_column("frutas y verduras"),
            DietCategory::Fruit
        );
    }
}
