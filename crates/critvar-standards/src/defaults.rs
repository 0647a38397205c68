//! Built-in catalogue of critical variables for diabetes datasets.

use critvar_model::{Result, VariableCatalog};

/// Default variables and their synonyms, in reporting order.
pub const DEFAULT_VARIABLES: &[(&str, &[&str])] = &[
    // Fasting plasma glucose
    (
        "glucosa",
        &[
            "glucosa",
            "glucemia",
            "glucose",
            "blood glucose",
            "glucosa mg dl",
            "fpg",
            "fasting plasma glucose",
            "azucar en sangre",
            "glc",
            "glucose_mg_dl",
            "Glucose",
        ],
    ),
    (
        "bmi",
        &[
            "bmi",
            "imc",
            "indice de masa corporal",
            "body mass index",
            "bmi_calculado",
            "BMI",
        ],
    ),
    (
        "edad",
        &[
            "edad",
            "age",
            "years",
            "anios",
            "años",
            "edad_paciente",
            "patient_age",
            "Age",
        ],
    ),
    // Glycated haemoglobin
    (
        "hba1c",
        &[
            "hba1c",
            "hemoglobina glucosilada",
            "hemoglobina glicosilada",
            "a1c",
            "hemoglobina_a1c",
            "glycated_hemoglobin",
        ],
    ),
    // Often split across fruit/vegetable intake columns
    (
        "dieta",
        &[
            "dieta",
            "diet",
            "vegetales",
            "verduras",
            "frutas",
            "consumo de frutas",
            "consumo de vegetales",
            "vegetable intake",
            "fruit intake",
            "consumo_frutas_diario",
            "consumo_vegetales_diario",
        ],
    ),
    (
        "obesidad",
        &[
            "obesidad",
            "obesity",
            "obese",
            "diagnostico obesidad",
            "diagnostico_obesidad",
            "obesity_diagnosis",
        ],
    ),
    // Excessive thirst
    (
        "polidipsia",
        &[
            "polidipsia",
            "polydipsia",
            "sed excesiva",
            "excessive thirst",
            "sed_excesiva",
            "excessive_thirst",
        ],
    ),
    (
        "embarazo",
        &[
            "embarazo",
            "pregnancy",
            "pregnant",
            "gestacion",
            "gestación",
            "estado_embarazo",
            "pregnancy_status",
        ],
    ),
];

/// Variables every diabetes dataset is expected to carry.
pub const CORE_CRITICAL_VARIABLES: [&str; 4] = ["glucosa", "bmi", "edad", "hba1c"];

/// Builds the default catalogue.
pub fn default_catalog() -> Result<VariableCatalog> {
    VariableCatalog::from_pairs(
        DEFAULT_VARIABLES
            .iter()
            .map(|(key, synonyms)| (*key, synonyms.iter().copied())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use critvar_model::MatchPolicy;

    #[test]
    fn default_catalog_is_valid_and_ordered() {
        let catalog = default_catalog().unwrap();
        assert_eq!(
            catalog.keys(),
            vec![
                "glucosa",
                "bmi",
                "edad",
                "hba1c",
                "dieta",
                "obesidad",
                "polidipsia",
                "embarazo"
            ]
        );
        assert_eq!(
            catalog.get("dieta").unwrap().policy,
            MatchPolicy::DietAggregate
        );
        assert_eq!(catalog.get("glucosa").unwrap().synonyms.len(), 11);
    }

    #[test]
    fn core_variables_are_in_defaults() {
        let catalog = default_catalog().unwrap();
        for key in CORE_CRITICAL_VARIABLES {
            assert!(catalog.contains(key), "{key}");
        }
    }
}
