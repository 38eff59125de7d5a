#[cfg(test)]
mod tests {
    use std::io::Write;

    use recipecart::config::{EngineConfig, MULTIPLIER_ENV_KEY, SYSTEM_ENV_KEY};
    use recipecart::errors::ConfigError;
    use recipecart::ingredient_model::MeasurementSystem;
    use recipecart::shopping::{cart_quantity, infer_measurement_system, search_term};
    use recipecart::RecipeEngine;
    use tempfile::NamedTempFile;

    #[test]
    fn test_engine_from_lookup_config() {
        let config = EngineConfig::from_lookup(|key| match key {
            k if k == SYSTEM_ENV_KEY => Some("metric".to_string()),
            k if k == MULTIPLIER_ENV_KEY => Some("2".to_string()),
            _ => None,
        })
        .unwrap();
        let engine = RecipeEngine::with_config(config).unwrap();

        let list = engine.parse_ingredient_list("1 cup milk\n1 lb butter");
        let adjusted = engine.apply_config(&list);
        assert_eq!(
            adjusted.to_clipboard_text(),
            "473.18 ml milk\n907.18 g butter"
        );
    }

    #[test]
    fn test_invalid_multiplier_is_rejected() {
        let config = EngineConfig::default().with_multiplier(-1.0);
        assert_eq!(
            RecipeEngine::with_config(config).unwrap_err(),
            ConfigError::InvalidMultiplier(-1.0)
        );
    }

    #[test]
    fn test_read_ingredient_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "500 g spaghetti").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "2 cloves garlic, minced").unwrap();
        writeln!(file, "4 tbsp olive oil").unwrap();

        let engine = RecipeEngine::new();
        let list = engine.read_ingredient_file(file.path()).unwrap();

        assert_eq!(list.len(), 3);
        assert_eq!(list.ingredients[1].name, "cloves garlic, minced");
        assert_eq!(infer_measurement_system(&list.ingredients), MeasurementSystem::Us);
    }

    #[test]
    fn test_read_missing_file_reports_path() {
        let engine = RecipeEngine::new();
        let err = engine
            .read_ingredient_file("/definitely/not/here.txt")
            .unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn test_shopping_output_for_parsed_recipe() {
        let engine = RecipeEngine::new();
        let list = engine.parse_ingredient_list("3 lemons\n1 1/2 cups sugar (granulated)\n200 g butter");

        let terms: Vec<String> = list
            .ingredients
            .iter()
            .map(|ingredient| search_term(&ingredient.name))
            .collect();
        assert_eq!(terms, vec!["lemons", "sugar", "butter"]);

        let counts: Vec<u32> = list
            .ingredients
            .iter()
            .map(|ingredient| cart_quantity(ingredient, 2.0))
            .collect();
        assert_eq!(counts, vec![6, 1, 400]);
    }
}
