#[cfg(test)]
mod tests {
    use recipecart::ingredient_model::{CanonicalUnit, Ingredient, Quantity, Unit};
    use recipecart::RecipeEngine;

    #[test]
    fn test_parse_mixed_fraction_line() {
        let engine = RecipeEngine::new();
        let flour = engine.parse_line("1 1/2 cups flour");

        assert_eq!(flour.quantity, Some(Quantity::Scalar(1.5)));
        assert_eq!(flour.unit.as_ref().map(Unit::name), Some("cup"));
        assert_eq!(flour.name, "flour");
        assert_eq!(flour.notes, None);
    }

    #[test]
    fn test_parse_line_with_notes() {
        let engine = RecipeEngine::new();
        let oil = engine.parse_line("2 tbsp. olive oil (extra virgin)");

        assert_eq!(oil.quantity, Some(Quantity::Scalar(2.0)));
        assert_eq!(oil.unit.as_ref().map(Unit::name), Some("tablespoon"));
        assert_eq!(oil.unit.as_ref().map(|u| u.display.as_str()), Some("tbsp."));
        assert_eq!(oil.name, "olive oil");
        assert_eq!(oil.notes.as_deref(), Some("extra virgin"));
        assert_eq!(oil.to_string(), "2 tbsp. olive oil (extra virgin)");
    }

    #[test]
    fn test_scale_range_doubles_both_ends() {
        let engine = RecipeEngine::new();
        let broth = Ingredient::new("broth")
            .with_quantity(Quantity::range(3.0, 4.0))
            .with_amount("3-4")
            .with_unit(Unit::canonical(CanonicalUnit::Cup));

        let doubled = engine.scale(&broth, 2.0);
        assert_eq!(doubled.amount.as_deref(), Some("6-8"));
        assert_eq!(doubled.name, "broth");
    }

    #[test]
    fn test_scale_identity_for_parsed_lines() {
        let engine = RecipeEngine::new();
        let lines = [
            "1 1/2 cups flour",
            "2 tbsp. olive oil (extra virgin)",
            "3 to 4 cups broth",
            "¾ cup milk",
            "2 eggs",
            "salt to taste",
            "",
        ];
        for line in lines {
            let ingredient = engine.parse_line(line);
            assert_eq!(engine.scale(&ingredient, 1.0), ingredient, "{line:?}");
        }
    }

    #[test]
    fn test_scale_distributes_over_range_endpoints() {
        let engine = RecipeEngine::new();
        let ingredient = engine.parse_line("1-2 cups rice");
        for multiplier in [2.0, 3.0, 0.5, 1.5] {
            let scaled = engine.scale(&ingredient, multiplier);
            let expected = format!(
                "{}-{}",
                engine.format(multiplier, Some("1")),
                engine.format(2.0 * multiplier, Some("2"))
            );
            assert_eq!(scaled.amount, Some(expected), "x{multiplier}");
            assert_eq!(
                scaled.quantity,
                Some(Quantity::Range { min: multiplier, max: 2.0 * multiplier })
            );
        }
    }

    #[test]
    fn test_scale_keeps_word_connector() {
        let engine = RecipeEngine::new();
        let broth = engine.parse_line("3 to 4 cups broth");
        assert_eq!(engine.scale(&broth, 2.0).to_string(), "6 to 8 cups broth");
    }

    #[test]
    fn test_scale_range_with_hyphenated_mixed_number() {
        let engine = RecipeEngine::new();
        let stock = engine.parse_line("1-1/2 to 2 cups stock");
        assert_eq!(stock.quantity, Some(Quantity::Range { min: 1.5, max: 2.0 }));
        assert_eq!(stock.amount.as_deref(), Some("1-1/2 to 2"));

        let doubled = engine.scale(&stock, 2.0);
        assert_eq!(doubled.amount.as_deref(), Some("3 to 4"));
        assert_eq!(doubled.to_string(), "3 to 4 cups stock");
    }

    #[test]
    fn test_notes_cut_from_the_middle_leave_tidy_name() {
        let engine = RecipeEngine::new();
        let walnuts = engine.parse_line("1 cup walnuts (toasted), chopped");
        assert_eq!(walnuts.name, "walnuts, chopped");
        assert_eq!(walnuts.notes.as_deref(), Some("toasted"));
    }

    #[test]
    fn test_scale_keeps_unicode_register() {
        let engine = RecipeEngine::new();
        let milk = engine.parse_line("¾ cup milk");
        assert_eq!(engine.scale(&milk, 2.0).to_string(), "1½ cups milk");
    }

    #[test]
    fn test_parse_line_is_total() {
        let engine = RecipeEngine::new();
        let inputs = [
            "",
            " ",
            "\t\n",
            "()",
            "(",
            ")",
            "1/",
            "/2",
            "1 -",
            "- 2",
            "to",
            "1 to",
            "½½½",
            "999999999999999999999999 cups",
            "2 (",
            "cups",
            "日本酒 100ml",
        ];
        for input in inputs {
            let ingredient = engine.parse_line(input);
            assert_eq!(ingredient.original_text, input);
        }
    }

    #[test]
    fn test_unparseable_line_keeps_text_as_name() {
        let engine = RecipeEngine::new();
        let garnish = engine.parse_line("fresh basil, for garnish");
        assert_eq!(garnish.quantity, None);
        assert_eq!(garnish.unit, None);
        assert_eq!(garnish.name, "fresh basil, for garnish");
    }

    #[test]
    fn test_parse_ingredient_list_round_trips_to_clipboard() {
        let engine = RecipeEngine::new();
        let text = "2 cups flour\n\n1 tsp salt\n3 eggs (beaten)\n";
        let list = engine.parse_ingredient_list(text);

        assert_eq!(list.len(), 3);
        assert_eq!(
            list.to_clipboard_text(),
            "2 cups flour\n1 tsp salt\n3 eggs (beaten)"
        );
    }
}
