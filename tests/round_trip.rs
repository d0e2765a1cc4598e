// tests/round_trip.rs

//! Flatten / partition / reconstruct round-trip tests.

mod common;

use common::{component, layer_cake, lines, shape};
use recipebox::{
    FlattenOptions, IngredientRow, InstructionRow, RecipeRows, RecipeSectionModel, SectionLabel,
    SequentialIds, ValidationError, flatten, reconstruct_rows,
};

fn round_trip(model: &RecipeSectionModel) -> RecipeSectionModel {
    let rows = flatten(model, FlattenOptions::default()).unwrap();
    reconstruct_rows(&rows, &mut SequentialIds::new())
}

/// A sectioned model survives flatten -> reconstruct unchanged
#[test]
fn test_sectioned_round_trip() {
    let model = layer_cake();
    let back = round_trip(&model);
    assert!(back.is_sectioned());
    assert_eq!(shape(&back), shape(&model));
}

/// Blank lines are the only thing lost on the way through storage
#[test]
fn test_round_trip_drops_blank_lines() {
    let model = RecipeSectionModel::sectioned(vec![
        component("Dough", &["flour", "", "  water  "], "\nKnead\n\n  Rest  \n"),
        component("Filling", &["", "apples"], "Slice apples"),
    ]);
    let back = round_trip(&model);

    let expected = RecipeSectionModel::sectioned(vec![
        component("Dough", &["flour", "water"], "Knead\nRest"),
        component("Filling", &["apples"], "Slice apples"),
    ]);
    assert_eq!(shape(&back), shape(&expected));
}

/// Re-flattening a reconstructed model gives back the same rows
#[test]
fn test_reflatten_is_stable() {
    let rows = flatten(&layer_cake(), FlattenOptions::default()).unwrap();
    let model = reconstruct_rows(&rows, &mut SequentialIds::new());
    let again = flatten(&model, FlattenOptions::default()).unwrap();
    assert_eq!(again, rows);
}

/// Simple recipes are stored entirely under `Main`
#[test]
fn test_simple_rows_always_main() {
    let model = RecipeSectionModel::simple(lines(&["rice", "water", "salt"]), "Rinse\nBoil\nRest");
    let rows = flatten(&model, FlattenOptions::default()).unwrap();
    assert!(rows.ingredients.iter().all(|r| r.section_label.is_main()));
    assert!(rows.instructions.iter().all(|r| r.section_label.is_main()));

    let back = round_trip(&model);
    assert_eq!(back, model);
}

/// One component titled `Main` comes back as a simple recipe
#[test]
fn test_single_main_component_becomes_simple() {
    let model = RecipeSectionModel::sectioned(vec![component("Main", &["oats", "milk"], "Soak")]);
    let back = round_trip(&model);
    assert_eq!(back, RecipeSectionModel::simple(lines(&["oats", "milk"]), "Soak"));

    // A blank title is stored as Main too
    let blank = RecipeSectionModel::sectioned(vec![component("  ", &["oats"], "Soak")]);
    assert!(!round_trip(&blank).is_sectioned());
}

/// One component with any other title stays sectioned
#[test]
fn test_single_named_component_stays_sectioned() {
    let model = RecipeSectionModel::sectioned(vec![component("Dessert", &["cream"], "Whip")]);
    let back = round_trip(&model);
    assert!(back.is_sectioned());
    assert_eq!(back.components().len(), 1);
    assert_eq!(back.components()[0].title, "Dessert");
}

/// Step numbers continue across components
#[test]
fn test_sequence_numbers_monotonic() {
    let model = RecipeSectionModel::sectioned(vec![
        component("First", &[], "a\nb"),
        component("Second", &[], "c\nd\ne"),
    ]);
    let rows = flatten(&model, FlattenOptions::default()).unwrap();
    let seqs: Vec<i64> = rows.instructions.iter().map(|r| r.sequence_number).collect();
    assert_eq!(seqs, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_validation_rejections() {
    let whitespace = RecipeSectionModel::simple(lines(&["flour"]), "   \n  ");
    assert_eq!(
        flatten(&whitespace, FlattenOptions::default()),
        Err(ValidationError::MissingInstructions)
    );

    let no_steps = RecipeSectionModel::sectioned(vec![
        component("A", &["x"], ""),
        component("B", &["y"], " "),
    ]);
    assert_eq!(
        flatten(&no_steps, FlattenOptions::default()),
        Err(ValidationError::MissingInstructions)
    );

    let one_step = RecipeSectionModel::sectioned(vec![
        component("A", &["x"], ""),
        component("B", &["y"], "Stir"),
    ]);
    assert!(flatten(&one_step, FlattenOptions::default()).is_ok());
}

/// Components without ingredients or without steps keep their place
#[test]
fn test_partial_components_keep_order() {
    let model = RecipeSectionModel::sectioned(vec![
        component("Crust", &["flour", "butter"], "Blind bake"),
        component("Filling", &["lemons", "eggs"], ""),
        component("Assembly", &[], "Pour filling into crust\nChill"),
    ]);
    let back = round_trip(&model);

    let titles: Vec<_> = back.components().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Crust", "Filling", "Assembly"]);
    assert_eq!(back.components()[2].ingredients, lines(&[""]));
}

/// Rows labeled Cake and Frosting reconstruct in that order
#[test]
fn test_cake_and_frosting_rows() {
    let rows = RecipeRows::new(
        vec![
            IngredientRow::new("flour", SectionLabel::from("Cake")),
            IngredientRow::new("sugar", SectionLabel::from("Frosting")),
        ],
        vec![
            InstructionRow::new(1, "Bake", SectionLabel::from("Cake")),
            InstructionRow::new(2, "Whip", SectionLabel::from("Frosting")),
        ],
    );
    let model = reconstruct_rows(&rows, &mut SequentialIds::new());
    assert_eq!(
        shape(&model),
        shape(&RecipeSectionModel::sectioned(vec![
            component("Cake", &["flour"], "Bake"),
            component("Frosting", &["sugar"], "Whip"),
        ]))
    );
}

/// Switching modes keeps simple content and round-trips through JSON
#[test]
fn test_mode_switch_then_json() {
    let mut ids = SequentialIds::new();
    let mut model = RecipeSectionModel::simple(lines(&["bread", "cheese"]), "Assemble\nGrill");
    model.switch_to_sectioned(&mut ids);
    let id = model.components()[0].id.clone();
    model.component_mut(&id).unwrap().title = "Sandwich".to_string();

    let json = serde_json::to_string(&model).unwrap();
    let parsed: RecipeSectionModel = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, model);

    let back = round_trip(&parsed);
    assert_eq!(back.components()[0].title, "Sandwich");
    assert_eq!(back.components()[0].ingredients, lines(&["bread", "cheese"]));
}
