// src/section/partition.rs

//! Group flat rows by section label
//!
//! Labels keep the order in which their sections were written, not
//! alphabetical order. Instruction sequence numbers are global across the
//! recipe, so they give the section order for every section that has steps.
//! Sections that only have ingredients are slotted in after the section whose
//! ingredients preceded theirs in storage order.

use super::label::SectionLabel;
use super::rows::{IngredientRow, InstructionRow};

/// Ingredient names and instruction bodies of one section, in order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionContent {
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
}

impl SectionContent {
    pub fn is_empty(&self) -> bool {
        self.ingredients.is_empty() && self.instructions.is_empty()
    }
}

/// Rows grouped by section label, in section order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition {
    sections: Vec<(SectionLabel, SectionContent)>,
}

impl Partition {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn labels(&self) -> impl Iterator<Item = &SectionLabel> {
        self.sections.iter().map(|(label, _)| label)
    }

    pub fn get(&self, label: &str) -> Option<&SectionContent> {
        self.sections
            .iter()
            .find(|(l, _)| l.as_str() == label)
            .map(|(_, content)| content)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SectionLabel, &SectionContent)> {
        self.sections.iter().map(|(label, content)| (label, content))
    }

    /// The only label present when it is `Main`
    pub fn is_main_only(&self) -> bool {
        self.sections.len() == 1 && self.sections[0].0.is_main()
    }

    pub fn into_sections(self) -> Vec<(SectionLabel, SectionContent)> {
        self.sections
    }
}

/// Group one recipe's rows by section label
pub fn partition(ingredients: &[IngredientRow], instructions: &[InstructionRow]) -> Partition {
    let mut steps: Vec<&InstructionRow> = instructions.iter().collect();
    steps.sort_by_key(|row| row.sequence_number);

    let order = section_order(ingredients, &steps);
    let mut sections: Vec<(SectionLabel, SectionContent)> = order
        .into_iter()
        .map(|label| (label, SectionContent::default()))
        .collect();

    for (label, content) in &mut sections {
        let mut rows: Vec<&IngredientRow> = ingredients
            .iter()
            .filter(|row| row.section_label == *label)
            .collect();
        // Explicit positions first, then unpositioned rows in storage order
        rows.sort_by_key(|row| (row.order.is_none(), row.order.unwrap_or(0)));
        content.ingredients = rows.into_iter().map(|row| row.item_name.clone()).collect();

        content.instructions = steps
            .iter()
            .filter(|row| row.section_label == *label)
            .map(|row| row.body.clone())
            .collect();
    }

    Partition { sections }
}

fn section_order(ingredients: &[IngredientRow], steps: &[&InstructionRow]) -> Vec<SectionLabel> {
    let mut order: Vec<SectionLabel> = Vec::new();
    for row in steps {
        if !order.contains(&row.section_label) {
            order.push(row.section_label.clone());
        }
    }

    // Position of the last ingredient section seen, in `order`
    let mut anchor: Option<usize> = None;
    for row in ingredients {
        let pos = match order.iter().position(|l| l == &row.section_label) {
            Some(pos) => pos,
            None => {
                let pos = anchor.map_or(0, |a| a + 1);
                order.insert(pos, row.section_label.clone());
                pos
            }
        };
        anchor = Some(pos);
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ing(name: &str, label: &str) -> IngredientRow {
        IngredientRow::new(name, SectionLabel::from(label))
    }

    fn step(seq: i64, body: &str, label: &str) -> InstructionRow {
        InstructionRow::new(seq, body, SectionLabel::from(label))
    }

    fn labels(p: &Partition) -> Vec<&str> {
        p.labels().map(|l| l.as_str()).collect()
    }

    #[test]
    fn test_empty_input() {
        let p = partition(&[], &[]);
        assert!(p.is_empty());
        assert_eq!(p.len(), 0);
        assert!(!p.is_main_only());
    }

    #[test]
    fn test_groups_by_label() {
        let p = partition(
            &[ing("flour", "Cake"), ing("sugar", "Frosting"), ing("eggs", "Cake")],
            &[step(1, "Bake", "Cake"), step(2, "Whip", "Frosting")],
        );
        assert_eq!(labels(&p), vec!["Cake", "Frosting"]);
        assert_eq!(p.get("Cake").unwrap().ingredients, vec!["flour", "eggs"]);
        assert_eq!(p.get("Frosting").unwrap().instructions, vec!["Whip"]);
    }

    #[test]
    fn test_not_sorted_alphabetically() {
        let p = partition(
            &[ing("sugar", "Topping"), ing("flour", "Base")],
            &[step(1, "Sprinkle", "Topping"), step(2, "Bake", "Base")],
        );
        assert_eq!(labels(&p), vec!["Topping", "Base"]);
    }

    #[test]
    fn test_steps_sorted_by_sequence() {
        let p = partition(
            &[],
            &[step(3, "Serve", "Main"), step(1, "Mix", "Main"), step(2, "Bake", "Main")],
        );
        assert!(p.is_main_only());
        assert_eq!(p.get("Main").unwrap().instructions, vec!["Mix", "Bake", "Serve"]);
    }

    #[test]
    fn test_ingredients_follow_order_column() {
        let p = partition(
            &[
                ing("c", "Cake").with_order(3),
                ing("a", "Cake").with_order(1),
                ing("loose", "Cake"),
                ing("b", "Cake").with_order(2),
            ],
            &[],
        );
        assert_eq!(p.get("Cake").unwrap().ingredients, vec!["a", "b", "c", "loose"]);
    }

    #[test]
    fn test_labels_compared_exactly() {
        let p = partition(&[ing("salt", "Main"), ing("pepper", "main")], &[]);
        assert_eq!(labels(&p), vec!["Main", "main"]);
        assert!(!p.is_main_only());
    }

    #[test]
    fn test_ingredient_only_section_keeps_position() {
        // Written order: Dough (ingredients + steps), Filling (ingredients only),
        // Assembly (steps only)
        let p = partition(
            &[ing("flour", "Dough"), ing("apples", "Filling")],
            &[step(1, "Knead", "Dough"), step(2, "Fill and bake", "Assembly")],
        );
        assert_eq!(labels(&p), vec!["Dough", "Filling", "Assembly"]);

        // Leading ingredient-only section
        let p = partition(
            &[ing("butter", "Prep"), ing("flour", "Dough")],
            &[step(1, "Knead", "Dough")],
        );
        assert_eq!(labels(&p), vec!["Prep", "Dough"]);
        assert!(p.get("Prep").unwrap().instructions.is_empty());
    }

    #[test]
    fn test_ingredient_only_section_after_steps_only_section() {
        // Written order: Cake (ingredients + steps), Glaze (steps only),
        // Garnish (ingredients only). Nothing stored places Garnish after
        // Glaze, so it lands right after the previous ingredient section.
        let p = partition(
            &[ing("flour", "Cake"), ing("berries", "Garnish")],
            &[step(1, "Bake", "Cake"), step(2, "Drizzle", "Glaze")],
        );
        assert_eq!(labels(&p), vec!["Cake", "Garnish", "Glaze"]);
        assert!(p.get("Glaze").unwrap().ingredients.is_empty());
        assert!(p.get("Garnish").unwrap().instructions.is_empty());
    }
}
