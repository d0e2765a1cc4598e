// src/commands/recipe.rs

//! Recipe CLI commands

use anyhow::{Context, Result};
use recipebox::db::models::{Recipe, Visibility};
use recipebox::{Config, RecipeEditor, RecipeSectionModel};
use std::path::Path;
use tracing::info;

/// Pick the database path from the command line or the config file
pub fn resolve_db_path(db_path: Option<&str>, config: &Config) -> String {
    match db_path {
        Some(path) => path.to_string(),
        None => config.database.path.to_string_lossy().into_owned(),
    }
}

fn parse_visibility(s: &str) -> Result<Visibility> {
    s.parse::<Visibility>().map_err(|e| anyhow::anyhow!(e))
}

fn read_sections(path: &str) -> Result<RecipeSectionModel> {
    let content = std::fs::read_to_string(Path::new(path))
        .with_context(|| format!("Failed to read {}", path))?;
    let model = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse recipe sections in {}", path))?;
    Ok(model)
}

/// Create or upgrade the database
pub fn cmd_init(db_path: &str) -> Result<()> {
    recipebox::db::init(db_path)?;
    println!("Database initialized at: {}", db_path);
    Ok(())
}

/// Create a new recipe
pub fn cmd_create(
    title: &str,
    description: Option<&str>,
    visibility: &str,
    from: Option<&str>,
    db_path: &str,
    config: &Config,
) -> Result<()> {
    let visibility = parse_visibility(visibility)?;

    let id = match from {
        Some(path) => {
            let mut conn = recipebox::db::open(db_path)?;
            let mut editor = RecipeEditor::create(title, config.editor);
            editor.set_description(description.map(String::from));
            editor.set_visibility(visibility);
            editor.set_sections(read_sections(path)?);
            editor.save(&mut conn)?
        }
        None => {
            // Header only; ingredients and instructions come later via import
            let conn = recipebox::db::open(db_path)?;
            let mut recipe = Recipe::new(title.to_string());
            recipe.description = description.map(String::from);
            recipe.visibility = visibility;
            recipe.validate()?;
            recipe.insert(&conn)?
        }
    };

    info!("Created recipe {} '{}'", id, title);
    println!("Created recipe {}: {}", id, title.trim());
    Ok(())
}

/// List recipes
pub fn cmd_list(visibility: Option<&str>, db_path: &str) -> Result<()> {
    let conn = recipebox::db::open(db_path)?;

    let recipes = match visibility {
        Some(v) => Recipe::find_by_visibility(&conn, parse_visibility(v)?)?,
        None => Recipe::list_all(&conn)?,
    };

    if recipes.is_empty() {
        println!("No recipes found.");
        println!("\nUse 'recipebox create --title <title>' to add one.");
        return Ok(());
    }

    println!("Recipes ({}):", recipes.len());
    for recipe in &recipes {
        println!(
            "  [{}] {} ({})",
            recipe.id.unwrap_or(0),
            recipe.title,
            recipe.visibility
        );
    }
    Ok(())
}

/// Show a recipe with its sections
pub fn cmd_show(id: i64, db_path: &str, config: &Config) -> Result<()> {
    let conn = recipebox::db::open(db_path)?;
    let editor = RecipeEditor::load(&conn, id, config.editor)?;
    let recipe = editor.recipe();

    println!("{} [{}]", recipe.title, recipe.visibility);
    if let Some(desc) = &recipe.description {
        println!("{}", desc);
    }
    if let Some(updated) = &recipe.updated_at {
        println!("Updated: {}", updated);
    }

    match editor.sections() {
        RecipeSectionModel::Simple {
            ingredients,
            instructions,
        } => {
            println!();
            print_section(ingredients, instructions, 1);
        }
        RecipeSectionModel::Sectioned { components } => {
            // Step numbers continue across components
            let mut step = 1;
            for component in components {
                println!("\n== {} ==", component.label());
                step = print_section(&component.ingredients, &component.instructions, step);
            }
        }
    }
    Ok(())
}

fn print_section(ingredients: &[String], instructions: &str, first_step: usize) -> usize {
    let filled: Vec<&str> = ingredients
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect();
    if !filled.is_empty() {
        println!("Ingredients:");
        for item in filled {
            println!("  - {}", item);
        }
    }

    let mut step = first_step;
    let lines: Vec<&str> = instructions
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if !lines.is_empty() {
        println!("Instructions:");
        for line in lines {
            println!("  {}. {}", step, line);
            step += 1;
        }
    }
    step
}

/// Replace a recipe's sections from a JSON file
pub fn cmd_import(id: i64, file: &str, db_path: &str, config: &Config) -> Result<()> {
    let mut conn = recipebox::db::open(db_path)?;
    let mut editor = RecipeEditor::load(&conn, id, config.editor)?;
    editor.set_sections(read_sections(file)?);
    editor.save(&mut conn)?;

    println!("Imported {} into recipe {}", file, id);
    Ok(())
}

/// Print a recipe's sections as JSON
pub fn cmd_export(id: i64, db_path: &str, config: &Config) -> Result<()> {
    let conn = recipebox::db::open(db_path)?;
    let editor = RecipeEditor::load(&conn, id, config.editor)?;
    println!("{}", serde_json::to_string_pretty(editor.sections())?);
    Ok(())
}

/// Delete a recipe
pub fn cmd_delete(id: i64, db_path: &str) -> Result<()> {
    let conn = recipebox::db::open(db_path)?;

    let recipe = Recipe::find_by_id(&conn, id)?
        .ok_or_else(|| anyhow::anyhow!("Recipe {} not found", id))?;
    Recipe::delete(&conn, id)?;

    info!("Deleted recipe {} '{}'", id, recipe.title);
    println!("Deleted recipe {}: {}", id, recipe.title);
    Ok(())
}
