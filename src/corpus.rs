use std::collections::HashMap;
use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::category::Category;
use crate::constants::{
    CAR_TEMPLATES, CHARACTER_TEMPLATES, CROSSOVER_TEMPLATES, GAME_CHARACTER_TEMPLATES,
    MIDNIGHT_CLUB_CARS, MIDNIGHT_CLUB_CHARACTERS,
};

/// Reads a newline-delimited list. Blank lines are skipped and entries are
/// trimmed; duplicates are kept. Any read failure yields an empty list.
pub fn load_lines(path: &Path) -> Vec<String> {
    match fs::read_to_string(path) {
        Ok(text) => text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect(),
        Err(e) => {
            warn!("Failed to read {}: {}", path.display(), e);
            Vec::new()
        }
    }
}

/// Number of positional `{}` placeholders in a template.
pub fn placeholder_count(template: &str) -> usize {
    template.matches("{}").count()
}

#[derive(Debug, Clone, Default)]
pub struct Corpus {
    pub cars: Vec<String>,
    pub characters: Vec<String>,
    templates: HashMap<Category, Vec<String>>,
}

impl Corpus {
    /// The lists compiled into the binary.
    pub fn builtin() -> Self {
        let mut corpus = Self {
            cars: to_owned(&MIDNIGHT_CLUB_CARS),
            characters: to_owned(&MIDNIGHT_CLUB_CHARACTERS),
            templates: HashMap::new(),
        };

        corpus.set_templates(Category::Car, to_owned(&CAR_TEMPLATES));
        corpus.set_templates(Category::Character, to_owned(&CHARACTER_TEMPLATES));
        corpus.set_templates(Category::GameCharacter, to_owned(&GAME_CHARACTER_TEMPLATES));
        corpus.set_templates(Category::Crossover, to_owned(&CROSSOVER_TEMPLATES));

        corpus
    }

    /// Built-in lists, with any non-empty file under `dir` taking precedence:
    ///
    /// ```text
    /// <dir>/cars.txt
    /// <dir>/characters.txt
    /// <dir>/templates/<category>.txt
    /// ```
    pub fn load(dir: Option<&Path>) -> Self {
        let mut corpus = Self::builtin();

        let Some(dir) = dir else {
            return corpus;
        };

        let cars = load_lines(&dir.join("cars.txt"));
        if !cars.is_empty() {
            info!("Loaded {} cars from {}", cars.len(), dir.display());
            corpus.cars = cars;
        }

        let characters = load_lines(&dir.join("characters.txt"));
        if !characters.is_empty() {
            info!("Loaded {} characters from {}", characters.len(), dir.display());
            corpus.characters = characters;
        }

        for category in Category::ALL {
            let path = dir.join("templates").join(format!("{}.txt", category.name()));
            let templates = load_lines(&path);
            if !templates.is_empty() {
                corpus.set_templates(category, templates);
            }
        }

        corpus
    }

    /// Registers templates for a category, dropping any whose placeholder
    /// count does not match the category's arity.
    pub fn set_templates(&mut self, category: Category, templates: Vec<String>) {
        let valid = templates
            .into_iter()
            .filter(|template| {
                let count = placeholder_count(template);
                if count != category.arity() {
                    warn!(
                        "Dropping {} template with {} placeholders: {}",
                        category, count, template
                    );
                    return false;
                }
                true
            })
            .collect();

        self.templates.insert(category, valid);
    }

    pub fn templates(&self, category: Category) -> &[String] {
        self.templates
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Local list backing a category. Game characters fall back to the
    /// local characters.
    pub fn pool(&self, category: Category) -> &[String] {
        match category {
            Category::Car => &self.cars,
            Category::Character | Category::GameCharacter | Category::Crossover => {
                &self.characters
            }
        }
    }
}

fn to_owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
