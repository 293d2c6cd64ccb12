use std::fmt;
use std::str::FromStr;

/// What a challenge is about. Drives the corpus, the template set and the
/// number of subjects a question needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Car,
    Character,
    GameCharacter,
    Crossover,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Car,
        Category::Character,
        Category::GameCharacter,
        Category::Crossover,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::Car => "car",
            Category::Character => "character",
            Category::GameCharacter => "game_character",
            Category::Crossover => "crossover",
        }
    }

    /// Number of subjects a question in this category embeds.
    pub fn arity(self) -> usize {
        match self {
            Category::Crossover => 2,
            _ => 1,
        }
    }

    pub fn fallback_subject(self) -> &'static str {
        match self {
            Category::Car => "a mystery car",
            Category::Character | Category::GameCharacter | Category::Crossover => {
                "a mystery character"
            }
        }
    }

    /// Sentence used when no templates are registered for the category.
    pub fn default_question(self, subjects: &[String]) -> String {
        match subjects {
            [a, b] => format!("What would happen if `{a}` and `{b}` went on a date together?"),
            [subject] => format!("Describe `{subject}` in the most fabulous way possible."),
            _ => format!("Describe `{}` in the most fabulous way possible.", subjects.join("` and `")),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Category::Car),
            "character" | "midnight_character" => Ok(Category::Character),
            "game_character" => Ok(Category::GameCharacter),
            "crossover" => Ok(Category::Crossover),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("car".parse::<Category>(), Ok(Category::Car));
        assert_eq!(" Character ".parse::<Category>(), Ok(Category::Character));
        assert_eq!("midnight_character".parse::<Category>(), Ok(Category::Character));
        assert_eq!("game_character".parse::<Category>(), Ok(Category::GameCharacter));
        assert!("boat".parse::<Category>().is_err());
    }

    #[test]
    fn name_round_trips_for_every_category() {
        for category in Category::ALL {
            assert_eq!(category.name().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn default_question_embeds_subjects() {
        let one = Category::Car.default_question(&["Audi RS4".into()]);
        assert!(one.contains("Audi RS4"));

        let two = Category::Crossover.default_question(&["Mario".into(), "Vito".into()]);
        assert!(two.contains("Mario") && two.contains("Vito"));
    }
}
