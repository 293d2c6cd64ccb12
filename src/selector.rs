use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::category::Category;
use crate::corpus::Corpus;
use crate::history::SelectionHistory;

/// History key for the local half of a crossover pair. Kept apart from the
/// first subject's key so exhausting one half never resets the other.
const CROSSOVER_LOCAL_KEY: &str = "crossover_local";

/// The subject or subjects a question is built around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subjects {
    One(String),
    Pair(String, String),
}

impl Subjects {
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Subjects::One(subject) => vec![subject.clone()],
            Subjects::Pair(a, b) => vec![a.clone(), b.clone()],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Subjects::One(_) => 1,
            Subjects::Pair(..) => 2,
        }
    }
}

/// Draws subjects for a run, optionally steering clear of recently used ones.
pub struct Selector<'a, R: Rng> {
    rng: &'a mut R,
    history: Option<&'a mut SelectionHistory>,
    today: NaiveDate,
}

impl<'a, R: Rng> Selector<'a, R> {
    pub fn new(rng: &'a mut R, history: Option<&'a mut SelectionHistory>, today: NaiveDate) -> Self {
        Self {
            rng,
            history,
            today,
        }
    }

    /// Uniform choice from `pool`, restricted to fresh entries when history
    /// is tracked. An empty pool yields `fallback`.
    pub fn pick(&mut self, key: &str, pool: &[String], fallback: &str) -> String {
        let choice = match self.history.as_deref_mut() {
            Some(history) => history
                .fresh(key, pool, self.today)
                .choose(&mut *self.rng)
                .map(|s| s.to_string()),
            None => pool.choose(&mut *self.rng).cloned(),
        };

        let Some(choice) = choice else {
            return fallback.to_string();
        };

        if let Some(history) = self.history.as_deref_mut() {
            history.record(key, &choice, self.today);
        }

        choice
    }

    /// Subjects for `category`. `external` is the character list fetched for
    /// this run, if any; without it game characters come from the local list.
    pub fn select(&mut self, category: Category, corpus: &Corpus, external: Option<&[String]>) -> Subjects {
        let key = category.name();
        let fallback = category.fallback_subject();

        match category {
            Category::Car | Category::Character => {
                Subjects::One(self.pick(key, corpus.pool(category), fallback))
            }
            Category::GameCharacter => {
                let pool = external.unwrap_or(corpus.pool(category));
                Subjects::One(self.pick(key, pool, fallback))
            }
            Category::Crossover => {
                let first = self.pick(key, external.unwrap_or(&corpus.characters), fallback);

                let others: Vec<String> = corpus
                    .characters
                    .iter()
                    .filter(|name| **name != first)
                    .cloned()
                    .collect();
                let pool = if others.is_empty() { &corpus.characters[..] } else { &others[..] };
                let second = self.pick(CROSSOVER_LOCAL_KEY, pool, fallback);

                Subjects::Pair(first, second)
            }
        }
    }
}
