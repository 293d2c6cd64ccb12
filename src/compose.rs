use rand::seq::SliceRandom;
use rand::Rng;

use crate::category::Category;
use crate::constants::{CHALLENGE_FOOTER, CHALLENGE_HEADER};
use crate::corpus::Corpus;
use crate::selector::Subjects;

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("{category} questions take {expected} subject(s), got {got}")]
pub struct ArityMismatch {
    pub category: Category,
    pub expected: usize,
    pub got: usize,
}

/// Substitutes subjects into the template's `{}` placeholders, left to right.
pub fn fill(template: &str, subjects: &[String]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    let mut subjects = subjects.iter();

    while let Some(pos) = rest.find("{}") {
        let Some(subject) = subjects.next() else {
            break;
        };
        out.push_str(&rest[..pos]);
        out.push_str(subject);
        rest = &rest[pos + 2..];
    }

    out.push_str(rest);
    out
}

/// A question about `subjects` from a random template of `category`, or the
/// category's default sentence when it has no templates.
pub fn compose<R: Rng>(
    rng: &mut R,
    corpus: &Corpus,
    category: Category,
    subjects: &Subjects,
) -> Result<String, ArityMismatch> {
    if subjects.len() != category.arity() {
        return Err(ArityMismatch {
            category,
            expected: category.arity(),
            got: subjects.len(),
        });
    }

    let subjects = subjects.to_vec();
    Ok(match corpus.templates(category).choose(rng) {
        Some(template) => fill(template, &subjects),
        None => category.default_question(&subjects),
    })
}

/// Wraps a question in the challenge banner and voting call to action.
pub fn frame_challenge(question: &str) -> String {
    format!("{CHALLENGE_HEADER}\n💬 {question}\n\n{CHALLENGE_FOOTER}")
}
