//! Relationship phrases
//!
//! Turns a [`Classification`] into the English sentence shown to the user,
//! substituting the display names of both individuals.

use crate::algorithm::kinship::classifier::{
    Classification, CousinDegree, InLawKind, Relationship, Role,
};
use crate::models::{Gender, Individual, SiblingType, SpouseStatus};

/// English ordinal of a positive number: 1st, 2nd, 3rd, 4th, 11th, 21st, ...
#[must_use]
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Removal suffix for cousins at unequal distance from their common ancestor
#[must_use]
pub fn removal(removed: usize) -> Option<String> {
    match removed {
        0 => None,
        1 => Some("once removed".to_string()),
        2 => Some("twice removed".to_string()),
        n => Some(format!("{n} times removed")),
    }
}

/// Cousin phrase such as `2nd cousins` or `1st cousins once removed`
#[must_use]
pub fn cousin_phrase(cousin: CousinDegree) -> String {
    let base = format!("{} cousins", ordinal(cousin.degree));
    match removal(cousin.removed) {
        Some(suffix) => format!("{base} {suffix}"),
        None => base,
    }
}

/// Cousin phrase straight from the two generation distances, if they make cousins
#[must_use]
pub fn cousin_phrase_for(gen1: usize, gen2: usize) -> Option<String> {
    CousinDegree::from_generations(gen1, gen2).map(cousin_phrase)
}

/// `great`, `2nd great`, `3rd great`, ... for a great uncle or aunt whose
/// sibling sits `generation` levels up
fn great_uncle_prefix(generation: usize) -> String {
    match generation {
        0..=2 => "great".to_string(),
        g => format!("{} great", ordinal(g - 1)),
    }
}

/// Title of an ancestor `generation` links up the line
fn ancestor_title(gender: Gender, generation: usize) -> String {
    match generation {
        0 | 1 => gender.pick("father", "mother").to_string(),
        2 => gender.pick("grandfather", "grandmother").to_string(),
        3 => format!("great-{}", gender.pick("grandfather", "grandmother")),
        g => format!(
            "{} great-{}",
            ordinal(g - 2),
            gender.pick("grandfather", "grandmother")
        ),
    }
}

fn sibling_qualifier(sibling_type: SiblingType) -> Option<String> {
    sibling_type.qualifier().map(str::to_lowercase)
}

fn in_law_title(gender: Gender, kind: InLawKind) -> &'static str {
    match kind {
        InLawKind::ParentInLaw => gender.pick("father-in-law", "mother-in-law"),
        InLawKind::SiblingInLaw => gender.pick("brother-in-law", "sister-in-law"),
        InLawKind::StepChild => gender.pick("stepson", "stepdaughter"),
        InLawKind::ChildInLaw => gender.pick("son-in-law", "daughter-in-law"),
    }
}

/// `<relative> is <other>'s <title>`
fn possessive(classification: &Classification<'_>, role: Role, title: &str) -> String {
    let (relative, other) = classification.oriented(role);
    format!("{} is {}'s {title}", relative.name, other.name)
}

/// `<first> and <second> are <description>`
fn mutual(first: &Individual, second: &Individual, description: &str) -> String {
    format!("{} and {} are {description}", first.name, second.name)
}

/// Render a classification as one English sentence
#[must_use]
pub fn format(classification: &Classification<'_>) -> String {
    let Classification { first, second, .. } = *classification;
    let gender_of = |role: Role| classification.oriented(role).0.gender;

    match classification.relationship {
        Relationship::SamePerson => "Same person".to_string(),
        Relationship::Married => mutual(first, second, "married"),
        Relationship::Parent { relative, adopted } => {
            let parent = gender_of(relative).pick("father", "mother");
            let title = if adopted {
                format!("adopted {parent}")
            } else {
                parent.to_string()
            };
            possessive(classification, relative, &title)
        }
        Relationship::Grandparent { relative, side } => {
            let title = gender_of(relative).pick("grandfather", "grandmother");
            possessive(classification, relative, &format!("{side} {title}"))
        }
        Relationship::UncleAunt {
            relative,
            sibling_type,
            ..
        } => {
            let title = gender_of(relative).pick("uncle", "aunt");
            let title = match sibling_qualifier(sibling_type) {
                Some(qualifier) => format!("{qualifier} {title}"),
                None => title.to_string(),
            };
            possessive(classification, relative, &title)
        }
        Relationship::GreatUncleAunt {
            relative,
            side,
            generation,
        } => {
            let title = gender_of(relative).pick("uncle", "aunt");
            let prefix = great_uncle_prefix(generation);
            possessive(classification, relative, &format!("{side} {prefix} {title}"))
        }
        Relationship::InLaw { relative, kind } => {
            possessive(classification, relative, in_law_title(gender_of(relative), kind))
        }
        Relationship::Sibling { sibling_type } => {
            let qualifier = sibling_qualifier(sibling_type).unwrap_or_else(|| "full".to_string());
            mutual(first, second, &format!("{qualifier} siblings"))
        }
        Relationship::Spouse { status } => match status {
            SpouseStatus::Married => mutual(first, second, "married"),
            SpouseStatus::Divorced => mutual(first, second, "divorced"),
        },
        Relationship::Ancestor {
            relative,
            side,
            generation,
        } => {
            let title = ancestor_title(gender_of(relative), generation);
            let title = if generation >= 2 {
                format!("{side} {title}")
            } else {
                title
            };
            possessive(classification, relative, &title)
        }
        Relationship::Cousin(cousin) => mutual(first, second, &cousin_phrase(cousin)),
        Relationship::SharedRelative { through } => {
            mutual(first, second, &format!("related through {}", through.name))
        }
        Relationship::Unrelated => mutual(first, second, "not directly related"),
    }
}
