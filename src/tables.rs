//! Fixed English lookup tables used to produce alternate word forms.

use bimap::BiHashMap;
use lazy_static::lazy_static;
use std::collections::HashMap;

use crate::utils::match_first_case;

lazy_static! {
    static ref DETERMINER_CHANGE: HashMap<&'static str, &'static str> = [
        ("the", "a"),
        ("some", "a"),
        ("a", "the"),
        ("an", "the"),
        ("this", "these"),
        ("these", "this"),
        ("that", "those"),
        ("those", "that"),
        ("what", "which"),
        ("which", "what"),
        ("whatever", "whichever"),
        ("whichever", "whatever"),
        ("all", "a"),
    ]
    .iter()
    .copied()
    .collect();

    // subjective <-> objective
    static ref OBJECTIVITY_CHANGE: BiHashMap<&'static str, &'static str> = [
        ("i", "me"),
        ("he", "him"),
        ("she", "her"),
        ("we", "us"),
        ("they", "them"),
        ("who", "whom"),
        ("whoever", "whomever"),
    ]
    .iter()
    .copied()
    .collect();

    // singular -> plural, pronouns without a plural counterpart of their own map many-to-one
    static ref PRONOUN_NUMBER_CHANGE: HashMap<&'static str, &'static str> = [
        ("i", "we"),
        ("we", "i"),
        ("me", "us"),
        ("us", "me"),
        ("my", "our"),
        ("our", "my"),
        ("mine", "ours"),
        ("ours", "mine"),
        ("myself", "ourselves"),
        ("ourselves", "myself"),
        ("yourself", "yourselves"),
        ("yourselves", "yourself"),
        ("he", "they"),
        ("she", "they"),
        ("it", "they"),
        ("they", "it"),
        ("him", "them"),
        ("her", "them"),
        ("them", "it"),
        ("his", "their"),
        ("its", "their"),
        ("their", "its"),
        ("hers", "theirs"),
        ("theirs", "its"),
        ("himself", "themselves"),
        ("herself", "themselves"),
        ("itself", "themselves"),
        ("themselves", "itself"),
    ]
    .iter()
    .copied()
    .collect();
}

/// Applies `table` to the lowercased `word`, keeping the capitalization of the first character.
/// The pronoun `I` is always capitalized, so its capitalization is not carried over.
fn lookup(table: impl Fn(&str) -> Option<&'static str>, word: &str) -> Option<String> {
    let lower = word.to_lowercase();
    let changed = table(lower.as_str())?;

    Some(if changed == "i" {
        "I".to_string()
    } else if word == "I" {
        changed.to_string()
    } else {
        match_first_case(word, changed)
    })
}

/// Swaps a determiner with one of opposite number or definiteness, e.g. `this` -> `these`, `the` -> `a`.
pub fn change_determiner(word: &str) -> Option<String> {
    lookup(|x| DETERMINER_CHANGE.get(x).copied(), word)
}

/// Swaps a subjective pronoun with its objective form and vice versa, e.g. `she` -> `her`.
///
/// The table is one-to-one, so swapping twice restores the pronoun. Pronouns without a distinct
/// objective form (`it`, `you`, `what`) are left unchanged. `me` becomes `I`, and `I` becomes `me`.
pub fn change_objectivity(pronoun: &str) -> Option<String> {
    lookup(
        |x| {
            OBJECTIVITY_CHANGE
                .get_by_left(&x)
                .or_else(|| OBJECTIVITY_CHANGE.get_by_right(&x))
                .copied()
        },
        pronoun,
    )
}

/// Swaps the grammatical number of a pronoun, e.g. `me` -> `us`.
pub fn change_pronoun_number(pronoun: &str) -> Option<String> {
    lookup(|x| PRONOUN_NUMBER_CHANGE.get(x).copied(), pronoun)
}

/// The noun tag of opposite number, e.g. `NN` -> `NNS`.
pub fn opposite_noun_tag(tag: &str) -> Option<&'static str> {
    match tag.to_uppercase().as_str() {
        "NN" => Some("NNS"),
        "NNS" => Some("NN"),
        "NNP" => Some("NNPS"),
        "NNPS" => Some("NNP"),
        _ => None,
    }
}

/// Form of a verb, independent of its tense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerbForm {
    BareInfinitive,
    Infinitive,
    Imperative,
    Gerund,
    PresentParticiple,
    PastParticiple,
    Normal,
}

impl VerbForm {
    /// The form a verb tagged with `tag` is in. Unknown tags are treated as [VerbForm::Normal].
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_uppercase().as_str() {
            "VB" | "VBN" | "VBP" => VerbForm::BareInfinitive,
            "VBD" => VerbForm::PastParticiple,
            "VBG" => VerbForm::PresentParticiple,
            _ => VerbForm::Normal,
        }
    }

    /// The ungrammatical form to replace this form with.
    pub fn bad_form(&self) -> Self {
        match self {
            VerbForm::BareInfinitive | VerbForm::Infinitive | VerbForm::Imperative => {
                VerbForm::PresentParticiple
            }
            VerbForm::Gerund
            | VerbForm::PresentParticiple
            | VerbForm::PastParticiple
            | VerbForm::Normal => VerbForm::BareInfinitive,
        }
    }

    /// The Penn Treebank tags which realize this form.
    pub fn tags(&self) -> &'static [&'static str] {
        match self {
            VerbForm::BareInfinitive | VerbForm::Infinitive | VerbForm::Imperative => &["VB", "VBP"],
            VerbForm::Gerund | VerbForm::PresentParticiple => &["VBG"],
            VerbForm::PastParticiple => &["VBN", "VBD"],
            VerbForm::Normal => &["VBZ", "VBD"],
        }
    }
}
