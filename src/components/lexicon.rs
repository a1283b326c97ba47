//! A dictionary of inflected word forms which can tag tokens and produce alternate forms.
//!
//! The dictionary is read from dumps with one `word\tlemma\ttag` entry per line. Lines starting with `#` are comments.

use fs_err::File;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    io::{BufRead, BufReader},
    path::Path,
};

use super::Component;
use crate::{
    pos::{classify, LexicalCategory},
    properties::{Morphology, Tag, Tags},
    tables::{self, VerbForm},
    utils::match_first_case,
};

/// Lemma and part-of-speech tag associated with a word.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct WordData {
    pub lemma: String,
    pub pos: String,
}

impl WordData {
    pub fn new(lemma: String, pos: String) -> Self {
        WordData { lemma, pos }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    tags: HashMap<String, Vec<WordData>>,
    groups: HashMap<String, Vec<String>>,
}

impl Component for Lexicon {
    fn name() -> &'static str {
        "lexicon"
    }
}

impl Lexicon {
    pub fn from_dumps<P: AsRef<Path>>(paths: &[P]) -> std::io::Result<Self> {
        let mut lexicon = Lexicon::default();

        for path in paths {
            let reader = BufReader::new(File::open(path.as_ref())?);
            lexicon.extend_from_dump(reader)?;
        }

        Ok(lexicon)
    }

    /// Adds all entries of a dump. Malformed lines are skipped.
    pub fn extend_from_dump<R: BufRead>(&mut self, reader: R) -> std::io::Result<()> {
        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.starts_with('#') || line.trim().is_empty() {
                continue;
            }

            let parts: Vec<_> = line.split('\t').collect();

            if let [word, lemma, tag] = parts.as_slice() {
                self.add(word, lemma, tag);
            } else {
                warn!("skipping malformed dump line {}: {:?}", i + 1, line);
            }
        }

        Ok(())
    }

    pub fn add(&mut self, word: &str, lemma: &str, tag: &str) {
        let group = self
            .groups
            .entry(lemma.to_string())
            .or_insert_with(Vec::new);
        if !group.iter().any(|x| x == word) {
            group.push(word.to_string());
        }

        let data = WordData::new(lemma.to_string(), tag.to_string());
        let tags = self.tags.entry(word.to_string()).or_insert_with(Vec::new);
        if !tags.contains(&data) {
            tags.push(data);
        }
    }

    /// All lemmas and tags of `word`. Falls back to the lowercase word if the word itself is unknown.
    pub fn get_tags(&self, word: &str) -> &[WordData] {
        match self.tags.get(word) {
            Some(tags) => tags.as_slice(),
            None => self
                .tags
                .get(&word.to_lowercase())
                .map(|tags| tags.as_slice())
                .unwrap_or(&[]),
        }
    }

    pub fn get_group_members(&self, lemma: &str) -> &[String] {
        self.groups.get(lemma).map(|x| x.as_slice()).unwrap_or(&[])
    }

    fn has_tag(&self, word: &str, lemma: &str, tag: &str) -> bool {
        self.get_tags(word)
            .iter()
            .any(|x| x.lemma == lemma && x.pos.eq_ignore_ascii_case(tag))
    }

    /// Finds a form of `word` (tagged as `tag`) which has one of `target_tags`, trying the tags in order.
    fn inflect(&self, word: &str, tag: &str, target_tags: &[&str]) -> Option<String> {
        let data = self.get_tags(word);
        let lemmas = data
            .iter()
            .filter(|x| x.pos.eq_ignore_ascii_case(tag))
            .chain(data.iter())
            .map(|x| x.lemma.as_str());

        for lemma in lemmas {
            for target in target_tags {
                let form = self
                    .get_group_members(lemma)
                    .iter()
                    .find(|member| self.has_tag(member, lemma, target));

                if let Some(form) = form {
                    return Some(match_first_case(word, form));
                }
            }
        }

        debug!("no {:?} form of {:?} ({}) in lexicon", target_tags, word, tag);
        None
    }

    fn fallback_tag(token: &str) -> &'static str {
        if token.chars().all(|c| c.is_ascii_punctuation()) {
            match token {
                "," => ",",
                ":" | ";" | "-" | "--" | "..." => ":",
                "(" | "[" | "{" => "-LRB-",
                ")" | "]" | "}" => "-RRB-",
                "\"" | "''" => "''",
                "`" | "``" => "``",
                "$" => "$",
                "#" => "#",
                _ => ".",
            }
        } else if token.chars().any(|c| c.is_numeric()) && !token.chars().any(char::is_alphabetic) {
            "CD"
        } else if crate::utils::starts_uppercase(token) {
            "NNP"
        } else {
            "NN"
        }
    }
}

impl Tag for Lexicon {
    /// Assigns the first tag the lexicon has for a token. Unknown tokens are tagged by their shape.
    fn tag(&self, tokens: &[&str]) -> Tags {
        let tags = tokens
            .iter()
            .map(|token| {
                self.get_tags(token)
                    .first()
                    .map(|x| x.pos.clone())
                    .unwrap_or_else(|| Lexicon::fallback_tag(token).to_string())
            })
            .collect();

        Tags {
            tags,
            probabilities: None,
        }
    }
}

impl Morphology for Lexicon {
    fn pluralize(&self, word: &str, tag: &str) -> Option<String> {
        if word.chars().count() < 2 {
            return None;
        }

        match classify(tag) {
            LexicalCategory::Noun => {
                let target = tables::opposite_noun_tag(tag)?;
                self.inflect(word, tag, &[target])
            }
            LexicalCategory::Pronoun => tables::change_pronoun_number(word),
            LexicalCategory::Determiner => tables::change_determiner(word),
            _ => None,
        }
    }

    fn change_verb_form(&self, word: &str, tag: &str) -> Option<String> {
        let bad_form = VerbForm::from_tag(tag).bad_form();
        self.inflect(word, tag, bad_form.tags())
    }

    fn verb_forms(&self, word: &str) -> Vec<String> {
        let mut forms: Vec<String> = Vec::new();

        for data in self.get_tags(word) {
            if classify(&data.pos) != LexicalCategory::Verb {
                continue;
            }

            for member in self.get_group_members(&data.lemma) {
                let is_verb = self
                    .get_tags(member)
                    .iter()
                    .any(|x| x.lemma == data.lemma && classify(&x.pos) == LexicalCategory::Verb);
                let form = match_first_case(word, member);

                if is_verb && !forms.contains(&form) {
                    forms.push(form);
                }
            }
        }

        forms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DUMP: &str = "# word\tlemma\ttag
dog\tdog\tNN
dogs\tdog\tNNS
run\trun\tVB
run\trun\tVBP
runs\trun\tVBZ
runs\trun\tNNS
running\trun\tVBG
ran\trun\tVBD
run\trun\tVBN
malformed line
";

    fn lexicon() -> Lexicon {
        let mut lexicon = Lexicon::default();
        lexicon.extend_from_dump(DUMP.as_bytes()).unwrap();
        lexicon
    }

    #[test]
    fn nouns_change_number() {
        let lexicon = lexicon();

        assert_eq!(lexicon.pluralize("dog", "NN").as_deref(), Some("dogs"));
        assert_eq!(lexicon.pluralize("Dogs", "NNS").as_deref(), Some("Dog"));
        assert_eq!(lexicon.pluralize("cat", "NN"), None);
        assert_eq!(lexicon.pluralize("x", "NN"), None);
    }

    #[test]
    fn determiners_and_pronouns_change_number() {
        let lexicon = lexicon();

        assert_eq!(lexicon.pluralize("This", "DT").as_deref(), Some("These"));
        assert_eq!(lexicon.pluralize("us", "PRP").as_deref(), Some("me"));
        assert_eq!(lexicon.pluralize("quickly", "RB"), None);
    }

    #[test]
    fn verbs_change_to_bad_form() {
        let lexicon = lexicon();

        assert_eq!(lexicon.change_verb_form("runs", "VBZ").as_deref(), Some("run"));
        assert_eq!(lexicon.change_verb_form("run", "VB").as_deref(), Some("running"));
        assert_eq!(lexicon.change_verb_form("Running", "VBG").as_deref(), Some("Run"));
        assert_eq!(lexicon.change_verb_form("ran", "VBD").as_deref(), Some("run"));
        assert_eq!(lexicon.change_verb_form("walk", "VB"), None);
    }

    #[test]
    fn verb_forms_are_enumerated() {
        let lexicon = lexicon();
        let mut forms = lexicon.verb_forms("ran");
        forms.sort();

        assert_eq!(forms, vec!["ran", "run", "running", "runs"]);
        assert!(lexicon.verb_forms("dog").is_empty());
    }

    #[test]
    fn tags_known_and_unknown_tokens() {
        let lexicon = lexicon();

        let Tags { tags, probabilities } = lexicon.tag(&["Dogs", "run", "in", "Paris", "42", ","]);
        assert_eq!(tags, vec!["NNS", "VB", "NN", "NNP", "CD", ","]);
        assert!(probabilities.is_none());
    }

    #[test]
    fn can_be_serialized() {
        let lexicon = lexicon();
        let mut bytes = Vec::new();
        lexicon.to_writer(&mut bytes).unwrap();

        let restored = Lexicon::from_reader(bytes.as_slice()).unwrap();
        assert_eq!(restored.get_tags("dogs"), lexicon.get_tags("dogs"));
    }
}
