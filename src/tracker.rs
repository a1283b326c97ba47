//! Per-sentence bookkeeping of which tokens are still available for errors.
//!
//! Tokens live in an arena and keep their [TokenId] for the whole sentence. The sentence order is a separate
//! list of ids, so inserting, removing and swapping only ever touches that list.

use crate::{
    pos::{classify, LexicalCategory},
    types::Tagging,
};

/// Stable identity of a token in a [CandidateTracker].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TokenId(usize);

#[derive(Debug, Clone, PartialEq)]
pub struct CandidateToken {
    original_index: usize,
    pub token: String,
    pub tag: String,
    used: bool,
}

impl CandidateToken {
    /// Index of the token in the input tagging. Inserted copies share the index of the token they copy.
    pub fn original_index(&self) -> usize {
        self.original_index
    }

    pub fn is_used(&self) -> bool {
        self.used
    }

    pub fn category(&self) -> LexicalCategory {
        classify(&self.tag)
    }

    /// A used copy of this token.
    pub fn duplicate(&self) -> Self {
        CandidateToken {
            original_index: self.original_index,
            token: self.token.clone(),
            tag: self.tag.clone(),
            used: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CandidateTracker {
    arena: Vec<CandidateToken>,
    order: Vec<TokenId>,
}

impl CandidateTracker {
    pub fn new(tagging: &Tagging) -> Self {
        let arena: Vec<_> = tagging
            .iter()
            .enumerate()
            .map(|(i, (token, tag))| CandidateToken {
                original_index: i,
                token: token.to_string(),
                tag: tag.to_string(),
                used: false,
            })
            .collect();
        let order = (0..arena.len()).map(TokenId).collect();

        CandidateTracker { arena, order }
    }

    /// Number of tokens currently in the sentence.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn id_at(&self, position: usize) -> TokenId {
        self.order[position]
    }

    pub fn token_at(&self, position: usize) -> &CandidateToken {
        self.get(self.id_at(position))
    }

    pub fn get(&self, id: TokenId) -> &CandidateToken {
        &self.arena[id.0]
    }

    pub fn get_mut(&mut self, id: TokenId) -> &mut CandidateToken {
        &mut self.arena[id.0]
    }

    /// Marks a token as used. Used tokens are never picked again and never become unused.
    pub fn mark_used(&mut self, id: TokenId) {
        self.get_mut(id).used = true;
    }

    /// Positions and tokens which have not been used yet, in sentence order.
    pub fn unused(&self) -> impl Iterator<Item = (usize, &CandidateToken)> {
        self.order
            .iter()
            .map(move |id| &self.arena[id.0])
            .enumerate()
            .filter(|(_, token)| !token.used)
    }

    pub fn has_unused(&self) -> bool {
        self.unused().next().is_some()
    }

    /// Inserts a new token before `position`.
    pub fn insert(&mut self, position: usize, token: CandidateToken) -> TokenId {
        let id = TokenId(self.arena.len());
        self.arena.push(token);
        self.order.insert(position, id);
        id
    }

    /// Removes the token at `position` from the sentence. It stays accessible through its id.
    pub fn remove(&mut self, position: usize) -> TokenId {
        self.order.remove(position)
    }

    pub fn swap(&mut self, a: usize, b: usize) {
        self.order.swap(a, b);
    }

    pub fn tokens(&self) -> impl Iterator<Item = &CandidateToken> {
        self.order.iter().map(move |id| &self.arena[id.0])
    }

    /// The current sentence, tokens joined by single spaces.
    pub fn render(&self) -> String {
        itertools::join(
            self.tokens()
                .map(|x| x.token.trim())
                .filter(|x| !x.is_empty()),
            " ",
        )
    }
}
