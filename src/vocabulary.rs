use std::collections::HashMap;

pub const UNK_TOKEN: &str = "<UNK>";
pub const START_TOKEN: &str = "<START>";
pub const END_TOKEN: &str = "<END>";
pub const END_OF_WORD: &str = "</w>";

pub const UNK_ID: u32 = 0;
pub const START_ID: u32 = 1;
pub const END_ID: u32 = 2;

/// Manages bidirectional mapping between tokens and their IDs.
///
/// Uses two data structures for O(1) lookups in both directions:
/// - `token_to_id`: HashMap for fast token → ID lookup (used during encoding)
/// - `id_to_token`: Vec for fast ID → token lookup (used during decoding)
///
/// IDs are handed out densely in registration order by a single allocator,
/// starting right after the reserved `<UNK>`, `<START>` and `<END>` entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vocabulary {
    token_to_id: HashMap<String, u32>,
    id_to_token: Vec<String>,
    next_id: u32,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new()
    }
}

impl Vocabulary {
    /// Creates a vocabulary holding only the reserved control tokens.
    pub fn new() -> Self {
        let mut vocabulary = Vocabulary {
            token_to_id: HashMap::new(),
            id_to_token: Vec::new(),
            next_id: 0,
        };

        for token in [UNK_TOKEN, START_TOKEN, END_TOKEN] {
            vocabulary.register(token);
        }

        vocabulary
    }

    /// Registers `token` and returns its ID.
    ///
    /// Registering a token that is already present returns the existing ID
    /// and leaves the vocabulary unchanged.
    pub fn register(&mut self, token: &str) -> u32 {
        if let Some(id) = self.token_to_id(token) {
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;

        self.id_to_token.push(token.to_string());
        self.token_to_id.insert(token.to_string(), id);

        id
    }

    /// Returns the ID of `token`, or [`UNK_ID`] if it was never registered.
    pub fn lookup(&self, token: &str) -> u32 {
        self.token_to_id(token).unwrap_or(UNK_ID)
    }

    /// Returns the token for `id`, or [`UNK_TOKEN`] if the ID was never allocated.
    pub fn reverse(&self, id: u32) -> &str {
        self.id_to_token(id).unwrap_or(UNK_TOKEN)
    }

    pub fn token_to_id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    pub fn id_to_token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(|s| s.as_str())
    }

    pub fn contains(&self, token: &str) -> bool {
        self.token_to_id.contains_key(token)
    }

    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// Always false: the reserved tokens are present from construction.
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }

    /// Iterates over `(id, token)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.id_to_token
            .iter()
            .enumerate()
            .map(|(id, token)| (id as u32, token.as_str()))
    }
}
