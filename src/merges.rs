use crate::symbols::merge_symbols;

/// A learned rule: replace the adjacent pair `left, right` with `merged`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeRule {
    pub left: String,
    pub right: String,
    pub merged: String,
}

impl MergeRule {
    pub fn new(left: &str, right: &str) -> Self {
        MergeRule {
            left: left.to_string(),
            right: right.to_string(),
            merged: format!("{}{}", left, right),
        }
    }

    /// Applies this rule to `symbols` in a single left-to-right pass.
    pub fn apply(&self, symbols: &[String]) -> Vec<String> {
        merge_symbols(symbols, &self.left, &self.right, &self.merged)
    }
}

/// Merge rules in the order they were learned.
///
/// The order matters: encoding replays the rules exactly in this sequence.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MergeTable {
    rules: Vec<MergeRule>,
}

impl MergeTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the rule `left, right -> left + right` and returns it.
    pub fn push(&mut self, left: &str, right: &str) -> &MergeRule {
        self.rules.push(MergeRule::new(left, right));
        &self.rules[self.rules.len() - 1]
    }

    pub fn get(&self, index: usize) -> Option<&MergeRule> {
        self.rules.get(index)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MergeRule> {
        self.rules.iter()
    }

    /// Runs every rule once, in training order, over `symbols`.
    pub fn apply(&self, symbols: Vec<String>) -> Vec<String> {
        self.rules
            .iter()
            .fold(symbols, |symbols, rule| rule.apply(&symbols))
    }
}
