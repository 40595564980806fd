use crate::dictionary::affixdata::AffixFlag;

/// An immutable set of affix flags attached to a word or affix entry.
/// Kept sorted so that membership tests are a binary search.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FlagSet {
    flags: Vec<AffixFlag>,
}

impl FlagSet {
    pub fn new(mut flags: Vec<AffixFlag>) -> Self {
        flags.sort_unstable();
        flags.dedup();
        FlagSet { flags }
    }

    pub fn contains(&self, flag: AffixFlag) -> bool {
        self.flags.binary_search(&flag).is_ok()
    }

    /// Union in the flags of another set. Used when the dictionary file
    /// lists the same stem more than once.
    pub fn merge(&mut self, other: &FlagSet) {
        self.flags.extend_from_slice(&other.flags);
        self.flags.sort_unstable();
        self.flags.dedup();
    }
}
