use crate::dictionary::affixdata::AffixFlag;
use crate::dictionary::condition::AffixCondition;
use crate::dictionary::flagset::FlagSet;
use crate::dictionary::wordflags::WordFlags;

/// One row of the PFX or SFX table. Applying the entry to a stem removes
/// `strip` and adds `append`; the checker works in the other direction,
/// removing `append` from the surface form and restoring `strip`.
#[derive(Clone, Debug)]
pub struct AffixEntry {
    /// The flag a stem must carry for this entry to apply.
    pub flag: AffixFlag,
    /// Whether this entry may combine with an affix of the opposite kind.
    /// Part of the table format; the single-affix checker never combines.
    #[allow(dead_code)]
    pub cross_product: bool,
    pub strip: String,
    pub append: String,
    pub condition: AffixCondition,
    /// Continuation flags attached to the affix itself.
    pub cont_flags: FlagSet,
    /// Special-flag summary of `cont_flags`, filled in at load time.
    pub cont_special: WordFlags,
}

impl AffixEntry {
    /// The candidate stem obtained by undoing this prefix entry.
    /// The caller guarantees that `word` starts with `append`.
    pub fn prefix_stem(&self, word: &str) -> String {
        let mut stem =
            String::with_capacity(self.strip.len() + word.len() - self.append.len());
        stem.push_str(&self.strip);
        stem.push_str(&word[self.append.len()..]);
        stem
    }

    /// The candidate stem obtained by undoing this suffix entry.
    /// The caller guarantees that `word` ends with `append`.
    pub fn suffix_stem(&self, word: &str) -> String {
        let mut stem =
            String::with_capacity(self.strip.len() + word.len() - self.append.len());
        stem.push_str(&word[..word.len() - self.append.len()]);
        stem.push_str(&self.strip);
        stem
    }
}

/// PrefixTrie and SuffixTrie index affix entries by their `append` string,
/// so that all entries whose append matches the start (or end) of a word
/// can be enumerated in one walk, shortest append first. They are very
/// similar but differ in walk direction, and both are hot, so they are two
/// separate structs rather than one that can do both.
#[derive(Clone, Debug, Default)]
pub struct PrefixTrie<T> {
    end_here: Vec<T>,
    more: Vec<PrefixTrie<T>>,
}

impl<T: Copy + Default> PrefixTrie<T> {
    pub fn clear(&mut self) {
        self.end_here.clear();
        self.more.clear();
    }

    pub fn insert(&mut self, append: &str, t: T) {
        let mut node = self;
        for &b in append.as_bytes() {
            if node.more.is_empty() {
                node.more.resize_with(u8::MAX as usize, PrefixTrie::default);
            }
            node = &mut node.more[b as usize];
        }
        node.end_here.push(t);
    }

    /// Visit every entry whose append equals some prefix of `word`, in
    /// order of increasing append length. Stops early when `found`
    /// returns true.
    pub fn lookup(&self, word: &str, mut found: impl FnMut(T) -> bool) -> bool {
        let mut node = self;
        let mut bytes = word.as_bytes().iter();
        loop {
            for t in node.end_here.iter() {
                if found(*t) {
                    return true;
                }
            }
            match bytes.next() {
                Some(&b) if !node.more.is_empty() => {
                    node = &node.more[b as usize];
                }
                _ => break,
            }
        }
        false
    }
}

#[derive(Clone, Debug, Default)]
pub struct SuffixTrie<T> {
    end_here: Vec<T>,
    more: Vec<SuffixTrie<T>>,
}

impl<T: Copy + Default> SuffixTrie<T> {
    pub fn clear(&mut self) {
        self.end_here.clear();
        self.more.clear();
    }

    pub fn insert(&mut self, append: &str, t: T) {
        let mut node = self;
        for &b in append.as_bytes().iter().rev() {
            if node.more.is_empty() {
                node.more.resize_with(u8::MAX as usize, SuffixTrie::default);
            }
            node = &mut node.more[b as usize];
        }
        node.end_here.push(t);
    }

    /// Visit every entry whose append equals some suffix of `word`, in
    /// order of increasing append length. Stops early when `found`
    /// returns true.
    pub fn lookup(&self, word: &str, mut found: impl FnMut(T) -> bool) -> bool {
        let mut node = self;
        let mut bytes = word.as_bytes().iter().rev();
        loop {
            for t in node.end_here.iter() {
                if found(*t) {
                    return true;
                }
            }
            match bytes.next() {
                Some(&b) if !node.more.is_empty() => {
                    node = &node.more[b as usize];
                }
                _ => break,
            }
        }
        false
    }
}
