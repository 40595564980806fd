use anyhow::{Context, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::read_to_string;
use std::path::Path;

mod affixdata;
mod affixes;
mod casing;
mod checker;
mod condition;
mod flagset;
mod parse_aff;
mod replacements;
mod wordflags;

use crate::dictionary::affixdata::AffixData;
use crate::dictionary::flagset::FlagSet;
use crate::dictionary::parse_aff::parse_affix_data;
use crate::dictionary::wordflags::WordFlags;
use crate::Speller;

/// A dictionary loaded from a Hunspell-format affix and word list pair.
/// Construction does all the work; a loaded dictionary is immutable and
/// can be queried from any number of threads.
#[derive(Debug)]
pub struct Dictionary {
    affix_data: AffixData,
    words: HashMap<String, WordInfo>,
}

#[derive(Debug)]
struct WordInfo {
    flags: FlagSet,
    /// Which of the configured special flags appear in `flags`,
    /// precomputed at load.
    special: WordFlags,
}

impl Dictionary {
    /// Load a dictionary from a word list file and an affix file.
    pub fn new(dictionary: &Path, affixes: &Path) -> Result<Self> {
        let affixes_text = read_to_string(affixes).with_context(|| {
            format!("Could not read affix data from {}", affixes.display())
        })?;
        let dict_text = read_to_string(dictionary).with_context(|| {
            format!("Could not read words from {}", dictionary.display())
        })?;
        Self::from_strings(&affixes_text, &dict_text)
    }

    /// Build a dictionary from affix data and word list already in
    /// memory.
    pub fn from_strings(affixes: &str, words: &str) -> Result<Self> {
        let affix_data = parse_affix_data(affixes)?;
        let words = Self::parse_word_list(&affix_data, words);
        Ok(Dictionary { affix_data, words })
    }

    fn parse_word_list(
        affix_data: &AffixData,
        text: &str,
    ) -> HashMap<String, WordInfo> {
        let mut words = HashMap::new();
        // Skip the first line because it's just the number of words.
        for line in text.lines().skip(1) {
            if line.starts_with('\t') {
                // comment
                continue;
            }
            let (entry, _morphs) = Self::split_morphological_fields(line);
            let (stem, flagstr) =
                entry.split_once('/').unwrap_or((entry, ""));
            // If parsing the flags fails, just ignore them.
            let flags = FlagSet::new(
                affix_data.parse_flags(flagstr).unwrap_or_default(),
            );
            let stem = stem.trim();
            if stem.is_empty() {
                continue;
            }
            match words.entry(stem.to_string()) {
                Entry::Vacant(slot) => {
                    let special = affix_data.special_flags(&flags);
                    slot.insert(WordInfo { flags, special });
                }
                Entry::Occupied(mut slot) => {
                    // The same stem may be listed more than once with
                    // different flags; the entries act as one.
                    let winfo = slot.get_mut();
                    winfo.flags.merge(&flags);
                    winfo.special = affix_data.special_flags(&winfo.flags);
                }
            }
        }
        words
    }

    /// Morphological fields are separated from the word by a space, but
    /// the word itself may contain spaces. Recognize them by the xx:
    /// pattern of their two-character tags.
    fn split_morphological_fields(s: &str) -> (&str, Option<&str>) {
        let mut last_space = None;
        for (i, c) in s.char_indices() {
            if let Some(spos) = last_space {
                if i - spos <= 2 && !c.is_alphanumeric() {
                    last_space = None;
                } else if i - spos == 3 && c != ':' {
                    last_space = None;
                } else if i - spos == 3 {
                    return (&s[..spos], Some(s[spos + 1..].trim()));
                }
            } else if c == ' ' || c == '\t' {
                last_space = Some(i);
            }
        }
        (s, None)
    }
}

impl Speller for Dictionary {
    fn spellcheck(&self, word: &str) -> bool {
        self.spell(word)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_word_list_flags() {
        let aff = "SET UTF-8\nFORBIDDENWORD !\n";
        let dic = "3\ncat/S\nxyz/!\ncat/Z\n";
        let dict = Dictionary::from_strings(aff, dic).unwrap();
        let cat = dict.words.get("cat").unwrap();
        assert!(cat.flags.contains('S' as u32));
        assert!(cat.flags.contains('Z' as u32));
        assert!(cat.special.is_empty());
        let xyz = dict.words.get("xyz").unwrap();
        assert!(xyz.special.contains(WordFlags::Forbidden));
    }

    #[test]
    fn test_word_list_skips_count_and_comments() {
        let aff = "SET UTF-8\n";
        let dic = "2\nword\n\tcommented out\n";
        let dict = Dictionary::from_strings(aff, dic).unwrap();
        assert!(dict.words.contains_key("word"));
        assert_eq!(dict.words.len(), 1);
    }

    #[test]
    fn test_split_morphological_fields() {
        assert_eq!(
            Dictionary::split_morphological_fields("word po:noun"),
            ("word", Some("po:noun"))
        );
        assert_eq!(
            Dictionary::split_morphological_fields("a lot"),
            ("a lot", None)
        );
        assert_eq!(
            Dictionary::split_morphological_fields("word"),
            ("word", None)
        );
    }
}
