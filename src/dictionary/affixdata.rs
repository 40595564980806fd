use anyhow::{anyhow, bail, Result};
use itertools::Itertools;
use std::num::ParseIntError;

use crate::dictionary::affixes::{AffixEntry, PrefixTrie, SuffixTrie};
use crate::dictionary::casing::Locale;
use crate::dictionary::flagset::FlagSet;
use crate::dictionary::replacements::Replacements;
use crate::dictionary::wordflags::WordFlags;

/// Represents the format of the flags after words in the dictionary file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagMode {
    /// Single-character flags
    CharFlags,
    /// Two-character flags
    DoubleCharFlags,
    /// Flags are comma-separated ASCII integers
    NumericFlags,
    /// Flags are Unicode codepoints in UTF-8 format
    Utf8Flags,
}

pub type AffixFlag = u32;

/// Everything read from the affix file that the checker consults.
#[derive(Debug)]
pub struct AffixData {
    pub flag_mode: FlagMode,
    pub locale: Locale,
    /// Flag for invalid words.
    pub forbidden: Option<AffixFlag>,
    /// Flag for words that must keep their dictionary casing.
    pub keepcase: Option<AffixFlag>,
    /// Flag for stems that are not words on their own.
    pub need_affix: Option<AffixFlag>,
    /// Continuation flag marking affixes that need a counterpart on the
    /// other side of the word.
    pub circumfix: Option<AffixFlag>,
    /// Flag for stems and affixes valid only inside compound words.
    pub only_in_compound: Option<AffixFlag>,
    /// Flag for rare words that are probably spelling errors.
    pub warn: Option<AffixFlag>,
    /// When set, warn-flagged words are rejected outright.
    pub forbid_warn: bool,
    /// German sharp s handling for all-caps words.
    pub check_sharps: bool,
    pub input_conversion: Replacements,
    pub break_table: BreakTable,
    pub prefixes: Vec<AffixEntry>,
    pub suffixes: Vec<AffixEntry>,
    pub prefix_index: PrefixTrie<u32>,
    pub suffix_index: SuffixTrie<u32>,
}

impl AffixData {
    pub fn new() -> Self {
        AffixData {
            flag_mode: FlagMode::CharFlags,
            locale: Locale::Neutral,
            forbidden: None,
            keepcase: None,
            need_affix: None,
            circumfix: None,
            only_in_compound: None,
            warn: None,
            forbid_warn: false,
            check_sharps: false,
            input_conversion: Replacements::default(),
            break_table: BreakTable::default(),
            prefixes: Vec::new(),
            suffixes: Vec::new(),
            prefix_index: PrefixTrie::default(),
            suffix_index: SuffixTrie::default(),
        }
    }

    pub fn parse_flags(&self, flags: &str) -> Result<Vec<AffixFlag>> {
        if flags.is_empty() {
            return Ok(Vec::new());
        }
        match self.flag_mode {
            FlagMode::CharFlags | FlagMode::Utf8Flags => {
                Ok(flags.chars().map(|c| c as u32).collect())
            }
            FlagMode::DoubleCharFlags => flags
                .chars()
                .chunks(2)
                .into_iter()
                .map(|mut pair| {
                    let c1 = pair.next().unwrap() as u32;
                    let c2 = pair
                        .next()
                        .ok_or_else(|| anyhow!("Odd length double flag string"))?
                        as u32;
                    if c1 > 255 || c2 > 255 {
                        bail!("Invalid characters in double flag");
                    }
                    Ok(c1 * 256 + c2)
                })
                .collect(),
            FlagMode::NumericFlags => flags
                .split(',')
                .map(|d| d.parse::<AffixFlag>())
                .collect::<Result<Vec<AffixFlag>, ParseIntError>>()
                .map_err(anyhow::Error::from),
        }
    }

    pub fn parse_one_flag(&self, flag: &str) -> Result<AffixFlag> {
        let parsed = self.parse_flags(flag)?;
        if parsed.len() != 1 {
            bail!("Expected a single flag, got {:?}", flag);
        }
        Ok(parsed[0])
    }

    /// Summarize which of the configured special flags are present in a
    /// flag set.
    pub fn special_flags(&self, flags: &FlagSet) -> WordFlags {
        let mut special = WordFlags::empty();
        for (option, bit) in [
            (self.forbidden, WordFlags::Forbidden),
            (self.keepcase, WordFlags::KeepCase),
            (self.need_affix, WordFlags::NeedAffix),
            (self.circumfix, WordFlags::Circumfix),
            (self.only_in_compound, WordFlags::OnlyInCompound),
            (self.warn, WordFlags::Warn),
        ] {
            if let Some(flag) = option {
                if flags.contains(flag) {
                    special |= bit;
                }
            }
        }
        special
    }

    /// Fill in the derived structures once all affix lines are processed:
    /// the continuation-flag summaries and the append-keyed tries.
    pub fn build_indexes(&mut self) {
        let specials: Vec<WordFlags> = self
            .prefixes
            .iter()
            .map(|e| self.special_flags(&e.cont_flags))
            .collect();
        for (entry, special) in self.prefixes.iter_mut().zip(specials) {
            entry.cont_special = special;
        }
        let specials: Vec<WordFlags> = self
            .suffixes
            .iter()
            .map(|e| self.special_flags(&e.cont_flags))
            .collect();
        for (entry, special) in self.suffixes.iter_mut().zip(specials) {
            entry.cont_special = special;
        }

        self.prefix_index.clear();
        for (i, entry) in self.prefixes.iter().enumerate() {
            self.prefix_index.insert(&entry.append, i as u32);
        }
        self.suffix_index.clear();
        for (i, entry) in self.suffixes.iter().enumerate() {
            self.suffix_index.insert(&entry.append, i as u32);
        }
    }
}

/// The three break pattern lists from the BREAK directive. The default
/// table splits on hyphens, including one leading or trailing hyphen.
#[derive(Clone, Debug)]
pub struct BreakTable {
    pub start: Vec<String>,
    pub end: Vec<String>,
    pub middle: Vec<String>,
}

impl Default for BreakTable {
    fn default() -> Self {
        BreakTable {
            start: vec!["-".to_string()],
            end: vec!["-".to_string()],
            middle: vec!["-".to_string()],
        }
    }
}

impl BreakTable {
    pub fn clear(&mut self) {
        self.start.clear();
        self.end.clear();
        self.middle.clear();
    }

    /// File order is preserved within each list; a `^` prefix or `$`
    /// suffix routes the pattern to the start or end list.
    pub fn add(&mut self, pattern: &str) {
        if let Some(pat) = pattern.strip_prefix('^') {
            if !pat.is_empty() {
                self.start.push(pat.to_string());
            }
        } else if let Some(pat) = pattern.strip_suffix('$') {
            if !pat.is_empty() {
                self.end.push(pat.to_string());
            }
        } else if !pattern.is_empty() {
            self.middle.push(pattern.to_string());
        }
    }
}
