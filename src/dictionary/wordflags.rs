#![allow(non_upper_case_globals)]

use bitflags::bitflags;

bitflags! {
    /// Summary of the special flags a word or affix entry carries,
    /// precomputed at load time so the checker does not repeat flag-set
    /// lookups on the hot path.
    #[derive(Default)]
    pub struct WordFlags: u8 {
        /// This word must not be accepted as good.
        const Forbidden = 0x01;
        /// This word should not have its case changed.
        const KeepCase = 0x02;
        /// This word is not valid without an affix.
        const NeedAffix = 0x04;
        /// This word can only appear as part of compound words.
        const OnlyInCompound = 0x08;
        /// A continuation flag for affixes that must surround a word.
        const Circumfix = 0x10;
        /// This is a very rare word that is likely a spelling error.
        const Warn = 0x20;
    }
}
