/// The checking pipeline: break decomposition, casing strategies and
/// affix stripping. Everything here works on an immutable, fully loaded
/// dictionary, so concurrent queries need no coordination.
use crate::dictionary::casing::{
    classify_casing, classify_chars, lowercase, titlecase,
    turkic_dotted_alternate, Casing, Locale,
};
use crate::dictionary::wordflags::WordFlags;
use crate::dictionary::{Dictionary, WordInfo};

/// Words at least this long (in characters) are never accepted.
const MAX_WORD_LEN: usize = 100;

/// Cap on ss -> ß substitutions tried per word.
const MAX_SHARPS: usize = 5;

/// Cap on break recursion, to bound pathological break tables.
const MAX_BREAK_DEPTH: usize = 10;

impl Dictionary {
    /// Check one candidate word. This is the whole public contract of
    /// the checker: sanitization, break handling, case handling and
    /// affix stripping happen behind this call.
    pub(crate) fn spell(&self, word: &str) -> bool {
        if word.chars().count() >= MAX_WORD_LEN {
            return false;
        }
        let converted = self.affix_data.input_conversion.conv(word);
        let s = converted.trim();
        if s.is_empty() {
            return true;
        }
        let abbreviation = s.ends_with('.');
        let s = s.trim_end_matches('.');
        if s.is_empty() {
            return true;
        }
        if is_number(s) {
            return true;
        }
        if self.spell_break(s, 0) {
            return true;
        }
        if abbreviation {
            // Abbreviations may be listed with their period, so retry
            // with exactly one of them restored.
            let mut t = String::with_capacity(s.len() + 1);
            t.push_str(s);
            t.push('.');
            return self.spell_break(&t, 0);
        }
        false
    }

    /// Try the word as-is, then split it on the break patterns and check
    /// the pieces. Each recursion strictly shortens the input; the depth
    /// cap protects against break tables that keep matching.
    fn spell_break(&self, s: &str, depth: usize) -> bool {
        if depth >= MAX_BREAK_DEPTH {
            return false;
        }
        if let Some(winfo) = self.spell_casing(s) {
            // A forbidden whole-word match blocks splitting too:
            // otherwise a forbidden compound would be resurrected by
            // checking its halves.
            if winfo.special.contains(WordFlags::Forbidden) {
                return false;
            }
            if self.affix_data.forbid_warn
                && winfo.special.contains(WordFlags::Warn)
            {
                return false;
            }
            return true;
        }
        let table = &self.affix_data.break_table;
        for pat in table.start.iter() {
            if let Some(rest) = s.strip_prefix(pat.as_str()) {
                if self.spell_break(rest, depth + 1) {
                    return true;
                }
            }
        }
        for pat in table.end.iter() {
            if let Some(rest) = s.strip_suffix(pat.as_str()) {
                if self.spell_break(rest, depth + 1) {
                    return true;
                }
            }
        }
        for pat in table.middle.iter() {
            // Only the leftmost strictly interior occurrence is tried;
            // alternative split points are not explored.
            if let Some(i) = find_interior(s, pat) {
                if self.spell_break(&s[..i], depth + 1)
                    && self.spell_break(&s[i + pat.len()..], depth + 1)
                {
                    return true;
                }
            }
        }
        false
    }

    /// Classify the word's casing and route it to the matching lookup
    /// strategy. Returns the matched word entry, if any; the caller
    /// applies the forbidden/warn gates.
    fn spell_casing(&self, s: &str) -> Option<&WordInfo> {
        let aff = &self.affix_data;
        // With CHECKSHARPS, ß is caseless for classification purposes,
        // so that STRAßE still counts as all capitals.
        let casing = if aff.check_sharps && s.contains('ß') {
            classify_chars(s.chars().filter(|&c| c != 'ß'))
        } else {
            classify_casing(s)
        };
        match casing {
            Casing::Small | Casing::Camel | Casing::Pascal => {
                self.check_word(s)
            }
            Casing::AllCapital => self.spell_casing_upper(s),
            Casing::InitCapital => self.spell_casing_title(s),
        }
    }

    /// Lookup strategy for all-capital words.
    fn spell_casing_upper(&self, s: &str) -> Option<&WordInfo> {
        let aff = &self.affix_data;
        if let Some(winfo) = self.check_word(s) {
            return Some(winfo);
        }

        // Apostrophe-joined prefixes in Catalan, French and Italian,
        // e.g. SANT'ELIA -> Sant'Elia.
        if let Some(apos) = s.find('\'') {
            let t = if apos + 1 == s.len() {
                titlecase(s, aff.locale)
            } else {
                let head = titlecase(&s[..=apos], aff.locale);
                let tail = titlecase(&s[apos + 1..], aff.locale);
                head + &tail
            };
            if let Some(winfo) = self.check_word(&t) {
                return Some(winfo);
            }
        }

        // German sharp s: SS in the surface form may stand for ß.
        if aff.check_sharps && s.contains("SS") {
            let t = lowercase(s, aff.locale);
            if let Some(winfo) = self.spell_sharps(&t) {
                return Some(winfo);
            }
            let t = titlecase(s, aff.locale);
            if let Some(winfo) = self.spell_sharps(&t) {
                return Some(winfo);
            }
        }

        // Fall back to the title-cased form. An all-caps surface form
        // must not match a keep-case stem through refolding; such stems
        // only match verbatim, which was tried above.
        let res = self.spell_casing_title(&titlecase(s, aff.locale));
        match res {
            Some(winfo) if winfo.special.contains(WordFlags::KeepCase) => None,
            other => other,
        }
    }

    /// Lookup strategy for title-cased words: the form itself (proper
    /// nouns are stored capitalized), then the lowercase fold, then the
    /// Turkic dotted-I alternate of the fold.
    fn spell_casing_title(&self, s: &str) -> Option<&WordInfo> {
        let aff = &self.affix_data;
        if let Some(winfo) = self.check_word(s) {
            return Some(winfo);
        }

        let lower = lowercase(s, aff.locale);
        let mut res = self.check_word(&lower);

        if res.is_none() && aff.locale == Locale::Turkic {
            // A leading I may stand for dotted İ and the other way
            // around; try the swapped reading and its lowercase fold.
            if let Some(alt) = turkic_dotted_alternate(s) {
                res = self.check_word(&alt);
                if res.is_none() {
                    res = self.check_word(&lowercase(&alt, aff.locale));
                }
            }
        }

        // A hit reached only through case folding must not satisfy a
        // keep-case stem.
        match res {
            Some(winfo) if winfo.special.contains(WordFlags::KeepCase) => None,
            other => other,
        }
    }

    /// Enumerate the ways of replacing "ss" with "ß" in `base`, left to
    /// right, and look each variant up. Only variants with at least one
    /// substitution are probed, and at most MAX_SHARPS positions are
    /// considered.
    fn spell_sharps(&self, base: &str) -> Option<&WordInfo> {
        let mut scratch = String::from(base);
        self.spell_sharps_at(&mut scratch, 0, 0, 0)
    }

    fn spell_sharps_at(
        &self,
        base: &mut String,
        pos: usize,
        n: usize,
        rep: usize,
    ) -> Option<&WordInfo> {
        if n < MAX_SHARPS {
            if let Some(off) = base[pos..].find("ss") {
                let i = pos + off;
                // "ß" and "ss" are both two bytes, so the replacement
                // keeps every index stable.
                base.replace_range(i..i + 2, "ß");
                // Resume two characters past the substitution point.
                let resume = i
                    + 2
                    + base[i + 2..].chars().next().map_or(0, char::len_utf8);
                if let Some(winfo) =
                    self.spell_sharps_at(base, resume, n + 1, rep + 1)
                {
                    return Some(winfo);
                }
                base.replace_range(i..i + 2, "ss");
                return self.spell_sharps_at(base, i + 2, n + 1, rep);
            }
        }
        if rep > 0 {
            return self.check_word(base);
        }
        None
    }

    /// The stem checker: a raw dictionary probe, then prefix-only and
    /// suffix-only affix stripping. Case handling happened above; the
    /// dictionary probe here is case-exact.
    fn check_word(&self, s: &str) -> Option<&WordInfo> {
        if let Some(winfo) = self.words.get(s) {
            // Stems that demand an affix, or that only occur inside
            // compounds, are not words on their own.
            if !winfo
                .special
                .intersects(WordFlags::NeedAffix | WordFlags::OnlyInCompound)
            {
                return Some(winfo);
            }
        }
        if let Some(winfo) = self.strip_prefix_only(s) {
            return Some(winfo);
        }
        self.strip_suffix_only(s)
    }

    /// Probe the prefix table for entries whose append is a prefix of
    /// `word`, shortest first, and look up the reconstructed stem.
    fn strip_prefix_only(&self, word: &str) -> Option<&WordInfo> {
        let aff = &self.affix_data;
        let mut hit = None;
        aff.prefix_index.lookup(word, |idx| {
            let entry = &aff.prefixes[idx as usize];
            if entry.cont_special.intersects(
                WordFlags::OnlyInCompound
                    | WordFlags::NeedAffix
                    | WordFlags::Circumfix,
            ) {
                return false;
            }
            let stem = entry.prefix_stem(word);
            if !entry.condition.matches_start(&stem) {
                return false;
            }
            let winfo = match self.words.get(&stem) {
                Some(winfo) => winfo,
                None => return false,
            };
            if !winfo.flags.contains(entry.flag) {
                return false;
            }
            if winfo.special.contains(WordFlags::OnlyInCompound) {
                return false;
            }
            hit = Some(winfo);
            true
        });
        hit
    }

    /// Symmetric to strip_prefix_only, for suffixes.
    fn strip_suffix_only(&self, word: &str) -> Option<&WordInfo> {
        let aff = &self.affix_data;
        let mut hit = None;
        aff.suffix_index.lookup(word, |idx| {
            let entry = &aff.suffixes[idx as usize];
            if entry.cont_special.intersects(
                WordFlags::OnlyInCompound
                    | WordFlags::NeedAffix
                    | WordFlags::Circumfix,
            ) {
                return false;
            }
            let stem = entry.suffix_stem(word);
            if !entry.condition.matches_end(&stem) {
                return false;
            }
            let winfo = match self.words.get(&stem) {
                Some(winfo) => winfo,
                None => return false,
            };
            if !winfo.flags.contains(entry.flag) {
                return false;
            }
            if winfo.special.contains(WordFlags::OnlyInCompound) {
                return false;
            }
            hit = Some(winfo);
            true
        });
        hit
    }
}

/// Tests if a word is a number: an optional leading minus sign, then
/// digit runs separated by single dots, dashes or commas. Double
/// separators disqualify.
fn is_number(s: &str) -> bool {
    if s.is_empty() {
        return false;
    }
    let b = s.as_bytes();
    let mut i = usize::from(b[0] == b'-');
    loop {
        let digits_start = i;
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        if i == digits_start {
            return false;
        }
        if i == b.len() {
            return true;
        }
        match b[i] {
            b'.' | b',' | b'-' => i += 1,
            _ => return false,
        }
    }
}

/// Leftmost occurrence of `pat` in `s` that leaves both halves
/// non-empty.
fn find_interior(s: &str, pat: &str) -> Option<usize> {
    s.match_indices(pat)
        .map(|(i, _)| i)
        .find(|&i| i > 0 && i + pat.len() < s.len())
}
