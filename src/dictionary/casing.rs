/// Casing classification and locale-aware case folding.
///
/// Classification looks only at the Unicode case of each code point;
/// language-specific pairings (Turkish dotted I, the Dutch IJ digraph)
/// are handled as extra folding probes by the checker, not here.

/// Casing type of a word, ignoring caseless characters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Casing {
    /// All cased characters lowercase, or no cased characters at all.
    Small,
    /// First cased character uppercase, the rest lowercase.
    InitCapital,
    /// All cased characters uppercase, at least two of them.
    AllCapital,
    /// First cased character lowercase, a later one uppercase.
    Camel,
    /// First cased character uppercase, both cases later on.
    Pascal,
}

pub fn classify_casing(s: &str) -> Casing {
    classify_chars(s.chars())
}

pub fn classify_chars(chars: impl Iterator<Item = char>) -> Casing {
    let mut upper = 0usize;
    let mut lower = 0usize;
    let mut first_cased_upper = None;
    for c in chars {
        if c.is_uppercase() {
            upper += 1;
            first_cased_upper.get_or_insert(true);
        } else if c.is_lowercase() {
            lower += 1;
            first_cased_upper.get_or_insert(false);
        }
    }
    if upper == 0 {
        return Casing::Small;
    }
    let first_upper = first_cased_upper == Some(true);
    if first_upper && upper == 1 {
        return Casing::InitCapital;
    }
    if lower == 0 {
        return Casing::AllCapital;
    }
    if first_upper {
        Casing::Pascal
    } else {
        Casing::Camel
    }
}

/// The language groups whose case folding differs from the Unicode
/// default in ways the checker cares about. Parsed from the LANG line
/// of the affix file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Locale {
    #[default]
    Neutral,
    /// Turkish and Azerbaijani: dotted and dotless I pair differently.
    Turkic,
    /// Dutch: leading "ij" title-cases as a unit.
    Dutch,
}

impl Locale {
    pub fn from_lang(lang: &str) -> Locale {
        let code = lang
            .split(|c: char| c == '_' || c == '-' || c == '.')
            .next()
            .unwrap_or("");
        match code {
            "tr" | "az" => Locale::Turkic,
            "nl" => Locale::Dutch,
            _ => Locale::Neutral,
        }
    }
}

pub fn lowercase(s: &str, locale: Locale) -> String {
    match locale {
        Locale::Turkic => {
            let mut out = String::with_capacity(s.len());
            for c in s.chars() {
                match c {
                    'I' => out.push('ı'),
                    'İ' => out.push('i'),
                    _ => out.extend(c.to_lowercase()),
                }
            }
            out
        }
        // str::to_lowercase already applies the Greek final-sigma rule
        // and maps ẞ to ß.
        _ => s.to_lowercase(),
    }
}

pub fn uppercase(s: &str, locale: Locale) -> String {
    match locale {
        Locale::Turkic => {
            let mut out = String::with_capacity(s.len());
            for c in s.chars() {
                match c {
                    'i' => out.push('İ'),
                    'ı' => out.push('I'),
                    _ => out.extend(c.to_uppercase()),
                }
            }
            out
        }
        // str::to_uppercase already expands ß to SS.
        _ => s.to_uppercase(),
    }
}

/// Uppercase the first character and lowercase the rest. Under the Dutch
/// locale a leading "ij" is treated as a digraph and both letters are
/// capitalized.
pub fn titlecase(s: &str, locale: Locale) -> String {
    let mut chars = s.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return String::new(),
    };
    let rest = chars.as_str();
    let mut out = String::with_capacity(s.len());
    if locale == Locale::Dutch {
        if matches!(first, 'i' | 'I') {
            if let Some(second) = rest.chars().next() {
                if matches!(second, 'j' | 'J') {
                    out.push_str("IJ");
                    out.push_str(&lowercase(&rest[second.len_utf8()..], locale));
                    return out;
                }
            }
        }
        if matches!(first, 'ĳ' | 'Ĳ') {
            out.push('Ĳ');
            out.push_str(&lowercase(rest, locale));
            return out;
        }
    }
    let mut buf = [0u8; 4];
    out.push_str(&uppercase(first.encode_utf8(&mut buf), locale));
    out.push_str(&lowercase(rest, locale));
    out
}

/// The alternate reading of a word under Turkic casing: a leading ASCII
/// `I` may stand for dotted `İ` and vice versa. Returns the word with
/// the leading letter swapped, or None when it starts with neither.
pub fn turkic_dotted_alternate(s: &str) -> Option<String> {
    let mut chars = s.chars();
    let head = match chars.next()? {
        'I' => 'İ',
        'İ' => 'I',
        _ => return None,
    };
    let mut out = String::with_capacity(s.len() + 1);
    out.push(head);
    out.push_str(chars.as_str());
    Some(out)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify_casing(""), Casing::Small);
        assert_eq!(classify_casing("123"), Casing::Small);
        assert_eq!(classify_casing("lowercase"), Casing::Small);
        assert_eq!(classify_casing("Initcap"), Casing::InitCapital);
        assert_eq!(classify_casing("A"), Casing::InitCapital);
        assert_eq!(classify_casing("UPPERCASE"), Casing::AllCapital);
        assert_eq!(classify_casing("ALL4ONE"), Casing::AllCapital);
        assert_eq!(classify_casing("camelCase"), Casing::Camel);
        assert_eq!(classify_casing("caT"), Casing::Camel);
        assert_eq!(classify_casing("PascalCase"), Casing::Pascal);
        assert_eq!(classify_casing("OpenOffice.org"), Casing::Pascal);
    }

    #[test]
    fn test_classify_skips_caseless() {
        // leading digits and punctuation do not decide the first case
        assert_eq!(classify_casing("3Com"), Casing::InitCapital);
        assert_eq!(classify_casing("'Em"), Casing::InitCapital);
        assert_eq!(classify_casing("'em"), Casing::Small);
    }

    #[test]
    fn test_locale_from_lang() {
        assert_eq!(Locale::from_lang("tr_TR"), Locale::Turkic);
        assert_eq!(Locale::from_lang("az"), Locale::Turkic);
        assert_eq!(Locale::from_lang("nl-NL"), Locale::Dutch);
        assert_eq!(Locale::from_lang("de_DE"), Locale::Neutral);
        assert_eq!(Locale::from_lang(""), Locale::Neutral);
    }

    #[test]
    fn test_lowercase() {
        assert_eq!(lowercase("STRASSE", Locale::Neutral), "strasse");
        assert_eq!(lowercase("ΟΔΟΣ", Locale::Neutral), "οδος");
        assert_eq!(lowercase("İSTANBUL", Locale::Turkic), "istanbul");
        assert_eq!(lowercase("ISTANBUL", Locale::Turkic), "ıstanbul");
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(uppercase("straße", Locale::Neutral), "STRASSE");
        assert_eq!(uppercase("istanbul", Locale::Turkic), "İSTANBUL");
        assert_eq!(uppercase("ıstanbul", Locale::Turkic), "ISTANBUL");
    }

    #[test]
    fn test_titlecase() {
        assert_eq!(titlecase("paris", Locale::Neutral), "Paris");
        assert_eq!(titlecase("PARIS", Locale::Neutral), "Paris");
        assert_eq!(titlecase("sant'", Locale::Neutral), "Sant'");
        assert_eq!(titlecase("ijsselmeer", Locale::Dutch), "IJsselmeer");
        assert_eq!(titlecase("IJSSELMEER", Locale::Dutch), "IJsselmeer");
        assert_eq!(titlecase("ĳsselmeer", Locale::Dutch), "Ĳsselmeer");
        assert_eq!(titlecase("ijsselmeer", Locale::Neutral), "Ijsselmeer");
        assert_eq!(titlecase("istanbul", Locale::Turkic), "İstanbul");
        assert_eq!(titlecase("ısparta", Locale::Turkic), "Isparta");
    }

    #[test]
    fn test_turkic_dotted_alternate() {
        assert_eq!(turkic_dotted_alternate("Ankara"), None);
        assert_eq!(
            turkic_dotted_alternate("Istanbul").as_deref(),
            Some("İstanbul")
        );
        assert_eq!(
            turkic_dotted_alternate("İstanbul").as_deref(),
            Some("Istanbul")
        );
    }
}
