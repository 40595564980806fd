use std::path::Path;

use affspell::{Dictionary, Speller};

fn load_speller(name: &str) -> Dictionary {
    let dicpath = format!("tests/files/{}.dic", name);
    let affpath = format!("tests/files/{}.aff", name);
    Dictionary::new(Path::new(&dicpath), Path::new(&affpath)).unwrap()
}

fn speller(aff: &str, dic: &str) -> Dictionary {
    Dictionary::from_strings(aff, dic).unwrap()
}

#[test]
fn match_root_words() {
    let speller = load_speller("basic");

    assert!(speller.spellcheck("Alberta"));
    assert!(speller.spellcheck("angle"));
    assert!(speller.spellcheck("appear"));
    assert!(speller.spellcheck("cat"));

    assert!(!speller.spellcheck("alberta")); // As capitalized in the dict
    assert!(!speller.spellcheck("agnle"));
    assert!(!speller.spellcheck("apear"));
}

#[test]
fn match_prefixes() {
    let speller = load_speller("basic");

    assert!(speller.spellcheck("reappear"));
    assert!(speller.spellcheck("Reappear"));
    assert!(speller.spellcheck("REAPPEAR"));

    assert!(!speller.spellcheck("unappear")); // no such prefix flag
    assert!(!speller.spellcheck("recat")); // cat lacks the prefix flag
}

#[test]
fn match_suffixes() {
    let speller = load_speller("basic");

    assert!(speller.spellcheck("angles"));
    assert!(speller.spellcheck("angling"));
    assert!(speller.spellcheck("appears"));
    assert!(speller.spellcheck("appearing"));
    assert!(speller.spellcheck("cats"));

    assert!(!speller.spellcheck("angleing")); // badly applied G
    assert!(!speller.spellcheck("catss"));
    assert!(!speller.spellcheck("dogs")); // stem not present
}

#[test]
fn match_case_words() {
    let speller = load_speller("basic");

    assert!(speller.spellcheck("ALBERTA"));
    assert!(speller.spellcheck("Angle"));
    assert!(speller.spellcheck("ANGLE"));
    assert!(speller.spellcheck("ANGLES"));
    assert!(speller.spellcheck("Cats"));
    assert!(speller.spellcheck("OpenOffice.org"));

    assert!(!speller.spellcheck("apPear")); // random middle caps are errors
    assert!(!speller.spellcheck("caT"));
}

#[test]
fn match_broken_words() {
    let speller = load_speller("basic");

    assert!(speller.spellcheck("Alberta-angle"));
    assert!(speller.spellcheck("cat-appear-angle"));
    assert!(speller.spellcheck("----angle---"));

    assert!(!speller.spellcheck("Alberta-agnle"));
}

#[test]
fn entry_sanitization() {
    let speller = load_speller("basic");

    // empty and whitespace-only input is good by definition
    assert!(speller.spellcheck(""));
    assert!(speller.spellcheck("   "));
    assert!(speller.spellcheck(" \u{00A0}\t "));
    assert!(speller.spellcheck("..."));

    // surrounding whitespace is ignored
    assert!(speller.spellcheck("  cat "));

    // numbers are good, unless a separator is doubled
    assert!(speller.spellcheck("54"));
    assert!(speller.spellcheck("3,14"));
    assert!(speller.spellcheck("-1.000.000"));
    assert!(speller.spellcheck("1-2-3"));
    assert!(!speller.spellcheck("100,,000"));

    // the length cap
    let long = "a".repeat(100);
    assert!(!speller.spellcheck(&long));
    assert!(!speller.spellcheck(&"CAT".repeat(40)));
}

#[test]
fn verdicts_are_stable() {
    let speller = load_speller("basic");

    // spellcheck takes no locks and mutates nothing; asking twice must
    // give the same answer
    for word in ["angle", "ANGLES", "agnle", "3,14", "cat-appear"] {
        assert_eq!(speller.spellcheck(word), speller.spellcheck(word));
    }
}

#[test]
fn abbreviations() {
    let speller = speller("SET UTF-8\n", "2\netc.\nword\n");

    assert!(speller.spellcheck("etc."));
    assert!(speller.spellcheck("etc.."));
    assert!(speller.spellcheck("word."));
    assert!(speller.spellcheck("word..."));
    assert!(!speller.spellcheck("etc"));
}

#[test]
fn forbidden_words() {
    let aff = "SET UTF-8\nFORBIDDENWORD !\n";
    let speller = speller(aff, "5\nfoo\nbar\ngnu\nxyz/!\nfoo-bar/!\n");

    assert!(speller.spellcheck("foo"));
    assert!(speller.spellcheck("bar"));
    assert!(speller.spellcheck("foo-gnu"));
    assert!(speller.spellcheck("bar-gnu"));

    assert!(!speller.spellcheck("xyz"));
    // forbidden as a whole, so breaking it apart must not help
    assert!(!speller.spellcheck("foo-bar"));
}

#[test]
fn forbidden_beats_affixed_forms() {
    let aff = "\
SET UTF-8
FORBIDDENWORD !
SFX S Y 1
SFX S 0 s .
";
    let speller = speller(aff, "2\ncat/S\ncats/!S\n");

    assert!(speller.spellcheck("cat"));
    assert!(!speller.spellcheck("cats"));
}

#[test]
fn warn_words() {
    let aff = "SET UTF-8\nWARN W\n";
    let tolerant = speller(aff, "1\nalot/W\n");
    assert!(tolerant.spellcheck("alot"));

    let aff = "SET UTF-8\nWARN W\nFORBIDWARN\n";
    let strict = speller(aff, "1\nalot/W\n");
    assert!(!strict.spellcheck("alot"));
}

#[test]
fn keep_case_words() {
    let aff = "SET UTF-8\nKEEPCASE K\n";
    let speller = speller(aff, "2\nBIOS/K\nfoo/K\n");

    // exact casing works
    assert!(speller.spellcheck("BIOS"));
    assert!(speller.spellcheck("foo"));

    // refolded casings do not
    assert!(!speller.spellcheck("Bios"));
    assert!(!speller.spellcheck("bios"));
    assert!(!speller.spellcheck("Foo"));
    assert!(!speller.spellcheck("FOO"));
}

#[test]
fn need_affix_stems() {
    let aff = "\
SET UTF-8
NEEDAFFIX n
SFX S Y 1
SFX S 0 s .
";
    let speller = speller(aff, "1\npseudo/nS\n");

    assert!(speller.spellcheck("pseudos"));
    assert!(!speller.spellcheck("pseudo"));
}

#[test]
fn compound_only_stems() {
    let aff = "\
SET UTF-8
ONLYINCOMPOUND c
SFX E Y 1
SFX E 0 e .
";
    let speller = speller(aff, "2\nzirkular/cE\nziemlich/E\n");

    assert!(speller.spellcheck("ziemlich"));
    assert!(speller.spellcheck("ziemliche"));

    // only-in-compound stems are not words outside compounds,
    // affixed or not
    assert!(!speller.spellcheck("zirkular"));
    assert!(!speller.spellcheck("zirkulare"));
}

#[test]
fn skipped_affix_entries() {
    // affix entries carrying these continuation flags do not take part
    // in the single-affix paths
    let aff = "\
SET UTF-8
ONLYINCOMPOUND c
CIRCUMFIX x
NEEDAFFIX n
SFX P Y 1
SFX P 0 s/c .
SFX Q Y 1
SFX Q 0 en/x .
SFX R Y 1
SFX R 0 er/n .
SFX S Y 1
SFX S 0 ed .
";
    let speller = speller(aff, "1\ncheck/PQRS\n");

    assert!(speller.spellcheck("checked"));
    assert!(!speller.spellcheck("checks"));
    assert!(!speller.spellcheck("checken"));
    assert!(!speller.spellcheck("checker"));
}

#[test]
fn affix_conditions() {
    let aff = "\
SET UTF-8
SFX Y Y 2
SFX Y y ies [^aeiou]y
SFX Y 0 s [aeiou]y
";
    let speller = speller(aff, "2\ntry/Y\nplay/Y\n");

    assert!(speller.spellcheck("tries"));
    assert!(speller.spellcheck("plays"));

    assert!(!speller.spellcheck("trys"));
    assert!(!speller.spellcheck("plaies"));
}

#[test]
fn prefix_conditions() {
    let aff = "\
SET UTF-8
PFX U Y 1
PFX U 0 un [^n]
";
    let speller = speller(aff, "2\ntie/U\nnice/U\n");

    assert!(speller.spellcheck("untie"));
    assert!(!speller.spellcheck("unnice"));
}

#[test]
fn break_patterns() {
    let aff = "\
SET UTF-8
BREAK 3
BREAK ·
BREAK ^:
BREAK :$
";
    let speller = speller(aff, "2\nfoo\nbar\n");

    assert!(speller.spellcheck("foo·bar"));
    assert!(speller.spellcheck(":foo"));
    assert!(speller.spellcheck("bar:"));

    // the default hyphen table was replaced
    assert!(!speller.spellcheck("foo-bar"));
    // the middle pattern must leave both halves non-empty
    assert!(!speller.spellcheck("·foo"));
}

#[test]
fn break_disabled() {
    let speller = speller("SET UTF-8\nBREAK 0\n", "2\nfoo\nbar\n");

    assert!(speller.spellcheck("foo"));
    assert!(!speller.spellcheck("foo-bar"));
}

#[test]
fn input_conversion() {
    let aff = "\
SET UTF-8
ICONV 1
ICONV ’ '
";
    let speller = speller(aff, "1\ncan't\n");

    assert!(speller.spellcheck("can't"));
    assert!(speller.spellcheck("can’t"));
}

#[test]
fn german_sharp_s() {
    let aff = "SET UTF-8\nCHECKSHARPS\n";
    let speller = speller(aff, "2\nstraße\ngroßstraße\n");

    assert!(speller.spellcheck("straße"));
    assert!(speller.spellcheck("Straße"));
    assert!(speller.spellcheck("STRASSE"));
    assert!(speller.spellcheck("STRAßE"));
    assert!(speller.spellcheck("GROSSSTRASSE"));

    assert!(!speller.spellcheck("strasse"));
    assert!(!speller.spellcheck("Strasse"));
}

#[test]
fn sharp_s_title_case_stems() {
    // a capitalized ß stem must be reachable from its all-caps form
    let aff = "SET UTF-8\nCHECKSHARPS\n";
    let speller = speller(aff, "1\nWeißrussland\n");

    assert!(speller.spellcheck("Weißrussland"));
    assert!(speller.spellcheck("WEISSRUSSLAND"));
}

#[test]
fn apostrophe_names() {
    let speller = speller("SET UTF-8\n", "2\nSant'Elia\nlupi'\n");

    assert!(speller.spellcheck("Sant'Elia"));
    assert!(speller.spellcheck("SANT'ELIA"));
    assert!(speller.spellcheck("LUPI'"));

    assert!(!speller.spellcheck("sant'elia"));
}

#[test]
fn turkish_dotted_i() {
    let aff = "SET UTF-8\nLANG tr_TR\n";
    let speller = speller(aff, "2\nİstanbul\nılık\n");

    assert!(speller.spellcheck("İstanbul"));
    assert!(speller.spellcheck("İSTANBUL"));
    // an ASCII capital I is accepted for dotted İ
    assert!(speller.spellcheck("Istanbul"));
    assert!(speller.spellcheck("ISTANBUL"));

    assert!(speller.spellcheck("ılık"));
    assert!(speller.spellcheck("ILIK"));
    assert!(speller.spellcheck("Ilık"));

    assert!(!speller.spellcheck("istanbul")); // stored capitalized
}

#[test]
fn dutch_ij_digraph() {
    let aff = "SET UTF-8\nLANG nl_NL\n";
    let speller = speller(aff, "2\nIJsselmeer\nijs\n");

    assert!(speller.spellcheck("IJsselmeer"));
    assert!(speller.spellcheck("IJSSELMEER"));
    assert!(speller.spellcheck("ijs"));
    assert!(speller.spellcheck("IJS"));

    assert!(!speller.spellcheck("Ijsselmeer")); // digraph capitalizes as IJ
}

#[test]
fn keep_case_and_all_caps_stems() {
    // an all-caps keep-case stem still matches its own casing
    let aff = "SET UTF-8\nKEEPCASE K\n";
    let speller = speller(aff, "1\nUNICEF/K\n");

    assert!(speller.spellcheck("UNICEF"));
    assert!(!speller.spellcheck("Unicef"));
    assert!(!speller.spellcheck("unicef"));
}

#[test]
fn duplicate_stems_union_their_flags() {
    let aff = "\
SET UTF-8
PFX L Y 1
PFX L 0 l' .
SFX S Y 1
SFX S 0 s .
";
    let speller = speller(aff, "2\nNéréide/L\nNéréide/S\n");

    assert!(speller.spellcheck("Néréide"));
    assert!(speller.spellcheck("l'Néréide"));
    assert!(speller.spellcheck("Néréides"));
}
