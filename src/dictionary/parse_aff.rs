/// Parser for hunspell-format .aff files
use anyhow::{anyhow, Error, Result};
use nom::branch::alt;
use nom::bytes::complete::{tag, take_till1};
use nom::character::complete::{
    char, line_ending, not_line_ending, space0, space1,
};
use nom::combinator::{cut, eof, map, opt, success, value};
use nom::error::{Error as NomError, ErrorKind, ParseError};
use nom::multi::{many0, separated_list1};
use nom::sequence::{delimited, preceded, terminated};
use nom::{Compare, Err, Finish, IResult, InputLength, Parser};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;

use crate::dictionary::affixdata::{AffixData, FlagMode};
use crate::dictionary::affixes::AffixEntry;
use crate::dictionary::casing::Locale;
use crate::dictionary::condition::AffixCondition;
use crate::dictionary::flagset::FlagSet;
use crate::dictionary::wordflags::WordFlags;

type Input<'a> = &'a str;

const BYTE_ORDER_MARK: char = '\u{FEFF}';

struct AffError {
    message: String,
}

impl AffError {
    fn new(message: &str) -> Self {
        AffError {
            message: message.to_string(),
        }
    }

    fn wrapped(message: &str) -> Err<Self> {
        Err::Error(Self::new(message))
    }

    fn from_nom(e: Err<NomError<Input>>) -> Err<Self> {
        Err::Error(Self::new(&e.to_string()))
    }
}

impl<'a> ParseError<Input<'a>> for AffError {
    fn from_error_kind(input: Input, kind: ErrorKind) -> Self {
        let message = format!("{:?}:\t{}\n", kind, input);
        AffError { message }
    }

    fn append(_input: Input, _kind: ErrorKind, other: Self) -> Self {
        other
    }
}

impl fmt::Display for AffError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

fn from_anyhow(e: Error) -> Err<AffError> {
    AffError::wrapped(&e.to_string())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum AffixKind {
    Prefix,
    Suffix,
}

#[derive(Clone)]
enum AffixLine<'a> {
    Empty,
    SetEncoding(&'a str),
    SetFlagMode(FlagMode),
    SetLang(&'a str),
    SetFlag(&'a str, &'a str),
    SetForbidWarn,
    SetCheckSharps,
    AddConversion(&'a str, Option<&'a str>),
    AddBreak(&'a str),
    Affix(AffixKind, Vec<&'a str>),
}

/// Parse a line starting with a keyword and then a value.
/// Takes the tag for the keyword, and a parser for the value.
/// Returns the result of the value parser.
fn keyword<'a, T, O, E: ParseError<Input<'a>>, F>(
    key: T,
    mut value: F,
) -> impl FnMut(Input<'a>) -> IResult<Input<'a>, O, E>
where
    F: Parser<Input<'a>, O, E>,
    Input<'a>: Compare<T>,
    T: InputLength + Copy,
{
    move |s: Input<'a>| {
        let (s, _) = tag(key).parse(s)?;
        let (s, _) = space1.parse(s)?;
        // A keyword without a parsable value is a hard failure, so that
        // alt() does not go on to misread the line as something else.
        match value.parse(s) {
            Err(Err::Error(e)) => Err(Err::Failure(e)),
            rest => rest,
        }
    }
}

fn comment(s: &str) -> IResult<&str, ()> {
    value((), preceded(char('#'), not_line_ending))(s)
}

fn ending(s: &str) -> IResult<&str, (), AffError> {
    value((), delimited(space0, opt(comment), line_ending))(s)
        .map_err(AffError::from_nom)
}

fn value_string(s: &str) -> IResult<&str, &str, AffError> {
    take_till1(|c: char| c.is_whitespace())(s)
}

const FLAG_NAMES: [&str; 6] = [
    "FORBIDDENWORD",
    "KEEPCASE",
    "NEEDAFFIX",
    "CIRCUMFIX",
    "ONLYINCOMPOUND",
    "WARN",
];

fn assign_flag(s: &str) -> IResult<&str, AffixLine, AffError> {
    let (s, key) = value_string(s)?;
    if !FLAG_NAMES.contains(&key) {
        return Err(AffError::wrapped("Keyword not a known flag"));
    }
    let (s, _) = space1(s)?;
    let (s, v) = cut(value_string)(s)?;
    Ok((s, AffixLine::SetFlag(key, v)))
}

fn set_encoding(s: &str) -> IResult<&str, AffixLine, AffError> {
    map(keyword("SET", value_string), AffixLine::SetEncoding)(s)
}

fn flag_mode(s: &str) -> IResult<&str, FlagMode, AffError> {
    alt((
        value(FlagMode::DoubleCharFlags, tag("long")),
        value(FlagMode::NumericFlags, tag("num")),
        value(FlagMode::Utf8Flags, tag("UTF-8")),
    ))(s)
}

fn set_flag_mode(s: &str) -> IResult<&str, AffixLine, AffError> {
    map(keyword("FLAG", flag_mode), AffixLine::SetFlagMode)(s)
}

fn set_lang(s: &str) -> IResult<&str, AffixLine, AffError> {
    map(keyword("LANG", value_string), AffixLine::SetLang)(s)
}

fn set_bool_option(s: &str) -> IResult<&str, AffixLine, AffError> {
    alt((
        value(AffixLine::SetForbidWarn, tag("FORBIDWARN")),
        value(AffixLine::SetCheckSharps, tag("CHECKSHARPS")),
    ))(s)
}

/// ICONV with one value is the table size line; with two values it is a
/// conversion pair.
fn add_conversion(s: &str) -> IResult<&str, AffixLine, AffError> {
    let (s, (from, to)) = keyword("ICONV", |s| {
        let (s, from) = value_string(s)?;
        let (s, to) = opt(preceded(space1, value_string))(s)?;
        Ok((s, (from, to)))
    })(s)?;
    Ok((s, AffixLine::AddConversion(from, to)))
}

fn add_break(s: &str) -> IResult<&str, AffixLine, AffError> {
    map(keyword("BREAK", value_string), AffixLine::AddBreak)(s)
}

/// PFX and SFX lines are collected field by field; header lines and rule
/// lines are told apart when the table is assembled.
fn affix(s: &str) -> IResult<&str, AffixLine, AffError> {
    let (s, kind) = alt((
        value(AffixKind::Prefix, tag("PFX")),
        value(AffixKind::Suffix, tag("SFX")),
    ))(s)?;
    let (s, _) = space1(s)?;
    let (s, fields) = separated_list1(space1, value_string)(s)?;
    Ok((s, AffixLine::Affix(kind, fields)))
}

/// Directives this checker has no use for are skipped wholesale.
fn unknown(s: &str) -> IResult<&str, AffixLine, AffError> {
    value(
        AffixLine::Empty,
        take_till1(|c: char| c == '\r' || c == '\n'),
    )(s)
}

fn line(s: &str) -> IResult<&str, AffixLine, AffError> {
    alt((
        set_encoding,
        set_flag_mode,
        set_lang,
        set_bool_option,
        assign_flag,
        add_conversion,
        add_break,
        affix,
        unknown,
        success(AffixLine::Empty),
    ))(s)
}

fn is_count(field: &str) -> bool {
    !field.is_empty() && field.chars().all(|c| c.is_ascii_digit())
}

fn affix_file(s: &str) -> IResult<&str, AffixData, AffError> {
    let (s, _) = opt(char(BYTE_ORDER_MARK)).parse(s)?; // discard BOM
    let (s, lines) = many0(terminated(line, ending))(s)?;
    let (s, _) = eof(s)?;

    let mut d = AffixData::new();
    // Cross-product markers from PFX/SFX header lines, keyed by the
    // unparsed flag field.
    let mut cross: HashMap<(AffixKind, &str), bool> = HashMap::new();
    let mut explicit_breaks = false;
    for l in lines.iter() {
        match l {
            AffixLine::Empty => (),
            AffixLine::SetEncoding(enc) => {
                if enc != &"UTF-8" {
                    return Err(AffError::wrapped(&format!(
                        "Unsupported encoding {}",
                        enc
                    )));
                }
            }
            AffixLine::SetFlagMode(fm) => d.flag_mode = *fm,
            AffixLine::SetLang(lang) => d.locale = Locale::from_lang(lang),
            AffixLine::SetFlag(f, v) => {
                let flag = Some(d.parse_one_flag(v).map_err(from_anyhow)?);
                match *f {
                    "FORBIDDENWORD" => d.forbidden = flag,
                    "KEEPCASE" => d.keepcase = flag,
                    "NEEDAFFIX" => d.need_affix = flag,
                    "CIRCUMFIX" => d.circumfix = flag,
                    "ONLYINCOMPOUND" => d.only_in_compound = flag,
                    "WARN" => d.warn = flag,
                    _ => unreachable!("flag keyword list out of sync"),
                }
            }
            AffixLine::SetForbidWarn => d.forbid_warn = true,
            AffixLine::SetCheckSharps => d.check_sharps = true,
            AffixLine::AddConversion(from, to) => {
                // The one-value form is the table size line.
                if let Some(to) = to {
                    d.input_conversion.push(from, to);
                }
            }
            AffixLine::AddBreak(v) => {
                if !explicit_breaks {
                    // The first BREAK line replaces the default table.
                    // BREAK 0 leaves it empty.
                    d.break_table.clear();
                    explicit_breaks = true;
                }
                if !is_count(v) {
                    d.break_table.add(v);
                }
            }
            AffixLine::Affix(kind, fields) => {
                // The field parser cannot tell a trailing comment from a
                // morphological field, so drop it here.
                let fields: Vec<&str> = fields
                    .iter()
                    .copied()
                    .take_while(|f| !f.starts_with('#'))
                    .collect();
                if let &[flag, cross_field, count] = &fields[..] {
                    if (cross_field == "Y" || cross_field == "N")
                        && is_count(count)
                    {
                        cross.insert((*kind, flag), cross_field == "Y");
                        continue;
                    }
                }
                if fields.len() < 3 {
                    return Err(AffError::wrapped("Truncated affix rule"));
                }
                let flag = d.parse_one_flag(fields[0]).map_err(from_anyhow)?;
                let strip = if fields[1] == "0" { "" } else { fields[1] };
                let (append, cont) =
                    fields[2].split_once('/').unwrap_or((fields[2], ""));
                let append = if append == "0" { "" } else { append };
                let condition =
                    AffixCondition::new(fields.get(3).copied().unwrap_or("."));
                let cont_flags =
                    FlagSet::new(d.parse_flags(cont).map_err(from_anyhow)?);
                let entry = AffixEntry {
                    flag,
                    cross_product: cross
                        .get(&(*kind, fields[0]))
                        .copied()
                        .unwrap_or(false),
                    strip: strip.to_string(),
                    append: append.to_string(),
                    condition,
                    cont_flags,
                    cont_special: WordFlags::empty(),
                };
                match kind {
                    AffixKind::Prefix => d.prefixes.push(entry),
                    AffixKind::Suffix => d.suffixes.push(entry),
                }
            }
        };
    }
    d.build_indexes();
    Ok((s, d))
}

pub fn parse_affix_data(text: &str) -> Result<AffixData> {
    // The line parser needs every line terminated.
    let text: Cow<str> = if text.is_empty() || text.ends_with('\n') {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(format!("{}\n", text))
    };
    match affix_file(text.as_ref()).finish() {
        Ok((_, d)) => Ok(d),
        Err(e) => Err(anyhow!(e.to_string())),
    }
}
