/// The input conversion table (ICONV). Entries are `(pattern, replacement)`
/// string pairs applied to the word before lookup, scanning left to right
/// and preferring the longest pattern at each position. A `^` prefix or `$`
/// suffix on the pattern anchors it to the start or end of the word.

#[derive(Clone, Debug, Default)]
struct Conversion {
    anchor_begin: bool,
    anchor_end: bool,
    from: String,
    to: String,
}

impl Conversion {
    fn matches(&self, rest: &str, at_start: bool) -> bool {
        if self.anchor_begin && !at_start {
            false
        } else if self.anchor_end {
            rest == self.from
        } else {
            rest.starts_with(&self.from)
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Replacements {
    conversions: Vec<Conversion>,
}

impl Replacements {
    pub fn push(&mut self, from: &str, to: &str) {
        let mut conv = Conversion::default();
        let mut from = from;
        if let Some(stripped) = from.strip_prefix('^') {
            from = stripped;
            conv.anchor_begin = true;
        }
        if let Some(stripped) = from.strip_suffix('$') {
            from = stripped;
            conv.anchor_end = true;
        }
        conv.from = from.to_string();
        conv.to = to.to_string();
        self.conversions.push(conv);
    }

    fn longest_match(&self, rest: &str, at_start: bool) -> Option<&Conversion> {
        let mut longest: Option<&Conversion> = None;
        let mut longest_len = 0;
        for conv in self.conversions.iter() {
            if conv.from.len() > longest_len && conv.matches(rest, at_start) {
                longest_len = conv.from.len();
                longest = Some(conv);
            }
        }
        longest
    }

    pub fn conv(&self, word: &str) -> String {
        let mut output = String::with_capacity(word.len());
        let mut skip_to = 0;
        for (i, c) in word.char_indices() {
            if i < skip_to {
                continue;
            }
            if let Some(conv) = self.longest_match(&word[i..], i == 0) {
                output += &conv.to;
                skip_to = i + conv.from.len();
            } else {
                output.push(c);
            }
        }
        output
    }
}
