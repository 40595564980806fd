/// Affix conditions are rudimentary patterns (supporting `[]` groups,
/// `[^]` negated groups and `.` as wildcard). They are matched against
/// the start of the candidate stem for prefix rules and against its end
/// for suffix rules, to determine whether the rule applies.

#[derive(Clone, Debug)]
enum CondAtom {
    Any,
    Literal(char),
    Class(String),
    NegatedClass(String),
}

impl CondAtom {
    fn matches(&self, c: char) -> bool {
        match self {
            CondAtom::Any => true,
            CondAtom::Literal(l) => *l == c,
            CondAtom::Class(members) => members.contains(c),
            CondAtom::NegatedClass(members) => !members.contains(c),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AffixCondition {
    atoms: Vec<CondAtom>,
}

impl AffixCondition {
    pub fn new(pattern: &str) -> Self {
        enum State {
            Plain,
            ClassStart,
            InClass,
            InNegatedClass,
        }
        let mut atoms = Vec::new();
        let mut state = State::Plain;
        let mut class_start = 0;
        for (i, c) in pattern.char_indices() {
            match state {
                State::Plain => {
                    if c == '[' {
                        state = State::ClassStart;
                    } else if c == '.' {
                        atoms.push(CondAtom::Any);
                    } else {
                        atoms.push(CondAtom::Literal(c));
                    }
                }
                State::ClassStart => {
                    if c == '^' {
                        state = State::InNegatedClass;
                        class_start = i + 1;
                    } else {
                        state = State::InClass;
                        class_start = i;
                    }
                }
                State::InClass => {
                    if c == ']' {
                        atoms.push(CondAtom::Class(
                            pattern[class_start..i].to_string(),
                        ));
                        state = State::Plain;
                    }
                }
                State::InNegatedClass => {
                    if c == ']' {
                        atoms.push(CondAtom::NegatedClass(
                            pattern[class_start..i].to_string(),
                        ));
                        state = State::Plain;
                    }
                }
            }
        }
        if !matches!(state, State::Plain) {
            // Unterminated group. Replace with a condition that can
            // never match, so the rule is effectively disabled.
            atoms = vec![CondAtom::Class(String::new())];
        }
        AffixCondition { atoms }
    }

    /// Match the condition against the beginning of `stem`.
    pub fn matches_start(&self, stem: &str) -> bool {
        let mut pos = 0;
        if self.atoms.is_empty() {
            return true;
        }
        for c in stem.chars() {
            if !self.atoms[pos].matches(c) {
                return false;
            }
            pos += 1;
            if pos == self.atoms.len() {
                return true;
            }
        }
        // The stem ran out before the condition did.
        false
    }

    /// Match the condition against the end of `stem`.
    pub fn matches_end(&self, stem: &str) -> bool {
        if self.atoms.is_empty() {
            return true;
        }
        let mut pos = self.atoms.len();
        for c in stem.chars().rev() {
            pos -= 1;
            if !self.atoms[pos].matches(c) {
                return false;
            }
            if pos == 0 {
                return true;
            }
        }
        false
    }
}
