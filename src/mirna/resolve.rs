use std::sync::LazyLock;

use regex::Regex;

use crate::mirna::CanonicalSet;

static INFIX_COPY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-[1-9]-").expect("static regex"));

/// Which candidate of the ladder produced the emitted name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchRule {
    Exact,
    Suffix5p,
    SuffixA5p,
    SuffixA,
    Dot1,
    Dot2,
    InfixCollapse,
    Fallback,
}

impl MatchRule {
    pub const ALL: [MatchRule; 8] = [
        MatchRule::Exact,
        MatchRule::Suffix5p,
        MatchRule::SuffixA5p,
        MatchRule::SuffixA,
        MatchRule::Dot1,
        MatchRule::Dot2,
        MatchRule::InfixCollapse,
        MatchRule::Fallback,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MatchRule::Exact => "exact",
            MatchRule::Suffix5p => "suffix_5p",
            MatchRule::SuffixA5p => "suffix_a_5p",
            MatchRule::SuffixA => "suffix_a",
            MatchRule::Dot1 => "dot1",
            MatchRule::Dot2 => "dot2",
            MatchRule::InfixCollapse => "infix_collapse",
            MatchRule::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub name: String,
    pub rule: MatchRule,
}

struct Candidate {
    rule: MatchRule,
    lookup: String,
    emit: String,
}

fn candidates(name: &str) -> [Candidate; 7] {
    let same = |rule: MatchRule, lookup: String| Candidate {
        rule,
        emit: lookup.clone(),
        lookup,
    };
    [
        same(MatchRule::Exact, name.to_string()),
        same(MatchRule::Suffix5p, format!("{name}-5p")),
        same(MatchRule::SuffixA5p, format!("{name}a-5p")),
        same(MatchRule::SuffixA, format!("{name}a")),
        // Looked up with "-5p", emitted with "5p".
        Candidate {
            rule: MatchRule::Dot1,
            lookup: name.replace(".1", "-5p"),
            emit: name.replace(".1", "5p"),
        },
        Candidate {
            rule: MatchRule::Dot2,
            lookup: name.replace(".2", "-5p"),
            emit: name.replace(".2", "5p"),
        },
        Candidate {
            rule: MatchRule::InfixCollapse,
            lookup: INFIX_COPY.replace_all(name, "-").into_owned(),
            emit: name.to_string(),
        },
    ]
}

/// Resolves `name` against `set`, first match wins. Falls back to `name`.
pub fn resolve_name(name: &str, set: &CanonicalSet) -> Resolved {
    for candidate in candidates(name) {
        if set.contains(&candidate.lookup) {
            return Resolved {
                name: candidate.emit,
                rule: candidate.rule,
            };
        }
    }
    Resolved {
        name: name.to_string(),
        rule: MatchRule::Fallback,
    }
}
