//! Time-format token translation.
//!
//! A compact `%`-token template (e.g. `%Y-%m-%d %T`) is translated twice
//! from a single substitution table: once into a loose regex that locates
//! the timestamp inside arbitrary line text, and once into a chrono
//! strftime layout that parses the captured substring. Keeping both
//! fragments in one table guarantees the two derived patterns always
//! describe the same structure.

/// One row of the substitution table: token, regex fragment, layout fragment.
///
/// The regex fragment must accept every string the layout fragment can
/// parse, so that a capture located by the match pattern never fails
/// layout parsing on shape alone.
struct Token {
    token: &'static str,
    regex: &'static str,
    layout: &'static str,
}

/// Substitution table, tried in order at each template position.
///
/// `%F` expands to a composite layout fragment; replacements are emitted
/// verbatim and never re-scanned, so the `%Y`/`%m`/`%d` inside it are
/// already final. `%C` follows the original tool's reading as a two-digit
/// year rather than a century. `%S` accepts an optional fraction on both
/// sides (`%.f` parses a dot-fraction or nothing).
const TOKENS: &[Token] = &[
    Token { token: "%Z", regex: r"[A-Z][A-Z][A-Z][A-Z]?", layout: "%Z" },
    Token { token: "%z", regex: r"[+-]\d\d\d\d", layout: "%z" },
    Token { token: "%b", regex: r"[A-Z][a-z][a-z]", layout: "%b" },
    Token { token: "%T", regex: r"\d\d:\d\d:\d\d", layout: "%H:%M:%S" },
    Token { token: "%C", regex: r"\d\d", layout: "%y" },
    Token { token: "%F", regex: r"\d\d\d\d-\d\d-\d\d", layout: "%Y-%m-%d" },
    Token { token: "%H", regex: r"\d\d", layout: "%H" },
    Token { token: "%M", regex: r"\d\d", layout: "%M" },
    Token { token: "%S", regex: r"\d\d(?:\.\d*)?", layout: "%S%.f" },
    Token { token: "%m", regex: r"\d\d", layout: "%m" },
    Token { token: "%d", regex: r"\d\d", layout: "%d" },
    Token { token: "%Y", regex: r"\d\d\d\d", layout: "%Y" },
];

/// Which half of the table a translation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Loose regex fragments for locating a timestamp in a line.
    MatchPattern,
    /// Exact chrono strftime fragments for parsing the capture.
    Layout,
}

/// Translates a token template into a derived pattern.
///
/// Single left-to-right pass: at each position the table is tried in
/// order; on a hit the replacement is appended verbatim and the scan
/// resumes after the token. Replacements are never re-scanned, so a
/// token appearing inside a replacement stays literal. Unrecognized
/// `%x` sequences and all other characters pass through untouched.
/// This function never fails and has no state, so translating the same
/// template twice yields identical output.
pub fn translate(template: &str, target: Target) -> String {
    let mut out = String::with_capacity(template.len() * 2);
    let mut rest = template;

    'outer: while !rest.is_empty() {
        for tok in TOKENS {
            if let Some(tail) = rest.strip_prefix(tok.token) {
                out.push_str(match target {
                    Target::MatchPattern => tok.regex,
                    Target::Layout => tok.layout,
                });
                rest = tail;
                continue 'outer;
            }
        }
        // Not a token at this position; copy one char.
        let c = rest.chars().next().unwrap();
        out.push(c);
        rest = &rest[c.len_utf8()..];
    }

    out
}

/// A resolved time-format specification: the raw template (when one was
/// given) plus the derived match pattern and parse layout.
///
/// Built once at startup and immutable afterwards.
#[derive(Debug, Clone)]
pub struct FormatSpec {
    /// The raw `%`-token template, if the spec came from one.
    pub template: Option<String>,
    /// Loose regex locating the timestamp substring within a line.
    pub match_pattern: String,
    /// chrono strftime layout parsing the captured substring.
    pub layout: String,
}

impl FormatSpec {
    /// Derive both patterns from a single template.
    ///
    /// The match pattern wraps the whole translated template in a capture
    /// group so the matcher can cut the timestamp out of surrounding text.
    pub fn from_template(template: &str) -> Self {
        let match_pattern = format!("({})", translate(template, Target::MatchPattern));
        let layout = translate(template, Target::Layout);
        Self {
            template: Some(template.to_string()),
            match_pattern,
            layout,
        }
    }

    /// Build a spec from explicit pattern halves, falling back to the
    /// template-derived half for whichever is not given.
    pub fn resolve(
        template: Option<&str>,
        match_pattern: Option<&str>,
        layout: Option<&str>,
    ) -> Self {
        let derived = template.map(FormatSpec::from_template);
        Self {
            template: template.map(str::to_string),
            match_pattern: match_pattern
                .map(str::to_string)
                .or_else(|| derived.as_ref().map(|d| d.match_pattern.clone()))
                .unwrap_or_default(),
            layout: layout
                .map(str::to_string)
                .or_else(|| derived.map(|d| d.layout))
                .unwrap_or_default(),
        }
    }
}
