//! Compiled routes.
//!
//! A [`RouteSpec`] is built once at registration and never mutated. Besides
//! the parsed segments it holds two regexes derived from the same skeleton:
//!
//! - the **structural probe**, where every slot accepts the permissive class
//!   (`[^/]+` for simple and grouped slots, `.+` for wildcards); it answers
//!   "is this URL of the right shape?"
//! - the **strict validator**, where slots carrying a validator fragment use
//!   that fragment instead; its captures are the recognized values.
//!
//! Both honor the optional tail: a maximal trailing run of path segments that
//! each consist of a single parameter with a default. Each tail segment is
//! wrapped in a nested optional group, so `view/:home/:area` with both
//! optional compiles to `^/view(?:/(?P<home>..)(?:/(?P<area>..))?)?$`.

use std::collections::{BTreeSet, HashMap, HashSet};

use regex::Regex;

use super::encoding::{encode_value, matched_form, restore_reserved, unescape_path};
use super::pattern::{normalize_pattern, parse_pattern, PathSegment, Segment};
use crate::error::PatternError;
use crate::value::{ParamValue, ParameterSet};
use crate::Validators;

const SIMPLE_CLASS: &str = "[^/]+";
const WILDCARD_CLASS: &str = ".+";

/// An immutable, compiled route.
#[derive(Debug)]
pub struct RouteSpec {
    pattern: String,
    segments: Vec<PathSegment>,
    defaults: ParameterSet,
    validators: Validators,
    alias: Option<String>,
    /// Declared parameter names in pattern order
    params: Vec<String>,
    required: BTreeSet<String>,
    max_keys: usize,
    probe: Regex,
    strict: Regex,
    /// Anchored per-slot matchers used to check values before generation
    slot_checks: HashMap<String, Regex>,
    wildcards: HashSet<String>,
}

impl RouteSpec {
    /// Compile a route.
    ///
    /// # Arguments
    ///
    /// * `pattern` - Pattern text; surrounding slashes are normalized away
    /// * `defaults` - Fallback values; any parameter listed here is optional.
    ///   Keys that are not pattern parameters are *default-only* keys.
    /// * `validators` - Regex fragments constraining parameter text
    /// * `alias` - Optional name used by alias-restricted generation
    ///
    /// # Errors
    ///
    /// [`PatternError`] when the pattern is malformed or a validator fragment
    /// does not compile.
    pub fn new(
        pattern: &str,
        defaults: ParameterSet,
        validators: Validators,
        alias: Option<String>,
    ) -> Result<Self, PatternError> {
        let segments = parse_pattern(pattern)?;
        let params: Vec<String> = segments
            .iter()
            .flat_map(PathSegment::param_names)
            .map(str::to_string)
            .collect();

        let required: BTreeSet<String> = params
            .iter()
            .filter(|name| !defaults.contains_key(name))
            .cloned()
            .collect();

        let mut keys: BTreeSet<&str> = params.iter().map(String::as_str).collect();
        keys.extend(defaults.keys().map(String::as_str));
        let max_keys = keys.len();

        let tail_start = optional_tail_start(&segments, &defaults);
        let invalid = |source| PatternError::InvalidValidator {
            pattern: pattern.to_string(),
            source,
        };

        let probe = Regex::new(&build_regex(&segments, tail_start, None)).map_err(invalid)?;
        let strict =
            Regex::new(&build_regex(&segments, tail_start, Some(&validators))).map_err(invalid)?;

        let mut slot_checks = HashMap::with_capacity(params.len());
        let mut wildcards = HashSet::new();
        for part in segments.iter().flat_map(|seg| seg.parts.iter()) {
            if let Segment::Param { name, wildcard } = part {
                let class = slot_class(name, *wildcard, Some(&validators));
                let check = Regex::new(&format!("^(?:{class})$")).map_err(invalid)?;
                slot_checks.insert(name.clone(), check);
                if *wildcard {
                    wildcards.insert(name.clone());
                }
            }
        }

        Ok(Self {
            pattern: normalize_pattern(pattern),
            segments,
            defaults,
            validators,
            alias,
            params,
            required,
            max_keys,
            probe,
            strict,
            slot_checks,
            wildcards,
        })
    }

    /// Normalized pattern text, the table key.
    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    #[must_use]
    pub fn defaults(&self) -> &ParameterSet {
        &self.defaults
    }

    #[must_use]
    pub fn validators(&self) -> &Validators {
        &self.validators
    }

    /// Declared parameter names, in pattern order.
    #[must_use]
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Pattern parameters without a default.
    #[must_use]
    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    /// Number of distinct pattern and default keys.
    #[must_use]
    pub fn max_keys(&self) -> usize {
        self.max_keys
    }

    #[must_use]
    pub fn probe(&self) -> &Regex {
        &self.probe
    }

    #[must_use]
    pub fn strict(&self) -> &Regex {
        &self.strict
    }

    /// True if the structural probe accepts `path`.
    #[must_use]
    pub fn matches_shape(&self, path: &str) -> bool {
        self.probe.is_match(path)
    }

    /// Run the strict validator and merge captures onto the defaults.
    ///
    /// `path` is in matched form (see [`unescape_path`]), so validators see
    /// decoded text. A capture that is empty once surrounding slashes are
    /// trimmed never overrides a default.
    #[must_use]
    pub fn capture(&self, path: &str) -> Option<ParameterSet> {
        let caps = self.strict.captures(path)?;
        let mut values = self.defaults.clone();
        for name in &self.params {
            if let Some(m) = caps.name(name) {
                let text = m.as_str().trim_matches('/');
                if !text.is_empty() {
                    values.insert(name.as_str(), ParamValue::Text(restore_reserved(text)));
                }
            }
        }
        Some(values)
    }

    /// Restrict `supplied` to the keys this route can render.
    ///
    /// Returns `None` when the route is disqualified: a supplied key is
    /// neither a declared parameter nor a default-only key carrying its
    /// default value, a present value fails its slot check either as given or
    /// in the form recognition will see once it is rendered, the key count
    /// exceeds [`max_keys`](Self::max_keys), or a required name is missing.
    #[must_use]
    pub fn accept(&self, supplied: &ParameterSet) -> Option<ParameterSet> {
        let mut accepted = ParameterSet::new();
        for (name, value) in supplied {
            if let Some(check) = self.slot_checks.get(name) {
                if let Some(text) = value.as_text() {
                    let wildcard = self.wildcards.contains(name);
                    if !check.is_match(&text) || !check.is_match(&matched_form(&text, wildcard)) {
                        return None;
                    }
                }
            } else if !self
                .defaults
                .get(name)
                .is_some_and(|default| default.equivalent(value))
            {
                return None;
            }
            accepted.insert(name.as_str(), value.clone());
        }

        if accepted.len() > self.max_keys {
            return None;
        }
        if !self.required.iter().all(|name| accepted.contains_key(name)) {
            return None;
        }
        Some(accepted)
    }

    /// Render path text from an accepted parameter set.
    ///
    /// Each slot takes the accepted value, falling back to the default when
    /// the accepted value is missing or absent. Path segments that render to
    /// nothing are dropped with their separator, which elides a trailing run
    /// of absent optional parameters. The root renders as `/`.
    #[must_use]
    pub fn render(&self, accepted: &ParameterSet) -> String {
        let mut path = String::new();
        for seg in &self.segments {
            let mut text = String::new();
            for part in &seg.parts {
                match part {
                    Segment::Literal(literal) => text.push_str(literal),
                    Segment::Param { name, wildcard } => {
                        if let Some(value) = self.resolve(name, accepted) {
                            text.push_str(&encode_value(&value, *wildcard));
                        }
                    }
                }
            }
            if !text.is_empty() {
                path.push('/');
                path.push_str(&text);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    fn resolve(&self, name: &str, accepted: &ParameterSet) -> Option<String> {
        accepted
            .get(name)
            .and_then(ParamValue::as_text)
            .or_else(|| self.defaults.get(name).and_then(ParamValue::as_text))
    }
}

/// Index of the first segment of the optional tail; `segments.len()` when
/// there is none.
fn optional_tail_start(segments: &[PathSegment], defaults: &ParameterSet) -> usize {
    segments
        .iter()
        .rposition(|seg| !seg.sole_param().is_some_and(|name| defaults.contains_key(name)))
        .map_or(0, |last_required| last_required + 1)
}

fn slot_class(name: &str, wildcard: bool, validators: Option<&Validators>) -> String {
    match validators.and_then(|v| v.get(name)) {
        Some(fragment) => format!("(?:{fragment})"),
        None if wildcard => WILDCARD_CLASS.to_string(),
        None => SIMPLE_CLASS.to_string(),
    }
}

/// Build an anchored matcher; `validators` is `None` for the probe.
fn build_regex(
    segments: &[PathSegment],
    tail_start: usize,
    validators: Option<&Validators>,
) -> String {
    let mut pattern = String::with_capacity(segments.len() * 16 + 4);
    pattern.push('^');

    for (index, seg) in segments.iter().enumerate() {
        if index >= tail_start {
            pattern.push_str("(?:");
        }
        pattern.push('/');
        for part in &seg.parts {
            match part {
                Segment::Literal(literal) => {
                    pattern.push_str(&regex::escape(&unescape_path(literal)));
                }
                Segment::Param { name, wildcard } => {
                    pattern.push_str("(?P<");
                    pattern.push_str(name);
                    pattern.push('>');
                    pattern.push_str(&slot_class(name, *wildcard, validators));
                    pattern.push(')');
                }
            }
        }
    }

    for _ in tail_start..segments.len() {
        pattern.push_str(")?");
    }
    if tail_start == 0 {
        // Root, or a pattern made only of optional segments: `/` must match.
        pattern.push_str("/?");
    }
    pattern.push('$');
    pattern
}
