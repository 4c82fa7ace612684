//! Validation-rule synthesis.
//!
//! Each field yields zero or more rules, in this order:
//!
//! 1. a presence check when the field is required;
//! 2. at most one format check chosen by the field kind.
//!
//! Rules are not short-circuited. Every rule runs, and a failing rule
//! overwrites whatever message an earlier rule left for the same field, so
//! the **last** failing rule wins. A required email field holding `abc`
//! therefore reports `Invalid email address`, not the presence message.
//! Switching to first-failure-wins would change generated behavior.
//!
//! Format checks only look at non-empty values.

use formify_core::{FieldKind, FieldSpec};
use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// Minimum length enforced on password fields.
pub const PASSWORD_MIN_LENGTH: usize = 8;

// Native counterparts of the emitted JavaScript patterns. Classes are spelled
// out where Rust and JS disagree: `/i` without the `u` flag folds ASCII only,
// JS `.` also stops at `\r`, U+2028 and U+2029, and JS `\s` has U+FEFF but not
// U+0085.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("email pattern is valid")
});

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https?://[A-Za-z0-9_\-]+(\.[A-Za-z0-9_\-]+)+[/#?]?[^\n\r\u{2028}\u{2029}]*$")
        .expect("url pattern is valid")
});

const JS_SPACE: &str =
    r"\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}";

static TEL_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(
        r"^[+]?[(]?[0-9]{{3}}[)]?[-{JS_SPACE}.]?[0-9]{{3}}[-{JS_SPACE}.]?[0-9]{{4,6}}$"
    );
    Regex::new(&pattern).expect("tel pattern is valid")
});

const EMAIL_JS: &str = r"/^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$/i";
const URL_JS: &str = r"/^https?:\/\/[\w\-]+(\.[\w\-]+)+[/#?]?.*$/";
const TEL_JS: &str = r"/^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$/";

/// A kind-specific format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatRule {
    /// `local@domain.tld`, case-insensitive.
    Email,
    /// `http://` or `https://` followed by a dotted host.
    Url,
    /// Optional `+`, optional parenthesized area code, digit groups
    /// separated by space, dot or dash, 4 to 6 trailing digits.
    Tel,
    /// Minimum number of UTF-16 code units.
    MinLength(usize),
}

impl FormatRule {
    /// The format check for a field kind, if it has one.
    pub fn for_kind(kind: &FieldKind) -> Option<Self> {
        match kind {
            FieldKind::Email => Some(Self::Email),
            FieldKind::Url => Some(Self::Url),
            FieldKind::Tel => Some(Self::Tel),
            FieldKind::Password => Some(Self::MinLength(PASSWORD_MIN_LENGTH)),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Email => "Invalid email address".to_string(),
            Self::Url => "Invalid URL format".to_string(),
            Self::Tel => "Invalid phone number format".to_string(),
            Self::MinLength(n) => format!("Password must be at least {n} characters"),
        }
    }

    /// JavaScript condition that holds when a non-empty `value` fails the check.
    pub fn js_failure(&self, value: &str) -> String {
        match self {
            Self::Email => format!("!{EMAIL_JS}.test({value})"),
            Self::Url => format!("!{URL_JS}.test({value})"),
            Self::Tel => format!("!{TEL_JS}.test({value})"),
            Self::MinLength(n) => format!("{value}.length < {n}"),
        }
    }

    /// Whether a non-empty value passes this check.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Self::Email => EMAIL_RE.is_match(value),
            Self::Url => URL_RE.is_match(value),
            Self::Tel => TEL_RE.is_match(value),
            Self::MinLength(n) => value.encode_utf16().count() >= *n,
        }
    }
}

/// What a rule checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum Check {
    /// Fails when the value is empty.
    Presence,
    /// Fails when the value is non-empty and malformed.
    Format { rule: FormatRule },
}

/// One synthesized validation statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRule {
    /// State key of the field the rule guards.
    pub key: String,
    pub check: Check,
    /// Message written to the field's error slot when the rule fails.
    pub message: String,
}

impl ValidationRule {
    /// Whether the rule fails for a value.
    pub fn fails(&self, value: &str) -> bool {
        match self.check {
            Check::Presence => value.is_empty(),
            Check::Format { rule } => !value.is_empty() && !rule.accepts(value),
        }
    }
}

/// The ordered rule list for a form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationPlan {
    pub rules: Vec<ValidationRule>,
}

impl ValidationPlan {
    /// Synthesize rules for fields, in field order.
    pub fn synthesize(fields: &[FieldSpec]) -> Self {
        let mut rules = Vec::new();
        for field in fields {
            rules.extend(rules_for(field));
        }
        Self { rules }
    }

    /// Rules guarding one state key, in execution order.
    pub fn rules_for_key<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a ValidationRule> {
        self.rules.iter().filter(move |r| r.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Run the plan against form values the way the generated component does.
    ///
    /// Missing values read as empty strings. Every key in `keys` gets an error
    /// slot, initially empty.
    pub fn evaluate<'a>(
        &self,
        keys: impl IntoIterator<Item = &'a str>,
        values: &IndexMap<String, String>,
    ) -> ValidationOutcome {
        let mut errors: IndexMap<String, String> =
            keys.into_iter().map(|k| (k.to_string(), String::new())).collect();

        for rule in &self.rules {
            let value = values.get(&rule.key).map(String::as_str).unwrap_or("");
            if rule.fails(value) {
                errors.insert(rule.key.clone(), rule.message.clone());
            }
        }

        ValidationOutcome { errors }
    }
}

/// Error slots after a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationOutcome {
    pub errors: IndexMap<String, String>,
}

impl ValidationOutcome {
    /// Valid iff every error slot is empty.
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(String::is_empty)
    }

    pub fn error(&self, key: &str) -> Option<&str> {
        self.errors
            .get(key)
            .map(String::as_str)
            .filter(|m| !m.is_empty())
    }
}

fn rules_for(field: &FieldSpec) -> Vec<ValidationRule> {
    let key = field.machine_name();
    let mut rules = Vec::with_capacity(2);

    if field.is_required() {
        rules.push(ValidationRule {
            key: key.clone(),
            check: Check::Presence,
            message: format!("{} is required", field.label()),
        });
    }

    if let Some(rule) = FormatRule::for_kind(field.kind()) {
        rules.push(ValidationRule {
            key,
            check: Check::Format { rule },
            message: rule.message(),
        });
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_required_text_field_gets_presence_only() {
        let fields = [FieldSpec::required("Name", "text")];
        let plan = ValidationPlan::synthesize(&fields);
        assert_eq!(plan.rules.len(), 1);
        assert_eq!(plan.rules[0].check, Check::Presence);

        let outcome = plan.evaluate(["name"], &values(&[("name", "")]));
        assert_eq!(outcome.error("name"), Some("Name is required"));
        assert_eq!(outcome.errors.values().filter(|m| !m.is_empty()).count(), 1);
        assert!(!outcome.is_valid());
    }

    #[test]
    fn test_email_format_overwrites_presence() {
        let fields = [FieldSpec::required("Email", "email")];
        let plan = ValidationPlan::synthesize(&fields);
        let kinds: Vec<_> = plan.rules.iter().map(|r| r.check).collect();
        assert_eq!(
            kinds,
            [Check::Presence, Check::Format { rule: FormatRule::Email }]
        );

        let outcome = plan.evaluate(["email"], &values(&[("email", "not-an-email")]));
        assert_eq!(outcome.error("email"), Some("Invalid email address"));

        let outcome = plan.evaluate(["email"], &values(&[("email", "")]));
        assert_eq!(outcome.error("email"), Some("Email is required"));

        let outcome = plan.evaluate(["email"], &values(&[("email", "a.b@example.org")]));
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_optional_fields_skip_format_check_when_empty() {
        let fields = [
            FieldSpec::optional("Website", "url"),
            FieldSpec::optional("Phone", "tel"),
        ];
        let plan = ValidationPlan::synthesize(&fields);
        assert_eq!(plan.rules.len(), 2);
        let outcome = plan.evaluate(["website", "phone"], &IndexMap::new());
        assert!(outcome.is_valid());
    }

    #[test]
    fn test_textarea_and_checkbox_have_no_format_rule() {
        assert_eq!(FormatRule::for_kind(&FieldKind::Textarea), None);
        assert_eq!(FormatRule::for_kind(&FieldKind::Checkbox), None);
        assert_eq!(FormatRule::for_kind(&FieldKind::Other("zip".into())), None);
        let plan = ValidationPlan::synthesize(&[FieldSpec::optional("Bio", "textarea")]);
        assert!(plan.is_empty());
    }

    #[test]
    fn test_password_min_length() {
        let rule = FormatRule::for_kind(&FieldKind::Password).unwrap();
        assert_eq!(rule, FormatRule::MinLength(8));
        assert_eq!(rule.message(), "Password must be at least 8 characters");
        assert!(!rule.accepts("short"));
        assert!(rule.accepts("longenough"));
        assert!(rule.accepts("12345678"));
    }

    #[test]
    fn test_url_pattern() {
        assert!(FormatRule::Url.accepts("https://example.com"));
        assert!(FormatRule::Url.accepts("http://a.b/path?q=1"));
        assert!(!FormatRule::Url.accepts("example.com"));
        assert!(!FormatRule::Url.accepts("ftp://example.com"));
        assert!(!FormatRule::Url.accepts("https://localhost"));
    }

    #[test]
    fn test_tel_pattern() {
        assert!(FormatRule::Tel.accepts("555-123-4567"));
        assert!(FormatRule::Tel.accepts("+(555) 123.456789"));
        assert!(FormatRule::Tel.accepts("5551234567"));
        assert!(!FormatRule::Tel.accepts("555-123-456"));
        assert!(!FormatRule::Tel.accepts("phone"));
    }

    #[test]
    fn test_email_pattern_is_case_insensitive() {
        assert!(FormatRule::Email.accepts("USER@EXAMPLE.COM"));
        assert!(!FormatRule::Email.accepts("user@example"));
    }

    #[test]
    fn test_native_patterns_agree_with_javascript() {
        // Kelvin sign: folds to `k` only under Unicode case folding.
        assert!(!FormatRule::Email.accepts("\u{212A}@example.com"));
        assert!(!FormatRule::Email.accepts("user@example.\u{212A}z"));
        // JS `.` does not match line terminators.
        assert!(!FormatRule::Url.accepts("https://a.b/x\ry"));
        assert!(!FormatRule::Url.accepts("https://a.b/x\u{2028}y"));
        assert!(FormatRule::Url.accepts("https://a.b/x y"));
        // JS `\s` includes U+FEFF and excludes U+0085.
        assert!(FormatRule::Tel.accepts("555\u{FEFF}123 4567"));
        assert!(!FormatRule::Tel.accepts("555\u{85}123-4567"));
    }

    #[test]
    fn test_js_failure_conditions() {
        assert_eq!(
            FormatRule::Email.js_failure("formData.email"),
            r"!/^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$/i.test(formData.email)"
        );
        assert_eq!(
            FormatRule::MinLength(8).js_failure("formData.password"),
            "formData.password.length < 8"
        );
        assert!(FormatRule::Tel.js_failure("v").ends_with(".test(v)"));
    }

    #[test]
    fn test_rules_follow_field_order() {
        let fields = [
            FieldSpec::required("Email", "email"),
            FieldSpec::required("Password", "password"),
        ];
        let plan = ValidationPlan::synthesize(&fields);
        let keys: Vec<_> = plan.rules.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, ["email", "email", "password", "password"]);
        assert_eq!(plan.rules_for_key("password").count(), 2);
    }
}
