//! Built-in form templates offered by the gallery.

use crate::types::FieldSpec;

/// A field entry in a template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TemplateField {
    pub label: &'static str,
    pub kind: &'static str,
    pub required: bool,
}

/// A named starting point for a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FormTemplate {
    /// Lookup key, e.g. `login`.
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub fields: &'static [TemplateField],
}

const fn field(label: &'static str, kind: &'static str, required: bool) -> TemplateField {
    TemplateField { label, kind, required }
}

static TEMPLATES: &[FormTemplate] = &[
    FormTemplate {
        key: "blank",
        name: "Blank Form",
        icon: "⚡",
        description: "Start with a clean slate",
        fields: &[],
    },
    FormTemplate {
        key: "login",
        name: "Login Form",
        icon: "🔐",
        description: "User authentication form",
        fields: &[
            field("Email", "email", true),
            field("Password", "password", true),
        ],
    },
    FormTemplate {
        key: "registration",
        name: "Registration Form",
        icon: "👤",
        description: "New user signup form",
        fields: &[
            field("FullName", "text", true),
            field("Email", "email", true),
            field("Password", "password", true),
            field("ConfirmPassword", "password", true),
            field("DateOfBirth", "date", false),
            field("AcceptTerms", "checkbox", true),
        ],
    },
    FormTemplate {
        key: "contact",
        name: "Contact Form",
        icon: "✉️",
        description: "Get in touch form",
        fields: &[
            field("Name", "text", true),
            field("Email", "email", true),
            field("Subject", "text", true),
            field("Message", "textarea", true),
        ],
    },
    FormTemplate {
        key: "newsletter",
        name: "Newsletter Subscription",
        icon: "📫",
        description: "Email subscription form",
        fields: &[
            field("Email", "email", true),
            field("Name", "text", false),
            field("Preferences", "checkbox", false),
        ],
    },
    FormTemplate {
        key: "profile",
        name: "Profile Form",
        icon: "🎯",
        description: "User profile form",
        fields: &[
            field("Avatar", "file", false),
            field("FullName", "text", true),
            field("Bio", "textarea", false),
            field("Website", "url", false),
            field("Phone", "tel", false),
        ],
    },
];

impl FormTemplate {
    /// All templates, in gallery order.
    pub fn all() -> &'static [FormTemplate] {
        TEMPLATES
    }

    /// Look up a template by key.
    pub fn find(key: &str) -> Option<&'static FormTemplate> {
        TEMPLATES.iter().find(|t| t.key == key)
    }

    /// Template fields as field specs.
    pub fn field_specs(&self) -> Vec<FieldSpec> {
        self.fields
            .iter()
            .map(|f| FieldSpec::new(f.label, f.kind, f.required))
            .collect()
    }

    /// The template rendered in the field-description format.
    pub fn to_description(&self) -> String {
        self.field_specs()
            .iter()
            .map(FieldSpec::to_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
