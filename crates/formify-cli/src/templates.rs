//! `formify templates`

use anyhow::Result;
use formify_core::FormTemplate;

pub fn run() -> Result<()> {
    print!("{}", listing(FormTemplate::all()));
    Ok(())
}

/// One line per template: key, icon and name, field count, description.
pub fn listing(templates: &[FormTemplate]) -> String {
    let width = templates.iter().map(|t| t.key.len()).max().unwrap_or(0);
    let mut out = String::new();
    for template in templates {
        let count = template.fields.len();
        let noun = if count == 1 { "field" } else { "fields" };
        out.push_str(&format!(
            "{:<width$}  {} {} ({} {}) - {}\n",
            template.key, template.icon, template.name, count, noun, template.description,
        ));
    }
    out
}
