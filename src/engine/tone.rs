//! Hook selection by tone intensity.

use crate::config::Tone;
use crate::corpus::Template;
use crate::template::{Rendered, render_lenient};
use std::collections::HashMap;

/// Render the hook for a tone level. Deterministic given the dictionary.
pub fn select_hook(template: &Template, tone: Tone, vars: &HashMap<String, String>) -> Rendered {
    render_lenient(template.hooks.get(tone), vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::template_with_pools;

    #[test]
    fn test_each_tone_selects_its_own_pattern() {
        let template = template_with_pools(&[]);
        let vars = crate::template::vars([("audience", "coaches")]);

        assert_eq!(select_hook(&template, Tone::Mild, &vars).text, "mild hook for coaches");
        assert_eq!(
            select_hook(&template, Tone::Balanced, &vars).text,
            "balanced hook for coaches"
        );
        assert_eq!(select_hook(&template, Tone::Bold, &vars).text, "bold hook for coaches");
    }

    #[test]
    fn test_missing_variable_is_reported() {
        let template = template_with_pools(&[]);
        let rendered = select_hook(&template, Tone::Bold, &HashMap::new());
        assert_eq!(rendered.text, "bold hook for {audience}");
        assert_eq!(rendered.missing, vec!["audience"]);
    }
}
