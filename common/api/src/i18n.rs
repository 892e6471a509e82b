//! The i18n module contains the translation capability the platform injects into the
//! engine for every human readable label.

use std::collections::HashMap;

/// Resolves a translation key into a human readable string.
///
/// The placeholders of the key (e.g. `%gender%`) are replaced with the entries of the
/// substitutions map. The domain selects the translation catalog.
pub trait Translator: Send + Sync {
    fn translate(
        &self,
        key: &str,
        substitutions: &HashMap<String, String>,
        domain: &str,
    ) -> String;
}

/// A [`Translator`] that returns the key itself with the placeholders replaced.
/// Used when no translation catalog is installed; the keys are plain english.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTranslator;

impl Translator for DefaultTranslator {
    fn translate(
        &self,
        key: &str,
        substitutions: &HashMap<String, String>,
        _domain: &str,
    ) -> String {
        let mut translated = key.to_owned();
        for (placeholder, value) in substitutions {
            translated = translated.replace(placeholder, value);
        }
        translated
    }
}

#[cfg(test)]
mod test {

    use super::*;
    use maplit::hashmap;

    #[test]
    fn should_return_the_key_when_there_is_nothing_to_substitute() {
        let translator = DefaultTranslator;

        let translated = translator.translate("By Customer gender", &HashMap::new(), "condition");

        assert_eq!("By Customer gender", translated);
    }

    #[test]
    fn should_replace_the_placeholders_with_the_substitutions() {
        let translator = DefaultTranslator;

        let substitutions = hashmap![
            "%gender%".to_owned() => "man".to_owned(),
        ];
        let translated = translator.translate(
            "If customer <strong>is a %gender%</strong>",
            &substitutions,
            "condition",
        );

        assert_eq!("If customer <strong>is a man</strong>", translated);
    }

    #[test]
    fn should_ignore_substitutions_without_a_placeholder() {
        let translator = DefaultTranslator;

        let substitutions = hashmap![
            "%title%".to_owned() => "2".to_owned(),
        ];
        let translated = translator.translate("By Customer gender", &substitutions, "condition");

        assert_eq!("By Customer gender", translated);
    }
}
