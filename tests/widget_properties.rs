//! Property-based tests for the widget controller

mod common;

use async_trait::async_trait;
use proptest::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use text_translator_widget::i18n::{Language, LanguageRegistry};
use text_translator_widget::notification::Severity;
use text_translator_widget::translation::{
    TranslationError, TranslationRequest, TranslationResult, Translator,
};
use text_translator_widget::widget::{Side, WidgetError};

/// Echoes the source text and counts calls
#[derive(Default)]
struct CountingTranslator {
    calls: AtomicUsize,
}

#[async_trait]
impl Translator for CountingTranslator {
    async fn translate(
        &self,
        request: &TranslationRequest,
    ) -> Result<TranslationResult, TranslationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(TranslationResult {
            translated_text: request.source_text.clone(),
        })
    }
}

fn any_language() -> impl Strategy<Value = Language> {
    let count = LanguageRegistry::get().list().len();
    (0..count).prop_map(|i| {
        Language::from_code(LanguageRegistry::get().list()[i].code).expect("registry code")
    })
}

proptest! {
    #[test]
    fn prop_exchange_is_self_inverse(
        input in ".*",
        output in ".*",
        source in any_language(),
        target in any_language(),
    ) {
        let translator = Arc::new(CountingTranslator::default());
        let mut w = common::widget(translator.clone());
        w.controller.select_language(Side::Source, source);
        w.controller.select_language(Side::Target, target);
        w.controller.set_input(output.clone());
        // Put `output` into the output buffer via one exchange, then set the input
        w.controller.exchange();
        w.controller.set_input(input);
        let before = w.controller.state().clone();

        w.controller.exchange();
        w.controller.exchange();

        prop_assert_eq!(w.controller.state(), &before);
        prop_assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn prop_blank_input_never_translates(input in "[ \t\r\n\u{feff}]{0,16}") {
        let translator = Arc::new(CountingTranslator::default());
        let mut w = common::widget(translator.clone());
        w.controller.set_input(input);

        let result = tokio_test::block_on(w.controller.submit());

        prop_assert!(matches!(result, Err(WidgetError::EmptyInput)));
        prop_assert_eq!(translator.calls.load(Ordering::SeqCst), 0);
        prop_assert_eq!(w.notifier.count(Severity::Warning), 1);
        prop_assert_eq!(w.notifier.total(), 1);
    }

    #[test]
    fn prop_copy_writes_only_the_chosen_side(
        input in ".*",
        output in ".*",
        side in prop_oneof![Just(Side::Source), Just(Side::Target)],
    ) {
        let mut w = common::widget(Arc::new(CountingTranslator::default()));
        w.controller.set_input(output.clone());
        w.controller.exchange();
        w.controller.set_input(input.clone());

        w.controller.copy(side);

        let expected = match side {
            Side::Source => input,
            Side::Target => output,
        };
        prop_assert_eq!(w.clipboard.writes.lock().unwrap().clone(), vec![expected]);
        prop_assert_eq!(w.notifier.count(Severity::Success), 1);
    }

    #[test]
    fn prop_successful_submit_writes_result_verbatim(input in "[a-zA-Z0-9].{0,32}") {
        let translator = Arc::new(CountingTranslator::default());
        let mut w = common::widget(translator.clone());
        w.controller.set_input(input.clone());

        tokio_test::block_on(w.controller.submit()).expect("Should translate");

        prop_assert_eq!(&w.controller.state().output, input.trim());
        prop_assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
        prop_assert_eq!(w.notifier.total(), 0);
    }
}
