use paper_ui_common::config::use_config;
use yew::prelude::*;

fn apply_language(locale: &str) {
    log::info!("Apply document language: {locale}");
    if let Err(err) = gloo_utils::document_element().set_attribute("lang", locale) {
        log::warn!("Failed to set document language: {err:?}");
    }
}

/// Applies the configured locale to the `lang` attribute of the document.
#[function_component(DocumentLanguage)]
pub fn document_language() -> Html {
    let config = use_config();

    use_effect_with(config.global.locale(), |locale| apply_language(locale));

    html!()
}
