//! Search form and captcha detection.

use std::collections::BTreeMap;

use log::{debug, info, warn};
use scraper::ElementRef;
use url::Url;

use super::types::{FormDescriptor, FormMethod, FormOutcome, VerificationChallenge};
use crate::config::{CAPTCHA_FIELD, CAPTCHA_MARKER, CNR_FIELD};
use crate::markup::{parse_selector_with_fallback, Document};

/// Looks for the portal's CNR search form on a page.
///
/// Uses the portal's field names (`cino` and `fcaptcha_code`).
pub fn locate(doc: &Document, base_url: &Url) -> FormOutcome {
    locate_with(doc, base_url, CNR_FIELD, CAPTCHA_FIELD)
}

/// Looks for a search form with the given search-key and token field names.
///
/// The search input, the token input and a `<form>` must all be present,
/// otherwise the result is [`FormOutcome::NotFound`]. The form's action and
/// the captcha image URL are resolved against `base_url`.
pub fn locate_with(
    doc: &Document,
    base_url: &Url,
    search_key_field: &str,
    token_field: &str,
) -> FormOutcome {
    let search_input = doc.input_named(search_key_field);
    let token_input = doc.input_named(token_field);
    let form = doc.first("form");

    let (Some(_), Some(_), Some(form)) = (search_input, token_input, form) else {
        info!(
            "Search form not found (search input: {}, token input: {}, form: {})",
            search_input.is_some(),
            token_input.is_some(),
            form.is_some()
        );
        return FormOutcome::NotFound;
    };

    info!("Found search form with captcha");

    let (named_inputs, hidden) = collect_inputs(form);
    debug!("Form has {named_inputs} named inputs, {} hidden", hidden.len());

    let descriptor = FormDescriptor {
        action: resolve_action(form, base_url),
        method: FormMethod::from_attr(form.value().attr("method")),
        hidden,
        search_key_field: search_key_field.to_string(),
        token_field: token_field.to_string(),
    };

    FormOutcome::Found {
        form: descriptor,
        challenge: VerificationChallenge {
            image_url: captcha_image_url(doc, base_url),
        },
    }
}

/// Captcha image URL: an `<img>` whose `alt` mentions captcha wins over one
/// whose `src` does.
pub fn captcha_image_url(doc: &Document, base_url: &Url) -> Option<String> {
    let by_alt = doc.find_element("img", |img| attr_mentions_captcha(img, "alt"));
    let image = by_alt.or_else(|| doc.find_element("img", |img| attr_mentions_captcha(img, "src")));

    let src = image?.value().attr("src")?;
    match base_url.join(src) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            warn!("Could not resolve captcha image '{src}' against {base_url}: {e}");
            None
        }
    }
}

fn attr_mentions_captcha(element: &ElementRef<'_>, attr: &str) -> bool {
    element
        .value()
        .attr(attr)
        .map(|value| value.to_lowercase().contains(CAPTCHA_MARKER))
        .unwrap_or(false)
}

fn resolve_action(form: ElementRef<'_>, base_url: &Url) -> Url {
    let action = form.value().attr("action").unwrap_or("");
    base_url.join(action).unwrap_or_else(|e| {
        warn!("Could not resolve form action '{action}': {e}. Submitting to {base_url}");
        base_url.clone()
    })
}

/// Counts the form's named inputs and collects its hidden ones.
///
/// Hidden inputs are kept whatever other inputs share their name; among
/// hidden inputs with the same name the last one wins.
fn collect_inputs(form: ElementRef<'_>) -> (usize, BTreeMap<String, String>) {
    let input_selector = parse_selector_with_fallback("input", "form inputs");
    let mut named_inputs = 0;
    let mut hidden = BTreeMap::new();

    for input in form.select(&input_selector) {
        let Some(name) = input.value().attr("name").filter(|n| !n.is_empty()) else {
            continue;
        };
        named_inputs += 1;

        let is_hidden = input
            .value()
            .attr("type")
            .map(|t| t.eq_ignore_ascii_case("hidden"))
            .unwrap_or(false);
        if is_hidden {
            let value = input.value().attr("value").unwrap_or("");
            hidden.insert(name.to_string(), value.to_string());
        }
    }

    (named_inputs, hidden)
}
