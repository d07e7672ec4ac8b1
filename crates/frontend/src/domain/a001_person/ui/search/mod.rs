use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_ENTRY;
use contracts::domain::a001_person::aggregate::{IdValidationError, PersonId};
use contracts::shared::routes::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// Message under the search box. Nothing is shown until the user types.
fn inline_hint(raw: &str, validation: &Result<PersonId, IdValidationError>) -> Option<String> {
    if raw.trim().is_empty() {
        return None;
    }
    validation.as_ref().err().map(ToString::to_string)
}

#[component]
#[allow(non_snake_case)]
pub fn PersonSearch() -> impl IntoView {
    let (raw, set_raw) = signal(String::new());
    let validation = Memo::new(move |_| raw.with(|r| PersonId::validate(r)));
    let navigate = use_navigate();

    let submit = move || match validation.get_untracked() {
        Ok(id) => {
            let href = AppRoute::PurchaseHistory.href(id);
            log::info!("Opening purchase history: {}", href);
            navigate(&href, Default::default());
        }
        Err(e) => log::debug!("Search blocked: {}", e),
    };

    view! {
        <PageFrame page_id="a001_person--entry" category=PAGE_CAT_ENTRY>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Your weekly product magazine"</h1>
                </div>
            </div>

            <form
                class="search-form"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit();
                }
            >
                <input
                    type="text"
                    inputmode="numeric"
                    class="search-form__input"
                    placeholder="Enter your person ID (1-50)"
                    prop:value=move || raw.get()
                    on:input=move |ev| set_raw.set(event_target_value(&ev))
                />
                <button
                    type="submit"
                    class="button button--primary"
                    disabled=move || validation.with(|v| v.is_err())
                >
                    {icon("search")}
                    "View purchases"
                </button>
            </form>

            {move || {
                raw.with(|r| validation.with(|v| inline_hint(r, v)))
                    .map(|hint| view! { <p class="search-form__hint">{hint}</p> })
            }}
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_hidden_for_blank_and_valid_input() {
        assert_eq!(inline_hint("", &PersonId::validate("")), None);
        assert_eq!(inline_hint("5", &PersonId::validate("5")), None);
    }

    #[test]
    fn test_hint_for_out_of_range() {
        let hint = inline_hint("51", &PersonId::validate("51")).unwrap();
        assert_eq!(hint, "Person ID must be between 1 and 50, got 51");
    }
}
