use crate::domain::a005_subscription::api::{outcome_message, send_subscription};
use crate::shared::icons::icon;
use crate::shared::page_context::{use_catalog_config, use_person_query};
use contracts::domain::a005_subscription::aggregate::{prepare_subscription, rejection_message};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// How long a status line stays under the form
const STATUS_TTL_MS: u32 = 6_000;

/// Email subscription for the weekly catalog of the person in the URL.
///
/// The email input is never cleared, so a failed attempt can be resubmitted as is.
#[component]
#[allow(non_snake_case)]
pub fn SubscriptionForm() -> impl IntoView {
    let config = use_catalog_config();
    let raw_id = use_person_query();

    let (email, set_email) = signal(String::new());
    let (sending, set_sending) = signal(false);
    let status = RwSignal::new(None::<String>);
    // bumped on every message so an old timer never clears a newer one
    let status_seq = StoredValue::new(0u64);

    let show_status = move |message: &str| {
        let Some(seq) = status_seq.try_update_value(|n| {
            *n += 1;
            *n
        }) else {
            return;
        };
        status.set(Some(message.to_string()));
        spawn_local(async move {
            TimeoutFuture::new(STATUS_TTL_MS).await;
            // the form may be gone by now
            if status_seq.try_get_value() == Some(seq) {
                status.try_set(None);
            }
        });
    };

    let submit = move || {
        let prepared = prepare_subscription(
            &email.get_untracked(),
            raw_id.get_untracked().as_deref(),
            &config.catalog_base,
        );
        let request = match prepared {
            Ok(request) => request,
            Err(e) => {
                log::debug!("Subscription rejected client-side: {}", e);
                show_status(rejection_message(&e));
                return;
            }
        };

        let endpoint = config.send_endpoint.clone();
        set_sending.set(true);
        spawn_local(async move {
            log::info!("Sending catalog link {}", request.catalog_link);
            let outcome = send_subscription(&endpoint, &request).await;
            if let Err(e) = &outcome {
                log::error!("Subscription failed: {}", e);
            }
            show_status(outcome_message(&outcome));
            set_sending.set(false);
        });
    };

    view! {
        <form
            class="subscribe-form"
            on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }
        >
            <input
                type="email"
                class="subscribe-form__input"
                placeholder="Enter your email"
                required=true
                prop:value=move || email.get()
                on:input=move |ev| set_email.set(event_target_value(&ev))
            />
            <button
                type="submit"
                class="button button--primary"
                disabled=move || sending.get()
            >
                {icon("mail")}
                "Subscribe"
            </button>
        </form>
        {move || status.get().map(|message| view! {
            <p class="subscribe-form__status">{message}</p>
        })}
    }
}
