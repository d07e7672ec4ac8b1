use crate::shared::components::status_box::{ErrorBox, LoadingBox};
use crate::shared::page_context::bind_to_person_query;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CONTENT;
use contracts::domain::a004_generated_content::aggregate::{ContentStatus, ContentViewState};
use leptos::prelude::*;

/// Recipe generated for the person in the URL.
///
/// Fetched once per identifier; a failure stays on screen until the `id` changes.
#[component]
#[allow(non_snake_case)]
pub fn RecipeView() -> impl IntoView {
    let state = RwSignal::new(ContentViewState::new());

    bind_to_person_query(state, "recipe", |client, id| async move {
        client.fetch_generated_content(id).await
    });

    view! {
        <PageFrame page_id="a004_generated_content--content" category=PAGE_CAT_CONTENT>
            {move || state.with(|s| match s.status() {
                ContentStatus::Loading => view! { <LoadingBox /> }.into_any(),
                ContentStatus::Ready(content) => {
                    let title = format!("Recipe for person {}", content.person_id());
                    let markup = content.markup().to_string();
                    view! {
                        <div class="header">
                            <h1 class="header__title">{title}</h1>
                        </div>
                        <article class="recipe" inner_html=markup></article>
                    }
                    .into_any()
                }
                ContentStatus::Invalid(_) | ContentStatus::Failed(_) => {
                    let message = s.status().error_message().unwrap_or_default();
                    view! { <ErrorBox message=message /> }.into_any()
                }
            })}
        </PageFrame>
    }
}
