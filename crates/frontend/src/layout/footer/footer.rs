use crate::domain::a005_subscription::ui::form::SubscriptionForm;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer data-zone="footer" class="footer">
            <p class="footer__copyright">"© 2024 Product Magazine. All Rights Reserved."</p>
            <SubscriptionForm />
        </footer>
    }
}
