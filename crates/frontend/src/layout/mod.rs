pub mod footer;
pub mod header;

use footer::Footer;
use header::Header;
use leptos::prelude::*;

/// Page chrome shared by every route.
///
/// ```text
/// +--------------------------+
/// |          Header          |
/// +--------------------------+
/// |      routed content      |
/// +--------------------------+
/// |  Footer (subscription)   |
/// +--------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-layout__content">{children()}</main>
            <Footer />
        </div>
    }
}
