// ============================================================================
// HTML sanitization
// ============================================================================

/// Clean markup produced by the recipe generator before it is injected into the page.
///
/// Rules:
/// - `<script>` / `<style>` tags are dropped together with their content
/// - all `on*` attributes and `javascript:` URIs are removed
/// - structural and formatting tags survive, with `class` / `style` / `id` / `title`
pub fn sanitize_markup(html: &str) -> String {
    ammonia::Builder::new()
        .tags(maplit::hashset![
            "div", "span", "p", "h1", "h2", "h3", "h4", "h5", "h6",
            "ul", "ol", "li", "strong", "em", "b", "i", "small", "sup", "sub",
            "table", "thead", "tbody", "tr", "td", "th",
            "br", "hr", "section", "article", "header", "footer", "a", "img",
        ])
        .generic_attributes(maplit::hashset!["class", "style", "id", "title"])
        .clean(html)
        .to_string()
}
