/// Weekly catalog email body (Romanian, as sent to customers)
pub fn render_catalog_email(catalog_link: &str) -> String {
    let href = escape_html(catalog_link);
    format!(
        r#"<div style="font-family: Arial, sans-serif; line-height: 1.5;">
  <h2>Buna Ziua</h2>
  <p>Aceasta este catalogul dumneavoastra personalizat, pentru saptamana aceasta.</p>
  <p>Veti primi cate un astfel de catalog in fiecare saptamana!</p>
  <p>Vizualizati catalogul: <a href="{href}">{href}</a></p>
</div>"#
    )
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
