use crate::core::{Venue, VenueLink};

pub const CONTAINER_ID: &str = "bikermeets";

pub fn venue_links(venues: &[Venue]) -> Vec<VenueLink> {
    venues.iter().map(VenueLink::from).collect()
}

/// 產生插入頁面的 HTML 清單
pub fn render_venue_list(links: &[VenueLink]) -> String {
    let mut html = format!("<div id=\"{}\"><ul>", CONTAINER_ID);
    for link in links {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&link.url),
            escape_html(&link.name)
        ));
    }
    html.push_str("</ul></div>");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
