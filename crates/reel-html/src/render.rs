//! Markup construction for the table body, the facet option controls, and
//! the full host page.

use reel_catalog::{FacetCount, MovieRecord};

/// Escape text for interpolation into HTML content or attribute values.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
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

/// Render the table body: one row per record, in catalog order.
///
/// Each row is tagged with the record's id via `data-id`, which keeps row
/// identity stable across re-renders. Rows whose id appears in
/// `highlighted` carry the `highlight` class; all others carry none.
pub fn render_table_body(records: &[MovieRecord], highlighted: &[String]) -> String {
    let mut out = String::new();
    for record in records {
        let class = if highlighted.iter().any(|id| *id == record.id) {
            " class=\"highlight\""
        } else {
            ""
        };
        out.push_str(&format!(
            "<tr data-id=\"{}\"{}><td><img src=\"{}\" alt=\"{}\"></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            escape(&record.id),
            class,
            escape(&record.image),
            escape(&record.title),
            escape(&record.title),
            escape(&record.genre),
            escape(&record.year),
        ));
    }
    out
}

/// Render the single-choice year controls, one radio per facet pair,
/// labeled `value (count)`.
pub fn render_year_options(facets: &[FacetCount]) -> String {
    let mut out = String::new();
    for (index, facet) in facets.iter().enumerate() {
        let value = escape(&facet.value);
        out.push_str(&format!(
            "<div class=\"form-check\">\n  <input class=\"form-check-input\" type=\"radio\" name=\"year\" id=\"year{index}\" value=\"{value}\">\n  <label class=\"form-check-label\" for=\"year{index}\">{value} ({count})</label>\n</div>\n",
            count = facet.count,
        ));
    }
    out
}

/// Render the multi-choice genre controls, one checkbox per facet pair,
/// labeled `value (count)`.
pub fn render_genre_options(facets: &[FacetCount]) -> String {
    let mut out = String::new();
    for (index, facet) in facets.iter().enumerate() {
        let value = escape(&facet.value);
        out.push_str(&format!(
            "<div class=\"form-check\">\n  <input class=\"form-check-input genre\" type=\"checkbox\" id=\"genre{index}\" value=\"{value}\">\n  <label class=\"form-check-label\" for=\"genre{index}\">{value} ({count})</label>\n</div>\n",
            count = facet.count,
        ));
    }
    out
}

/// Render the complete host page: search form, year radio group, genre
/// checkbox group, and the movie table with the given highlight applied.
pub fn render_page(
    records: &[MovieRecord],
    year_facets: &[FacetCount],
    genre_facets: &[FacetCount],
    highlighted: &[String],
) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n<title>Movies</title>\n");
    out.push_str("<style>tr.highlight { background: #fff3cd; }</style>\n");
    out.push_str("</head>\n<body>\n");

    out.push_str("<form id=\"searchForm\">\n");
    out.push_str("  <input type=\"text\" id=\"searchInput\" name=\"search\" placeholder=\"Search title\">\n");
    out.push_str("  <button type=\"submit\">Search</button>\n");
    out.push_str("</form>\n");

    out.push_str("<fieldset id=\"yearFilter\">\n<legend>Year</legend>\n");
    out.push_str(&render_year_options(year_facets));
    out.push_str("<button type=\"button\" id=\"yearSubmitter\">Filter by year</button>\n");
    out.push_str("</fieldset>\n");

    out.push_str("<fieldset id=\"genreFilter\">\n<legend>Genre</legend>\n");
    out.push_str(&render_genre_options(genre_facets));
    out.push_str("<button type=\"button\" id=\"genreSubmitter\">Filter by genre</button>\n");
    out.push_str("</fieldset>\n");

    out.push_str("<table id=\"movies-table\">\n");
    out.push_str("<thead><tr><th>Image</th><th>Title</th><th>Genre</th><th>Year</th></tr></thead>\n");
    out.push_str("<tbody>\n");
    out.push_str(&render_table_body(records, highlighted));
    out.push_str("</tbody>\n</table>\n");

    out.push_str("</body>\n</html>\n");
    out
}
