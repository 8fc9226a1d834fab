use html_escape::{encode_double_quoted_attribute, encode_text};

use super::card::render_card;
use crate::controller::SearchState;
use crate::pagination::Pagination;

/// Render the full view: search form with loading indicator, pagination
/// bar and the card grid.
pub fn render_page(state: &SearchState) -> String {
    let pagination = Pagination::of(state);
    let mut html = String::new();

    html.push_str("<form class=\"search\">\n");
    html.push_str("  <label for=\"search-ingredients\" class=\"sr-only\">Search</label>\n");
    html.push_str(&format!(
        "  <input type=\"search\" id=\"search-ingredients\" name=\"search_ingredients\" \
         placeholder=\"Search by ingredients\" required value=\"{}\" />\n",
        encode_double_quoted_attribute(&state.query)
    ));
    html.push_str(&format!(
        "  <div role=\"status\" class=\"search__spinner\"{}><span class=\"sr-only\">Loading...</span></div>\n",
        hidden(!state.loading)
    ));
    html.push_str("</form>\n");

    html.push_str("<div class=\"pagination\">\n");
    html.push_str(&format!(
        "  <button type=\"button\" class=\"pagination__prev\"{}>&larr; Prev 20</button>\n",
        target(pagination.previous_page())
    ));
    html.push_str(&format!(
        "  <p class=\"pagination__range\">{}</p>\n",
        encode_text(&pagination.label())
    ));
    html.push_str(&format!(
        "  <button type=\"button\" class=\"pagination__next\"{}>Next 20 &rarr;</button>\n",
        target(pagination.next_page())
    ));
    html.push_str("</div>\n");

    html.push_str("<div class=\"recipe-grid\">\n");
    for recipe in &state.results {
        html.push_str(&render_card(recipe));
    }
    html.push_str("</div>\n");

    html
}

fn hidden(flag: bool) -> &'static str {
    if flag {
        " hidden"
    } else {
        ""
    }
}

/// Attributes of a pagination button: its target page, or disabled
fn target(page: Option<u32>) -> String {
    match page {
        Some(page) => format!(" data-page=\"{}\"", page),
        None => " disabled".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Recipe;

    fn recipes(count: usize) -> Vec<Recipe> {
        (0..count)
            .map(|i| Recipe {
                id: i as i64,
                title: format!("Recipe {i}"),
                cook_time: 10.0,
                prep_time: 5.0,
                ratings: String::new(),
                cuisine: String::new(),
                category: String::new(),
                author: String::new(),
                image: format!("https://example.com/{i}.jpg"),
                ingredients: vec!["egg".to_string()],
                created_at: String::new(),
                updated_at: String::new(),
            })
            .collect()
    }

    fn state(page: u32, count: usize, loading: bool) -> SearchState {
        SearchState {
            query: "egg".to_string(),
            page,
            loading,
            results: recipes(count),
        }
    }

    #[test]
    fn test_first_page_controls() {
        let html = render_page(&state(1, 20, false));
        assert!(html.contains("class=\"pagination__prev\" disabled>"));
        assert!(html.contains("class=\"pagination__next\" data-page=\"2\">"));
        assert!(html.contains("<p class=\"pagination__range\">0 - 20</p>"));
        assert!(html.contains("class=\"search__spinner\" hidden>"));
    }

    #[test]
    fn test_short_page_disables_next() {
        let html = render_page(&state(2, 7, false));
        assert!(html.contains("class=\"pagination__prev\" data-page=\"1\">"));
        assert!(html.contains("class=\"pagination__next\" disabled>"));
        assert!(html.contains("20 - 27"));
        assert_eq!(html.matches("class=\"recipe-card\"").count(), 7);
    }

    #[test]
    fn test_loading_shows_spinner_and_disables_controls() {
        let html = render_page(&state(3, 20, true));
        assert!(html.contains("class=\"search__spinner\">"));
        assert!(html.contains("class=\"pagination__prev\" disabled>"));
        assert!(html.contains("class=\"pagination__next\" disabled>"));
    }

    #[test]
    fn test_largest_page_number_disables_next() {
        let html = render_page(&state(u32::MAX, 20, false));
        assert!(html.contains("class=\"pagination__next\" disabled>"));
        assert!(html.contains(&format!(
            "class=\"pagination__prev\" data-page=\"{}\">",
            u32::MAX - 1
        )));
    }

    #[test]
    fn test_query_is_reflected_and_escaped() {
        let mut state = state(1, 0, false);
        state.query = "\"salt\" & pepper".to_string();
        let html = render_page(&state);
        assert!(html.contains("value=\"&quot;salt&quot; &amp; pepper\""));
    }

    #[test]
    fn test_cards_in_result_order() {
        let html = render_page(&state(1, 3, false));
        let first = html.find("Recipe 0").unwrap();
        let second = html.find("Recipe 1").unwrap();
        let third = html.find("Recipe 2").unwrap();
        assert!(first < second && second < third);
    }
}
