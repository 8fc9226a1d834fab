use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::model::Recipe;

/// Render a recipe as an HTML card: image, title, then one line per
/// ingredient in order.
pub fn render_card(recipe: &Recipe) -> String {
    let mut html = String::from("<div class=\"recipe-card\">\n");

    html.push_str(&format!(
        "  <div><img class=\"recipe-card__image\" src=\"{}\" alt=\"{}\" /></div>\n",
        encode_double_quoted_attribute(&recipe.image),
        encode_double_quoted_attribute(&recipe.title),
    ));
    html.push_str("  <div class=\"recipe-card__body\">\n");
    html.push_str(&format!(
        "    <p class=\"recipe-card__title\">{}</p>\n",
        encode_text(&recipe.title)
    ));
    for ingredient in &recipe.ingredients {
        html.push_str(&format!(
            "    <p class=\"recipe-card__ingredient\">{}</p>\n",
            encode_text(ingredient)
        ));
    }
    html.push_str("  </div>\n</div>\n");

    html
}
