mod card;
mod page;

pub use card::render_card;
pub use page::render_page;
