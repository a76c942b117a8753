pub mod intent;
pub mod models;
pub mod templates;

pub use intent::{classify_and_respond, classify_category, normalize_query};
pub use models::*;
pub use templates::ResponseTemplate;
