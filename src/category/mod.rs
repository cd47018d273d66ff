pub mod model;
pub mod registry;

pub use model::{Category, CATEGORIES};
pub use registry::{category_slugs, category_to_slug, slug_to_category, slugify};
