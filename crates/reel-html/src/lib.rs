//! Render movie catalog views to HTML.
//!
//! Pure string building: every function takes plain data (records, facet
//! counts, a highlight id set) and returns markup. There is no document to
//! mutate and no incremental diffing – the highlight set is data, and the
//! view is produced from it in a single step, so "reset then highlight" is
//! simply a re-render.

mod render;

pub use render::{
    render_genre_options, render_page, render_table_body, render_year_options,
};
