//! Rendering layer for the terminal list view.

mod list;

#[allow(unused_imports)]
pub use list::{
    entry_tooltip,
    family_color,
    format_number,
    format_period_label,
    render_error,
    render_refresh_hint,
    render_usage_list,
};
