use crate::datamodel::TableStyle;

pub const SHOW_TABLE: &str = "Show Table";
pub const HIDE_TABLE: &str = "Hide Table";

/// Next table style and button label after a toggle button event.
///
/// Before the first click (`n_clicks` unset) the style is returned as is.
pub fn toggle_table(n_clicks: Option<u64>, current: &TableStyle) -> (TableStyle, &'static str) {
    if n_clicks.is_none() {
        return (current.clone(), SHOW_TABLE);
    }
    if current.is_hidden() {
        (TableStyle::visible(), HIDE_TABLE)
    } else {
        (TableStyle::hidden(), SHOW_TABLE)
    }
}
