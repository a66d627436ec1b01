use core::fmt::Write as _;

use heapless::String;

use crate::state::PanelState;

pub const PAGE_CAPACITY: usize = 1024;

pub type Page = String<PAGE_CAPACITY>;

/// Render the control page for the given state.
///
/// Output depends only on `state`.
pub fn render_page(state: &PanelState) -> Result<Page, core::fmt::Error> {
    let mut page = Page::new();
    // Submitting an input-less GET form appends a bare `?`, which is why the
    // routes end with one.
    write!(
        page,
        concat!(
            "<!DOCTYPE html>\n",
            "<html>\n",
            "<head>\n",
            "<title>Projector Panel</title>\n",
            "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n",
            "</head>\n",
            "<body>\n",
            "<h1>Projector Panel</h1>\n",
            "<h2>LED Control</h2>\n",
            "<form action=\"./lighton\"><input type=\"submit\" value=\"Light on\" /></form>\n",
            "<br>\n",
            "<form action=\"./lightoff\"><input type=\"submit\" value=\"Light off\" /></form>\n",
            "<p>LED state: {state}</p>\n",
            "<h2>Fetch New Value</h2>\n",
            "<form action=\"./value\"><input type=\"submit\" value=\"Fetch value\" /></form>\n",
            "<p>Fetched value: {value}</p>\n",
            "</body>\n",
            "</html>\n",
        ),
        state = state.led,
        value = state.last_value,
    )?;
    Ok(page)
}
