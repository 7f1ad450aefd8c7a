//! Standalone HTML page around a preview.

use crate::sanitize::SafeHtml;

/// Title used when the document has no heading.
pub const DEFAULT_TITLE: &str = "Markdown Previewer";

/// Wrap `preview` in a complete HTML document.
///
/// The title is escaped; the body is inserted as-is, which is only sound
/// because it is already a [`SafeHtml`].
pub fn render_page(title: Option<&str>, preview: &SafeHtml) -> String {
    let title = escape_title(title.unwrap_or(DEFAULT_TITLE));
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         </head>\n\
         <body>\n\
         <main id=\"preview\">\n\
         {preview}\
         </main>\n\
         </body>\n\
         </html>\n"
    )
}

fn escape_title(title: &str) -> String {
    let mut escaped: Vec<u8> = Vec::with_capacity(title.len());
    if let Err(err) = comrak::html::escape(&mut escaped, title.as_bytes()) {
        tracing::warn!(%err, "title escaping stopped early");
    }
    String::from_utf8_lossy(&escaped).into_owned()
}
