//! Server-side HTML rendering for list and about pages.

use std::fmt::Write;

use crate::domain::Item;
use crate::error::Result;
use crate::port::outbound::view::{View, ViewRenderer};

/// Stylesheet served at `/css/styles.css`.
pub const STYLESHEET: &str = include_str!("../../../../public/css/styles.css");

/// Renders pages as complete HTML documents with a shared header and footer.
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    footer: String,
}

impl HtmlRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            footer: "Copyright todolist".to_string(),
        }
    }

    fn write_header(&self, out: &mut String, title: &str) -> Result<()> {
        write!(
            out,
            concat!(
                "<!DOCTYPE html>\n",
                "<html lang=\"en\">\n",
                "<head>\n",
                "  <meta charset=\"UTF-8\">\n",
                "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
                "  <title>{}</title>\n",
                "  <link rel=\"stylesheet\" href=\"/css/styles.css\">\n",
                "</head>\n",
                "<body>\n"
            ),
            escape(title)
        )?;
        Ok(())
    }

    fn write_footer(&self, out: &mut String) -> Result<()> {
        write!(
            out,
            "  <footer>{}</footer>\n</body>\n</html>\n",
            escape(&self.footer)
        )?;
        Ok(())
    }

    fn list_body(out: &mut String, title: &str, items: &[Item]) -> Result<()> {
        let title = escape(title);
        write!(
            out,
            "  <div class=\"box\" id=\"heading\">\n    <h1>{title}</h1>\n  </div>\n  <div class=\"box\">\n"
        )?;

        for item in items {
            write!(
                out,
                concat!(
                    "    <form action=\"/delete\" method=\"post\">\n",
                    "      <div class=\"item\">\n",
                    "        <input type=\"checkbox\" name=\"checkbox\" value=\"{id}\" onChange=\"this.form.submit()\">\n",
                    "        <p>{name}</p>\n",
                    "      </div>\n",
                    "      <input type=\"hidden\" name=\"listName\" value=\"{title}\">\n",
                    "    </form>\n"
                ),
                id = escape(item.id.as_str()),
                name = escape(&item.name),
                title = title,
            )?;
        }

        write!(
            out,
            concat!(
                "    <form class=\"item\" action=\"/\" method=\"post\">\n",
                "      <input type=\"text\" name=\"newItem\" placeholder=\"New Item\" autocomplete=\"off\">\n",
                "      <button type=\"submit\" name=\"list\" value=\"{title}\">+</button>\n",
                "    </form>\n",
                "  </div>\n"
            ),
            title = title,
        )?;
        Ok(())
    }

    fn about_body(out: &mut String) {
        out.push_str(concat!(
            "  <div class=\"box\" id=\"heading\">\n",
            "    <h1>About</h1>\n",
            "  </div>\n",
            "  <div class=\"box\">\n",
            "    <p>A small todo list. Today is the home list; visit any other path ",
            "to start a new list under that name.</p>\n",
            "  </div>\n"
        ));
    }
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewRenderer for HtmlRenderer {
    fn render(&self, view: View<'_>) -> Result<String> {
        let mut out = String::new();
        match view {
            View::List { title, items } => {
                self.write_header(&mut out, title)?;
                Self::list_body(&mut out, title, items)?;
            }
            View::About => {
                self.write_header(&mut out, "About")?;
                Self::about_body(&mut out);
            }
        }
        self.write_footer(&mut out)?;
        Ok(out)
    }
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
