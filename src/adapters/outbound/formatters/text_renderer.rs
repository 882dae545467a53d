use crate::application::read_models::{ListBody, ListViewModel, NavLinkView, PageReadModel};
use crate::ports::outbound::PageRenderer;
use crate::shared::Result;
use owo_colors::OwoColorize;

const RULE_WIDTH: usize = 60;

/// TextRenderer adapter producing a plain terminal page
///
/// Layout, top to bottom: the navigation bar (active link in brackets), the
/// view heading, then the spinner line, the item blocks or the failure
/// message. ANSI colors are applied only when `colored` is set.
pub struct TextRenderer {
    colored: bool,
}

impl TextRenderer {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    fn paint(&self, text: String, style: fn(&str) -> String) -> String {
        if self.colored {
            style(&text)
        } else {
            text
        }
    }

    fn render_nav(&self, brand: &str, links: &[NavLinkView], out: &mut String) {
        let mut line = self.paint(brand.to_string(), |s| s.bold().to_string());
        for link in links {
            line.push_str("  ");
            if link.active {
                line.push_str(&self.paint(format!("[{}]", link.label), |s| {
                    s.cyan().bold().to_string()
                }));
            } else {
                line.push_str(&format!(" {} ", link.label));
            }
        }
        out.push_str(&line);
        out.push('\n');
        out.push_str(&"=".repeat(RULE_WIDTH));
        out.push('\n');
    }

    fn render_view(&self, view: &ListViewModel, out: &mut String) {
        out.push('\n');
        out.push_str(&self.paint(view.heading.clone(), |s| s.bold().underline().to_string()));
        out.push_str("\n\n");

        match &view.body {
            ListBody::Loading => {
                out.push_str(&self.paint("⠋ Loading...".to_string(), |s| s.yellow().to_string()));
                out.push('\n');
            }
            ListBody::Users { items } => {
                for user in items {
                    out.push_str(&format!(
                        "{} {}\n",
                        self.paint("●".to_string(), |s| s.green().to_string()),
                        self.paint(user.name.clone(), |s| s.bold().to_string())
                    ));
                    out.push_str(&format!("  {}\n", user.description));
                    out.push_str(&format!(
                        "  {}\n",
                        self.paint(user.image_url.clone(), |s| s.dimmed().to_string())
                    ));
                    out.push_str(&format!("  [ {} ]\n", user.contact_label));
                    out.push_str(&"-".repeat(RULE_WIDTH));
                    out.push('\n');
                }
            }
            ListBody::Posts { items } => {
                for post in items {
                    out.push_str(&format!(
                        "{} {}\n",
                        self.paint(format!("#{}", post.key), |s| s.dimmed().to_string()),
                        self.paint(post.title.clone(), |s| s.bold().to_string())
                    ));
                    for line in post.body.lines() {
                        out.push_str(&format!("  {}\n", line));
                    }
                    out.push_str(&"-".repeat(RULE_WIDTH));
                    out.push('\n');
                }
            }
            ListBody::Failed { message } => {
                out.push_str(&self.paint(format!("✗ {}", message), |s| s.red().to_string()));
                out.push('\n');
            }
        }
    }
}

impl PageRenderer for TextRenderer {
    fn render(&self, page: &PageReadModel) -> Result<String> {
        let mut out = String::new();
        self.render_nav(&page.brand, &page.nav, &mut out);
        if let Some(view) = &page.view {
            self.render_view(view, &mut out);
        }
        Ok(out)
    }
}
