use maud::{html, Markup, Render};

/// An outbound link. Opens in a new tab and never leaks the opener.
pub struct ExternalLink<'a> {
    href: &'a str,
    title: &'a str,
}

impl<'a> ExternalLink<'a> {
    pub fn new(href: &'a str, title: &'a str) -> Self {
        Self { href, title }
    }
}

impl Render for ExternalLink<'_> {
    fn render(&self) -> Markup {
        html! {
          a href=(self.href) title=(self.title) target="_blank" rel="external nofollow noopener noreferrer" {
            (self.title)
          }
        }
    }
}
