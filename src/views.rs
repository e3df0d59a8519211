use axum::response::IntoResponse;
use footer::Footer;
use maud::{html, Markup, Render, DOCTYPE};

mod external_link;
pub mod footer;

pub struct PageContent(Markup);

impl Render for PageContent {
    fn render(&self) -> Markup {
        self.0.render()
    }
}

pub struct Page {
    pub title: String,
    pub content: PageContent,
    pub footer: Footer,
}

impl Page {
    pub fn new(title: impl Into<String>, content: Markup, footer: Footer) -> Self {
        Self {
            title: title.into(),
            content: PageContent(content),
            footer,
        }
    }
}

impl Render for Page {
    fn render(&self) -> Markup {
        html! {
          (DOCTYPE)
          html {
            head {
              meta charset="utf-8";
              title { (self.title) }
            }
            body {
              main {
                (self.content.render())
              }
              (self.footer.render())
            }
          }
        }
    }
}

impl IntoResponse for Page {
    fn into_response(self) -> axum::response::Response {
        self.render().into_response()
    }
}
