use chrono::{DateTime, Datelike, Utc};
use maud::{html, Markup, Render};

use crate::config::SiteConfig;

use super::external_link::ExternalLink;

const NBSP: &str = "\u{a0}";

const GATSBY_URL: &str = "https://www.gatsbyjs.org/";
const REACT_URL: &str = "https://reactjs.org/";
const GITHUB_URL: &str = "https://www.github.com/";
const SOURCE_URL: &str = "https://github.com/hfxiang93/my-blog";
const SOURCE_LABEL: &str = "calpa/gatsby-starter-calpa-blog";
const PROFILE_URL: &str = "https://github.com/hfxiang93";
const PROFILE_LABEL: &str = "©hfxiang93";
const THEME_CREDIT: &str = "Theme by xianghaifeng";

/// Class names applied to each node of the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterClasses {
    pub footer: &'static str,
    pub container: &'static str,
    pub row: &'static str,
    pub column: &'static str,
    pub architecture: &'static str,
    pub copyright: &'static str,
}

impl Default for FooterClasses {
    fn default() -> Self {
        Self {
            footer: "footer",
            container: "container",
            row: "row",
            column: "col-sm-12 text-center",
            architecture: "architecture",
            copyright: "copyright",
        }
    }
}

pub struct Footer {
    title: Option<String>,
    runtime_version: String,
    year: i32,
    classes: FooterClasses,
}

impl Footer {
    pub fn new(config: &SiteConfig, now: DateTime<Utc>) -> Self {
        Self::with_classes(config, now, FooterClasses::default())
    }

    pub fn with_classes(config: &SiteConfig, now: DateTime<Utc>, classes: FooterClasses) -> Self {
        Self {
            title: config.title.clone(),
            runtime_version: config.runtime_version.clone(),
            year: now.year(),
            classes,
        }
    }

    fn runtime_label(&self) -> String {
        format!("React {}", self.runtime_version)
    }
}

impl Render for Footer {
    fn render(&self) -> Markup {
        html! {
            footer class=(self.classes.footer) {
                div class=(self.classes.container) {
                    div class=(self.classes.row) {
                        div class=(self.classes.column) {
                            p class=(self.classes.architecture) {
                                "Build with" (NBSP)
                                (ExternalLink::new(GATSBY_URL, "GatsbyJS"))
                                (NBSP) "and" (NBSP)
                                (ExternalLink::new(REACT_URL, &self.runtime_label()))
                                "." (NBSP) "Hosted on" (NBSP)
                                (ExternalLink::new(GITHUB_URL, "github"))
                                br;
                                "The code is open source and available at" (NBSP)
                                (ExternalLink::new(SOURCE_URL, SOURCE_LABEL))
                            }
                            p class=(self.classes.copyright) {
                                (ExternalLink::new(PROFILE_URL, PROFILE_LABEL))
                                @if let Some(title) = &self.title {
                                    (title)
                                }
                                (self.year)
                                (THEME_CREDIT)
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config(title: Option<&str>) -> SiteConfig {
        SiteConfig {
            title: title.map(str::to_string),
            runtime_version: "16.14.0".to_string(),
        }
    }

    fn in_year(year: i32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, 6, 15, 12, 0, 0).unwrap()
    }

    fn section<'a>(html: &'a str, open: &str) -> &'a str {
        let start = html.find(open).unwrap() + open.len();
        let end = start + html[start..].find("</p>").unwrap();
        &html[start..end]
    }

    /// Visible text of a fragment with every `<a>...</a>` removed.
    fn text_without_links(fragment: &str) -> String {
        let mut out = String::new();
        let mut rest = fragment;
        while let Some(start) = rest.find("<a ") {
            out.push_str(&rest[..start]);
            let end = rest[start..].find("</a>").unwrap();
            rest = &rest[start + end + "</a>".len()..];
        }
        out.push_str(rest);
        out
    }

    fn hrefs(fragment: &str) -> Vec<&str> {
        fragment
            .split("<a href=\"")
            .skip(1)
            .map(|s| &s[..s.find('"').unwrap()])
            .collect()
    }

    fn copyright(footer: &Footer) -> String {
        let html = footer.render().into_string();
        section(&html, r#"<p class="copyright">"#).to_string()
    }

    #[test]
    fn copyright_text_joins_title_year_and_credit() {
        let footer = Footer::new(&config(Some("MyBlog ")), in_year(2024));

        assert_eq!(
            text_without_links(&copyright(&footer)),
            "MyBlog 2024Theme by xianghaifeng"
        );
    }

    #[test]
    fn missing_title_leaves_just_the_year() {
        let footer = Footer::new(&config(None), in_year(2024));

        assert_eq!(
            text_without_links(&copyright(&footer)),
            "2024Theme by xianghaifeng"
        );
    }

    #[test]
    fn empty_title_is_rendered_as_is() {
        let footer = Footer::new(&config(Some("")), in_year(1999));

        assert_eq!(
            text_without_links(&copyright(&footer)),
            "1999Theme by xianghaifeng"
        );
    }

    #[test]
    fn copyright_links_to_profile() {
        let footer = Footer::new(&config(Some("MyBlog ")), in_year(2024));
        let copyright = copyright(&footer);

        assert_eq!(hrefs(&copyright), vec!["https://github.com/hfxiang93"]);
        assert!(copyright.starts_with("<a "));
        assert!(copyright.contains(">©hfxiang93</a>MyBlog 2024"));
    }

    #[test]
    fn attribution_has_four_links_in_order() {
        let html = Footer::new(&config(Some("MyBlog ")), in_year(2024))
            .render()
            .into_string();
        let architecture = section(&html, r#"<p class="architecture">"#);

        assert_eq!(
            hrefs(architecture),
            vec![
                "https://www.gatsbyjs.org/",
                "https://reactjs.org/",
                "https://www.github.com/",
                "https://github.com/hfxiang93/my-blog",
            ]
        );
        assert!(architecture.contains(">React 16.14.0</a>"));
        assert!(architecture.contains(">calpa/gatsby-starter-calpa-blog</a>"));
    }

    #[test]
    fn applies_class_name_contract() {
        let html = Footer::new(&config(None), in_year(2024))
            .render()
            .into_string();

        assert!(html.starts_with(
            r#"<footer class="footer"><div class="container"><div class="row"><div class="col-sm-12 text-center"><p class="architecture">"#
        ));
        assert!(html.contains(r#"<p class="copyright">"#));
        assert!(html.ends_with("</p></div></div></div></footer>"));
    }

    #[test]
    fn injected_classes_replace_defaults() {
        let classes = FooterClasses {
            footer: "site-footer",
            copyright: "legal",
            ..FooterClasses::default()
        };
        let html = Footer::with_classes(&config(None), in_year(2024), classes)
            .render()
            .into_string();

        assert!(html.starts_with(r#"<footer class="site-footer">"#));
        assert!(html.contains(r#"<p class="legal">"#));
        assert!(!html.contains(r#"class="copyright""#));
    }

    #[test]
    fn rendering_is_idempotent() {
        let config = config(Some("MyBlog "));
        let now = in_year(2024);

        assert_eq!(
            Footer::new(&config, now).render().into_string(),
            Footer::new(&config, now).render().into_string()
        );
    }

    #[test]
    fn advancing_a_year_only_changes_the_year() {
        let config = config(Some("MyBlog "));
        let this_year = Footer::new(&config, in_year(2024)).render().into_string();
        let next_year = Footer::new(&config, in_year(2025)).render().into_string();

        assert_eq!(this_year.replace("2024", "2025"), next_year);
        assert_eq!(this_year.len(), next_year.len());
    }

    #[test]
    fn title_is_escaped() {
        let footer = Footer::new(&config(Some("<Blog>")), in_year(2024));

        assert_eq!(
            text_without_links(&copyright(&footer)),
            "&lt;Blog&gt;2024Theme by xianghaifeng"
        );
    }
}
