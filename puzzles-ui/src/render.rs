//! HTML rendering with minijinja.
//!
//! Templates are embedded at compile time. Their names end in `.html`, so
//! minijinja HTML-escapes every interpolated value.

use anyhow::{Context, Result};
use minijinja::Environment;
use puzzles::core::types::Day;
use serde::Serialize;

const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
const DAY1_TEMPLATE: &str = include_str!("../templates/day1.html");
const DAY3_TEMPLATE: &str = include_str!("../templates/day3.html");
const DAY4_TEMPLATE: &str = include_str!("../templates/day4.html");

/// Template engine wrapper around minijinja.
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    pub fn new() -> Result<Self> {
        let mut env = Environment::new();
        for (name, source) in [
            ("base.html", BASE_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("day1.html", DAY1_TEMPLATE),
            ("day3.html", DAY3_TEMPLATE),
            ("day4.html", DAY4_TEMPLATE),
        ] {
            env.add_template(name, source)
                .with_context(|| format!("parse template {}", name))?;
        }
        Ok(Self { env })
    }

    pub fn render_index<T: Serialize>(&self, page: &T) -> Result<String> {
        self.render("index.html", page)
    }

    /// Render `day`'s page from its view model.
    pub fn render_day<T: Serialize>(&self, day: Day, page: &T) -> Result<String> {
        self.render(&format!("{}.html", day.slug()), page)
    }

    fn render<T: Serialize>(&self, name: &str, page: &T) -> Result<String> {
        let template = self.env.get_template(name)?;
        template
            .render(page)
            .with_context(|| format!("render {}", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view::{ViewConfig, day1_page, day3_page, day4_page, index_page};

    fn renderer() -> PageRenderer {
        PageRenderer::new().expect("templates")
    }

    #[test]
    fn day1_shows_groups_and_toggles() {
        let page = day1_page("3\n4\n\n10\n20\n30", ViewConfig::default());
        let html = renderer().render_day(Day::One, &page).expect("render");
        assert!(html.contains("DAY 1"));
        assert!(html.contains("Elf 1"));
        assert!(html.contains("Elf 2"));
        assert!(html.contains(">30<"));
        assert!(html.contains("Do sums"));
        assert!(html.contains("Filter"));
    }

    #[test]
    fn day1_forms_keep_the_other_toggle() {
        let view = ViewConfig {
            sums: false,
            filter: true,
        };
        let page = day1_page("3\n4", view);
        let html = renderer().render_day(Day::One, &page).expect("render");
        // Both forms carry filter=true; only the sums form adds sums=true.
        assert_eq!(html.matches(r#"name="filter" value="true""#).count(), 2);
        assert_eq!(html.matches(r#"name="sums" value="true""#).count(), 1);
    }

    #[test]
    fn day3_escapes_line_text() {
        let page = day3_page("<b>&</b>");
        let html = renderer().render_day(Day::Three, &page).expect("render");
        assert!(html.contains("&lt;b&gt;&amp;"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn day4_repeats_strip_per_row() {
        let page = day4_page("2-4,6-8\n3-3,5-5\n").expect("page");
        let html = renderer().render_day(Day::Four, &page).expect("render");
        assert_eq!(html.matches(r#"class="cell">7<"#).count(), 2);
        assert!(!html.contains(r#"class="cell">8<"#));
    }

    #[test]
    fn oversized_strip_fails_to_render() {
        let page = day4_page("0-4000000000,1-2\n").expect("page");
        assert!(renderer().render_day(Day::Four, &page).is_err());
    }

    #[test]
    fn index_links_days() {
        let html = renderer().render_index(&index_page()).expect("render");
        assert!(html.contains(r#"href="/day1""#));
        assert!(html.contains(r#"href="/day4""#));
    }
}
