//! Live document model

use scraper::{Html, Selector};

use crate::form::Form;
use crate::fragment::{extract_mount, first_heading};

/// An anchor inside the navigation element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub href: String,
    /// Links carrying the `no-spa` class navigate the old-fashioned way and
    /// are never intercepted.
    pub spa: bool,
}

/// The page as the engine sees it.
///
/// Only state the site's script actually touches is modeled: the mount
/// region's inner markup, nav links, the registration form, body classes,
/// menu/focus/alert state. Everything else stays in the renderer.
#[derive(Debug)]
pub struct Document {
    mount: Option<String>,
    nav_links: Vec<NavLink>,
    form: Option<Form>,
    form_feedback: Option<String>,
    body_classes: Vec<String>,
    has_theme_toggle: bool,
    has_menu_toggle: bool,
    theme_icon: Option<String>,
    menu_open: bool,
    focused_heading: Option<String>,
    pending_alert: Option<String>,
}

impl Document {
    /// Build the model from a full page document.
    pub fn parse(html: &str) -> Document {
        let doc = Html::parse_document(html);

        let nav_links = Selector::parse("nav a")
            .ok()
            .map(|sel| {
                doc.select(&sel)
                    .filter_map(|el| {
                        let v = el.value();
                        let href = v.attr("href")?.to_string();
                        let spa = !v
                            .attr("class")
                            .map(|c| c.split_whitespace().any(|cls| cls == "no-spa"))
                            .unwrap_or(false);
                        Some(NavLink { href, spa })
                    })
                    .collect()
            })
            .unwrap_or_default();

        let has_theme_toggle = has_match(&doc, "#theme-toggle");
        let has_menu_toggle = has_match(&doc, "#menu-toggle");

        let mount = extract_mount(html);
        let form = mount.as_deref().and_then(Form::from_html);

        Document {
            mount,
            nav_links,
            form,
            form_feedback: None,
            body_classes: Vec::new(),
            has_theme_toggle,
            has_menu_toggle,
            theme_icon: None,
            menu_open: false,
            focused_heading: None,
            pending_alert: None,
        }
    }

    /// A document with no mount region, for exercising the fatal-precondition
    /// path.
    pub fn without_mount() -> Document {
        Self::parse("<html><body></body></html>")
    }

    // === Mount region ===

    pub fn has_mount(&self) -> bool {
        self.mount.is_some()
    }

    pub fn mount_html(&self) -> Option<&str> {
        self.mount.as_deref()
    }

    /// Replace the mount region's inner content. The form model is rebuilt
    /// from the new subtree; stale feedback and focus are dropped.
    pub fn set_mount_html(&mut self, inner: &str) {
        self.form = Form::from_html(inner);
        self.form_feedback = None;
        self.focused_heading = None;
        self.mount = Some(inner.to_string());
    }

    /// Move focus to the first heading of the mounted content, if any.
    pub fn focus_first_heading(&mut self) {
        self.focused_heading = self.mount.as_deref().and_then(first_heading);
    }

    pub fn focused_heading(&self) -> Option<&str> {
        self.focused_heading.as_deref()
    }

    // === Navigation ===

    pub fn nav_links(&self) -> &[NavLink] {
        &self.nav_links
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    pub fn has_menu_toggle(&self) -> bool {
        self.has_menu_toggle
    }

    // === Form ===

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut Form> {
        self.form.as_mut()
    }

    /// Replace the form container's content with rendered feedback markup.
    pub fn show_form_feedback(&mut self, html: &str) {
        self.form = None;
        self.form_feedback = Some(html.to_string());
    }

    pub fn form_feedback(&self) -> Option<&str> {
        self.form_feedback.as_deref()
    }

    // === Theme presentation ===

    pub fn has_theme_toggle(&self) -> bool {
        self.has_theme_toggle
    }

    /// Swap the body's theme class; `None` clears any applied theme class.
    pub fn set_theme_class(&mut self, class: Option<&str>) {
        self.body_classes
            .retain(|c| c != "dark-mode" && c != "high-contrast-mode");
        if let Some(class) = class {
            self.body_classes.push(class.to_string());
        }
    }

    pub fn body_classes(&self) -> &[String] {
        &self.body_classes
    }

    pub fn set_theme_icon(&mut self, icon: &str) {
        self.theme_icon = Some(icon.to_string());
    }

    pub fn theme_icon(&self) -> Option<&str> {
        self.theme_icon.as_deref()
    }

    // === Alerts ===

    pub fn raise_alert(&mut self, message: &str) {
        self.pending_alert = Some(message.to_string());
    }

    /// Take the pending alert, clearing it.
    pub fn take_alert(&mut self) -> Option<String> {
        self.pending_alert.take()
    }
}

fn has_match(doc: &Html, selector: &str) -> bool {
    Selector::parse(selector)
        .map(|sel| doc.select(&sel).next().is_some())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"
        <html><body>
          <header>
            <nav>
              <a href="index.html">Início</a>
              <a href="project.html">Projeto</a>
              <a class="no-spa" href="https://example.org">Externo</a>
            </nav>
            <button id="theme-toggle">🌙</button>
            <button id="menu-toggle">☰</button>
          </header>
          <main><div class="wrapper"><h1>Patas Amigas</h1></div></main>
        </body></html>
    "#;

    #[test]
    fn test_parse_page() {
        let doc = Document::parse(PAGE);

        assert!(doc.has_mount());
        assert!(doc.mount_html().unwrap().contains("Patas Amigas"));
        assert!(doc.has_theme_toggle());
        assert!(doc.has_menu_toggle());

        let links = doc.nav_links();
        assert_eq!(links.len(), 3);
        assert!(links[0].spa);
        assert!(!links[2].spa);
    }

    #[test]
    fn test_without_mount() {
        let doc = Document::without_mount();
        assert!(!doc.has_mount());
        assert!(doc.nav_links().is_empty());
    }

    #[test]
    fn test_swap_rebuilds_form_and_clears_focus() {
        let mut doc = Document::parse(PAGE);
        assert!(doc.form().is_none());

        doc.focus_first_heading();
        assert_eq!(doc.focused_heading(), Some("Patas Amigas"));

        doc.set_mount_html(
            r#"<h2>Cadastro</h2>
               <div class="form-container"><form>
                 <div class="form-group">
                   <input class="form-input" id="name" name="name" required>
                 </div>
               </form></div>"#,
        );

        assert!(doc.form().is_some());
        assert_eq!(doc.focused_heading(), None);

        doc.focus_first_heading();
        assert_eq!(doc.focused_heading(), Some("Cadastro"));
    }

    #[test]
    fn test_theme_class_swap() {
        let mut doc = Document::parse(PAGE);

        doc.set_theme_class(Some("dark-mode"));
        assert_eq!(doc.body_classes(), ["dark-mode".to_string()]);

        doc.set_theme_class(Some("high-contrast-mode"));
        assert_eq!(doc.body_classes(), ["high-contrast-mode".to_string()]);

        doc.set_theme_class(None);
        assert!(doc.body_classes().is_empty());
    }

    #[test]
    fn test_alert_take_clears() {
        let mut doc = Document::parse(PAGE);
        doc.raise_alert("preencha os campos");
        assert_eq!(doc.take_alert().as_deref(), Some("preencha os campos"));
        assert_eq!(doc.take_alert(), None);
    }
}
