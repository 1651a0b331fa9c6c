//! Application coordinator
//!
//! Control flow for a navigation: click → bound `Navigate` concern → content
//! fetch and mount swap → full rebind → history push → focus move. Within one
//! navigation the swap strictly precedes the rebind, which strictly precedes
//! the history update and focus move. Concurrent loads are not guarded; the
//! last response to resolve wins.

use parking_lot::{Mutex, RwLock};
use std::sync::Arc;

use patas_dom::{extract_mount, Document};
use patas_events::{EventKind, EventRegistry, Rebinder, Target};
use patas_forms::{load_error, success_feedback, MaskKind, VALIDATION_ALERT};
use patas_nav::{FragmentFetcher, History, HttpFetcher, NavigationError, RouteTable};
use patas_storage::{LocalStore, RegistrationRecord, RegistrationStore};
use patas_theme::ThemeController;
use url::Url;

use crate::config::Config;
use crate::Result;

/// Named handler concerns. Bindings carry these values instead of closures,
/// so a binding from one pass is indistinguishable from the same binding in
/// the next pass and disposal never depends on function identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Concern {
    /// Intercept a nav link click and swap content
    Navigate,
    /// Validate, persist and render feedback for the registration form
    SubmitForm,
    /// Reformat a masked field from its raw value
    MaskInput(MaskKind),
    ToggleTheme,
    ToggleMenu,
}

/// Main engine instance. All page state flows through here.
pub struct App {
    document: Arc<RwLock<Document>>,
    store: LocalStore,
    registrations: RegistrationStore,
    theme: ThemeController,
    routes: RouteTable,
    history: Arc<RwLock<History>>,
    registry: Arc<RwLock<EventRegistry<Concern>>>,
    rebinder: Arc<Mutex<Rebinder>>,
    fetcher: Arc<dyn FragmentFetcher>,
}

impl App {
    /// Initialize the engine from configuration: open the local store and
    /// resolve fragments over HTTP.
    pub fn new(config: Config) -> Result<App> {
        if let Some(parent) = config.database_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let store = LocalStore::open(&config.database_path)?;
        let base = Url::parse(&config.fragment_base)
            .map_err(|e| NavigationError::InvalidUrl(e.to_string()))?;
        let fetcher: Arc<dyn FragmentFetcher> = Arc::new(HttpFetcher::new(base)?);

        Self::with_parts(store, fetcher)
    }

    /// Assemble the engine from an already-open store and a fetcher. Tests
    /// use this with an in-memory store and a scripted fetcher.
    pub fn with_parts(store: LocalStore, fetcher: Arc<dyn FragmentFetcher>) -> Result<App> {
        let theme = ThemeController::load(store.clone())?;

        Ok(App {
            document: Arc::new(RwLock::new(Document::without_mount())),
            registrations: RegistrationStore::new(store.clone()),
            store,
            theme,
            routes: RouteTable::site_routes(),
            history: Arc::new(RwLock::new(History::new())),
            registry: Arc::new(RwLock::new(EventRegistry::new())),
            rebinder: Arc::new(Mutex::new(Rebinder::new())),
            fetcher,
        })
    }

    /// Mount the initial page and arm the handlers; the DOMContentLoaded
    /// analogue.
    pub fn mount(&self, page_html: &str) {
        *self.document.write() = Document::parse(page_html);
        self.bind_events();

        tracing::info!("Page mounted");
    }

    // === Content fetcher/swapper ===

    /// Swap the mount region's content to the fragment behind `path`. Never
    /// returns an error: every failure is logged and rendered as an inline
    /// error message in place of content.
    pub async fn load_content(&self, path: &str) {
        let key = RouteTable::normalize(path).to_string();
        let fragment = self.routes.resolve(path);

        if !self.document.read().has_mount() {
            tracing::error!("Content mount region not found");
            return;
        }

        match self.fetch_and_extract(&fragment).await {
            Ok(inner) => {
                self.document.write().set_mount_html(&inner);
                self.bind_events();
                self.history.write().push(&key);
                self.document.write().focus_first_heading();

                tracing::info!(route = %key, fragment = %fragment, "Content swapped");
            }
            Err(e) => {
                tracing::error!(error = %e, fragment = %fragment, "Content load failed");
                self.document.write().set_mount_html(&load_error(&fragment));
            }
        }
    }

    async fn fetch_and_extract(&self, fragment: &str) -> patas_nav::Result<String> {
        let resp = self.fetcher.fetch(fragment).await?;

        if !resp.is_success() {
            return Err(NavigationError::FailedStatus {
                resource: fragment.to_string(),
                status: resp.status,
            });
        }

        extract_mount(&resp.body)
            .ok_or_else(|| NavigationError::MissingContent(fragment.to_string()))
    }

    // === Event rebinder ===

    /// Re-arm every known handler on the current document. Idempotent: the
    /// previous pass's bindings are disposed first, so N calls leave exactly
    /// one binding per concern.
    pub fn bind_events(&self) {
        let mut bindings: Vec<(Target, EventKind, Concern)> = Vec::new();

        {
            let doc = self.document.read();

            for link in doc.nav_links().iter().filter(|l| l.spa) {
                bindings.push((
                    Target::NavLink(link.href.clone()),
                    EventKind::Click,
                    Concern::Navigate,
                ));
            }

            if let Some(form) = doc.form() {
                bindings.push((Target::Form, EventKind::Submit, Concern::SubmitForm));

                for field in form.groups().iter().filter_map(|g| g.field.as_ref()) {
                    if let Some(kind) = MaskKind::for_field(&field.id) {
                        bindings.push((
                            Target::Field(field.id.clone()),
                            EventKind::Input,
                            Concern::MaskInput(kind),
                        ));
                    }
                }
            }

            if doc.has_theme_toggle() {
                bindings.push((Target::ThemeToggle, EventKind::Click, Concern::ToggleTheme));
            }
            if doc.has_menu_toggle() {
                bindings.push((Target::MenuToggle, EventKind::Click, Concern::ToggleMenu));
            }
        }

        self.rebinder
            .lock()
            .rebind(&mut self.registry.write(), bindings);

        // A swap must never leave the toggle icon or body class stale.
        self.sync_theme();
    }

    /// Deliver an event to a target, running each bound concern once.
    pub async fn fire(&self, target: Target, event: EventKind) {
        let concerns = self.registry.read().dispatch(&target, event);

        for concern in concerns {
            self.run_concern(&target, concern).await;
        }
    }

    async fn run_concern(&self, target: &Target, concern: Concern) {
        match concern {
            Concern::Navigate => {
                if let Target::NavLink(href) = target {
                    self.document.write().close_menu();
                    self.load_content(href).await;
                }
            }
            Concern::SubmitForm => self.submit_form(),
            Concern::MaskInput(kind) => self.apply_mask(kind),
            Concern::ToggleTheme => self.toggle_theme(),
            Concern::ToggleMenu => self.document.write().toggle_menu(),
        }
    }

    // === Form submission ===

    /// Validate the mounted form; on success persist the collected record and
    /// render the success feedback, otherwise mark offending groups and raise
    /// the blocking alert.
    pub fn submit_form(&self) {
        let report = {
            let mut doc = self.document.write();
            let Some(form) = doc.form_mut() else {
                return;
            };
            patas_forms::validate(form)
        };

        if !report.valid {
            tracing::warn!(fields = ?report.errored_ids, "Form validation failed");
            self.document.write().raise_alert(VALIDATION_ALERT);
            return;
        }

        let record: RegistrationRecord = {
            let doc = self.document.read();
            match doc.form() {
                Some(form) => form.entries().into_iter().collect(),
                None => return,
            }
        };

        tracing::info!("Form submitted");

        if let Err(e) = self.registrations.append(record) {
            tracing::error!(error = %e, "Failed to persist registration");
        }

        self.document
            .write()
            .show_form_feedback(&success_feedback(&report.submitted_name));
    }

    fn apply_mask(&self, kind: MaskKind) {
        let mut doc = self.document.write();
        if let Some(field) = doc.form_mut().and_then(|f| f.field_mut(kind.field_id())) {
            field.value = kind.apply(&field.value);
        }
    }

    // === Theme ===

    fn toggle_theme(&self) {
        if let Err(e) = self.theme.advance() {
            tracing::error!(error = %e, "Failed to persist theme preference");
        }
        self.sync_theme();
    }

    /// Drive body class and toggle icon from the theme value.
    fn sync_theme(&self) {
        let state = self.theme.current();
        let mut doc = self.document.write();
        doc.set_theme_class(state.body_class());
        doc.set_theme_icon(state.toggle_icon());
    }

    // === History ===

    /// Back/forward navigation: re-run the fetcher on the new current path.
    pub async fn go_back(&self) {
        let path = self.history.write().back().map(str::to_string);
        if let Some(path) = path {
            self.load_content(&path).await;
        }
    }

    /// Popstate analogue: reload whatever route the history cursor points at.
    pub async fn pop_state(&self) {
        let path = self.history.read().current().map(str::to_string);
        if let Some(path) = path {
            self.load_content(&path).await;
        }
    }

    // === Accessors ===

    pub fn document(&self) -> Arc<RwLock<Document>> {
        Arc::clone(&self.document)
    }

    pub fn store(&self) -> &LocalStore {
        &self.store
    }

    pub fn registrations(&self) -> &RegistrationStore {
        &self.registrations
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn current_route(&self) -> Option<String> {
        self.history.read().current().map(str::to_string)
    }

    pub fn history_len(&self) -> usize {
        self.history.read().len()
    }

    pub fn binding_count(&self) -> usize {
        self.registry.read().len()
    }
}
