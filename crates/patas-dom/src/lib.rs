//! Patas Amigas Page Model
//!
//! A headless stand-in for the live page. The engine owns all state and the
//! renderer is stateless. The model tracks the content mount region,
//! navigation links, the registration form, body classes, the mobile menu,
//! focus, and pending alerts. Fragment markup is parsed with `scraper`, and
//! only the mount region's inner content is ever read out of a fetched
//! fragment.

mod document;
mod form;
mod fragment;

pub use document::{Document, NavLink};
pub use form::{Field, FieldGroup, Form};
pub use fragment::{extract_mount, first_heading, MOUNT_SELECTOR};
