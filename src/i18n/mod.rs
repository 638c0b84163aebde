//! Languages and user-facing strings.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the selectable languages
//! - `language`: Validated `Language` handle used for picker selections
//! - `strings`: Labels and notification messages shown by the widget
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{Language, LanguageRegistry};
//!
//! let french = Language::from_code("fr-FR")?;
//! let pickers = LanguageRegistry::get().list();
//! ```

mod language;
mod registry;
mod strings;

pub use language::Language;
pub use registry::{LanguageEntry, LanguageRegistry};
pub use strings::{WidgetStrings, WIDGET_STRINGS};
