//! Status bar output.
//!
//! Output follows the BitBar/xbar text protocol: the first line is the
//! status bar title, optionally followed by `| key=value` display
//! parameters; lines after a `---` line make up the drop-down menu.

mod misconfig;
mod render;
mod template;

pub use misconfig::{MISCONFIGURED_TITLE, PLUGIN_PATH_VAR, misconfiguration_message, plugin_path};
pub use render::{Formats, RenderedService, StatusLine, TemplateKind};
pub use template::{Field, Template, TemplateError};
