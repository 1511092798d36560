//! Display ports: where controllers put text for the user to see.
//!
//! Every method takes `&self`: the browser adapter implements these over
//! reactive signals, which are written through shared handles.

use std::rc::Rc;

use geomon_domain::settings::{SettingsConfig, SettingsInput};
use geomon_domain::snapshot::Field;

use crate::notice::Notice;

/// The fixed display targets of the realtime status page.
pub trait ReadoutSink {
    /// Replace the text of one target.
    fn show(&self, field: Field, text: String);
}

/// A single block of text (uptime line, log viewer, …).
pub trait TextSink {
    /// Replace the displayed text.
    fn set_text(&self, text: String);
}

/// The message area of the settings page.
pub trait NoticeSink {
    /// Render `notice`, replacing whatever was shown.
    fn show_notice(&self, notice: &Notice);
}

/// The settings form, addressed by field name.
pub trait SettingsForm {
    /// Fill every input from `config`.
    fn populate(&self, config: &SettingsConfig);

    /// Current raw text of every input.
    fn read(&self) -> SettingsInput;
}

/// Blocking browser dialogs.
pub trait Prompt {
    /// Ask the user to confirm `message`; `true` when they accept.
    fn confirm(&self, message: &str) -> bool;

    /// Tell the user `message`.
    fn alert(&self, message: &str);
}

impl<T: ReadoutSink + ?Sized> ReadoutSink for Rc<T> {
    fn show(&self, field: Field, text: String) {
        (**self).show(field, text);
    }
}

impl<T: TextSink + ?Sized> TextSink for Rc<T> {
    fn set_text(&self, text: String) {
        (**self).set_text(text);
    }
}

impl<T: NoticeSink + ?Sized> NoticeSink for Rc<T> {
    fn show_notice(&self, notice: &Notice) {
        (**self).show_notice(notice);
    }
}

impl<T: SettingsForm + ?Sized> SettingsForm for Rc<T> {
    fn populate(&self, config: &SettingsConfig) {
        (**self).populate(config);
    }

    fn read(&self) -> SettingsInput {
        (**self).read()
    }
}

impl<T: Prompt + ?Sized> Prompt for Rc<T> {
    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message);
    }
}
