use serde::Serialize;

/// All user-facing strings of the widget.
///
/// The page renders placeholders and labels; notification messages are sent
/// by the controller.
#[derive(Debug, Clone, Serialize)]
pub struct WidgetStrings {
    // ==================== Labels ====================
    /// Widget heading
    pub title: &'static str,

    /// Submit control label while idle
    pub submit_idle: &'static str,

    /// Submit control label while a translation is in flight
    pub submit_loading: &'static str,

    /// Placeholder for the editable input area
    pub input_placeholder: &'static str,

    /// Placeholder for the read-only output area
    pub output_placeholder: &'static str,

    // ==================== Notifications ====================
    /// Warning shown when submit is pressed with blank input
    pub empty_input_warning: &'static str,

    /// Generic message shown when a translation fails.
    /// The underlying cause goes to the log only.
    pub translation_failed: &'static str,

    /// Shown after a copy to the clipboard
    pub copy_success: &'static str,
}

/// English widget strings
pub const WIDGET_STRINGS: WidgetStrings = WidgetStrings {
    title: "Translator",
    submit_idle: "Translate Text",
    submit_loading: "Loading...",
    input_placeholder: "Enter text",
    output_placeholder: "Translation",

    empty_input_warning: "Please fill the field.",
    translation_failed: "Something went wrong, please try again later.",
    copy_success: "Success copy to clipboard",
};
