//! Headless model of the interactive normalization form.
//!
//! A UI layer renders this: a multi-line text input, one checkbox per
//! catalog rule, a submit action, an inline error slot, and a read-only
//! fixed-width output area. The model only normalizes on [`Form::submit`];
//! editing text or toggling checkboxes never recomputes the output.

use crate::{
    catalog::{RULES, RuleId},
    config::RuleConfig,
    normalizer::Normalizer,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter some text to normalize.")]
    EmptyInput,
}

/// One rule toggle as the UI shows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkbox {
    pub rule: RuleId,
    pub label: &'static str,
    pub checked: bool,
}

/// The result of the last successful submission. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutput {
    text: String,
}

impl FormOutput {
    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The output as a fenced block, so any Markdown-capable renderer shows
    /// it in a monospace font. The fence grows past the longest backtick run
    /// in the text.
    pub fn render_monospace(&self) -> String {
        let longest_run = self
            .text
            .split(|c: char| c != '`')
            .map(str::len)
            .max()
            .unwrap_or(0);
        let fence = "`".repeat(longest_run.max(2) + 1);
        let newline = if self.text.ends_with('\n') { "" } else { "\n" };
        format!("{fence}text\n{}{newline}{fence}\n", self.text)
    }
}

#[derive(Debug, Clone)]
pub struct Form {
    text: String,
    checkboxes: Vec<Checkbox>,
    output: Option<FormOutput>,
    error: Option<FormError>,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Empty text and one checkbox per rule at its default state.
    pub fn new() -> Self {
        let checkboxes = RULES
            .iter()
            .map(|desc| Checkbox {
                rule: desc.id,
                label: desc.label,
                checked: desc.default_enabled,
            })
            .collect();
        Self {
            text: String::new(),
            checkboxes,
            output: None,
            error: None,
        }
    }

    #[inline]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[inline]
    pub fn checkboxes(&self) -> &[Checkbox] {
        &self.checkboxes
    }

    pub fn set_checked(&mut self, rule: RuleId, checked: bool) {
        // Checkboxes are built from the catalog, so the index is the id.
        self.checkboxes[rule.index()].checked = checked;
    }

    /// Current checkbox states as a configuration.
    pub fn config(&self) -> RuleConfig {
        self.checkboxes
            .iter()
            .fold(RuleConfig::all_disabled(), |config, cb| {
                config.with(cb.rule, cb.checked)
            })
    }

    /// Validate and normalize. On empty text the error is recorded for
    /// inline display and the previous output is kept.
    pub fn submit(&mut self) -> Result<&FormOutput, FormError> {
        if self.text.is_empty() {
            self.error = Some(FormError::EmptyInput);
            return Err(FormError::EmptyInput);
        }
        self.error = None;
        let text = Normalizer::new(self.config())
            .normalize(self.text.as_str())
            .into_owned();
        Ok(self.output.insert(FormOutput { text }))
    }

    /// Output of the last successful submission.
    #[inline]
    pub fn output(&self) -> Option<&FormOutput> {
        self.output.as_ref()
    }

    /// Validation error from the last submission, if it failed.
    #[inline]
    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkboxes_mirror_the_catalog() {
        let form = Form::new();
        let labels: Vec<_> = form.checkboxes().iter().map(|cb| cb.label).collect();
        assert_eq!(labels.len(), RuleId::COUNT);
        assert_eq!(labels[0], "Surround Dashes");
        assert_eq!(labels[9], "Replace Additional Ligatures");
        assert!(form.checkboxes().iter().all(|cb| cb.checked));
        assert_eq!(form.config(), RuleConfig::default());
    }

    #[test]
    fn empty_submission_is_rejected_without_output() {
        let mut form = Form::new();
        assert_eq!(form.submit(), Err(FormError::EmptyInput));
        assert_eq!(form.error(), Some(&FormError::EmptyInput));
        assert!(form.output().is_none());
        assert_eq!(
            FormError::EmptyInput.to_string(),
            "Please enter some text to normalize."
        );
    }

    #[test]
    fn whitespace_only_text_is_not_empty() {
        let mut form = Form::new();
        form.set_text("  \n");
        assert_eq!(form.submit().unwrap().text(), "  \n");
    }

    #[test]
    fn form_recovers_after_validation_error() {
        let mut form = Form::new();
        assert!(form.submit().is_err());
        form.set_text("“Hi”…");
        assert_eq!(form.submit().unwrap().text(), "\"Hi\"...");
        assert!(form.error().is_none());
    }

    #[test]
    fn checkbox_states_drive_the_configuration() {
        let mut form = Form::new();
        form.set_checked(RuleId::ReplaceBullet, false);
        form.set_text("•…");
        assert_eq!(form.submit().unwrap().text(), "•...");
        assert!(!form.config().is_enabled(RuleId::ReplaceBullet));
    }

    #[test]
    fn output_only_changes_on_submit() {
        let mut form = Form::new();
        form.set_text("a—b");
        form.submit().unwrap();
        form.set_text("something else");
        form.set_checked(RuleId::SurroundDashes, false);
        assert_eq!(form.output().unwrap().text(), "a - b");

        // A failed submission keeps the last good output.
        form.set_text("");
        assert!(form.submit().is_err());
        assert_eq!(form.output().unwrap().text(), "a - b");
    }

    #[test]
    fn monospace_rendering_fences_the_text() {
        let output = FormOutput {
            text: "a - b".into(),
        };
        assert_eq!(output.render_monospace(), "```text\na - b\n```\n");

        let ticks = FormOutput {
            text: "use ```code```\n".into(),
        };
        assert_eq!(ticks.render_monospace(), "````text\nuse ```code```\n````\n");
    }
}
