use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::Glyphs;
use navtree::config::{Config, Verbosity};

/// Per-run output settings resolved from flags, config and terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbosity: Verbosity,
    pub glyphs: Glyphs,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, config: &Config) -> Self {
        Self::from_caps(json, verbose, config, detect_capabilities())
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: u8,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            verbosity: config.output.verbosity.raised_by(verbose),
            glyphs: Glyphs::new(caps.supports_unicode),
        }
    }

    /// Human output is suppressed in JSON mode and at `quiet`.
    pub fn human(&self) -> bool {
        !self.json && self.verbosity > Verbosity::Quiet
    }

    pub fn verbose(&self) -> bool {
        !self.json && self.verbosity >= Verbosity::Verbose
    }
}
