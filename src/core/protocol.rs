//! Bundler stdout protocol
//!
//! The bundler signals per-kind outcomes with exact sentinel lines and
//! diagnostics with an `Error:` substring; every other line is ignored.

use std::fmt;

use crate::config::defaults::{
    BUILD_ERROR_PREFIX, SCRIPTS_DIR, SCRIPTS_FAIL_MARKER, SCRIPTS_SUCCESS_MARKER, STYLES_DIR,
    STYLES_FAIL_MARKER, STYLES_SUCCESS_MARKER,
};

/// One of the two independently built output categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// Bundled scripts
    Scripts,
    /// Bundled styles
    Styles,
}

impl AssetKind {
    /// Both kinds, in the order outcomes are reported
    pub const ALL: [AssetKind; 2] = [AssetKind::Scripts, AssetKind::Styles];

    /// Manifest subdirectory for this kind
    pub fn dir(&self) -> &'static str {
        match self {
            AssetKind::Scripts => SCRIPTS_DIR,
            AssetKind::Styles => STYLES_DIR,
        }
    }

    /// Sentinel line signaling a successful sub-build
    pub fn success_marker(&self) -> &'static str {
        match self {
            AssetKind::Scripts => SCRIPTS_SUCCESS_MARKER,
            AssetKind::Styles => STYLES_SUCCESS_MARKER,
        }
    }

    /// Sentinel line signaling a failed sub-build
    pub fn fail_marker(&self) -> &'static str {
        match self {
            AssetKind::Scripts => SCRIPTS_FAIL_MARKER,
            AssetKind::Styles => STYLES_FAIL_MARKER,
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scripts => write!(f, "Scripts"),
            Self::Styles => write!(f, "Styles"),
        }
    }
}

/// Marker signals observed for one asset kind
///
/// Success and fail markers are scanned independently; both may be set
/// if the bundler emitted both lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MarkerSignals {
    /// The exact success sentinel was present
    pub success: bool,
    /// The exact fail sentinel was present
    pub failed: bool,
}

/// Result of scanning one captured bundler output
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    scripts: MarkerSignals,
    styles: MarkerSignals,
    error_tail: Vec<String>,
}

impl BuildReport {
    /// Scan captured stdout for sentinel markers and the diagnostic tail
    ///
    /// The whole line set is scanned; success and fail markers for the
    /// same kind may both be present. The diagnostic tail starts at the
    /// last line containing the error prefix and runs to the end of the
    /// output.
    pub fn scan(stdout: &str) -> Self {
        let lines: Vec<&str> = stdout.lines().collect();

        let signals_for = |kind: AssetKind| MarkerSignals {
            success: lines.iter().any(|line| *line == kind.success_marker()),
            failed: lines.iter().any(|line| *line == kind.fail_marker()),
        };

        let error_tail = lines
            .iter()
            .rposition(|line| line.contains(BUILD_ERROR_PREFIX))
            .map(|start| lines[start..].iter().map(ToString::to_string).collect())
            .unwrap_or_default();

        Self {
            scripts: signals_for(AssetKind::Scripts),
            styles: signals_for(AssetKind::Styles),
            error_tail,
        }
    }

    /// Signals observed for the given kind
    pub fn signals(&self, kind: AssetKind) -> MarkerSignals {
        match kind {
            AssetKind::Scripts => self.scripts,
            AssetKind::Styles => self.styles,
        }
    }

    /// Diagnostic lines from the last error marker to end of output
    pub fn error_tail(&self) -> &[String] {
        &self.error_tail
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_output_reports_nothing() {
        let report = BuildReport::scan("");
        assert_eq!(report.signals(AssetKind::Scripts), MarkerSignals::default());
        assert_eq!(report.signals(AssetKind::Styles), MarkerSignals::default());
        assert!(report.error_tail().is_empty());
    }

    #[test]
    fn sentinels_are_recognized_per_kind() {
        let report = BuildReport::scan("<scripts:success>\n<styles:fail>\n");
        assert!(report.signals(AssetKind::Scripts).success);
        assert!(!report.signals(AssetKind::Scripts).failed);
        assert!(!report.signals(AssetKind::Styles).success);
        assert!(report.signals(AssetKind::Styles).failed);
    }

    #[test]
    fn sentinels_require_an_exact_line_match() {
        let report = BuildReport::scan("  <scripts:success>\nnote: <styles:fail> seen\n");
        assert!(!report.signals(AssetKind::Scripts).success);
        assert!(!report.signals(AssetKind::Styles).failed);
    }

    #[test]
    fn success_and_fail_markers_may_both_be_present() {
        let report = BuildReport::scan("<scripts:success>\n<scripts:fail>\n");
        let signals = report.signals(AssetKind::Scripts);
        assert!(signals.success);
        assert!(signals.failed);
    }

    #[test]
    fn error_tail_starts_at_the_last_error_line() {
        let report = BuildReport::scan("a\nError: boom\nb\nError: bang\nc\n");
        assert_eq!(report.error_tail(), ["Error: bang", "c"]);
    }

    #[test]
    fn error_tail_covers_a_single_trailing_error() {
        let report = BuildReport::scan("fine\nError: boom");
        assert_eq!(report.error_tail(), ["Error: boom"]);
    }

    #[test]
    fn error_prefix_is_matched_as_a_substring() {
        let report = BuildReport::scan("x\nerror TS2304: Error: cannot find name\ny");
        assert_eq!(
            report.error_tail(),
            ["error TS2304: Error: cannot find name", "y"]
        );
    }

    #[test]
    fn markers_after_the_last_error_land_in_the_tail() {
        let report = BuildReport::scan("Error: boom\n<scripts:fail>\n");
        assert_eq!(report.error_tail(), ["Error: boom", "<scripts:fail>"]);
        assert!(report.signals(AssetKind::Scripts).failed);
    }
}
