//! Default configuration values and wire-protocol constants

/// Sentinel printed by the bundler when the scripts build succeeds
pub const SCRIPTS_SUCCESS_MARKER: &str = "<scripts:success>";

/// Sentinel printed by the bundler when the scripts build fails
pub const SCRIPTS_FAIL_MARKER: &str = "<scripts:fail>";

/// Sentinel printed by the bundler when the styles build succeeds
pub const STYLES_SUCCESS_MARKER: &str = "<styles:success>";

/// Sentinel printed by the bundler when the styles build fails
pub const STYLES_FAIL_MARKER: &str = "<styles:fail>";

/// Substring marking a diagnostic line in bundler output
pub const BUILD_ERROR_PREFIX: &str = "Error:";

/// Manifest file the bundler writes per asset kind
pub const MANIFEST_FILENAME: &str = "manifest.json";

/// Subdirectory for script bundles
pub const SCRIPTS_DIR: &str = "scripts";

/// Subdirectory for style bundles
pub const STYLES_DIR: &str = "styles";

/// Suffix identifying source-map entries in a manifest
pub const SOURCEMAP_SUFFIX: &str = ".map";

/// Default bundler executable
pub const DEFAULT_BUNDLER_PROGRAM: &str = "deno";

/// Permission flag handed to the bundler runtime
pub const BUNDLER_PERMISSION_FLAG: &str = "--allow-all";

/// Entry script expected under the config directory
pub const BUILD_SCRIPT_FILENAME: &str = "build.ts";

/// Project file read by the CLI
pub const PROJECT_FILENAME: &str = "assets.toml";

/// Default config subpath for new projects
pub const DEFAULT_CONFIG_SUBPATH: &str = "assets";

/// Default public subpath for new projects
pub const DEFAULT_PUBLIC_SUBPATH: &str = "public";
