use nfcmod_vocab::android;

/// Engine configuration options.
///
/// These make the anchoring and strictness trade-offs explicit and testable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// `android:name` of the primary activity that owns the generated intent filters.
    pub main_activity: String,

    /// Report malformed configuration values as an error instead of ignoring them.
    pub strict_inputs: bool,

    /// Build parameter raised by the build-parameter stage.
    pub build_param: String,

    /// Minimum accepted value for `build_param`.
    pub min_build_param: u32,

    /// Fingerprint algorithm used for telemetry and change detection.
    pub fingerprint_algorithm: String,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            main_activity: android::DEFAULT_MAIN_ACTIVITY.to_string(),
            strict_inputs: false,
            build_param: android::COMPILE_SDK_VERSION.to_string(),
            min_build_param: android::MIN_COMPILE_SDK_VERSION,
            fingerprint_algorithm: "xxh64".to_string(),
        }
    }
}
