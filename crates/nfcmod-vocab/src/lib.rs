//! Fixed vocabulary of the NFC manifest mutators: property-list keys, Android
//! namespace prefixes, permission tokens and reader-session formats.

use core::fmt;

/// Reader-session data-exchange formats declared in the entitlements document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderFormat {
    Ndef,
    Tag,
}

impl ReaderFormat {
    pub const fn as_str(self) -> &'static str {
        match self {
            ReaderFormat::Ndef => "NDEF",
            ReaderFormat::Tag => "TAG",
        }
    }

    /// Formats to require, given the NDEF inclusion flag.
    pub fn required(include_ndef: bool) -> &'static [ReaderFormat] {
        if include_ndef {
            &[ReaderFormat::Ndef, ReaderFormat::Tag]
        } else {
            &[ReaderFormat::Tag]
        }
    }
}

impl fmt::Display for ReaderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

pub mod plist {
    pub const READER_USAGE_DESCRIPTION: &str = "NFCReaderUsageDescription";
    pub const READER_SESSION_FORMATS: &str = "com.apple.developer.nfc.readersession.formats";
    pub const SELECT_IDENTIFIERS: &str =
        "com.apple.developer.nfc.readersession.iso7816.select-identifiers";
    pub const FELICA_SYSTEM_CODES: &str = "com.apple.developer.nfc.readersession.felica.systemcodes";

    /// Used when neither an override nor an existing description is present.
    pub const DEFAULT_READER_USAGE_DESCRIPTION: &str = "Interact with nearby NFC devices";
}

pub mod android {
    pub const MANIFEST: &str = "manifest";
    pub const APPLICATION: &str = "application";
    pub const ACTIVITY: &str = "activity";
    pub const INTENT_FILTER: &str = "intent-filter";
    pub const ACTION: &str = "action";
    pub const DATA: &str = "data";
    pub const CATEGORY: &str = "category";
    pub const USES_PERMISSION: &str = "uses-permission";

    pub const ATTR_PREFIX: &str = "android:";
    pub const NAME_ATTR: &str = "android:name";
    pub const AUTO_VERIFY_ATTR: &str = "android:autoVerify";

    /// Sentinel marker stamped on every engine-generated intent filter.
    pub const GENERATED_ATTR: &str = "data-generated";
    pub const GENERATED_VALUE: &str = "true";

    pub const NFC_ACTION_PREFIX: &str = "android.nfc.action.";
    pub const INTENT_ACTION_PREFIX: &str = "android.intent.action.";
    pub const INTENT_CATEGORY_PREFIX: &str = "android.intent.category.";

    pub const NFC_PERMISSION: &str = "android.permission.NFC";

    pub const DEFAULT_MAIN_ACTIVITY: &str = ".MainActivity";

    pub const COMPILE_SDK_VERSION: &str = "compileSdkVersion";
    /// Android 12 reader-mode APIs need at least this compile SDK.
    pub const MIN_COMPILE_SDK_VERSION: u32 = 31;
}

/// Namespace an action for the given prefix (`NDEF_DISCOVERED` -> `android.nfc.action.NDEF_DISCOVERED`).
pub fn namespaced(prefix: &str, name: &str) -> String {
    format!("{prefix}{name}")
}

/// Prefix a bare data attribute name (`scheme` -> `android:scheme`).
pub fn android_attr(name: &str) -> String {
    format!("{}{name}", android::ATTR_PREFIX)
}

pub fn is_generated_marker(value: &str) -> bool {
    value == android::GENERATED_VALUE
}
