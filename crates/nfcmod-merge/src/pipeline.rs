//! Composition driver: runs every stage over the project documents in a fixed order.
//!
//! Stages form an explicit fold. Each stage takes the documents by value and
//! returns them, so no stage ever observes a half-applied edit from another.
//! A fatal error consumes the documents; nothing half-edited is handed back.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use nfcmod_core::hash::hash_bytes_hex;
use nfcmod_core::model::Document;
use nfcmod_intent::render::render_filters;
use nfcmod_vocab::{android, plist};

use crate::array::list_len;
use crate::config::NfcConfig;
use crate::error::MutationError;
use crate::mutators::{
    ensure_permissions, merge_reader_formats, merge_select_identifiers, merge_system_codes,
    raise_build_param, set_usage_description,
};
use crate::options::MergeOptions;
use crate::replace::replace_intent_filters;
use crate::telemetry::PassTelemetry;

/// Every document a pass may edit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectDocuments {
    pub info_plist: Document,
    pub entitlements: Document,
    pub android_manifest: Document,
    pub build_properties: Document,
}

impl ProjectDocuments {
    /// Documents by stable name, in a fixed order.
    pub fn named(&self) -> [(&'static str, &Document); 4] {
        [
            ("info_plist", &self.info_plist),
            ("entitlements", &self.entitlements),
            ("android_manifest", &self.android_manifest),
            ("build_properties", &self.build_properties),
        ]
    }
}

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    EntitlementsMerge,
    IdentifierMerge,
    SystemCodeMerge,
    IntentFilterReplace,
    BuildParamRaise,
    UsageDescriptionSet,
    PermissionListMerge,
}

impl Stage {
    pub const PIPELINE: [Stage; 7] = [
        Stage::EntitlementsMerge,
        Stage::IdentifierMerge,
        Stage::SystemCodeMerge,
        Stage::IntentFilterReplace,
        Stage::BuildParamRaise,
        Stage::UsageDescriptionSet,
        Stage::PermissionListMerge,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Stage::EntitlementsMerge => "entitlements_merge",
            Stage::IdentifierMerge => "identifier_merge",
            Stage::SystemCodeMerge => "system_code_merge",
            Stage::IntentFilterReplace => "intent_filter_replace",
            Stage::BuildParamRaise => "build_param_raise",
            Stage::UsageDescriptionSet => "usage_description_set",
            Stage::PermissionListMerge => "permission_list_merge",
        }
    }

    /// Stages skipped when the permission gate is disabled.
    pub const fn is_permission_gated(self) -> bool {
        matches!(self, Stage::UsageDescriptionSet | Stage::PermissionListMerge)
    }

    /// Stages that will run for this configuration.
    pub fn planned(config: &NfcConfig) -> Vec<Stage> {
        Stage::PIPELINE
            .into_iter()
            .filter(|s| !s.is_permission_gated() || config.permission.is_enabled())
            .collect()
    }

    fn apply(
        self,
        mut docs: ProjectDocuments,
        config: &NfcConfig,
        opts: &MergeOptions,
        telemetry: &mut PassTelemetry,
    ) -> Result<ProjectDocuments, MutationError> {
        match self {
            Stage::EntitlementsMerge => {
                let key = plist::READER_SESSION_FORMATS;
                let before = list_len(&docs.entitlements, key);
                docs.entitlements = merge_reader_formats(docs.entitlements, config.include_ndef_entitlement);
                telemetry.record_added(key, list_len(&docs.entitlements, key).saturating_sub(before));
            }

            Stage::IdentifierMerge => {
                let key = plist::SELECT_IDENTIFIERS;
                let before = list_len(&docs.info_plist, key);
                docs.info_plist = merge_select_identifiers(docs.info_plist, &config.select_identifiers);
                telemetry.record_added(key, list_len(&docs.info_plist, key).saturating_sub(before));
            }

            Stage::SystemCodeMerge => {
                let key = plist::FELICA_SYSTEM_CODES;
                let before = list_len(&docs.info_plist, key);
                docs.info_plist = merge_system_codes(docs.info_plist, &config.system_codes);
                telemetry.record_added(key, list_len(&docs.info_plist, key).saturating_sub(before));
            }

            Stage::IntentFilterReplace => {
                // Host filters first, then NFC filters, matching the packaging tool's own order.
                let mut fresh = render_filters(&config.host_intent_filters);
                fresh.extend(render_filters(&config.intent_filters));

                let (manifest, counts) =
                    replace_intent_filters(docs.android_manifest, &opts.main_activity, fresh)?;
                docs.android_manifest = manifest;

                telemetry.generated_filters_removed = counts.removed;
                telemetry.generated_filters_added = counts.added;
                telemetry.user_filters_kept = counts.kept;
            }

            Stage::BuildParamRaise => {
                let (props, change) =
                    raise_build_param(docs.build_properties, &opts.build_param, opts.min_build_param);
                docs.build_properties = props;
                telemetry.build_param = Some(change);
            }

            Stage::UsageDescriptionSet => {
                let (info, source) =
                    set_usage_description(docs.info_plist, config.permission.usage_override());
                docs.info_plist = info;
                telemetry.usage_description = Some(source);
            }

            Stage::PermissionListMerge => {
                let (manifest, added) =
                    ensure_permissions(docs.android_manifest, &[android::NFC_PERMISSION])?;
                docs.android_manifest = manifest;
                telemetry.permissions_added = added;
            }
        }

        debug!(stage = self.as_str(), "stage applied");
        telemetry.stages.push(self.as_str().to_string());
        Ok(docs)
    }
}

/// Result of a successful pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PassOutcome {
    pub documents: ProjectDocuments,
    pub telemetry: PassTelemetry,
}

/// Run one mutation pass over `docs`.
///
/// Re-running with the same configuration over the output yields the same
/// documents again.
pub fn run_pass(
    docs: ProjectDocuments,
    config: &NfcConfig,
    opts: &MergeOptions,
) -> Result<PassOutcome, MutationError> {
    let algo = opts.fingerprint_algorithm.as_str();
    if hash_bytes_hex(algo, b"").is_none() {
        return Err(MutationError::UnsupportedHashAlgorithm(algo.to_string()));
    }

    let _span = info_span!("nfc_pass", gate = config.permission.as_str()).entered();

    let mut telemetry = PassTelemetry::new(config.permission.as_str(), algo);
    telemetry.fingerprints_before = fingerprints(&docs, algo);

    let docs = Stage::planned(config)
        .into_iter()
        .try_fold(docs, |docs, stage| stage.apply(docs, config, opts, &mut telemetry))?;

    telemetry.fingerprints_after = fingerprints(&docs, algo);
    telemetry.changed = telemetry.fingerprints_before != telemetry.fingerprints_after;

    info!(
        changed = telemetry.changed,
        filters_added = telemetry.generated_filters_added,
        filters_removed = telemetry.generated_filters_removed,
        "nfc pass complete"
    );

    Ok(PassOutcome {
        documents: docs,
        telemetry,
    })
}

fn fingerprints(docs: &ProjectDocuments, algo: &str) -> std::collections::BTreeMap<String, String> {
    docs.named()
        .into_iter()
        .filter_map(|(name, doc)| doc.fingerprint(algo).map(|h| (name.to_string(), h)))
        .collect()
}
