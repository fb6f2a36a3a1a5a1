//! Expansion driver.
//!
//! One request runs validate → confirm → fonts → members → family → save and
//! ends in exactly one [`ExpansionOutcome`]. Members are built strictly one
//! after another in combination order; the first build failure stops the
//! request. Nodes created before the failure are left in place.

use std::collections::HashMap;
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;
use tracing::{Instrument, info_span};
use vforge_core::{
    FontRef, NodeIndex, UnresolvedTarget, active_states, collect_fonts, combinations,
    member_name, resolve_properties, resolve_style, resolve_target,
};
use vforge_model::{Combination, ComponentSpec};
use vforge_validate::{
    Diagnostic, DiagnosticCode, LARGE_COMBINATION_THRESHOLD, ValidationReport, validate,
};

use crate::builder::{ASSETS_CONTAINER_NAME, ArtifactBuilder, Member, NodeRequest, Persistence};
use crate::error::BuildError;

/// Caller choices for one expansion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandOptions {
    /// Explicit go-ahead for a variant space above the threshold.
    pub confirm_large: bool,
    /// Save the specification after every member was built.
    pub save_on_success: bool,
}

impl Default for ExpandOptions {
    fn default() -> Self {
        Self {
            confirm_large: false,
            save_on_success: true,
        }
    }
}

impl ExpandOptions {
    pub fn confirmed(mut self) -> Self {
        self.confirm_large = true;
        self
    }

    pub fn without_save(mut self) -> Self {
        self.save_on_success = false;
        self
    }
}

/// What a completed expansion produced.
#[derive(Debug, Clone)]
pub struct ExpansionSummary<N> {
    pub members: Vec<Member<N>>,
    /// Present when more than one member was grouped.
    pub family: Option<N>,
    /// Bindings whose target matched nothing, one entry per binding.
    pub skipped_bindings: Vec<UnresolvedTarget>,
    /// Fonts the host could not load; text using them fell back.
    pub failed_fonts: Vec<FontRef>,
    pub saved: bool,
    pub save_error: Option<String>,
    pub duration_ms: u128,
}

impl<N> ExpansionSummary<N> {
    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    pub fn member_names(&self) -> Vec<&str> {
        self.members.iter().map(|member| member.name.as_str()).collect()
    }
}

/// Why a request stopped without completing.
#[derive(Debug, Clone, Error)]
pub enum Rejection {
    #[error("Specification has {} error(s)", .report.error_count())]
    Invalid { report: ValidationReport },

    #[error("{combination_count} combinations exceed {threshold}; confirmation required")]
    NeedsConfirmation {
        combination_count: usize,
        threshold: usize,
    },

    #[error("Build failed for combination '{combination}'")]
    BuildFailed {
        combination: String,
        #[source]
        error: BuildError,
    },

    #[error("Host step '{step}' failed")]
    HostFailed {
        step: &'static str,
        #[source]
        error: BuildError,
    },
}

impl Rejection {
    /// True when a retry with confirmation would proceed.
    pub fn needs_confirmation(&self) -> bool {
        matches!(self, Self::NeedsConfirmation { .. })
    }
}

/// Terminal outcome of one request.
#[derive(Debug, Clone)]
pub enum ExpansionOutcome<N> {
    ValidatedOk(ExpansionSummary<N>),
    ValidatedWithWarnings {
        summary: ExpansionSummary<N>,
        warnings: Vec<Diagnostic>,
    },
    Rejected(Rejection),
}

impl<N> ExpansionOutcome<N> {
    pub fn kind(&self) -> OutcomeKind {
        match self {
            Self::ValidatedOk(_) => OutcomeKind::ValidatedOk,
            Self::ValidatedWithWarnings { .. } => OutcomeKind::ValidatedWithWarnings,
            Self::Rejected(_) => OutcomeKind::Rejected,
        }
    }

    pub fn summary(&self) -> Option<&ExpansionSummary<N>> {
        match self {
            Self::ValidatedOk(summary) | Self::ValidatedWithWarnings { summary, .. } => {
                Some(summary)
            }
            Self::Rejected(_) => None,
        }
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        match self {
            Self::Rejected(rejection) => Some(rejection),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutcomeKind {
    ValidatedOk,
    ValidatedWithWarnings,
    Rejected,
}

/// Expand `spec` into one artifact per combination through `builder`.
pub async fn expand<B, P>(
    spec: &ComponentSpec,
    builder: &mut B,
    persistence: &P,
    options: ExpandOptions,
) -> ExpansionOutcome<B::Node>
where
    B: ArtifactBuilder,
    P: Persistence,
{
    let span = info_span!("expand", component = %spec.name);
    run(spec, builder, persistence, options).instrument(span).await
}

async fn run<B, P>(
    spec: &ComponentSpec,
    builder: &mut B,
    persistence: &P,
    options: ExpandOptions,
) -> ExpansionOutcome<B::Node>
where
    B: ArtifactBuilder,
    P: Persistence,
{
    let started = Instant::now();

    let report = validate(spec);
    if report.has_errors() {
        tracing::warn!(errors = report.error_count(), "rejected: specification invalid");
        return ExpansionOutcome::Rejected(Rejection::Invalid { report });
    }
    if report.has_code(DiagnosticCode::VariantCountLarge) && !options.confirm_large {
        let combination_count = vforge_core::combination_count(&spec.variants);
        tracing::warn!(combination_count, "rejected: large variant space not confirmed");
        return ExpansionOutcome::Rejected(Rejection::NeedsConfirmation {
            combination_count,
            threshold: LARGE_COMBINATION_THRESHOLD,
        });
    }

    let failed_fonts = load_fonts(spec, builder)
        .instrument(info_span!("fonts"))
        .await;

    let container = match builder.ensure_assets_container(ASSETS_CONTAINER_NAME).await {
        Ok(container) => container,
        Err(error) => {
            tracing::error!(%error, "assets container unavailable");
            return ExpansionOutcome::Rejected(Rejection::HostFailed {
                step: "assets container",
                error,
            });
        }
    };

    let mut members = Vec::new();
    let mut skipped_bindings: Vec<UnresolvedTarget> = Vec::new();
    for combination in combinations(&spec.variants) {
        let name = member_name(&combination);
        let built = build_member(spec, builder, &container, &combination, &name)
            .instrument(info_span!("member", combination = %name))
            .await;
        match built {
            Ok((node, skipped)) => {
                for unresolved in skipped {
                    if !skipped_bindings.contains(&unresolved) {
                        skipped_bindings.push(unresolved);
                    }
                }
                members.push(Member {
                    name,
                    combination,
                    node,
                });
            }
            Err(error) => {
                tracing::error!(
                    combination = %name,
                    %error,
                    "build failed; aborting remaining combinations"
                );
                return ExpansionOutcome::Rejected(Rejection::BuildFailed {
                    combination: name,
                    error,
                });
            }
        }
    }

    let family = match finish_family(spec, builder, &container, &members)
        .instrument(info_span!("family", members = members.len()))
        .await
    {
        Ok(family) => family,
        Err(rejection) => return ExpansionOutcome::Rejected(rejection),
    };

    let (saved, save_error) = if options.save_on_success {
        match persistence.save(spec).instrument(info_span!("save")).await {
            Ok(()) => (true, None),
            Err(error) => {
                tracing::warn!(%error, "artifacts built but specification was not saved");
                (false, Some(error.to_string()))
            }
        }
    } else {
        (false, None)
    };

    let summary = ExpansionSummary {
        members,
        family,
        skipped_bindings,
        failed_fonts,
        saved,
        save_error,
        duration_ms: started.elapsed().as_millis(),
    };
    tracing::info!(
        members = summary.member_count(),
        skipped_bindings = summary.skipped_bindings.len(),
        failed_fonts = summary.failed_fonts.len(),
        duration_ms = summary.duration_ms,
        "expansion complete"
    );

    if report.warnings.is_empty() {
        ExpansionOutcome::ValidatedOk(summary)
    } else {
        ExpansionOutcome::ValidatedWithWarnings {
            summary,
            warnings: report.warnings,
        }
    }
}

/// Load every distinct font once. Failures are logged and returned.
async fn load_fonts<B: ArtifactBuilder>(spec: &ComponentSpec, builder: &mut B) -> Vec<FontRef> {
    let mut failed = Vec::new();
    for font in collect_fonts(spec) {
        if let Err(error) = builder.load_font(&font).await {
            tracing::warn!(font = %font, %error, "font unavailable; host default will be used");
            failed.push(font);
        }
    }
    failed
}

/// Build one combination's tree, apply its properties and wire its bindings.
async fn build_member<B: ArtifactBuilder>(
    spec: &ComponentSpec,
    builder: &mut B,
    container: &B::Node,
    combination: &Combination,
    name: &str,
) -> Result<(B::Node, Vec<UnresolvedTarget>), BuildError> {
    let active = active_states(&spec.states, combination);
    tracing::debug!(active_states = active.len(), "resolving member");

    let mut nodes: HashMap<Vec<usize>, B::Node> = HashMap::new();
    let mut index = NodeIndex::new();
    for (path, element) in spec.root.walk_indexed() {
        let is_root = path.is_empty();
        let style = resolve_style(element, &active, spec.base_style.as_ref(), is_root);
        let parent = path
            .split_last()
            .and_then(|(_, parent_path)| nodes.get(parent_path));
        let request = NodeRequest {
            parent,
            element,
            style: &style,
            name: if is_root { name } else { element.name.as_str() },
        };
        let node = builder.create_node(container, request).await?;
        index.insert(&element.id, element.role.as_deref(), node.clone());
        nodes.insert(path, node);
    }

    let properties = resolve_properties(&spec.properties, &active);
    let mut skipped = Vec::new();
    for binding in &spec.bindings {
        let target = match resolve_target(binding, &index) {
            Ok(target) => target,
            Err(unresolved) => {
                tracing::warn!(%unresolved, "skipping binding");
                skipped.push(unresolved);
                continue;
            }
        };
        let Some(value) = properties.value_for(binding) else {
            tracing::warn!(
                property = %binding.property,
                kind = %binding.kind,
                "no {} property declared under this key; skipping binding",
                binding.kind
            );
            continue;
        };
        builder.apply_property(target, binding, &value).await?;
        builder.attach_binding(target, binding).await?;
    }

    let root = nodes
        .remove(&Vec::new())
        .ok_or_else(|| BuildError::host("create root", "root node missing after build"))?;
    Ok((root, skipped))
}

/// Group members and register the property catalogs once.
async fn finish_family<B: ArtifactBuilder>(
    spec: &ComponentSpec,
    builder: &mut B,
    container: &B::Node,
    members: &[Member<B::Node>],
) -> Result<Option<B::Node>, Rejection> {
    let family = if members.len() > 1 {
        let family = builder
            .combine_as_family(&spec.name, container, members)
            .await
            .map_err(|error| Rejection::HostFailed {
                step: "combine as family",
                error,
            })?;
        Some(family)
    } else {
        None
    };

    let target = family.as_ref().or_else(|| members.first().map(|member| &member.node));
    if let Some(target) = target
        && !spec.properties.is_empty()
    {
        builder
            .register_properties(target, &spec.properties)
            .await
            .map_err(|error| Rejection::HostFailed {
                step: "register properties",
                error,
            })?;
    }

    Ok(family)
}
