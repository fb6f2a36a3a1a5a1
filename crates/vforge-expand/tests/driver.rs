//! Expansion driver against an in-memory recording builder.

use std::sync::Mutex;

use vforge_core::{FontRef, PropertyValue};
use vforge_expand::{
    ASSETS_CONTAINER_NAME, ArtifactBuilder, BuildError, ExpandOptions, ExpansionOutcome, Member,
    NoPersistence, NodeRequest, OutcomeKind, Persistence, Rejection, Result, expand,
};
use vforge_model::{
    Binding, ComponentSpec, Element, ElementKind, PropertyCatalogs, PropertyType, State,
    StyleOverride, VariantGroup, templates,
};
use vforge_validate::DiagnosticCode;

#[derive(Default)]
struct RecordingBuilder {
    events: Vec<String>,
    next_node: usize,
    fail_member: Option<String>,
    fail_fonts: bool,
}

impl RecordingBuilder {
    fn failing_member(name: &str) -> Self {
        Self {
            fail_member: Some(name.to_string()),
            ..Self::default()
        }
    }

    fn node(&mut self) -> usize {
        self.next_node += 1;
        self.next_node
    }

    fn count(&self, prefix: &str) -> usize {
        self.events.iter().filter(|e| e.starts_with(prefix)).count()
    }

    fn position(&self, prefix: &str) -> Option<usize> {
        self.events.iter().position(|e| e.starts_with(prefix))
    }
}

impl ArtifactBuilder for RecordingBuilder {
    type Node = usize;

    async fn load_font(&mut self, font: &FontRef) -> Result<()> {
        self.events.push(format!("font {font}"));
        if self.fail_fonts {
            return Err(BuildError::FontLoad {
                font: font.clone(),
                reason: "not installed".to_string(),
            });
        }
        Ok(())
    }

    async fn ensure_assets_container(&mut self, name: &str) -> Result<usize> {
        self.events.push(format!("container {name}"));
        Ok(0)
    }

    async fn create_node(
        &mut self,
        container: &usize,
        request: NodeRequest<'_, usize>,
    ) -> Result<usize> {
        if request.parent.is_none() && self.fail_member.as_deref() == Some(request.name) {
            return Err(BuildError::CreateNode {
                element: request.element.id.to_string(),
                reason: "host refused".to_string(),
            });
        }
        let node = self.node();
        let parent = request.parent.copied().unwrap_or(*container);
        self.events.push(format!(
            "create {} '{}' in {parent} -> {node}",
            request.element.id, request.name
        ));
        Ok(node)
    }

    async fn apply_property(
        &mut self,
        node: &usize,
        binding: &Binding,
        value: &PropertyValue,
    ) -> Result<()> {
        self.events
            .push(format!("apply {} on {node} = {value:?}", binding.property));
        Ok(())
    }

    async fn attach_binding(&mut self, node: &usize, binding: &Binding) -> Result<()> {
        self.events.push(format!("attach {} on {node}", binding.property));
        Ok(())
    }

    async fn combine_as_family(
        &mut self,
        name: &str,
        _container: &usize,
        members: &[Member<usize>],
    ) -> Result<usize> {
        let node = self.node();
        self.events
            .push(format!("family {name} of {} -> {node}", members.len()));
        Ok(node)
    }

    async fn register_properties(
        &mut self,
        target: &usize,
        catalogs: &PropertyCatalogs,
    ) -> Result<()> {
        self.events
            .push(format!("register {} on {target}", catalogs.len()));
        Ok(())
    }
}

#[derive(Default)]
struct MemoryStore {
    saved: Mutex<Vec<ComponentSpec>>,
    fail: bool,
}

impl Persistence for MemoryStore {
    type Error = std::io::Error;

    async fn load(&self) -> std::result::Result<Option<ComponentSpec>, std::io::Error> {
        Ok(self.saved.lock().expect("store lock").last().cloned())
    }

    async fn save(&self, spec: &ComponentSpec) -> std::result::Result<(), std::io::Error> {
        if self.fail {
            return Err(std::io::Error::other("disk full"));
        }
        self.saved.lock().expect("store lock").push(spec.clone());
        Ok(())
    }
}

#[tokio::test]
async fn button_expands_into_one_family() {
    let spec = templates::button();
    let mut builder = RecordingBuilder::default();
    let store = MemoryStore::default();

    let outcome = expand(&spec, &mut builder, &store, ExpandOptions::default()).await;
    assert_eq!(outcome.kind(), OutcomeKind::ValidatedOk);
    let summary = outcome.summary().expect("summary");

    assert_eq!(summary.member_count(), 12);
    assert_eq!(summary.member_names()[0], "state=default, size=sm");
    assert_eq!(summary.member_names()[1], "state=default, size=md");
    assert_eq!(summary.member_names()[11], "state=disabled, size=lg");
    assert!(summary.family.is_some());
    assert!(summary.saved);
    assert_eq!(store.saved.lock().expect("store lock").len(), 1);

    assert_eq!(builder.count("container"), 1);
    assert_eq!(builder.events[0], "font Inter Medium");
    assert_eq!(builder.count("font"), 1);
    assert!(builder.position("font") < builder.position("create"));
    assert_eq!(builder.count("create"), 36);
    assert_eq!(builder.count("attach"), 36);
    assert_eq!(builder.count("family"), 1);
    assert_eq!(builder.count("register"), 1);
    assert!(builder.position("family") < builder.position("register"));
    assert!(
        builder.events.last().expect("events").starts_with("register 3 on "),
        "{:?}",
        builder.events.last()
    );
    assert!(builder.events.contains(&format!("container {ASSETS_CONTAINER_NAME}")));
}

#[tokio::test]
async fn invalid_spec_is_rejected_before_any_host_call() {
    let spec = templates::button().edit(|spec| spec.name.clear());
    let mut builder = RecordingBuilder::default();
    let store = MemoryStore::default();

    let outcome = expand(&spec, &mut builder, &store, ExpandOptions::default()).await;
    match outcome {
        ExpansionOutcome::Rejected(Rejection::Invalid { report }) => {
            assert!(report.has_code(DiagnosticCode::ComponentNameEmpty));
        }
        other => panic!("expected invalid rejection, got {:?}", other.kind()),
    }
    assert!(builder.events.is_empty());
    assert!(store.saved.lock().expect("store lock").is_empty());
}

#[tokio::test]
async fn empty_variant_group_builds_nothing_and_saves_nothing() {
    let spec =
        templates::button().with_variant_group(VariantGroup::new("tone", Vec::<String>::new()));
    let mut builder = RecordingBuilder::default();
    let store = MemoryStore::default();

    let outcome = expand(&spec, &mut builder, &store, ExpandOptions::default()).await;
    match outcome {
        ExpansionOutcome::Rejected(Rejection::Invalid { report }) => {
            assert!(report.has_code(DiagnosticCode::VariantGroupEmpty));
        }
        other => panic!("expected invalid rejection, got {:?}", other.kind()),
    }
    assert!(builder.events.is_empty());
    assert!(store.saved.lock().expect("store lock").is_empty());
}

fn large_spec() -> ComponentSpec {
    let mut spec = ComponentSpec::new("Grid", Element::new("root", "Grid", ElementKind::Container));
    spec.variants = (0..6)
        .map(|g| VariantGroup::new(format!("axis{g}"), ["a", "b", "c"]))
        .collect();
    spec
}

#[tokio::test]
async fn large_space_needs_confirmation() {
    let spec = large_spec();
    let mut builder = RecordingBuilder::default();

    let outcome = expand(&spec, &mut builder, &NoPersistence, ExpandOptions::default()).await;
    let rejection = outcome.rejection().expect("rejected");
    assert!(rejection.needs_confirmation());
    insta::assert_snapshot!(
        rejection.to_string(),
        @"729 combinations exceed 50; confirmation required"
    );
    assert!(builder.events.is_empty());

    let options = ExpandOptions::default().confirmed();
    let outcome = expand(&spec, &mut builder, &NoPersistence, options).await;
    match &outcome {
        ExpansionOutcome::ValidatedWithWarnings { summary, warnings } => {
            assert_eq!(summary.member_count(), 729);
            assert!(warnings.iter().any(|w| w.code == DiagnosticCode::VariantCountLarge));
        }
        other => panic!("expected warnings outcome, got {:?}", other.kind()),
    }
}

#[tokio::test]
async fn build_failure_stops_remaining_combinations() {
    let spec = templates::button();
    let mut builder = RecordingBuilder::failing_member("state=default, size=lg");
    let store = MemoryStore::default();

    let outcome = expand(&spec, &mut builder, &store, ExpandOptions::default()).await;
    match outcome.rejection() {
        Some(Rejection::BuildFailed { combination, error }) => {
            assert_eq!(combination, "state=default, size=lg");
            assert!(matches!(error, BuildError::CreateNode { .. }));
        }
        other => panic!("expected build failure, got {other:?}"),
    }
    // Two complete members (three nodes each) were built before the failure.
    assert_eq!(builder.count("create"), 6);
    assert_eq!(builder.count("family"), 0);
    assert_eq!(builder.count("register"), 0);
    assert!(store.saved.lock().expect("store lock").is_empty());
}

#[tokio::test]
async fn font_failures_are_not_fatal() {
    let spec = templates::input_field();
    let mut builder = RecordingBuilder {
        fail_fonts: true,
        ..RecordingBuilder::default()
    };

    let outcome = expand(&spec, &mut builder, &NoPersistence, ExpandOptions::default()).await;
    let summary = outcome.summary().expect("completed");
    assert_eq!(summary.failed_fonts, vec![FontRef::new("Inter", "Medium")]);
    assert_eq!(summary.member_count(), 3);
}

#[tokio::test]
async fn single_combination_registers_on_the_artifact() {
    let mut spec = templates::blank("Badge");
    spec.properties.texts = vec![vforge_model::TextProperty::new("label", "Label")];
    let mut builder = RecordingBuilder::default();

    let options = ExpandOptions::default().without_save();
    let outcome = expand(&spec, &mut builder, &NoPersistence, options).await;
    let summary = outcome.summary().expect("completed");
    assert_eq!(summary.member_names(), vec!["Default"]);
    assert!(summary.family.is_none());
    assert!(!summary.saved);
    let root = summary.members[0].node;
    assert_eq!(builder.count("family"), 0);
    assert!(builder.events.contains(&format!("register 1 on {root}")));
}

#[tokio::test]
async fn unresolved_bindings_are_skipped() {
    let spec = templates::button().edit(|spec| {
        spec.bindings
            .push(Binding::to_role("label", PropertyType::Text, "subtitle"));
    });
    let mut builder = RecordingBuilder::default();

    let outcome = expand(&spec, &mut builder, &NoPersistence, ExpandOptions::default()).await;
    let ExpansionOutcome::ValidatedWithWarnings { summary, warnings } = outcome else {
        panic!("expected warnings outcome");
    };
    assert_eq!(summary.skipped_bindings.len(), 1);
    assert_eq!(summary.skipped_bindings[0].property, "label");
    assert!(warnings.iter().any(|w| w.code == DiagnosticCode::BindingTargetUnresolved));
    assert_eq!(builder.count("attach"), 36);
}

#[tokio::test]
async fn binding_typed_for_another_catalog_is_not_wired() {
    // `label` is declared as a text property only.
    let spec = templates::button().edit(|spec| {
        spec.bindings
            .push(Binding::to_id("label", PropertyType::Boolean, "leading-icon"));
    });
    let mut builder = RecordingBuilder::default();

    let outcome = expand(&spec, &mut builder, &NoPersistence, ExpandOptions::default()).await;
    assert_eq!(outcome.kind(), OutcomeKind::ValidatedOk);
    assert_eq!(builder.count("apply label"), 12);
    assert_eq!(builder.count("attach label"), 12);
    assert_eq!(builder.count("attach"), 36);
}

#[tokio::test]
async fn state_property_values_reach_the_builder() {
    let spec = templates::button().with_state(
        State::new("pressed-label")
            .when("state", "pressed")
            .text("label", "Pressed")
            .element_style("label", StyleOverride::new().opacity(0.8)),
    );
    let mut builder = RecordingBuilder::default();

    expand(&spec, &mut builder, &NoPersistence, ExpandOptions::default()).await;
    let pressed = builder
        .events
        .iter()
        .filter(|e| e.contains(r#"Text("Pressed")"#))
        .count();
    assert_eq!(pressed, 3);
}

#[tokio::test]
async fn save_failure_is_reported_not_fatal() {
    let spec = templates::input_field();
    let mut builder = RecordingBuilder::default();
    let store = MemoryStore {
        fail: true,
        ..MemoryStore::default()
    };

    let outcome = expand(&spec, &mut builder, &store, ExpandOptions::default()).await;
    let summary = outcome.summary().expect("completed");
    assert!(!summary.saved);
    assert_eq!(summary.save_error.as_deref(), Some("disk full"));
    assert!(store.load().await.expect("load").is_none());
}
