//! Ordered resolution through a dill catalog

use std::sync::Arc;

use dill::{AllOf, Catalog, CatalogBuilder, InjectionContext, InjectionError};
use ordo_application::OrderedSequence;
use ordo_infrastructure::di::resolve_ordered;
use ordo_infrastructure::{CatalogBuilderExt, Ordered, OrderedBuilderExt, ResolveOrderedExt};

use crate::fixtures::{
    AdditionalMetadata, Annotated, AnnotatedBuilder, Broken, BrokenBuilder, Consumer,
    ConsumerBuilder, Dependency, Named, TaggedConsumer, named, names, provide, provide_unkeyed,
    tagged_names,
};

type Deps = OrderedSequence<Arc<dyn Dependency>>;

fn by_name(dependency: &(dyn Dependency + 'static)) -> String {
    dependency.name()
}

fn three_keyed() -> CatalogBuilder {
    let mut builder = CatalogBuilder::new();
    provide::<0>(&mut builder, "dep 2", 2);
    provide::<1>(&mut builder, "dep 1", 1);
    provide::<2>(&mut builder, "dep 3", 3);
    builder
}

fn ordered_catalog() -> Catalog {
    let mut builder = three_keyed();
    builder.add_ordered::<dyn Dependency>();
    builder.build()
}

#[test]
fn test_constant_keys_resolve_ascending() {
    let catalog = ordered_catalog();

    let deps = catalog.get_one::<Deps>().unwrap();
    assert_eq!(names(&deps), vec!["dep 1", "dep 2", "dep 3"]);
}

#[test]
fn test_ordered_spec_matches_direct_lookup() {
    let catalog = three_keyed().build();

    let via_spec = catalog.get::<Ordered<dyn Dependency>>().unwrap();
    let direct = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&via_spec), names(&direct));
}

#[test]
fn test_computed_keys_resolve_by_selector() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_provider::<dyn Dependency, Named<0>, _>(
            named::<0>("dep 3").order_by_key::<dyn Dependency, _, _>(by_name),
        )
        .add_provider::<dyn Dependency, Named<1>, _>(
            named::<1>("dep 1").order_by_key::<dyn Dependency, _, _>(by_name),
        )
        .add_provider::<dyn Dependency, Named<2>, _>(
            named::<2>("dep 2").order_by_key::<dyn Dependency, _, _>(by_name),
        );
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["dep 1", "dep 2", "dep 3"]);
}

#[test]
fn test_unkeyed_providers_are_excluded() {
    let mut builder = CatalogBuilder::new();
    provide::<0>(&mut builder, "b", 2);
    provide_unkeyed::<1>(&mut builder, "x");
    provide::<2>(&mut builder, "a", 1);
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["a", "b"]);
    assert_eq!(catalog.get::<AllOf<dyn Dependency>>().unwrap().len(), 3);
}

#[test]
fn test_unkeyed_providers_are_never_built() {
    let mut builder = CatalogBuilder::new();
    builder.add_provider::<dyn Dependency, Broken, _>(BrokenBuilder::new());
    provide::<0>(&mut builder, "only", 1);
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["only"]);
}

#[test]
fn test_provider_failure_surfaces_unchanged() {
    let mut builder = CatalogBuilder::new();
    provide::<0>(&mut builder, "fine", 1);
    builder.add_provider::<dyn Dependency, Broken, _>(
        BrokenBuilder::new().order_by::<dyn Dependency>(2),
    );
    let catalog = builder.build();

    let result = catalog.get_ordered::<dyn Dependency>();
    assert!(matches!(
        result,
        Err(InjectionError::Unregistered(ref err)) if err.dep_type.name.contains("Missing")
    ));
}

#[test]
fn test_zero_providers_yield_empty_sequence() {
    let mut builder = CatalogBuilder::new();
    builder.add_ordered::<dyn Dependency>();
    let catalog = builder.build();

    assert!(catalog.get_one::<Deps>().unwrap().is_empty());
    assert!(
        CatalogBuilder::new()
            .build()
            .get_ordered::<dyn Dependency>()
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_ties_keep_binding_order() {
    let mut builder = CatalogBuilder::new();
    provide::<0>(&mut builder, "first", 1);
    provide::<1>(&mut builder, "second", 1);
    provide::<2>(&mut builder, "zero", 0);
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["zero", "first", "second"]);
}

#[test]
fn test_mixed_numeric_keys_sort_by_magnitude() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_provider::<dyn Dependency, Named<0>, _>(
            named::<0>("max").order_by::<dyn Dependency>(u64::MAX),
        )
        .add_provider::<dyn Dependency, Named<1>, _>(
            named::<1>("two").order_by::<dyn Dependency>(2),
        )
        .add_provider::<dyn Dependency, Named<2>, _>(
            named::<2>("max-1").order_by::<dyn Dependency>(u64::MAX - 1),
        )
        .add_provider::<dyn Dependency, Named<3>, _>(
            named::<3>("one and a half").order_by::<dyn Dependency>(1.5),
        );
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["one and a half", "two", "max-1", "max"]);
}

#[test]
fn test_outer_key_hides_inner_key() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_provider::<dyn Dependency, Named<0>, _>(
            named::<0>("rekeyed")
                .order_by::<dyn Dependency>(1)
                .order_by::<dyn Dependency>(5),
        )
        .add_provider::<dyn Dependency, Named<1>, _>(
            named::<1>("through metadata")
                .order_by::<dyn Dependency>(9)
                .with_metadata(AdditionalMetadata { data: 0 })
                .order_by::<dyn Dependency>(0),
        );
    provide::<2>(&mut builder, "middle", 3);
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["through metadata", "middle", "rekeyed"]);
}

#[test]
fn test_key_for_another_interface_is_ignored() {
    trait Other: Send + Sync {}
    impl<const SLOT: usize> Other for Named<SLOT> {}

    let mut builder = CatalogBuilder::new();
    builder.add_provider::<dyn Dependency, Named<0>, _>(
        named::<0>("other key").order_by::<dyn Other>(1),
    );
    provide::<1>(&mut builder, "own key", 2);
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    assert_eq!(names(&deps), vec!["own key"]);
}

#[test]
fn test_consumer_receives_ordered_dependencies() {
    let mut builder = three_keyed();
    builder.add_ordered::<dyn Dependency>().add::<Consumer>();
    let catalog = builder.build();

    let consumer = catalog.get_one::<Consumer>().unwrap();
    assert_eq!(
        names(&consumer.dependencies),
        vec!["dep 1", "dep 2", "dep 3"]
    );
}

#[test]
fn test_using_ordering_is_local_to_the_consumer() {
    let mut builder = three_keyed();
    builder.add_builder::<_, Consumer>(ConsumerBuilder::new().using_ordering::<dyn Dependency>());
    assert!(!builder.is_bound::<Deps>());
    assert!(builder.validate().is_ok());
    let catalog = builder.build();

    let consumer = catalog.get_one::<Consumer>().unwrap();
    assert_eq!(
        names(&consumer.dependencies),
        vec!["dep 1", "dep 2", "dep 3"]
    );
    assert!(matches!(
        catalog.get_one::<Deps>(),
        Err(InjectionError::Unregistered(_))
    ));
}

#[test]
fn test_using_ordering_defers_to_catalog_provider() {
    let explicit: Arc<dyn Dependency> = named::<9>("explicit");
    let mut builder = three_keyed();
    builder
        .add_value(OrderedSequence::assume_ordered(vec![explicit]))
        .add_builder::<_, Consumer>(ConsumerBuilder::new().using_ordering::<dyn Dependency>());
    let catalog = builder.build();

    let consumer = catalog.get_one::<Consumer>().unwrap();
    assert_eq!(names(&consumer.dependencies), vec!["explicit"]);
}

#[test]
fn test_consumer_without_ordering_is_unregistered() {
    let mut builder = three_keyed();
    builder.add::<Consumer>();
    assert!(builder.validate().is_err());
    let catalog = builder.build();

    assert!(matches!(
        catalog.get_one::<Consumer>(),
        Err(InjectionError::Unregistered(_))
    ));
}

#[test]
fn test_tagged_resolution_pairs_metadata() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_provider::<dyn Dependency, Named<0>, _>(
            named::<0>("b")
                .order_by::<dyn Dependency>(2)
                .with_metadata(AdditionalMetadata { data: 2 }),
        )
        .add_provider::<dyn Dependency, Annotated, _>(
            AnnotatedBuilder::new().order_by::<dyn Dependency>(0),
        )
        .add_provider::<dyn Dependency, Named<1>, _>(
            named::<1>("a")
                .with_metadata(AdditionalMetadata { data: 1 })
                .order_by::<dyn Dependency>(1),
        );
    let catalog = builder.build();

    let tagged = catalog
        .get_ordered_tagged::<dyn Dependency, AdditionalMetadata>()
        .unwrap();
    assert_eq!(tagged_names(&tagged), vec!["annotated", "a", "b"]);
    let data: Vec<i32> = tagged.iter().map(|t| t.metadata().data).collect();
    assert_eq!(data, vec![7, 1, 2]);
}

#[test]
fn test_tagged_consumer() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_provider::<dyn Dependency, Annotated, _>(
            AnnotatedBuilder::new().order_by::<dyn Dependency>(1),
        )
        .add_ordered_tagged::<dyn Dependency, AdditionalMetadata>()
        .add::<TaggedConsumer>();
    let catalog = builder.build();

    let consumer = catalog.get_one::<TaggedConsumer>().unwrap();
    assert_eq!(tagged_names(&consumer.dependencies), vec!["annotated"]);
    assert_eq!(
        consumer.dependencies.first().map(|t| t.metadata().clone()),
        Some(AdditionalMetadata { data: 7 })
    );
}

#[test]
fn test_tagged_resolution_requires_metadata_on_keyed_providers() {
    let mut builder = CatalogBuilder::new();
    provide::<0>(&mut builder, "untagged", 1);
    let catalog = builder.build();

    let result = catalog.get_ordered_tagged::<dyn Dependency, AdditionalMetadata>();
    assert!(matches!(
        result,
        Err(InjectionError::Unregistered(ref err))
            if err.dep_type.name.contains("AdditionalMetadata")
    ));
}

#[test]
fn test_add_ordered_twice_keeps_one_provider() {
    let mut builder = three_keyed();
    builder
        .add_ordered::<dyn Dependency>()
        .add_ordered::<dyn Dependency>();
    let catalog = builder.build();

    assert_eq!(catalog.builders_for::<Deps>().count(), 1);
    let deps = catalog.get_one::<Deps>().unwrap();
    assert_eq!(names(&deps), vec!["dep 1", "dep 2", "dep 3"]);
}

#[test]
fn test_explicit_sequence_registration_wins() {
    let explicit: Arc<dyn Dependency> = named::<9>("explicit");
    let mut builder = three_keyed();
    builder
        .add_value(OrderedSequence::assume_ordered(vec![explicit]))
        .add_ordered::<dyn Dependency>();
    let catalog = builder.build();

    assert_eq!(names(&catalog.get_one::<Deps>().unwrap()), vec!["explicit"]);
    assert_eq!(
        names(&catalog.get_ordered::<dyn Dependency>().unwrap()),
        vec!["explicit"]
    );
}

#[test]
fn test_synthesized_provider_matches_direct_resolution() {
    let catalog = ordered_catalog();

    let synthesized = catalog.get_one::<Deps>().unwrap();
    let direct =
        resolve_ordered::<dyn Dependency>(&catalog, &InjectionContext::new_root()).unwrap();
    assert_eq!(names(&synthesized), names(&direct));
}

#[test]
fn test_repeated_resolution_is_stable() {
    let catalog = ordered_catalog();

    let first = catalog.get_one::<Deps>().unwrap();
    let second = catalog.get_one::<Deps>().unwrap();
    assert_eq!(names(&first), names(&second));
}

#[test]
fn test_resort_by_producing_key_is_identity() {
    let mut builder = CatalogBuilder::new();
    builder
        .add_provider::<dyn Dependency, Named<0>, _>(
            named::<0>("c").order_by_key::<dyn Dependency, _, _>(by_name),
        )
        .add_provider::<dyn Dependency, Named<1>, _>(
            named::<1>("a").order_by_key::<dyn Dependency, _, _>(by_name),
        )
        .add_provider::<dyn Dependency, Named<2>, _>(
            named::<2>("b").order_by_key::<dyn Dependency, _, _>(by_name),
        );
    let catalog = builder.build();

    let deps = catalog.get_ordered::<dyn Dependency>().unwrap();
    let resorted = deps.order_by(|d| d.name());
    assert_eq!(names(&deps), vec!["a", "b", "c"]);
    assert_eq!(names(&resorted), names(&deps));
}

#[test]
fn test_chained_catalog_sees_added_providers() {
    let parent = ordered_catalog();

    let mut child = parent.builder_chained();
    provide::<7>(&mut child, "dep 0", 0);
    let child = child.build();

    let deps = child.get_one::<Deps>().unwrap();
    assert_eq!(names(&deps), vec!["dep 0", "dep 1", "dep 2", "dep 3"]);
    assert_eq!(names(&parent.get_one::<Deps>().unwrap()).len(), 3);
}

#[test]
fn test_chained_ties_put_local_providers_first() {
    let parent = ordered_catalog();

    let mut child = parent.builder_chained();
    provide::<7>(&mut child, "local 2", 2);
    let child = child.build();

    let deps = child.get_one::<Deps>().unwrap();
    assert_eq!(names(&deps), vec!["dep 1", "local 2", "dep 2", "dep 3"]);
}

#[test]
fn test_get_ordered_with_adds_providers_for_one_resolution() {
    let catalog = three_keyed().build();

    let deps = catalog
        .get_ordered_with::<dyn Dependency, _>(|builder| provide::<7>(builder, "dep 4", 4))
        .unwrap();
    assert_eq!(names(&deps), vec!["dep 1", "dep 2", "dep 3", "dep 4"]);
    assert_eq!(catalog.get_ordered::<dyn Dependency>().unwrap().len(), 3);
}

#[test]
fn test_concurrent_resolutions_agree() {
    let catalog = ordered_catalog();

    let results: Vec<Vec<String>> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| names(&catalog.get_one::<Deps>().unwrap())))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    for result in results {
        assert_eq!(result, vec!["dep 1", "dep 2", "dep 3"]);
    }
}

#[test]
#[should_panic(expected = "selector failed")]
fn test_panicking_selector_propagates() {
    let mut builder = CatalogBuilder::new();
    builder.add_provider::<dyn Dependency, Named<0>, _>(
        named::<0>("boom")
            .order_by_key::<dyn Dependency, String, _>(|_| panic!("selector failed")),
    );
    let catalog = builder.build();

    let _ = catalog.get_ordered::<dyn Dependency>();
}
