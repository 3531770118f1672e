use runtime_injector_hosting::{
    constant, ContainerBuildOptions, ContainerBuilder, HostingError,
    InjectError, InjectorProviderFactory, Lazy, ServiceCollection,
    ServiceInfo, Svc,
};

#[derive(Default)]
struct Svc1;

struct Svc2 {
    pub dep1: Svc<Svc1>,
}

impl Svc2 {
    pub fn new(dep1: Svc<Svc1>) -> Self {
        Svc2 { dep1 }
    }
}

#[test]
fn create_builder_returns_usable_builder() {
    let factory = InjectorProviderFactory::new();

    let container_builder = factory.create_builder(ServiceCollection::new());

    assert!(!container_builder.is_consumed());
}

#[test]
fn create_builder_runs_configuration_callback() {
    let factory = InjectorProviderFactory::new().configure(|builder| {
        builder.provide(constant(String::from("Foo")));
    });

    let mut container_builder = factory.create_builder(ServiceCollection::new());
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let value: Svc<String> = provider.get_required_service().unwrap();
    assert_eq!("Foo", value.as_str());
}

#[test]
fn create_builder_allows_missing_configuration_callback() {
    let factory = InjectorProviderFactory::new();

    let mut container_builder = factory.create_builder(ServiceCollection::new());

    assert!(factory
        .create_service_provider(&mut container_builder)
        .is_ok());
}

#[test]
fn create_builder_populates_services() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_transient(Svc1::default);

    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    assert!(provider.get_service::<Svc1>().unwrap().is_some());
}

#[test]
fn create_service_provider_builds_using_container_builder() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_transient(Svc1::default);
    let mut container_builder = factory.create_builder(services);

    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let _service: Svc<Svc1> = provider.get_required_service().unwrap();
}

#[test]
fn create_service_provider_rejects_consumed_builder() {
    let factory = InjectorProviderFactory::new();
    let mut container_builder = factory.create_builder(ServiceCollection::new());
    let _provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    match factory.create_service_provider(&mut container_builder) {
        Err(HostingError::BuilderConsumed { parameter }) => {
            assert_eq!("container_builder", parameter);
        }
        Err(_) => unreachable!("unexpected error variant"),
        Ok(_) => unreachable!("a consumed builder must be rejected"),
    }
}

#[test]
fn create_service_provider_accepts_plain_container_builder() {
    let factory = InjectorProviderFactory::new();
    let mut container_builder = ContainerBuilder::new();

    assert!(factory
        .create_service_provider(&mut container_builder)
        .is_ok());
}

#[test]
fn create_service_provider_uses_default_build_options_when_not_provided() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_instance(String::from("Foo"));
    let mut container_builder = factory.create_builder(services);

    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let lazy = provider
        .get_service::<Lazy<String>>()
        .unwrap()
        .expect("default build options register lazy handles");
    let value = lazy.get().unwrap();
    assert_eq!("Foo", value.as_str());
}

#[test]
fn create_service_provider_uses_build_options_when_provided() {
    let options = ContainerBuildOptions::new().exclude_default_modules();
    let factory = InjectorProviderFactory::with_build_options(options);
    let mut services = ServiceCollection::new();
    services.add_instance(String::from("Foo"));
    let mut container_builder = factory.create_builder(services);

    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    assert!(provider.get_service::<Lazy<String>>().unwrap().is_none());
    assert!(provider.get_service::<String>().unwrap().is_some());
}

#[test]
fn can_provide_build_options_and_configuration_callback() {
    let factory = InjectorProviderFactory::with_build_options(
        ContainerBuildOptions::new().exclude_default_modules(),
    )
    .configure(|builder| {
        builder.provide(constant(String::from("Foo")));
    });
    let mut container_builder = factory.create_builder(ServiceCollection::new());

    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    assert!(provider.get_service::<String>().unwrap().is_some());
    assert!(provider.get_service::<Lazy<String>>().unwrap().is_none());
}

#[test]
fn created_scope_records_creator_as_parent() {
    let factory = InjectorProviderFactory::new();
    let mut container_builder = factory.create_builder(ServiceCollection::new());
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let scope = provider.create_scope();
    let sub_scope = scope.service_provider().create_scope();

    assert!(Svc::ptr_eq(
        scope.service_provider().root_scope(),
        sub_scope
            .service_provider()
            .root_scope()
            .parent()
            .expect("a nested scope has a parent"),
    ));
}

#[test]
fn top_level_provider_is_rooted_at_container() {
    let factory = InjectorProviderFactory::new();
    let mut container_builder = factory.create_builder(ServiceCollection::new());
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    assert!(provider.root_scope().is_root());
    assert!(provider.root_scope().parent().is_none());

    let scope = provider.create_scope();
    assert!(!scope.service_provider().root_scope().is_root());
    assert!(Svc::ptr_eq(
        provider.root_scope(),
        scope
            .service_provider()
            .root_scope()
            .parent()
            .expect("a first-level scope has a parent"),
    ));
}

#[test]
fn singleton_services_are_shared_across_scopes() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_singleton(Svc1::default);
    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let from_root: Svc<Svc1> = provider.get_required_service().unwrap();
    let scope = provider.create_scope();
    let from_scope: Svc<Svc1> = scope
        .service_provider()
        .get_required_service()
        .unwrap();

    assert!(Svc::ptr_eq(&from_root, &from_scope));
}

#[test]
fn transient_services_are_unique_per_request() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_transient(Svc1::default);
    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let first: Svc<Svc1> = provider.get_required_service().unwrap();
    let second: Svc<Svc1> = provider.get_required_service().unwrap();

    assert!(!Svc::ptr_eq(&first, &second));
}

#[test]
fn scoped_services_are_cached_per_scope() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_scoped(Svc1::default);
    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let scope = provider.create_scope();
    let first: Svc<Svc1> = scope
        .service_provider()
        .get_required_service()
        .unwrap();
    let second: Svc<Svc1> = scope
        .service_provider()
        .get_required_service()
        .unwrap();
    assert!(Svc::ptr_eq(&first, &second));

    let sibling = provider.create_scope();
    let from_sibling: Svc<Svc1> = sibling
        .service_provider()
        .get_required_service()
        .unwrap();
    assert!(!Svc::ptr_eq(&first, &from_sibling));

    // The top-level provider acts as the root scope, with its own instance.
    let from_root: Svc<Svc1> = provider.get_required_service().unwrap();
    assert!(!Svc::ptr_eq(&first, &from_root));
    let from_root_again: Svc<Svc1> = provider.get_required_service().unwrap();
    assert!(Svc::ptr_eq(&from_root, &from_root_again));
}

#[test]
fn get_service_returns_none_for_unregistered_service() {
    let factory = InjectorProviderFactory::new();
    let mut container_builder = factory.create_builder(ServiceCollection::new());
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    assert!(provider.get_service::<Svc1>().unwrap().is_none());
}

#[test]
fn get_required_service_fails_for_unregistered_service() {
    let factory = InjectorProviderFactory::new();
    let mut container_builder = factory.create_builder(ServiceCollection::new());
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    match provider.get_required_service::<Svc1>() {
        Err(InjectError::MissingProvider { service_info })
            if service_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => unreachable!("no provider is registered for Svc1"),
    }
}

#[test]
fn missing_dependency_is_an_error_not_an_absent_service() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_transient(Svc2::new);
    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    match provider.get_service::<Svc2>() {
        Err(InjectError::MissingDependency {
            dependency_info, ..
        }) if dependency_info == ServiceInfo::of::<Svc1>() => {}
        Err(error) => Err(error).unwrap(),
        Ok(_) => unreachable!("Svc2's dependency has no provider"),
    }
}

#[test]
fn descriptors_and_configuration_callback_compose() {
    let factory = InjectorProviderFactory::new().configure(|builder| {
        builder.provide(constant(String::from("Foo")));
    });
    let mut services = ServiceCollection::new();
    services.add_singleton(Svc1::default).add_transient(Svc2::new);
    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let value: Svc<String> = provider.get_required_service().unwrap();
    assert_eq!("Foo", value.as_str());

    let service: Svc<Svc2> = provider.get_required_service().unwrap();
    let dependency: Svc<Svc1> = provider.get_required_service().unwrap();
    assert!(Svc::ptr_eq(&service.dep1, &dependency));
}

#[test]
fn lazy_handles_share_the_singleton_instance() {
    let factory = InjectorProviderFactory::new();
    let mut services = ServiceCollection::new();
    services.add_singleton(Svc1::default);
    let mut container_builder = factory.create_builder(services);
    let provider = factory
        .create_service_provider(&mut container_builder)
        .unwrap();

    let lazy = provider
        .get_service::<Lazy<Svc1>>()
        .unwrap()
        .expect("default build options register lazy handles");
    assert!(!lazy.is_resolved());

    let resolved = lazy.get().unwrap();
    let direct: Svc<Svc1> = provider.get_required_service().unwrap();
    assert!(Svc::ptr_eq(&resolved, &direct));
}
