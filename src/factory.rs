use crate::{
    ContainerBuilder, ContainerBuildOptions, HostingError,
    InjectorServiceProvider, ServiceCollection,
};
use runtime_injector::InjectorBuilder;
use tracing::debug;

/// A configuration callback invoked with the inner [`InjectorBuilder`] after
/// a service collection has been translated.
pub type ConfigureContainer = Box<dyn Fn(&mut InjectorBuilder) + Send + Sync>;

/// Creates container builders from host service collections and finalizes
/// them into service providers.
///
/// The factory itself is stateless between calls: it only carries the build
/// options and an optional configuration callback, applied to every builder
/// it creates.
///
/// ## Example
///
/// ```
/// use runtime_injector_hosting::{
///     constant, ContainerBuildOptions, InjectorProviderFactory,
///     ServiceCollection, Svc,
/// };
///
/// let factory = InjectorProviderFactory::with_build_options(
///     ContainerBuildOptions::new().exclude_default_modules(),
/// )
/// .configure(|builder| {
///     builder.provide(constant(String::from("Foo")));
/// });
///
/// let mut container_builder =
///     factory.create_builder(ServiceCollection::new());
/// let provider = factory
///     .create_service_provider(&mut container_builder)
///     .unwrap();
///
/// let greeting: Svc<String> = provider.get_required_service().unwrap();
/// assert_eq!("Foo", greeting.as_str());
/// ```
#[derive(Default)]
pub struct InjectorProviderFactory {
    options: ContainerBuildOptions,
    configure: Option<ConfigureContainer>,
}

impl InjectorProviderFactory {
    /// Creates a factory using the container's default build options.
    #[must_use]
    pub fn new() -> Self {
        InjectorProviderFactory::default()
    }

    /// Creates a factory using the given build options.
    #[must_use]
    pub fn with_build_options(options: ContainerBuildOptions) -> Self {
        InjectorProviderFactory {
            options,
            configure: None,
        }
    }

    /// Sets a configuration callback. The callback is invoked exactly once
    /// per created builder, after the service collection has been translated,
    /// with mutable access to the inner [`InjectorBuilder`].
    #[must_use]
    pub fn configure<F>(mut self, configure: F) -> Self
    where
        F: Fn(&mut InjectorBuilder) + Send + Sync + 'static,
    {
        self.configure = Some(Box::new(configure));
        self
    }

    /// Creates a container builder pre-populated with the given services.
    ///
    /// The returned builder is always usable, even for an empty collection.
    #[must_use]
    pub fn create_builder(
        &self,
        services: ServiceCollection,
    ) -> ContainerBuilder {
        let mut container_builder = ContainerBuilder::new();
        container_builder.populate(services);
        if let Some(configure) = &self.configure {
            configure(container_builder.injector_builder_mut());
        }

        container_builder
    }

    /// Builds the container and wraps it in a service provider.
    ///
    /// The factory's build options decide whether the builder's default
    /// module is added before building. The builder is consumed; passing a
    /// builder that was already consumed is an argument error.
    pub fn create_service_provider(
        &self,
        container_builder: &mut ContainerBuilder,
    ) -> Result<InjectorServiceProvider, HostingError> {
        let (injector, scoped) = container_builder
            .finalize(self.options)
            .ok_or(HostingError::BuilderConsumed {
                parameter: "container_builder",
            })?;

        debug!(
            exclude_default_modules = self.options.excludes_default_modules(),
            scoped = scoped.len(),
            "built container"
        );
        Ok(InjectorServiceProvider::root(injector, scoped))
    }
}
