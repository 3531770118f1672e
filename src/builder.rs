use crate::{ContainerBuildOptions, ServiceCollection, ServiceLifetime};
use runtime_injector::{Injector, InjectorBuilder, Module, ServiceInfo};
use std::collections::HashSet;
use tracing::{debug, trace};

/// A write-only accumulator of container registrations.
///
/// A container builder wraps the container's own [`InjectorBuilder`] together
/// with everything the hosting layer accumulates alongside it: the default
/// module of convenience registrations and the set of service types declared
/// scoped. Descriptors are translated into it with [`populate()`]; anything
/// else can be registered directly against the inner builder through
/// [`injector_builder_mut()`].
///
/// A builder is consumed at most once. Building it into a container takes the
/// inner builder, and a consumed builder is rejected by
/// [`create_service_provider()`] with an argument error.
///
/// [`populate()`]: ContainerBuilder::populate
/// [`injector_builder_mut()`]: ContainerBuilder::injector_builder_mut
/// [`create_service_provider()`]:
/// crate::InjectorProviderFactory::create_service_provider
pub struct ContainerBuilder {
    inner: Option<InjectorBuilder>,
    defaults: Module,
    scoped: HashSet<ServiceInfo>,
}

impl ContainerBuilder {
    /// Creates an empty container builder.
    #[must_use]
    pub fn new() -> Self {
        ContainerBuilder {
            inner: Some(Injector::builder()),
            defaults: Module::default(),
            scoped: HashSet::new(),
        }
    }

    /// Translates every descriptor in the collection into an equivalent
    /// container registration, consuming the collection.
    ///
    /// Scoped descriptors are additionally recorded so the provider can cache
    /// their instances per scope. Each descriptor's convenience registrations
    /// are accumulated into the default module, which is only added to the
    /// container if the build options allow it.
    ///
    /// # Panics
    ///
    /// Panics if this builder has already been consumed.
    pub fn populate(&mut self, services: ServiceCollection) -> &mut Self {
        debug!(
            services = services.len(),
            scoped = services.count_of(ServiceLifetime::Scoped),
            "populating container builder"
        );

        let inner = self
            .inner
            .as_mut()
            .expect("the container builder has already been consumed");
        for descriptor in services {
            trace!(
                service = descriptor.service_info().name(),
                lifetime = ?descriptor.lifetime(),
                "translating service descriptor"
            );

            if descriptor.lifetime() == ServiceLifetime::Scoped {
                self.scoped.insert(descriptor.service_info());
            }
            descriptor.register_into(inner, &mut self.defaults);
        }

        self
    }

    /// Mutably borrows the inner [`InjectorBuilder`] for registrations the
    /// descriptor model doesn't cover.
    ///
    /// # Panics
    ///
    /// Panics if this builder has already been consumed.
    pub fn injector_builder_mut(&mut self) -> &mut InjectorBuilder {
        self.inner
            .as_mut()
            .expect("the container builder has already been consumed")
    }

    /// Whether this builder has already been built into a container.
    #[must_use]
    pub fn is_consumed(&self) -> bool {
        self.inner.is_none()
    }

    /// Consumes the inner builder and builds the container, applying the
    /// given build options. Returns [`None`] if the builder was already
    /// consumed.
    pub(crate) fn finalize(
        &mut self,
        options: ContainerBuildOptions,
    ) -> Option<(Injector, HashSet<ServiceInfo>)> {
        let mut inner = self.inner.take()?;
        if !options.excludes_default_modules() {
            inner.add_module(std::mem::take(&mut self.defaults));
        }

        Some((inner.build(), std::mem::take(&mut self.scoped)))
    }
}

impl Default for ContainerBuilder {
    fn default() -> Self {
        ContainerBuilder::new()
    }
}
