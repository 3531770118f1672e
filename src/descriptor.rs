use crate::Lazy;
use runtime_injector::{
    constant, Injector, InjectorBuilder, IntoSingleton, IntoTransient, Module,
    Service, ServiceFactory, ServiceInfo,
};
use std::fmt::{Debug, Formatter};

/// The declared lifetime of a service.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum ServiceLifetime {
    /// A single instance is created on first request and shared by the
    /// container and every scope.
    Singleton,

    /// One instance is created per lifetime scope. The top-level provider
    /// acts as the root scope.
    Scoped,

    /// A new instance is created for each request.
    Transient,
}

type ProvideFn = Box<dyn FnOnce(&mut InjectorBuilder) + Send>;
type ProvideDefaultsFn = Box<dyn FnOnce(&mut Module) + Send>;

/// A host-supplied declaration of a single service: its type, the factory
/// that creates it, and its lifetime.
///
/// Descriptors are created through the typed constructors, collected in a
/// [`ServiceCollection`](crate::ServiceCollection), and translated into
/// container registrations when the collection is populated into a
/// [`ContainerBuilder`](crate::ContainerBuilder). The service type is only
/// statically known here, so a descriptor also captures its convenience
/// registrations for the default module at construction.
pub struct ServiceDescriptor {
    service_info: ServiceInfo,
    lifetime: ServiceLifetime,
    provide: ProvideFn,
    provide_defaults: ProvideDefaultsFn,
}

impl ServiceDescriptor {
    /// Declares a singleton service created by a service factory.
    ///
    /// ## Example
    ///
    /// ```
    /// use runtime_injector_hosting::{ServiceDescriptor, ServiceLifetime};
    ///
    /// #[derive(Default)]
    /// struct Foo;
    ///
    /// let descriptor = ServiceDescriptor::singleton(Foo::default);
    /// assert_eq!(ServiceLifetime::Singleton, descriptor.lifetime());
    /// ```
    #[must_use]
    pub fn singleton<D, R, F>(factory: F) -> Self
    where
        D: Service,
        R: Service,
        F: ServiceFactory<D, Result = R> + Service,
    {
        ServiceDescriptor {
            service_info: ServiceInfo::of::<R>(),
            lifetime: ServiceLifetime::Singleton,
            provide: Box::new(move |builder: &mut InjectorBuilder| {
                builder.provide(factory.singleton());
            }),
            provide_defaults: Box::new(provide_lazy::<R>),
        }
    }

    /// Declares a scoped service created by a service factory.
    ///
    /// The container provides scoped services transiently; the lifetime scope
    /// resolving the service caches the instance for its own lifetime.
    #[must_use]
    pub fn scoped<D, R, F>(factory: F) -> Self
    where
        D: Service,
        R: Service,
        F: ServiceFactory<D, Result = R> + Service,
    {
        ServiceDescriptor {
            service_info: ServiceInfo::of::<R>(),
            lifetime: ServiceLifetime::Scoped,
            provide: Box::new(move |builder: &mut InjectorBuilder| {
                builder.provide(factory.transient());
            }),
            provide_defaults: Box::new(provide_lazy::<R>),
        }
    }

    /// Declares a transient service created by a service factory.
    #[must_use]
    pub fn transient<D, R, F>(factory: F) -> Self
    where
        D: Service,
        R: Service,
        F: ServiceFactory<D, Result = R> + Service,
    {
        ServiceDescriptor {
            service_info: ServiceInfo::of::<R>(),
            lifetime: ServiceLifetime::Transient,
            provide: Box::new(move |builder: &mut InjectorBuilder| {
                builder.provide(factory.transient());
            }),
            provide_defaults: Box::new(provide_lazy::<R>),
        }
    }

    /// Declares a service from an existing instance. The instance is shared
    /// like a singleton, except that it is created ahead of time rather than
    /// on first request.
    #[must_use]
    pub fn instance<R>(value: R) -> Self
    where
        R: Service,
    {
        ServiceDescriptor {
            service_info: ServiceInfo::of::<R>(),
            lifetime: ServiceLifetime::Singleton,
            provide: Box::new(move |builder: &mut InjectorBuilder| {
                builder.provide(constant(value));
            }),
            provide_defaults: Box::new(provide_lazy::<R>),
        }
    }

    /// The type of service this descriptor declares.
    #[must_use]
    pub fn service_info(&self) -> ServiceInfo {
        self.service_info
    }

    /// The declared lifetime of the service.
    #[must_use]
    pub fn lifetime(&self) -> ServiceLifetime {
        self.lifetime
    }

    /// Translates this descriptor, adding its registration to the builder and
    /// its convenience registrations to the default module.
    pub(crate) fn register_into(
        self,
        builder: &mut InjectorBuilder,
        defaults: &mut Module,
    ) {
        (self.provide)(builder);
        (self.provide_defaults)(defaults);
    }
}

impl Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("service", &self.service_info.name())
            .field("lifetime", &self.lifetime)
            .finish()
    }
}

/// Registers the convenience wrappers for a service type into the default
/// module. Each descriptor's service can also be requested lazily.
fn provide_lazy<R: Service>(module: &mut Module) {
    let create: fn(Injector) -> Lazy<R> = Lazy::new;
    module.provide(create.transient());
}
