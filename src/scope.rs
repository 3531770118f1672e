use crate::InjectorServiceProvider;
use runtime_injector::{
    InjectError, InjectResult, Injector, Request, Service, ServiceInfo, Svc,
};
use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::fmt::{Debug, Formatter};
use std::sync::Mutex;
use tracing::trace;

/// A node in the tree of lifetime scopes rooted at the container.
///
/// Each scope holds an immutable reference to the scope that created it, a
/// handle to the container, and the instances of scoped services it has
/// resolved so far. Scopes are only ever created downward from an existing
/// scope, so the tree has no cycles. The top-level provider's scope wraps the
/// container itself and has no parent.
pub struct LifetimeScope {
    injector: Injector,
    scoped: Svc<HashSet<ServiceInfo>>,
    instances: Mutex<HashMap<ServiceInfo, Box<dyn Any + Send + Sync>>>,
    parent: Option<Svc<LifetimeScope>>,
}

impl LifetimeScope {
    /// Creates the root scope of a provider, wrapping the container itself.
    pub(crate) fn root(
        injector: Injector,
        scoped: HashSet<ServiceInfo>,
    ) -> Svc<Self> {
        Svc::new(LifetimeScope {
            injector,
            scoped: Svc::new(scoped),
            instances: Mutex::default(),
            parent: None,
        })
    }

    /// Creates a child of the given scope. The child shares the container and
    /// the scoped service registrations, but caches its own instances.
    pub(crate) fn child(parent: &Svc<LifetimeScope>) -> Svc<Self> {
        Svc::new(LifetimeScope {
            injector: parent.injector.clone(),
            scoped: parent.scoped.clone(),
            instances: Mutex::default(),
            parent: Some(parent.clone()),
        })
    }

    /// The scope this scope was created from, or [`None`] for the top-level
    /// provider's scope.
    #[must_use]
    pub fn parent(&self) -> Option<&Svc<LifetimeScope>> {
        self.parent.as_ref()
    }

    /// The underlying container.
    #[must_use]
    pub fn injector(&self) -> &Injector {
        &self.injector
    }

    /// Whether this scope is the root of the scope tree.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Resolves a service within this scope. Scoped services are cached per
    /// scope; everything else is the container's decision.
    pub(crate) fn resolve<R>(&self) -> InjectResult<Svc<R>>
    where
        R: ?Sized + Service,
        Svc<R>: Request,
    {
        let service_info = ServiceInfo::of::<R>();
        if !self.scoped.contains(&service_info) {
            return self.injector.get();
        }

        // Scoped service - reuse this scope's instance if there is one. The
        // lock stays held across activation; a scope holds at most one
        // instance of a scoped service.
        let mut instances = self.instances.lock().unwrap();
        if let Some(existing) = instances.get(&service_info) {
            return existing
                .downcast_ref::<Svc<R>>()
                .cloned()
                .ok_or(InjectError::InvalidProvider { service_info });
        }

        let created: Svc<R> = self.injector.get()?;
        trace!(service = service_info.name(), "caching scoped instance");
        instances.insert(service_info, Box::new(created.clone()));
        Ok(created)
    }
}

impl Debug for LifetimeScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LifetimeScope")
            .field("is_root", &self.is_root())
            .field("scoped_services", &self.scoped.len())
            .finish()
    }
}

/// A child lifetime scope created from a service provider.
///
/// The scope owns a provider rooted at a fresh node in the scope tree.
/// Dropping the scope releases the instances it cached; the parent scope and
/// its instances are unaffected.
#[derive(Debug)]
pub struct ServiceScope {
    provider: InjectorServiceProvider,
}

impl ServiceScope {
    pub(crate) fn new(parent: &Svc<LifetimeScope>) -> Self {
        ServiceScope {
            provider: InjectorServiceProvider::from_scope(LifetimeScope::child(
                parent,
            )),
        }
    }

    /// The provider bound to this scope. Services resolved through it use
    /// this scope for scoped lifetimes, and further child scopes created
    /// through it record this scope as their parent.
    #[must_use]
    pub fn service_provider(&self) -> &InjectorServiceProvider {
        &self.provider
    }
}
