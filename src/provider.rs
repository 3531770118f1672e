use crate::{LifetimeScope, ServiceScope};
use runtime_injector::{
    InjectError, InjectResult, Injector, Request, Service, ServiceInfo, Svc,
};
use std::collections::HashSet;
use tracing::trace;

/// A built container exposed through the host's service provider contract.
///
/// A provider resolves services by type, creates child lifetime scopes, and
/// exposes its own node in the scope tree. The provider returned by
/// [`InjectorProviderFactory::create_service_provider`] is rooted at the
/// container itself; providers obtained from a [`ServiceScope`] are rooted at
/// that scope.
///
/// Cloning a provider is cheap and yields a handle to the same scope.
///
/// [`InjectorProviderFactory::create_service_provider`]:
/// crate::InjectorProviderFactory::create_service_provider
#[derive(Clone, Debug)]
pub struct InjectorServiceProvider {
    scope: Svc<LifetimeScope>,
}

impl InjectorServiceProvider {
    /// Creates a top-level provider rooted at the container itself.
    pub(crate) fn root(
        injector: Injector,
        scoped: HashSet<ServiceInfo>,
    ) -> Self {
        InjectorServiceProvider {
            scope: LifetimeScope::root(injector, scoped),
        }
    }

    /// Creates a provider bound to an existing scope.
    pub(crate) fn from_scope(scope: Svc<LifetimeScope>) -> Self {
        InjectorServiceProvider { scope }
    }

    /// Gets an instance of a service, or [`None`] when no provider is
    /// registered for it.
    ///
    /// Only a missing registration maps to [`None`]; any other failure the
    /// container reports (a missing dependency or a dependency cycle, for
    /// instance) is surfaced unchanged.
    pub fn get_service<R>(&self) -> InjectResult<Option<Svc<R>>>
    where
        R: ?Sized + Service,
        Svc<R>: Request,
    {
        match self.scope.resolve() {
            Ok(service) => Ok(Some(service)),
            Err(InjectError::MissingProvider { .. }) => Ok(None),
            Err(error) => Err(error),
        }
    }

    /// Gets an instance of a service, failing if no provider is registered
    /// for it.
    pub fn get_required_service<R>(&self) -> InjectResult<Svc<R>>
    where
        R: ?Sized + Service,
        Svc<R>: Request,
    {
        self.scope.resolve()
    }

    /// Creates a child lifetime scope. The new scope records this provider's
    /// scope as its parent.
    #[must_use]
    pub fn create_scope(&self) -> ServiceScope {
        trace!(root = self.scope.is_root(), "creating child lifetime scope");
        ServiceScope::new(&self.scope)
    }

    /// This provider's own node in the scope tree. For a top-level provider
    /// this is the root of the tree; for a provider obtained from a
    /// [`ServiceScope`] it is that scope's node, whose
    /// [`parent()`](LifetimeScope::parent) is the creating scope.
    #[must_use]
    pub fn root_scope(&self) -> &Svc<LifetimeScope> {
        &self.scope
    }

    /// The underlying container.
    #[must_use]
    pub fn injector(&self) -> &Injector {
        self.scope.injector()
    }
}
