use runtime_injector::{InjectResult, Injector, Request, Svc};
use std::fmt::{Debug, Formatter};
use std::sync::RwLock;

/// A deferred handle to a registered service.
///
/// Requesting a `Lazy<T>` never activates `T`. The service is resolved from
/// the container on the first call to [`get()`](Lazy::get) and the same
/// service pointer is returned for every later call, even when the underlying
/// registration is transient.
///
/// Lazy handles are part of the container's default module: building a
/// provider with default options registers a `Lazy<T>` for every service type
/// declared by a descriptor. Excluding default modules through
/// [`ContainerBuildOptions`](crate::ContainerBuildOptions) suppresses them.
///
/// ## Example
///
/// ```
/// use runtime_injector_hosting::{
///     InjectorProviderFactory, Lazy, ServiceCollection, Svc,
/// };
///
/// #[derive(Default)]
/// struct Expensive;
///
/// let mut services = ServiceCollection::new();
/// services.add_singleton(Expensive::default);
///
/// let factory = InjectorProviderFactory::new();
/// let mut container_builder = factory.create_builder(services);
/// let provider = factory
///     .create_service_provider(&mut container_builder)
///     .unwrap();
///
/// let lazy: Svc<Lazy<Expensive>> = provider.get_required_service().unwrap();
/// assert!(!lazy.is_resolved());
///
/// let _expensive = lazy.get().unwrap();
/// assert!(lazy.is_resolved());
/// ```
pub struct Lazy<T: ?Sized> {
    injector: Injector,
    value: RwLock<Option<Svc<T>>>,
}

impl<T: ?Sized> Lazy<T> {
    /// Creates a lazy handle resolving its service from the given container.
    #[must_use]
    pub fn new(injector: Injector) -> Self {
        Lazy {
            injector,
            value: RwLock::default(),
        }
    }

    /// Resolves the service, reusing the instance resolved by an earlier
    /// call if there was one.
    pub fn get(&self) -> InjectResult<Svc<T>>
    where
        Svc<T>: Request,
    {
        // Fast path - the service was already resolved
        let stored = self.value.read().unwrap();
        if let Some(value) = stored.as_ref() {
            return Ok(value.clone());
        }
        drop(stored);

        // Slow path - resolve the service while holding the lock
        let mut stored = self.value.write().unwrap();
        match &mut *stored {
            Some(value) => Ok(value.clone()),
            stored @ None => {
                let value: Svc<T> = self.injector.get()?;
                Ok(stored.insert(value).clone())
            }
        }
    }

    /// Whether the service has been resolved by this handle yet.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.value.read().unwrap().is_some()
    }
}

impl<T: ?Sized> Debug for Lazy<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lazy")
            .field("service", &std::any::type_name::<T>())
            .field("resolved", &self.is_resolved())
            .finish()
    }
}
