use crate::{ServiceDescriptor, ServiceLifetime};
use runtime_injector::{Service, ServiceFactory};

/// An ordered collection of [`ServiceDescriptor`]s supplied by the host.
///
/// Collections are append-only accumulators. They are consumed when populated
/// into a [`ContainerBuilder`](crate::ContainerBuilder); nothing is registered
/// against the container until then.
///
/// ## Example
///
/// ```
/// use runtime_injector_hosting::ServiceCollection;
///
/// #[derive(Default)]
/// struct Foo;
/// struct Bar;
///
/// let mut services = ServiceCollection::new();
/// services
///     .add_singleton(Foo::default)
///     .add_transient(|| Bar);
///
/// assert_eq!(2, services.len());
/// ```
#[derive(Debug, Default)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
}

impl ServiceCollection {
    /// Creates an empty service collection.
    #[must_use]
    pub fn new() -> Self {
        ServiceCollection::default()
    }

    /// The number of descriptors in this collection.
    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether this collection contains no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Appends a descriptor to this collection.
    pub fn add(&mut self, descriptor: ServiceDescriptor) -> &mut Self {
        self.descriptors.push(descriptor);
        self
    }

    /// Appends a descriptor for a singleton service created by a service
    /// factory.
    pub fn add_singleton<D, R, F>(&mut self, factory: F) -> &mut Self
    where
        D: Service,
        R: Service,
        F: ServiceFactory<D, Result = R> + Service,
    {
        self.add(ServiceDescriptor::singleton(factory))
    }

    /// Appends a descriptor for a scoped service created by a service
    /// factory.
    pub fn add_scoped<D, R, F>(&mut self, factory: F) -> &mut Self
    where
        D: Service,
        R: Service,
        F: ServiceFactory<D, Result = R> + Service,
    {
        self.add(ServiceDescriptor::scoped(factory))
    }

    /// Appends a descriptor for a transient service created by a service
    /// factory.
    pub fn add_transient<D, R, F>(&mut self, factory: F) -> &mut Self
    where
        D: Service,
        R: Service,
        F: ServiceFactory<D, Result = R> + Service,
    {
        self.add(ServiceDescriptor::transient(factory))
    }

    /// Appends a descriptor for an existing instance of a service.
    pub fn add_instance<R>(&mut self, value: R) -> &mut Self
    where
        R: Service,
    {
        self.add(ServiceDescriptor::instance(value))
    }

    /// Iterates over the descriptors in this collection in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// The number of descriptors declaring the given lifetime.
    #[must_use]
    pub fn count_of(&self, lifetime: ServiceLifetime) -> usize {
        self.iter()
            .filter(|descriptor| descriptor.lifetime() == lifetime)
            .count()
    }
}

impl IntoIterator for ServiceCollection {
    type Item = ServiceDescriptor;
    type IntoIter = std::vec::IntoIter<ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Extend<ServiceDescriptor> for ServiceCollection {
    fn extend<T: IntoIterator<Item = ServiceDescriptor>>(&mut self, iter: T) {
        self.descriptors.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Foo;

    /// Descriptors keep their declared lifetime and service type.
    #[test]
    fn descriptors_keep_declared_metadata() {
        let mut services = ServiceCollection::new();
        services
            .add_singleton(Foo::default)
            .add_scoped(Foo::default)
            .add_transient(Foo::default)
            .add_instance(Foo);

        assert_eq!(4, services.len());
        assert_eq!(2, services.count_of(ServiceLifetime::Singleton));
        assert_eq!(1, services.count_of(ServiceLifetime::Scoped));
        assert_eq!(1, services.count_of(ServiceLifetime::Transient));
    }

    /// An empty collection reports itself as empty.
    #[test]
    fn empty_collection_is_empty() {
        let services = ServiceCollection::new();
        assert!(services.is_empty());
        assert_eq!(0, services.len());
    }
}
