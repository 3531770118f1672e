/// Flags controlling how a [`ContainerBuilder`](crate::ContainerBuilder) is
/// finalized into a container.
///
/// The default options enable every container convenience: building adds the
/// accumulated default module, so descriptor-registered services can also be
/// requested through wrappers like [`Lazy<T>`](crate::Lazy). Each flag is an
/// independent toggle and the set is forwarded opaquely to the build step.
///
/// ## Example
///
/// ```
/// use runtime_injector_hosting::ContainerBuildOptions;
///
/// let options = ContainerBuildOptions::new().exclude_default_modules();
/// assert!(options.excludes_default_modules());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
pub struct ContainerBuildOptions {
    exclude_default_modules: bool,
}

impl ContainerBuildOptions {
    /// Creates the default build options, with all default modules enabled.
    #[must_use]
    pub fn new() -> Self {
        ContainerBuildOptions::default()
    }

    /// Excludes the default module from the build. Services registered
    /// through descriptors remain resolvable, but their convenience wrappers
    /// are not registered.
    #[must_use]
    pub fn exclude_default_modules(mut self) -> Self {
        self.exclude_default_modules = true;
        self
    }

    /// Whether the default module is excluded from the build.
    #[must_use]
    pub fn excludes_default_modules(&self) -> bool {
        self.exclude_default_modules
    }
}
