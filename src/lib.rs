//! Host service provider integration for [`runtime_injector`].
//!
//! Host frameworks usually describe an application's services as a flat list
//! of *descriptors*: a service type, a way of creating it, and a lifetime.
//! This crate translates such a list into a [`runtime_injector`] container and
//! exposes the built container back through the contract those hosts expect:
//! a service provider that can resolve services by type and spawn child
//! lifetime scopes.
//!
//! The translation is deliberately thin. Registration storage, object graph
//! resolution, circular dependency detection and singleton caching are all the
//! container's job; this crate only maps descriptors onto providers, forwards
//! build options, and tracks scope parentage. Resolution errors are surfaced
//! from the container verbatim.
//!
//! # Getting started
//!
//! Services are declared in a [`ServiceCollection`], translated into a
//! [`ContainerBuilder`] by an [`InjectorProviderFactory`], and finalized into
//! an [`InjectorServiceProvider`]:
//!
//! ```
//! use runtime_injector_hosting::{
//!     InjectorProviderFactory, ServiceCollection, Svc,
//! };
//!
//! #[derive(Default)]
//! struct Connection;
//!
//! struct AuditLog {
//!     connection: Svc<Connection>,
//! }
//!
//! impl AuditLog {
//!     pub fn new(connection: Svc<Connection>) -> Self {
//!         AuditLog { connection }
//!     }
//! }
//!
//! let mut services = ServiceCollection::new();
//! services.add_singleton(Connection::default);
//! services.add_scoped(AuditLog::new);
//!
//! let factory = InjectorProviderFactory::new();
//! let mut container_builder = factory.create_builder(services);
//! let provider = factory
//!     .create_service_provider(&mut container_builder)
//!     .unwrap();
//!
//! // Services are resolved through the host contract.
//! let connection: Svc<Connection> = provider.get_required_service().unwrap();
//!
//! // Child scopes form a parent-pointing tree rooted at the container.
//! let scope = provider.create_scope();
//! let audit: Svc<AuditLog> =
//!     scope.service_provider().get_required_service().unwrap();
//! assert!(Svc::ptr_eq(&connection, &audit.connection));
//! ```
//!
//! # Service lifetimes
//!
//! Descriptors declare one of three lifetimes, mapped onto the container as
//! follows:
//!
//! - **Singleton:** provided through a [`SingletonProvider`]. One instance for
//!   the lifetime of the container, shared by every scope.
//! - **Transient:** provided through a [`TransientProvider`]. A new instance
//!   for each request.
//! - **Scoped:** provided through a [`TransientProvider`], with the instance
//!   cached by the resolving [`LifetimeScope`]. One instance per scope; the
//!   top-level provider acts as the root scope.
//!
//! Instances registered with [`ServiceCollection::add_instance`] behave like
//! singletons and are provided through a [`ConstantProvider`].
//!
//! # Default modules and build options
//!
//! Building with default options adds container-wide convenience
//! registrations: each descriptor's service type can also be requested as a
//! [`Lazy<T>`](Lazy), a handle which defers resolution until first use.
//! Excluding default modules through [`ContainerBuildOptions`] suppresses
//! those registrations without affecting the services themselves.
//!
//! # Registering directly against the container
//!
//! Anything the container supports beyond plain descriptors (interfaces,
//! conditional providers, and so on) can be registered through the factory's
//! configuration callback, which receives the underlying [`InjectorBuilder`]
//! after the descriptors have been translated. This crate re-exports
//! [`runtime_injector`] in full, so no direct dependency on the container
//! crate is needed for that.

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub use runtime_injector::*;

mod builder;
mod collection;
mod descriptor;
mod error;
mod factory;
mod lazy;
mod options;
mod provider;
mod scope;

pub use builder::*;
pub use collection::*;
pub use descriptor::*;
pub use error::*;
pub use factory::*;
pub use lazy::*;
pub use options::*;
pub use provider::*;
pub use scope::*;
