use derive_more::{Display, Error};

/// An error raised by the hosting layer itself.
///
/// Only argument validation lives here. Resolution-time failures are the
/// container's business and are surfaced as
/// [`InjectError`](runtime_injector::InjectError) without being wrapped.
#[derive(Debug, Display, Error)]
#[non_exhaustive]
pub enum HostingError {
    /// A container builder was used after it had already been built into a
    /// container. A builder can be consumed at most once.
    #[display(
        fmt = "invalid argument `{}`: the container builder has already been consumed",
        parameter
    )]
    BuilderConsumed {
        /// The name of the rejected parameter.
        parameter: &'static str,
    },
}
