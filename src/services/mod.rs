mod link_registry;
pub(crate) use link_registry::*;

mod link_sweeper;
pub(crate) use link_sweeper::*;

mod provider_adapters;
pub(crate) use provider_adapters::*;
