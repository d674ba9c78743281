use crate::PageRequest;

/// Side effects requested by [`update`](crate::update); executed by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Issue exactly one catalog request.
    FetchPage(PageRequest),
}
