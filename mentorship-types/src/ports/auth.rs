//! Role-check port.

/// Capability for checking a caller's role against the externally-managed
/// identity provider. Synchronous by contract; implementations read
/// already-resolved session state, never the network.
pub trait RoleChecker: Send + Sync + 'static {
    fn is_in_role(&self, identity: &str, role: &str) -> bool;
}
