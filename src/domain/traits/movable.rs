/// Movable trait - a contract every variant can honor
///
/// `advance` has no failure path on purpose: a capability must be
/// satisfiable by every variant that claims it. A behavior only some
/// variants support (flying, say) belongs in a narrower trait, never here.
pub trait Movable {
    /// Change position in space. Named `advance` because `move` is a
    /// Rust keyword.
    fn advance(&self);

    /// Species name, for logs
    fn species(&self) -> &str;
}
