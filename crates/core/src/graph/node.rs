use alloc::string::String;

use hashbrown::HashMap;

use crate::error::Error;
use crate::graph::identifier::Identifier;
use crate::state::State;

/// Variable name under which hosts address a node's identifier.
///
/// Writing a state under this name is rejected: the identifier is fixed when
/// the node is created.
pub const IDENT: &str = "ident";

/// One location-tick and the states of the variables attached to it.
///
/// Variables that were never set read as [`State::Unknown`]. `Clone` produces
/// an independent copy: no storage is shared with the source.
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: Identifier,
    values: HashMap<String, State>,
}

impl Node {
    #[must_use]
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            values: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> &Identifier {
        &self.id
    }

    /// State of `variable`, [`State::Unknown`] if it was never set.
    #[must_use]
    pub fn get(&self, variable: &str) -> State {
        self.values.get(variable).copied().unwrap_or_default()
    }

    /// Sets `variable` to `state`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IdentifierReassignment`] if `variable` is [`IDENT`].
    pub fn set(&mut self, variable: impl Into<String>, state: State) -> Result<(), Error> {
        let variable = variable.into();
        if variable == IDENT {
            return Err(Error::IdentifierReassignment(self.id.clone()));
        }
        self.values.insert(variable, state);
        Ok(())
    }

    /// Sets `variable` from a numeric state code.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidState`] if `code` does not name a [`State`], or
    /// [`Error::IdentifierReassignment`] as for [`set`](Self::set). The node is
    /// left unchanged on error.
    pub fn set_raw(&mut self, variable: impl Into<String>, code: u8) -> Result<(), Error> {
        let state = State::try_from(code)?;
        self.set(variable, state)
    }

    /// Forgets `variable`, which reads as [`State::Unknown`] again.
    pub fn clear(&mut self, variable: &str) {
        self.values.remove(variable);
    }

    /// Variables that were explicitly set, in no particular order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, State)> {
        self.values
            .iter()
            .map(|(variable, state)| (variable.as_str(), *state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node() -> Node {
        Node::new(Identifier::new("foobar", 0))
    }

    #[test]
    fn unset_variable_is_unknown() {
        let node = node();
        assert_eq!(node.get("foo"), State::Unknown);
        assert_eq!(node.id(), &Identifier::new("foobar", 0));
    }

    #[test]
    fn set_value() {
        let mut node = node();
        node.set("agent", State::Occupied).unwrap();
        assert_eq!(node.get("agent"), State::Occupied);

        node.clear("agent");
        assert_eq!(node.get("agent"), State::Unknown);
    }

    #[test]
    fn ident_cannot_be_reassigned() {
        let mut node = node();
        assert_eq!(
            node.set(IDENT, State::Unknown),
            Err(Error::IdentifierReassignment(Identifier::new("foobar", 0)))
        );
        assert_eq!(node.variables().count(), 0);
    }

    #[test]
    fn invalid_code_is_rejected() {
        let mut node = node();
        assert_eq!(node.set_raw("foo", 7), Err(Error::InvalidState(7)));
        assert_eq!(node.get("foo"), State::Unknown);

        node.set_raw("foo", 3).unwrap();
        assert_eq!(node.get("foo"), State::Visited);
    }

    #[test]
    fn copy_is_independent() {
        let mut node = node();
        node.set("foo", State::Empty).unwrap();
        node.set("bar", State::Occupied).unwrap();
        node.set("baz", State::Visited).unwrap();

        let mut copy = node.clone();
        copy.set("baz", State::Occupied).unwrap();
        copy.set("qux", State::Empty).unwrap();

        assert_eq!(node.get("baz"), State::Visited);
        assert_eq!(node.get("qux"), State::Unknown);
        assert_eq!(copy.get("baz"), State::Occupied);
        assert_eq!(copy.get("bar"), State::Occupied);
        assert_eq!(copy.get("foo"), State::Empty);
        assert_eq!(copy.id(), node.id());
    }
}
