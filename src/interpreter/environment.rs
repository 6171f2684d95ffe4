use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// Shared handle to an [`Environment`].
///
/// Environments are shared by identity: a closure captures the same
/// environment object that was current when its literal was evaluated, so
/// later bindings in that scope stay visible to it.
pub type EnvRef = Rc<RefCell<Environment>>;

/// A chained mapping from names to values.
///
/// Lookups walk outward through the chain until the name is found; writes
/// always target the innermost frame. A new frame is created per function
/// call; blocks do not introduce one.
#[derive(Debug, Default)]
pub struct Environment {
    bindings: HashMap<String, Value>,
    outer:    Option<EnvRef>,
}

impl Environment {
    /// Creates a root environment with no outer frame.
    #[must_use]
    pub fn root() -> EnvRef {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates an environment whose lookups fall back to `outer`.
    ///
    /// Used for function calls: parameters are bound in the fresh frame while
    /// the captured environment stays reachable (and shared) through `outer`.
    #[must_use]
    pub fn child(outer: &EnvRef) -> EnvRef {
        Rc::new(RefCell::new(Self { bindings: HashMap::new(),
                                    outer:    Some(Rc::clone(outer)), }))
    }

    /// Binds `name` to `value` in this frame.
    ///
    /// Existing bindings of the same name in this frame are replaced; outer
    /// frames are never written to.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Resolves `name`, walking outward through the chain.
    ///
    /// # Returns
    /// A clone of the bound value, or `None` if no frame binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned().or_else(|| {
                                            self.outer
                                                .as_ref()
                                                .and_then(|outer| outer.borrow().get(name))
                                        })
    }
}
