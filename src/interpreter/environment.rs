use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope: a mapping from names to values with an optional parent.
///
/// Environments form a tree rooted at the top-level scope. Each function
/// call and each `for` loop evaluates inside a fresh child environment.
/// Environments are shared by reference (`Rc<RefCell<…>>`) so that a
/// closure and the scope it captured observe each other's mutations; a
/// closure bound inside its own defining scope makes the graph cyclic,
/// which shared ownership tolerates.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates a new, top-level environment with no parent.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let env = Environment::new();
    /// env.borrow_mut().set("x", Value::Integer(10));
    ///
    /// assert_eq!(env.borrow().get("x"), Some(Value::Integer(10)));
    /// assert_eq!(env.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a new environment enclosed within an outer one.
    ///
    /// Lookups that miss locally continue in the outer scope; definitions
    /// stay local.
    ///
    /// # Parameters
    /// - `outer`: The parent scope.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().set("x", Value::Integer(1));
    ///
    /// let local = Environment::new_enclosed(&global);
    /// local.borrow_mut().set("y", Value::Integer(2));
    ///
    /// assert_eq!(local.borrow().get("x"), Some(Value::Integer(1)));
    /// assert_eq!(global.borrow().get("y"), None);
    /// ```
    #[must_use]
    pub fn new_enclosed(outer: &Rc<RefCell<Self>>) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self { store: HashMap::new(),
                                    outer: Some(Rc::clone(outer)), }))
    }

    /// Looks a name up, walking outer scopes until a binding is found.
    ///
    /// # Parameters
    /// - `name`: The name to resolve.
    ///
    /// # Returns
    /// The bound value, or `None` if no scope in the chain binds the name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }

        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this scope, shadowing any outer binding.
    ///
    /// # Parameters
    /// - `name`: The name to bind.
    /// - `value`: The value to store.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.store.insert(name.into(), value);
    }

    /// Overwrites the nearest existing binding of `name` in the chain.
    ///
    /// Walks outward from this scope and updates the first frame that
    /// binds the name, which is what makes rebinding inside a closure
    /// visible to the scope that owns the variable.
    ///
    /// # Parameters
    /// - `name`: The name to rebind.
    /// - `value`: The new value.
    ///
    /// # Returns
    /// `true` if some scope bound the name, `false` if none did.
    ///
    /// # Example
    /// ```
    /// use canopy::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let global = Environment::new();
    /// global.borrow_mut().set("n", Value::Integer(0));
    ///
    /// let local = Environment::new_enclosed(&global);
    /// assert!(local.borrow_mut().update("n", Value::Integer(1)));
    /// assert_eq!(global.borrow().get("n"), Some(Value::Integer(1)));
    ///
    /// assert!(!local.borrow_mut().update("missing", Value::Null));
    /// ```
    pub fn update(&mut self, name: &str, value: Value) -> bool {
        if let Some(slot) = self.store.get_mut(name) {
            *slot = value;
            return true;
        }

        match &self.outer {
            Some(outer) => outer.borrow_mut().update(name, value),
            None => false,
        }
    }
}
