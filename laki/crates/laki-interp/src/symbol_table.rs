//! Lexically-scoped environment frames.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::value::Value;

/// One environment frame: a binding map plus an optional parent frame.
///
/// `get` walks the parent chain; `set` and `remove` act on this frame
/// only, so an inner frame can shadow an outer binding but never mutate
/// through it.
#[derive(Default)]
pub struct SymbolTable {
    symbols: FxHashMap<Rc<str>, Value>,
    parent: Option<Rc<RefCell<SymbolTable>>>,
}

impl SymbolTable {
    /// A root frame with no parent.
    pub fn new() -> Self {
        Self::default()
    }

    /// A child frame of `parent`.
    pub fn with_parent(parent: Rc<RefCell<SymbolTable>>) -> Self {
        Self {
            symbols: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Looks up a name, walking outward through parent frames.
    pub fn get(&self, name: &str) -> Option<Value> {
        if let Some(value) = self.symbols.get(name) {
            return Some(value.clone());
        }
        self.parent.as_ref().and_then(|p| p.borrow().get(name))
    }

    /// Binds a name in this frame.
    pub fn set(&mut self, name: Rc<str>, value: Value) {
        self.symbols.insert(name, value);
    }

    /// Removes a name from this frame only.
    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.symbols.remove(name)
    }
}
