// mallow-core - Environment for lexical scoping
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Environment for variable bindings with lexical scoping.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use mallow_reader::{MallowVal, Symbol};

use crate::error::{Error, Result};

/// A lexical environment for variable bindings.
///
/// Environments form a chain through parent references. Each environment
/// has its own bindings map and optionally a parent environment for outer
/// scope lookup; binding is always per-frame, so `def!` inside a local
/// frame shadows, never mutates, an outer binding.
///
/// Cloning an `Env` clones the reference, not the frame: closures hold
/// strong references to their captured environment, and every chain
/// terminates at the root environment, which lives until shutdown.
///
/// # Examples
///
/// ```
/// use mallow_core::Env;
/// use mallow_reader::{MallowVal, Symbol};
///
/// let env = Env::new();
/// env.define(Symbol::intern("x"), MallowVal::int(42));
/// assert_eq!(env.get(&Symbol::intern("x")).unwrap(), MallowVal::int(42));
///
/// // A child environment shadows without touching the parent
/// let child = env.child();
/// child.define(Symbol::intern("x"), MallowVal::int(100));
/// assert_eq!(child.get(&Symbol::intern("x")).unwrap(), MallowVal::int(100));
/// assert_eq!(env.get(&Symbol::intern("x")).unwrap(), MallowVal::int(42));
/// ```
#[derive(Debug, Clone)]
pub struct Env {
    inner: Rc<RefCell<EnvInner>>,
}

#[derive(Debug)]
struct EnvInner {
    bindings: HashMap<Symbol, MallowVal>,
    parent: Option<Env>,
}

impl Env {
    /// Create a new root environment with no parent.
    pub fn new() -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: None,
            })),
        }
    }

    /// Create a child environment with this environment as parent.
    #[must_use]
    pub fn child(&self) -> Self {
        Env {
            inner: Rc::new(RefCell::new(EnvInner {
                bindings: HashMap::new(),
                parent: Some(self.clone()),
            })),
        }
    }

    /// Bind or rebind `sym` in this frame only, returning the frame's
    /// previous binding.
    ///
    /// Side effect: an unnamed procedure bound here takes `sym` as its
    /// name, so `(def! f (lambda (x) x))` prints as `#<procedure:f>`.
    pub fn define(&self, sym: Symbol, val: MallowVal) -> Option<MallowVal> {
        let val = match val {
            MallowVal::Fn(f) if f.name.is_none() => MallowVal::Fn(f.named(sym.clone())),
            MallowVal::Macro(f) if f.name.is_none() => MallowVal::Macro(f.named(sym.clone())),
            other => other,
        };
        self.inner.borrow_mut().bindings.insert(sym, val)
    }

    /// Look up a symbol in this environment or the parent chain.
    /// Uses iterative traversal to avoid stack overflow on deep environments.
    pub fn get(&self, sym: &Symbol) -> Result<MallowVal> {
        let mut current = self.clone();
        loop {
            let inner = current.inner.borrow();
            if let Some(val) = inner.bindings.get(sym) {
                return Ok(val.clone());
            }
            let parent = inner.parent.clone();
            drop(inner);
            match parent {
                Some(p) => current = p,
                None => return Err(Error::UndefinedSymbol(sym.clone())),
            }
        }
    }

    /// Walk to the top frame of the chain (the root environment).
    #[must_use]
    pub fn root(&self) -> Env {
        let mut current = self.clone();
        loop {
            let parent = current.inner.borrow().parent.clone();
            match parent {
                Some(p) => current = p,
                None => return current,
            }
        }
    }
}

impl Default for Env {
    fn default() -> Self {
        Self::new()
    }
}
