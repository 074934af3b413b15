// mallow-reader - Symbol type with interning
// Copyright (c) 2025 Tom Waddington. MIT licensed.

//! Interned identifiers.
//!
//! # Interning
//!
//! Symbols are interned in a global table, so two symbols with the same
//! name share the same underlying storage. This gives:
//!
//! - **O(1) equality**: comparing symbols is a pointer comparison
//! - **O(1) hashing**: the hash is the pointer address
//!
//! The interner is the only producer of symbols; evaluator hot paths
//! (special-form dispatch, environment lookup) never touch the name bytes.
//!
//! # Memory behaviour
//!
//! Interned symbols are never deallocated: the table keeps a strong
//! reference to every symbol created during the process lifetime. Typical
//! programs use a bounded set of symbols, so the overhead is modest.

use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Mutex, OnceLock};

/// An interned identifier.
///
/// Two symbols with the same name are the same object; equality and
/// hashing are pointer operations.
#[derive(Clone)]
pub struct Symbol {
    inner: Arc<SymbolInner>,
}

#[derive(Debug)]
struct SymbolInner {
    name: String,
}

/// Global symbol interner
static SYMBOL_INTERNER: OnceLock<Mutex<HashMap<String, Arc<SymbolInner>>>> = OnceLock::new();

fn get_interner() -> &'static Mutex<HashMap<String, Arc<SymbolInner>>> {
    SYMBOL_INTERNER.get_or_init(|| Mutex::new(HashMap::new()))
}

impl Symbol {
    /// Return the unique symbol for `name`, creating it on first use.
    pub fn intern(name: &str) -> Self {
        let mut table = get_interner()
            .lock()
            .expect("Symbol interner mutex poisoned: another thread panicked while holding the lock");
        if let Some(existing) = table.get(name) {
            return Symbol {
                inner: Arc::clone(existing),
            };
        }
        let inner = Arc::new(SymbolInner {
            name: name.to_string(),
        });
        table.insert(name.to_string(), Arc::clone(&inner));
        Symbol { inner }
    }

    /// Get the name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.inner.name
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.inner.name)
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self)
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        // Due to interning, pointer comparison is sufficient
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Use pointer hash for interned symbols
        Arc::as_ptr(&self.inner).hash(state);
    }
}

// ============================================================================
// Tests
// ============================================================================
