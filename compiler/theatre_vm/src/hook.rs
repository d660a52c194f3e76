//! Native function registry.
//!
//! Hooks are the VM's extension point: the host registers a name, an arity
//! contract and a native closure, and scripts reach it through `CALL`.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;
use theatre_value::Value;

use crate::error::{VmError, VmResult};
use crate::output::Output;
use crate::vm::VirtualMachine;

/// Number of arguments a hook accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Fixed(usize),
    Variadic,
}

impl Arity {
    /// Whether a call with `count` arguments satisfies this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::Variadic => f.write_str("any number of"),
        }
    }
}

/// Everything a native hook can see while it runs.
pub struct HookContext<'a> {
    /// Output sink of the calling VM.
    pub out: &'a Output,
    /// Arguments in pop order: the most recently pushed value comes first.
    pub args: &'a [Value],
    /// The calling VM, after its stack was drained for this call.
    pub vm: &'a VirtualMachine,
}

/// Native hook body.
pub type HookFn = Arc<dyn Fn(HookContext<'_>) -> VmResult<Value> + Send + Sync>;

/// A registered native function.
#[derive(Clone)]
pub struct Hook {
    name: String,
    arity: Arity,
    func: HookFn,
}

impl Hook {
    /// Name the hook was registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Invoke the hook. The arity contract is checked before the body runs.
    pub fn call(&self, vm: &VirtualMachine, args: &[Value]) -> VmResult<Value> {
        if !self.arity.accepts(args.len()) {
            return Err(VmError::ArityMismatch {
                name: self.name.clone(),
                expected: self.arity,
                got: args.len(),
            });
        }
        tracing::debug!(hook = %self.name, argc = args.len(), "calling hook");
        (self.func)(HookContext {
            out: vm.out(),
            args,
            vm,
        })
    }
}

impl fmt::Debug for Hook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hook")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Name → hook mapping. The last registration for a name wins.
#[derive(Clone, Default)]
pub struct HookTable {
    hooks: FxHashMap<String, Hook>,
}

impl HookTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, arity: Arity, func: F)
    where
        F: Fn(HookContext<'_>) -> VmResult<Value> + Send + Sync + 'static,
    {
        let name = name.into();
        let hook = Hook {
            name: name.clone(),
            arity,
            func: Arc::new(func),
        };
        if let Some(previous) = self.hooks.insert(name, hook) {
            tracing::debug!(hook = %previous.name, "replaced existing hook registration");
        }
    }

    /// Look up a hook, failing with `UnknownHook` when absent.
    pub fn get(&self, name: &str) -> VmResult<&Hook> {
        self.hooks.get(name).ok_or_else(|| VmError::UnknownHook {
            name: name.to_owned(),
        })
    }

    /// Whether a hook named `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.hooks.contains_key(name)
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.hooks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl fmt::Debug for HookTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.names()).finish()
    }
}
