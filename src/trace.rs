//! Optional observation of heap mutations.
//!
//! An [`IndexedMinHeap`](crate::IndexedMinHeap) calls its observer right
//! before and right after every mutating operation. [`NoTrace`] is the
//! default and does nothing.

use std::fmt;

/// The mutating operation being observed, with its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapOp {
    Insert { key: i64, id: usize },
    Update { key: i64, id: usize },
    RemoveMin,
    Remove { id: usize },
    Clear,
}

impl fmt::Display for HeapOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapOp::Insert { key, id } => write!(f, "INSERT ({}, {})", key, id),
            HeapOp::Update { key, id } => write!(f, "UPDATE ({}, {})", key, id),
            HeapOp::RemoveMin => write!(f, "REM MIN"),
            HeapOp::Remove { id } => write!(f, "REMOVE ({})", id),
            HeapOp::Clear => write!(f, "CLEAR"),
        }
    }
}

/// Borrowed view of the occupied slots, in slot order.
#[derive(Debug, Clone, Copy)]
pub struct HeapSnapshot<'a> {
    keys: &'a [i64],
    elems: &'a [usize],
}

impl<'a> HeapSnapshot<'a> {
    pub(crate) fn new(keys: &'a [i64], elems: &'a [usize]) -> Self {
        HeapSnapshot { keys, elems }
    }

    /// `(key, id)` pairs from the root to the last occupied slot.
    pub fn entries(&self) -> impl Iterator<Item = (i64, usize)> + 'a {
        let (keys, elems) = (self.keys, self.elems);
        keys.iter().copied().zip(elems.iter().copied())
    }
}

/// Renders as `(key, id) (key, id) ...`.
impl fmt::Display for HeapSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (key, id) in self.entries() {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "({}, {})", key, id)?;
            first = false;
        }
        Ok(())
    }
}

/// Hook invoked around every mutating heap operation.
///
/// `before` sees the heap as the caller left it; `after` sees it once the
/// operation has finished, including when the operation was rejected.
pub trait HeapObserver {
    fn before(&self, _op: HeapOp, _heap: &HeapSnapshot<'_>) {}
    fn after(&self, _op: HeapOp, _heap: &HeapSnapshot<'_>) {}
}

/// Observer that ignores everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTrace;

impl HeapObserver for NoTrace {}

/// Observer that writes the heap contents to the `log` facade at trace level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogTrace;

impl HeapObserver for LogTrace {
    fn before(&self, op: HeapOp, heap: &HeapSnapshot<'_>) {
        log::trace!("<< {} [{}]", op, heap);
    }

    fn after(&self, op: HeapOp, heap: &HeapSnapshot<'_>) {
        log::trace!(">> {} [{}]", op, heap);
    }
}

/// Observer selected at runtime, e.g. from a config flag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SwitchTrace {
    #[default]
    Off,
    Log,
}

impl SwitchTrace {
    pub fn from_flag(enabled: bool) -> Self {
        if enabled {
            SwitchTrace::Log
        } else {
            SwitchTrace::Off
        }
    }
}

impl HeapObserver for SwitchTrace {
    fn before(&self, op: HeapOp, heap: &HeapSnapshot<'_>) {
        if let SwitchTrace::Log = self {
            LogTrace.before(op, heap);
        }
    }

    fn after(&self, op: HeapOp, heap: &HeapSnapshot<'_>) {
        if let SwitchTrace::Log = self {
            LogTrace.after(op, heap);
        }
    }
}
