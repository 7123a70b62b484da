pub(crate) const NIL: usize = usize::MAX;

/// Link storage shared by every live spine path of one traversal.
///
/// A vertex sits on at most one spine at a time, so a single pair of
/// next/prev arrays indexed by vertex serves all of them at once.
#[derive(Debug)]
pub(crate) struct SpineArena {
    next: Vec<usize>,
    prev: Vec<usize>,
}

impl SpineArena {
    pub fn new(n: usize) -> Self {
        Self {
            next: vec![NIL; n],
            prev: vec![NIL; n],
        }
    }

    pub fn prev(&self, v: usize) -> usize {
        self.prev[v]
    }
}

/// Handle to one spine path; the links live in the arena.
#[derive(Debug)]
pub(crate) struct Spine {
    head: usize,
    tail: usize,
}

impl Spine {
    pub fn empty() -> Self {
        Self { head: NIL, tail: NIL }
    }

    pub fn singleton(arena: &mut SpineArena, v: usize) -> Self {
        arena.next[v] = NIL;
        arena.prev[v] = NIL;
        Self { head: v, tail: v }
    }

    pub fn is_empty(&self) -> bool {
        self.head == NIL
    }

    pub fn head(&self) -> Option<usize> {
        (self.head != NIL).then_some(self.head)
    }

    pub fn tail(&self) -> Option<usize> {
        (self.tail != NIL).then_some(self.tail)
    }

    pub fn push_front(&mut self, arena: &mut SpineArena, v: usize) {
        arena.prev[v] = NIL;
        arena.next[v] = self.head;
        if self.head != NIL {
            arena.prev[self.head] = v;
        } else {
            self.tail = v;
        }
        self.head = v;
    }

    pub fn pop_front(&mut self, arena: &mut SpineArena) -> Option<usize> {
        let v = self.head;
        if v == NIL {
            return None;
        }
        self.head = arena.next[v];
        if self.head != NIL {
            arena.prev[self.head] = NIL;
        } else {
            self.tail = NIL;
        }
        arena.next[v] = NIL;
        Some(v)
    }

    pub fn pop_back(&mut self, arena: &mut SpineArena) -> Option<usize> {
        let v = self.tail;
        if v == NIL {
            return None;
        }
        self.tail = arena.prev[v];
        if self.tail != NIL {
            arena.next[self.tail] = NIL;
        } else {
            self.head = NIL;
        }
        arena.prev[v] = NIL;
        Some(v)
    }

    /// Appends `back` onto `self`.
    pub fn concat(&mut self, arena: &mut SpineArena, back: Spine) {
        if back.head == NIL {
            return;
        }
        if self.head == NIL {
            *self = back;
            return;
        }
        arena.next[self.tail] = back.head;
        arena.prev[back.head] = self.tail;
        self.tail = back.tail;
    }

    /// Unlinks an interior or boundary element.
    pub fn remove(&mut self, arena: &mut SpineArena, v: usize) {
        let p = arena.prev[v];
        let n = arena.next[v];
        if p != NIL {
            arena.next[p] = n;
        } else {
            self.head = n;
        }
        if n != NIL {
            arena.prev[n] = p;
        } else {
            self.tail = p;
        }
        arena.next[v] = NIL;
        arena.prev[v] = NIL;
    }

    /// Walks tail to head looking for `v`.
    pub fn contains_from_tail(&self, arena: &SpineArena, v: usize) -> bool {
        let mut cur = self.tail;
        while cur != NIL {
            if cur == v {
                return true;
            }
            cur = arena.prev[cur];
        }
        false
    }

    #[cfg(test)]
    pub fn to_vec(&self, arena: &SpineArena) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cur = self.head;
        while cur != NIL {
            out.push(cur);
            cur = arena.next[cur];
        }
        out
    }
}

/// Absorbed-vertex sets, one list per live representative. Concatenation is
/// O(1); a representative that has been absorbed goes empty and stays so.
#[derive(Debug)]
pub(crate) struct SigmaSets {
    next: Vec<usize>,
    head: Vec<usize>,
    tail: Vec<usize>,
}

impl SigmaSets {
    pub fn new(n: usize) -> Self {
        Self {
            next: vec![NIL; n],
            head: (0..n).collect(),
            tail: (0..n).collect(),
        }
    }

    pub fn is_empty(&self, v: usize) -> bool {
        self.head[v] == NIL
    }

    /// Moves every vertex represented by `from` under `into`.
    pub fn absorb(&mut self, into: usize, from: usize) {
        debug_assert!(into != from);
        debug_assert!(!self.is_empty(into), "absorbing into a dead representative");
        debug_assert!(!self.is_empty(from), "representative {} absorbed twice", from);
        if self.is_empty(into) || self.is_empty(from) {
            log::warn!("ignoring absorption of {} into {}", from, into);
            return;
        }
        self.next[self.tail[into]] = self.head[from];
        self.tail[into] = self.tail[from];
        self.head[from] = NIL;
        self.tail[from] = NIL;
    }

    /// Vertices represented by `v`, in absorption order.
    pub fn members(&self, v: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut cur = self.head[v];
        while cur != NIL {
            out.push(cur);
            cur = self.next[cur];
        }
        out
    }
}
