//! FIFO agenda of arcs awaiting revision.

use std::collections::VecDeque;

use arcgrid_core::Position;

/// A directed arc `(i, j)`: the domain of `i` must be revised against the
/// domain of `j`.
pub type Arc = (Position, Position);

/// A first-in, first-out queue of [`Arc`]s.
///
/// One propagation run owns its agenda exclusively: it is created empty,
/// seeded with every initial neighbor arc, and drained until empty or until
/// a contradiction ends the run. No deduplication or prioritization is
/// applied.
///
/// # Examples
///
/// ```
/// use arcgrid_core::Position;
/// use arcgrid_solver::Agenda;
///
/// let mut agenda = Agenda::new();
/// let a = (Position::new(0, 0), Position::new(1, 0));
/// let b = (Position::new(1, 0), Position::new(0, 0));
///
/// agenda.enqueue(a);
/// agenda.enqueue(b);
/// assert_eq!(agenda.len(), 2);
/// assert_eq!(agenda.dequeue(), Some(a));
/// assert_eq!(agenda.dequeue(), Some(b));
/// assert!(agenda.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Agenda {
    arcs: VecDeque<Arc>,
}

impl Agenda {
    /// Creates an empty agenda.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            arcs: VecDeque::new(),
        }
    }

    /// Appends an arc at the back.
    pub fn enqueue(&mut self, arc: Arc) {
        self.arcs.push_back(arc);
    }

    /// Removes and returns the oldest arc, or `None` when empty.
    pub fn dequeue(&mut self) -> Option<Arc> {
        self.arcs.pop_front()
    }

    /// Returns `true` if no arcs are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arcs.is_empty()
    }

    /// Returns the number of queued arcs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arcs.len()
    }
}
