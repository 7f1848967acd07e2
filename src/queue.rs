//! A singly linked FIFO of borrowed references.
//!
//! This is the scratchpad [`Tree::level_order`][crate::tree::Tree::level_order] uses to visit
//! nodes breadth first. The queue never owns what it points at: dequeuing hands back the
//! reference and frees only the queue's own cell.
//!
//! # Examples
//!
//! ```
//! use keyed_bst::queue::Queue;
//!
//! let (a, b) = (1, 2);
//! let mut queue = Queue::new();
//! queue.enqueue(&a);
//! queue.enqueue(&b);
//!
//! assert_eq!(queue.dequeue(), Some(&1));
//! assert_eq!(queue.dequeue(), Some(&2));
//! assert_eq!(queue.dequeue(), None);
//! assert!(queue.is_empty());
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::ptr::NonNull;

type Link<'a, T> = Option<NonNull<Cell<'a, T>>>;

struct Cell<'a, T> {
    item: &'a T,
    next: Link<'a, T>,
}

/// A first-in, first-out queue of `&'a T`. Both [`enqueue`][Queue::enqueue] and
/// [`dequeue`][Queue::dequeue] are `O(1)`.
pub struct Queue<'a, T> {
    front: Link<'a, T>,
    // Points at the last cell of the chain starting at `front`, or is `None` exactly when `front`
    // is.
    rear: Link<'a, T>,
    len: usize,
    marker: PhantomData<Box<Cell<'a, T>>>,
}

impl<'a, T> Default for Queue<'a, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> Drop for Queue<'a, T> {
    fn drop(&mut self) {
        while self.dequeue().is_some() {}
    }
}

impl<'a, T> fmt::Debug for Queue<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> Queue<'a, T> {
    /// Generate a new, empty `Queue`.
    pub fn new() -> Self {
        Self {
            front: None,
            rear: None,
            len: 0,
            marker: PhantomData,
        }
    }

    /// Appends `item` to the back of the queue.
    pub fn enqueue(&mut self, item: &'a T) {
        let cell = NonNull::from(Box::leak(Box::new(Cell { item, next: None })));
        match self.rear {
            // SAFETY: `rear` points at a live cell allocated in `enqueue` and not yet freed by
            // `dequeue` (it is cleared as soon as the last cell leaves). We hold `&mut self` so
            // nothing else is looking at it.
            Some(mut rear) => unsafe { rear.as_mut().next = Some(cell) },
            None => self.front = Some(cell),
        }
        self.rear = Some(cell);
        self.len += 1;
    }

    /// Removes and returns the reference at the front of the queue, or `None` if the queue is
    /// empty. The referenced value itself is untouched.
    pub fn dequeue(&mut self) -> Option<&'a T> {
        let front = self.front?;
        // SAFETY: `front` was allocated with `Box::new` in `enqueue` and is only reachable from
        // `self.front` (and `self.rear` when it is the last cell, which we reset below). Taking
        // it back into a `Box` here is the only place a cell gets freed.
        let cell = unsafe { Box::from_raw(front.as_ptr()) };
        self.front = cell.next;
        if self.front.is_none() {
            self.rear = None;
        }
        self.len -= 1;
        Some(cell.item)
    }

    /// Returns the reference at the front of the queue without removing it.
    pub fn peek(&self) -> Option<&'a T> {
        // SAFETY: `front` is a live cell, see `dequeue`.
        self.front.map(|front| unsafe { front.as_ref().item })
    }

    /// Whether the queue holds no references.
    pub fn is_empty(&self) -> bool {
        self.front.is_none()
    }

    /// How many references are queued.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Iterates from front to back without dequeuing anything.
    pub fn iter(&self) -> Iter<'_, 'a, T> {
        Iter {
            next: self.front,
            marker: PhantomData,
        }
    }
}

/// Borrowing iterator over a [`Queue`], front to back.
pub struct Iter<'q, 'a, T> {
    next: Link<'a, T>,
    marker: PhantomData<&'q Queue<'a, T>>,
}

impl<'q, 'a, T> Iterator for Iter<'q, 'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let cell = self.next?;
        // SAFETY: The queue is borrowed for `'q` so no cell can be dequeued (and freed) while
        // this iterator is alive.
        let cell = unsafe { cell.as_ref() };
        self.next = cell.next;
        Some(cell.item)
    }
}
