use alloc::vec::Vec;

use super::handle::Handle;

enum Slot<T> {
    Occupied(T),
    // Vacant slots form a LIFO chain threaded through the slots themselves.
    Vacant(Option<Handle>),
}

/// Slot storage addressed by [`Handle`]s.
///
/// Released slots are recycled before the backing vector grows, so a tree that churns through
/// inserts and removals keeps a stable footprint.
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_free: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        if let Some(handle) = self.next_free {
            let slot = &mut self.slots[handle.index()];
            match core::mem::replace(slot, Slot::Occupied(element)) {
                Slot::Vacant(next) => self.next_free = next,
                Slot::Occupied(_) => unreachable!("`Arena::alloc()` - free chain points at an occupied slot!"),
            }
            self.len += 1;
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Slot::Occupied(element));
            self.len += 1;
            Handle::from_index(self.slots.len() - 1)
        }
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get()` - `handle` is invalid!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.index()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get_mut()` - `handle` is invalid!"),
        }
    }

    /// Returns a pointer to the element at `handle` without borrowing the rest of the arena.
    ///
    /// # Safety
    /// - `ptr` must point to a valid, allocated `Arena<T>`.
    /// - The caller must not hold any other reference to the element at `handle` while using the
    ///   returned pointer mutably.
    #[inline]
    pub(crate) unsafe fn get_raw(ptr: *mut Self, handle: Handle) -> *mut T {
        // SAFETY: Caller guarantees `ptr` is valid. Offsetting the buffer pointer touches only the
        // addressed slot, so references into other slots stay valid.
        unsafe {
            let slots = &mut (*ptr).slots;
            assert!(handle.index() < slots.len(), "`Arena::get_raw()` - `handle` is invalid!");
            match &mut *slots.as_mut_ptr().add(handle.index()) {
                Slot::Occupied(element) => element,
                Slot::Vacant(_) => panic!("`Arena::get_raw()` - `handle` is invalid!"),
            }
        }
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = &mut self.slots[handle.index()];
        match core::mem::replace(slot, Slot::Vacant(self.next_free)) {
            Slot::Occupied(element) => {
                self.next_free = Some(handle);
                self.len -= 1;
                element
            }
            Slot::Vacant(next) => {
                *slot = Slot::Vacant(next);
                panic!("`Arena::take()` - `handle` is invalid!")
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
        self.len = 0;
    }
}
