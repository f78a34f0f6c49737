use std::fmt;

use crate::entities::*;

/// Handle to unregister a store observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn Fn(&[Comment])>;

type Clock = Box<dyn Fn() -> TimestampMs>;

/// Ordered, in-memory collection of rated comments.
///
/// Comments are kept in insertion order. The store does not
/// re-validate its input; callers are expected to check new
/// comments before adding them.
///
/// Observers are notified with the current list after each
/// completed [`add`](Self::add) or [`remove`](Self::remove).
pub struct CommentStore {
    comments: Vec<Comment>,
    last_id: Option<CommentId>,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    clock: Clock,
}

impl CommentStore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_clock(TimestampMs::now)
    }

    #[must_use]
    pub fn with_clock<C>(clock: C) -> Self
    where
        C: Fn() -> TimestampMs + 'static,
    {
        Self {
            comments: Vec::new(),
            last_id: None,
            observers: Vec::new(),
            next_subscription: 0,
            clock: Box::new(clock),
        }
    }

    pub fn add(&mut self, text: impl Into<String>, rating: RatingValue) -> CommentId {
        let created_at = (self.clock)();
        let id = CommentId::next_after(self.last_id, created_at);
        self.last_id = Some(id);
        self.comments.push(Comment {
            id,
            created_at,
            text: text.into(),
            rating,
        });
        log::debug!("Added comment {id} ({} in total)", self.comments.len());
        self.notify();
        id
    }

    pub fn remove(&mut self, id: CommentId) {
        let count = self.comments.len();
        self.comments.retain(|c| c.id != id);
        if self.comments.len() < count {
            log::debug!("Removed comment {id}");
        } else {
            log::debug!("Comment {id} does not exist");
        }
        self.notify();
    }

    #[must_use]
    pub fn list(&self) -> &[Comment] {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: Fn(&[Comment]) + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns `false` if the observer was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let count = self.observers.len();
        self.observers.retain(|(s, _)| *s != id);
        self.observers.len() < count
    }

    fn notify(&self) {
        for (_, observer) in &self.observers {
            observer(&self.comments);
        }
    }
}

impl Default for CommentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommentStore {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("CommentStore")
            .field("comments", &self.comments)
            .field("last_id", &self.last_id)
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;

    fn fixed_clock(ms: i64) -> impl Fn() -> TimestampMs {
        move || TimestampMs::from_milliseconds(ms)
    }

    fn rating(v: u8) -> RatingValue {
        RatingValue::new(v)
    }

    #[test]
    fn add_appends_to_the_end() {
        let mut store = CommentStore::new();
        for (i, v) in RatingValue::all().enumerate() {
            let text = format!("comment #{i}");
            let id = store.add(text.clone(), v);
            assert_eq!(store.len(), i + 1);
            let last = store.list().last().unwrap();
            assert_eq!(last.id, id);
            assert_eq!(last.text, text);
            assert_eq!(last.rating, v);
        }
    }

    #[test]
    fn ids_are_unique_and_increasing() {
        let mut store = CommentStore::with_clock(fixed_clock(1_000));
        let a = store.add("a", rating(1));
        let b = store.add("b", rating(2));
        let c = store.add("c", rating(3));
        assert_eq!(a.value(), 1_000);
        assert!(a < b && b < c);
    }

    #[test]
    fn ids_stay_unique_after_removal() {
        let mut store = CommentStore::with_clock(fixed_clock(7));
        let a = store.add("a", rating(1));
        store.remove(a);
        let b = store.add("b", rating(1));
        assert_ne!(a, b);
    }

    #[test]
    fn remove_keeps_order_of_others() {
        let mut store = CommentStore::new();
        let a = store.add("a", rating(1));
        let b = store.add("b", rating(2));
        let c = store.add("c", rating(3));
        store.remove(b);
        let ids: Vec<_> = store.list().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![a, c]);
        assert!(!ids.contains(&b));
    }

    #[test]
    fn remove_missing_id_is_a_noop() {
        let mut store = CommentStore::new();
        store.add("a", rating(4));
        let before = store.list().to_vec();
        store.remove(CommentId::new(-1));
        assert_eq!(store.list(), before.as_slice());
    }

    #[test]
    fn remove_twice() {
        let mut store = CommentStore::new();
        let a = store.add("a", rating(4));
        store.add("b", rating(5));
        store.remove(a);
        let after_first = store.list().to_vec();
        store.remove(a);
        assert_eq!(store.list(), after_first.as_slice());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn remove_from_empty_store() {
        let mut store = CommentStore::new();
        store.remove(CommentId::new(1));
        assert!(store.is_empty());
    }

    #[test]
    fn notify_observers_after_mutation() {
        let seen = Rc::new(RefCell::new(Vec::<usize>::new()));
        let mut store = CommentStore::new();
        let seen_by_observer = Rc::clone(&seen);
        store.subscribe(move |list| seen_by_observer.borrow_mut().push(list.len()));
        let a = store.add("a", rating(1));
        store.add("b", rating(2));
        store.remove(a);
        assert_eq!(*seen.borrow(), vec![1, 2, 1]);
    }

    #[test]
    fn unsubscribe_observer() {
        let calls = Rc::new(RefCell::new(0));
        let mut store = CommentStore::new();
        let counter = Rc::clone(&calls);
        let sub = store.subscribe(move |_| *counter.borrow_mut() += 1);
        store.add("a", rating(1));
        assert!(store.unsubscribe(sub));
        assert!(!store.unsubscribe(sub));
        store.add("b", rating(1));
        assert_eq!(*calls.borrow(), 1);
    }
}
