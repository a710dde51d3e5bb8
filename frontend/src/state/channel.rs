use std::cell::RefCell;
use std::rc::Rc;

pub type SubscriptionId = usize;

type Observer<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    observers: Vec<(SubscriptionId, Observer<T>)>,
    next_id: SubscriptionId,
}

/// Last-known-value broadcast channel. A new subscriber is immediately
/// invoked with the current value; every publish commits the value first,
/// then notifies observers synchronously, in registration order.
///
/// Single-threaded: the stores live on the browser event loop, so shared
/// ownership is `Rc<RefCell<_>>`. Observers run outside the internal borrow
/// and may publish to other channels.
pub struct StateChannel<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for StateChannel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Clone + 'static> StateChannel<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value: initial,
                observers: Vec::new(),
                next_id: 0,
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Borrowed read of the current value, for cheap predicates.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> SubscriptionId {
        let observer: Observer<T> = Rc::new(observer);
        let (id, replay) = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.observers.push((id, Rc::clone(&observer)));
            (id, inner.value.clone())
        };
        observer(&replay);
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.inner
            .borrow_mut()
            .observers
            .retain(|(observer_id, _)| *observer_id != id);
    }

    pub fn publish(&self, value: T) {
        let observers: Vec<Observer<T>> = {
            let mut inner = self.inner.borrow_mut();
            inner.value = value.clone();
            inner
                .observers
                .iter()
                .map(|(_, observer)| Rc::clone(observer))
                .collect()
        };
        for observer in &observers {
            observer(&value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribe_replays_current_value() {
        let channel = StateChannel::new(41);
        channel.publish(42);

        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        channel.subscribe(move |value| sink.borrow_mut().push(*value));

        assert_eq!(*seen.borrow(), vec![42]);
    }

    #[test]
    fn publish_notifies_in_registration_order() {
        let channel = StateChannel::new(0);
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        channel.subscribe(move |value| first.borrow_mut().push(("first", *value)));
        let second = Rc::clone(&order);
        channel.subscribe(move |value| second.borrow_mut().push(("second", *value)));

        order.borrow_mut().clear();
        channel.publish(7);

        assert_eq!(*order.borrow(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn value_is_committed_before_observers_run() {
        let channel = StateChannel::new(0);
        let observed = Rc::new(RefCell::new(None));

        let probe = Rc::clone(&observed);
        let reader = channel.clone();
        channel.subscribe(move |_| {
            *probe.borrow_mut() = Some(reader.get());
        });

        channel.publish(9);
        assert_eq!(*observed.borrow(), Some(9));
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let channel = StateChannel::new(0);
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        let id = channel.subscribe(move |value| sink.borrow_mut().push(*value));
        channel.unsubscribe(id);
        channel.publish(1);

        assert_eq!(*seen.borrow(), vec![0]);
    }

    #[test]
    fn observer_may_publish_to_another_channel() {
        let source = StateChannel::new(0);
        let mirror = StateChannel::new(0);

        let target = mirror.clone();
        source.subscribe(move |value| target.publish(*value * 2));

        source.publish(21);
        assert_eq!(mirror.get(), 42);
    }
}
