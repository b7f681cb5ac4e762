use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::reactor::Reactor;

type Registration = Weak<RefCell<dyn Reactor>>;

/// Ordered, non-owning list of reactors. Clones share the same list.
///
/// Registering a reactor does not keep it alive; once its owner drops it, it is skipped and
/// pruned on the next broadcast. The same reactor may be registered more than once.
#[derive(Clone, Default)]
pub struct Registrations {
    entries: Rc<RefCell<Vec<Registration>>>,
}

impl Registrations {
    pub fn add<R: Reactor + 'static>(&self, reactor: &Rc<RefCell<R>>) {
        let weak: Weak<RefCell<R>> = Rc::downgrade(reactor);
        let registration: Registration = weak;
        self.entries.borrow_mut().push(registration);
    }

    /// Removes the first registration of `reactor`. Returns `false` if it was not registered.
    pub fn remove<R: Reactor + ?Sized>(&self, reactor: &Rc<RefCell<R>>) -> bool {
        let target = Rc::as_ptr(reactor).cast::<()>();
        let mut entries = self.entries.borrow_mut();

        match entries.iter().position(|entry| entry.as_ptr().cast::<()>() == target) {
            Some(index) => {
                entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of registrations whose reactor is still alive.
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Live reactors in registration order, detached from the list so it can change while they run.
    pub(super) fn snapshot(&self) -> Vec<Rc<RefCell<dyn Reactor>>> {
        let mut entries = self.entries.borrow_mut();
        entries.retain(|entry| entry.strong_count() > 0);
        entries.iter().filter_map(Weak::upgrade).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Temperature;

    struct Noop;

    impl Reactor for Noop {
        fn on_reading(&mut self, _value: Temperature) {}
    }

    #[test]
    fn test_remove_first_registration_only() {
        let registrations = Registrations::default();
        let reactor = Rc::new(RefCell::new(Noop));

        registrations.add(&reactor);
        registrations.add(&reactor);
        assert_eq!(registrations.len(), 2);

        assert!(registrations.remove(&reactor));
        assert_eq!(registrations.len(), 1);
        assert!(registrations.remove(&reactor));
        assert!(!registrations.remove(&reactor));
        assert!(registrations.is_empty());
    }

    #[test]
    fn test_remove_unregistered_is_noop() {
        let registrations = Registrations::default();
        let registered = Rc::new(RefCell::new(Noop));
        let stranger = Rc::new(RefCell::new(Noop));
        registrations.add(&registered);

        assert!(!registrations.remove(&stranger));
        assert_eq!(registrations.len(), 1);
    }

    #[test]
    fn test_dropped_reactor_is_pruned() {
        let registrations = Registrations::default();
        let kept = Rc::new(RefCell::new(Noop));
        let dropped = Rc::new(RefCell::new(Noop));
        registrations.add(&dropped);
        registrations.add(&kept);

        drop(dropped);

        assert_eq!(registrations.len(), 1);
        assert_eq!(registrations.snapshot().len(), 1);
        assert_eq!(registrations.entries.borrow().len(), 1);
    }

    #[test]
    fn test_clones_share_list() {
        let registrations = Registrations::default();
        let handle = registrations.clone();
        let reactor = Rc::new(RefCell::new(Noop));

        handle.add(&reactor);

        assert_eq!(registrations.len(), 1);
    }
}
