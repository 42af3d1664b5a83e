//! One-way field observer.
//!
//! Wraps a plain data value and invokes registered callbacks when named
//! fields change. The original transparent-interception design becomes an
//! explicit setter contract here: mutation goes through [`Observed::set`],
//! which names the field being changed and then notifies every subscriber
//! watching that field. Callbacks receive the value by shared reference, so
//! observation stays one-way.

struct Subscription<T> {
    fields: Vec<String>,
    callback: Box<dyn Fn(&T)>,
}

pub struct Observed<T> {
    value: T,
    subscriptions: Vec<Subscription<T>>,
}

impl<T> Observed<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            subscriptions: Vec::new(),
        }
    }

    /// Register a callback for changes to any of `fields`. Builder-style so
    /// registrations chain off construction.
    pub fn on_change(mut self, fields: &[&str], callback: impl Fn(&T) + 'static) -> Self {
        self.subscriptions.push(Subscription {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            callback: Box::new(callback),
        });
        self
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Apply `mutate` to the wrapped value as a change to `field`, then
    /// invoke every callback whose field list contains `field`.
    pub fn set(&mut self, field: &str, mutate: impl FnOnce(&mut T)) {
        mutate(&mut self.value);
        for sub in &self.subscriptions {
            if sub.fields.iter().any(|f| f == field) {
                (sub.callback)(&self.value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Credentials {
        username: String,
        password: String,
    }

    #[test]
    fn callback_fires_for_watched_field_with_updated_value() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();

        let mut user = Observed::new(Credentials::default()).on_change(&["username"], move |c| {
            log.borrow_mut().push(c.username.clone());
        });

        user.set("username", |c| c.username = "ada".to_string());
        user.set("username", |c| c.username = "grace".to_string());

        assert_eq!(seen.borrow().as_slice(), ["ada", "grace"]);
    }

    #[test]
    fn callback_does_not_fire_for_other_fields() {
        let fired = Rc::new(RefCell::new(0u32));
        let count = fired.clone();

        let mut user = Observed::new(Credentials::default())
            .on_change(&["username"], move |_| *count.borrow_mut() += 1);

        user.set("password", |c| c.password = "hunter2".to_string());

        assert_eq!(*fired.borrow(), 0);
        assert_eq!(user.get().password, "hunter2");
    }

    #[test]
    fn one_callback_may_watch_several_fields() {
        let fired = Rc::new(RefCell::new(0u32));
        let count = fired.clone();

        let mut user = Observed::new(Credentials::default())
            .on_change(&["username", "password"], move |_| *count.borrow_mut() += 1);

        user.set("username", |c| c.username = "ada".to_string());
        user.set("password", |c| c.password = "x".to_string());

        assert_eq!(*fired.borrow(), 2);
    }

    #[test]
    fn subscribers_are_independent() {
        let names = Rc::new(RefCell::new(Vec::new()));
        let passwords = Rc::new(RefCell::new(Vec::new()));
        let names_log = names.clone();
        let passwords_log = passwords.clone();

        let mut user = Observed::new(Credentials::default())
            .on_change(&["username"], move |c| {
                names_log.borrow_mut().push(c.username.clone());
            })
            .on_change(&["password"], move |c| {
                passwords_log.borrow_mut().push(c.password.clone());
            });

        user.set("username", |c| c.username = "ada".to_string());

        assert_eq!(names.borrow().len(), 1);
        assert!(passwords.borrow().is_empty());
    }
}
