use crate::page::notification::Notification;
use std::time::Instant;

pub const SENT_MESSAGE: &str = "Thanks! Your message has been received.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Name, Field::Email, Field::Message];

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }

    fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }
}

/// Contact form. Submitting never leaves the page: it confirms with a
/// notification and clears the fields.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
    focus: Option<Field>,
}

impl ContactForm {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Message => &mut self.message,
        }
    }

    pub fn focused(&self) -> Option<Field> {
        self.focus
    }

    pub fn focus(&mut self, field: Field) {
        self.focus = Some(field);
    }

    pub fn blur(&mut self) {
        self.focus = None;
    }

    pub fn focus_next(&mut self) {
        self.focus = Some(self.focus.map_or(Field::Name, Field::next));
    }

    pub fn insert(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.value_mut(field).push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focus {
            self.value_mut(field).pop();
        }
    }

    /// Enter submits from the last field and advances from the others.
    pub fn enter(&mut self, notification: &mut Notification, now: Instant) {
        match self.focus {
            Some(Field::Message) => self.submit(notification, now),
            Some(_) => self.focus_next(),
            None => {}
        }
    }

    pub fn submit(&mut self, notification: &mut Notification, now: Instant) {
        log::info!("contact form submitted ({} chars)", self.message.chars().count());
        notification.show(SENT_MESSAGE, now);
        self.reset();
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn typing_goes_to_the_focused_field() {
        let mut form = ContactForm::default();
        form.insert('x');
        assert_eq!(form.value(Field::Name), "");

        form.focus(Field::Email);
        for c in "a@b.c".chars() {
            form.insert(c);
        }
        form.backspace();
        assert_eq!(form.value(Field::Email), "a@b.");
    }

    #[test]
    fn tab_cycles_through_fields() {
        let mut form = ContactForm::default();
        form.focus_next();
        assert_eq!(form.focused(), Some(Field::Name));
        form.focus_next();
        form.focus_next();
        form.focus_next();
        assert_eq!(form.focused(), Some(Field::Name));
    }

    #[test]
    fn submit_notifies_and_resets() {
        let mut form = ContactForm::default();
        let mut note = Notification::new(Duration::from_secs(3));
        let now = Instant::now();

        form.focus(Field::Name);
        form.insert('A');
        form.focus(Field::Message);
        form.insert('!');
        form.enter(&mut note, now);

        assert_eq!(note.message(), Some(SENT_MESSAGE));
        assert_eq!(form.value(Field::Name), "");
        assert_eq!(form.value(Field::Message), "");
        assert_eq!(form.focused(), None);
    }

    #[test]
    fn enter_on_earlier_fields_advances() {
        let mut form = ContactForm::default();
        let mut note = Notification::new(Duration::from_secs(3));
        form.focus(Field::Name);
        form.enter(&mut note, Instant::now());
        assert_eq!(form.focused(), Some(Field::Email));
        assert!(!note.is_visible());
    }
}
