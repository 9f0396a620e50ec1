//! Drives a registration form the way a terminal user would.

use bubbletea_rs::{KeyMsg, Msg};
use bubbletea_validation_field::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use std::sync::{Arc, Mutex};

fn press(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn type_str(form: &mut Form, s: &str) {
    for ch in s.chars() {
        let _ = form.update(press(KeyCode::Char(ch)));
    }
}

struct Registration {
    form: Form,
    name: FieldId,
    surname: FieldId,
    email: FieldId,
    password: FieldId,
    confirm: FieldId,
}

fn registration() -> Registration {
    let mut form = form_new();
    let name = form.add_field(field_new(FieldKind::Name).with_title("Name"));
    let surname = form.add_field(field_new(FieldKind::Name).with_title("Surname"));
    let email = form.add_field(field_new(FieldKind::Email).with_title("Email"));
    let password = form.add_field(field_new(FieldKind::Password).with_title("Password"));
    let confirm = form.add_field(field_new(FieldKind::ConfirmPassword).with_title("Confirm"));
    form.set_companion(password, confirm)
        .expect("password fields pair up");
    Registration {
        form,
        name,
        surname,
        email,
        password,
        confirm,
    }
}

#[test]
fn filling_every_field_makes_the_form_valid() {
    let mut r = registration();
    let _ = r.form.focus_next();

    for text in ["Jane", "Doe", "jane@example.com", "hunter22"] {
        type_str(&mut r.form, text);
        let _ = r.form.update(press(KeyCode::Tab));
    }
    assert!(!r.form.all_valid());

    type_str(&mut r.form, "hunter22");
    assert_eq!(r.form.field(r.confirm).unwrap().result(), ValidationResult::Valid);
    assert!(r.form.all_valid());

    for id in [r.name, r.surname, r.email, r.password] {
        assert!(r.form.field(id).unwrap().is_valid(), "field {id} should be valid");
    }
}

#[test]
fn going_back_to_the_password_invalidates_the_form() {
    let mut r = registration();
    for (id, text) in [
        (r.name, "Jane"),
        (r.surname, "Doe"),
        (r.email, "jane@example.com"),
        (r.password, "hunter22"),
        (r.confirm, "hunter22"),
    ] {
        r.form.set_text(id, text).unwrap();
        r.form.commit(id).unwrap();
    }
    assert!(r.form.all_valid());

    r.form.focus(r.password).unwrap();
    let _ = r.form.update(press(KeyCode::Backspace));

    assert!(!r.form.all_valid());
    let confirm = r.form.field(r.confirm).unwrap();
    assert_eq!(confirm.value(), "");
    assert_eq!(confirm.result(), ValidationResult::Unset);
}

#[test]
fn bad_input_is_reported_with_its_message() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut r = registration();
    r.form.set_observer(move |e: &ValidationEvent| {
        if let Some(message) = &e.error_message {
            sink.lock().unwrap().push(message.clone());
        }
    });

    r.form.set_text(r.name, "J4ne").unwrap();
    r.form.commit(r.name).unwrap();
    r.form.set_text(r.email, "jane@").unwrap();
    r.form.commit(r.email).unwrap();
    r.form.set_text(r.password, "abc").unwrap();
    r.form.commit(r.password).unwrap();

    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 3);
    assert!(seen[2].contains('6'));
    assert_eq!(
        r.form.field(r.name).unwrap().appearance().icon,
        StatusIcon::Invalid
    );
}

#[test]
fn mismatched_confirmation_is_flagged_on_leave() {
    let mut r = registration();
    r.form.set_text(r.password, "hunter22").unwrap();
    r.form.focus(r.confirm).unwrap();
    type_str(&mut r.form, "hunter23");
    assert_eq!(r.form.field(r.confirm).unwrap().result(), ValidationResult::Unset);

    let _ = r.form.update(press(KeyCode::Tab));
    assert_eq!(r.form.focused(), Some(r.name));
    assert_eq!(
        r.form.field(r.confirm).unwrap().result(),
        ValidationResult::Invalid
    );
}
