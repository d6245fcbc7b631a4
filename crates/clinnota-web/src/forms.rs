//! Contact form input handling
//!
//! Phone masking and client-side validation. Messages are user-facing and
//! in Portuguese.

/// Format free-form input as a Brazilian phone number.
///
/// Keeps at most 11 digits and formats progressively while typing:
/// `(11) 3000-0000` for landlines, `(11) 99999-9999` for mobiles.
pub fn mask_phone(input: &str) -> String {
    let digits: String = input.chars().filter(char::is_ascii_digit).take(11).collect();

    match digits.len() {
        0 => String::new(),
        1..=2 => format!("({digits}"),
        3..=6 => format!("({}) {}", &digits[..2], &digits[2..]),
        7..=10 => format!("({}) {}-{}", &digits[..2], &digits[2..6], &digits[6..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

fn digit_count(s: &str) -> usize {
    s.chars().filter(char::is_ascii_digit).count()
}

fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.split('.').count() >= 2
        && domain.split('.').all(|label| !label.is_empty())
}

/// Validated fields
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

/// Validation failures, at most one per field
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormErrors(Vec<(Field, &'static str)>);

impl FormErrors {
    pub fn get(&self, field: Field) -> Option<&'static str> {
        self.0.iter().find(|(f, _)| *f == field).map(|(_, msg)| *msg)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn push(&mut self, field: Field, message: &'static str) {
        self.0.push((field, message));
    }
}

impl ContactForm {
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.push(Field::Name, "Informe seu nome completo");
        } else if name.chars().count() < 3 {
            errors.push(Field::Name, "O nome deve ter pelo menos 3 caracteres");
        }

        let email = self.email.trim();
        if email.is_empty() {
            errors.push(Field::Email, "Informe seu e-mail");
        } else if !is_valid_email(email) {
            errors.push(Field::Email, "Informe um e-mail válido");
        }

        let phone_digits = digit_count(&self.phone);
        if phone_digits != 0 && !(10..=11).contains(&phone_digits) {
            errors.push(Field::Phone, "O telefone deve ter 10 ou 11 dígitos");
        }

        if self.subject.trim().is_empty() {
            errors.push(Field::Subject, "Informe o assunto");
        }

        let message = self.message.trim();
        if message.is_empty() {
            errors.push(Field::Message, "Escreva sua mensagem");
        } else if message.chars().count() < 10 {
            errors.push(Field::Message, "A mensagem deve ter pelo menos 10 caracteres");
        }

        errors
    }
}
