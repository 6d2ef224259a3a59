// ============================================================
// ✅ VALIDACIÓN - reglas de formularios
// ============================================================

pub const MAX_FULL_NAME: usize = 80;
pub const MAX_CATEGORY_NAME: usize = 100;
pub const MAX_CATEGORY_DESCRIPTION: usize = 500;
pub const MIN_PASSWORD: usize = 6;

/// algo@algo.algo, sin espacios. Suficiente para el formulario; el backend
/// valida en serio.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.contains(char::is_whitespace)
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD
}

/// Teléfono vietnamita: 10 dígitos empezando por 0.
pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.starts_with('0') && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_full_name(name: &str) -> bool {
    let name = name.trim();
    !name.is_empty() && name.chars().count() <= MAX_FULL_NAME
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("an.nguyen@example.com"));
        assert!(!is_valid_email("an.nguyen"));
        assert!(!is_valid_email("an@nguyen"));
        assert!(!is_valid_email("an nguyen@example.com"));
        assert!(!is_valid_email("an@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn phone_is_ten_digits_starting_with_zero() {
        assert!(is_valid_phone("0912345678"));
        assert!(!is_valid_phone("912345678"));
        assert!(!is_valid_phone("09123456789"));
        assert!(!is_valid_phone("091234567a"));
    }

    #[test]
    fn password_minimum_length() {
        assert!(is_valid_password("123456"));
        assert!(!is_valid_password("12345"));
    }

    #[test]
    fn full_name_trimmed_and_bounded() {
        assert!(is_valid_full_name("Nguyễn Văn An"));
        assert!(!is_valid_full_name("   "));
        assert!(!is_valid_full_name(&"a".repeat(81)));
        assert!(is_valid_full_name(&"a".repeat(80)));
    }
}
