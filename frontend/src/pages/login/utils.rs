pub fn validate_email(email: &str) -> Result<(), String> {
    if email.trim().is_empty() {
        return Err("Email is required".into());
    }
    if !email.contains('@') {
        return Err("Email must contain an @".into());
    }
    if !is_well_formed(email) {
        return Err("Invalid email format (e.g. name@example.com)".into());
    }
    Ok(())
}

pub fn validate_credentials(email: &str, password: &str) -> Result<(), String> {
    validate_email(email)?;
    if password.is_empty() {
        return Err("Password is required".into());
    }
    Ok(())
}

fn is_well_formed(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if parts.next().is_some() {
        return false;
    }
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => {
            !host.is_empty() && !tld.is_empty() && !domain.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_email_is_rejected() {
        assert!(validate_email("").is_err());
        assert!(validate_email("   ").is_err());
    }

    #[test]
    fn email_without_at_sign_is_rejected() {
        let error = validate_email("nobody.example.com").unwrap_err();
        assert!(error.contains('@'));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        assert!(validate_email("a@b").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("a@.com").is_err());
        assert!(validate_email("a@b.").is_err());
        assert!(validate_email("a b@example.com").is_err());
        assert!(validate_email("a@b@example.com").is_err());
    }

    #[test]
    fn well_formed_email_passes() {
        assert!(validate_email("name@example.com").is_ok());
        assert!(validate_email("first.last@mail.example.org").is_ok());
    }

    #[test]
    fn credentials_need_a_password() {
        assert!(validate_credentials("name@example.com", "").is_err());
        assert!(validate_credentials("name@example.com", "secret").is_ok());
    }
}
