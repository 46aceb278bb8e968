#[cfg(test)]
mod validation_tests {
    use crate::models::form::BookingFormData;
    use crate::services::validation::{validate, ValidationError};
    use crate::tests::fixtures::valid_form;

    #[test]
    fn test_valid_form_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn test_missing_name_reports_full_name_regardless_of_other_fields() {
        let mut form = valid_form();
        form.last_name = String::new();
        assert_eq!(validate(&form), Err(ValidationError::FullName));

        // Every other field empty too, still the name error
        let form = BookingFormData {
            first_name: "Ada".to_string(),
            ..Default::default()
        };
        assert_eq!(validate(&form), Err(ValidationError::FullName));

        let mut form = valid_form();
        form.first_name = "   ".to_string();
        assert_eq!(validate(&form), Err(ValidationError::FullName));
    }

    #[test]
    fn test_first_failing_check_wins() {
        let mut form = valid_form();
        form.first_name = String::new();
        form.email = "not-an-email".to_string();

        let error = validate(&form).unwrap_err();
        assert_eq!(error, ValidationError::FullName);
        assert_eq!(error.to_string(), "Please enter your full name.");

        let mut form = valid_form();
        form.phone_number = String::new();
        form.cvv = "1".to_string();
        form.street = String::new();
        assert_eq!(validate(&form), Err(ValidationError::PhoneNumber));
    }

    #[test]
    fn test_email_pattern() {
        let accepted = ["a@b.co", "first.last@sub.example.org", "x+tag@host.io"];
        for email in accepted {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(validate(&form), Ok(()), "{} should pass", email);
        }

        let rejected = ["", "plain", "a@b", "a@@b.co", "a b@c.io", "@b.co", "a@.co", "a@b."];
        for email in rejected {
            let mut form = valid_form();
            form.email = email.to_string();
            assert_eq!(validate(&form), Err(ValidationError::Email), "{:?} should fail", email);
        }
    }

    #[test]
    fn test_card_number_strips_whitespace() {
        let mut form = valid_form();
        form.card_number = "4111 1111 1111 1111".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.card_number = "411111111111".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.card_number = "4111\t1111 1111 1111 111".to_string();
        assert_eq!(validate(&form), Ok(()));

        for card in ["123", "41111111111", "41111111111111111111", "4111-1111-1111-1111"] {
            form.card_number = card.to_string();
            assert_eq!(validate(&form), Err(ValidationError::CardNumber), "{}", card);
        }
    }

    #[test]
    fn test_cvv_length() {
        let mut form = valid_form();

        form.cvv = "12".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Cvv));

        form.cvv = "123".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.cvv = "1234".to_string();
        assert_eq!(validate(&form), Ok(()));

        form.cvv = "12345".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Cvv));

        form.cvv = "12a".to_string();
        assert_eq!(validate(&form), Err(ValidationError::Cvv));
    }

    #[test]
    fn test_remaining_required_fields() {
        let mut form = valid_form();
        form.expiration_date = String::new();
        assert_eq!(
            validate(&form).unwrap_err().to_string(),
            "Please enter card expiration date."
        );

        let mut form = valid_form();
        form.street = String::new();
        assert_eq!(
            validate(&form).unwrap_err().to_string(),
            "Please enter billing street address."
        );

        // City, state, zip and country are not checked
        let mut form = valid_form();
        form.city = String::new();
        form.state = String::new();
        form.zip = String::new();
        form.country = String::new();
        assert_eq!(validate(&form), Ok(()));
    }
}
