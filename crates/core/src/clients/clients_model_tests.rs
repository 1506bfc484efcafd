//! Tests for client domain models.

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use crate::clients::{ClientUpdate, NewClient};

    fn new_client() -> NewClient {
        NewClient {
            first_name: "Petr".to_string(),
            last_name: "Svoboda".to_string(),
            email: "petr@example.com".to_string(),
            phone: "+420 777 123 456".to_string(),
            age: 35,
            occupation: "Programátor".to_string(),
            income: dec!(85000),
            notes: String::new(),
            last_contact: None,
        }
    }

    #[test]
    fn test_new_client_valid() {
        assert!(new_client().validate().is_ok());
    }

    #[test]
    fn test_new_client_requires_a_name() {
        let client = NewClient {
            first_name: "  ".to_string(),
            last_name: String::new(),
            ..new_client()
        };
        assert!(client.validate().is_err());
    }

    #[test]
    fn test_new_client_single_name_part_is_enough() {
        let client = NewClient {
            first_name: String::new(),
            last_name: "Svoboda".to_string(),
            ..new_client()
        };
        assert!(client.validate().is_ok());
    }

    #[test]
    fn test_new_client_rejects_negative_income() {
        let client = NewClient {
            income: dec!(-1),
            ..new_client()
        };
        assert!(client.validate().is_err());
    }

    #[test]
    fn test_client_update_requires_id() {
        let update = ClientUpdate {
            id: String::new(),
            first_name: "Petr".to_string(),
            last_name: "Svoboda".to_string(),
            email: String::new(),
            phone: String::new(),
            age: 35,
            occupation: String::new(),
            income: dec!(85000),
            notes: String::new(),
            last_contact: None,
        };
        assert!(update.validate().is_err());
    }
}
