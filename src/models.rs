use serde::{Deserialize, Serialize};

/// A stored payment card record as the server returns it. Ids are always
/// server-assigned; the client never invents one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRecord {
    #[serde(rename = "_id")]
    pub id: String,
    pub card_number: String,
    pub card_holder_name: String,
    /// "MM/YY"
    pub expiry_date: String,
    pub cvv: String,
}

/// The four mutable card fields. Doubles as the add/update request body and
/// as the edit form draft.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDraft {
    pub card_number: String,
    pub card_holder_name: String,
    pub expiry_date: String,
    pub cvv: String,
}

impl From<&PaymentRecord> for PaymentDraft {
    fn from(record: &PaymentRecord) -> Self {
        Self {
            card_number: record.card_number.clone(),
            card_holder_name: record.card_holder_name.clone(),
            expiry_date: record.expiry_date.clone(),
            cvv: record.cvv.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email: String,
    pub password: String,
}

/// Login answers with a token, registration with just a message.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub token: Option<String>,
    pub message: Option<String>,
}

/// Generic { message } payload (delete confirmations, error bodies).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiMessage {
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_record_reads_mongo_style_wire_names() {
        let record: PaymentRecord = serde_json::from_str(
            r#"{
                "_id": "abc123",
                "cardNumber": "4111111111111111",
                "cardHolderName": "A Smith",
                "expiryDate": "09/27",
                "cvv": "123",
                "userId": "u1",
                "__v": 0
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, "abc123");
        assert_eq!(record.card_number, "4111111111111111");
        assert_eq!(record.card_holder_name, "A Smith");
        assert_eq!(record.expiry_date, "09/27");
        assert_eq!(record.cvv, "123");
    }

    #[test]
    fn payment_draft_serializes_camel_case() {
        let draft = PaymentDraft {
            card_number: "4111111111111111".into(),
            card_holder_name: "A Smith".into(),
            expiry_date: "09/27".into(),
            cvv: "123".into(),
        };

        let json = serde_json::to_value(&draft).unwrap();
        assert_eq!(json["cardNumber"], "4111111111111111");
        assert_eq!(json["cardHolderName"], "A Smith");
        assert_eq!(json["expiryDate"], "09/27");
        assert_eq!(json["cvv"], "123");
    }

    #[test]
    fn register_request_serializes_camel_case() {
        let request = RegisterRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            date_of_birth: "1815-12-10".into(),
            phone_number: "+44 20 7946 0000".into(),
            email: "ada@example.com".into(),
            password: "secret".into(),
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["dateOfBirth"], "1815-12-10");
        assert_eq!(json["phoneNumber"], "+44 20 7946 0000");
    }

    #[test]
    fn auth_response_token_is_optional() {
        let login: AuthResponse = serde_json::from_str(r#"{"token":"jwt"}"#).unwrap();
        assert_eq!(login.token.as_deref(), Some("jwt"));

        let register: AuthResponse =
            serde_json::from_str(r#"{"message":"User registered"}"#).unwrap();
        assert!(register.token.is_none());
        assert_eq!(register.message.as_deref(), Some("User registered"));
    }

    #[test]
    fn draft_from_record_copies_the_mutable_fields() {
        let record = PaymentRecord {
            id: "abc123".into(),
            card_number: "4111111111111111".into(),
            card_holder_name: "A Smith".into(),
            expiry_date: "09/27".into(),
            cvv: "123".into(),
        };

        let draft = PaymentDraft::from(&record);
        assert_eq!(draft.card_number, record.card_number);
        assert_eq!(draft.cvv, record.cvv);
    }
}
