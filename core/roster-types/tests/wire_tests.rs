use roster_types::{CreatedResponse, ErrorBody, StudentFields, StudentId, StudentRecord};
use serde_json::json;

#[test]
fn record_uses_lowercase_wire_names() {
    let record = StudentRecord::from_parts(
        StudentId::new(1),
        StudentFields::new("John", "Doe", "john@example.com").unwrap(),
    );
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        json!({"id": 1, "name": "John", "surname": "Doe", "email": "john@example.com"})
    );
}

#[test]
fn created_response_shape() {
    let body = CreatedResponse {
        message: "Student successfully added!".into(),
        id: StudentId::new(5),
        student: StudentFields::new("A", "B", "c@d.e").unwrap(),
    };
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({
            "message": "Student successfully added!",
            "id": 5,
            "student": {"name": "A", "surname": "B", "email": "c@d.e"}
        })
    );
}

#[test]
fn error_body_tolerates_missing_fields() {
    let body: ErrorBody = serde_json::from_str(r#"{"message":"gone"}"#).unwrap();
    assert_eq!(body.error, "");
    assert_eq!(body.display_text(), "gone");
}

#[test]
fn error_body_display_falls_back_to_error_kind() {
    let body: ErrorBody = serde_json::from_str(r#"{"error":"Bad Request"}"#).unwrap();
    assert_eq!(body.display_text(), "Bad Request");

    let empty: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(empty.display_text(), "Unknown error");
}
