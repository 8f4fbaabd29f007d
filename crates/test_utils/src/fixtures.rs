//! Canned JSON payloads for HTTP-level tests
//!
//! These mirror what the entry forms actually send: camelCase keys,
//! every field present, dates as plain strings.

use serde_json::{json, Value};

/// A valid client creation body
pub fn client_payload() -> Value {
    json!({
        "firstName": "علي",
        "lastName": "بن يوسف",
        "fatherName": "محمد",
        "motherFirstName": "فاطمة",
        "motherLastName": "حداد",
        "birthDate": "1980-03-14",
        "birthPlace": "الجلفة",
        "documentType": "id_card",
        "documentNumber": "123456789",
        "documentIssueDate": "2019-06-01",
        "wilaya": "الجلفة",
        "municipality": "حاسي بحبح",
        "phoneNumber": "0555000000"
    })
}

/// A valid tribunal-level case creation body for `client_id`.
///
/// Pass the bare UUID (`id.as_uuid()`), which is the wire form of ids.
pub fn case_payload(client_id: impl ToString) -> Value {
    json!({
        "clientId": client_id.to_string(),
        "caseNumber": "2024/01234",
        "sessionNumber": "05",
        "level": "المحكمة (Tribunal)",
        "wilaya": "الجلفة",
        "court": "محكمة الجلفة",
        "section": "القسم المدني",
        "subject": "نزاع عقاري",
        "details": "تفاصيل النزاع"
    })
}

/// A valid legal text creation body
pub fn legal_text_payload() -> Value {
    json!({
        "title": "القانون المدني الجزائري",
        "category": "civil_law",
        "articleNumber": "المادة 124",
        "content": "كل عمل أيا كان يرتكبه المرء ويسبب ضررا للغير يلزم من كان سببا في حدوثه بالتعويض.",
        "publishDate": "1975-09-26",
        "officialGazetteNumber": "78",
        "tags": ["مسؤولية مدنية", "تعويض"],
        "isActive": true
    })
}
