//! Test Data Builders
//!
//! Builder patterns for constructing test data with sensible defaults.
//! Tests specify only the relevant fields and rely on defaults for
//! everything else; defaults form a fully valid payload.

use core_kernel::ClientId;
use domain_case::{JudicialLevel, NewCase};
use domain_client::{NewClient, Opposition};
use domain_legal::NewLegalText;

/// Builder for client creation payloads
pub struct ClientBuilder {
    fields: NewClient,
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientBuilder {
    /// Creates a builder with a fully valid default client
    pub fn new() -> Self {
        Self {
            fields: NewClient {
                first_name: "علي".to_string(),
                last_name: "بن يوسف".to_string(),
                father_name: "محمد".to_string(),
                mother_first_name: "فاطمة".to_string(),
                mother_last_name: "حداد".to_string(),
                birth_date: "1980-03-14".to_string(),
                birth_place: "الجلفة".to_string(),
                document_number: "123456789".to_string(),
                wilaya: "الجلفة".to_string(),
                municipality: "حاسي بحبح".to_string(),
                phone_number: "0555000000".to_string(),
                ..Default::default()
            },
        }
    }

    /// Sets the first name
    pub fn first_name(mut self, value: impl Into<String>) -> Self {
        self.fields.first_name = value.into();
        self
    }

    /// Sets the last name
    pub fn last_name(mut self, value: impl Into<String>) -> Self {
        self.fields.last_name = value.into();
        self
    }

    /// Sets the phone number
    pub fn phone_number(mut self, value: impl Into<String>) -> Self {
        self.fields.phone_number = value.into();
        self
    }

    /// Attaches an opposing party
    pub fn opposition(mut self, opposition: Opposition) -> Self {
        self.fields.opposition = Some(opposition);
        self
    }

    /// Blanks every required field, producing an invalid payload
    pub fn missing_required(mut self) -> Self {
        self.fields.first_name = String::new();
        self.fields.last_name = String::new();
        self.fields.father_name = String::new();
        self.fields.mother_first_name = String::new();
        self.fields.mother_last_name = String::new();
        self.fields.phone_number = String::new();
        self
    }

    /// Returns the payload
    pub fn build(self) -> NewClient {
        self.fields
    }
}

/// Builder for case creation payloads
pub struct CaseBuilder {
    fields: NewCase,
}

impl CaseBuilder {
    /// Creates a builder for a valid tribunal-level case owned by
    /// `client_id`
    pub fn for_client(client_id: ClientId) -> Self {
        Self {
            fields: NewCase {
                client_id: Some(client_id),
                case_number: "2024/01234".to_string(),
                session_number: "05".to_string(),
                level: Some(JudicialLevel::Tribunal),
                wilaya: "الجلفة".to_string(),
                court: "محكمة الجلفة".to_string(),
                section: "القسم المدني".to_string(),
                subject: "نزاع عقاري".to_string(),
                details: String::new(),
                session_date: None,
            },
        }
    }

    /// Sets the judicial level
    pub fn level(mut self, level: JudicialLevel) -> Self {
        self.fields.level = Some(level);
        self
    }

    /// Sets the section
    pub fn section(mut self, value: impl Into<String>) -> Self {
        self.fields.section = value.into();
        self
    }

    /// Sets the subject
    pub fn subject(mut self, value: impl Into<String>) -> Self {
        self.fields.subject = value.into();
        self
    }

    /// Sets the case number
    pub fn case_number(mut self, value: impl Into<String>) -> Self {
        self.fields.case_number = value.into();
        self
    }

    /// Returns the payload
    pub fn build(self) -> NewCase {
        self.fields
    }
}

/// Builder for legal text creation payloads
pub struct LegalTextBuilder {
    fields: NewLegalText,
}

impl Default for LegalTextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LegalTextBuilder {
    /// Creates a builder with a valid civil-code article
    pub fn new() -> Self {
        Self {
            fields: NewLegalText {
                title: "القانون المدني الجزائري".to_string(),
                category: "civil_law".to_string(),
                article_number: "المادة 124".to_string(),
                content:
                    "كل عمل أيا كان يرتكبه المرء ويسبب ضررا للغير يلزم من كان سببا في حدوثه بالتعويض."
                        .to_string(),
                publish_date: "1975-09-26".to_string(),
                official_gazette_number: "78".to_string(),
                tags: vec!["مسؤولية مدنية".to_string(), "تعويض".to_string()],
                ..Default::default()
            },
        }
    }

    /// Sets the title
    pub fn title(mut self, value: impl Into<String>) -> Self {
        self.fields.title = value.into();
        self
    }

    /// Sets the category
    pub fn category(mut self, value: impl Into<String>) -> Self {
        self.fields.category = value.into();
        self
    }

    /// Sets the content
    pub fn content(mut self, value: impl Into<String>) -> Self {
        self.fields.content = value.into();
        self
    }

    /// Returns the payload
    pub fn build(self) -> NewLegalText {
        self.fields
    }
}
