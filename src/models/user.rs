use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,          // ⇔ users.id
    pub email: String,    // ⇔ users.email (UNIQUE)
    pub name: String,     // ⇔ users.name
    #[serde(skip_serializing)]
    pub password_hash: String, // ⇔ users.password_hash
    pub created_at: String, // ⇔ users.created_at (ISO8601)
}
