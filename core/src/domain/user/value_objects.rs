pub struct RegisterUserInput {
    pub username: String,
    /// Raw password; hashing happens in the service. Absent and too-short
    /// passwords are rejected before any hashing is attempted.
    pub password: Option<String>,
    pub email: String,
    pub name: String,
}
