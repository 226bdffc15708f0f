use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
};

pub trait AuthService: Send + Sync {
    /// Verifies HTTP Basic credentials against the stored password hash and
    /// resolves the request principal.
    fn authenticate(
        &self,
        username: String,
        password: String,
    ) -> impl Future<Output = Result<Identity, CoreError>> + Send;
}
