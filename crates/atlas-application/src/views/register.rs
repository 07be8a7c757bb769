use atlas_core::backend::AtlasBackend;
use atlas_core::forms::RegisterForm;
use atlas_core::route::Route;
use std::sync::Arc;

pub const REGISTER_SUCCESS: &str = "Registration successful! Redirecting to login...";
pub const REGISTER_FAILED: &str = "Registration failed. Username may already exist.";

/// Registration form. Registering does not log the user in.
pub struct RegisterView {
    backend: Arc<dyn AtlasBackend>,
    pub form: RegisterForm,
    pub loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl RegisterView {
    pub fn new(backend: Arc<dyn AtlasBackend>) -> Self {
        Self {
            backend,
            form: RegisterForm::default(),
            loading: false,
            error: None,
            success: None,
        }
    }

    /// Validates and submits the form; on success navigates to the login view.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(e) = self.form.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        self.success = None;
        let result = self
            .backend
            .register(&self.form.username, &self.form.password)
            .await;
        self.loading = false;

        match result {
            Ok(user) => {
                tracing::info!("Registered user '{}' (id {})", user.username, user.id);
                self.success = Some(REGISTER_SUCCESS.to_string());
                Some(Route::Login)
            }
            Err(e) => {
                self.error = Some(e.user_message(REGISTER_FAILED));
                None
            }
        }
    }
}
