use atlas_core::forms::LoginForm;
use atlas_core::route::Route;
use std::sync::Arc;

use crate::session_store::SessionStore;

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

/// Login form.
pub struct LoginView {
    store: Arc<SessionStore>,
    pub form: LoginForm,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoginView {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self {
            store,
            form: LoginForm::default(),
            loading: false,
            error: None,
        }
    }

    /// Validates and submits the form.
    ///
    /// Returns the route to navigate to on success. Validation failures never
    /// reach the backend.
    pub async fn submit(&mut self) -> Option<Route> {
        if let Err(e) = self.form.validate() {
            self.error = Some(e.to_string());
            return None;
        }

        self.loading = true;
        self.error = None;
        let result = self
            .store
            .login(&self.form.username, &self.form.password)
            .await;
        self.loading = false;

        match result {
            Ok(_) => Some(Route::Query),
            Err(e) => {
                self.error = Some(e.user_message(LOGIN_FAILED));
                None
            }
        }
    }
}
