//! Login and registration

use super::ViewSync;
use crate::model::Credentials;
use crate::surface::{Modal, Surface};
use crate::transport::Transport;

const MISSING_CREDENTIALS: &str = "Please enter username and password";
const INVALID_LOGIN: &str = "Invalid login credentials";
const REGISTERED: &str = "Registered successfully";
const REGISTER_FAILED: &str = "Registration failed";
const SERVER_ERROR: &str = "Server error. Try again.";

impl<T: Transport, S: Surface> ViewSync<T, S> {
    /// Log in and reload the page so server-rendered chrome picks up the session
    pub async fn login(&self, username: &str, password: &str) {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            self.surface.notify(MISSING_CREDENTIALS);
            return;
        }

        match self.api.login(&Credentials { username, password }).await {
            Ok(reply) if reply.success => {
                log::info!("Logged in as {}", username);
                self.surface.close_modal(Modal::Login);
                self.surface.reload_after(self.config.login_reload_delay_ms);
            }
            Ok(reply) => {
                self.surface
                    .notify(reply.message.as_deref().unwrap_or(INVALID_LOGIN));
            }
            Err(e) => {
                log::error!("Login error: {}", e);
                self.surface.notify(SERVER_ERROR);
            }
        }
    }

    pub async fn register(&self, username: &str, password: &str) {
        match self.api.register(&Credentials { username, password }).await {
            Ok(reply) if reply.is_success() => {
                self.surface.notify(REGISTERED);
                self.surface.close_modal(Modal::Register);
                self.surface.open_modal(Modal::Login);
            }
            Ok(reply) => {
                self.surface
                    .notify(reply.message.as_deref().unwrap_or(REGISTER_FAILED));
            }
            Err(e) => {
                log::error!("Register error: {}", e);
                self.surface.notify(SERVER_ERROR);
            }
        }
    }

    /// Send the user home with the login modal requested
    pub fn go_to_login(&self) {
        self.surface.navigate(&self.config.login_prompt_url);
    }

    /// Open the login modal when the page query carries `login=true`
    pub fn open_login_if_requested(&self, query: &str) {
        let requested = query
            .trim_start_matches('?')
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .any(|(key, value)| key == "login" && value == "true");
        if requested {
            self.surface.open_modal(Modal::Login);
        }
    }
}
