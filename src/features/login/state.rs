#[derive(Debug, Clone)]
pub enum LoginAction {
    /// Exchange a social provider's identity token for credentials.
    SignIn { social: String, id_token: String },
}

#[derive(Debug, Clone)]
pub enum LoginMutation {
    SetInFlight(bool),
    SetLoggedIn,
    SetNeedsSignUp,
    SetError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginPulse {
    /// Credentials stored; navigate to the main screen.
    LoggedIn,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginState {
    pub in_flight: bool,
    pub logged_in: bool,
    /// The account is unknown; the adapter should start sign-up.
    pub needs_sign_up: bool,
    pub error: Option<String>,
}
