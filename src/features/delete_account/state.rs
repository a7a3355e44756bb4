#[derive(Debug, Clone, Copy)]
pub enum DeleteAccountAction {
    Confirm,
}

#[derive(Debug, Clone)]
pub enum DeleteAccountMutation {
    SetInFlight(bool),
    SetDone,
    SetError(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteAccountPulse {
    /// Credentials are gone; the adapter should return to login.
    SignedOut,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeleteAccountState {
    pub in_flight: bool,
    pub done: bool,
    pub error: Option<String>,
}
